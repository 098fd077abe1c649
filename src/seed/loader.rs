// file: src/seed/loader.rs
// description: reads the local json seed file into documents
// reference: https://docs.rs/serde_json

use crate::error::{ReindexError, Result};
use crate::models::Document;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Loads a JSON array of documents, preserving file order.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    debug!("Reading seed file {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| ReindexError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;

    let documents: Vec<Document> =
        serde_json::from_str(&content).map_err(|source| ReindexError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        "Loaded {} document(s) from {}",
        documents.len(),
        path.display()
    );

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_seed(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("seed.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_loads_documents_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_seed(
            &dir,
            r#"[
                {"id": "b", "text": "second letter"},
                {"id": "a", "text": "first letter", "metadata": {"lang": "en"}}
            ]"#,
        );

        let documents = load_documents(&path).unwrap();
        assert_eq!(
            documents,
            vec![
                Document::new("b", "second letter"),
                Document::new("a", "first letter").with_metadata("lang", "en"),
            ]
        );
    }

    #[test]
    fn test_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = write_seed(&dir, "[]");

        assert!(load_documents(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_documents(&dir.path().join("nope.json")).unwrap_err();

        assert!(matches!(err, ReindexError::SeedRead { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_seed(&dir, r#"[{"id": "a", "text": "#);

        let err = load_documents(&path).unwrap_err();
        assert!(matches!(err, ReindexError::SeedParse { .. }));
    }

    #[test]
    fn test_record_without_id_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_seed(&dir, r#"[{"text": "orphan"}]"#);

        let err = load_documents(&path).unwrap_err();
        assert!(err.to_string().contains("seed.json"));
    }
}
