// file: src/utils/validation.rs
// description: input validation helpers for urls and seed file paths
// reference: input validation patterns

use crate::error::{ReindexError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ReindexError::Validation(format!(
                "Invalid URL format (expected http:// or https://): {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_seed_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ReindexError::Validation(format!(
                "Seed file does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(ReindexError::Validation(format!(
                "Seed path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// Ids are sent as one URL path segment; empty and dot segments would be
    /// dropped or collapsed by URL normalization and address the collection.
    pub fn validate_document_id(id: &str) -> Result<()> {
        if matches!(id, "" | "." | "..") {
            return Err(ReindexError::Validation(format!(
                "Document id {:?} cannot be addressed as a URL path segment",
                id
            )));
        }
        Ok(())
    }

    /// Shortens response bodies for log lines, respecting char boundaries.
    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.len() <= max_length {
            return text.to_string();
        }

        let mut end = max_length;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}
