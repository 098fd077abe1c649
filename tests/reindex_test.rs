//! End-to-end runs of the binary against a mock search service.

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SEED: &str = r#"[
    {"id": "rust-ownership", "text": "Ownership and borrowing", "metadata": {"topic": "rust"}},
    {"id": "tokio-runtime", "text": "Async runtime"},
    {"id": "vector-search", "text": "Embeddings and similarity"}
]"#;

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("seed.json"), SEED).unwrap();
    dir
}

fn reindex(dir: &Path, envs: &[(&str, &str)], args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_doc_reindex"))
        .current_dir(dir)
        .env_clear()
        .envs(envs.iter().copied())
        .args(["--seed", "seed.json", "--color", "false", "--quiet"])
        .args(args)
        .output()
        .unwrap()
}

fn credentials(server: &ServerGuard) -> Vec<(&'static str, String)> {
    vec![
        ("SEARCH_API_URL", server.url()),
        ("SEARCH_API_KEY", "test-key".to_string()),
    ]
}

fn as_refs<'a>(pairs: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
    pairs.iter().map(|(k, v)| (*k, v.as_str())).collect()
}

#[test]
fn test_indexes_every_document_without_deleting() {
    let mut server = Server::new();
    let posts = server
        .mock("POST", "/v1/documents")
        .match_header("authorization", "Bearer test-key")
        .with_status(201)
        .expect(3)
        .create();
    let deletes = server
        .mock("DELETE", Matcher::Any)
        .expect(0)
        .create();

    let dir = workspace();
    let env = credentials(&server);
    let output = reindex(dir.path(), &as_refs(&env), &[]);

    posts.assert();
    deletes.assert();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Indexed 3/3 document(s), 0 failed"), "{stdout}");
}

#[test]
fn test_clean_deletes_each_document_once() {
    let mut server = Server::new();
    let deletes = ["rust-ownership", "tokio-runtime"]
        .map(|id| {
            server
                .mock("DELETE", format!("/v1/documents/{id}").as_str())
                .with_status(200)
                .expect(1)
                .create()
        });
    let missing = server
        .mock("DELETE", "/v1/documents/vector-search")
        .with_status(404)
        .expect(1)
        .create();
    let posts = server
        .mock("POST", "/v1/documents")
        .with_status(200)
        .expect(3)
        .create();

    let dir = workspace();
    let env = credentials(&server);
    let output = reindex(dir.path(), &as_refs(&env), &["--clean"]);

    for mock in &deletes {
        mock.assert();
    }
    missing.assert();
    posts.assert();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Deleted 2/3 document(s), 1 not found, 0 failed"), "{stdout}");
}

#[test]
fn test_index_failure_exits_nonzero_and_logs_id() {
    let mut server = Server::new();
    let ok = server
        .mock("POST", "/v1/documents")
        .match_body(Matcher::Regex(
            r#""id":"(rust-ownership|vector-search)""#.to_string(),
        ))
        .with_status(201)
        .expect(2)
        .create();
    let rejected = server
        .mock("POST", "/v1/documents")
        .match_body(Matcher::PartialJson(json!({ "id": "tokio-runtime" })))
        .with_status(500)
        .with_body("embedding backend down")
        .expect(1)
        .create();

    let dir = workspace();
    let env = credentials(&server);
    let output = reindex(dir.path(), &as_refs(&env), &[]);

    ok.assert();
    rejected.assert();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to index tokio-runtime"), "{stderr}");
    assert!(stderr.contains("embedding backend down"), "{stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Indexed 2/3 document(s), 1 failed"), "{stdout}");
    assert!(stdout.contains("failed ids: tokio-runtime"), "{stdout}");
}

#[test]
fn test_missing_configuration_makes_no_requests() {
    let mut server = Server::new();
    let deletes = server.mock("DELETE", Matcher::Any).expect(0).create();
    let posts = server.mock("POST", Matcher::Any).expect(0).create();

    let dir = workspace();
    let output = reindex(dir.path(), &[("SEARCH_API_KEY", "test-key")], &["--clean"]);

    deletes.assert();
    posts.assert();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Aborting before any request"), "{stderr}");
    assert!(stderr.contains("SEARCH_API_URL"), "{stderr}");
}

#[test]
fn test_writes_run_report() {
    let mut server = Server::new();
    server
        .mock("POST", "/v1/documents")
        .with_status(201)
        .expect(3)
        .create();

    let dir = workspace();
    let env = credentials(&server);
    let output = reindex(dir.path(), &as_refs(&env), &["--report", "out/report.json"]);

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("out/report.json")).unwrap())
            .unwrap();
    assert_eq!(report["success"], true);
    assert_eq!(report["indexed"], 3);
    assert_eq!(report["clean"], false);
}

#[test]
fn test_dot_ids_never_reach_the_collection_endpoint() {
    let mut server = Server::new();
    let collection = server
        .mock("DELETE", Matcher::Regex(r"^/v1/documents/?$".to_string()))
        .expect(0)
        .create();
    let posts = server
        .mock("POST", "/v1/documents")
        .with_status(201)
        .expect(2)
        .create();

    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("seed.json"),
        r#"[{"id": "..", "text": "parent"}, {"id": "", "text": "blank"}]"#,
    )
    .unwrap();
    let env = credentials(&server);
    let output = reindex(dir.path(), &as_refs(&env), &["--clean"]);

    collection.assert();
    posts.assert();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Deleted 0/2 document(s), 0 not found, 2 failed"), "{stdout}");
}
