// file: src/pipeline/reindex.rs
// description: sequential batch driver that deletes and re-creates documents
// reference: drives the search index client one request at a time

use crate::client::{DeleteOutcome, SearchIndex};
use crate::models::Document;
use crate::pipeline::progress::ProgressTracker;
use crate::utils::Validator;
use serde::Serialize;
use tracing::{debug, error, info, warn};

const LOGGED_ERROR_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Delete,
    Index,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub id: String,
    pub operation: Operation,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReindexReport {
    pub total: usize,
    pub deleted: usize,
    pub not_found: usize,
    pub delete_failed: usize,
    pub indexed: usize,
    pub index_failed: usize,
    pub failures: Vec<Failure>,
}

impl ReindexReport {
    /// Only index failures decide the outcome of a run.
    pub fn is_success(&self) -> bool {
        self.index_failed == 0
    }

    pub fn delete_attempts(&self) -> usize {
        self.deleted + self.not_found + self.delete_failed
    }

    pub fn failed_ids(&self, operation: Operation) -> Vec<&str> {
        self.failures
            .iter()
            .filter(|f| f.operation == operation)
            .map(|f| f.id.as_str())
            .collect()
    }
}

pub struct Reindexer<'a, S: SearchIndex> {
    index: &'a S,
    clean: bool,
    progress: ProgressTracker,
}

impl<'a, S: SearchIndex> Reindexer<'a, S> {
    pub fn new(index: &'a S, clean: bool) -> Self {
        Self {
            index,
            clean,
            progress: ProgressTracker::hidden(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressTracker) -> Self {
        self.progress = progress;
        self
    }

    /// Number of requests `run` will issue for `document_count` documents.
    pub fn planned_requests(&self, document_count: usize) -> usize {
        if self.clean {
            document_count * 2
        } else {
            document_count
        }
    }

    /// Deletes every id first when cleaning, then indexes every document,
    /// both in input order. Failures are tallied and never stop the batch.
    pub async fn run(&self, documents: &[Document]) -> ReindexReport {
        let mut report = ReindexReport {
            total: documents.len(),
            ..ReindexReport::default()
        };

        if self.clean {
            self.progress
                .suspend(|| info!("Deleting {} existing document(s)", documents.len()));
            self.progress.start_phase("delete");

            for document in documents {
                self.delete_one(document, &mut report).await;
                self.progress.advance(&document.id);
            }

            self.progress.suspend(|| {
                info!(
                    "Delete phase done: {} deleted, {} not found, {} failed",
                    report.deleted, report.not_found, report.delete_failed
                )
            });
        }

        self.progress
            .suspend(|| info!("Indexing {} document(s)", documents.len()));
        self.progress.start_phase("index");

        for document in documents {
            self.index_one(document, &mut report).await;
            self.progress.advance(&document.id);
        }

        self.progress.finish();
        report
    }

    async fn delete_one(&self, document: &Document, report: &mut ReindexReport) {
        match self.index.delete_document(&document.id).await {
            Ok(DeleteOutcome::Deleted) => {
                debug!("Deleted {}", document.id);
                report.deleted += 1;
            }
            Ok(DeleteOutcome::NotFound) => {
                debug!("Not found, nothing to delete: {}", document.id);
                report.not_found += 1;
            }
            Err(e) => {
                let message = e.to_string();
                self.progress.suspend(|| {
                    warn!(
                        document_id = %document.id,
                        "Failed to delete {}: {}",
                        document.id,
                        Validator::truncate_text(&message, LOGGED_ERROR_CHARS)
                    )
                });
                report.delete_failed += 1;
                report.failures.push(Failure {
                    id: document.id.clone(),
                    operation: Operation::Delete,
                    message,
                });
            }
        }
    }

    async fn index_one(&self, document: &Document, report: &mut ReindexReport) {
        match self.index.index_document(document).await {
            Ok(()) => {
                debug!("Indexed {}", document.id);
                report.indexed += 1;
            }
            Err(e) => {
                let message = e.to_string();
                self.progress.suspend(|| {
                    error!(
                        document_id = %document.id,
                        "Failed to index {}: {}",
                        document.id,
                        Validator::truncate_text(&message, LOGGED_ERROR_CHARS)
                    )
                });
                report.index_failed += 1;
                report.failures.push(Failure {
                    id: document.id.clone(),
                    operation: Operation::Index,
                    message,
                });
            }
        }
    }
}
