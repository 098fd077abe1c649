// file: src/pipeline/mod.rs
// description: reindex pipeline module exports
// reference: internal module structure

pub mod progress;
pub mod reindex;

pub use progress::ProgressTracker;
pub use reindex::{Failure, Operation, ReindexReport, Reindexer};
