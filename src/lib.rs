// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod pipeline;
pub mod seed;
pub mod utils;

pub use client::{DeleteOutcome, DocumentsClient, SearchIndex};
pub use config::{ApiConfig, Config, SeedConfig};
pub use error::{ReindexError, Result};
pub use exporter::{ReportExporter, RunReport};
pub use models::Document;
pub use pipeline::{Failure, Operation, ProgressTracker, ReindexReport, Reindexer};
pub use seed::load_documents;
pub use utils::Validator;
