// file: src/client/mod.rs
// description: search service api client module exports
// reference: internal module structure

pub mod documents;

pub use documents::{DeleteOutcome, DocumentsClient, SearchIndex};
