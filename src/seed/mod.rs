// file: src/seed/mod.rs
// description: seed data loading module exports
// reference: internal module structure

pub mod loader;

pub use loader::load_documents;
