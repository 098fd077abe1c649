// file: src/exporter/mod.rs
// description: run report export module exports
// reference: internal module structure

pub mod report;

pub use report::{ReportExporter, RunReport};
