// file: src/exporter/report.rs
// description: json export of the reindex run report

use crate::error::Result;
use crate::pipeline::ReindexReport;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub started_at: String,
    pub finished_at: String,
    pub clean: bool,
    pub seed_path: &'a Path,
    pub success: bool,
    #[serde(flatten)]
    pub report: &'a ReindexReport,
}

impl<'a> RunReport<'a> {
    pub fn new(
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        clean: bool,
        seed_path: &'a Path,
        report: &'a ReindexReport,
    ) -> Self {
        Self {
            started_at: started_at.to_rfc3339(),
            finished_at: finished_at.to_rfc3339(),
            clean,
            seed_path,
            success: report.is_success(),
            report,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportExporter {
    output: PathBuf,
}

impl ReportExporter {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    pub fn export(&self, report: &RunReport<'_>) -> Result<()> {
        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(report)?;
        fs::write(&self.output, json)?;

        info!("Wrote run report to {}", self.output.display());
        Ok(())
    }
}
