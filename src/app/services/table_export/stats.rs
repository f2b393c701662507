//! Export results

use serde::Serialize;
use std::path::PathBuf;

/// One table written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedTable {
    pub table: String,
    pub path: PathBuf,
    pub rows: usize,
    pub bytes: u64,
}

/// Outcome of exporting a whole schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// Tables written, in schema order
    pub written: Vec<ExportedTable>,
    /// Tables skipped because they had no rows
    pub skipped: Vec<String>,
}

impl ExportSummary {
    pub fn total_bytes(&self) -> u64 {
        self.written.iter().map(|t| t.bytes).sum()
    }

    pub fn total_rows(&self) -> usize {
        self.written.iter().map(|t| t.rows).sum()
    }
}
