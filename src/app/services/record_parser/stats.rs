//! Parsing statistics and result structures for IDP uploads
//!
//! This module provides types for reporting what the parser did with an
//! upload: how many rows it produced and which defaults it had to apply.

use crate::app::models::FlatRecord;
use serde::{Deserialize, Serialize};

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed records, one per data line, in input order
    pub records: Vec<FlatRecord>,

    /// Parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// True when the upload produced no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Non-blank lines, header included
    pub total_lines: usize,

    /// Records produced (always the number of data lines)
    pub records_parsed: usize,

    /// Delimiter chosen from the header, if there was one
    pub delimiter: Option<char>,

    /// Header columns that feed a record field
    pub mapped_columns: usize,

    /// Header cells that were unmatched or duplicated a field
    pub ignored_headers: Vec<String>,

    /// Records that received a synthesized code
    pub codes_generated: usize,

    /// Records whose skill type was inferred from the competency
    pub skill_types_inferred: usize,

    /// Non-empty progress cells that could not be read and became 0
    pub progress_defaulted: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of records that needed a synthesized code, as a percentage
    pub fn generated_code_rate(&self) -> f64 {
        if self.records_parsed == 0 {
            0.0
        } else {
            (self.codes_generated as f64 / self.records_parsed as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} records from {} lines (delimiter {:?}, {} mapped columns, {} ignored) | \
             Generated codes: {} | Inferred skill types: {} | Unreadable progress: {}",
            self.records_parsed,
            self.total_lines,
            self.delimiter.unwrap_or(','),
            self.mapped_columns,
            self.ignored_headers.len(),
            self.codes_generated,
            self.skill_types_inferred,
            self.progress_defaulted
        )
    }
}
