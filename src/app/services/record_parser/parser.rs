//! Core IDP upload parser implementation
//!
//! This module provides the main parser orchestration: line splitting,
//! delimiter and header detection, row assembly and per-row post-processing.

use std::path::Path;
use tracing::{debug, info, warn};

use super::code_generator::{CodeGenerator, RandomCodeGenerator};
use super::field_parsers::{classify_skill_type, normalize_country, parse_progress, title_case};
use super::header::HeaderMapping;
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::{detect_delimiter, split_line, split_lines};
use crate::app::models::{FieldId, FlatRecord};
use crate::config::ParserRules;
use crate::{Error, Result};

/// Parser for IDP spreadsheet exports
///
/// This parser focuses on getting every row through:
/// - Delimiter sniffing between `,` and `;`
/// - Quote-aware field splitting
/// - Fuzzy header matching against configurable phrase tables
/// - Defaults for missing or unreadable cells instead of row rejection
#[derive(Debug)]
pub struct RecordParser {
    rules: ParserRules,
    code_generator: Box<dyn CodeGenerator>,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new(ParserRules::default())
    }
}

impl RecordParser {
    /// Create a parser with the given rules and random fallback codes
    pub fn new(rules: ParserRules) -> Self {
        Self::with_code_generator(rules, Box::new(RandomCodeGenerator::new()))
    }

    /// Create a parser with an explicit fallback code source
    pub fn with_code_generator(rules: ParserRules, code_generator: Box<dyn CodeGenerator>) -> Self {
        Self {
            rules,
            code_generator,
        }
    }

    /// Rules this parser works from
    pub fn rules(&self) -> &ParserRules {
        &self.rules
    }

    /// Read and parse an upload from disk
    pub fn parse_file(&mut self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing IDP upload: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        Ok(self.parse(&content))
    }

    /// Parse the full text of one upload
    ///
    /// Fewer than two non-blank lines (no header or no data) yields an empty
    /// result rather than an error.
    pub fn parse(&mut self, raw_text: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let lines = split_lines(raw_text);
        stats.total_lines = lines.len();

        if lines.len() < 2 {
            debug!(
                "Upload has {} non-blank lines; nothing to ingest",
                lines.len()
            );
            return ParseResult {
                records: Vec::new(),
                stats,
            };
        }

        let delimiter = detect_delimiter(lines[0]);
        stats.delimiter = Some(delimiter);

        let headers = split_line(lines[0], delimiter);
        let mapping = HeaderMapping::resolve(&headers, &self.rules.header_rules);
        stats.mapped_columns = mapping.mapped_count();
        stats.ignored_headers = mapping.ignored.clone();
        debug!(
            "Header: delimiter {:?}, {} of {} columns mapped",
            delimiter,
            stats.mapped_columns,
            headers.len()
        );

        if stats.mapped_columns == 0 {
            warn!("No header column matched a known field; records will hold defaults only");
        }

        let records: Vec<FlatRecord> = lines[1..]
            .iter()
            .map(|line| {
                let cells = split_line(line, delimiter);
                self.build_record(&cells, &mapping, &mut stats)
            })
            .collect();

        stats.records_parsed = records.len();
        info!("{}", stats.summary());

        ParseResult { records, stats }
    }

    /// Assemble and post-process one data row
    fn build_record(
        &mut self,
        cells: &[String],
        mapping: &HeaderMapping,
        stats: &mut ParseStats,
    ) -> FlatRecord {
        let mut record = self.assemble_record(cells, mapping, stats);
        self.post_process(&mut record, stats);
        record
    }

    /// Copy mapped cells into a record initialized with defaults
    fn assemble_record(
        &self,
        cells: &[String],
        mapping: &HeaderMapping,
        stats: &mut ParseStats,
    ) -> FlatRecord {
        let mut record = FlatRecord {
            status: self.rules.default_status.clone(),
            category: self.rules.default_category.clone(),
            ..FlatRecord::default()
        };

        for (column, value) in cells.iter().enumerate() {
            let Some(field) = mapping.field_for(column) else {
                continue;
            };

            match field {
                FieldId::Progress => {
                    record.progress = match parse_progress(value) {
                        Some(progress) => progress,
                        None => {
                            if !value.is_empty() {
                                debug!("Unreadable progress '{}', using 0", value);
                                stats.progress_defaulted += 1;
                            }
                            0.0
                        }
                    };
                }
                FieldId::Manager => record.manager = title_case(value),
                other => {
                    if let Some(slot) = record.text_field_mut(other) {
                        *slot = value.clone();
                    }
                }
            }
        }

        record
    }

    /// Country normalization, fallback code, skill-type inference
    fn post_process(&mut self, record: &mut FlatRecord, stats: &mut ParseStats) {
        record.country = normalize_country(&record.country, &self.rules.country_rules);

        if record.code.is_empty() {
            record.code = self
                .code_generator
                .next_code(&self.rules.fallback_code_prefix);
            stats.codes_generated += 1;
            debug!("Row without code assigned '{}'", record.code);
        }

        if record.skill_type.is_empty() {
            record.skill_type = classify_skill_type(
                &record.competency,
                &self.rules.skill_rules,
                &self.rules.fallback_skill_type,
            );
            stats.skill_types_inferred += 1;
        }
    }
}
