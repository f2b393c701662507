//! Record parser for IDP uploads
//!
//! This module turns the raw text of one uploaded spreadsheet export into an
//! ordered sequence of [`FlatRecord`]s. Uploads are hand-edited CSV files with
//! Spanish headers, so the parser is heuristic and forgiving: it never rejects
//! a batch because of a bad row.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Parsing orchestration and row assembly
//! - [`tokenizer`] - Line splitting, BOM handling, delimiter sniffing and quoted fields
//! - [`header`] - Header cell resolution into [`FieldId`]s
//! - [`field_parsers`] - Progress coercion, name casing, country and skill-type rules
//! - [`code_generator`] - Fallback collaborator codes
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use idp_processor::app::services::record_parser::RecordParser;
//!
//! let mut parser = RecordParser::default();
//! let result = parser.parse("Código;Nombre;País\nIDP001;Ana Ruiz;Perú\n");
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].country, "PE");
//! ```
//!
//! [`FlatRecord`]: crate::app::models::FlatRecord
//! [`FieldId`]: crate::app::models::FieldId

pub mod code_generator;
pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use code_generator::{CodeGenerator, RandomCodeGenerator, SequentialCodeGenerator};
pub use header::HeaderMapping;
pub use parser::RecordParser;
pub use stats::{ParseResult, ParseStats};

use crate::app::models::FlatRecord;

/// Parse raw upload text with the built-in rules and random fallback codes
pub fn parse_records(raw_text: &str) -> Vec<FlatRecord> {
    RecordParser::default().parse(raw_text).records
}
