//! Star-schema table export
//!
//! This module flattens star-schema tables into delimited text for download
//! or loading into BI tools. Every value is quoted, embedded quotes are
//! doubled and the output is prefixed with a UTF-8 byte-order mark so
//! spreadsheet software detects the encoding.
//!
//! ## Architecture
//!
//! - [`writer`] - [`TableExporter`] rendering and file output
//! - [`stats`] - Per-table export results
//!
//! ## Usage
//!
//! ```rust
//! use idp_processor::app::services::table_export::TableExporter;
//! use idp_processor::config::ExportConfig;
//! use idp_processor::{normalize, parse_records};
//!
//! let schema = normalize(&parse_records("Código,País\nIDP001,Perú\n"));
//! let exporter = TableExporter::new(ExportConfig::default());
//! let csv = exporter.render_table("Dim_Country", &["id_country", "iso_code"], &schema.dim_country)?;
//!
//! assert_eq!(csv, "\u{FEFF}id_country,iso_code\n\"1\",\"PE\"");
//! # Ok::<(), idp_processor::Error>(())
//! ```

pub mod stats;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use stats::{ExportSummary, ExportedTable};
pub use writer::TableExporter;
