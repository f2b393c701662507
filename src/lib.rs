//! IDP Processor Library
//!
//! A Rust library for turning Individual Development Plan (IDP) spreadsheets,
//! exported as loosely formatted CSV, into a normalized star schema.
//!
//! This library provides tools for:
//! - Parsing comma- or semicolon-delimited IDP exports with Spanish headers
//! - Classifying free-text competencies into controlled skill types
//! - Normalizing flat records into one fact table and six dimension tables
//! - Computing KPI statistics and chart breakdowns over the flat records
//! - Exporting any star-schema table as quoted, BOM-prefixed CSV

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analytics;
        pub mod record_parser;
        pub mod star_schema;
        pub mod table_export;
        pub mod template;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FieldId, FlatRecord, StarSchema};
pub use app::services::record_parser::{RecordParser, parse_records};
pub use app::services::star_schema::normalize;
pub use config::Config;

/// Result type alias for the IDP processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for IDP processing operations
///
/// Parsing and normalization never fail; these cover the edges around them
/// (file access, configuration, export).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Configuration file '{path}' is not valid TOML: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// CSV export error
    #[error("CSV export error for table '{table}': {message}")]
    CsvExport {
        table: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Attempted to export a table without rows
    #[error("Table '{table}' has no rows to export")]
    EmptyTable { table: String },

    /// Input produced no records
    #[error("No valid records found in '{source_name}'. Use the template or check the headers.")]
    NoRecords { source_name: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create a CSV export error with context
    pub fn csv_export(
        table: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvExport {
            table: table.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an empty table error
    pub fn empty_table(table: impl Into<String>) -> Self {
        Self::EmptyTable {
            table: table.into(),
        }
    }

    /// Create a no records error
    pub fn no_records(source_name: impl Into<String>) -> Self {
        Self::NoRecords {
            source_name: source_name.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvExport {
            table: "unknown".to_string(),
            message: "CSV writing failed".to_string(),
            source: Some(error),
        }
    }
}
