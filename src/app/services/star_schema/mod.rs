//! Star-schema normalizer for IDP records
//!
//! This module decomposes a batch of [`FlatRecord`]s into one fact table and
//! six dimension tables. Surrogate IDs are handed out in first-seen order
//! starting at 1, so the same input order always produces the same schema.
//!
//! ## Architecture
//!
//! - [`intern`] - Natural-value to surrogate-ID interning per dimension
//! - [`normalizer`] - Batch decomposition into facts and dimensions
//!
//! ## Usage
//!
//! ```rust
//! use idp_processor::{normalize, parse_records};
//!
//! let records = parse_records("Código,Nombre,País\nIDP001,Ana Ruiz,Perú\nIDP002,Luis Vega,PE\n");
//! let schema = normalize(&records);
//!
//! assert_eq!(schema.facts.len(), 2);
//! assert_eq!(schema.dim_country.len(), 1);
//! assert_eq!(schema.dim_collaborator.len(), 2);
//! ```
//!
//! [`FlatRecord`]: crate::app::models::FlatRecord

pub mod intern;
pub mod normalizer;

#[cfg(test)]
pub mod tests;

pub use intern::DimensionInterner;
pub use normalizer::StarSchemaNormalizer;

use crate::app::models::{FlatRecord, StarSchema};

/// Normalize records with the default "Unclassified" skill-type label
pub fn normalize(records: &[FlatRecord]) -> StarSchema {
    StarSchemaNormalizer::default().normalize(records)
}
