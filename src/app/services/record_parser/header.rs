//! Header resolution for IDP uploads
//!
//! Each header cell is lower-cased and matched by substring containment
//! against the ordered header rules; the first matching rule names the field.

use crate::app::models::FieldId;
use crate::config::HeaderRule;
use tracing::debug;

/// Resolve one header cell to a field, first matching rule wins
pub fn match_header(cell: &str, rules: &[HeaderRule]) -> Option<FieldId> {
    let normalized = cell.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    rules
        .iter()
        .find(|rule| {
            rule.phrases
                .iter()
                .any(|phrase| normalized.contains(phrase.as_str()))
        })
        .map(|rule| rule.field)
}

/// Column-to-field mapping for one upload
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMapping {
    /// Field for each column position; `None` means the column is dropped
    columns: Vec<Option<FieldId>>,

    /// Header cells that were not used (unmatched or duplicate field)
    pub ignored: Vec<String>,
}

impl HeaderMapping {
    /// Build the mapping for a header row
    ///
    /// When several columns resolve to the same field the leftmost one is
    /// kept and the others are listed in `ignored`.
    pub fn resolve(headers: &[String], rules: &[HeaderRule]) -> Self {
        let mut columns = Vec::with_capacity(headers.len());
        let mut claimed = [false; FieldId::ALL.len()];
        let mut ignored = Vec::new();

        for (index, cell) in headers.iter().enumerate() {
            match match_header(cell, rules) {
                Some(field) if !claimed[field.index()] => {
                    claimed[field.index()] = true;
                    debug!("Column {} '{}' -> {}", index, cell, field);
                    columns.push(Some(field));
                }
                Some(field) => {
                    debug!(
                        "Column {} '{}' also maps to {}; keeping the first column",
                        index, cell, field
                    );
                    ignored.push(cell.clone());
                    columns.push(None);
                }
                None => {
                    debug!("Column {} '{}' matches no field", index, cell);
                    ignored.push(cell.clone());
                    columns.push(None);
                }
            }
        }

        Self { columns, ignored }
    }

    /// Field for the given column position
    pub fn field_for(&self, column: usize) -> Option<FieldId> {
        self.columns.get(column).copied().flatten()
    }

    /// Column position that feeds the given field
    pub fn column_of(&self, field: FieldId) -> Option<usize> {
        self.columns.iter().position(|c| *c == Some(field))
    }

    /// Number of columns mapped to a field
    pub fn mapped_count(&self) -> usize {
        self.columns.iter().filter(|c| c.is_some()).count()
    }

    /// True if some column feeds the given field
    pub fn has_field(&self, field: FieldId) -> bool {
        self.column_of(field).is_some()
    }
}
