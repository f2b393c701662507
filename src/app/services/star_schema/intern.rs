//! Surrogate-key interning
//!
//! One interner per dimension maps each distinct natural value to the ID it
//! received on first sight. IDs start at 1 and never change within a batch.

use std::collections::HashMap;

/// Natural value to surrogate ID table for one dimension
#[derive(Debug, Clone, Default)]
pub struct DimensionInterner {
    ids: HashMap<String, u32>,
    /// Natural values in ID order; position `i` holds ID `i + 1`
    values: Vec<String>,
}

impl DimensionInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID for `value`, assigning the next one if the value is new
    ///
    /// The empty string is an ordinary member.
    pub fn intern(&mut self, value: &str) -> u32 {
        if let Some(&id) = self.ids.get(value) {
            return id;
        }

        self.values.push(value.to_string());
        let id = self.values.len() as u32;
        self.ids.insert(value.to_string(), id);
        id
    }

    /// ID already assigned to `value`, if any
    pub fn get(&self, value: &str) -> Option<u32> {
        self.ids.get(value).copied()
    }

    /// `(id, value)` pairs in ascending ID order
    pub fn entries(&self) -> impl Iterator<Item = (u32, &str)> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| (index as u32 + 1, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build dimension rows in ID order
    pub fn into_rows<T>(self, make_row: impl Fn(u32, String) -> T) -> Vec<T> {
        self.values
            .into_iter()
            .enumerate()
            .map(|(index, value)| make_row(index as u32 + 1, value))
            .collect()
    }
}
