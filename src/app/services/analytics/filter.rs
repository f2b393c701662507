//! Record filtering and filter options

use crate::app::models::FlatRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Country and manager selection; `None` means all
///
/// Values are compared for exact equality against the normalized record
/// fields (country codes such as `PE`, title-cased manager names).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub country: Option<String>,
    pub manager: Option<String>,
}

impl RecordFilter {
    pub fn new(country: Option<String>, manager: Option<String>) -> Self {
        Self { country, manager }
    }

    /// True when neither country nor manager is restricted
    pub fn is_unrestricted(&self) -> bool {
        self.country.is_none() && self.manager.is_none()
    }

    pub fn matches(&self, record: &FlatRecord) -> bool {
        let country_ok = self
            .country
            .as_deref()
            .is_none_or(|country| record.country == country);
        let manager_ok = self
            .manager
            .as_deref()
            .is_none_or(|manager| record.manager == manager);
        country_ok && manager_ok
    }

    /// Matching records in input order
    pub fn apply(&self, records: &[FlatRecord]) -> Vec<FlatRecord> {
        let filtered: Vec<FlatRecord> = records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();

        debug!(
            "Filter country={:?} manager={:?} kept {} of {} records",
            self.country,
            self.manager,
            filtered.len(),
            records.len()
        );
        filtered
    }

    /// Drop a manager selection that the country selection no longer offers
    pub fn reconcile(mut self, options: &FilterOptions) -> Self {
        if let Some(manager) = &self.manager {
            if !options.managers.contains(manager) {
                debug!(
                    "Manager '{}' not available for country {:?}; clearing",
                    manager, self.country
                );
                self.manager = None;
            }
        }
        self
    }
}

/// Values offered for filtering
///
/// Countries always come from the full batch; managers are narrowed to the
/// selected country when there is one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Distinct non-empty countries, sorted
    pub countries: Vec<String>,
    /// Distinct non-empty managers, sorted
    pub managers: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[FlatRecord], selected_country: Option<&str>) -> Self {
        let countries: BTreeSet<&str> = records
            .iter()
            .map(|r| r.country.as_str())
            .filter(|c| !c.is_empty())
            .collect();

        let managers: BTreeSet<&str> = records
            .iter()
            .filter(|r| selected_country.is_none_or(|country| r.country == country))
            .map(|r| r.manager.as_str())
            .filter(|m| !m.is_empty())
            .collect();

        Self {
            countries: countries.into_iter().map(String::from).collect(),
            managers: managers.into_iter().map(String::from).collect(),
        }
    }
}
