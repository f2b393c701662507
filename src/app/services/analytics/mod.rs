//! Analytics over flat IDP records
//!
//! This module computes everything the reporting layer shows about a batch:
//! record filtering and the options that drive it, headline KPI statistics,
//! chart breakdowns and the aggregated insight-request payload handed to an
//! external text-analysis service. All computations are pure functions of the
//! records they receive.
//!
//! ## Architecture
//!
//! - [`filter`] - Country/manager filtering and dependent filter options
//! - [`kpi`] - Headline statistics (averages, completion, risk, modes)
//! - [`breakdowns`] - Category distribution, skill mix, heatmap, rankings
//! - [`insight`] - Insight request payload and response shape
//!
//! ## Usage
//!
//! ```rust
//! use idp_processor::app::services::analytics::{KpiStats, RecordFilter};
//! use idp_processor::config::AnalyticsConfig;
//! use idp_processor::parse_records;
//!
//! let records = parse_records("Código,País,Progreso\nA1,Perú,80\nA2,Ecuador,20\n");
//! let peru = RecordFilter::new(Some("PE".to_string()), None).apply(&records);
//! let kpis = KpiStats::compute(&peru, &AnalyticsConfig::default());
//!
//! assert_eq!(kpis.total_activities, 1);
//! assert_eq!(kpis.avg_progress, 80.0);
//! ```

pub mod breakdowns;
pub mod filter;
pub mod insight;
pub mod kpi;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use breakdowns::{
    Breakdowns, CategoryCount, CollaboratorRank, CountryHeatmapRow, HeatLevel, HeatmapCell,
    SkillMix,
};
pub use filter::{FilterOptions, RecordFilter};
pub use insight::{InsightRequest, InsightResult, RecordSample, select_insight_dataset};
pub use kpi::KpiStats;

use std::collections::HashMap;

/// Occurrence counts in first-seen key order
///
/// Ties between keys are therefore resolved in favour of the key that
/// appeared first in the input.
pub(crate) fn count_in_order<'a, I>(keys: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for key in keys {
        match positions.get(key) {
            Some(&position) => counts[position].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key.to_string(), 1));
            }
        }
    }

    counts
}

/// Key with the highest count; the earliest key wins a tie
pub(crate) fn mode(counts: &[(String, usize)]) -> Option<&str> {
    let mut best: Option<&(String, usize)> = None;
    for entry in counts {
        if best.is_none_or(|b| entry.1 > b.1) {
            best = Some(entry);
        }
    }
    best.map(|(key, _)| key.as_str())
}
