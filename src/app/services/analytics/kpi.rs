//! Headline KPI statistics

use super::{count_in_order, mode};
use crate::app::models::FlatRecord;
use crate::config::AnalyticsConfig;
use crate::constants::NO_VALUE;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// KPI statistics for one set of records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiStats {
    /// Mean progress, 0 for no records
    pub avg_progress: f64,
    /// Share of records whose status reads completed or whose progress is exactly 100
    pub completed_percentage: f64,
    pub total_activities: usize,
    /// Distinct collaborator codes
    pub unique_collaborators: usize,
    /// Progress below the risk threshold and not marked pending
    pub critical_risk_count: usize,
    /// Most frequent category, `-` for no records
    pub top_category: String,
    /// Country with most records, `-` for no records
    pub top_country: String,
    /// Country with the highest mean progress, `-` for no records
    pub top_completion_country: String,
}

impl KpiStats {
    /// Statistics for an empty selection
    pub fn empty() -> Self {
        Self {
            avg_progress: 0.0,
            completed_percentage: 0.0,
            total_activities: 0,
            unique_collaborators: 0,
            critical_risk_count: 0,
            top_category: NO_VALUE.to_string(),
            top_country: NO_VALUE.to_string(),
            top_completion_country: NO_VALUE.to_string(),
        }
    }

    pub fn compute(records: &[FlatRecord], config: &AnalyticsConfig) -> Self {
        if records.is_empty() {
            return Self::empty();
        }

        let total = records.len();
        let progress_sum: f64 = records.iter().map(|r| r.progress).sum();

        let completed = records
            .iter()
            .filter(|r| config.is_completed_status(&r.status) || r.progress == 100.0)
            .count();

        let critical_risk_count = records
            .iter()
            .filter(|r| r.progress < config.risk_threshold && !config.is_pending_status(&r.status))
            .count();

        let unique_collaborators = records
            .iter()
            .map(|r| r.code.as_str())
            .collect::<HashSet<_>>()
            .len();

        let categories = count_in_order(records.iter().map(|r| r.category.as_str()));
        let countries = count_in_order(records.iter().map(|r| r.country.as_str()));

        Self {
            avg_progress: progress_sum / total as f64,
            completed_percentage: completed as f64 / total as f64 * 100.0,
            total_activities: total,
            unique_collaborators,
            critical_risk_count,
            top_category: mode(&categories).unwrap_or(NO_VALUE).to_string(),
            top_country: mode(&countries).unwrap_or(NO_VALUE).to_string(),
            top_completion_country: top_average_country(records)
                .unwrap_or(NO_VALUE)
                .to_string(),
        }
    }
}

/// Country with the highest mean progress; earliest country wins a tie
fn top_average_country(records: &[FlatRecord]) -> Option<&str> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();

    for record in records {
        let entry = totals.entry(record.country.as_str()).or_insert_with(|| {
            order.push(record.country.as_str());
            (0.0, 0)
        });
        entry.0 += record.progress;
        entry.1 += 1;
    }

    let mut best: Option<(&str, f64)> = None;
    for country in order {
        let (sum, count) = totals[country];
        let average = sum / count as f64;
        if best.is_none_or(|(_, top)| average > top) {
            best = Some((country, average));
        }
    }
    best.map(|(country, _)| country)
}
