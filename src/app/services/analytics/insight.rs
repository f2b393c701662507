//! Insight request payload for the text-analysis service
//!
//! The service receives an aggregated summary rather than the full batch:
//! distributions, an at-risk count and small samples. Its answer has a
//! fixed shape, modelled by [`InsightResult`].

use super::count_in_order;
use crate::Result;
use crate::app::models::FlatRecord;
use crate::config::AnalyticsConfig;
use crate::constants::{INSIGHT_COMPETENCY_SAMPLE, INSIGHT_MIN_SUBSET, INSIGHT_RECORD_SAMPLE};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Counts keyed by value, serialized as a JSON object in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution(pub Vec<(String, usize)>);

impl Distribution {
    pub fn get(&self, key: &str) -> Option<usize> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, count)| *count)
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, count) in &self.0 {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

/// Compact view of one record in the request sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSample {
    #[serde(rename = "p")]
    pub country: String,
    #[serde(rename = "c")]
    pub competency: String,
    #[serde(rename = "prog")]
    pub progress: f64,
    #[serde(rename = "cat")]
    pub category: String,
}

/// Aggregated summary sent for analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    pub total_records: usize,
    pub distribution_by_country: Distribution,
    pub distribution_by_category: Distribution,
    /// Progress below the risk threshold and status not exactly the pending label
    pub at_risk_count: usize,
    pub sample_competencies: Vec<String>,
    pub records_sample: Vec<RecordSample>,
}

impl InsightRequest {
    pub fn from_records(records: &[FlatRecord], config: &AnalyticsConfig) -> Self {
        // Exact comparison against the canonical pending label, unlike the
        // keyword match used by the KPI risk count
        let at_risk_count = records
            .iter()
            .filter(|r| {
                r.progress < config.risk_threshold
                    && !config
                        .pending_keywords
                        .iter()
                        .any(|k| r.status.eq_ignore_ascii_case(k))
            })
            .count();

        Self {
            total_records: records.len(),
            distribution_by_country: Distribution(count_in_order(
                records.iter().map(|r| r.country.as_str()),
            )),
            distribution_by_category: Distribution(count_in_order(
                records.iter().map(|r| r.category.as_str()),
            )),
            at_risk_count,
            sample_competencies: records
                .iter()
                .take(INSIGHT_COMPETENCY_SAMPLE)
                .map(|r| r.competency.clone())
                .collect(),
            records_sample: records
                .iter()
                .take(INSIGHT_RECORD_SAMPLE)
                .map(|r| RecordSample {
                    country: r.country.clone(),
                    competency: r.competency.clone(),
                    progress: r.progress,
                    category: r.category.clone(),
                })
                .collect(),
        }
    }

    /// Compact JSON text for embedding in a prompt
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Structured answer returned by the text-analysis service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsightResult {
    pub narrative: String,
    pub strategic_insights: Vec<String>,
    pub risk_analysis: Vec<String>,
    pub recommendations: Vec<String>,
}

impl InsightResult {
    /// Parse the service response body
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Records to analyse: the filtered subset when it is large enough to be
/// meaningful, otherwise the whole batch
pub fn select_insight_dataset<'a>(
    filtered: &'a [FlatRecord],
    all: &'a [FlatRecord],
) -> &'a [FlatRecord] {
    if filtered.len() > INSIGHT_MIN_SUBSET {
        filtered
    } else {
        all
    }
}
