//! Chart breakdowns over flat records
//!
//! Each breakdown is a plain data series; rendering belongs to the consumer.

use super::count_in_order;
use crate::app::models::FlatRecord;
use crate::constants::{DEFAULT_RANKING_LIMIT, heatmap_buckets, skill_types};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Records per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Skill-type counts for one country
///
/// Any skill type other than cloud or soft skills counts as technical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillMix {
    pub country: String,
    pub technical: usize,
    pub cloud: usize,
    pub soft_skills: usize,
}

/// Colour band for a heatmap average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatLevel {
    /// No progress recorded (average exactly 0)
    Empty,
    /// Below 40
    Critical,
    /// 40 to below 70
    Moderate,
    /// 70 to below 100
    OnTrack,
    Complete,
}

impl HeatLevel {
    pub fn from_average(average: f64) -> Self {
        if average == 0.0 {
            HeatLevel::Empty
        } else if average < 40.0 {
            HeatLevel::Critical
        } else if average < 70.0 {
            HeatLevel::Moderate
        } else if average < 100.0 {
            HeatLevel::OnTrack
        } else {
            HeatLevel::Complete
        }
    }
}

/// Average progress of one country within one category bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub bucket: &'static str,
    pub average: f64,
    pub count: usize,
    pub level: HeatLevel,
}

/// Heatmap cells for one country, one per bucket in bucket order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryHeatmapRow {
    pub country: String,
    pub cells: Vec<HeatmapCell>,
}

/// Mean progress of one collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollaboratorRank {
    /// First name plus initial of the second token, e.g. `Juan P.`
    pub display_name: String,
    pub full_name: String,
    /// Mean progress rounded to the nearest integer
    pub progress: i64,
    pub country: String,
}

/// Every chart series for one set of records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdowns {
    pub category_distribution: Vec<CategoryCount>,
    pub top_competencies: Vec<CategoryCount>,
    pub skill_mix_by_country: Vec<SkillMix>,
    pub progress_heatmap: Vec<CountryHeatmapRow>,
    pub collaborator_ranking: Vec<CollaboratorRank>,
}

/// Competencies listed in the top-skills series
const TOP_COMPETENCY_LIMIT: usize = 5;

impl Breakdowns {
    /// All series with the default ranking length
    pub fn compute(records: &[FlatRecord]) -> Self {
        Self::compute_with_limit(records, DEFAULT_RANKING_LIMIT)
    }

    pub fn compute_with_limit(records: &[FlatRecord], ranking_limit: usize) -> Self {
        Self {
            category_distribution: category_distribution(records),
            top_competencies: top_competencies(records, TOP_COMPETENCY_LIMIT),
            skill_mix_by_country: skill_mix_by_country(records),
            progress_heatmap: progress_heatmap(records),
            collaborator_ranking: collaborator_ranking(records, ranking_limit),
        }
    }
}

/// Records per category in first-seen order
pub fn category_distribution(records: &[FlatRecord]) -> Vec<CategoryCount> {
    count_in_order(records.iter().map(|r| r.category.as_str()))
        .into_iter()
        .map(|(name, count)| CategoryCount { name, count })
        .collect()
}

/// Most requested competencies, highest count first
///
/// Competencies are trimmed and empty ones skipped; equal counts keep
/// first-seen order.
pub fn top_competencies(records: &[FlatRecord], limit: usize) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = count_in_order(
        records
            .iter()
            .map(|r| r.competency.trim())
            .filter(|c| !c.is_empty()),
    )
    .into_iter()
    .map(|(name, count)| CategoryCount { name, count })
    .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Cloud, soft-skill and technical counts per country in first-seen order
pub fn skill_mix_by_country(records: &[FlatRecord]) -> Vec<SkillMix> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut mixes: Vec<SkillMix> = Vec::new();

    for record in records {
        let position = *positions.entry(record.country.as_str()).or_insert_with(|| {
            mixes.push(SkillMix {
                country: record.country.clone(),
                ..SkillMix::default()
            });
            mixes.len() - 1
        });

        let mix = &mut mixes[position];
        match record.skill_type.as_str() {
            skill_types::CLOUD_DEVOPS => mix.cloud += 1,
            skill_types::SOFT_SKILLS_AGILE => mix.soft_skills += 1,
            _ => mix.technical += 1,
        }
    }

    mixes
}

/// Heatmap bucket for a raw category value
pub fn category_bucket(category: &str) -> &'static str {
    let lower = category.to_lowercase();
    heatmap_buckets::RULES
        .iter()
        .find(|(_, fragments)| fragments.iter().any(|f| lower.contains(f)))
        .map(|(bucket, _)| *bucket)
        .unwrap_or(heatmap_buckets::OTHER)
}

/// Mean progress per country (sorted, non-empty) and category bucket
pub fn progress_heatmap(records: &[FlatRecord]) -> Vec<CountryHeatmapRow> {
    let countries: BTreeSet<&str> = records
        .iter()
        .map(|r| r.country.as_str())
        .filter(|c| !c.is_empty())
        .collect();

    let buckets: Vec<&'static str> = heatmap_buckets::RULES
        .iter()
        .map(|(bucket, _)| *bucket)
        .chain(std::iter::once(heatmap_buckets::OTHER))
        .collect();

    let mut totals: HashMap<(&str, &'static str), (f64, usize)> = HashMap::new();
    for record in records {
        let entry = totals
            .entry((record.country.as_str(), category_bucket(&record.category)))
            .or_insert((0.0, 0));
        entry.0 += record.progress;
        entry.1 += 1;
    }

    countries
        .into_iter()
        .map(|country| CountryHeatmapRow {
            country: country.to_string(),
            cells: buckets
                .iter()
                .map(|&bucket| {
                    let (sum, count) = totals.get(&(country, bucket)).copied().unwrap_or((0.0, 0));
                    let average = if count == 0 { 0.0 } else { sum / count as f64 };
                    HeatmapCell {
                        bucket,
                        average,
                        count,
                        level: HeatLevel::from_average(average),
                    }
                })
                .collect(),
        })
        .collect()
}

/// Collaborators by mean progress, highest first, at most `limit` entries
///
/// Collaborators are keyed by code, or by name when the code is empty; the
/// name and country of their first record are reported.
pub fn collaborator_ranking(records: &[FlatRecord], limit: usize) -> Vec<CollaboratorRank> {
    struct Accumulator<'a> {
        name: &'a str,
        country: &'a str,
        total: f64,
        count: usize,
    }

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut accumulators: Vec<Accumulator> = Vec::new();

    for record in records {
        let key = if record.code.is_empty() {
            record.name.as_str()
        } else {
            record.code.as_str()
        };
        let position = *positions.entry(key).or_insert_with(|| {
            accumulators.push(Accumulator {
                name: &record.name,
                country: &record.country,
                total: 0.0,
                count: 0,
            });
            accumulators.len() - 1
        });

        let accumulator = &mut accumulators[position];
        accumulator.total += record.progress;
        accumulator.count += 1;
    }

    let mut ranking: Vec<CollaboratorRank> = accumulators
        .into_iter()
        .map(|a| CollaboratorRank {
            display_name: display_name(a.name),
            full_name: a.name.to_string(),
            progress: round_half_up(a.total / a.count as f64),
            country: a.country.to_string(),
        })
        .collect();

    ranking.sort_by(|a, b| b.progress.cmp(&a.progress));
    ranking.truncate(limit);
    ranking
}

/// `Juan Perez Diaz` -> `Juan P.`; single tokens are returned as-is
pub fn display_name(full_name: &str) -> String {
    let mut tokens = full_name.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(first), Some(second)) => {
            let initial: String = second.chars().take(1).collect();
            format!("{} {}.", first, initial)
        }
        (Some(first), None) => first.to_string(),
        _ => String::new(),
    }
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
