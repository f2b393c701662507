//! Batch normalization of flat records into a star schema

use std::collections::HashSet;
use tracing::{debug, info};

use super::intern::DimensionInterner;
use crate::app::models::{
    DimCategory, DimCollaborator, DimCompetency, DimCountry, DimManager, DimSkillType,
    FactDevelopment, FlatRecord, StarSchema,
};
use crate::constants::UNCLASSIFIED_SKILL_TYPE;

/// Decomposes flat records into facts and dimensions
///
/// Every call starts from empty interners, so schemas are never merged
/// across batches and the caller owns the result outright.
#[derive(Debug, Clone)]
pub struct StarSchemaNormalizer {
    unclassified_skill_type: String,
}

impl Default for StarSchemaNormalizer {
    fn default() -> Self {
        Self::new(UNCLASSIFIED_SKILL_TYPE)
    }
}

impl StarSchemaNormalizer {
    /// Create a normalizer using `unclassified_label` for records without a skill type
    pub fn new(unclassified_label: impl Into<String>) -> Self {
        Self {
            unclassified_skill_type: unclassified_label.into(),
        }
    }

    /// Build the star schema for one batch
    ///
    /// Produces exactly one fact per record, in input order. Collaborators
    /// are keyed by code and keep the attributes of their first record.
    pub fn normalize(&self, records: &[FlatRecord]) -> StarSchema {
        let mut countries = DimensionInterner::new();
        let mut managers = DimensionInterner::new();
        let mut categories = DimensionInterner::new();
        let mut competencies = DimensionInterner::new();
        let mut skill_types = DimensionInterner::new();

        let mut seen_collaborators = HashSet::new();
        let mut dim_collaborator = Vec::new();
        let mut facts = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let id_country = countries.intern(&record.country);
            let id_manager = managers.intern(&record.manager);
            let id_category = categories.intern(&record.category);
            let id_competency = competencies.intern(&record.competency);
            let skill_type = if record.skill_type.is_empty() {
                self.unclassified_skill_type.as_str()
            } else {
                record.skill_type.as_str()
            };
            let id_skill_type = skill_types.intern(skill_type);

            if seen_collaborators.insert(record.code.as_str()) {
                dim_collaborator.push(DimCollaborator {
                    id_collaborator: record.code.clone(),
                    name: record.name.clone(),
                    function: record.function.clone(),
                    id_country,
                });
            } else {
                debug!(
                    "Collaborator '{}' already recorded; keeping first attributes",
                    record.code
                );
            }

            facts.push(FactDevelopment {
                id_fact: index as u32 + 1,
                id_collaborator: record.code.clone(),
                id_manager,
                id_competency,
                id_category,
                id_country,
                id_skill_type,
                objective: record.objective.clone(),
                description: record.description.clone(),
                start_date: record.start_date.clone(),
                end_date: record.end_date.clone(),
                status: record.status.clone(),
                progress: record.progress,
            });
        }

        let schema = StarSchema {
            facts,
            dim_country: countries.into_rows(|id_country, iso_code| DimCountry {
                id_country,
                iso_code,
            }),
            dim_manager: managers.into_rows(|id_manager, name| DimManager { id_manager, name }),
            dim_category: categories
                .into_rows(|id_category, name| DimCategory { id_category, name }),
            dim_competency: competencies
                .into_rows(|id_competency, name| DimCompetency {
                    id_competency,
                    name,
                }),
            dim_skill_type: skill_types
                .into_rows(|id_skill_type, name| DimSkillType {
                    id_skill_type,
                    name,
                }),
            dim_collaborator,
        };

        info!(
            "Normalized {} records: {} collaborators, {} countries, {} managers, {} categories, {} competencies, {} skill types",
            schema.facts.len(),
            schema.dim_collaborator.len(),
            schema.dim_country.len(),
            schema.dim_manager.len(),
            schema.dim_category.len(),
            schema.dim_competency.len(),
            schema.dim_skill_type.len()
        );

        schema
    }
}
