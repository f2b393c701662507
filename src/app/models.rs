//! Data models for IDP processing
//!
//! This module contains the flat record produced by the parser and the star
//! schema produced by the normalizer: one fact table plus six dimension tables.

use crate::constants::{DEFAULT_CATEGORY, DEFAULT_STATUS, tables};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Flat Record
// =============================================================================

/// Identifier of a flat-record field
///
/// Header resolution maps each header cell to one of these, and row assembly
/// assigns through [`FlatRecord::text_field_mut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Code,
    Name,
    Manager,
    Country,
    Function,
    Objective,
    Competency,
    SkillType,
    Description,
    StartDate,
    EndDate,
    Status,
    Category,
    Progress,
}

impl FieldId {
    /// Every field, in canonical column order
    pub const ALL: [FieldId; 14] = [
        FieldId::Code,
        FieldId::Name,
        FieldId::Manager,
        FieldId::Country,
        FieldId::Function,
        FieldId::Objective,
        FieldId::Competency,
        FieldId::SkillType,
        FieldId::Description,
        FieldId::StartDate,
        FieldId::EndDate,
        FieldId::Status,
        FieldId::Category,
        FieldId::Progress,
    ];

    /// Position of this field in [`FieldId::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case name
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Code => "code",
            FieldId::Name => "name",
            FieldId::Manager => "manager",
            FieldId::Country => "country",
            FieldId::Function => "function",
            FieldId::Objective => "objective",
            FieldId::Competency => "competency",
            FieldId::SkillType => "skill_type",
            FieldId::Description => "description",
            FieldId::StartDate => "start_date",
            FieldId::EndDate => "end_date",
            FieldId::Status => "status",
            FieldId::Category => "category",
            FieldId::Progress => "progress",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ingested IDP row before dimensional decomposition
///
/// Dates are kept as the opaque strings found in the upload. `progress` is
/// nominally 0-100 but is not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRecord {
    /// Collaborator business code; never empty after parsing
    pub code: String,
    pub name: String,
    pub manager: String,
    /// Normalized country code (e.g. "PE")
    pub country: String,
    pub function: String,
    pub objective: String,
    pub competency: String,
    pub skill_type: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub category: String,
    pub progress: f64,
}

impl Default for FlatRecord {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            manager: String::new(),
            country: String::new(),
            function: String::new(),
            objective: String::new(),
            competency: String::new(),
            skill_type: String::new(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            status: DEFAULT_STATUS.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            progress: 0.0,
        }
    }
}

impl FlatRecord {
    /// Mutable access to a text field, `None` for [`FieldId::Progress`]
    pub fn text_field_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Code => Some(&mut self.code),
            FieldId::Name => Some(&mut self.name),
            FieldId::Manager => Some(&mut self.manager),
            FieldId::Country => Some(&mut self.country),
            FieldId::Function => Some(&mut self.function),
            FieldId::Objective => Some(&mut self.objective),
            FieldId::Competency => Some(&mut self.competency),
            FieldId::SkillType => Some(&mut self.skill_type),
            FieldId::Description => Some(&mut self.description),
            FieldId::StartDate => Some(&mut self.start_date),
            FieldId::EndDate => Some(&mut self.end_date),
            FieldId::Status => Some(&mut self.status),
            FieldId::Category => Some(&mut self.category),
            FieldId::Progress => None,
        }
    }

    /// Read a text field, `None` for [`FieldId::Progress`]
    pub fn text_field(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Code => Some(&self.code),
            FieldId::Name => Some(&self.name),
            FieldId::Manager => Some(&self.manager),
            FieldId::Country => Some(&self.country),
            FieldId::Function => Some(&self.function),
            FieldId::Objective => Some(&self.objective),
            FieldId::Competency => Some(&self.competency),
            FieldId::SkillType => Some(&self.skill_type),
            FieldId::Description => Some(&self.description),
            FieldId::StartDate => Some(&self.start_date),
            FieldId::EndDate => Some(&self.end_date),
            FieldId::Status => Some(&self.status),
            FieldId::Category => Some(&self.category),
            FieldId::Progress => None,
        }
    }
}

// =============================================================================
// Star Schema
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimCountry {
    pub id_country: u32,
    pub iso_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimManager {
    pub id_manager: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimCategory {
    pub id_category: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimCompetency {
    pub id_competency: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimSkillType {
    pub id_skill_type: u32,
    pub name: String,
}

/// Collaborator dimension, keyed by the business code rather than a surrogate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimCollaborator {
    pub id_collaborator: String,
    pub name: String,
    pub function: String,
    /// FK into [`DimCountry`]
    pub id_country: u32,
}

/// One row of the central fact table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactDevelopment {
    pub id_fact: u32,
    pub id_collaborator: String,
    pub id_manager: u32,
    pub id_competency: u32,
    pub id_category: u32,
    pub id_country: u32,
    pub id_skill_type: u32,
    pub objective: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub progress: f64,
}

/// Dimensional model built from one batch of flat records
///
/// Dimension rows are ordered by ascending surrogate ID (first-seen order);
/// facts keep the input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarSchema {
    pub facts: Vec<FactDevelopment>,
    pub dim_country: Vec<DimCountry>,
    pub dim_manager: Vec<DimManager>,
    pub dim_category: Vec<DimCategory>,
    pub dim_competency: Vec<DimCompetency>,
    pub dim_skill_type: Vec<DimSkillType>,
    pub dim_collaborator: Vec<DimCollaborator>,
}

/// Whether a table is the fact table or a dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableRole {
    Fact,
    Dimension,
}

/// Structural description of one star-schema table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub name: &'static str,
    pub role: TableRole,
    pub key_column: &'static str,
    pub columns: &'static [&'static str],
    pub row_count: usize,
}

impl StarSchema {
    /// Structural view of every table, fact table first
    pub fn tables(&self) -> Vec<TableSummary> {
        vec![
            TableSummary {
                name: tables::FACT_DEVELOPMENT,
                role: TableRole::Fact,
                key_column: "id_fact",
                columns: &[
                    "id_fact",
                    "id_collaborator",
                    "id_manager",
                    "id_competency",
                    "id_category",
                    "id_country",
                    "id_skill_type",
                    "objective",
                    "description",
                    "start_date",
                    "end_date",
                    "status",
                    "progress",
                ],
                row_count: self.facts.len(),
            },
            TableSummary {
                name: tables::DIM_COLLABORATOR,
                role: TableRole::Dimension,
                key_column: "id_collaborator",
                columns: &["id_collaborator", "name", "function", "id_country"],
                row_count: self.dim_collaborator.len(),
            },
            TableSummary {
                name: tables::DIM_COUNTRY,
                role: TableRole::Dimension,
                key_column: "id_country",
                columns: &["id_country", "iso_code"],
                row_count: self.dim_country.len(),
            },
            TableSummary {
                name: tables::DIM_MANAGER,
                role: TableRole::Dimension,
                key_column: "id_manager",
                columns: &["id_manager", "name"],
                row_count: self.dim_manager.len(),
            },
            TableSummary {
                name: tables::DIM_CATEGORY,
                role: TableRole::Dimension,
                key_column: "id_category",
                columns: &["id_category", "name"],
                row_count: self.dim_category.len(),
            },
            TableSummary {
                name: tables::DIM_COMPETENCY,
                role: TableRole::Dimension,
                key_column: "id_competency",
                columns: &["id_competency", "name"],
                row_count: self.dim_competency.len(),
            },
            TableSummary {
                name: tables::DIM_SKILL_TYPE,
                role: TableRole::Dimension,
                key_column: "id_skill_type",
                columns: &["id_skill_type", "name"],
                row_count: self.dim_skill_type.len(),
            },
        ]
    }

    /// Number of fact rows
    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    /// True when the schema was built from no records
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
