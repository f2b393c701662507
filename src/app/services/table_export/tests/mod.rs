//! Tests for star-schema table export

use crate::app::models::{FlatRecord, StarSchema};
use crate::app::services::star_schema::normalize;

mod writer_tests;

/// Schema built from two records sharing a collaborator
pub fn create_test_schema() -> StarSchema {
    let first = FlatRecord {
        code: "IDP001".to_string(),
        name: "Perez, \"Juancho\" Juan".to_string(),
        manager: "Maria Lopez".to_string(),
        country: "PE".to_string(),
        competency: "React".to_string(),
        skill_type: "Technical/Core".to_string(),
        progress: 45.0,
        ..FlatRecord::default()
    };
    let second = FlatRecord {
        competency: "Docker".to_string(),
        skill_type: "Cloud/DevOps".to_string(),
        progress: 100.0,
        ..first.clone()
    };
    normalize(&[first, second])
}
