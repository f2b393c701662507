//! Tests for star-schema normalization
//!
//! Fixtures build flat records directly so the normalizer can be exercised
//! independently of the parser.

use crate::app::models::FlatRecord;

mod normalizer_tests;

/// Create a flat record with the fields the normalizer keys on
pub fn create_test_record(
    code: &str,
    name: &str,
    manager: &str,
    country: &str,
    competency: &str,
    category: &str,
) -> FlatRecord {
    FlatRecord {
        code: code.to_string(),
        name: name.to_string(),
        manager: manager.to_string(),
        country: country.to_string(),
        function: "Desarrollador".to_string(),
        competency: competency.to_string(),
        skill_type: "Technical/Core".to_string(),
        category: category.to_string(),
        progress: 50.0,
        ..FlatRecord::default()
    }
}

/// Five records with repeated collaborators, countries and managers
pub fn create_test_batch() -> Vec<FlatRecord> {
    vec![
        create_test_record("IDP001", "Juan Perez", "Maria Lopez", "PE", "React", "Cursos"),
        create_test_record("IDP002", "Ana Ruiz", "Carlos Diaz", "EC", "Docker", "Mentoring"),
        create_test_record("IDP001", "Juan P.", "Maria Lopez", "CR", "Liderazgo", "Cursos"),
        create_test_record("IDP003", "Rosa Vega", "Maria Lopez", "PE", "React", "Proyecto"),
        create_test_record("IDP002", "Ana Ruiz", "Carlos Diaz", "EC", "SQL", "Mentoring"),
    ]
}
