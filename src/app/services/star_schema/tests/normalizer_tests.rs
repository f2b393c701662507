//! Tests for the star-schema normalizer

use super::*;
use crate::app::models::TableRole;
use crate::app::services::record_parser::parse_records;
use crate::app::services::star_schema::{StarSchemaNormalizer, normalize};
use crate::constants::{TEMPLATE_EXAMPLE_ROW, TEMPLATE_HEADERS};
use std::collections::HashSet;

#[test]
fn test_fact_count_matches_records() {
    let records = create_test_batch();
    let schema = normalize(&records);

    assert_eq!(schema.facts.len(), records.len());
    let ids: Vec<u32> = schema.facts.iter().map(|f| f.id_fact).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_dimension_cardinality() {
    let schema = normalize(&create_test_batch());

    assert_eq!(schema.dim_country.len(), 3);
    assert_eq!(schema.dim_manager.len(), 2);
    assert_eq!(schema.dim_category.len(), 3);
    assert_eq!(schema.dim_competency.len(), 4);
    assert_eq!(schema.dim_skill_type.len(), 1);
    assert_eq!(schema.dim_collaborator.len(), 3);
}

#[test]
fn test_ids_assigned_in_first_seen_order() {
    let schema = normalize(&create_test_batch());

    let countries: Vec<(u32, &str)> = schema
        .dim_country
        .iter()
        .map(|c| (c.id_country, c.iso_code.as_str()))
        .collect();
    assert_eq!(countries, vec![(1, "PE"), (2, "EC"), (3, "CR")]);

    let competencies: Vec<&str> = schema
        .dim_competency
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(competencies, vec!["React", "Docker", "Liderazgo", "SQL"]);
}

#[test]
fn test_facts_reference_dimension_ids() {
    let schema = normalize(&create_test_batch());

    let fourth = &schema.facts[3];
    assert_eq!(fourth.id_collaborator, "IDP003");
    assert_eq!(fourth.id_country, 1);
    assert_eq!(fourth.id_manager, 1);
    assert_eq!(fourth.id_competency, 1);
    assert_eq!(fourth.id_category, 3);

    let country_ids: HashSet<u32> = schema.dim_country.iter().map(|c| c.id_country).collect();
    let collaborator_ids: HashSet<&str> = schema
        .dim_collaborator
        .iter()
        .map(|c| c.id_collaborator.as_str())
        .collect();
    for fact in &schema.facts {
        assert!(country_ids.contains(&fact.id_country));
        assert!(collaborator_ids.contains(fact.id_collaborator.as_str()));
    }
}

#[test]
fn test_collaborator_first_occurrence_wins() {
    let schema = normalize(&create_test_batch());

    let juan = &schema.dim_collaborator[0];
    assert_eq!(juan.id_collaborator, "IDP001");
    assert_eq!(juan.name, "Juan Perez");
    // Third record moved Juan to CR; the dimension keeps PE
    assert_eq!(juan.id_country, 1);
    assert_eq!(schema.facts[2].id_country, 3);
}

#[test]
fn test_empty_values_are_dimension_members() {
    let records = vec![
        create_test_record("A", "Ana", "", "", "", ""),
        create_test_record("B", "Beto", "", "PE", "", "Cursos"),
    ];
    let schema = normalize(&records);

    assert_eq!(schema.dim_manager.len(), 1);
    assert_eq!(schema.dim_manager[0].name, "");
    assert_eq!(schema.dim_country[0].iso_code, "");
    assert_eq!(schema.dim_country[1].iso_code, "PE");
    assert_eq!(schema.facts[1].id_manager, 1);
}

#[test]
fn test_missing_skill_type_becomes_unclassified() {
    let mut records = create_test_batch();
    records[0].skill_type.clear();
    records[1].skill_type = "Cloud/DevOps".to_string();

    let schema = normalize(&records);
    assert_eq!(schema.dim_skill_type[0].name, "Unclassified");
    assert_eq!(schema.dim_skill_type[1].name, "Cloud/DevOps");
    assert_eq!(schema.dim_skill_type[2].name, "Technical/Core");

    let custom = StarSchemaNormalizer::new("Sin clasificar").normalize(&records);
    assert_eq!(custom.dim_skill_type[0].name, "Sin clasificar");
}

#[test]
fn test_fact_carries_record_attributes() {
    let mut records = create_test_batch();
    records[0].objective = "Crecer".to_string();
    records[0].status = "Completado".to_string();
    records[0].progress = 150.0;

    let schema = normalize(&records);
    let fact = &schema.facts[0];
    assert_eq!(fact.objective, "Crecer");
    assert_eq!(fact.status, "Completado");
    assert_eq!(fact.progress, 150.0);
}

#[test]
fn test_normalize_is_idempotent() {
    let records = create_test_batch();
    assert_eq!(normalize(&records), normalize(&records));
}

#[test]
fn test_empty_batch() {
    let schema = normalize(&[]);
    assert!(schema.is_empty());
    assert!(schema.tables().iter().all(|t| t.row_count == 0));
}

#[test]
fn test_template_round_trip_has_unit_ids() {
    let upload = format!(
        "{}\n{}",
        TEMPLATE_HEADERS.join(","),
        TEMPLATE_EXAMPLE_ROW.join(",")
    );
    let schema = normalize(&parse_records(&upload));

    assert_eq!(schema.fact_count(), 1);
    for table in schema.tables() {
        assert_eq!(table.row_count, 1, "table {}", table.name);
    }

    let fact = &schema.facts[0];
    assert_eq!(fact.id_fact, 1);
    assert_eq!(fact.id_collaborator, "IDP001");
    assert_eq!(
        [
            fact.id_manager,
            fact.id_competency,
            fact.id_category,
            fact.id_country,
            fact.id_skill_type
        ],
        [1; 5]
    );
    assert_eq!(schema.dim_country[0].iso_code, "PE");
}

#[test]
fn test_tables_summary_row_counts() {
    let schema = normalize(&create_test_batch());
    let tables = schema.tables();

    assert_eq!(tables[0].name, "Fact_Development");
    assert_eq!(tables[0].role, TableRole::Fact);
    assert_eq!(tables[0].row_count, 5);
    assert_eq!(tables[1].name, "Dim_Collaborator");
    assert_eq!(tables[1].row_count, 3);
    assert!(tables[1..].iter().all(|t| t.role == TableRole::Dimension));
}
