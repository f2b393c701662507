//! Tests for header cell resolution

use crate::app::models::FieldId;
use crate::app::services::record_parser::header::{HeaderMapping, match_header};
use crate::config::ParserRules;
use crate::constants::TEMPLATE_HEADERS;

fn headers(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn test_template_headers_map_every_field() {
    let rules = ParserRules::default();
    let mapping = HeaderMapping::resolve(&headers(TEMPLATE_HEADERS), &rules.header_rules);

    assert_eq!(mapping.mapped_count(), 14);
    assert!(mapping.ignored.is_empty());
    for (column, field) in FieldId::ALL.iter().enumerate() {
        assert_eq!(mapping.field_for(column), Some(*field));
    }
}

#[test]
fn test_match_header_accent_and_case_variants() {
    let rules = ParserRules::default().header_rules;

    assert_eq!(match_header("CODIGO", &rules), Some(FieldId::Code));
    assert_eq!(match_header("  País de origen ", &rules), Some(FieldId::Country));
    assert_eq!(match_header("Cargo", &rules), Some(FieldId::Function));
    assert_eq!(match_header("Estado", &rules), Some(FieldId::Status));
    assert_eq!(match_header("Avance %", &rules), Some(FieldId::Progress));
    assert_eq!(match_header("Skill Type", &rules), Some(FieldId::SkillType));
    assert_eq!(match_header("Comentarios", &rules), None);
    assert_eq!(match_header("", &rules), None);
}

#[test]
fn test_match_header_first_rule_wins() {
    let rules = ParserRules::default().header_rules;
    // Contains both "nombre" and "jefe"; Name is checked first
    assert_eq!(match_header("Nombre del jefe", &rules), Some(FieldId::Name));
}

#[test]
fn test_unmatched_columns_are_ignored() {
    let rules = ParserRules::default();
    let mapping = HeaderMapping::resolve(
        &headers(&["Código", "Comentarios", "Progreso"]),
        &rules.header_rules,
    );

    assert_eq!(mapping.mapped_count(), 2);
    assert_eq!(mapping.field_for(1), None);
    assert_eq!(mapping.column_of(FieldId::Progress), Some(2));
    assert_eq!(mapping.ignored, vec!["Comentarios".to_string()]);
    assert!(!mapping.has_field(FieldId::Name));
}

#[test]
fn test_duplicate_field_keeps_first_column() {
    let rules = ParserRules::default();
    let mapping = HeaderMapping::resolve(
        &headers(&["Estatus", "Código", "Estado actual"]),
        &rules.header_rules,
    );

    assert_eq!(mapping.column_of(FieldId::Status), Some(0));
    assert_eq!(mapping.field_for(2), None);
    assert_eq!(mapping.ignored, vec!["Estado actual".to_string()]);
}

#[test]
fn test_field_for_out_of_range() {
    let rules = ParserRules::default();
    let mapping = HeaderMapping::resolve(&headers(&["Código"]), &rules.header_rules);
    assert_eq!(mapping.field_for(5), None);
}
