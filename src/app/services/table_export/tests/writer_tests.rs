//! Tests for CSV rendering and file output

use super::*;
use crate::Error;
use crate::app::services::table_export::TableExporter;
use crate::config::ExportConfig;
use tempfile::TempDir;

fn exporter_without_bom() -> TableExporter {
    TableExporter::new(ExportConfig {
        include_bom: false,
        delimiter: ',',
    })
}

#[test]
fn test_render_quotes_values_not_header() {
    let schema = create_test_schema();
    let csv = exporter_without_bom()
        .render_table(
            "Dim_Collaborator",
            &["id_collaborator", "name", "function", "id_country"],
            &schema.dim_collaborator,
        )
        .unwrap();

    assert_eq!(
        csv,
        "id_collaborator,name,function,id_country\n\"IDP001\",\"Perez, \"\"Juancho\"\" Juan\",\"\",\"1\""
    );
}

#[test]
fn test_render_with_bom() {
    let schema = create_test_schema();
    let csv = TableExporter::default()
        .render_table("Dim_Country", &["id_country", "iso_code"], &schema.dim_country)
        .unwrap();

    assert!(csv.starts_with('\u{FEFF}'));
    assert!(!csv.ends_with('\n'));
}

#[test]
fn test_render_fact_rows() {
    let schema = create_test_schema();
    let columns = schema.tables()[0].columns;
    let csv = exporter_without_bom()
        .render_table("Fact_Development", columns, &schema.facts)
        .unwrap();

    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id_fact,id_collaborator,id_manager"));
    assert!(lines[1].starts_with("\"1\",\"IDP001\",\"1\",\"1\",\"1\",\"1\",\"1\""));
    assert!(lines[2].starts_with("\"2\",\"IDP001\",\"1\",\"2\""));
    assert!(lines[2].ends_with("\"Pending\",\"100.0\""));
}

#[test]
fn test_render_custom_delimiter() {
    let exporter = TableExporter::new(ExportConfig {
        include_bom: false,
        delimiter: ';',
    });
    let schema = create_test_schema();
    let csv = exporter
        .render_table("Dim_Manager", &["id_manager", "name"], &schema.dim_manager)
        .unwrap();

    assert_eq!(csv, "id_manager;name\n\"1\";\"Maria Lopez\"");
}

#[test]
fn test_render_empty_table_is_error() {
    let schema = StarSchema::default();
    let err = TableExporter::default()
        .render_table("Dim_Country", &["id_country", "iso_code"], &schema.dim_country)
        .unwrap_err();

    assert!(matches!(err, Error::EmptyTable { ref table } if table == "Dim_Country"));
}

#[test]
fn test_export_all_writes_every_table() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join("star_schema");
    let schema = create_test_schema();

    let summary = TableExporter::default()
        .export_all(&schema, &output_dir)
        .unwrap();

    assert_eq!(summary.written.len(), 7);
    assert!(summary.skipped.is_empty());
    assert_eq!(summary.written[0].table, "Fact_Development");
    assert_eq!(summary.written[0].rows, 2);

    for table in &summary.written {
        assert!(table.path.exists());
        let content = std::fs::read_to_string(&table.path).unwrap();
        assert_eq!(content.len() as u64, table.bytes);
        assert!(content.starts_with('\u{FEFF}'));
    }

    let skill_types = std::fs::read_to_string(output_dir.join("Dim_SkillType.csv")).unwrap();
    assert!(skill_types.contains("\"2\",\"Cloud/DevOps\""));
    assert_eq!(summary.total_rows(), 2 + 1 + 1 + 1 + 1 + 2 + 2);
}

#[test]
fn test_export_all_skips_empty_tables() {
    let dir = TempDir::new().unwrap();
    let summary = TableExporter::default()
        .export_all(&StarSchema::default(), dir.path())
        .unwrap();

    assert!(summary.written.is_empty());
    assert_eq!(summary.skipped.len(), 7);
    assert_eq!(summary.total_bytes(), 0);
}
