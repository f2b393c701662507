//! Tests for analytics over flat records

use crate::app::models::FlatRecord;

mod filter_tests;

/// Create a record with the fields analytics looks at
pub fn create_test_record(
    code: &str,
    name: &str,
    country: &str,
    manager: &str,
    category: &str,
    status: &str,
    progress: f64,
) -> FlatRecord {
    FlatRecord {
        code: code.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        manager: manager.to_string(),
        category: category.to_string(),
        status: status.to_string(),
        progress,
        competency: format!("Competencia {}", code),
        skill_type: "Technical/Core".to_string(),
        ..FlatRecord::default()
    }
}

/// Six records over three countries and three managers
///
/// | code | country | manager | category | status | progress |
/// |------|---------|---------|----------|--------|----------|
/// | A1 | PE | Maria Lopez | Cursos | En Progreso | 45 |
/// | A2 | PE | Maria Lopez | Mentoring | Completado | 100 |
/// | A1 | PE | Carlos Diaz | Cursos | Pendiente | 0 |
/// | B1 | EC | Carlos Diaz | Proyecto | En Progreso | 20 |
/// | C1 | CR | Ana Vega | Cursos | En Progreso | 100 |
/// | B2 | EC | Carlos Diaz | Lecturas | En Progreso | 35 |
pub fn create_test_dataset() -> Vec<FlatRecord> {
    vec![
        create_test_record("A1", "Juan Perez", "PE", "Maria Lopez", "Cursos", "En Progreso", 45.0),
        create_test_record("A2", "Lucia Rojas", "PE", "Maria Lopez", "Mentoring", "Completado", 100.0),
        create_test_record("A1", "Juan Perez", "PE", "Carlos Diaz", "Cursos", "Pendiente", 0.0),
        create_test_record("B1", "Pedro Mora", "EC", "Carlos Diaz", "Proyecto", "En Progreso", 20.0),
        create_test_record("C1", "Sofia", "CR", "Ana Vega", "Cursos", "En Progreso", 100.0),
        create_test_record("B2", "Diego Luna Paz", "EC", "Carlos Diaz", "Lecturas", "En Progreso", 35.0),
    ]
}
