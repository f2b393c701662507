//! Tests for record filtering and filter options

use super::*;
use crate::app::services::analytics::{FilterOptions, RecordFilter};

#[test]
fn test_unrestricted_filter_keeps_everything() {
    let records = create_test_dataset();
    let filter = RecordFilter::default();

    assert!(filter.is_unrestricted());
    assert_eq!(filter.apply(&records), records);
}

#[test]
fn test_filter_by_country() {
    let records = create_test_dataset();
    let filtered = RecordFilter::new(Some("PE".to_string()), None).apply(&records);

    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().all(|r| r.country == "PE"));
}

#[test]
fn test_filter_by_country_and_manager() {
    let records = create_test_dataset();
    let filter = RecordFilter::new(Some("EC".to_string()), Some("Carlos Diaz".to_string()));
    let filtered = filter.apply(&records);

    let codes: Vec<&str> = filtered.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["B1", "B2"]);
}

#[test]
fn test_filter_is_exact_match() {
    let records = create_test_dataset();
    let filtered = RecordFilter::new(Some("pe".to_string()), None).apply(&records);
    assert!(filtered.is_empty());
}

#[test]
fn test_filter_options_countries_from_all_records() {
    let mut records = create_test_dataset();
    records.push(create_test_record("Z9", "Sin Pais", "", "", "Cursos", "", 10.0));

    let options = FilterOptions::from_records(&records, Some("EC"));
    assert_eq!(options.countries, vec!["CR", "EC", "PE"]);
    assert_eq!(options.managers, vec!["Carlos Diaz"]);

    let all = FilterOptions::from_records(&records, None);
    assert_eq!(all.managers, vec!["Ana Vega", "Carlos Diaz", "Maria Lopez"]);
}

#[test]
fn test_reconcile_clears_unavailable_manager() {
    let records = create_test_dataset();
    let options = FilterOptions::from_records(&records, Some("CR"));

    let filter = RecordFilter::new(Some("CR".to_string()), Some("Maria Lopez".to_string()))
        .reconcile(&options);
    assert_eq!(filter.manager, None);
    assert_eq!(filter.country.as_deref(), Some("CR"));

    let kept = RecordFilter::new(Some("CR".to_string()), Some("Ana Vega".to_string()))
        .reconcile(&options);
    assert_eq!(kept.manager.as_deref(), Some("Ana Vega"));
}
