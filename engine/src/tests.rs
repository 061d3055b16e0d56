//! FILENAME: engine/src/tests.rs
//! PURPOSE: Unit tests for the shared data model.

use crate::cell::{CellKind, CellValue};
use crate::dataset::{row, ColumnDescriptor, ColumnType, TabularDataset};

// ========================================
// CELL VALUE TESTS
// ========================================

#[test]
fn cell_conversions() {
    assert_eq!(CellValue::from("US"), CellValue::Text("US".to_string()));
    assert_eq!(CellValue::from(100), CellValue::Number(100.0));
    assert_eq!(CellValue::from(1.5), CellValue::Number(1.5));
    assert_eq!(CellValue::from(true), CellValue::Boolean(true));
    assert_eq!(CellValue::from(None::<f64>), CellValue::Empty);
}

#[test]
fn cell_display_value() {
    assert_eq!(CellValue::Number(42.0).display_value(), "42");
    assert_eq!(CellValue::Number(1.5).display_value(), "1.5");
    assert_eq!(CellValue::Boolean(false).display_value(), "FALSE");
    assert_eq!(CellValue::Empty.display_value(), "");
}

#[test]
fn cell_accessors() {
    let n = CellValue::Number(3.0);
    assert_eq!(n.as_number(), Some(3.0));
    assert_eq!(n.as_text(), None);
    assert_eq!(n.kind(), CellKind::Number);
    assert!(CellValue::Empty.is_empty());
    assert_eq!(CellValue::from("mobile").as_text(), Some("mobile"));
}

#[test]
fn cells_deserialize_from_host_json() {
    let cells: Vec<CellValue> = serde_json::from_str(r#"["US", 100, 1.5, true, null]"#).unwrap();
    assert_eq!(
        cells,
        vec![
            CellValue::Text("US".to_string()),
            CellValue::Number(100.0),
            CellValue::Number(1.5),
            CellValue::Boolean(true),
            CellValue::Empty,
        ]
    );
}

#[test]
fn empty_cell_serializes_as_null() {
    let json = serde_json::to_string(&vec![CellValue::Empty, CellValue::from("x")]).unwrap();
    assert_eq!(json, r#"[null,"x"]"#);
}

// ========================================
// COLUMN TYPE TESTS
// ========================================

#[test]
fn column_type_acceptance() {
    assert!(ColumnType::Number.accepts(CellKind::Number));
    assert!(ColumnType::Number.accepts(CellKind::Empty));
    assert!(!ColumnType::Number.accepts(CellKind::Text));
    assert!(ColumnType::Text.accepts(CellKind::Text));
    assert!(!ColumnType::Boolean.accepts(CellKind::Number));
    assert!(ColumnType::Any.accepts(CellKind::Boolean));
}

// ========================================
// DATASET TESTS
// ========================================

#[test]
fn dataset_counts() {
    let ds = TabularDataset::new(
        vec![ColumnDescriptor::new("d0", "Country"), ColumnDescriptor::new("d1", "Device")],
        vec![ColumnDescriptor::new("m0", "Users")],
        vec![row(vec![CellValue::from("US"), CellValue::from("mobile"), CellValue::from(10)])],
    );
    assert_eq!(ds.dimension_count(), 2);
    assert_eq!(ds.metric_count(), 1);
    assert_eq!(ds.expected_row_len(), 3);
    assert_eq!(ds.row_count(), 1);
}

#[test]
fn empty_object_decodes_to_absent_lists() {
    let ds: TabularDataset = serde_json::from_str("{}").unwrap();
    assert!(ds.dimension_descriptors.is_none());
    assert!(ds.metric_descriptors.is_none());
    assert!(ds.rows.is_empty());
    assert_eq!(ds.expected_row_len(), 0);
}

#[test]
fn dataset_decodes_camel_case_fields() {
    let json = r#"{
        "dimensionDescriptors": [{"id": "d0", "name": "Country", "columnType": "Text"}],
        "metricDescriptors": [{"id": "m0", "name": "Users"}],
        "rows": [["US", 100], ["FR", 42]]
    }"#;
    let ds: TabularDataset = serde_json::from_str(json).unwrap();
    let dims = ds.dimension_descriptors.as_ref().unwrap();
    assert_eq!(dims[0], ColumnDescriptor::typed("d0", "Country", ColumnType::Text));
    assert_eq!(ds.metric_descriptors.as_ref().unwrap()[0].column_type, None);
    assert_eq!(ds.rows.len(), 2);
    assert_eq!(ds.rows[1][1], CellValue::Number(42.0));
}
