use std::path::PathBuf;

use crate::errors::ParserError;
use crate::schema::{apply_schema, canonical_columns, DECOY_COLUMN};
use crate::{load_survey_file, parse_survey_csv};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn loads_fixture_as_string_columns() {
    let loaded =
        load_survey_file(&fixture_path("usage_reseaux_sample.csv")).expect("fixture load failed");

    assert_eq!(loaded.row_count(), 4);
    assert_eq!(loaded.df.width(), 29);
    assert_eq!(loaded.input_hash.len(), 64);

    let age = loaded
        .df
        .column("1. Quel est votre âge ?")
        .expect("age header missing")
        .str()
        .expect("age should load as text");
    assert_eq!(age.get(0), Some("22 ans"));
    assert_eq!(age.get(2), None);
}

#[test]
fn missing_file_is_reported_with_path() {
    let path = fixture_path("does_not_exist.csv");
    let err = load_survey_file(&path).expect_err("expected missing file");
    match err {
        ParserError::MissingFile { path: reported } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_cells_become_nulls_and_text_is_verbatim() {
    let df = parse_survey_csv("a,b\n  ,  x \n1,\n").expect("parse failed");
    let a = df.column("a").unwrap().str().unwrap();
    let b = df.column("b").unwrap().str().unwrap();

    assert_eq!(a.get(0), None);
    assert_eq!(a.get(1), Some("1"));
    assert_eq!(b.get(0), Some("  x "));
    assert_eq!(b.get(1), None);
}

#[test]
fn short_rows_are_padded() {
    let df = parse_survey_csv("a,b,c\n1\n").expect("parse failed");
    assert_eq!(df.height(), 1);
    assert_eq!(df.column("c").unwrap().str().unwrap().get(0), None);
}

#[test]
fn long_rows_are_rejected_with_line() {
    let err = parse_survey_csv("a,b\n1,2\n1,2,3\n").expect_err("expected row error");
    match err {
        ParserError::DataRow { line_index, .. } => assert_eq!(line_index, 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_headers_are_rejected() {
    let err = parse_survey_csv("a,a\n1,2\n").expect_err("expected header error");
    assert!(matches!(err, ParserError::InvalidHeader { .. }));
}

#[test]
fn byte_order_mark_is_stripped() {
    let df = parse_survey_csv("\u{feff}Horodateur,x\n2025/01/01 00:00:00,1\n").expect("parse failed");
    assert!(df.column("Horodateur").is_ok());
}

#[test]
fn header_only_file_yields_empty_frame() {
    let df = parse_survey_csv("a,b\n").expect("parse failed");
    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 2);
}

#[test]
fn schema_renames_and_drops_decoy() {
    let mut loaded =
        load_survey_file(&fixture_path("usage_reseaux_sample.csv")).expect("fixture load failed");
    let report = apply_schema(&mut loaded.df).expect("schema mapping failed");

    assert!(report.dropped_decoy);
    assert_eq!(report.renamed, 28);
    assert!(report.is_complete());
    assert!(report.unmapped.is_empty());
    assert!(loaded.df.column(DECOY_COLUMN).is_err());

    let names: Vec<String> = loaded
        .df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let expected: Vec<String> = canonical_columns().map(str::to_string).collect();
    assert_eq!(names, expected);
}

#[test]
fn schema_matches_trimmed_headers_and_reports_absent_columns() {
    let mut df = parse_survey_csv(
        "5. À quels moments de la journée utilisez-vous le plus les réseaux sociaux ?,Remarque\nSoir,rien\n",
    )
    .expect("parse failed");
    let report = apply_schema(&mut df).expect("schema mapping failed");

    assert!(!report.dropped_decoy);
    assert_eq!(report.renamed, 1);
    assert!(df.column("day_moments").is_ok());
    assert_eq!(report.absent.len(), 27);
    assert!(report.absent.contains(&"country"));
    assert_eq!(report.unmapped, vec!["Remarque".to_string()]);
}

#[test]
fn schema_mapping_is_idempotent() {
    let mut loaded =
        load_survey_file(&fixture_path("usage_reseaux_sample.csv")).expect("fixture load failed");
    apply_schema(&mut loaded.df).expect("first mapping failed");
    let second = apply_schema(&mut loaded.df).expect("second mapping failed");

    assert_eq!(second.renamed, 0);
    assert!(second.absent.is_empty());
    assert!(!second.dropped_decoy);
}
