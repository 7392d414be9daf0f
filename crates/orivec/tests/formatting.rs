//! Integration tests for text rendering and parsing.

use orivec::{cvec, rvec, ColVec, ParseVecError, RowVec};

#[test]
fn row_default_rendering() {
    let r = rvec![0.0_f64, 1.1, 2.2];
    assert_eq!(r.to_string(), "[0, 1.1, 2.2]");
}

#[test]
fn row_fixed_precision_rendering() {
    let r = rvec![0.0_f64, 1.1, 2.2];
    assert_eq!(format!("{:.6}", r), "[0.000000, 1.100000, 2.200000]");
}

#[test]
fn empty_row_renders_brackets() {
    let r: RowVec<i32> = rvec![];
    assert_eq!(r.to_string(), "[]");
}

#[test]
fn column_renders_one_cell_per_line() {
    let c = cvec![0i32, 2, 4];
    assert_eq!(c.to_string(), "|0,|\n|2,|\n|4,|");
}

#[test]
fn empty_column_renders_nothing() {
    let c: ColVec<f64> = cvec![];
    assert_eq!(c.to_string(), "");
}

#[test]
fn column_precision_applies_per_cell() {
    let c = cvec![0.5_f64, 1.25];
    assert_eq!(format!("{:.2}", c), "|0.50,|\n|1.25,|");
}

#[test]
fn boolean_vectors_render() {
    let m = rvec![true, false];
    assert_eq!(m.to_string(), "[true, false]");
}

#[test]
fn rendered_text_parses_back() {
    let r = rvec![-1.5_f64, 0.0, 3.25];
    let parsed: RowVec<f64> = r.to_string().parse().unwrap();
    assert_eq!(parsed, r);

    let c = cvec![7i64, -8, 9];
    let parsed: ColVec<i64> = c.to_string().parse().unwrap();
    assert_eq!(parsed, c);
}

#[test]
fn parse_empty_forms() {
    let r: RowVec<i32> = "[]".parse().unwrap();
    assert!(r.is_empty());
    let c: ColVec<i32> = "".parse().unwrap();
    assert!(c.is_empty());
}

#[test]
fn parse_errors() {
    assert_eq!(
        "[1, 2".parse::<RowVec<i32>>().unwrap_err(),
        ParseVecError::UnknownLayout
    );
    assert_eq!(
        "|1,|\n2,|".parse::<ColVec<i32>>().unwrap_err(),
        ParseVecError::MalformedCell { line: 1 }
    );
    let err = "[1.0, nope]".parse::<RowVec<f64>>().unwrap_err();
    assert!(err.to_string().contains("nope"));
}
