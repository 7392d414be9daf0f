//! Integration tests for demo config loading and validation.

use orivec_cli::config::{load_demo_config, DemoConfig};
use orivec_cli::demo::run_demo;

#[test]
fn demo_config_default_values() {
    let cfg = DemoConfig::default();
    assert_eq!(cfg.row.len(), 5);
    assert_eq!(cfg.mask.iter().filter(|&&m| m).count(), 3);
    assert_eq!(cfg.precision, Some(6));
    assert!(cfg.validate().is_ok());
}

#[test]
fn demo_config_round_trips_json() {
    let cfg = DemoConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let cfg2: DemoConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, cfg2);
}

#[test]
fn partial_config_fills_defaults() {
    let cfg: DemoConfig = serde_json::from_str(r#"{"precision": null}"#).unwrap();
    assert_eq!(cfg.precision, None);
    assert_eq!(cfg.row, DemoConfig::default().row);
}

#[test]
fn demo_config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.json");
    let json = r#"{
        "row": [1.0, 2.0],
        "column": [3.0, 4.0],
        "mask": [true, false],
        "precision": null
    }"#;
    std::fs::write(&path, json).unwrap();

    let cfg = load_demo_config(&path).unwrap();
    assert_eq!(cfg.row, vec![1.0, 2.0]);

    let mut out = Vec::new();
    run_demo(&cfg, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("\n11\n"), "dot product line missing: {}", text);
    assert!(text.ends_with("[1]\n"));
}

#[test]
fn malformed_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_demo_config(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

#[test]
fn length_mismatch_is_a_config_error() {
    let cfg = DemoConfig {
        column: vec![1.0],
        ..DemoConfig::default()
    };
    assert!(cfg.validate().is_err());
}
