//! Discover a settings file on disk and lint with it.

use sqlint_config::{find_settings, load_settings};
use sqlint_linter::{DiagnosticSeverity, Linter};
use std::fs;

#[test]
fn discovered_settings_drive_the_linter() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join(".sqlintrc.yaml"),
        r"
lint:
  rules:
    leading-comma:
      severity: error
      options:
        position: leading
    trailing-whitespace: warn
",
    )
    .unwrap();
    let nested = temp_dir.path().join("reports").join("daily");
    fs::create_dir_all(&nested).unwrap();

    let path = find_settings(&nested).unwrap().unwrap();
    let linter = Linter::new(load_settings(&path).unwrap());

    let diagnostics = linter.lint("select a,\n  b \nfrom t");
    let found: Vec<(&str, DiagnosticSeverity)> = diagnostics
        .iter()
        .map(|d| (d.source.as_str(), d.severity))
        .collect();
    assert_eq!(
        found,
        vec![
            ("leading-comma", DiagnosticSeverity::Error),
            ("trailing-whitespace", DiagnosticSeverity::Warning),
        ]
    );
}

#[test]
fn json_settings_cap_problems() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("sqlint.config.json");
    fs::write(
        &path,
        r#"{ "maxNumberOfProblems": 2, "lint": { "rules": { "trailing-whitespace": "on" } } }"#,
    )
    .unwrap();

    let linter = Linter::new(load_settings(&path).unwrap());
    assert_eq!(linter.lint("a \nb \nc \n").len(), 2);
}
