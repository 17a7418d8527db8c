//! Tests for config functionality.

use crate::config::{Config, DEFAULT_CONFIG_FILE, UndefinedMode};
use crate::error::ConfigBuilderError;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.template_dir, "targetspec");
    assert_eq!(config.output_dir, "out");
    assert_eq!(config.variable_name, "HOSTNAME");
    assert_eq!(config.undefined, UndefinedMode::Lenient);
    assert!(!config.keep_trailing_newline);
    assert!(!config.keep_going);
    assert!(config.ignore.is_empty());
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.template_dir, "targetspec");
    assert_eq!(config.output_dir, "out");
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
output_dir: build/configs
keep_going: true
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.output_dir, "build/configs");
    assert!(config.keep_going);

    // Unspecified values should use defaults
    assert_eq!(config.template_dir, "targetspec");
    assert_eq!(config.variable_name, "HOSTNAME");
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
template_dir: templates
output_dir: rendered
variable_name: DEVICE
undefined: strict
keep_trailing_newline: true
keep_going: true
ignore:
  - "*.bak"
  - ".*"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.template_dir, "templates");
    assert_eq!(config.output_dir, "rendered");
    assert_eq!(config.variable_name, "DEVICE");
    assert_eq!(config.undefined, UndefinedMode::Strict);
    assert!(config.keep_trailing_newline);
    assert!(config.keep_going);
    assert_eq!(config.ignore, vec!["*.bak", ".*"]);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
output_dir: rendered
push_to_devices: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.output_dir, "rendered");
}

#[test]
fn test_invalid_undefined_mode_rejected() {
    let result = Config::from_yaml("undefined: sometimes\n");
    assert!(matches!(result, Err(ConfigBuilderError::Config(_))));
}

#[test]
fn test_validate_rejects_bad_variable_name() {
    for name in ["", "1HOST", "HOST-NAME", "host name"] {
        let config = Config {
            variable_name: name.to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            err.to_string().contains("variable_name"),
            "unexpected error for {:?}: {}",
            name,
            err
        );
    }
}

#[test]
fn test_validate_rejects_same_dirs() {
    let config = Config {
        template_dir: "configs".to_string(),
        output_dir: "configs".to_string(),
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn test_validate_rejects_empty_dirs() {
    let config = Config {
        output_dir: "  ".to_string(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_bad_glob() {
    let config = Config {
        ignore: vec!["[unclosed".to_string()],
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("invalid ignore glob"));
}

#[test]
fn test_ignore_set_matches() {
    let config = Config {
        ignore: vec!["*.bak".to_string()],
        ..Config::default()
    };
    let set = config.ignore_set().unwrap();
    assert!(set.is_match("edge-a.bak"));
    assert!(!set.is_match("edge-a"));
}

#[test]
fn test_resolve_without_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::resolve(None, temp.path()).unwrap();
    assert_eq!(config.output_dir, "out");
}

#[test]
fn test_resolve_picks_up_default_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "output_dir: rendered\n").unwrap();

    let config = Config::resolve(None, temp.path()).unwrap();
    assert_eq!(config.output_dir, "rendered");
}

#[test]
fn test_resolve_explicit_relative_path() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("site.yaml"), "variable_name: DEVICE\n").unwrap();

    let config = Config::resolve(Some(std::path::Path::new("site.yaml")), temp.path()).unwrap();
    assert_eq!(config.variable_name, "DEVICE");
}

#[test]
fn test_resolve_explicit_missing_file_errors() {
    let temp = TempDir::new().unwrap();
    let result = Config::resolve(Some(std::path::Path::new("nope.yaml")), temp.path());
    match result {
        Err(ConfigBuilderError::Config(msg)) => assert!(msg.contains("failed to read")),
        other => panic!("expected config error, got {:?}", other),
    }
}
