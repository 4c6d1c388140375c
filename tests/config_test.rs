// tests/config_test.rs
use git_beta_tag::config::{load_config, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.tags.default_tag, "v0.1.0");
    assert_eq!(config.tags.remote, "origin");
    assert!(config
        .branch_detection
        .env_vars
        .contains(&"GITHUB_HEAD_REF".to_string()));
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[tags]
default_tag = "v1.0.0"
remote = "upstream"

[branch_detection]
env_vars = ["BUILD_BRANCH"]
heuristic_branches = ["main"]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.tags.default_tag, "v1.0.0");
    assert_eq!(config.tags.remote, "upstream");
    assert_eq!(config.tags.release_branch, "release");
    assert_eq!(config.branch_detection.env_vars, vec!["BUILD_BRANCH"]);
    assert_eq!(config.branch_detection.heuristic_branches, vec!["main"]);
    assert!(config.policy.continue_series_on_any_branch);
}

#[test]
fn test_policy_from_fixture() {
    let config = load_config(Some("tests/fixtures/scoped_policy.toml"))
        .expect("Failed to load test config");
    assert!(!config.policy.continue_series_on_any_branch);
    assert_eq!(config.tags.main_branch, "main");
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = load_config(Some(missing.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
fn test_invalid_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[policy]\ncontinue_series_on_any_branch = \"maybe\"\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
