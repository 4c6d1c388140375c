use std::env;

use serial_test::serial;

use git_beta_tag::branch_info::{resolve_branch, BranchInfoProvider, EnvBranchInfo};
use git_beta_tag::config::BranchDetectionConfig;

const PRIMARY: &str = "GIT_BETA_TAG_TEST_PRIMARY";
const SECONDARY: &str = "GIT_BETA_TAG_TEST_SECONDARY";

fn vars() -> Vec<String> {
    vec![PRIMARY.to_string(), SECONDARY.to_string()]
}

fn clear() {
    env::remove_var(PRIMARY);
    env::remove_var(SECONDARY);
}

#[test]
#[serial]
fn test_first_non_empty_variable_wins() {
    clear();
    env::set_var(PRIMARY, "");
    env::set_var(SECONDARY, "refs/heads/feat/env");

    let info = EnvBranchInfo::new(None, vars());
    assert_eq!(info.ci_branch().as_deref(), Some("feat/env"));
    clear();
}

#[test]
#[serial]
fn test_cli_override_beats_environment() {
    clear();
    env::set_var(PRIMARY, "main");

    let info = EnvBranchInfo::new(Some("release".to_string()), vars());
    assert_eq!(info.override_branch().as_deref(), Some("release"));
    assert_eq!(info.ci_branch().as_deref(), Some("main"));
    assert_eq!(
        resolve_branch(&info, &BranchDetectionConfig::default()).as_deref(),
        Some("release")
    );
    clear();
}

#[test]
#[serial]
fn test_no_variables_set() {
    clear();

    let info = EnvBranchInfo::new(None, vars());
    assert_eq!(info.override_branch(), None);
    assert_eq!(info.ci_branch(), None);
    assert_eq!(resolve_branch(&info, &BranchDetectionConfig::default()), None);
}

#[test]
#[serial]
fn test_environment_branch_is_resolved() {
    clear();
    env::set_var(PRIMARY, "fix/crash");

    let info = EnvBranchInfo::new(None, vars());
    assert_eq!(
        resolve_branch(&info, &BranchDetectionConfig::default()).as_deref(),
        Some("fix/crash")
    );
    clear();
}
