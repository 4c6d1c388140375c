use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::parse_tag;
use crate::error::{BetaTagError, Result};

/// Represents the complete configuration for git-beta-tag.
///
/// Contains tag lookup settings, branch detection sources and the planning policy.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub branch_detection: BranchDetectionConfig,

    #[serde(default)]
    pub policy: PolicyConfig,
}

fn default_tag() -> String {
    "v0.1.0".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_release_branch() -> String {
    "release".to_string()
}

fn default_main_branch() -> String {
    "main".to_string()
}

/// Returns the default environment variables consulted for the branch name.
fn default_env_vars() -> Vec<String> {
    vec![
        "GITHUB_HEAD_REF".to_string(),
        "GITHUB_REF_NAME".to_string(),
        "CI_COMMIT_REF_NAME".to_string(),
    ]
}

/// Returns the branches on which the commit message may override the branch name.
fn default_heuristic_branches() -> Vec<String> {
    vec!["main".to_string(), "release".to_string()]
}

fn default_true() -> bool {
    true
}

/// Where tags are looked up and what to assume when a line has none.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    /// Tag assumed when a line has no reachable tag
    #[serde(default = "default_tag")]
    pub default_tag: String,

    /// Remote used for remote-tracking refs, fetching and pushing
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch carrying stable tags
    #[serde(default = "default_release_branch")]
    pub release_branch: String,

    /// Branch carrying beta tags
    #[serde(default = "default_main_branch")]
    pub main_branch: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            default_tag: default_tag(),
            remote: default_remote(),
            release_branch: default_release_branch(),
            main_branch: default_main_branch(),
        }
    }
}

/// How the current branch name is discovered.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BranchDetectionConfig {
    /// Environment variables checked in order; the first non-empty one wins
    #[serde(default = "default_env_vars")]
    pub env_vars: Vec<String>,

    /// Branches whose name may be replaced by a hint from the last commit message
    #[serde(default = "default_heuristic_branches")]
    pub heuristic_branches: Vec<String>,
}

impl Default for BranchDetectionConfig {
    fn default() -> Self {
        BranchDetectionConfig {
            env_vars: default_env_vars(),
            heuristic_branches: default_heuristic_branches(),
        }
    }
}

/// Planning policy switches.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PolicyConfig {
    /// When the beta on main is from an older line, continue that series for
    /// every non-release branch (`true`) or only for feat/fix branches (`false`)
    #[serde(default = "default_true")]
    pub continue_series_on_any_branch: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            continue_series_on_any_branch: true,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitbetatag.toml` in current directory
/// 3. `.gitbetatag.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitbetatag.toml").exists() {
        fs::read_to_string("./gitbetatag.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitbetatag.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Reject settings the planner cannot work with
    pub fn validate(&self) -> Result<()> {
        if parse_tag(&self.tags.default_tag).is_none() {
            return Err(BetaTagError::config(format!(
                "default_tag '{}' is not of the form vX.Y.Z or vX.Y.Z-beta.N",
                self.tags.default_tag
            )));
        }

        for (key, value) in [
            ("release_branch", &self.tags.release_branch),
            ("main_branch", &self.tags.main_branch),
            ("remote", &self.tags.remote),
        ] {
            if value.trim().is_empty() {
                return Err(BetaTagError::config(format!("{} must not be empty", key)));
            }
        }

        Ok(())
    }
}
