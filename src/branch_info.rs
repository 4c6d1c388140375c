//! Current-branch discovery.
//!
//! Workflow code asks a [BranchInfoProvider] instead of reading CI variables
//! itself, so the decision path does not depend on any particular CI system.

use std::env;

use tracing::{debug, info};

use crate::config::BranchDetectionConfig;
use crate::domain::infer_branch_from_message;
use crate::git::Git2Repository;

/// Sources for the name of the branch being built
pub trait BranchInfoProvider {
    /// Branch name forced by the operator. Final: never replaced by a commit hint.
    fn override_branch(&self) -> Option<String> {
        None
    }

    /// Branch name reported by the CI system
    fn ci_branch(&self) -> Option<String>;

    /// Branch name queried from the repository when the CI system reports none
    fn fallback_branch(&self) -> Option<String>;

    /// Message of the most recent commit, used for feat/fix hints
    fn last_commit_message(&self) -> Option<String>;
}

/// Branch information from the process environment and the local repository
pub struct EnvBranchInfo<'a> {
    cli_override: Option<String>,
    env_vars: Vec<String>,
    repo: Option<&'a Git2Repository>,
}

impl<'a> EnvBranchInfo<'a> {
    pub fn new(cli_override: Option<String>, env_vars: Vec<String>) -> Self {
        EnvBranchInfo {
            cli_override,
            env_vars,
            repo: None,
        }
    }

    /// Use `repo` for the fallback branch and the last commit message
    pub fn with_repository(mut self, repo: &'a Git2Repository) -> Self {
        self.repo = Some(repo);
        self
    }
}

impl BranchInfoProvider for EnvBranchInfo<'_> {
    fn override_branch(&self) -> Option<String> {
        self.cli_override.as_deref().and_then(normalize_branch)
    }

    fn ci_branch(&self) -> Option<String> {
        self.env_vars.iter().find_map(|var| {
            let value = env::var(var).ok()?;
            let name = normalize_branch(&value)?;
            debug!(var = %var, branch = %name, "branch name from environment");
            Some(name)
        })
    }

    fn fallback_branch(&self) -> Option<String> {
        self.repo.and_then(|repo| repo.current_branch())
    }

    fn last_commit_message(&self) -> Option<String> {
        self.repo.and_then(|repo| repo.head_commit_message())
    }
}

/// Strip `refs/heads/` and surrounding whitespace; empty names are absent
fn normalize_branch(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let name = trimmed.strip_prefix("refs/heads/").unwrap_or(trimmed);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Resolve the branch name to classify.
///
/// An override is returned as is. Otherwise uses the CI name, else the
/// fallback query; when that name is one of `config.heuristic_branches`, a
/// feat/fix hint from the last commit message replaces it.
pub fn resolve_branch(
    provider: &dyn BranchInfoProvider,
    config: &BranchDetectionConfig,
) -> Option<String> {
    if let Some(name) = provider.override_branch() {
        debug!(branch = %name, "branch name overridden");
        return Some(name);
    }

    let name = provider
        .ci_branch()
        .or_else(|| provider.fallback_branch())?;

    if !config.heuristic_branches.iter().any(|b| b == &name) {
        return Some(name);
    }

    match provider
        .last_commit_message()
        .as_deref()
        .and_then(infer_branch_from_message)
    {
        Some(hinted) => {
            info!(branch = %name, hinted = %hinted, "branch inferred from last commit message");
            Some(hinted)
        }
        None => Some(name),
    }
}
