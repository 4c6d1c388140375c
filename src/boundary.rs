use std::fmt;

use crate::domain::BranchType;

/// Non-fatal conditions met while resolving inputs or planning a tag.
/// These are reported to the user but never stop the run on their own.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanWarning {
    /// Tag lookup on a branch failed; the default tag was used instead
    TagQueryFailed {
        branch: String,
        reason: String,
        default: String,
    },
    /// Listing the repository's tags failed; the run continues without them
    TagListFailed { reason: String },
    /// No tag is reachable from the branch yet; the default tag was used
    NoTagOnBranch { branch: String, default: String },
    /// Tag exists but cannot be decoded as a version
    UnparsableTag { tag: String, reason: String },
    /// `release` run found no beta on `main`; the main tag is reused as-is
    PromotionWithoutBeta { main_tag: String },
    /// A stale beta series was continued from a branch that does not start series
    SeriesContinuedOnUnscopedBranch {
        branch_type: BranchType,
        beta_tag: String,
    },
    /// No branch name could be resolved from the environment or repository
    BranchUnresolved,
    /// Fetching tags from the remote failed; local tags were used
    FetchFailed { remote: String, reason: String },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::TagQueryFailed {
                branch,
                reason,
                default,
            } => write!(
                f,
                "Could not determine latest tag on '{}' ({}); using '{}'",
                branch, reason, default
            ),
            PlanWarning::TagListFailed { reason } => write!(
                f,
                "Could not list tags ({}); existing tags cannot be checked before publishing",
                reason
            ),
            PlanWarning::NoTagOnBranch { branch, default } => {
                write!(f, "No tag on '{}' yet; using '{}'", branch, default)
            }
            PlanWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            PlanWarning::PromotionWithoutBeta { main_tag } => write!(
                f,
                "No beta tag on main to promote; reusing '{}' verbatim",
                main_tag
            ),
            PlanWarning::SeriesContinuedOnUnscopedBranch {
                branch_type,
                beta_tag,
            } => write!(
                f,
                "Continuing beta series '{}' from a '{}' branch",
                beta_tag, branch_type
            ),
            PlanWarning::BranchUnresolved => {
                write!(f, "Could not resolve current branch; treating it as 'other'")
            }
            PlanWarning::FetchFailed { remote, reason } => write!(
                f,
                "Could not fetch tags from remote '{}': {}. Using local tags.",
                remote, reason
            ),
        }
    }
}
