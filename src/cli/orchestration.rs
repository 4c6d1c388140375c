//! Tagging workflow orchestration
//!
//! Resolves the branch, reads tag snapshots, runs the planner, enforces
//! idempotency and publishes. Kept separate from `main.rs` so it can be
//! driven with in-memory collaborators.

use tracing::{error, info, warn};

use crate::boundary::PlanWarning;
use crate::branch_info::{resolve_branch, BranchInfoProvider};
use crate::config::Config;
use crate::domain::{parse_tag, BranchType, ResolvedTag, TagSource};
use crate::git::{Publisher, TagStore};
use crate::planner::{NextVersionPlanner, PlanOutcome};
use crate::ui;

/// Number of known tags listed in the run summary
const KNOWN_TAGS_SHOWN: usize = 20;

/// Arguments for the tagging workflow
///
/// Mirrors the CLI flags that influence the run, without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowArgs {
    /// Preview mode - compute the tag but don't publish it
    pub dry_run: bool,

    /// Treat planner input errors as failures
    pub strict: bool,
}

/// How a workflow run ended
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// The planner decided no tag is needed
    NoUpdate,
    /// The planned tag is already present
    AlreadyExists,
    /// A tag was planned but not published because of `--dry-run`
    DryRun,
    /// The tag was created and pushed
    Published,
    /// The planner could not derive a tag from its inputs
    PlanFailed(String),
    /// Creating or pushing the tag failed
    PublishFailed(String),
}

impl WorkflowOutcome {
    /// Process exit code for this outcome under the given strictness
    pub fn exit_code(&self, strict: bool) -> i32 {
        match self {
            WorkflowOutcome::PublishFailed(_) => 1,
            WorkflowOutcome::PlanFailed(_) if strict => 1,
            _ => 0,
        }
    }
}

/// Result of a workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Branch name the run was classified from
    pub branch: Option<String>,
    pub branch_type: BranchType,
    /// Planned tag, if any
    pub tag: Option<String>,
    pub outcome: WorkflowOutcome,
    pub warnings: Vec<PlanWarning>,
    /// Whether the run was made with [WorkflowArgs::strict]
    pub strict: bool,
}

impl WorkflowResult {
    /// Process exit code, honoring the strictness the run was made with
    pub fn exit_code(&self) -> i32 {
        self.outcome.exit_code(self.strict)
    }
}

/// Main tagging workflow
///
/// 1. Resolve and classify the current branch
/// 2. Read the tag set and the latest tags on the release and main lines
/// 3. Plan the next tag
/// 4. Skip when the tag already exists, otherwise create and push it
///
/// # Returns
///
/// The run summary. Read failures become warnings; planner and publish
/// failures are reported through [WorkflowOutcome].
pub fn run_workflow(
    args: &WorkflowArgs,
    config: &Config,
    store: &dyn TagStore,
    publisher: &dyn Publisher,
    branch_info: &dyn BranchInfoProvider,
) -> WorkflowResult {
    let mut warnings = Vec::new();

    let branch = resolve_branch(branch_info, &config.branch_detection);
    if branch.is_none() {
        ui::report_warning(&PlanWarning::BranchUnresolved);
        warnings.push(PlanWarning::BranchUnresolved);
    }
    let branch_type = branch
        .as_deref()
        .map(BranchType::classify)
        .unwrap_or(BranchType::Other);
    info!(branch = ?branch, %branch_type, "classified branch");
    ui::display_classification(branch.as_deref(), branch_type);

    // Without a tag listing the idempotency check has nothing to match;
    // the publisher still refuses to overwrite an existing tag.
    let known_tags = match store.all_tags() {
        Ok(tags) => tags,
        Err(e) => {
            warn!(error = %e, "cannot list tags");
            let warning = PlanWarning::TagListFailed {
                reason: e.to_string(),
            };
            ui::report_warning(&warning);
            warnings.push(warning);
            Vec::new()
        }
    };
    ui::display_known_tags(&known_tags, KNOWN_TAGS_SHOWN);

    let base = lookup_line(store, &config.tags.release_branch, config, &mut warnings);
    let main = lookup_line(store, &config.tags.main_branch, config, &mut warnings);
    info!(base = %base.tag, main = %main.tag, "planner inputs");

    let planner = NextVersionPlanner::new(config.policy.clone());
    let plan = match planner.plan(branch_type, &base.tag, &main.tag) {
        Ok(plan) => plan,
        Err(e) => {
            error!(error = %e, "cannot plan next tag");
            ui::display_plan(&base.tag, &main.tag, None);
            ui::display_error(&e.to_string());
            return finish(
                args,
                branch,
                branch_type,
                None,
                WorkflowOutcome::PlanFailed(e.to_string()),
                warnings,
            );
        }
    };
    warnings.extend(plan.warnings.iter().cloned());
    for warning in &plan.warnings {
        ui::report_warning(warning);
    }
    ui::display_plan(&base.tag, &main.tag, plan.next_tag());

    let tag = match plan.outcome {
        PlanOutcome::Tag(tag) => tag,
        PlanOutcome::NoUpdate => {
            info!("no update needed");
            ui::display_status("No version update needed");
            return finish(
                args,
                branch,
                branch_type,
                None,
                WorkflowOutcome::NoUpdate,
                warnings,
            );
        }
    };

    let outcome = if known_tags.iter().any(|t| t == &tag) {
        info!(%tag, "tag already exists; skipping publish");
        ui::display_status(&format!("Tag {} already exists, nothing to publish", tag));
        WorkflowOutcome::AlreadyExists
    } else if args.dry_run {
        ui::display_status(&format!("Dry run: would create and push tag {}", tag));
        WorkflowOutcome::DryRun
    } else {
        ui::display_status(&format!("Creating and pushing tag: {}", tag));
        match publisher.create_and_push(&tag) {
            Ok(()) => {
                info!(%tag, "tag published");
                ui::display_success(&format!("Published tag {}", tag));
                WorkflowOutcome::Published
            }
            Err(e) => {
                error!(%tag, error = %e, "failed to publish tag");
                ui::display_error(&format!("Failed to publish tag '{}': {}", tag, e));
                WorkflowOutcome::PublishFailed(e.to_string())
            }
        }
    };

    finish(args, branch, branch_type, Some(tag), outcome, warnings)
}

fn lookup_line(
    store: &dyn TagStore,
    branch: &str,
    config: &Config,
    warnings: &mut Vec<PlanWarning>,
) -> ResolvedTag {
    let resolved = store.latest_tag(branch).resolve(&config.tags.default_tag);
    let warning = match &resolved.source {
        TagSource::Store if parse_tag(&resolved.tag).is_none() => {
            Some(PlanWarning::UnparsableTag {
                tag: resolved.tag.clone(),
                reason: format!(
                    "latest tag on '{}' is not of the form vX.Y.Z or vX.Y.Z-beta.N",
                    branch
                ),
            })
        }
        TagSource::Store => None,
        TagSource::DefaultNoTag => Some(PlanWarning::NoTagOnBranch {
            branch: branch.to_string(),
            default: resolved.tag.clone(),
        }),
        TagSource::DefaultAfterFailure(reason) => Some(PlanWarning::TagQueryFailed {
            branch: branch.to_string(),
            reason: reason.clone(),
            default: resolved.tag.clone(),
        }),
    };
    if let Some(warning) = warning {
        ui::report_warning(&warning);
        warnings.push(warning);
    }
    resolved
}

fn finish(
    args: &WorkflowArgs,
    branch: Option<String>,
    branch_type: BranchType,
    tag: Option<String>,
    outcome: WorkflowOutcome,
    warnings: Vec<PlanWarning>,
) -> WorkflowResult {
    WorkflowResult {
        branch,
        branch_type,
        tag,
        outcome,
        warnings,
        strict: args.strict,
    }
}
