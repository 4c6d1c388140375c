use thiserror::Error;
use tracing::{debug, info};

use crate::boundary::PlanWarning;
use crate::config::PolicyConfig;
use crate::domain::{format_tag, parse_tag, BranchType, Version};

/// Input conditions that prevent a tag from being derived
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Cannot decode stable base tag '{tag}' from the release line")]
    UndecodableBase { tag: String },

    #[error("Cannot decode beta tag '{tag}' from the main line")]
    UndecodableBeta { tag: String },

    #[error("Next version after '{tag}' does not fit in a version component")]
    VersionOverflow { tag: String },
}

/// What the planner decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    /// A tag should be created
    Tag(String),
    /// Nothing to publish for this branch
    NoUpdate,
}

/// Planner decision plus the non-fatal warnings raised on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub outcome: PlanOutcome,
    pub warnings: Vec<PlanWarning>,
}

impl Plan {
    fn tag(version: &Version, include_beta: bool) -> Self {
        Plan {
            outcome: PlanOutcome::Tag(format_tag(version, include_beta)),
            warnings: Vec::new(),
        }
    }

    fn no_update() -> Self {
        Plan {
            outcome: PlanOutcome::NoUpdate,
            warnings: Vec::new(),
        }
    }

    fn with_warning(mut self, warning: PlanWarning) -> Self {
        self.warnings.push(warning);
        self
    }

    /// The planned tag, if any
    pub fn next_tag(&self) -> Option<&str> {
        match &self.outcome {
            PlanOutcome::Tag(tag) => Some(tag),
            PlanOutcome::NoUpdate => None,
        }
    }
}

/// Reconciles a branch type against the latest stable and beta tags
pub struct NextVersionPlanner {
    policy: PolicyConfig,
}

impl NextVersionPlanner {
    /// Create a new planner
    pub fn new(policy: PolicyConfig) -> Self {
        NextVersionPlanner { policy }
    }

    /// Decide the next tag.
    ///
    /// * `base_tag` - latest tag reachable from the release branch
    /// * `main_tag` - latest tag reachable from the main branch
    ///
    /// Pure: the same inputs always produce the same plan.
    pub fn plan(
        &self,
        branch_type: BranchType,
        base_tag: &str,
        main_tag: &str,
    ) -> Result<Plan, PlanError> {
        let base = parse_tag(base_tag);
        let beta = parse_tag(main_tag);
        debug!(?base, ?beta, "decoded planner inputs");

        if branch_type == BranchType::Release {
            return Ok(self.promote(main_tag, beta));
        }

        let base = base.ok_or_else(|| PlanError::UndecodableBase {
            tag: base_tag.to_string(),
        })?;
        let beta = beta.ok_or_else(|| PlanError::UndecodableBeta {
            tag: main_tag.to_string(),
        })?;

        if !beta.same_core(&base) {
            return self.continue_series(branch_type, main_tag, &beta);
        }

        info!(
            base = %base,
            "beta line matches last stable release; starting a new series"
        );
        let overflow = || PlanError::VersionOverflow {
            tag: base_tag.to_string(),
        };
        let plan = match branch_type {
            BranchType::Feat => {
                let next = base.start_minor_series().ok_or_else(overflow)?;
                Plan::tag(&next, true)
            }
            BranchType::Fix => {
                let next = base.start_patch_series().ok_or_else(overflow)?;
                Plan::tag(&next, true)
            }
            BranchType::Main | BranchType::Other | BranchType::Release => {
                info!(%branch_type, "no series rule for branch type; nothing to tag");
                Plan::no_update()
            }
        };
        if let PlanOutcome::Tag(tag) = &plan.outcome {
            info!(%branch_type, next = %tag, "new beta series");
        }
        Ok(plan)
    }

    fn promote(&self, main_tag: &str, beta: Option<Version>) -> Plan {
        match beta {
            Some(version) if version.is_beta() => {
                let plan = Plan::tag(&version, false);
                info!(from = main_tag, to = ?plan.next_tag(), "promoting beta to stable");
                plan
            }
            _ => {
                info!(main_tag, "no beta on main to promote; reusing main tag verbatim");
                Plan {
                    outcome: PlanOutcome::Tag(main_tag.to_string()),
                    warnings: Vec::new(),
                }
                .with_warning(PlanWarning::PromotionWithoutBeta {
                    main_tag: main_tag.to_string(),
                })
            }
        }
    }

    fn continue_series(
        &self,
        branch_type: BranchType,
        main_tag: &str,
        beta: &Version,
    ) -> Result<Plan, PlanError> {
        if !branch_type.starts_series() && !self.policy.continue_series_on_any_branch {
            info!(
                %branch_type,
                beta = %beta,
                "beta line is stale but branch type does not continue series; nothing to tag"
            );
            return Ok(Plan::no_update());
        }

        let next = beta.next_beta().ok_or_else(|| PlanError::VersionOverflow {
            tag: main_tag.to_string(),
        })?;
        let plan = Plan::tag(&next, true);
        info!(%branch_type, from = %beta, to = ?plan.next_tag(), "continuing beta series");

        if branch_type.starts_series() {
            Ok(plan)
        } else {
            Ok(plan.with_warning(PlanWarning::SeriesContinuedOnUnscopedBranch {
                branch_type,
                beta_tag: beta.to_string(),
            }))
        }
    }
}

impl Default for NextVersionPlanner {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}
