//! Decision engine for the next beta or stable tag

pub mod next_version;

pub use next_version::{NextVersionPlanner, Plan, PlanError, PlanOutcome};
