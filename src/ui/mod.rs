//! User interface module - terminal output for the tagging workflow.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Output sinks the workflow reports through

use crate::boundary::PlanWarning;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_classification, display_error, display_known_tags, display_plan, display_status,
    display_success, display_warning,
};

/// Report a warning on the terminal and in the log.
pub fn report_warning(warning: &PlanWarning) {
    tracing::warn!(%warning, "non-fatal condition");
    display_warning(warning);
}
