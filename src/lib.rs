pub mod boundary;
pub mod branch_info;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod planner;
pub mod ui;

pub use error::{BetaTagError, Result};
