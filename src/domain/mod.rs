//! Domain logic - pure versioning rules independent of git operations

pub mod branch;
pub mod codec;
pub mod commit;
pub mod tag;
pub mod version;

pub use branch::BranchType;
pub use codec::{format_tag, parse_tag};
pub use commit::{infer_branch_from_message, BranchHint, HintSource};
pub use tag::{ResolvedTag, TagLookup, TagSource};
pub use version::Version;
