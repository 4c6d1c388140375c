//! Version-control seam
//!
//! The planner never talks to git directly. The workflow reads tag snapshots
//! through [TagStore] and publishes through [Publisher]; both are implemented
//! by:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for tests
//!
//! ```rust
//! # use git_beta_tag::git::TagStore;
//! # use git_beta_tag::domain::TagLookup;
//! # fn example<S: TagStore>(store: &S) {
//! match store.latest_tag("release") {
//!     TagLookup::Found(tag) => println!("latest stable: {}", tag),
//!     TagLookup::NoneOnBranch => println!("nothing released yet"),
//!     TagLookup::QueryFailed(reason) => eprintln!("lookup failed: {}", reason),
//! }
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::TagLookup;
use crate::error::Result;

/// Read access to the repository's tags
pub trait TagStore {
    /// Latest tag reachable from `branch`.
    ///
    /// Never fails: absence and lookup failure are reported as
    /// [TagLookup::NoneOnBranch] and [TagLookup::QueryFailed].
    fn latest_tag(&self, branch: &str) -> TagLookup;

    /// Every tag name in the repository
    fn all_tags(&self) -> Result<Vec<String>>;
}

/// Write access: creating a tag and publishing it
pub trait Publisher {
    /// Create `tag` on the current HEAD and push it to the remote.
    ///
    /// A tag that was created but could not be pushed is removed again, so a
    /// later run does not mistake it for a published one.
    ///
    /// # Returns
    /// * `Ok(())` - Tag created and pushed
    /// * `Err` - Creation or push failed; callers treat this as fatal
    fn create_and_push(&self, tag: &str) -> Result<()>;
}
