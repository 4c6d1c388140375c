use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use crate::domain::TagLookup;
use crate::error::{BetaTagError, Result};
use crate::git::{Publisher, TagStore};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    latest: HashMap<String, TagLookup>,
    tags: RefCell<BTreeSet<String>>,
    published: RefCell<Vec<String>>,
    push_failure: Option<String>,
    list_failure: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            latest: HashMap::new(),
            tags: RefCell::new(BTreeSet::new()),
            published: RefCell::new(Vec::new()),
            push_failure: None,
            list_failure: None,
        }
    }

    /// Make `tag` the latest tag on `branch` and add it to the tag set
    pub fn set_latest_tag(&mut self, branch: impl Into<String>, tag: impl Into<String>) {
        let tag = tag.into();
        self.tags.borrow_mut().insert(tag.clone());
        self.latest.insert(branch.into(), TagLookup::Found(tag));
    }

    /// Script the lookup result for `branch`
    pub fn set_lookup(&mut self, branch: impl Into<String>, lookup: TagLookup) {
        self.latest.insert(branch.into(), lookup);
    }

    /// Add a tag that is not the latest on any branch
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.borrow_mut().insert(tag.into());
    }

    /// Make every push fail with `reason`
    pub fn fail_push(&mut self, reason: impl Into<String>) {
        self.push_failure = Some(reason.into());
    }

    /// Make tag listing fail with `reason`
    pub fn fail_tag_listing(&mut self, reason: impl Into<String>) {
        self.list_failure = Some(reason.into());
    }

    /// Tags published so far, in order
    pub fn published(&self) -> Vec<String> {
        self.published.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TagStore for MockRepository {
    fn latest_tag(&self, branch: &str) -> TagLookup {
        self.latest
            .get(branch)
            .cloned()
            .unwrap_or(TagLookup::NoneOnBranch)
    }

    fn all_tags(&self) -> Result<Vec<String>> {
        if let Some(reason) = &self.list_failure {
            return Err(BetaTagError::tag(format!("Cannot list tags: {}", reason)));
        }
        Ok(self.tags.borrow().iter().cloned().collect())
    }
}

impl Publisher for MockRepository {
    fn create_and_push(&self, tag: &str) -> Result<()> {
        if !self.tags.borrow_mut().insert(tag.to_string()) {
            return Err(BetaTagError::tag(format!("Tag '{}' already exists", tag)));
        }
        if let Some(reason) = &self.push_failure {
            self.tags.borrow_mut().remove(tag);
            return Err(BetaTagError::remote(format!("Push failed: {}", reason)));
        }
        self.published.borrow_mut().push(tag.to_string());
        Ok(())
    }
}
