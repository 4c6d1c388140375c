/// Result of asking the tag store for the latest tag reachable from a branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLookup {
    /// A tag is reachable from the branch
    Found(String),
    /// The branch exists but no tag is reachable from it yet
    NoneOnBranch,
    /// The lookup could not be completed
    QueryFailed(String),
}

/// Where a [`ResolvedTag`] came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSource {
    Store,
    DefaultNoTag,
    DefaultAfterFailure(String),
}

/// Tag used as planner input after default substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    pub tag: String,
    pub source: TagSource,
}

impl TagLookup {
    /// Substitute `default` when no tag could be obtained.
    ///
    /// The returned source keeps "no tag yet" and "lookup failed" apart so
    /// callers can report them differently.
    pub fn resolve(self, default: &str) -> ResolvedTag {
        match self {
            TagLookup::Found(tag) => ResolvedTag {
                tag,
                source: TagSource::Store,
            },
            TagLookup::NoneOnBranch => ResolvedTag {
                tag: default.to_string(),
                source: TagSource::DefaultNoTag,
            },
            TagLookup::QueryFailed(reason) => ResolvedTag {
                tag: default.to_string(),
                source: TagSource::DefaultAfterFailure(reason),
            },
        }
    }
}
