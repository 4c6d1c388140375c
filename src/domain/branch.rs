use std::fmt;

/// Branch kind in the feat/fix -> main (beta) -> release (stable) flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchType {
    Feat,
    Fix,
    Main,
    Release,
    Other,
}

impl BranchType {
    /// Classify a branch by name.
    ///
    /// `feat/...` and `fix/...` are matched by prefix, `main` and `release`
    /// only by exact name. Everything else is `Other`.
    pub fn classify(name: &str) -> Self {
        if name.starts_with("feat/") {
            BranchType::Feat
        } else if name.starts_with("fix/") {
            BranchType::Fix
        } else if name == "main" {
            BranchType::Main
        } else if name == "release" {
            BranchType::Release
        } else {
            BranchType::Other
        }
    }

    /// Whether this branch type seeds a new beta series
    pub fn starts_series(&self) -> bool {
        matches!(self, BranchType::Feat | BranchType::Fix)
    }
}

impl fmt::Display for BranchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BranchType::Feat => "feat",
            BranchType::Fix => "fix",
            BranchType::Main => "main",
            BranchType::Release => "release",
            BranchType::Other => "other",
        };
        write!(f, "{}", label)
    }
}
