use std::fmt;

/// Version carried by a release or beta tag.
///
/// `beta == None` is a stable release; `beta == Some(n)` is iteration `n`
/// of the beta series for the same `major.minor.patch` core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub beta: Option<u32>,
}

impl Version {
    /// Create a stable version
    pub fn stable(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            beta: None,
        }
    }

    /// Create a beta version
    pub fn beta(major: u32, minor: u32, patch: u32, beta: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            beta: Some(beta),
        }
    }

    /// The `(major, minor, patch)` triple, excluding the beta counter
    pub fn core(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }

    pub fn same_core(&self, other: &Version) -> bool {
        self.core() == other.core()
    }

    pub fn is_beta(&self) -> bool {
        self.beta.is_some()
    }

    /// Drop the beta counter (promotion of a beta to stable)
    pub fn without_beta(&self) -> Self {
        Version { beta: None, ..*self }
    }

    /// Next iteration of this beta series, keeping the core untouched.
    ///
    /// A version without a counter starts its series at 0. Returns `None`
    /// when the counter is already `u32::MAX`.
    pub fn next_beta(&self) -> Option<Self> {
        let beta = match self.beta {
            Some(n) => n.checked_add(1)?,
            None => 0,
        };
        Some(Version {
            beta: Some(beta),
            ..*self
        })
    }

    /// First beta of the next minor line: `X.(Y+1).0-beta.0`
    pub fn start_minor_series(&self) -> Option<Self> {
        let minor = self.minor.checked_add(1)?;
        Some(Version::beta(self.major, minor, 0, 0))
    }

    /// First beta of the next patch line: `X.Y.(Z+1)-beta.0`
    pub fn start_patch_series(&self) -> Option<Self> {
        let patch = self.patch.checked_add(1)?;
        Some(Version::beta(self.major, self.minor, patch, 0))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(n) = self.beta {
            write!(f, "-beta.{}", n)?;
        }
        Ok(())
    }
}
