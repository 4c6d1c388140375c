use thiserror::Error;

/// Unified error type for git-beta-tag operations
#[derive(Error, Debug)]
pub enum BetaTagError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-beta-tag
pub type Result<T> = std::result::Result<T, BetaTagError>;

impl BetaTagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BetaTagError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BetaTagError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        BetaTagError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        BetaTagError::Remote(msg.into())
    }
}

impl From<toml::de::Error> for BetaTagError {
    fn from(err: toml::de::Error) -> Self {
        BetaTagError::config(err.to_string())
    }
}
