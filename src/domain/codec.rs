//! Tag string <-> [`Version`] conversion.
//!
//! Wire format: `v<major>.<minor>.<patch>` or `v<major>.<minor>.<patch>-beta.<n>`.
//! The leading `v` is optional when parsing and always written when formatting.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::Version;
use crate::error::BetaTagError;

fn tag_regex() -> Option<&'static Regex> {
    static TAG_RE: OnceLock<Option<Regex>> = OnceLock::new();
    TAG_RE
        .get_or_init(|| Regex::new(r"^v?(\d+)\.(\d+)\.(\d+)(?:-beta\.(\d+))?$").ok())
        .as_ref()
}

/// Decode a tag string into a [`Version`].
///
/// Total: any string that is not exactly `v?X.Y.Z(-beta.N)?`, or whose
/// components overflow `u32`, yields `None`.
pub fn parse_tag(tag: &str) -> Option<Version> {
    let captures = tag_regex()?.captures(tag)?;
    let number = |i: usize| captures.get(i).map(|m| m.as_str().parse::<u32>());

    let major = number(1)?.ok()?;
    let minor = number(2)?.ok()?;
    let patch = number(3)?.ok()?;
    let beta = match number(4) {
        Some(parsed) => Some(parsed.ok()?),
        None => None,
    };

    Some(Version {
        major,
        minor,
        patch,
        beta,
    })
}

/// Render a [`Version`] as a tag, with the `-beta.N` suffix only when
/// `include_beta` is set and the version carries a counter.
pub fn format_tag(version: &Version, include_beta: bool) -> String {
    if include_beta {
        version.to_string()
    } else {
        version.without_beta().to_string()
    }
}

impl FromStr for Version {
    type Err = BetaTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag(s).ok_or_else(|| {
            BetaTagError::version(format!(
                "Invalid tag format: '{}' - expected vX.Y.Z or vX.Y.Z-beta.N",
                s
            ))
        })
    }
}
