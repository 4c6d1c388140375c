use regex::Regex;

/// Branch hint recovered from a commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchHint {
    /// Either `feat` or `fix`
    pub kind: String,
    /// Remainder used to build a branch name
    pub topic: String,
    pub source: HintSource,
}

/// Which pattern produced a [`BranchHint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintSource {
    MergeCommit,
    ConventionalPrefix,
}

impl BranchHint {
    /// Parse a commit message for a feat/fix branch hint.
    ///
    /// Supports:
    /// - `Merge pull request #N from owner/feat/topic`
    /// - `feat:` / `feat(` prefixes
    /// - `fix:` / `fix(` prefixes
    ///
    /// Only the first line of the message is inspected.
    pub fn parse(message: &str) -> Option<Self> {
        let first_line = message.lines().next().unwrap_or_default().trim();

        if let Some(captures) = Regex::new(r"^Merge pull request #\d+ from [^/\s]+/(feat|fix)/(\S*)")
            .ok()
            .and_then(|re| re.captures(first_line))
        {
            let kind = captures
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let topic = captures
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            return Some(BranchHint {
                kind,
                topic,
                source: HintSource::MergeCommit,
            });
        }

        if let Some(captures) = Regex::new(r"^(feat|fix)[:(](.*)")
            .ok()
            .and_then(|re| re.captures(first_line))
        {
            let kind = captures
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let rest = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
            // `feat(scope): subject` keeps only the subject
            let subject = rest.split_once(':').map(|(_, s)| s).unwrap_or(rest);

            return Some(BranchHint {
                kind,
                topic: slugify(subject),
                source: HintSource::ConventionalPrefix,
            });
        }

        None
    }

    /// Synthetic branch name, e.g. `feat/add-login`
    pub fn branch_name(&self) -> String {
        format!("{}/{}", self.kind, self.topic)
    }
}

/// Infer a `feat/...` or `fix/...` branch name from a commit message
pub fn infer_branch_from_message(message: &str) -> Option<String> {
    BranchHint::parse(message).map(|hint| hint.branch_name())
}

fn slugify(subject: &str) -> String {
    subject
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
