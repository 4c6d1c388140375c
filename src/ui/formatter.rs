//! Pure formatting functions for UI output.
//!
//! Display helpers print; the `format_*` helpers return strings and are what
//! the tests exercise.

use console::style;

use crate::boundary::PlanWarning;
use crate::domain::{parse_tag, BranchType};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning.
pub fn display_warning(warning: &PlanWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the resolved branch and its classification.
pub fn display_classification(branch: Option<&str>, branch_type: BranchType) {
    println!(
        "\n{} {} ({})",
        style("Branch:").bold(),
        branch.unwrap_or("<unresolved>"),
        style(branch_type).cyan()
    );
}

/// Display the tags currently known to the repository.
///
/// Versions are listed in ascending order, at most `limit` of them. Tags that
/// are not versions are only counted.
pub fn display_known_tags(tags: &[String], limit: usize) {
    println!("{}", style(format!("Known tags ({}):", tags.len())).underlined());
    for line in format_known_tags(tags, limit) {
        println!("  {}", line);
    }
}

/// Display the planner inputs and the computed next tag.
pub fn display_plan(base_tag: &str, main_tag: &str, next_tag: Option<&str>) {
    println!("\n{}", style("Version plan:").bold());
    println!("  Stable base (release): {}", base_tag);
    println!("  Beta line (main):      {}", main_tag);
    match next_tag {
        Some(tag) => println!("  Next tag:              {}", style(tag).green()),
        None => println!("  Next tag:              {}", style("no update").dim()),
    }
}

/// Sort version tags and render the newest `limit` of them.
///
/// Tags that do not decode are left out of the listing and summarized on a
/// trailing line, so they never displace real versions.
pub fn format_known_tags(tags: &[String], limit: usize) -> Vec<String> {
    let mut versions: Vec<(_, &String)> = tags
        .iter()
        .filter_map(|tag| {
            // Stable sorts after its own betas
            parse_tag(tag).map(|v| {
                let key = (v.major, v.minor, v.patch, v.beta.map_or(u64::MAX, u64::from));
                (key, tag)
            })
        })
        .collect();
    versions.sort();
    let skipped = tags.len() - versions.len();

    let shown = versions.len().min(limit);
    let mut lines: Vec<String> = versions
        .iter()
        .skip(versions.len() - shown)
        .map(|(_, tag)| tag.to_string())
        .collect();
    if versions.len() > shown {
        lines.insert(0, format!("... and {} older tags", versions.len() - shown));
    }
    if skipped > 0 {
        lines.push(format!("({} non-version tags not shown)", skipped));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_known_tags_sorted_by_version() {
        let lines = format_known_tags(
            &tags(&["v1.10.0", "v1.2.0", "v1.2.0-beta.10", "v1.2.0-beta.2"]),
            10,
        );
        assert_eq!(
            lines,
            tags(&["v1.2.0-beta.2", "v1.2.0-beta.10", "v1.2.0", "v1.10.0"])
        );
    }

    #[test]
    fn test_unparseable_tags_are_counted_not_listed() {
        let lines = format_known_tags(&tags(&["nightly", "v0.1.0"]), 10);
        assert_eq!(lines, tags(&["v0.1.0", "(1 non-version tags not shown)"]));
    }

    #[test]
    fn test_unparseable_tags_do_not_displace_newest() {
        let lines = format_known_tags(
            &tags(&["build-1", "build-2", "v1.0.0", "v1.1.0", "v1.2.0"]),
            2,
        );
        assert_eq!(
            lines,
            tags(&[
                "... and 1 older tags",
                "v1.1.0",
                "v1.2.0",
                "(2 non-version tags not shown)"
            ])
        );
    }

    #[test]
    fn test_known_tags_limit_keeps_newest() {
        let lines = format_known_tags(&tags(&["v1.0.0", "v1.1.0", "v1.2.0"]), 2);
        assert_eq!(lines, tags(&["... and 1 older tags", "v1.1.0", "v1.2.0"]));
    }

    #[test]
    fn test_known_tags_empty() {
        assert!(format_known_tags(&[], 5).is_empty());
    }

    #[test]
    fn test_display_functions_do_not_panic() {
        display_status("resolving tags");
        display_success("done");
        display_error("failed");
        display_classification(None, BranchType::Other);
        display_plan("v1.0.0", "v1.1.0-beta.0", None);
    }
}
