//! Changelog sections and the label classification rules.

use serde::Serialize;

/// The changelog section a PR is assigned to.
///
/// Assigned once by [`classify`] and never overwritten. `Unclassified` PRs
/// are invisible to document rendering; they only surface in tabular mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Section {
    Breaking,
    Added,
    Changed,
    Fixed,
    Unclassified,
}

impl Section {
    /// Get the display name for the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breaking => "Breaking",
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Fixed => "Fixed",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered classification rules, first match wins.
///
/// Precedence lives in this table, not in control flow: a PR labeled both
/// "bug" and "impact/breaking" is `Fixed` because the bug rule comes first.
const CLASSIFICATION_RULES: &[(&[&str], Section)] = &[
    (&["bug"], Section::Fixed),
    (&["feature", "enhancement"], Section::Added),
    (&["breaking"], Section::Breaking),
    (&["changelog"], Section::Changed),
];

/// Classify a PR by its labels. Label matching is by substring, not exact.
pub fn classify(labels: &[String]) -> Section {
    for (needles, section) in CLASSIFICATION_RULES {
        if needles
            .iter()
            .any(|needle| labels.iter().any(|label| label.contains(needle)))
        {
            return *section;
        }
    }

    Section::Unclassified
}
