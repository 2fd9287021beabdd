//! Range and label selection.

use std::collections::HashSet;

use serde::Serialize;

use crate::github::PullRequest;

use super::section::{Section, classify};

/// A PR that passed range and label selection, with its computed section.
///
/// The `changelog` and `breaking` flags are retained independently of
/// `section` for tabular display, even though `section` supersedes them for
/// document rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedPr {
    pub pr: PullRequest,
    pub section: Section,
    pub changelog: bool,
    pub breaking: bool,
}

/// The selector's output for one repository.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Selection {
    pub prs: Vec<ClassifiedPr>,
    /// Distinct author logins among the selected PRs, in first-seen order.
    pub contributors: Vec<String>,
}

/// Keep the PRs whose merge commit lies in the range, classify them, and
/// collect their authors.
///
/// A PR is in range iff it has a merge commit hash and that hash is a member
/// of `in_range`; closed-but-unmerged PRs never qualify. When `label_filter`
/// is `Some`, a PR must additionally carry at least one label containing one
/// of the filter entries; when `None`, everything in range passes, including
/// PRs that classify as `Unclassified`.
pub fn select_in_range(
    prs: Vec<PullRequest>,
    in_range: &HashSet<String>,
    label_filter: Option<&[String]>,
) -> Selection {
    let mut selected = Vec::new();
    let mut contributors = Vec::new();
    let mut seen_authors = HashSet::new();

    for pr in prs {
        let merged_in_range = pr
            .merge_commit_sha
            .as_deref()
            .is_some_and(|sha| in_range.contains(sha));
        if !merged_in_range {
            continue;
        }

        if let Some(filter) = label_filter {
            let matches = pr
                .labels
                .iter()
                .any(|label| filter.iter().any(|wanted| label.contains(wanted.as_str())));
            if !matches {
                continue;
            }
        }

        let section = classify(&pr.labels);
        let changelog = pr.labels.iter().any(|l| l.contains("changelog"));
        let breaking = pr.labels.iter().any(|l| l.contains("breaking"));

        if seen_authors.insert(pr.author.clone()) {
            contributors.push(pr.author.clone());
        }

        selected.push(ClassifiedPr {
            pr,
            section,
            changelog,
            breaking,
        });
    }

    Selection {
        prs: selected,
        contributors,
    }
}
