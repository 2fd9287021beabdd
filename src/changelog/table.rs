//! Tab-separated table rendering.

use super::select::ClassifiedPr;

/// Fixed column names for the tabular output.
pub const TABLE_COLUMNS: [&str; 7] = [
    "Title",
    "User",
    "IsChangelog",
    "IsBreaking",
    "Changelog Section",
    "Repo",
    "Link",
];

/// Render the selected PRs as a tab-separated table.
///
/// One header row, then one row per PR in input order. Unclassified PRs are
/// included here; only the label filter can keep a PR out of the table.
/// Commas in titles become periods, and the link cell is a HYPERLINK formula
/// displaying the URL itself.
pub fn render_table(prs: &[ClassifiedPr]) -> String {
    let mut out = String::new();

    out.push_str(&TABLE_COLUMNS.join("\t"));
    out.push('\n');

    for item in prs {
        let title = item.pr.title.replace(',', ".");
        let link = format!("=HYPERLINK(\"{0}\", \"{0}\")", item.pr.html_url);

        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            title,
            item.pr.author,
            item.changelog,
            item.breaking,
            item.section,
            item.pr.head_repo,
            link,
        ));
    }

    out
}
