//! Markdown document rendering.

use super::section::Section;
use super::select::ClassifiedPr;

/// Render the selected PRs as a markdown changelog document.
///
/// A version heading, then subsections in fixed order: `Added`, `Changed`
/// (with `Breaking` items first), `Fixed`. Input order is preserved within
/// each subsection and empty subsections are skipped. `Unclassified` PRs
/// never appear. The caller supplies the heading date; rendering never reads
/// the clock and is byte-identical for a fixed input.
pub fn render_document(prs: &[ClassifiedPr], version: &str, date: &str) -> String {
    let mut out = format!("## [{}] - {}\n\n", version, date);

    let added = of_section(prs, &[Section::Added]);
    // Changed = Breaking first, then Changed
    let changed = of_section(prs, &[Section::Breaking, Section::Changed]);
    let fixed = of_section(prs, &[Section::Fixed]);

    for (heading, items) in [("Added", added), ("Changed", changed), ("Fixed", fixed)] {
        if items.is_empty() {
            continue;
        }

        out.push_str(&format!("### {}\n\n", heading));
        for item in items {
            out.push_str(&render_entry(item));
        }
    }

    out
}

/// Collect PRs of the given sections, in section order, input order within.
fn of_section<'a>(prs: &'a [ClassifiedPr], sections: &[Section]) -> Vec<&'a ClassifiedPr> {
    sections
        .iter()
        .flat_map(|section| prs.iter().filter(move |p| p.section == *section))
        .collect()
}

/// Render one PR entry: a comment line tagging the section and the PR,
/// a bullet line, and the raw body between comment markers.
///
/// The body is emitted verbatim, not sanitized or escaped; downstream
/// rendering safety is the consumer's responsibility.
fn render_entry(item: &ClassifiedPr) -> String {
    let pr_ref = format!("{}#{}", item.pr.head_repo, item.pr.number);
    let prefix = if item.section == Section::Breaking {
        "(Breaking) "
    } else {
        ""
    };

    let mut entry = format!("<!-- {}: {} -->\n", item.section, pr_ref);
    entry.push_str(&format!(
        "- {}{} [{}]({})\n",
        prefix, item.pr.title, pr_ref, item.pr.html_url
    ));
    entry.push_str("<!-- begin body -->\n");
    if let Some(body) = &item.pr.body {
        entry.push_str(body);
        entry.push('\n');
    }
    entry.push_str("<!-- end body -->\n\n");

    entry
}
