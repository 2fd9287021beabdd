//! PR fetching via octocrab.

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::GitHubError;

/// A closed pull request, decoded once at the fetch boundary.
///
/// Downstream code only ever sees this type, never the raw API record.
/// Identity across the whole pipeline is `(head_repo, number)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub author: String,
    pub merge_commit_sha: Option<String>,
    pub labels: Vec<String>,
    pub html_url: String,
    pub head_repo: String,
}

/// Safety valve against a pathological pagination loop.
const MAX_PAGES: u32 = 50;

/// Fetch all closed PRs from a GitHub repository using a token.
///
/// This is the main entry point that constructs the octocrab client.
pub async fn fetch_closed_prs(
    token: &str,
    owner: &str,
    repo: &str,
) -> Result<Vec<PullRequest>, GitHubError> {
    let octocrab = Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|e| GitHubError::Fetch(Box::new(e)))?;

    fetch_closed_prs_with_client(&octocrab, owner, repo).await
}

/// Fetch all closed PRs using a pre-configured octocrab client.
///
/// Pages through the closed-PR list endpoint (page size 100) until no further
/// page is indicated, accumulating results in API response order. Unmerged
/// closed PRs are kept; the range selector drops them since they carry no
/// merge commit hash.
///
/// The `_with_client` seam allows dependency injection for testing with mock
/// servers.
pub async fn fetch_closed_prs_with_client(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
) -> Result<Vec<PullRequest>, GitHubError> {
    let mut all_prs = Vec::new();
    let mut page = 1u32;

    loop {
        let result = octocrab
            .pulls(owner, repo)
            .list()
            .state(octocrab::params::State::Closed)
            .per_page(100)
            .page(page)
            .send()
            .await;

        let prs_page = match result {
            Ok(page) => page,
            Err(e) => return Err(classify_fetch_error(e, owner, repo)),
        };

        let items = prs_page.items;
        if items.is_empty() {
            break;
        }

        for pr in items {
            let head_repo = pr
                .head
                .repo
                .as_ref()
                .and_then(|r| r.full_name.clone())
                .unwrap_or_else(|| format!("{}/{}", owner, repo));

            let labels = pr
                .labels
                .unwrap_or_default()
                .into_iter()
                .map(|l| l.name)
                .collect();

            all_prs.push(PullRequest {
                number: pr.number,
                title: pr.title.unwrap_or_default(),
                body: pr.body,
                author: pr.user.as_ref().map_or("", |u| &u.login).to_string(),
                merge_commit_sha: pr.merge_commit_sha,
                labels,
                html_url: pr.html_url.map(|u| u.to_string()).unwrap_or_default(),
                head_repo,
            });
        }

        if prs_page.next.is_none() {
            break;
        }

        page += 1;

        if page > MAX_PAGES {
            warn!(
                "Reached {}-page safety limit while fetching PRs for {}/{}",
                MAX_PAGES, owner, repo
            );
            break;
        }
    }

    Ok(all_prs)
}

/// Map an octocrab error onto the error kinds the caller distinguishes.
///
/// Octocrab surfaces HTTP failures in more than one error shape, so the
/// content is checked through both Display and Debug output.
fn classify_fetch_error(e: octocrab::Error, owner: &str, repo: &str) -> GitHubError {
    let err_display = e.to_string();
    let err_debug = format!("{:?}", e);

    if err_display.contains("Bad credentials")
        || err_debug.contains("Bad credentials")
        || err_display.contains("Unauthorized")
        || err_debug.contains("401")
    {
        return GitHubError::AuthenticationFailed;
    }

    if err_display.contains("Not Found") || err_debug.contains("Not Found") {
        return GitHubError::RepositoryNotFound {
            owner: owner.to_string(),
            repo: repo.to_string(),
        };
    }

    GitHubError::Fetch(Box::new(e))
}
