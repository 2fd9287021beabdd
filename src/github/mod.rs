//! GitHub API operations using octocrab.

pub mod auth;
pub mod prs;

pub use auth::resolve_token;
pub use prs::{PullRequest, fetch_closed_prs, fetch_closed_prs_with_client};
