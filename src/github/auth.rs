//! GitHub credential resolution.
//!
//! The token comes from the `--token` flag when given, otherwise from the
//! GITHUB_TOKEN environment variable. There is no interactive auth flow.

use std::env;

use crate::error::GitHubError;

/// Resolve the GitHub token from the CLI flag or the environment.
///
/// Fails with [`GitHubError::MissingToken`] before any network call is made.
pub fn resolve_token(flag: Option<&str>) -> Result<String, GitHubError> {
    if let Some(token) = flag {
        if !token.is_empty() {
            return Ok(token.to_string());
        }
    }

    if let Ok(token) = env::var("GITHUB_TOKEN") {
        if !token.is_empty() {
            return Ok(token);
        }
    }

    Err(GitHubError::MissingToken)
}
