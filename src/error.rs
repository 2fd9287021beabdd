//! Error types for mergelog modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from GitHub API operations.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("No GitHub token found. Pass --token or set the GITHUB_TOKEN environment variable")]
    MissingToken,

    #[error("GitHub rejected the token. Check that it is valid and has repo scope")]
    AuthenticationFailed,

    #[error("Repository not found: {owner}/{repo}")]
    RepositoryNotFound { owner: String, repo: String },

    #[error("Failed to fetch pull requests: {0}")]
    Fetch(#[source] Box<octocrab::Error>),
}

/// Errors from git history queries.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open git working tree at {}: {source}", path.display())]
    OpenRepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to resolve reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("Failed to walk commit range: {0}")]
    Revwalk(#[source] git2::Error),
}
