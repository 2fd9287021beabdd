//! Revision range membership.

use std::collections::HashSet;
use std::path::Path;

use git2::{Oid, Repository};

use crate::error::GitError;

/// Collect the commit hashes reachable from `to` and not from `from`.
///
/// The equivalent of `git rev-list from..to` in the working tree at `path`,
/// run once per repository. The result is a flat membership set; a PR is in
/// range iff its merge commit hash is a member.
pub fn commits_in_range(
    path: &Path,
    from: &str,
    to: &str,
) -> Result<HashSet<String>, GitError> {
    let repo = Repository::open(path).map_err(|source| GitError::OpenRepository {
        path: path.to_path_buf(),
        source,
    })?;

    let from_oid = resolve_reference(&repo, from)?;
    let to_oid = resolve_reference(&repo, to)?;

    let mut revwalk = repo.revwalk().map_err(GitError::Revwalk)?;
    revwalk.push(to_oid).map_err(GitError::Revwalk)?;
    revwalk.hide(from_oid).map_err(GitError::Revwalk)?;

    let mut hashes = HashSet::new();
    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::Revwalk)?;
        hashes.insert(oid.to_string());
    }

    Ok(hashes)
}

/// Resolve a reference (tag, branch, commit hash) to an OID.
fn resolve_reference(repo: &Repository, reference: &str) -> Result<Oid, GitError> {
    // Try as a direct OID first
    if let Ok(oid) = Oid::from_str(reference) {
        if repo.find_commit(oid).is_ok() {
            return Ok(oid);
        }
    }

    // Try as a reference (branch or tag, annotated tags peel to their commit)
    if let Ok(obj) = repo.revparse_single(reference) {
        return Ok(obj
            .peel_to_commit()
            .map_err(|e| GitError::ReferenceNotFound(reference.to_string(), e))?
            .id());
    }

    Err(GitError::ReferenceNotFound(
        reference.to_string(),
        git2::Error::from_str("Reference not found"),
    ))
}
