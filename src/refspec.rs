//! Repository target parsing
//!
//! A target names a repository and optionally a ref: `owner/repo` or
//! `owner/repo@ref`. Parsing happens before any network traffic, so a
//! malformed target never costs a fetch.

use crate::error::{GitpackError, Result};

/// Ref used when the target omits `@ref`.
pub const DEFAULT_REF: &str = "main";

/// Parsed repository target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefSpec {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name
    pub name: String,

    /// Branch, tag, or commit-ish to fetch
    pub git_ref: String,
}

impl RefSpec {
    /// Parse a target string of the form `owner/repo[@ref]`.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        let (repo_part, ref_part) = match input.split_once('@') {
            Some((repo, git_ref)) => (repo, Some(git_ref)),
            None => (input, None),
        };

        let Some((owner, name)) = repo_part.split_once('/') else {
            return Err(Self::invalid(input, "expected owner/repo"));
        };

        if owner.is_empty() || name.is_empty() {
            return Err(Self::invalid(input, "owner and repo must be non-empty"));
        }
        if name.contains('/') {
            return Err(Self::invalid(input, "too many path segments"));
        }

        let git_ref = match ref_part {
            Some("") => return Err(Self::invalid(input, "ref after '@' must be non-empty")),
            Some(git_ref) => git_ref.to_string(),
            None => DEFAULT_REF.to_string(),
        };

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
            git_ref,
        })
    }

    fn invalid(input: &str, reason: &str) -> GitpackError {
        GitpackError::InvalidRefSpec {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for RefSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.name, self.git_ref)
    }
}
