//! Error types and handling for gitpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Ordinary action failures (a script exiting non-zero, a file that cannot be
//! deleted) are not errors in this taxonomy; they propagate as booleans through
//! the action model and only surface here as [`GitpackError::ActionsFailed`]
//! at the end of a pipeline run.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gitpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum GitpackError {
    // Usage errors
    #[error("Invalid target '{input}': {reason}")]
    #[diagnostic(
        code(gitpack::refspec::invalid),
        help("Targets look like owner/repo or owner/repo@ref")
    )]
    InvalidRefSpec { input: String, reason: String },

    // Fetch errors
    #[error("Failed to fetch {url}: {reason}")]
    #[diagnostic(
        code(gitpack::fetch::failed),
        help("Check the repository name and your network connection")
    )]
    FetchFailed { url: String, reason: String },

    #[error("Server returned HTTP {status} for {url}")]
    #[diagnostic(
        code(gitpack::fetch::http_status),
        help("A 404 usually means the repository or ref does not exist; private repositories need --token")
    )]
    HttpStatus { url: String, status: u16 },

    #[error("Too many redirects while fetching {url}")]
    #[diagnostic(code(gitpack::fetch::redirect_limit))]
    TooManyRedirects { url: String },

    #[error("Failed to extract archive: {message}")]
    #[diagnostic(code(gitpack::fetch::extract_failed))]
    ExtractFailed { message: String },

    // Manifest errors
    #[error(".gitpack.yaml not found or could not be loaded")]
    #[diagnostic(
        code(gitpack::manifest::not_found),
        help(
            "The repository must carry a gitpack manifest (.gitpack.yaml, .manifest.yaml or .dep.yaml) \
             in its root or in one of .gitpack/, .github/, .gitlab/, .meta/"
        )
    )]
    ManifestNotFound,

    // Action errors
    #[error("{command} actions failed for '{name}'")]
    #[diagnostic(code(gitpack::actions::failed))]
    ActionsFailed { command: String, name: String },

    // System faults
    #[error("IO error: {message}")]
    #[diagnostic(code(gitpack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for GitpackError {
    fn from(err: std::io::Error) -> Self {
        GitpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for GitpackError {
    fn from(err: reqwest::Error) -> Self {
        GitpackError::FetchFailed {
            url: err
                .url()
                .map(ToString::to_string)
                .unwrap_or_else(|| "unknown".to_string()),
            reason: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for GitpackError {
    fn from(err: zip::result::ZipError) -> Self {
        GitpackError::ExtractFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GitpackError>;
