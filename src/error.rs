//! Error types and handling for scoop-search
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//! Every variant is fatal: a search either completes or aborts with one of these.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for scoop-search operations
#[derive(Error, Diagnostic, Debug)]
pub enum SearchError {
    // Environment errors
    #[error("Scoop buckets folder does not exist: {path}")]
    #[diagnostic(
        code(scoop_search::env::not_installed),
        help("Is Scoop installed? Use --buckets-dir or SCOOP_SEARCH_BUCKETS to point at a buckets folder")
    )]
    ScoopNotInstalled { path: String },

    #[error("Failed to read buckets folder {path}: {reason}")]
    #[diagnostic(code(scoop_search::env::root_read_failed))]
    RootReadFailed { path: String, reason: String },

    #[error("Could not determine home directory")]
    #[diagnostic(
        code(scoop_search::env::no_home),
        help("Set SCOOP or pass --buckets-dir explicitly")
    )]
    HomeDirUnavailable,

    // Bucket errors
    #[error("Failed to read bucket '{bucket}' at {path}: {reason}")]
    #[diagnostic(
        code(scoop_search::bucket::read_failed),
        help("The bucket looks broken. Try removing it with 'scoop bucket rm' and adding it again")
    )]
    BucketReadFailed {
        bucket: String,
        path: String,
        reason: String,
    },

    // Manifest errors
    #[error("Failed to read manifest {path}: {reason}")]
    #[diagnostic(code(scoop_search::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest {path}: {reason}")]
    #[diagnostic(code(scoop_search::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Cannot parse \"bin\" attribute in manifest {path}: unexpected {found}")]
    #[diagnostic(
        code(scoop_search::manifest::unexpected_bin),
        help("This should not happen. Please open an issue about it with steps to reproduce")
    )]
    UnexpectedBinShape { path: String, found: String },

    // Input errors
    #[error("Search query must not be empty")]
    #[diagnostic(
        code(scoop_search::query::empty),
        help("Pass a part of a package or executable name, e.g. 'scoop-search git'")
    )]
    EmptyQuery,

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(scoop_search::completions::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Output errors
    #[error("IO error: {message}")]
    #[diagnostic(code(scoop_search::io))]
    IoError { message: String },
}

impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        SearchError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SearchError>;
