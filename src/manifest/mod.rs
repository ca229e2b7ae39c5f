//! Scoop manifest model and per-bucket matching
//!
//! This module is organized into:
//! - [`bin`]: decoding of the polymorphic `bin` field
//! - [`matcher`]: scanning one bucket directory for matching manifests

use serde::Deserialize;
use serde_json::Value;

pub mod bin;
pub mod matcher;

pub use bin::BinField;
pub use matcher::match_bucket;

/// File extension of manifest files inside a bucket
pub const MANIFEST_EXTENSION: &str = "json";

/// A manifest that satisfied the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Manifest file name without extension
    name: String,
    /// Declared version, empty when absent or not a string
    version: String,
    /// Executable basename that matched, set only when the package name itself did not match
    executable: Option<String>,
}

impl Match {
    pub fn by_name(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            executable: None,
        }
    }

    pub fn by_executable(
        name: impl Into<String>,
        version: impl Into<String>,
        executable: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            executable: Some(executable.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn executable(&self) -> Option<&str> {
        self.executable.as_deref()
    }
}

/// Matches of a single bucket, sorted case-insensitively by name
pub type BucketResults = Vec<Match>;

/// The only manifest fields the search looks at.
///
/// Both are kept as raw JSON so that shape problems surface from [`BinField::decode`]
/// instead of failing the whole document.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawManifest {
    #[serde(default)]
    pub version: Value,
    #[serde(default)]
    pub bin: Value,
}

impl RawManifest {
    pub fn version(&self) -> &str {
        self.version.as_str().unwrap_or_default()
    }
}
