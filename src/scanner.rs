//! Bucket discovery and parallel search
//!
//! Every directory under the buckets root is a bucket whose manifests live in its
//! `bucket` subfolder. Buckets are matched in parallel on the rayon pool; each task
//! hands its results to an [`Aggregator`] and the aggregate is only read after all
//! tasks have joined.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use rayon::prelude::*;

use crate::error::{Result, SearchError};
use crate::manifest::{self, BucketResults};

/// Folder inside each bucket that holds the manifests
pub const MANIFEST_SUBDIR: &str = "bucket";

/// Matches of every discovered bucket, keyed by bucket name
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregateResults {
    buckets: HashMap<String, BucketResults>,
}

impl AggregateResults {
    /// Number of buckets, including those without matches
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn get(&self, bucket: &str) -> Option<&BucketResults> {
        self.buckets.get(bucket)
    }

    pub fn total_matches(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Buckets in plain lexicographic order of their names
    pub fn sorted(&self) -> Vec<(&str, &BucketResults)> {
        let mut entries: Vec<_> = self
            .buckets
            .iter()
            .map(|(name, results)| (name.as_str(), results))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl FromIterator<(String, BucketResults)> for AggregateResults {
    fn from_iter<I: IntoIterator<Item = (String, BucketResults)>>(iter: I) -> Self {
        Self {
            buckets: iter.into_iter().collect(),
        }
    }
}

/// Collects per-bucket results from concurrent tasks
#[derive(Debug, Default)]
pub struct Aggregator {
    inner: Mutex<AggregateResults>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the results of one bucket
    pub fn record(&self, bucket: String, results: BucketResults) {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = guard.buckets.insert(bucket, results);
        debug_assert!(previous.is_none(), "bucket recorded twice");
    }

    /// Hand out the aggregate once every writer is done
    pub fn finish(self) -> AggregateResults {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// A bucket directory found under the buckets root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub name: String,
    pub path: PathBuf,
}

impl Bucket {
    pub fn manifest_dir(&self) -> PathBuf {
        self.path.join(MANIFEST_SUBDIR)
    }
}

/// List the bucket directories under `root`
pub fn discover_buckets(root: &Path) -> Result<Vec<Bucket>> {
    let entries = std::fs::read_dir(root).map_err(|e| root_error(root, &e))?;

    let mut buckets = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| root_error(root, &e))?;
        let path = entry.path();
        if path.is_dir() {
            buckets.push(Bucket {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
            });
        }
    }
    buckets.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(buckets)
}

fn root_error(root: &Path, err: &std::io::Error) -> SearchError {
    let path = root.display().to_string();
    if err.kind() == ErrorKind::NotFound {
        SearchError::ScoopNotInstalled { path }
    } else {
        SearchError::RootReadFailed {
            path,
            reason: err.to_string(),
        }
    }
}

/// Search every bucket under `root` for `query`.
///
/// The query is lowercased once here. Any bucket failure aborts the whole search,
/// no partial aggregate is returned.
pub fn scan(root: &Path, query: &str) -> Result<AggregateResults> {
    let buckets = discover_buckets(root)?;
    tracing::debug!(root = %root.display(), buckets = buckets.len(), "buckets discovered");

    let term = query.to_lowercase();
    let aggregator = Aggregator::new();

    buckets.par_iter().try_for_each(|bucket| -> Result<()> {
        let results = manifest::match_bucket(&bucket.name, &bucket.manifest_dir(), &term)?;
        aggregator.record(bucket.name.clone(), results);
        Ok(())
    })?;

    let aggregate = aggregator.finish();
    tracing::debug!(matches = aggregate.total_matches(), "search finished");
    Ok(aggregate)
}
