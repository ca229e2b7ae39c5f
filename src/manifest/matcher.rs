//! Matching of the manifests in one bucket directory

use std::fs;
use std::path::{Path, PathBuf};

use super::{BinField, BucketResults, MANIFEST_EXTENSION, Match, RawManifest};
use crate::error::{Result, SearchError};

/// Scan the manifests of one bucket for `term`.
///
/// `term` must already be lowercase. A manifest contributes at most one match: by its
/// file name first, otherwise by the first of its executables whose stem contains `term`.
/// The result is sorted case-insensitively by name, ties keep file-name order.
pub fn match_bucket(bucket: &str, dir: &Path, term: &str) -> Result<BucketResults> {
    let manifests = list_manifests(dir).map_err(|e| SearchError::BucketReadFailed {
        bucket: bucket.to_string(),
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut results = BucketResults::new();
    for path in &manifests {
        if let Some(found) = match_manifest(path, term)? {
            results.push(found);
        }
    }

    sort_matches(&mut results);

    tracing::debug!(
        bucket,
        manifests = manifests.len(),
        matches = results.len(),
        "bucket scanned"
    );

    Ok(results)
}

/// Case-insensitive by name; stable, so equal keys keep discovery order
fn sort_matches(results: &mut BucketResults) {
    results.sort_by_cached_key(|m| m.name().to_lowercase());
}

/// Manifest files directly inside `dir`, sorted by file name
fn list_manifests(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut manifests = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_manifest = path
            .extension()
            .is_some_and(|ext| ext == MANIFEST_EXTENSION);
        if is_manifest && path.is_file() {
            manifests.push(path);
        }
    }
    manifests.sort();
    Ok(manifests)
}

fn match_manifest(path: &Path, term: &str) -> Result<Option<Match>> {
    let display = path.display().to_string();

    let raw = fs::read(path).map_err(|e| SearchError::ManifestReadFailed {
        path: display.clone(),
        reason: e.to_string(),
    })?;
    let manifest: RawManifest =
        serde_json::from_slice(&raw).map_err(|e| SearchError::ManifestParseFailed {
            path: display.clone(),
            reason: e.to_string(),
        })?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if name.to_lowercase().contains(term) {
        return Ok(Some(Match::by_name(name, manifest.version())));
    }

    let bins = BinField::decode(&manifest.bin).map_err(|e| SearchError::UnexpectedBinShape {
        path: display,
        found: e.found,
    })?;

    let executable = bins
        .candidates()
        .into_iter()
        .map(basename)
        .find(|exe| strip_extension(exe).to_lowercase().contains(term));

    Ok(executable.map(|exe| Match::by_executable(name, manifest.version(), exe)))
}

/// Last path component, accepting both Windows and Unix separators
fn basename(path: &str) -> &str {
    path.rsplit(['\\', '/']).next().unwrap_or(path)
}

/// File name without its last extension (`git.exe` -> `git`, `7z` -> `7z`)
fn strip_extension(file_name: &str) -> &str {
    file_name
        .rfind('.')
        .map_or(file_name, |dot| &file_name[..dot])
}
