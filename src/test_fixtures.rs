//! Test fixtures for building bucket trees on disk.
//!
//! ```ignore
//! let tree = BucketTree::new();
//! tree.write_manifest("main", "git", r#"{"version": "2.40"}"#);
//! let results = match_bucket("main", &tree.manifest_dir("main"), "git")?;
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary buckets root laid out like `~/scoop/buckets`
pub struct BucketTree {
    temp: TempDir,
}

impl BucketTree {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        Self { temp }
    }

    /// Path of the buckets root
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Path of the manifest folder of `bucket`
    pub fn manifest_dir(&self, bucket: &str) -> PathBuf {
        self.root().join(bucket).join(crate::scanner::MANIFEST_SUBDIR)
    }

    /// Create an empty bucket
    pub fn add_bucket(&self, bucket: &str) -> PathBuf {
        let dir = self.manifest_dir(bucket);
        std::fs::create_dir_all(&dir).expect("Failed to create bucket directory");
        dir
    }

    /// Write `<bucket>/bucket/<name>.json`
    pub fn write_manifest(&self, bucket: &str, name: &str, content: &str) {
        let dir = self.add_bucket(bucket);
        std::fs::write(dir.join(format!("{name}.json")), content)
            .expect("Failed to write manifest");
    }

    /// Write an arbitrary file relative to the root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.root().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }
}
