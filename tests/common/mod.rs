//! Common test utilities for scoop-search integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A buckets folder laid out like `~/scoop/buckets`
pub struct TestBuckets {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the buckets root
    pub path: PathBuf,
}

impl TestBuckets {
    /// Create an empty buckets folder
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("buckets");
        std::fs::create_dir_all(&path).expect("Failed to create buckets directory");
        Self { temp, path }
    }

    /// Create a bucket with an empty manifest folder
    #[allow(dead_code)]
    pub fn create_bucket(&self, name: &str) -> PathBuf {
        let dir = self.path.join(name).join("bucket");
        std::fs::create_dir_all(&dir).expect("Failed to create bucket directory");
        dir
    }

    /// Write `<bucket>/bucket/<name>.json`
    pub fn write_manifest(&self, bucket: &str, name: &str, content: &str) {
        let dir = self.create_bucket(bucket);
        std::fs::write(dir.join(format!("{name}.json")), content)
            .expect("Failed to write manifest");
    }

    /// Write a file relative to the buckets root
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Command searching this buckets folder
    pub fn search(&self) -> Command {
        let mut cmd = scoop_search_cmd();
        cmd.arg("--buckets-dir").arg(&self.path);
        cmd
    }

    /// Root of the temp dir, usable as a fake `SCOOP` install folder
    #[allow(dead_code)]
    pub fn scoop_root(&self) -> &Path {
        self.temp.path()
    }
}

/// Command for the real binary with developer overrides removed
#[allow(deprecated)]
pub fn scoop_search_cmd() -> Command {
    let mut cmd = Command::cargo_bin("scoop-search").expect("binary should be built");
    cmd.env_remove("SCOOP_SEARCH_BUCKETS")
        .env_remove("SCOOP_SEARCH_LOG")
        .env_remove("SCOOP");
    cmd
}
