//! Location of the Scoop buckets folder
//!
//! Resolution order:
//! 1. `--buckets-dir` / `SCOOP_SEARCH_BUCKETS`
//! 2. `$SCOOP/buckets`, the install root Scoop itself honours
//! 3. `<home>/scoop/buckets`, Scoop's default install location

use std::path::{Path, PathBuf};

use crate::error::{Result, SearchError};

/// Environment variable Scoop uses for a custom install root
pub const SCOOP_ROOT_ENV: &str = "SCOOP";

/// Default install folder under the user's home directory
const SCOOP_DIR: &str = "scoop";

/// Buckets subdirectory of the Scoop root
const BUCKETS_DIR: &str = "buckets";

/// Resolve the buckets folder to search
pub fn buckets_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(root) = std::env::var_os(SCOOP_ROOT_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(root).join(BUCKETS_DIR));
    }

    let home = dirs::home_dir().ok_or(SearchError::HomeDirUnavailable)?;
    Ok(home.join(SCOOP_DIR).join(BUCKETS_DIR))
}
