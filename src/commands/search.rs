//! Search command implementation
//!
//! Resolves the buckets folder, scans every bucket and prints the report.

use std::io::Write;
use std::path::Path;

use crate::error::{Result, SearchError};
use crate::{paths, scanner, ui};

/// Reject queries that would match every manifest
fn validate_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    Ok(())
}

/// Run the search and print the report, returning whether anything matched
pub fn run(query: &str, buckets_dir: Option<&Path>) -> Result<bool> {
    validate_query(query)?;

    let root = paths::buckets_dir(buckets_dir)?;
    let results = scanner::scan(&root, query)?;
    let report = ui::render(&results, console::colors_enabled());

    let mut out = std::io::stdout().lock();
    out.write_all(report.text.as_bytes())?;
    out.flush()?;

    Ok(report.any_match)
}
