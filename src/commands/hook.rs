//! PowerShell hook command
//!
//! The hook shadows the `scoop` command in the current session so that
//! `scoop search <query>` runs scoop-search and everything else goes to Scoop.
//! Enable it with `Invoke-Expression (&scoop-search --hook)` in `$PROFILE`.

use std::io::Write;

use crate::error::Result;

/// PowerShell function definition printed by `--hook`
pub const POSH_HOOK: &str = r#"function scoop { if ($args[0] -eq "search") { scoop-search.exe @($args | Select-Object -Skip 1) } else { scoop.ps1 @args } }"#;

/// Print the hook on stdout
pub fn run() -> Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{POSH_HOOK}")?;
    Ok(())
}
