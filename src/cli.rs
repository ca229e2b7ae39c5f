//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// scoop-search - search installed Scoop buckets
///
/// Looks for manifests whose name or executables contain the query.
#[derive(Parser, Debug)]
#[command(
    name = "scoop-search",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Fast search of locally installed Scoop buckets",
    long_about = "Searches the manifests of every locally added Scoop bucket for packages whose \
                  name, or the name of one of their executables, contains the query. \
                  Exits with 0 when something matched and 1 otherwise.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  scoop-search git                        \x1b[90m# Packages or executables containing 'git'\x1b[0m\n   \
                  scoop-search --buckets-dir D:\\scoop\\buckets 7z\n   \
                  Invoke-Expression (&scoop-search --hook) \x1b[90m# Use scoop-search for 'scoop search'\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Part of a package or executable name to look for (case-insensitive)
    #[arg(value_name = "QUERY", required_unless_present_any = ["hook", "completions"])]
    pub query: Option<String>,

    /// Print a PowerShell hook that makes `scoop search` use scoop-search
    #[arg(long, conflicts_with_all = ["query", "completions"])]
    pub hook: bool,

    /// Generate shell completions (bash, elvish, fish, powershell, zsh)
    #[arg(long, value_name = "SHELL", conflicts_with = "query")]
    pub completions: Option<String>,

    /// Buckets folder to search (defaults to $SCOOP/buckets or ~/scoop/buckets)
    #[arg(long, value_name = "DIR", env = "SCOOP_SEARCH_BUCKETS")]
    pub buckets_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
