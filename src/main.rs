//! scoop-search - fast search of locally installed Scoop buckets
//!
//! Reads every manifest of every added bucket in parallel and lists the packages
//! whose name, or one of whose executables, contains the query.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod error;
mod logging;
mod manifest;
mod paths;
mod scanner;
#[cfg(test)]
mod test_fixtures;
mod ui;

use cli::Cli;
use error::SearchError;

/// Exit status when the search ran but found nothing
const EXIT_NO_MATCH: i32 = 1;

/// Exit status for any fatal error
const EXIT_FAILURE: i32 = 2;

fn report_error(err: &SearchError) {
    eprintln!("Error: {err}");
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if cli.hook {
        commands::hook::run().map(|()| true)
    } else if let Some(shell) = cli.completions.as_deref() {
        commands::completions::run(shell).map(|()| true)
    } else {
        let query = cli.query.as_deref().unwrap_or_default();
        commands::search::run(query, cli.buckets_dir.as_deref())
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_NO_MATCH),
        Err(e) => {
            report_error(&e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}
