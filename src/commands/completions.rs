//! Shell completions command

use clap::CommandFactory;

use crate::error::{Result, SearchError};

/// Map a shell name to its generator, case-insensitively
fn parse_shell(shell: &str) -> Result<clap_complete::Shell> {
    match shell.to_lowercase().as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "elvish" => Ok(clap_complete::Shell::Elvish),
        "fish" => Ok(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Ok(clap_complete::Shell::PowerShell),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        _ => Err(SearchError::UnknownShell {
            shell: shell.to_string(),
        }),
    }
}

/// Generate shell completions on stdout
pub fn run(shell: &str) -> Result<()> {
    let shell = parse_shell(shell)?;

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "scoop-search", &mut std::io::stdout().lock());

    Ok(())
}
