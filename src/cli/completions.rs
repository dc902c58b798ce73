//! Completions command for generating shell completions.

use crate::cli::Cli;
use anyhow::{bail, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

/// Write completions for `shell` (or the shell named by `$SHELL`) to `out`.
pub fn generate(shell: Option<Shell>, out: &mut dyn Write) -> Result<()> {
    let Some(shell) = shell.or_else(Shell::from_env) else {
        bail!("Could not automatically detect shell, pass one explicitly");
    };

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_flags() {
        let mut out = Vec::new();
        generate(Some(Shell::Bash), &mut out).unwrap();
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("fitstate"));
        assert!(script.contains("--submit-delay-ms"));
    }
}
