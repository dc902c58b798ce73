//! Command-line interface.
//!
//! With no subcommand the TUI is launched; the flags adjust the loaded
//! configuration for this run only.

mod common;
pub mod completions;

pub use common::{no_color_requested, LaunchOptions};

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Terminal fitness companion: onboarding, sign-up/sign-in and a workout dashboard
#[derive(Parser, Debug)]
#[command(name = "fitstate", version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/fitstate/config.toml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Color theme: dark, light or nocolor
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Disable colors (same as --theme nocolor)
    #[arg(long)]
    pub no_colors: bool,

    /// Length of the simulated submission round trip, in milliseconds
    #[arg(long, value_name = "MS")]
    pub submit_delay_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print shell completions to stdout
    Completions {
        /// Target shell (detected from $SHELL when omitted)
        #[arg(value_enum)]
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Flags that shape the TUI session.
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            config_path: self.config.clone(),
            theme: self.theme.clone(),
            no_colors: self.no_colors,
            submit_delay_ms: self.submit_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_launch_flags() {
        let cli = Cli::parse_from([
            "fitstate",
            "--theme",
            "light",
            "--submit-delay-ms",
            "10",
            "--no-colors",
        ]);
        assert!(cli.command.is_none());
        let opts = cli.launch_options();
        assert_eq!(opts.theme.as_deref(), Some("light"));
        assert_eq!(opts.submit_delay_ms, Some(10));
        assert!(opts.no_colors);
    }

    #[test]
    fn test_parses_completions() {
        let cli = Cli::parse_from(["fitstate", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions {
                shell: Some(Shell::Zsh)
            })
        ));
    }
}
