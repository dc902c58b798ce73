//! Config loading shared by the TUI launch path.

use crate::config::Config;
use crate::styles::ThemeType;
use crate::utils::get_config_path;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

/// Command-line adjustments applied on top of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub config_path: Option<PathBuf>,
    pub theme: Option<String>,
    pub no_colors: bool,
    pub submit_delay_ms: Option<u64>,
}

impl LaunchOptions {
    /// Config file to use: the `--config` flag or the default location.
    pub fn resolve_config_path(&self) -> PathBuf {
        self.config_path.clone().unwrap_or_else(get_config_path)
    }

    /// Load (or create) the config file and apply the overrides. The file
    /// itself is never rewritten with them.
    pub fn load_config(&self, no_color_env: bool) -> Result<(Config, PathBuf)> {
        let path = self.resolve_config_path();
        let mut config = Config::load_or_create(&path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?;
        self.apply(&mut config, no_color_env);
        info!(path = %path.display(), theme = %config.theme, "Configuration loaded");
        Ok((config, path))
    }

    /// Apply the overrides to an already loaded config.
    pub fn apply(&self, config: &mut Config, no_color_env: bool) {
        if let Some(theme) = &self.theme {
            if theme.parse::<ThemeType>().is_err() {
                warn!(theme = %theme, "Unknown theme, keeping the default palette");
            }
            config.theme = theme.clone();
        }
        if self.no_colors || no_color_env {
            config.theme = "nocolor".to_string();
        }
        if let Some(ms) = self.submit_delay_ms {
            config.submit_delay_ms = ms;
        }
    }
}

/// Whether the `NO_COLOR` convention asks for monochrome output.
pub fn no_color_requested(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
