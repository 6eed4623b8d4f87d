//! # Targets File
//!
//! Loads the launcher's targets and settings from a JSON file, by default
//! `~/.config/jump/targets.json`.
//!
//! ## Format
//!
//! ```json
//! {
//!   "targets": [
//!     { "name": "prod", "command": "ssh prod.example.com" },
//!     { "name": "staging", "command": "ssh staging.example.com" }
//!   ],
//!   "timeout_secs": 3600,
//!   "pause_ms": 2000,
//!   "theme": "Classic"
//! }
//! ```
//!
//! `clusters` is accepted in place of `targets`. Everything except the target
//! list is optional.
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use crate::target::{Target, TargetRegistry};
use crate::ui::theme::Theme;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default upper bound on a single session
pub const DEFAULT_TIMEOUT_SECS: u64 = 3600;

/// Default delay before the list comes back after a session ends
pub const DEFAULT_PAUSE_MS: u64 = 2000;

/// Contents of the targets file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(alias = "clusters")]
    pub targets: Vec<Target>,

    /// Maximum duration of one session, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long the status message stays up before the list is redrawn.
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,

    /// Name of a built-in theme.
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_pause_ms() -> u64 {
    DEFAULT_PAUSE_MS
}

fn default_theme_name() -> String {
    Theme::default_theme().name.to_string()
}

/// Resolved runtime settings for the controller.
#[derive(Debug, Clone)]
pub struct LauncherSettings {
    pub timeout: Duration,
    pub pause: Duration,
    pub theme: &'static Theme,
}

impl Config {
    /// Load the targets file from a specific path.
    ///
    /// Unlike user preferences, a missing targets file is an error: there is
    /// nothing to show without it.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read targets file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse targets file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Default location of the targets file.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "jump")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("targets.json"))
    }

    /// Build the registry from the loaded targets. Fails on an empty list.
    pub fn registry(&self) -> Result<TargetRegistry> {
        Ok(TargetRegistry::new(self.targets.clone())?)
    }

    /// Resolve settings, letting a command-line timeout override the file.
    pub fn settings(&self, timeout_override: Option<u64>) -> Result<LauncherSettings> {
        let timeout_secs = timeout_override.unwrap_or(self.timeout_secs);
        if timeout_secs == 0 {
            anyhow::bail!("timeout must be greater than zero");
        }

        let theme = Theme::by_name(&self.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %self.theme, "unknown theme, falling back to default");
            Theme::default_theme()
        });

        Ok(LauncherSettings {
            timeout: Duration::from_secs(timeout_secs),
            pause: Duration::from_millis(self.pause_ms),
            theme,
        })
    }
}
