//! File logging.
//!
//! The TUI and the child sessions own the terminal, so log output goes to
//! `<data dir>/jump/jump.log` instead. The filter is read from `RUST_LOG` and
//! defaults to `info`.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub fn default_log_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "jump")
        .context("Could not determine data directory")?;
    Ok(dirs.data_local_dir().join("jump.log"))
}

/// Install the global subscriber writing to `log_path`.
pub fn init(log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_log_path_file_name() {
        if let Ok(path) = default_log_path() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("jump.log"));
        }
    }

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("logs").join("jump.log");

        // Another test may already own the global subscriber; the file is
        // opened before that check either way.
        let _ = init(&path);
        assert!(path.exists());
    }
}
