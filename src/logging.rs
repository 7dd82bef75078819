//! File logging
//!
//! The terminal belongs to the UI, so tracing output goes to a log file in
//! the user's data directory instead of stderr.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{HangmanError, Result, APP_NAME, LOG_FILE};

/// Get the standard log file path
/// Uses $DATA_HOME/hangman/hangman.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        HangmanError::ConfigError("Unable to determine data directory".to_string())
    })?;

    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Build the filter: `RUST_LOG` wins over the configured directive
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install a global subscriber that writes plain text to `path`
///
/// A subscriber installed earlier (e.g. by a test harness) is left in place.
pub fn init(path: &Path, default_directive: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = File::create(path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("hangman.log");
        init(&path, "debug").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_log_file_path() {
        let path = log_file_path().unwrap();
        assert!(path.to_string_lossy().ends_with("hangman.log"));
    }
}
