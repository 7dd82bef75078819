//! Configuration management module
//!
//! Handles loading, saving, and validation of game settings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::game::WordList;
use crate::{HangmanError, Result, APP_NAME, CONFIG_FILE};

const MIN_TICK_RATE_MS: u64 = 10;
const MAX_TICK_RATE_MS: u64 = 1000;

/// User-tunable game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed seed for word selection; entropy when absent
    pub seed: Option<u64>,
    /// Local word list replacing the built-in vocabulary
    pub word_file: Option<PathBuf>,
    /// Input poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Tracing filter directive, e.g. "info" or "hangman=debug"
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            word_file: None,
            tick_rate_ms: 250,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&self.tick_rate_ms) {
            return Err(HangmanError::ConfigError(format!(
                "Tick rate must be between {} and {} ms, got {}",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, self.tick_rate_ms
            )));
        }

        if self.log_filter.trim().is_empty() {
            return Err(HangmanError::ConfigError(
                "Log filter must not be empty".to_string(),
            ));
        }

        if let Some(path) = &self.word_file {
            if !path.is_file() {
                return Err(HangmanError::ConfigError(format!(
                    "Word file does not exist: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Set a fixed seed for word selection
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the word file
    pub fn with_word_file(mut self, path: PathBuf) -> Self {
        self.word_file = Some(path);
        self
    }

    /// Set the input poll interval
    pub fn with_tick_rate_ms(mut self, tick_rate_ms: u64) -> Self {
        self.tick_rate_ms = tick_rate_ms;
        self
    }

    /// Set the tracing filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Word list to play with: the configured file, or the built-in words
    pub fn word_list(&self) -> Result<WordList> {
        match &self.word_file {
            Some(path) => WordList::from_file(path),
            None => Ok(WordList::builtin()),
        }
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `config_path`, defaulting when it is missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            HangmanError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            HangmanError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        if let Err(e) = config.validate() {
            warn!(path = %config_path.display(), error = %e, "Rejected config file");
            return Err(e);
        }

        Ok(config)
    }

    /// Load configuration from a path the user named; a missing file is an error
    pub fn load_required(config_path: &Path) -> Result<Self> {
        if !config_path.is_file() {
            return Err(HangmanError::ConfigError(format!(
                "Config file does not exist: {}",
                config_path.display()
            )));
        }
        Self::load_from(config_path)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to `config_path`, creating parent directories
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                HangmanError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            HangmanError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/hangman/hangman.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            HangmanError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_tick_rate_bounds() {
        assert!(GameConfig::new().with_tick_rate_ms(5).validate().is_err());
        assert!(GameConfig::new().with_tick_rate_ms(5000).validate().is_err());
        assert!(GameConfig::new().with_tick_rate_ms(10).validate().is_ok());
    }

    #[test]
    fn test_empty_log_filter_rejected() {
        assert!(GameConfig::new().with_log_filter("  ").validate().is_err());
    }

    #[test]
    fn test_missing_word_file_rejected() {
        let config = GameConfig::new().with_word_file(PathBuf::from("/no/such/words.txt"));
        assert!(matches!(config.validate(), Err(HangmanError::ConfigError(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let config = GameConfig::new().with_seed(99).with_tick_rate_ms(100);
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: GameConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("seed = 3\n").unwrap();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = GameConfig::load_from(&temp_dir.path().join("hangman.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_required_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        assert!(matches!(
            GameConfig::load_required(&missing),
            Err(HangmanError::ConfigError(_))
        ));
        assert!(GameConfig::load_required(Path::new("--help")).is_err());
    }

    #[test]
    fn test_load_required_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hangman.toml");
        fs::write(&path, "seed = 11\n").unwrap();
        assert_eq!(GameConfig::load_required(&path).unwrap().seed, Some(11));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("hangman.toml");
        let config = GameConfig::new().with_seed(7).with_log_filter("debug");

        config.save_to(&path).unwrap();
        let loaded = GameConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hangman.toml");
        fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();
        assert!(GameConfig::load_from(&path).is_err());

        fs::write(&path, "tick_rate_ms = 1").unwrap();
        assert!(GameConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_word_list_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.json");
        fs::write(&path, r#"["apple", "Pear"]"#).unwrap();

        let config = GameConfig::new().with_word_file(path);
        let words = config.word_list().unwrap();
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["APPLE", "PEAR"]);
    }

    #[test]
    fn test_builtin_word_list_by_default() {
        assert_eq!(GameConfig::new().word_list().unwrap(), WordList::builtin());
    }

    #[test]
    fn test_config_file_path() {
        let path = GameConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("hangman"));
        assert!(path.to_string_lossy().ends_with("hangman.toml"));
    }
}
