//! Hangman
//!
//! A terminal word-guessing game: a gallows drawn stage by stage as wrong
//! guesses pile up, a masked word and a virtual keyboard.

use std::fmt;

pub mod app;
pub mod cli;
pub mod config;
pub mod game;
pub mod logging;

// Common error types
#[derive(Debug)]
pub enum HangmanError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Word list is empty or contains an unusable word
    WordListError(String),
    /// A guess that is not a single letter A-Z
    InvalidInput(char),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for HangmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HangmanError::IoError(err) => write!(f, "I/O error: {}", err),
            HangmanError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            HangmanError::WordListError(msg) => write!(f, "Word list error: {}", msg),
            HangmanError::InvalidInput(c) => {
                write!(f, "Invalid guess {:?}: expected a letter A-Z", c)
            }
            HangmanError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for HangmanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HangmanError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HangmanError {
    fn from(err: std::io::Error) -> Self {
        HangmanError::IoError(err)
    }
}

impl From<serde_json::Error> for HangmanError {
    fn from(err: serde_json::Error) -> Self {
        HangmanError::WordListError(format!("JSON parsing error: {}", err))
    }
}

impl From<toml::de::Error> for HangmanError {
    fn from(err: toml::de::Error) -> Self {
        HangmanError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for HangmanError {
    fn from(err: toml::ser::Error) -> Self {
        HangmanError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for hangman operations
pub type Result<T> = std::result::Result<T, HangmanError>;

/// Error handling utilities
pub mod error {
    use super::HangmanError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &HangmanError) -> String {
        match error {
            HangmanError::ConfigError(msg) => {
                format!("Configuration error: {}. Check {}.", msg, super::CONFIG_FILE)
            }
            HangmanError::WordListError(msg) => {
                format!(
                    "Word list error: {}. Words may only contain the letters A-Z.",
                    msg
                )
            }
            HangmanError::TuiError(_) => {
                "The terminal could not be set up. Try a larger or different terminal."
                    .to_string()
            }
            _ => error.to_string(),
        }
    }

    /// Whether the game can carry on with built-in defaults after this error
    pub fn is_recoverable(error: &HangmanError) -> bool {
        matches!(
            error,
            HangmanError::ConfigError(_)
                | HangmanError::WordListError(_)
                | HangmanError::InvalidInput(_)
        )
    }
}

// Common types and constants
pub const APP_NAME: &str = "hangman";
pub const CONFIG_FILE: &str = "hangman.toml";
pub const LOG_FILE: &str = "hangman.log";
/// Wrong guesses allowed before the round is lost; one per body part.
pub const MAX_WRONG: u8 = 6;
