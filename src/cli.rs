//! Command-line interface for hangman.

use std::path::PathBuf;

use clap::Parser;

use crate::config::GameConfig;
use crate::Result;

/// Hangman - guess the word before the figure is complete
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Terminal Hangman with a drawn gallows and virtual keyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a config file; must exist when given.
    /// Defaults to $CONFIG_HOME/hangman/hangman.toml
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Config file the game will read
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => GameConfig::config_file_path(),
        }
    }

    /// Load settings: a path given on the command line must exist,
    /// the standard location falls back to defaults when absent
    pub fn load_config(&self) -> Result<GameConfig> {
        match &self.config {
            Some(path) => GameConfig::load_required(path),
            None => GameConfig::load(),
        }
    }
}
