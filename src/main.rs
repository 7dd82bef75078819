use clap::Parser;
use hangman::app::App;
use hangman::cli::Cli;
use hangman::config::GameConfig;
use hangman::{error, logging, Result};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path()?;

    let config = match cli.load_config() {
        Ok(config) => config,
        // Only the standard location may fall back; a named file must be usable
        Err(e) if cli.config.is_none() && error::is_recoverable(&e) => {
            eprintln!("{}", error::user_friendly_message(&e));
            eprintln!("Continuing with default settings.");
            GameConfig::default()
        }
        Err(e) => return Err(e),
    };

    logging::init(&logging::log_file_path()?, &config.log_filter)?;
    info!(config = %config_path.display(), "Starting hangman");

    let mut app = match App::new(&config) {
        Ok(app) => app,
        Err(e) if error::is_recoverable(&e) => {
            eprintln!("{}", error::user_friendly_message(&e));
            eprintln!("Continuing with the built-in word list.");
            App::new(&GameConfig {
                word_file: None,
                ..config
            })?
        }
        Err(e) => return Err(e),
    };

    app.init()?;
    let result = app.run();
    app.restore()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "Application error");
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }

    Ok(())
}
