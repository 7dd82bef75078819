//! Main application controller
//!
//! Owns the terminal, the game state and the screens, and routes each key
//! press to the screen that is showing.

use std::io::Stdout;
use std::time::Duration;

use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{info, warn};

use crate::{
    app::{
        screens::{GameScreen, TitleAction, TitleScreen},
        state::{AppState, InputAction, StateManager},
        tui::{Tui, MIN_HEIGHT, MIN_WIDTH},
    },
    config::GameConfig,
    game::GameState,
    Result,
};

/// TUI application controller
pub struct App<B: Backend = CrosstermBackend<Stdout>> {
    /// Terminal UI handler
    tui: Tui<B>,
    /// Application state manager
    state_manager: StateManager,
    /// The round being played
    game: GameState,
    /// Screen components
    title_screen: TitleScreen,
    game_screen: GameScreen,
}

impl App {
    /// Create a new application on the real terminal
    pub fn new(config: &GameConfig) -> Result<Self> {
        let tui = Tui::new(Duration::from_millis(config.tick_rate_ms))?;
        Self::with_tui(config, tui)
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }
}

impl<B: Backend> App<B> {
    /// Create an application drawing to `tui`
    pub fn with_tui(config: &GameConfig, tui: Tui<B>) -> Result<Self> {
        let words = config.word_list()?;
        info!(words = words.len(), seed = ?config.seed, "Word list ready");

        let game = match config.seed {
            Some(seed) => GameState::seeded(words, seed),
            None => GameState::new(words),
        };

        Ok(Self {
            tui,
            state_manager: StateManager::new(),
            game,
            title_screen: TitleScreen::new(),
            game_screen: GameScreen::new(),
        })
    }

    /// Run the main application loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            self.draw()?;
            if let Some(key) = self.tui.handle_events()? {
                self.apply(StateManager::key_to_action(key));
            }
        }
        info!(tally = ?self.game_screen.tally(), "Quitting");
        Ok(())
    }

    /// Restore the terminal; also happens on drop
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Draw the current screen
    pub fn draw(&mut self) -> Result<()> {
        let round_in_progress = self.round_in_progress();
        let state = self.state_manager.current_state();
        let game = &self.game;
        let title_screen = &mut self.title_screen;
        let game_screen = &self.game_screen;

        self.tui.draw(|f| {
            let size = f.size();
            if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
                let warning = Paragraph::new(format!(
                    "Terminal too small: need at least {}x{}",
                    MIN_WIDTH, MIN_HEIGHT
                ))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL));
                f.render_widget(warning, size);
                return;
            }

            match state {
                AppState::Title => title_screen.render(f, round_in_progress),
                AppState::Playing => game_screen.render(f, game),
            }
        })?;
        Ok(())
    }

    /// Apply one input action to the current screen
    pub fn apply(&mut self, action: InputAction) {
        if self.state_manager.handle_navigation(action) {
            return;
        }

        match self.state_manager.current_state() {
            AppState::Title => self.handle_title_action(action),
            AppState::Playing => self.handle_game_action(action),
        }
    }

    fn handle_title_action(&mut self, action: InputAction) {
        match action {
            InputAction::Up => self.title_screen.select_previous(),
            InputAction::Down => self.title_screen.select_next(),
            InputAction::Select => match self.title_screen.selected_action() {
                TitleAction::Play => {
                    if !self.game.is_active() {
                        self.start_round();
                    }
                    self.state_manager.transition_to(AppState::Playing);
                }
                TitleAction::Quit => self.state_manager.quit(),
            },
            _ => {}
        }
    }

    fn handle_game_action(&mut self, action: InputAction) {
        match action {
            InputAction::Left => self.game_screen.keyboard_mut().select_left(),
            InputAction::Right => self.game_screen.keyboard_mut().select_right(),
            InputAction::Up => self.game_screen.keyboard_mut().select_up(),
            InputAction::Down => self.game_screen.keyboard_mut().select_down(),
            InputAction::Guess(letter) => {
                self.game_screen.keyboard_mut().select_letter(letter);
                self.submit_guess(letter);
            }
            InputAction::Select => {
                if self.game.is_active() {
                    let letter = self.game_screen.keyboard().selected_letter();
                    self.submit_guess(letter);
                } else {
                    self.start_round();
                }
            }
            _ => {}
        }
    }

    fn submit_guess(&mut self, letter: char) {
        match self.game.guess(letter) {
            Ok(report) => {
                if let Some(outcome) = report.outcome {
                    self.game_screen.record(outcome);
                }
            }
            Err(e) => warn!(error = %e, "Guess rejected"),
        }
    }

    fn start_round(&mut self) {
        self.game.new_game();
        self.game_screen.keyboard_mut().reset();
    }

    /// A round is in progress once it has seen at least one guess
    fn round_in_progress(&self) -> bool {
        self.game.is_active()
            && (!self.game.guessed_letters().is_empty() || !self.game.missed_letters().is_empty())
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_screen(&self) -> &GameScreen {
        &self.game_screen
    }

    pub fn state_manager(&self) -> &StateManager {
        &self.state_manager
    }

    pub fn tui(&self) -> &Tui<B> {
        &self.tui
    }
}
