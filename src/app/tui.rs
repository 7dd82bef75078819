//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management,
//! and keyboard event processing for the TUI application.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

/// Smallest terminal the game layout fits in
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 26;

/// Terminal wrapper that manages the backend and screen state
pub struct Tui<B: Backend = CrosstermBackend<Stdout>> {
    terminal: Terminal<B>,
    initialized: bool,
    last_tick: Instant,
    tick_rate: Duration,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        Self::with_backend(CrosstermBackend::new(io::stdout()), tick_rate)
    }

    /// Initialize terminal with proper setup
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        // From here on, restore() must undo raw mode even if a later step fails
        self.initialized = true;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }
}

impl<B: Backend> Tui<B> {
    /// Wrap an arbitrary backend; used directly with `TestBackend` in tests
    pub fn with_backend(backend: B, tick_rate: Duration) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            initialized: false,
            last_tick: Instant::now(),
            tick_rate,
        })
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Get terminal size for responsive layout handling
    pub fn size(&self) -> io::Result<ratatui::layout::Rect> {
        self.terminal.size()
    }

    /// Check if terminal meets minimum size requirements
    pub fn is_size_adequate(&self) -> io::Result<bool> {
        let size = self.size()?;
        Ok(size.width >= MIN_WIDTH && size.height >= MIN_HEIGHT)
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Wait up to one tick for a key press
    pub fn handle_events(&mut self) -> io::Result<Option<KeyEvent>> {
        let timeout = self
            .tick_rate
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases as well
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }

        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
        }

        Ok(None)
    }
}

impl<B: Backend> Drop for Tui<B> {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn test_tui(width: u16, height: u16) -> Tui<TestBackend> {
        Tui::with_backend(TestBackend::new(width, height), Duration::from_millis(250)).unwrap()
    }

    #[test]
    fn test_tick_rate() {
        assert_eq!(test_tui(80, 30).tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_size_check() {
        assert!(test_tui(80, 30).is_size_adequate().unwrap());
        assert!(!test_tui(40, 30).is_size_adequate().unwrap());
        assert!(!test_tui(80, 20).is_size_adequate().unwrap());
    }

    #[test]
    fn test_restore_after_partial_init_resets_flag() {
        let mut tui = test_tui(80, 30);
        // state left behind when raw mode is on but the screen switch failed
        tui.initialized = true;
        assert!(tui.restore().is_ok());
        assert!(!tui.initialized);
    }

    #[test]
    fn test_restore_without_init_is_noop() {
        let mut tui = test_tui(80, 30);
        assert!(tui.restore().is_ok());
    }
}
