//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and application state handling.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use screens::{GameScreen, TitleScreen};
pub use state::{AppState, InputAction, StateManager};
pub use tui::Tui;
