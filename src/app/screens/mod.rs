//! TUI screen components
//!
//! Contains individual screen implementations for different application states.

pub mod game;
pub mod keyboard;
pub mod title;

pub use game::{GameScreen, SessionTally};
pub use keyboard::Keyboard;
pub use title::{TitleAction, TitleScreen};
