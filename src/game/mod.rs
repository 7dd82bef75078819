//! Game model
//!
//! Word lists, the round state machine and the stage-to-drawing mapping.
//! Nothing here depends on the terminal UI.

pub mod figure;
pub mod state;
pub mod words;

// Re-export commonly used types
pub use figure::{parts_for_stage, scene, BodyPart, Shape};
pub use state::{GameState, GuessReport, LetterStatus, Outcome, Phase};
pub use words::WordList;
