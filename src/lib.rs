pub mod cli;
pub mod core;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::core::{Engine, GameError, GameOutcome};
pub use crate::games::hangman::{HangmanRenderer, HangmanState, WordStore};
