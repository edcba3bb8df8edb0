/// Hangman: word store, guess tracking, drawings and rendering
pub mod drawings;
pub mod game;
pub mod renderer;
pub mod words;

pub use drawings::{DirectoryDrawings, DrawingError, DrawingPolicy, DrawingSource};
pub use game::{
    fold, parse_guess, GameStatus, GuessOutcome, GuessTracker, HangmanState, InvalidGuess,
    MAX_MISTAKES,
};
pub use renderer::HangmanRenderer;
pub use words::{Word, WordStore};
