use std::io;

use thiserror::Error;

use crate::games::hangman::DrawingError;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("input closed before the game ended")]
    InputClosed,
    #[error("drawing unavailable: {0}")]
    Drawing(#[from] DrawingError),
    #[error("terminal i/o error: {0}")]
    Io(#[from] io::Error),
}
