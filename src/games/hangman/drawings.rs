/// Hangman drawings, one text file per mistake count
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::game::MAX_MISTAKES;

#[derive(Debug, Error)]
pub enum DrawingError {
    #[error("no drawing for {0} mistakes (expected 0..={max})", max = MAX_MISTAKES)]
    OutOfRange(u8),
    #[error("could not read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DrawingError {
    /// Text shown in place of the drawing when it can't be loaded.
    pub fn diagnostic(&self) -> String {
        format!("{self}\nDoesn't have file")
    }
}

/// Looks up the drawing for a mistake count.
pub trait DrawingSource {
    fn drawing(&self, mistakes: u8) -> Result<String, DrawingError>;
}

impl<D: DrawingSource + ?Sized> DrawingSource for &D {
    fn drawing(&self, mistakes: u8) -> Result<String, DrawingError> {
        (**self).drawing(mistakes)
    }
}

/// What to do when a drawing can't be loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawingPolicy {
    /// Show a diagnostic in place of the drawing and keep playing.
    #[default]
    Degrade,
    /// Stop the game with the error.
    Strict,
}

/// Reads `hangman0` through `hangman9` from a directory, fresh on every call.
#[derive(Debug, Clone)]
pub struct DirectoryDrawings {
    root: PathBuf,
}

impl DirectoryDrawings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, mistakes: u8) -> PathBuf {
        self.root.join(format!("hangman{mistakes}"))
    }
}

impl DrawingSource for DirectoryDrawings {
    fn drawing(&self, mistakes: u8) -> Result<String, DrawingError> {
        if mistakes > MAX_MISTAKES {
            return Err(DrawingError::OutOfRange(mistakes));
        }

        let path = self.path_for(mistakes);
        fs::read_to_string(&path).map_err(|source| DrawingError::Unreadable { path, source })
    }
}
