use std::io::{self, Write};

use tracing::{debug, info};

use crate::core::error::GameError;
use crate::core::input::InputSource;
use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::{parse_guess, GameStatus, GuessOutcome, HangmanState};

pub const PROMPT: &str = "> ";
pub const INVALID_INPUT: &str = "Invalid input. Please use letters only...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
}

/// Result of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The input was not a single letter; nothing changed.
    Rejected,
    Guessed(GuessOutcome),
}

/// Runs the turn loop: render, prompt, read, apply, until the game is decided.
pub struct Engine<I, W: Write, R> {
    input: I,
    ctx: TerminalContext<W>,
    renderer: R,
}

impl<I, W, R> Engine<I, W, R>
where
    I: InputSource,
    W: Write,
    R: GameRenderer<HangmanState>,
{
    pub fn new(input: I, ctx: TerminalContext<W>, renderer: R) -> Self {
        Self { input, ctx, renderer }
    }

    /// Plays one full game against `word`.
    pub fn play(&mut self, word: impl Into<String>) -> Result<GameOutcome, GameError> {
        let mut state = HangmanState::new(word);
        info!(letters = state.word().chars().count(), "game started");

        while state.status() == GameStatus::Playing {
            self.play_turn(&mut state)?;
        }

        self.finish(&state)
    }

    pub fn play_turn(&mut self, state: &mut HangmanState) -> Result<Turn, GameError> {
        debug_assert_eq!(state.status(), GameStatus::Playing);

        self.renderer.render(state, &mut self.ctx)?;
        self.ctx.print_colored(PROMPT, TerminalColor::Cyan)?;
        self.ctx.flush()?;

        // a line that is not UTF-8 has already been consumed by the reader
        let guess = match self.input.read_line() {
            Ok(Some(line)) => parse_guess(&line).map_err(|err| err.to_string()),
            Ok(None) => return Err(GameError::InputClosed),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => Err(err.to_string()),
            Err(err) => return Err(err.into()),
        };

        match guess {
            Ok(letter) => Ok(Turn::Guessed(state.apply_guess(letter))),
            Err(reason) => {
                debug!(%reason, "rejected input");
                self.ctx.print_colored_line(INVALID_INPUT, TerminalColor::Yellow)?;
                Ok(Turn::Rejected)
            }
        }
    }

    fn finish(&mut self, state: &HangmanState) -> Result<GameOutcome, GameError> {
        let outcome = match state.status() {
            GameStatus::Won => GameOutcome::Won,
            GameStatus::Lost => GameOutcome::Lost,
            GameStatus::Playing => unreachable!("game loop exited with no winner"),
        };

        self.renderer.render_summary(state, &mut self.ctx)?;
        self.ctx.flush()?;

        info!(?outcome, mistakes = state.mistakes(), "game over");
        Ok(outcome)
    }
}

impl<I, W: Write, R> Engine<I, W, R> {
    pub fn output(&self) -> &W {
        self.ctx.get_ref()
    }
}
