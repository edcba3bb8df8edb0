/// Hangman-specific renderer - injected into the engine
use std::io::Write;

use tracing::warn;

use crate::core::error::GameError;
use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::{DrawingPolicy, DrawingSource, GameStatus, HangmanState};

pub struct HangmanRenderer<D> {
    drawings: D,
    policy: DrawingPolicy,
}

impl<D: DrawingSource> HangmanRenderer<D> {
    pub fn new(drawings: D, policy: DrawingPolicy) -> Self {
        Self { drawings, policy }
    }

    /// Loads the drawing for `mistakes`, applying the configured policy on failure.
    pub fn drawing(&self, mistakes: u8) -> Result<String, GameError> {
        match self.drawings.drawing(mistakes) {
            Ok(art) => Ok(art),
            Err(err) if self.policy == DrawingPolicy::Degrade => {
                warn!(%err, mistakes, "drawing unavailable, showing diagnostic");
                Ok(err.diagnostic())
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl<D: DrawingSource> GameRenderer<HangmanState> for HangmanRenderer<D> {
    fn render(&self, state: &HangmanState, ctx: &mut TerminalContext<impl Write>) -> Result<(), GameError> {
        ctx.print_line(&state.tracker().render_progress())?;
        ctx.empty_line()?;
        ctx.print_line(&self.drawing(state.mistakes())?)?;
        Ok(())
    }

    fn render_summary(&self, state: &HangmanState, ctx: &mut TerminalContext<impl Write>) -> Result<(), GameError> {
        ctx.print("Game over...")?;

        match state.status() {
            GameStatus::Won => ctx.print_colored_line("You win!", TerminalColor::Green)?,
            GameStatus::Lost => {
                ctx.print_colored_line("You lose!", TerminalColor::Red)?;
                ctx.print_line(&format!("The word was: {}", state.word()))?;
                ctx.print_line(&self.drawing(state.mistakes())?)?;
            }
            GameStatus::Playing => unreachable!("summary requested for a game still in play"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::{DirectoryDrawings, DrawingError};
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    struct Fixed;

    impl DrawingSource for Fixed {
        fn drawing(&self, mistakes: u8) -> Result<String, DrawingError> {
            Ok(format!("<art {mistakes}>"))
        }
    }

    fn rendered(renderer: &HangmanRenderer<impl DrawingSource>, state: &HangmanState) -> String {
        let mut ctx = TerminalContext::plain(Vec::new());
        renderer.render(state, &mut ctx).unwrap();
        String::from_utf8(ctx.into_inner()).unwrap()
    }

    #[test]
    fn turn_shows_progress_blank_line_then_drawing() {
        let renderer = HangmanRenderer::new(Fixed, DrawingPolicy::Degrade);
        let state = HangmanState::new("Apple");
        assert_eq!(rendered(&renderer, &state), "A _ _ _ e \n\n<art 0>\n");
    }

    #[test]
    #[traced_test]
    fn missing_drawing_degrades_to_diagnostic() {
        let renderer = HangmanRenderer::new(DirectoryDrawings::new("/no/such/states"), DrawingPolicy::Degrade);
        let text = rendered(&renderer, &HangmanState::new("Apple"));

        assert!(text.starts_with("A _ _ _ e \n\n"));
        assert!(text.contains("/no/such/states/hangman0"));
        assert!(text.contains("Doesn't have file"));
        assert!(logs_contain("drawing unavailable"));
    }

    #[test]
    fn missing_drawing_is_fatal_when_strict() {
        let renderer = HangmanRenderer::new(DirectoryDrawings::new("/no/such/states"), DrawingPolicy::Strict);
        let mut ctx = TerminalContext::plain(Vec::new());
        let err = renderer.render(&HangmanState::new("Apple"), &mut ctx).unwrap_err();
        assert!(matches!(err, GameError::Drawing(DrawingError::Unreadable { .. })));
    }

    #[test]
    fn win_summary() {
        let renderer = HangmanRenderer::new(Fixed, DrawingPolicy::Degrade);
        let mut state = HangmanState::new("Apple");
        state.apply_guess('p');
        state.apply_guess('l');

        let mut ctx = TerminalContext::plain(Vec::new());
        renderer.render_summary(&state, &mut ctx).unwrap();
        assert_eq!(String::from_utf8(ctx.into_inner()).unwrap(), "Game over...You win!\n");
    }
}
