/// Game renderer trait, injected into the engine
use std::io::Write;

use crate::core::error::GameError;
use crate::core::terminal::TerminalContext;

pub trait GameRenderer<State> {
    /// Draw the state shown before each turn.
    fn render(&self, state: &State, ctx: &mut TerminalContext<impl Write>) -> Result<(), GameError>;

    /// Draw the end-of-game summary.
    fn render_summary(&self, state: &State, ctx: &mut TerminalContext<impl Write>) -> Result<(), GameError>;
}
