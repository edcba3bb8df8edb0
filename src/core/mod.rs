pub mod engine;
pub mod error;
pub mod input;
pub mod renderer;
pub mod terminal;

pub use engine::{Engine, GameOutcome, Turn};
pub use error::GameError;
pub use input::{InputSource, LineReader};
pub use renderer::GameRenderer;
pub use terminal::{TerminalColor, TerminalContext};
