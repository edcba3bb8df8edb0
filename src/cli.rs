use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, level_filters::LevelFilter};

use crate::core::{Engine, LineReader, TerminalContext};
use crate::games::hangman::{DirectoryDrawings, DrawingPolicy, HangmanRenderer, WordStore};
use crate::logging;

#[derive(Parser, Debug)]
#[command(name = "hangterm")]
#[command(about = "🎩 Guess the word one letter at a time before the hangman is drawn")]
#[command(version)]
pub struct Cli {
    /// Directory holding the drawings `hangman0` through `hangman9`
    #[arg(short, long, default_value = "states")]
    pub drawings: PathBuf,

    /// Seed for picking the word; random on every run if omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Stop with an error instead of showing a diagnostic when a drawing can't be read
    #[arg(long)]
    pub strict_drawings: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log level for messages written to stderr
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn drawing_policy(&self) -> DrawingPolicy {
        if self.strict_drawings {
            DrawingPolicy::Strict
        } else {
            DrawingPolicy::Degrade
        }
    }

    pub fn colors(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_level);
    debug!(?cli, "parsed arguments");

    let word = match cli.seed {
        Some(seed) => pick_word(&mut StdRng::seed_from_u64(seed)),
        None => pick_word(&mut rand::rng()),
    };

    let renderer = HangmanRenderer::new(DirectoryDrawings::new(cli.drawings.clone()), cli.drawing_policy());
    let mut engine = Engine::new(LineReader::stdin(), TerminalContext::stdout(cli.colors()), renderer);

    engine
        .play(word)
        .with_context(|| format!("game ended abnormally (drawings from {})", cli.drawings.display()))?;

    Ok(())
}

fn pick_word(rng: &mut impl Rng) -> String {
    WordStore::classic().pick_random_word(rng)
}
