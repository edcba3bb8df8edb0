/// Line-oriented terminal output with optional coloring
use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, Stdout, Write};

pub struct TerminalContext<W: Write = Stdout> {
    out: W,
    colors: bool,
}

impl TerminalContext<Stdout> {
    pub fn stdout(colors: bool) -> Self {
        Self::new(io::stdout(), colors)
    }
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W, colors: bool) -> Self {
        Self { out, colors }
    }

    /// Plain output, no escape sequences.
    pub fn plain(out: W) -> Self {
        Self::new(out, false)
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Print colored text with automatic reset
    pub fn print_colored(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        if !self.colors {
            return write!(self.out, "{text}");
        }
        self.out.queue(SetForegroundColor(color.into()))?;
        write!(self.out, "{text}")?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        self.print_colored(text, color)?;
        self.empty_line()
    }

    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Print text without newline
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")
    }

    /// Prompts are written without a newline, so this must run before blocking on input.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TerminalColor {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
        }
    }
}
