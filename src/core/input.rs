/// Player input, injected into the engine so tests can script it
use std::io::{self, BufRead, StdinLock};

pub trait InputSource {
    /// Reads one line. `Ok(None)` means the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads newline-terminated lines from any buffered reader.
pub struct LineReader<R> {
    reader: R,
}

impl LineReader<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineReader<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

impl<I: InputSource + ?Sized> InputSource for &mut I {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}
