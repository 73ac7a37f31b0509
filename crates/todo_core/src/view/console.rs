//! Line-oriented console view.
//!
//! # Responsibility
//! - Print numbered pending/completed lists to any `Write` sink.
//! - Prompt and read lines from any `BufRead` source.
//!
//! # Invariants
//! - Output is flushed before every read so the prompt is visible.
//! - Trailing `\n` / `\r\n` is stripped from input; other whitespace is kept.
//! - Invalid UTF-8 is decoded lossily so one bad line never ends a session.

use crate::view::View;
use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

pub const PROMPT: &str = "> ";
const EMPTY_MARKER: &str = "  (none)";

/// Console view over a reader/writer pair.
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the view and returns the writer, mostly for inspection.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl ConsoleView<StdinLock<'static>, StdoutLock<'static>> {
    /// Binds the view to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> View for ConsoleView<R, W> {
    fn render(&mut self, tasks: &[String], completed: &[String]) -> io::Result<()> {
        write_section(&mut self.output, "Tasks:", tasks)?;
        write_section(&mut self.output, "Completed:", completed)?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.write_all(PROMPT.as_bytes())?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "! {message}")?;
        self.output.flush()
    }
}

fn write_section<W: Write>(output: &mut W, title: &str, items: &[String]) -> io::Result<()> {
    writeln!(output, "{title}")?;
    if items.is_empty() {
        writeln!(output, "{EMPTY_MARKER}")?;
    }
    for (index, item) in items.iter().enumerate() {
        writeln!(output, "  {}. {item}", index + 1)?;
    }
    Ok(())
}
