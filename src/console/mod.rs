//! Interactive console shells
//!
//! Each shell is an `impl` block on [`Console`] in its own file:
//! - `calculator`: numbered menu over the variadic evaluator
//! - `keypad`: key-by-key calculator driving `KeypadState`
//! - `todo_menu`: view/add/delete tasks, saving on exit
//!
//! `Console` is generic over its reader and writer so tests can drive a
//! shell with in-memory buffers.

mod calculator;
mod keypad;
mod todo_menu;

use anyhow::Result;
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return its writer (used by tests to inspect output)
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` without a newline and read one trimmed line
    ///
    /// # Returns
    /// `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", message.as_ref())?;
        Ok(())
    }
}
