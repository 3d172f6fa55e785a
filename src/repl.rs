use std::io::{BufRead, Write};

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;

use crate::Interpreter;

pub const BANNER: &str = "Welcome to the program.
Enter one or more of the following commands followed by the number you wish to be associated
with that command. Split all arguments with a space.
If you wish to quit, type 'q'.";

pub const PROMPT: &str = "Enter commands:";
pub const QUIT: &str = "q";

/// The interactive loop. Owns its input for as long as it runs.
pub struct Repl<R, W> {
    input: R,
    output: W,
    interpreter: Interpreter,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(interpreter: Interpreter, input: R, output: W) -> Self {
        Repl {
            input,
            output,
            interpreter,
        }
    }

    /// Reads the next line after printing the prompt; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        writeln!(self.output, "{PROMPT}").into_diagnostic()?;
        self.output.flush().into_diagnostic()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .into_diagnostic()
            .wrap_err("reading commands failed")?;
        Ok((read > 0).then_some(line))
    }

    /// Runs until `q` or end of input, then hands the output back.
    pub fn run(mut self) -> Result<W> {
        writeln!(self.output, "{BANNER}").into_diagnostic()?;
        writeln!(self.output, "{}", self.interpreter.help()).into_diagnostic()?;

        while let Some(line) = self.read_line()? {
            if line.trim().eq_ignore_ascii_case(QUIT) {
                writeln!(self.output, "Quitting...").into_diagnostic()?;
                break;
            }
            self.interpreter.eval_line(&line, &mut self.output)?;
        }
        debug!("input closed");
        self.output.flush().into_diagnostic()?;
        Ok(self.output)
    }
}
