use std::fmt::Display;
use std::io::Write;

use bigdecimal::BigDecimal;
use miette::{IntoDiagnostic, Report, Result};
use num_bigint::BigUint;
use tracing::{debug, trace};

use crate::{
    Limits, Parser,
    engine::{DomainError, Engine},
    parse::{Command, Invocation, LineError},
};

/// The successful result of one command, rendered as its console line.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation<'de> {
    Fibonacci { argument: &'de str, value: BigUint },
    Factorial { argument: &'de str, value: BigUint },
    EulerApprox { argument: &'de str, value: BigDecimal },
}

impl Display for Evaluation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evaluation::Fibonacci { argument, value } => {
                write!(f, "Fibonacci of {argument} is {value}.")
            }
            Evaluation::Factorial { argument, value } => {
                write!(f, "Factorial Result of {argument} is {value}.")
            }
            Evaluation::EulerApprox { argument, value } => {
                write!(f, "E Number Result of {argument} is {value}.")
            }
        }
    }
}

pub fn help_text(limits: &Limits) -> String {
    format!(
        "--- Help ---\n  \
         -fib [n] : Compute the Fibonacci of [n]; valid range [0, {fib}]\n  \
         -fac [n] : Compute the factorial of [n]; valid range [0, {max}]\n  \
         -e [n] : Compute the value of 'e' using [n] iterations; valid range [1, {max}]\n",
        fib = limits.fibonacci_max,
        max = limits.argument_max,
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreter {
    engine: Engine,
}

impl Interpreter {
    pub fn new(limits: Limits) -> Self {
        Interpreter {
            engine: Engine::new(limits),
        }
    }

    pub fn limits(&self) -> &Limits {
        self.engine.limits()
    }

    pub fn help(&self) -> String {
        help_text(self.limits())
    }

    pub fn evaluate<'de>(
        &self,
        invocation: Invocation<'de>,
    ) -> Result<Evaluation<'de>, DomainError> {
        let Invocation {
            command,
            argument,
            n,
        } = invocation;
        debug!(%command, n, "evaluating");
        Ok(match command {
            Command::Fibonacci => Evaluation::Fibonacci {
                argument,
                value: self.engine.fibonacci(n)?,
            },
            Command::Factorial => Evaluation::Factorial {
                argument,
                value: self.engine.factorial(n)?,
            },
            Command::EulerApprox => Evaluation::EulerApprox {
                argument,
                value: self.engine.euler(n)?,
            },
        })
    }

    /// Runs every pair on `line`, writing one line of output per pair.
    pub fn eval_line(&self, line: &str, out: &mut impl Write) -> Result<()> {
        trace!(line, "evaluating line");
        for pair in Parser::new(line) {
            match pair {
                Ok(invocation) => match self.evaluate(invocation) {
                    Ok(evaluation) => writeln!(out, "{evaluation}").into_diagnostic()?,
                    Err(e) => writeln!(out, "{e}").into_diagnostic()?,
                },
                Err(e) => {
                    debug!(error = %e, "rejected pair");
                    writeln!(out, "{e}").into_diagnostic()?;
                    if matches!(e, LineError::UnknownCommand(_)) {
                        writeln!(out).into_diagnostic()?;
                    }
                    let aborts_line = e.aborts_line();
                    // labels and help go to stderr
                    eprintln!("{:?}", Report::new(e));
                    if aborts_line {
                        writeln!(out, "{}", self.help()).into_diagnostic()?;
                    }
                }
            }
            out.flush().into_diagnostic()?;
        }
        Ok(())
    }
}
