use std::fmt::Display;
use std::iter::Peekable;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::lex::{Lexer, Word};

#[derive(Error, Debug, Diagnostic)]
#[error("Latest command not provided in format specified.")]
#[diagnostic(help("every command must be followed by a number, e.g. `{command} 5`"))]
pub struct MissingArgument {
    #[source_code]
    src: NamedSource<String>,

    #[label("this command has no argument")]
    bad_bit: SourceSpan,

    pub command: String,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Number given must be between {} and {}.", i32::MIN, i32::MAX)]
#[diagnostic(help("`{token}` is not a 32-bit signed integer"))]
pub struct InvalidNumber {
    #[source_code]
    src: NamedSource<String>,

    #[label("this argument")]
    bad_bit: SourceSpan,

    pub token: String,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Unknown command entered.")]
#[diagnostic(help("use one of `-fib`, `-fac` or `-e` instead of `{command}`"))]
pub struct UnknownCommand {
    #[source_code]
    src: NamedSource<String>,

    #[label("unknown command")]
    bad_bit: SourceSpan,

    pub command: String,
}

/// Everything that can go wrong while reading one (command, argument) pair.
#[derive(Error, Debug, Diagnostic)]
pub enum LineError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    MissingArgument(#[from] MissingArgument),
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidNumber(#[from] InvalidNumber),
    #[error(transparent)]
    #[diagnostic(transparent)]
    UnknownCommand(#[from] UnknownCommand),
}

impl LineError {
    /// Whether the rest of the line is discarded after this error. Such errors
    /// are also followed by the help text.
    pub fn aborts_line(&self) -> bool {
        !matches!(self, LineError::InvalidNumber(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fibonacci,
    Factorial,
    EulerApprox,
}

impl Command {
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "-fib" => Some(Command::Fibonacci),
            "-fac" => Some(Command::Factorial),
            "-e" => Some(Command::EulerApprox),
            _ => None,
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Command::Fibonacci => "-fib",
            Command::Factorial => "-fac",
            Command::EulerApprox => "-e",
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// A recognized command together with its validated argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invocation<'de> {
    pub command: Command,
    /// The argument exactly as typed.
    pub argument: &'de str,
    pub n: i32,
}

/// Groups the words of one line into invocations.
///
/// Yields one item per pair. After a missing argument or an unknown command
/// the parser is exhausted, so the remainder of the line is never looked at.
pub struct Parser<'de> {
    whole: &'de str,
    lexer: Peekable<Lexer<'de>>,
    done: bool,
}

impl<'de> Parser<'de> {
    pub fn new(line: &'de str) -> Self {
        Parser {
            whole: line,
            lexer: Lexer::new(line).peekable(),
            done: false,
        }
    }

    fn source(&self) -> NamedSource<String> {
        NamedSource::new("<input>", self.whole.to_string())
    }

    fn parse_pair(&mut self, command: Word<'de>) -> Result<Invocation<'de>, LineError> {
        let Some(argument) = self.lexer.next() else {
            return Err(MissingArgument {
                src: self.source(),
                bad_bit: command.span().into(),
                command: command.literal.to_string(),
            }
            .into());
        };

        // the number is checked before the command so a bad pair never ends the line
        let n = argument.literal.parse::<i32>().map_err(|_| InvalidNumber {
            src: self.source(),
            bad_bit: argument.span().into(),
            token: argument.literal.to_string(),
        })?;

        let Some(kind) = Command::from_flag(command.literal) else {
            return Err(UnknownCommand {
                src: self.source(),
                bad_bit: command.span().into(),
                command: command.literal.to_string(),
            }
            .into());
        };

        Ok(Invocation {
            command: kind,
            argument: argument.literal,
            n,
        })
    }
}

impl<'de> Iterator for Parser<'de> {
    type Item = Result<Invocation<'de>, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let command = self.lexer.next()?;
        let pair = self.parse_pair(command);
        if let Err(e) = &pair {
            self.done = e.aborts_line();
        }
        Some(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(line: &str) -> Vec<Result<Invocation<'_>, String>> {
        Parser::new(line)
            .map(|pair| pair.map_err(|e| e.to_string()))
            .collect()
    }

    #[test]
    fn pairs_commands_with_arguments() {
        assert_eq!(
            parse("-fib 5 -fac 5"),
            vec![
                Ok(Invocation {
                    command: Command::Fibonacci,
                    argument: "5",
                    n: 5
                }),
                Ok(Invocation {
                    command: Command::Factorial,
                    argument: "5",
                    n: 5
                }),
            ]
        );
    }

    #[test]
    fn keeps_argument_text_verbatim() {
        let pairs = parse("-e +07");
        assert_eq!(
            pairs,
            vec![Ok(Invocation {
                command: Command::EulerApprox,
                argument: "+07",
                n: 7
            })]
        );
    }

    #[test]
    fn empty_line_has_no_pairs() {
        assert!(parse("").is_empty());
        assert!(parse("  \t ").is_empty());
    }

    #[test]
    fn missing_argument_ends_line() {
        assert_eq!(
            parse("abc"),
            vec![Err("Latest command not provided in format specified.".to_string())]
        );

        let pairs = parse("-fib 3 -fac");
        assert_eq!(pairs.len(), 2);
        assert!(pairs[0].is_ok());
        assert!(pairs[1].is_err());
    }

    #[test]
    fn invalid_number_skips_only_its_pair() {
        let pairs = parse("-fib abc -fac 3");
        assert_eq!(
            pairs[0],
            Err("Number given must be between -2147483648 and 2147483647.".to_string())
        );
        assert_eq!(
            pairs[1],
            Ok(Invocation {
                command: Command::Factorial,
                argument: "3",
                n: 3
            })
        );
    }

    #[test]
    fn out_of_range_integer_is_not_a_number() {
        let pairs = parse("-fac 2147483648 -fac -2147483649");
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|pair| pair.is_err()));
        assert!(matches!(
            Parser::new("-fac 2147483647").next(),
            Some(Ok(Invocation { n: i32::MAX, .. }))
        ));
    }

    #[test]
    fn unknown_command_discards_rest_of_line() {
        assert_eq!(
            parse("-xyz 3 -fib 5"),
            vec![Err("Unknown command entered.".to_string())]
        );
    }

    #[test]
    fn number_is_checked_before_command() {
        let pairs = parse("-xyz abc -fib 3");
        assert_eq!(pairs.len(), 2);
        assert_eq!(
            pairs[0],
            Err("Number given must be between -2147483648 and 2147483647.".to_string())
        );
        assert!(pairs[1].is_ok());
    }

    #[test]
    fn commands_are_case_sensitive() {
        assert_eq!(Command::from_flag("-FIB"), None);
        assert_eq!(Command::from_flag("-e"), Some(Command::EulerApprox));
    }

    #[test]
    fn diagnostics_point_at_offending_word() {
        let Some(Err(LineError::UnknownCommand(e))) = Parser::new("  -xyz 3").next() else {
            panic!("expected an unknown command");
        };
        assert_eq!(e.bad_bit, SourceSpan::from(2..6));
        assert_eq!(e.command, "-xyz");
    }
}
