//! Arbitrary-precision Fibonacci, factorial and e approximation behind a
//! line-oriented command console.

pub mod config;
pub mod engine;
pub mod eval;
pub mod lex;
pub mod parse;
pub mod repl;

pub use config::Limits;
pub use engine::{DomainError, Engine};
pub use eval::Interpreter;
pub use lex::Lexer;
pub use parse::Parser;
pub use repl::Repl;
