use std::io;

use clap::Parser;
use clap::Subcommand;
use miette::WrapErr;
use seqcalc::config::{DEFAULT_FIBONACCI_MAX, DEFAULT_SCALE, MAX_SCALE};
use seqcalc::{Interpreter, Limits, Repl};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Fibonacci, factorial and e approximation calculator")]
struct Args {
    /// Largest accepted Fibonacci index.
    #[arg(long, default_value_t = DEFAULT_FIBONACCI_MAX, value_parser = clap::value_parser!(i32).range(0..))]
    fib_max: i32,

    /// Largest accepted argument for `-fac` and `-e`.
    #[arg(long, default_value_t = i32::MAX, value_parser = clap::value_parser!(i32).range(1..))]
    max_arg: i32,

    /// Fractional digits kept when approximating e.
    #[arg(long, default_value_t = DEFAULT_SCALE, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SCALE)))]
    scale: u32,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read commands from standard input until `q` (the default).
    Repl,
    /// Evaluate a single line of commands, e.g. `eval -- -fib 5 -fac 5`.
    Eval {
        #[arg(required = true, allow_hyphen_values = true, trailing_var_arg = true)]
        words: Vec<String>,
    },
}

impl Args {
    fn limits(&self) -> Limits {
        Limits {
            fibonacci_max: self.fib_max,
            argument_max: self.max_arg,
            scale: self.scale,
        }
    }
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let interpreter = Interpreter::new(args.limits());
    tracing::debug!(limits = ?interpreter.limits(), "starting");

    match args.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let stdin = io::stdin().lock();
            Repl::new(interpreter, stdin, io::stdout().lock())
                .run()
                .wrap_err("console session failed")?;
        }
        Commands::Eval { words } => {
            interpreter
                .eval_line(&words.join(" "), &mut io::stdout().lock())
                .wrap_err("evaluating command line failed")?;
        }
    }
    Ok(())
}
