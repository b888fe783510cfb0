use std::process::ExitCode;

use clap::Parser;
use lexcalc::{display_error, display_tokens, errors::errors::Error, evaluate, tokenize};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Tokenizes an arithmetic expression and evaluates a single binary operation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to tokenize
    #[arg(default_value = "3.5 + 5 * (10 - 4.2)")]
    expression: String,

    /// `operand operator operand` expression to evaluate
    #[arg(short, long, default_value = "5 * 2")]
    eval: String,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lexcalc={}", args.log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!("Input Expression: {}", args.expression);
    if let Err(err) = run_tokenize(&args.expression) {
        return report(&err, &args.expression);
    }

    println!();
    match tokenize(&args.eval).and_then(|tokens| evaluate(&tokens)) {
        Ok(result) => {
            println!("Evaluating '{}': {}", args.eval, result);
            ExitCode::SUCCESS
        }
        Err(err) => report(&err, &args.eval),
    }
}

fn run_tokenize(expression: &str) -> Result<(), Error> {
    let tokens = tokenize(expression)?;
    println!("{}", display_tokens(&tokens));
    Ok(())
}

fn report(err: &Error, source: &str) -> ExitCode {
    error!(error = %err, "failed");
    eprintln!("{}", display_error(err, source));
    ExitCode::FAILURE
}
