//! Factorial tool
//!
//! Computes `n!` through the registered multiplication strategy, and
//! prints every intermediate factorial (or only the last one) followed
//! by the digit count and the time spent calculating.
//!
//! Log verbosity is controlled with `RUST_LOG`, e.g. `RUST_LOG=trace`
//! shows every strategy resolution.

use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Parser};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use decimal_bigint::{configure, ArithmeticError, BigInteger};

/// Calculate factorials using arbitrary precision decimal integers
#[derive(Parser, Debug)]
#[command(name = "factorial", version, about, long_about = None)]
struct Options {
    /// Calculating factorial: n!
    #[arg(long, default_value_t = 100)]
    n: u64,

    /// Showing each factorial until n!
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    all: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Products `2!..=n!`, either every one of them or just the last
///
/// Returns the final value along with the collected results.
fn factorials(n: u64, all: bool) -> Result<(BigInteger, Vec<BigInteger>), ArithmeticError> {
    let mut value = BigInteger::from(1u8);
    let mut results = Vec::new();

    for i in 2..=n {
        value.checked_mul_assign(&BigInteger::from(i))?;
        if all {
            results.push(value.clone());
        }
    }

    if !all {
        results.push(value.clone());
    }
    Ok((value, results))
}

fn main() -> ExitCode {
    println!("factorial tool (version {})", env!("CARGO_PKG_VERSION"));

    let options = Options::parse();
    init_tracing();

    configure();
    info!(n = options.n, all = options.all, "calculating factorials");

    println!("{}!", options.n);
    println!();

    let started = Instant::now();
    let (value, results) = match factorials(options.n, options.all) {
        Ok(computed) => computed,
        Err(err) => {
            error!(%err, "calculation failed");
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let duration = started.elapsed();

    for result in &results {
        println!("{}", result);
    }

    println!();
    println!(" ... {} digits.", value.digit_count());
    println!(" ... Calculation only took {}ms.", duration.as_secs_f64() * 1000.0);
    ExitCode::SUCCESS
}
