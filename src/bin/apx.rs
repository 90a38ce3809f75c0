//! apx - Wallis π approximation CLI
//!
//! Usage:
//!   apx estimate -n 1000              # One estimate, exact accumulation
//!   apx estimate -n 1000 --running    # Running floating-point ratio
//!   apx sweep --max-terms 100000      # Error-vs-terms table
//!   apx sweep --max-terms 100000 --json

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use aproximar::convergence::{empirical_order, ConvergenceSweep};
use aproximar::error::AproximarError;
use aproximar::wallis::{wallis_pi_checked, wallis_pi_running};

/// apx - Wallis-product approximation of π
#[derive(Parser)]
#[command(name = "apx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a single approximation of π
    Estimate {
        /// Number of product terms
        #[arg(short = 'n', long)]
        terms: i64,

        /// Use the running floating-point ratio strategy
        #[arg(long)]
        running: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sweep term counts and report the error against π at each
    Sweep {
        /// Largest term count in the sweep
        #[arg(long, default_value_t = 100_000)]
        max_terms: usize,

        /// Number of log-spaced checkpoints
        #[arg(long, default_value_t = 16)]
        points: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> aproximar::Result<()> {
    match cli.command {
        Commands::Estimate {
            terms,
            running,
            json,
        } => estimate(terms, running, json),
        Commands::Sweep {
            max_terms,
            points,
            json,
        } => sweep(max_terms, points, json),
    }
}

fn estimate(terms: i64, running: bool, json: bool) -> aproximar::Result<()> {
    let value = if running {
        let n = usize::try_from(terms)
            .map_err(|_| AproximarError::invalid_argument("terms", terms, ">= 0"))?;
        wallis_pi_running(n)
    } else {
        wallis_pi_checked(terms)?
    };
    let abs_error = (value - std::f64::consts::PI).abs();

    if json {
        let strategy = if running { "running" } else { "exact" };
        let record = serde_json::json!({
            "terms": terms,
            "strategy": strategy,
            "estimate": value,
            "abs_error": abs_error,
        });
        println!("{}", serde_json::to_string_pretty(&record).map_err(|e| e.to_string())?);
    } else {
        println!("π ≈ {value:.15}  ({terms} terms, error {abs_error:.3e})");
    }
    Ok(())
}

fn sweep(max_terms: usize, points: usize, json: bool) -> aproximar::Result<()> {
    let run = ConvergenceSweep::geometric(max_terms, points)?.run();
    let order = empirical_order(&run);

    if json {
        let record = serde_json::json!({
            "points": run,
            "empirical_order": order,
        });
        println!("{}", serde_json::to_string_pretty(&record).map_err(|e| e.to_string())?);
        return Ok(());
    }

    println!("{:>10}  {:>18}  {:>12}", "terms", "estimate", "abs error");
    for p in &run {
        println!(
            "{:>10}  {:>18.12}  {:>12.4e}",
            p.terms, p.estimate, p.abs_error
        );
    }
    if let Some(slope) = order {
        println!("empirical convergence order: {slope:.3}");
    }
    Ok(())
}
