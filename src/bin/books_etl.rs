use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use books_etl::config::DbConfig;
use books_etl::pipeline::{self, RunOutcome};

#[derive(Parser)]
#[command(
    version,
    about = "Append-only batch transfer from books to books_processed"
)]
struct Cli {
    /// Cutoff date (YYYY-MM-DD): process rows with last_updated on or after
    /// midnight of this date.
    #[arg(value_name = "DATE", value_parser = parse_cutoff)]
    cutoff: NaiveDate,
}

/// Strict `YYYY-MM-DD` parsing: chrono alone accepts unpadded fields like
/// `2025-1-5`, so the shape is checked first.
fn parse_cutoff(raw: &str) -> Result<NaiveDate, String> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(format!("expected YYYY-MM-DD, got '{raw}'"));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| format!("invalid date '{raw}'"))
}

fn main() -> ExitCode {
    // Best-effort .env loading for local runs; real deployments set the
    // variables in the environment.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // clap exits with 2 on usage errors by default; this pipeline's contract
    // is exit 1 for every failure, so errors are mapped by hand.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!(cutoff = %cli.cutoff, "starting books ETL run");

    match pipeline::run(&config, cli.cutoff) {
        Ok(RunOutcome::NothingToDo) => {
            info!("ETL run finished: nothing to process");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Loaded { extracted, loaded }) => {
            info!(extracted, loaded, "ETL run finished successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("ETL run failed: {err}");
            ExitCode::FAILURE
        }
    }
}
