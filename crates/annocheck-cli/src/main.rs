// crates/annocheck-cli/src/main.rs
// ============================================================================
// Module: Annocheck CLI Entry Point
// Description: Command-line runner for the annotation conformance suite.
// Purpose: Run the suite against a base endpoint and report per-case results.
// Dependencies: clap, annocheck-core, annocheck-client, thiserror
// ============================================================================

//! ## Overview
//! The binary builds one session for the whole run, executes the data-driven
//! suite over the requested identifiers, writes one line per case, and exits
//! non-zero when any case failed. Fetch and assertion failures are reported
//! per case; only a failure to construct the session aborts the run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::process::ExitCode;

use annocheck_cli::DEFAULT_DRUG;
use annocheck_cli::DEFAULT_GENES;
use annocheck_cli::DEFAULT_MIN_PEDIATRIC;
use annocheck_cli::SuiteSpec;
use annocheck_cli::run_suite;
use annocheck_client::AnnotationClient;
use annocheck_client::ClientConfig;
use annocheck_client::DEFAULT_BASE_URL;
use clap::Parser;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Conformance checks for the PharmGKB clinical annotation API.
#[derive(Debug, Parser)]
#[command(name = "annocheck", version, about)]
struct Cli {
    /// Base endpoint of the annotation API.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Gene symbol to validate; repeatable. Defaults to the standard suite.
    #[arg(long = "gene", value_name = "SYMBOL")]
    genes: Vec<String>,
    /// Target drug for the drug-presence check.
    #[arg(long, default_value = DEFAULT_DRUG)]
    drug: String,
    /// Minimum pediatric annotation count.
    #[arg(long, default_value_t = DEFAULT_MIN_PEDIATRIC)]
    min_pediatric: usize,
}

/// Run-aborting CLI failures.
#[derive(Debug, Error)]
enum CliError {
    /// The session could not be constructed.
    #[error("session setup failed: {0}")]
    Session(String),
    /// Writing a report line failed.
    #[error("output failed: {0}")]
    Output(String),
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            let _ = write_stderr_line(&err.to_string());
            ExitCode::from(2)
        }
    }
}

/// Builds the session, runs the suite, and reports each case.
fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    let spec = SuiteSpec {
        genes: if cli.genes.is_empty() {
            DEFAULT_GENES.iter().map(ToString::to_string).collect()
        } else {
            cli.genes
        },
        drug: cli.drug,
        min_pediatric: cli.min_pediatric,
    };
    let config = ClientConfig::with_base_url(cli.base_url);
    let client =
        AnnotationClient::new(&config).map_err(|err| CliError::Session(err.to_string()))?;

    let reports = run_suite(&client, &spec);
    for report in &reports {
        write_stdout_line(&report.to_string())
            .map_err(|err| CliError::Output(err.to_string()))?;
    }
    let failed = reports.iter().filter(|report| !report.passed()).count();
    write_stdout_line(&format!("{} cases, {failed} failed", reports.len()))
        .map_err(|err| CliError::Output(err.to_string()))?;
    if failed == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout without the print macros.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr without the print macros.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}
