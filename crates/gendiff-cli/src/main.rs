//! Command-line front end for `gendiff-core`.
//!
//! Loads two JSON or YAML files, prints their diff in the selected format and
//! reports failures as a single `Error: <message>` line on stderr.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gendiff_core::{diff_documents, has_changes, load::load_document, render, Format};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit status when `--exit-code` is set and the documents differ.
const EXIT_DIFFERENT: u8 = 1;
/// Exit status for any error.
const EXIT_FAILURE: u8 = 2;

/// Compares two configuration files and shows a difference.
#[derive(Debug, Parser)]
#[command(name = "gendiff", version, about)]
struct Cli {
    /// Path to the first (old) file.
    first_file: PathBuf,

    /// Path to the second (new) file.
    second_file: PathBuf,

    /// Set format of output: stylish, plain or json.
    #[arg(short = 'f', long = "format", default_value = "stylish")]
    format: String,

    /// Write output to FILE instead of STDOUT.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Exit with status 1 when the files differ.
    #[arg(long = "exit-code")]
    exit_code: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            let _ = writeln!(io::stderr(), "Error: {err}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let left = load_document(&cli.first_file)?;
    let right = load_document(&cli.second_file)?;

    let tree = diff_documents(&left, &right)?;
    let format: Format = cli.format.parse()?;

    let rendered = render::render(&tree, format)?;
    tracing::debug!(%format, differs = has_changes(&tree), "comparison finished");

    if let Some(path) = &cli.output {
        fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("failed to write output to {}", path.display()))?;
    } else {
        println!("{rendered}");
    }

    if cli.exit_code && has_changes(&tree) {
        Ok(ExitCode::from(EXIT_DIFFERENT))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
