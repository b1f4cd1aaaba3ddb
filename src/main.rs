//! # aigcombine entry point
//!
//! Reads a monitor and an implementation in AIGER format and writes their combination
//! in ASCII AIGER format.

use std::{
    fs::File,
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aigcombine::{Aig, combine};

/// Combine an AIGER monitor (eg. compiled from an LTL formula) with an AIGER implementation.
///
/// Implementation outputs are plugged into the monitor inputs of the same name
/// (monitor inputs named `AIGER_NEXT_<signal>` match `<signal>` regardless of case).
#[derive(Parser, Debug)]
#[command(name = "aigcombine", version, about)]
struct Cli {
    /// `<monitor> <implementation>`, or only `<implementation>` with the monitor read from stdin.
    #[arg(required = true, num_args = 1..=2, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Write the combined circuit to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log the combination steps (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout is for the circuit
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let (monitor, implementation_file) = match cli.files.as_slice() {
        [monitor_file, implementation_file] => {
            let monitor = Aig::from_file(monitor_file).with_context(|| {
                format!("cannot read monitor file {}", monitor_file.display())
            })?;
            (monitor, implementation_file)
        }
        [implementation_file] => {
            let monitor =
                Aig::from_reader(io::stdin().lock()).context("cannot read monitor from stdin")?;
            (monitor, implementation_file)
        }
        _ => bail!("expected one or two files"),
    };

    let implementation = Aig::from_file(implementation_file).with_context(|| {
        format!(
            "cannot read implementation file {}",
            implementation_file.display()
        )
    })?;

    let combination = combine(&monitor, &implementation)?;

    match &cli.output {
        Some(path) => {
            let f = File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            combination.write_ascii(BufWriter::new(f))?;
        }
        None => combination.write_ascii(BufWriter::new(io::stdout().lock()))?,
    }

    Ok(())
}
