//! Extracts the status log information from Thermo raw files.
//!
//! Prints each scan's status-log pairs as tab-separated lines, each scan
//! terminated by a `--END_OF_SCAN_<n>` boundary line (scans numbered from 1).

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use rawmon::driver::{run_tool, ToolKind};
use rawmon::thermo::{RecordSource, ThermoAccessor};

/// Extracts the status log information from Thermo raw files.
#[derive(Parser)]
#[command(name = "thermo-status-log", version)]
#[command(about = "Extracts the status log information from Thermo raw files")]
struct Cli {
    /// Path to the Thermo *.raw file
    #[arg(value_name = "RAW_FILE")]
    raw_file: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Historical usage contract: usage goes to stderr, exit code -1.
            eprint!("{err}");
            process::exit(-1);
        }
    };

    let stdout = io::stdout();
    let result = run_tool(
        ToolKind::StatusLog,
        &cli.raw_file,
        |path| Ok(ThermoAccessor::open(path, RecordSource::StatusLog)?),
        stdout.lock(),
    );

    if let Err(err) = result {
        err.report();
        process::exit(err.exit_code());
    }
}
