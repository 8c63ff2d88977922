//! Extracts specific meta data from Thermo raw files.
//!
//! Prints exactly two tab-separated lines: the sample acquisition date, and the
//! instrument model translated to its HUPO-PSI CV accession.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use rawmon::driver::{run_tool, ToolKind};
use rawmon::thermo::{RecordSource, ThermoAccessor};

/// Extracts specific meta data from Thermo raw files.
#[derive(Parser)]
#[command(name = "thermo-metadata", version)]
#[command(about = "Extracts specific meta data from Thermo raw files")]
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
        ToolKind::Metadata,
        &cli.raw_file,
        // The metadata tool never probes indexed records; the source is moot.
        |path| Ok(ThermoAccessor::open(path, RecordSource::StatusLog)?),
        stdout.lock(),
    );

    if let Err(err) = result {
        err.report();
        process::exit(err.exit_code());
    }
}
