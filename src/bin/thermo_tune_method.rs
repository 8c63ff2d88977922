//! Extracts the tune method information from Thermo raw files.
//!
//! Prints the sample date and instrument model header, then each tuning
//! segment's parameters as tab-separated lines, each segment terminated by a
//! `--END_OF_SEGMENT_<n>` boundary line (segments numbered from 0).

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use rawmon::driver::{run_tool, ToolKind};
use rawmon::thermo::{RecordSource, ThermoAccessor};

/// Extracts the tune method information from Thermo raw files.
#[derive(Parser)]
#[command(name = "thermo-tune-method", version)]
#[command(about = "Extracts the tune method information from Thermo raw files")]
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
        ToolKind::TuneMethod,
        &cli.raw_file,
        |path| Ok(ThermoAccessor::open(path, RecordSource::TuneMethod)?),
        stdout.lock(),
    );

    if let Err(err) = result {
        err.report();
        process::exit(err.exit_code());
    }
}
