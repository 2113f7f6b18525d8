//! `jobdeck` binary entry point.

use std::process::ExitCode;

use clap::Parser;
use jobdeck_cli::{CliArgs, JobdeckCli};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let cli = match JobdeckCli::from_args("jobdeck", &args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("jobdeck: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jobdeck: {e}");
            ExitCode::FAILURE
        }
    }
}
