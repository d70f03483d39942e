use hostgate_core::logging;
use std::process::ExitCode;

mod cli;

use crate::cli::CliCommand;

fn main() -> ExitCode {
    // Log to file when possible; stderr otherwise so the CLI still runs.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match CliCommand::run_from_args() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("hostgate error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
