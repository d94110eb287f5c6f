mod cli;

use crate::cli::CliCommand;

fn main() {
    // Parse CLI and dispatch; logging is set up once config is loaded.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("s3addr error: {:#}", err);
        std::process::exit(1);
    }
}
