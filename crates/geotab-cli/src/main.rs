use geotab_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    let destination = logging::init();
    tracing::debug!(?destination, "logging ready");

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("geotab error: {:#}", err);
        std::process::exit(1);
    }
}
