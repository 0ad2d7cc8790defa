//! Fleetwise - vehicle insurance, formatting, and maintenance demo
//!
//! Running with no arguments prints the fixed demonstration report.

use clap::Parser;
use fleetwise_cli::cli::Cli;
use fleetwise_cli::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
