mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("nucleogen CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("Resolved settings: {:?}", &settings);

    let command_result = match cli.command {
        Commands::Pdb(args) => {
            info!("Dispatching to 'pdb' command.");
            commands::pdb::run(args, &settings)
        }
        Commands::Table(args) => {
            info!("Dispatching to 'table' command.");
            commands::table::run(args, &settings)
        }
    };

    if let Err(e) = &command_result {
        error!("Command failed: {}", e);
    }

    command_result
}
