mod cli;
mod commands;
mod error;
mod logging;
mod root;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use emcrs::LaunchError;
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_app(cli) {
        eprintln!("❌ Error: {}", e);
        // A failed child process forwards its own exit code; everything
        // else is a launcher error.
        let code = match &e {
            CliError::Launcher(LaunchError::ChildProcessFailure {
                code: Some(code), ..
            }) => *code,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn run_app(cli: Cli) -> Result<()> {
    logging::init(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("EMC CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = match cli.command {
        Commands::Setup(args) => {
            info!("Dispatching to 'setup' command.");
            commands::setup::run(args, cli.root.as_deref())
        }
        Commands::Build(args) => {
            info!("Dispatching to 'build' command.");
            commands::build::run(args, cli.root.as_deref())
        }
        Commands::Root(args) => {
            info!("Dispatching to 'root' command.");
            commands::root::run(args, cli.root.as_deref())
        }
    };

    match &result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    result
}
