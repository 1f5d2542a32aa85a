use crate::cli::SetupArgs;
use crate::error::Result;
use crate::root::RootManager;
use emcrs::Launcher;
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: SetupArgs, root_override: Option<&Path>) -> Result<()> {
    let manager = RootManager::new(root_override)?;
    let root = manager.install_root().clone();

    if let Err(e) = root.verify_layout() {
        warn!("Install root looks incomplete: {}", e);
    }

    let mut launcher = Launcher::host(root)?;
    if let Some(perl) = args.perl {
        launcher = launcher.with_perl(perl);
    }

    info!(
        "Running EMC setup: {}",
        launcher.setup_invocation(&args.input, &args.extra)
    );
    launcher.run_setup(&args.input, &args.extra)?;

    info!("Setup step finished for {:?}.", &args.input);
    Ok(())
}
