use crate::cli::BuildArgs;
use crate::error::Result;
use crate::root::RootManager;
use emcrs::Launcher;
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: BuildArgs, root_override: Option<&Path>) -> Result<()> {
    let manager = RootManager::new(root_override)?;
    let root = manager.install_root().clone();

    if let Err(e) = root.verify_layout() {
        warn!("Install root looks incomplete: {}", e);
    }

    let launcher = Launcher::host(root)?;

    info!(
        "Running EMC build on {} ({})",
        args.build_file.display(),
        launcher.platform()
    );
    launcher.run_build(&args.build_file)?;

    info!("Build step finished for {:?}.", &args.build_file);
    Ok(())
}
