use crate::cli::{RootArgs, RootCommands};
use crate::error::Result;
use crate::root::RootManager;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: RootArgs, root_override: Option<&Path>) -> Result<()> {
    match args.command {
        RootCommands::Path => handle_path(root_override),
        RootCommands::SetPath { path } => handle_set_path(path),
        RootCommands::ResetPath => handle_reset_path(),
    }
}

fn handle_path(root_override: Option<&Path>) -> Result<()> {
    let manager = RootManager::new(root_override)?;
    let root = manager.install_root();

    println!("{}", root.path().display());
    match root.verify_layout() {
        Ok(()) => println!("✓ Contains the expected emc/scripts and emc/bin subtree."),
        Err(e) => println!("✗ Not a complete EMC installation: {}", e),
    }
    Ok(())
}

fn handle_set_path(path: PathBuf) -> Result<()> {
    RootManager::set_custom_path(&path)?;
    info!("Persisted custom install root {:?}.", &path);
    println!("Install root set to: {}", path.display());
    Ok(())
}

fn handle_reset_path() -> Result<()> {
    RootManager::reset_path()?;
    println!("Install root reset to the default location.");
    Ok(())
}
