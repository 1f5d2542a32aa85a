use crate::error::{CliError, Result};
use directories::ProjectDirs;
use emcrs::InstallRoot;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming an EMC install root, checked after the
/// `--root` flag and before the persisted configuration.
pub const ROOT_ENV_VAR: &str = "EMC_ROOT";

const PATH_CONF: &str = "path.conf";

/// Locates the EMC install root for this invocation.
///
/// Resolution order: explicit `--root` override, then the `EMC_ROOT`
/// environment variable, then a persisted `path.conf` under the OS config
/// directory, then the OS-specific default data directory.
#[derive(Debug)]
pub struct RootManager {
    root: InstallRoot,
}

impl RootManager {
    pub fn new(override_path: Option<&Path>) -> Result<Self> {
        let config_file = Self::path_config_file()?;
        let default = Self::default_root_path()?;
        let path = Self::determine_root_path(override_path, &config_file, default)?;
        debug!("RootManager resolved install root: {:?}", &path);
        Ok(Self {
            root: InstallRoot::new(path),
        })
    }

    pub fn install_root(&self) -> &InstallRoot {
        &self.root
    }

    /// Persists a custom install root for future invocations.
    pub fn set_custom_path(path: &Path) -> Result<()> {
        Self::write_custom_path(path, &Self::path_config_file()?)
    }

    /// Removes any persisted install root, reverting to the default location.
    pub fn reset_path() -> Result<()> {
        if let Ok(config_path) = Self::path_config_file() {
            Self::remove_custom_path(&config_path)?;
        }
        Ok(())
    }

    fn determine_root_path(
        override_path: Option<&Path>,
        config_file: &Path,
        default: PathBuf,
    ) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }

        if let Some(value) = std::env::var_os(ROOT_ENV_VAR) {
            if !value.is_empty() {
                debug!("Using install root from {}.", ROOT_ENV_VAR);
                return Ok(PathBuf::from(value));
            }
            warn!("{} is set but empty, ignoring it.", ROOT_ENV_VAR);
        }

        if config_file.exists() {
            let persisted = fs::read_to_string(config_file)?.trim().to_string();
            if persisted.is_empty() {
                warn!("Persisted root config is empty, falling back to the default path.");
            } else {
                return Ok(PathBuf::from(persisted));
            }
        }

        Ok(default)
    }

    fn write_custom_path(path: &Path, config_file: &Path) -> Result<()> {
        if !path.is_absolute() {
            return Err(CliError::Root(format!(
                "Install root must be an absolute path, got '{}'.",
                path.display()
            )));
        }
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_file, path.display().to_string()).map_err(CliError::from)
    }

    fn remove_custom_path(config_file: &Path) -> Result<()> {
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    fn path_config_file() -> Result<PathBuf> {
        ProjectDirs::from("org", "emc", "emcrs")
            .map(|dirs| dirs.config_dir().join(PATH_CONF))
            .ok_or_else(|| CliError::Root("Could not determine config directory path.".to_string()))
    }

    fn default_root_path() -> Result<PathBuf> {
        ProjectDirs::from("org", "emc", "emcrs")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                CliError::Root("Could not determine default install root path.".to_string())
            })
    }
}
