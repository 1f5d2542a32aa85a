use crate::error::LaunchError;
use crate::platform::Platform;
use std::path::{Path, PathBuf};

/// The filesystem root of an installed EMC distribution.
///
/// A correctly installed root contains the fixed subtree `emc/scripts/`
/// (holding `emc_setup.pl`) and `emc/bin/` (holding the per-platform
/// simulation executables). The root itself is always supplied explicitly;
/// how it is discovered (flag, environment, config file, OS default) is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRoot {
    path: PathBuf,
}

impl InstallRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the bundled Perl scripts (`<root>/emc/scripts`).
    pub fn scripts_dir(&self) -> PathBuf {
        self.path.join("emc").join("scripts")
    }

    /// Directory holding the compiled simulation executables (`<root>/emc/bin`).
    pub fn bin_dir(&self) -> PathBuf {
        self.path.join("emc").join("bin")
    }

    /// Absolute path to the bundled setup script.
    pub fn setup_script(&self) -> PathBuf {
        self.scripts_dir().join("emc_setup.pl")
    }

    /// Absolute path to the simulation executable for the given platform.
    pub fn executable(&self, platform: Platform) -> PathBuf {
        self.bin_dir().join(platform.executable_name())
    }

    /// Checks that the root actually contains the expected EMC subtree.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::UnresolvedBinary`] naming the first missing
    /// directory when the layout is incomplete.
    pub fn verify_layout(&self) -> Result<(), LaunchError> {
        for dir in [self.scripts_dir(), self.bin_dir()] {
            if !dir.is_dir() {
                return Err(LaunchError::UnresolvedBinary { path: dir });
            }
        }
        Ok(())
    }
}

impl From<PathBuf> for InstallRoot {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}
