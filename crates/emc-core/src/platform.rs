use crate::error::LaunchError;
use std::fmt;

/// An operating system for which EMC ships a pre-built simulation executable.
///
/// The set is closed on purpose: every consumer matches exhaustively, so
/// adding a platform is a compile-time-checked change rather than a stringly
/// typed fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
}

impl Platform {
    /// Detects the platform of the host this process is running on.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::UnsupportedPlatform`] when the host OS is not
    /// one EMC distributes executables for.
    pub fn host() -> Result<Self, LaunchError> {
        match std::env::consts::OS {
            "linux" => Ok(Platform::Linux),
            "macos" => Ok(Platform::MacOS),
            "windows" => Ok(Platform::Windows),
            other => Err(LaunchError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    /// The filename of the bundled EMC executable for this platform, as it
    /// appears under `emc/bin/` in the distribution.
    pub const fn executable_name(self) -> &'static str {
        match self {
            Platform::Linux => "emc_linux_x86_64",
            Platform::MacOS => "emc_macos",
            Platform::Windows => "emc_win32.exe",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Linux => "linux",
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
        };
        write!(f, "{}", name)
    }
}
