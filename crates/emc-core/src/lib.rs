//! # EMC Launcher Core Library
//!
//! A thin, typed interface for locating and running the two pre-built artifacts
//! of the Enhanced Monte Carlo (EMC) molecular simulation toolkit: the Perl
//! setup script (`emc_setup.pl`) and the platform-specific compiled simulation
//! executable (`emc_*`).
//!
//! The library performs no simulation work of its own. Its entire job is
//! deterministic path resolution plus synchronous subprocess invocation:
//!
//! - **[`platform`]**: a closed enumeration of the operating systems EMC ships
//!   executables for, with an exhaustive mapping to the bundled executable
//!   names.
//! - **[`install`]**: the [`InstallRoot`](install::InstallRoot) path model
//!   anchoring the fixed `emc/scripts/` and `emc/bin/` subtree of an EMC
//!   distribution. The root is always an explicit parameter; discovering it
//!   (environment, config file, OS defaults) is the caller's concern.
//! - **[`launcher`]**: [`Invocation`](launcher::Invocation) argv plans that can
//!   be inspected without spawning, and the [`Launcher`](launcher::Launcher)
//!   that builds and runs them for the setup and build steps.
//!
//! Every call is one-shot, stateless, and blocking: one child process per
//! invocation, standard streams inherited, non-zero exits surfaced as typed
//! errors.

pub mod error;
pub mod install;
pub mod launcher;
pub mod platform;

pub use error::LaunchError;
pub use install::InstallRoot;
pub use launcher::{Invocation, Launcher};
pub use platform::Platform;
