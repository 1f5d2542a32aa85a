use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Kevin Shen",
    version,
    about = "EMC CLI - A command-line interface for the Enhanced Monte Carlo (EMC) molecular simulation toolkit, wrapping its bundled setup script and simulation executable.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Use this EMC install root for this invocation only,
    /// instead of the configured or default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the bundled emc_setup.pl script on an input (.esh) file to generate simulation inputs.
    Setup(SetupArgs),
    /// Run the bundled EMC simulation executable on a generated build (.emc) file.
    Build(BuildArgs),
    /// Manage the location of the local EMC install root (scripts and executables).
    Root(RootArgs),
}

/// Arguments for the `setup` subcommand.
#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Path to the setup input file (e.g., name.esh).
    #[arg(required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// Perl interpreter to use instead of `perl` from PATH.
    #[arg(long, value_name = "PATH")]
    pub perl: Option<PathBuf>,

    /// Extra arguments forwarded verbatim to emc_setup.pl.
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "EXTRA"
    )]
    pub extra: Vec<OsString>,
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the build input file (e.g., build.emc).
    #[arg(required = true, value_name = "BUILD_FILE")]
    pub build_file: PathBuf,
}

/// Arguments for the `root` subcommand.
#[derive(Args, Debug)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: RootCommands,
}

/// Available commands for install-root management.
#[derive(Subcommand, Debug)]
pub enum RootCommands {
    /// Show the absolute path of the install root currently in effect.
    Path,
    /// Persist a custom absolute path for the install root.
    SetPath {
        /// The new path of the EMC installation.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Reset the install root to its default, OS-specific location.
    ResetPath,
}
