use emcrs::LaunchError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Launcher(#[from] LaunchError),

    #[error("Install root error: {0}")]
    Root(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
