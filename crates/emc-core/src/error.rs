use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Unsupported platform '{os}': EMC ships executables for linux, macos and windows")]
    UnsupportedPlatform { os: String },

    #[error(
        "Perl interpreter not available ({reason}). The EMC setup step requires Perl; see https://www.perl.org/get.html"
    )]
    MissingDependency { reason: String },

    #[error("Bundled EMC asset not found: {path}", path = path.display())]
    UnresolvedBinary { path: PathBuf },

    #[error("Child process '{program}' exited with {status}", status = describe_exit(*code))]
    ChildProcessFailure {
        program: String,
        code: Option<i32>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
