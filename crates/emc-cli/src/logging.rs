use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Installs the global tracing subscriber for the CLI.
///
/// Logs go to stderr so they never interleave with the child processes'
/// inherited stdout. An optional plain-text copy is written to `log_file`.
pub fn init(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry().with(level).with(console);

    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(CliError::Io)?;
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true);
            registry.with(file_layer).init();
        }
        None => registry.init(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::PathBuf;
    use std::sync::Once;
    use tracing::{info, warn};

    static INIT: Once = Once::new();

    fn install_once() {
        INIT.call_once(|| {
            init(2, false, None).expect("global logger installation failed");
        });
    }

    #[test]
    #[serial]
    fn logger_installs_and_accepts_events() {
        install_once();
        warn!("launcher warning");
        info!("launcher info");
    }

    #[test]
    #[serial]
    fn file_layer_writes_events_to_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("emcrs.log");

        let file = File::create(&log_path).unwrap();
        let file_layer = fmt::layer().with_writer(file).with_ansi(false);
        let subscriber = tracing_subscriber::registry().with(file_layer);

        tracing::subscriber::with_default(subscriber, || {
            info!("setup step dispatched");
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("setup step dispatched"));
        assert!(content.contains("INFO"));
    }

    #[test]
    #[serial]
    fn unwritable_log_file_is_an_io_error() {
        let invalid_path = PathBuf::from("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let result = init(0, false, Some(&invalid_path));
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
