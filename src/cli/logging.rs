use crate::error::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing::Level;

/// Pick the log level from the global CLI flags; `quiet` wins over `verbose`.
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    match (verbose, quiet) {
        (_, true) => Level::ERROR,
        (true, false) => Level::DEBUG,
        (false, false) => Level::INFO,
    }
}

/// Install the global `tracing` subscriber.
///
/// Console logs go to stderr so reports printed to stdout stay clean. With a
/// log file, output is appended there without ANSI colours instead.
pub fn init_logging(level: Level, log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    // Ignore the error if a subscriber is already installed (tests)
    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_flags() {
        assert_eq!(level_for(false, false), Level::INFO);
        assert_eq!(level_for(true, false), Level::DEBUG);
        assert_eq!(level_for(false, true), Level::ERROR);
        assert_eq!(level_for(true, true), Level::ERROR);
    }

    #[test]
    fn test_log_file_is_created() -> Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let path = temp_dir.path().join("fuel.log");

        init_logging(Level::INFO, Some(&path))?;

        assert!(path.exists());
        Ok(())
    }
}
