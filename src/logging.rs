use std::fs;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "scraper.log";

/// Initializes the logging system with both console and file output.
pub fn init_logging() {
    ensure_log_dir(Path::new(LOG_DIR));

    // Daily rotated JSON log next to the console output
    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE);
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stdout);

    // Respect RUST_LOG if set; otherwise info for this crate
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("runway_scraper=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // Keep the writer alive for the whole process so logs are flushed on exit
    std::mem::forget(_guard);
}

/// Creates the log directory. The subscriber is not installed yet, so a
/// failure is reported straight to stderr and file logging degrades.
fn ensure_log_dir(dir: &Path) -> bool {
    match fs::create_dir_all(dir) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("warning: could not create log directory '{}': {}", dir.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_log_dir_creates_nested_dirs() {
        let dir = tempdir().unwrap();
        let logs = dir.path().join("a").join("logs");
        assert!(ensure_log_dir(&logs));
        assert!(logs.is_dir());
    }

    #[test]
    fn test_ensure_log_dir_reports_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "file").unwrap();
        assert!(!ensure_log_dir(&blocker.join("logs")));
    }
}
