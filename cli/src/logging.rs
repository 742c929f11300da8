use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::filter::EnvFilter;

/// Environment variable naming an append-only log file.
pub const LOG_PATH_VAR: &str = "ROSTERWATCH_LOG_PATH";

/// Open the log file for appending, creating it when missing.
fn open_log_file(path: &OsStr) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Logs go to the file named by
/// [`LOG_PATH_VAR`] when it can be opened, otherwise to stderr.
pub fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let Some(path) = std::env::var_os(LOG_PATH_VAR) else {
        builder.with_writer(std::io::stderr).init();
        return;
    };

    match open_log_file(&path) {
        Ok(file) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(e) => {
            builder.with_writer(std::io::stderr).init();
            tracing::warn!(
                path = %path.to_string_lossy(),
                error = %e,
                "Cannot open log file, logging to stderr"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_file_appends() {
        let path = std::env::temp_dir().join(format!("rosterwatch-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        writeln!(open_log_file(path.as_os_str()).unwrap(), "first").unwrap();
        writeln!(open_log_file(path.as_os_str()).unwrap(), "second").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_log_file_in_missing_dir_fails() {
        let path = std::env::temp_dir()
            .join("rosterwatch-no-such-dir")
            .join("out.log");
        assert!(open_log_file(path.as_os_str()).is_err());
    }
}
