use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::model::config::LogConfig;

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("invalid log level {level:?}: {message}")]
    InvalidLevel { level: String, message: String },
    #[error("log file path has no file name: {0}")]
    NoFileName(PathBuf),
    #[error("could not create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not install logger: {0}")]
    Install(String),
}

/// Build the filter for a configured level directive.
pub fn level_filter(level: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_new(level).map_err(|e| LogError::InvalidLevel {
        level: level.to_string(),
        message: e.to_string(),
    })
}

/// Split a log file path into the directory and file name the appender wants.
fn split_log_path(file: &Path) -> Result<(PathBuf, PathBuf), LogError> {
    let name = file
        .file_name()
        .ok_or_else(|| LogError::NoFileName(file.to_path_buf()))?;
    let dir = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, PathBuf::from(name)))
}

/// Install a file logger when the config names a file.
///
/// The terminal belongs to the UI, so there is no console layer. The
/// returned guard flushes buffered lines on drop and must outlive the UI.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>, LogError> {
    let Some(file) = &config.file else {
        return Ok(None);
    };

    let filter = level_filter(&config.level)?;
    let (dir, name) = split_log_path(file)?;
    fs::create_dir_all(&dir).map_err(|e| LogError::CreateDir {
        path: dir.clone(),
        source: e,
    })?;

    let appender = tracing_appender::rolling::never(&dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| LogError::Install(e.to_string()))?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert!(level_filter("info").is_ok());
        assert!(level_filter("checklist=debug,warn").is_ok());
        let err = level_filter("checklist=loud").unwrap_err();
        assert!(matches!(err, LogError::InvalidLevel { .. }));
    }

    #[test]
    fn test_split_log_path() {
        let (dir, name) = split_log_path(Path::new("/var/log/checklist.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/var/log"));
        assert_eq!(name, PathBuf::from("checklist.log"));

        let (dir, name) = split_log_path(Path::new("checklist.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, PathBuf::from("checklist.log"));

        assert!(matches!(
            split_log_path(Path::new("/")),
            Err(LogError::NoFileName(_))
        ));
    }

    #[test]
    fn test_no_file_means_no_logger() {
        let guard = init_logging(&LogConfig::default()).unwrap();
        assert!(guard.is_none());
    }
}
