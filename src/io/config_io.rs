use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for loading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Read the config file at `path`.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&text)
}

/// Parse config text. Missing sections and keys take their defaults.
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Load the config named on the command line, or the defaults when none was.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => read_config(p),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::{Align, ToggleMode};
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[ui]
title = "Errands"
align = "left"
mouse = false

[ui.colors]
dim = "#888888"

[tasks]
toggle = "flip-each"

[log]
level = "checklist=debug"
file = "/tmp/checklist.log"
"##
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.ui.title, "Checklist");
        assert_eq!(config.ui.align, Align::Right);
        assert!(config.ui.mouse);
        assert!(config.ui.kitty_keyboard);
        assert_eq!(config.tasks.toggle, ToggleMode::Complement);
        assert_eq!(config.log.level, "info");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = parse_config(sample_config()).unwrap();
        assert_eq!(config.ui.title, "Errands");
        assert_eq!(config.ui.align, Align::Left);
        assert!(!config.ui.mouse);
        assert!(config.ui.kitty_keyboard);
        assert_eq!(config.ui.colors.get("dim").map(String::as_str), Some("#888888"));
        assert_eq!(config.tasks.toggle, ToggleMode::FlipEach);
        assert_eq!(config.log.level, "checklist=debug");
        assert_eq!(
            config.log.file.as_deref(),
            Some(Path::new("/tmp/checklist.log"))
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = parse_config("[ui]\nfont = \"Vazirmatn\"\n\n[extra]\nx = 1\n").unwrap();
        assert_eq!(config.ui.title, "Checklist");
    }

    #[test]
    fn test_bad_value_is_parse_error() {
        let err = parse_config("[tasks]\ntoggle = \"sometimes\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        let err = parse_config("[ui\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_read_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("checklist.toml");
        fs::write(&path, sample_config()).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.ui.title, "Errands");
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.ui.title, "Checklist");
    }
}
