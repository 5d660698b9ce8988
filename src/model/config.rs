use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from the optional TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub tasks: TaskConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Text shown in the header bar
    #[serde(default = "default_title")]
    pub title: String,
    /// Which edge task labels hug
    #[serde(default)]
    pub align: Align,
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Kitty keyboard protocol: needed by most terminals to report Ctrl+Enter.
    /// Disable if your terminal has issues with enhanced key reporting.
    #[serde(default = "default_true")]
    pub kitty_keyboard: bool,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            title: default_title(),
            align: Align::default(),
            mouse: true,
            kitty_keyboard: true,
            colors: HashMap::new(),
        }
    }
}

/// Horizontal alignment of task labels in the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskConfig {
    #[serde(default)]
    pub toggle: ToggleMode,
}

/// How toggling a group decides each member's new done flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToggleMode {
    /// Every member becomes the complement of the group's first member
    #[default]
    Complement,
    /// Every member is inverted on its own
    FlipEach,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. "info" or "checklist=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; no logging when absent
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Checklist".into()
}

fn default_log_level() -> String {
    "info".into()
}
