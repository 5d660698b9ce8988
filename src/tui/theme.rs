use ratatui::style::Color;

use crate::model::UiConfig;
use crate::ops::task_ops::Severity;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Done tasks
    pub dim: Color,
    pub border: Color,
    pub focus_border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub button_fg: Color,
    pub save: Color,
    pub delete: Color,
    pub toggle: Color,
    pub clear: Color,
    pub selection_bg: Color,
    pub cursor_bg: Color,
    pub warning: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x33, 0x33, 0x33),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x88, 0x88, 0x88),
            border: Color::Rgb(0xCC, 0xCC, 0xCC),
            focus_border: Color::Rgb(0x4A, 0x90, 0xE2),
            header_bg: Color::Rgb(0x4A, 0x90, 0xE2),
            header_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            button_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            save: Color::Rgb(0x4C, 0xAF, 0x50),
            delete: Color::Rgb(0xE7, 0x4C, 0x3C),
            toggle: Color::Rgb(0xF3, 0x9C, 0x12),
            clear: Color::Rgb(0xE7, 0x4C, 0x3C),
            selection_bg: Color::Rgb(0xD6, 0xE6, 0xF8),
            cursor_bg: Color::Rgb(0xB3, 0xD1, 0xF2),
            warning: Color::Rgb(0xF3, 0x9C, 0x12),
            info: Color::Rgb(0x4A, 0x90, 0xE2),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring invalid color");
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut theme.background,
                "text" => &mut theme.text,
                "text_bright" => &mut theme.text_bright,
                "dim" => &mut theme.dim,
                "border" => &mut theme.border,
                "focus_border" => &mut theme.focus_border,
                "header_bg" => &mut theme.header_bg,
                "header_fg" => &mut theme.header_fg,
                "button_fg" => &mut theme.button_fg,
                "save" => &mut theme.save,
                "delete" => &mut theme.delete,
                "toggle" => &mut theme.toggle,
                "clear" => &mut theme.clear,
                "selection_bg" => &mut theme.selection_bg,
                "cursor_bg" => &mut theme.cursor_bg,
                "warning" => &mut theme.warning,
                "info" => &mut theme.info,
                _ => {
                    tracing::warn!(key = %key, "ignoring unknown color key");
                    continue;
                }
            };
            *slot = color;
        }

        theme
    }

    /// Foreground for a task row
    pub fn task_color(&self, done: bool) -> Color {
        if done { self.dim } else { self.text }
    }

    /// Accent for a notice popup
    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }
}
