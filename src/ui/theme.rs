//! Theme management and ANSI escape sequence generation.
//!
//! Two built-in themes are embedded in the plugin binary; custom themes are read
//! from TOML files at startup.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme (default)
//! - `catppuccin-latte`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! header_bg = "#313244"        # optional
//! cursor_fg = "#1e1e2e"
//! cursor_bg = "#89b4fa"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! checkbox_fg = "#a6e3a1"
//! edit_fg = "#1e1e2e"
//! edit_bg = "#fab387"
//! error_fg = "#f38ba8"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```
//! use memberdesk::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! assert_eq!(Theme::fg(&theme.colors.cursor_bg), "\u{1b}[38;2;30;102;245m");
//! ```

use crate::domain::{MemberdeskError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header and column title color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Row under the cursor.
    pub cursor_fg: String,
    pub cursor_bg: String,

    pub text_normal: String,
    /// Footer, pager and secondary info.
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    pub search_bar_border: String,
    /// Search match highlight.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Checked checkboxes.
    pub checkbox_fg: String,

    /// Focused cell of the row being edited.
    pub edit_fg: String,
    pub edit_bg: String,

    /// Load failures.
    pub error_fg: String,

    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, or `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MemberdeskError::Theme`] if the file cannot be read or is not a
    /// complete theme definition.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            MemberdeskError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| MemberdeskError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to an RGB tuple, falling back to white on bad input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::default().name, "catppuccin-mocha");
        let latte = Theme::from_name("catppuccin-latte").unwrap();
        assert_eq!(latte.name, "catppuccin-latte");
        assert!(latte.colors.header_bg.is_none());
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#zzzzzz"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        theme.colors.cursor_bg = "#123456".to_string();
        file.write_all(toml::to_string(&theme).unwrap().as_bytes()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded, theme);
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"half\"\n").unwrap();
        assert!(matches!(
            Theme::from_file(file.path()),
            Err(MemberdeskError::Theme(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = Theme::from_file(&missing).unwrap_err();
        assert!(err.to_string().starts_with("Theme error: failed to read"));
    }
}
