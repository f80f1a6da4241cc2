//! Memberdesk: a Zellij plugin for administering a member list.
//!
//! The plugin fetches member records once from a JSON endpoint and then works on
//! them entirely in memory:
//! - Case-insensitive search over id, name, email and role
//! - Fixed-size pages of 10 rows
//! - Row selection, with select-all spanning every record
//! - Inline editing through an edit buffer, committed or cancelled as a whole
//! - Deleting a single row or every selected row
//!
//! Nothing is written back to the server; a reload starts over.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - ListState: search, pages, selection, edit buffer │
//! │  - Event handling and actions                       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌──────────────────┐
//! │ UI Layer      │   │ Source Layer     │
//! │ (ui/)         │   │ (source/)        │
//! │ - Rendering   │   │ - Endpoint/sample│
//! │ - Theming     │   │ - Load lifecycle │
//! │ - Components  │   │ - JSON decoding  │
//! └───────────────┘   └──────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Record, Role, EditBuffer                         │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/memberdesk.wasm" {
//!         endpoint "https://example.com/members.json"
//!         theme "catppuccin-latte"
//!         trace_level "memberdesk=debug"
//!     }
//! }
//! ```
//!
//! Setting `sample "46"` replaces the endpoint with 46 generated records.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod source;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, ListState, PAGE_SIZE};
pub use domain::{EditBuffer, EditField, MemberdeskError, Record, Result, Role};
pub use source::{LoadStatus, SourceConfig};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// See [`Config::from_zellij`] for the accepted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Where member records come from. Default: the public members endpoint.
    pub source: SourceConfig,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// - `endpoint`: remote url of the member list
    /// - `sample`: positive record count; replaces the endpoint with generated records
    /// - `theme`, `theme_file`, `trace_level`: passed through
    ///
    /// Invalid values are logged and fall back to defaults.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use memberdesk::{Config, SourceConfig};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("sample".to_string(), "46".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.source, SourceConfig::Sample { count: 46 });
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let endpoint = config
            .get("endpoint")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let sample = config.get("sample").and_then(|raw| {
            parse_sample_count(raw)
                .map_err(|e| tracing::warn!(error = %e, "ignoring sample option"))
                .ok()
        });

        let source = match (sample, endpoint) {
            (Some(count), _) => SourceConfig::Sample { count },
            (None, Some(url)) => SourceConfig::Remote { url },
            (None, None) => SourceConfig::default(),
        };

        Self {
            source,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Parses the `sample` option as a positive record count.
///
/// # Errors
///
/// Returns [`MemberdeskError::Config`] for anything but a positive integer.
pub fn parse_sample_count(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(MemberdeskError::Config("sample count must be positive".to_string())),
        Ok(count) => Ok(count),
        Err(e) => Err(MemberdeskError::Config(format!("invalid sample count {raw:?}: {e}"))),
    }
}

/// Creates the initial application state for `config`.
///
/// The theme comes from `theme_file` (with `~/` mapped into the sandbox), then
/// `theme`, then the default; a theme that fails to load is logged and replaced
/// by the default. Records are not loaded yet; that starts with [`Event::Start`].
///
/// ```
/// use memberdesk::{initialize, Config, LoadStatus};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.load_status, LoadStatus::Idle);
/// assert_eq!(state.theme.name, "catppuccin-mocha");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(source = %config.source.describe(), "initializing memberdesk plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.source.clone(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_to_remote_endpoint() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert!(matches!(config.source, SourceConfig::Remote { .. }));
    }

    #[test]
    fn custom_endpoint_and_passthrough_keys() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", " https://example.com/m.json "),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]));
        assert_eq!(
            config.source,
            SourceConfig::Remote {
                url: "https://example.com/m.json".to_string()
            }
        );
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_sample_falls_back() {
        for bad in ["0", "-3", "many"] {
            let config = Config::from_zellij(&map(&[("sample", bad)]));
            assert_eq!(config.source, SourceConfig::default(), "sample {bad:?}");
            assert!(matches!(parse_sample_count(bad), Err(MemberdeskError::Config(_))));
        }
        assert_eq!(parse_sample_count(" 12 ").unwrap(), 12);
    }

    #[test]
    fn initialize_picks_theme_by_precedence() {
        let by_name = initialize(&Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        });
        assert_eq!(by_name.theme.name, "catppuccin-latte");

        let unknown = initialize(&Config {
            theme_name: Some("nope".to_string()),
            ..Config::default()
        });
        assert_eq!(unknown.theme.name, "catppuccin-mocha");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "from-file".to_string();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes()).unwrap();

        let from_file = initialize(&Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        });
        assert_eq!(from_file.theme.name, "from-file");
    }
}
