//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the memberdesk library and the Zellij plugin
//! system. Host events are translated into library [`Event`]s, the library's
//! [`Action`]s are executed through the Zellij API, and rendering is delegated to
//! the library's UI layer.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Start**: Sample data loads at once; a remote list is requested once
//!    web access is granted
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key` → [`memberdesk::app::keys::map_key`] for the current input mode
//! - `WebRequestResult` → `Event::FetchCompleted { status, body }`
//! - `PermissionRequestResult(Granted)` → `Event::Start`
//! - `PermissionRequestResult(Denied)` → `Event::PermissionDenied`
//!
//! The shim only exists on `wasm32`; other targets build a stub binary so the
//! library and its tests compile natively.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use memberdesk::app::keys::{map_key, Key};
    use memberdesk::{handle_event, Action, Config, SourceConfig};

    /// Context key tagging our web request so unrelated results are ignored.
    const REQUEST_CONTEXT: &str = "memberdesk";

    /// Plugin state wrapper.
    pub struct State {
        /// Core application state from library layer.
        app: memberdesk::AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: memberdesk::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Initializes the plugin on load.
        ///
        /// Requests `WebAccess` (for the member list) and `ChangeApplicationState`
        /// (to hide the pane).
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            memberdesk::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            tracing::debug!(source = %config.source.describe(), "parsed configuration");
            self.app = memberdesk::initialize(&config);

            request_permission(&[
                PermissionType::WebAccess,
                PermissionType::ChangeApplicationState,
            ]);

            subscribe(&[
                EventType::Key,
                EventType::WebRequestResult,
                EventType::PermissionRequestResult,
            ]);

            if matches!(config.source, SourceConfig::Sample { .. }) {
                self.dispatch(&memberdesk::Event::Start);
            }

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        /// Handles incoming Zellij events; returns `true` if the UI should re-render.
        fn update(&mut self, event: Event) -> bool {
            let event_name = Self::get_event_name(&event);
            let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
            let _guard = span.entered();

            let our_event = match event {
                Event::Key(ref key) => {
                    let Some(key) = Self::convert_key(key) else {
                        return false;
                    };
                    match map_key(self.app.input_mode, key) {
                        Some(event) => event,
                        None => return false,
                    }
                }
                Event::WebRequestResult(status, _headers, body, context) => {
                    if context.get(REQUEST_CONTEXT).is_none() {
                        tracing::debug!("ignoring web request result from another requester");
                        return false;
                    }
                    tracing::debug!(status = status, body_len = body.len(), "member list response");
                    memberdesk::Event::FetchCompleted { status, body }
                }
                Event::PermissionRequestResult(PermissionStatus::Granted) => {
                    tracing::debug!("permissions granted - starting load");
                    memberdesk::Event::Start
                }
                Event::PermissionRequestResult(PermissionStatus::Denied) => {
                    tracing::warn!("permissions denied");
                    memberdesk::Event::PermissionDenied
                }
                _ => return false,
            };

            self.dispatch(&our_event)
        }

        fn render(&mut self, rows: usize, cols: usize) {
            memberdesk::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        /// Runs an event through the library and executes the resulting actions.
        fn dispatch(&mut self, event: &memberdesk::Event) -> bool {
            match handle_event(&mut self.app, event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled successfully"
                    );
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn get_event_name(event: &Event) -> String {
            match event {
                Event::Key(key) => format!("Key({:?})", key.bare_key),
                Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
                Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
                _ => "Other".to_string(),
            }
        }

        fn convert_key(key: &KeyWithModifier) -> Option<Key> {
            let shifted = key.has_modifiers(&[KeyModifier::Shift]);
            Some(match key.bare_key {
                BareKey::Char(c) => Key::Char(c),
                BareKey::Up => Key::Up,
                BareKey::Down => Key::Down,
                BareKey::Left => Key::Left,
                BareKey::Right => Key::Right,
                BareKey::PageUp => Key::PageUp,
                BareKey::PageDown => Key::PageDown,
                BareKey::Home => Key::Home,
                BareKey::End => Key::End,
                BareKey::Enter => Key::Enter,
                BareKey::Esc => Key::Esc,
                BareKey::Tab if shifted => Key::BackTab,
                BareKey::Tab => Key::Tab,
                BareKey::Backspace => Key::Backspace,
                BareKey::Delete => Key::Delete,
                _ => return None,
            })
        }

        /// Translates library actions to Zellij API calls.
        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => {
                    hide_self();
                }
                Action::FetchRecords { url } => {
                    let mut context = BTreeMap::new();
                    context.insert(REQUEST_CONTEXT.to_string(), String::new());
                    web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
use plugin::State;
#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
register_plugin!(State);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    println!(
        "memberdesk is a Zellij plugin; build it with `cargo build --target wasm32-wasip1` and load the .wasm from a layout"
    );
}
