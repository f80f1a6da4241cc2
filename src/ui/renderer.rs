//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Component Rendering**: `UIViewModel` → one ANSI frame, printed at once
//!
//! # Example
//!
//! ```
//! use memberdesk::app::AppState;
//! use memberdesk::source::SourceConfig;
//! use memberdesk::ui::{helpers::strip_ansi, renderer::render_to_string, Theme};
//!
//! let state = AppState::new(SourceConfig::Sample { count: 3 }, Theme::default());
//! let frame = render_to_string(&state, 0, 24, 80);
//! assert!(strip_ansi(&frame).contains("Fetching members..."));
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh pane each render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let now = chrono::Utc::now().timestamp();
    print!("{}", render_to_string(state, now, rows, cols));
}

/// Composes the frame for `state` without printing it.
///
/// `now` is the unix time used for relative timestamps.
#[must_use]
pub fn render_to_string(state: &AppState, now: i64, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows = rows, cols = cols).entered();

    let viewmodel = state.compute_viewmodel(now);
    components::render_frame(&viewmodel, &state.theme, rows, cols)
}
