//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the domain layer.
//! All list semantics live in [`ListState`]; [`AppState`] adds the pieces a
//! terminal front end needs around it (cursor, input mode, load status).
//!
//! # Architecture
//!
//! ```text
//! Key / Host Event → Event → handle_event → ListState transitions → Actions
//!                                  ↑                                   ↓
//!                                  └──────── WebRequestResult ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`keys`]: Key bindings per input mode
//! - [`list_state`]: Record list, selection, search, pagination and edit buffer
//! - [`modes`]: Input mode state machine
//! - [`state`]: Application state container and view model computation
//!
//! # Example
//!
//! ```
//! use memberdesk::app::{handle_event, AppState, Event};
//! use memberdesk::source::SourceConfig;
//! use memberdesk::ui::Theme;
//!
//! let mut state = AppState::new(SourceConfig::Sample { count: 3 }, Theme::default());
//! handle_event(&mut state, &Event::Start)?;
//! handle_event(&mut state, &Event::ToggleAll)?;
//! assert!(state.list.all_selected());
//! # Ok::<(), memberdesk::MemberdeskError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod keys;
pub mod list_state;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use list_state::{EditSession, ListState, SelectionSummary, PAGE_SIZE};
pub use modes::InputMode;
pub use state::AppState;
