//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where the plugin state changes. Each event is
//! mapped to [`ListState`](super::ListState) transitions (or cursor/mode changes),
//! and the result is reported back as `(should_render, actions)`. The render flag
//! replaces reactive re-rendering: a transition that changed nothing asks for no
//! redraw.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Start`, `FetchCompleted`, `FetchFailed`, `PermissionDenied`
//! - **Navigation**: `CursorDown`, `CursorUp`, `NextPage`, `PrevPage`, `FirstPage`, `LastPage`
//! - **Page jump**: `PageDigit`, `GoToPage`, `CancelPageJump`
//! - **Selection/deletion**: `ToggleRow`, `ToggleAll`, `DeleteRow`, `DeleteSelected`
//! - **Editing**: `BeginEdit`, `NextField`, `PrevField`, `CommitEdit`, `CancelEdit`
//! - **Search**: `SearchMode`, `ConfirmSearch`, `ClearSearch`
//! - **Input**: `Char`, `Backspace` (meaning depends on the input mode)
//!
//! # Example
//!
//! ```
//! use memberdesk::app::{handle_event, AppState, Event};
//! use memberdesk::source::SourceConfig;
//! use memberdesk::ui::Theme;
//!
//! let mut state = AppState::new(SourceConfig::Sample { count: 25 }, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Start)?;
//! assert!(render && actions.is_empty());
//!
//! handle_event(&mut state, &Event::LastPage)?;
//! assert_eq!(state.list.current_page(), 3);
//! # Ok::<(), memberdesk::MemberdeskError>(())
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{generate_sample_records, EditField};
use crate::source::{decode_response, LoadStatus, SourceConfig};

/// Events triggered by user input or by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Permissions are in place; request the member list (once).
    Start,
    /// The host answered the web request.
    FetchCompleted {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },
    /// The request could not be issued or answered.
    FetchFailed {
        /// Error description.
        error: String,
    },
    /// The user refused the permissions needed to fetch.
    PermissionDenied,

    /// Moves the row cursor down within the page.
    CursorDown,
    /// Moves the row cursor up within the page.
    CursorUp,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Appends a digit to the page number being typed, entering page jump mode.
    PageDigit(u32),
    /// Goes straight to a 1-based page; out-of-range pages are clamped.
    GoToPage(usize),
    /// Drops the page number being typed.
    CancelPageJump,

    /// Toggles selection of the row under the cursor.
    ToggleRow,
    /// Selects every record, or clears the selection if all are selected.
    ToggleAll,
    /// Deletes the row under the cursor.
    DeleteRow,
    /// Deletes every selected record.
    DeleteSelected,

    /// Opens the row under the cursor for editing.
    BeginEdit,
    /// Moves edit focus to the next field.
    NextField,
    /// Moves edit focus to the previous field.
    PrevField,
    /// Saves the edit buffer.
    CommitEdit,
    /// Discards the edit buffer.
    CancelEdit,

    /// Enters search mode, keeping the current term.
    SearchMode,
    /// Leaves search mode, keeping the term applied.
    ConfirmSearch,
    /// Clears the search term and returns to normal mode.
    ClearSearch,

    /// Character typed in search or edit mode.
    Char(char),
    /// Removes the last character in search or edit mode.
    Backspace,

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the state changed in a way that needs a
/// redraw, and the side effects for the plugin shim to run.
///
/// # Errors
///
/// Reserved for failures the shim must hear about; every current event is
/// handled in-state (a failed load becomes [`LoadStatus::Failed`]).
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    let outcome = dispatch(state, event);

    state.sync_mode();
    state.clamp_cursor();

    Ok(outcome)
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Start => "Start",
        Event::FetchCompleted { .. } => "FetchCompleted",
        Event::FetchFailed { .. } => "FetchFailed",
        Event::PermissionDenied => "PermissionDenied",
        Event::CursorDown => "CursorDown",
        Event::CursorUp => "CursorUp",
        Event::NextPage => "NextPage",
        Event::PrevPage => "PrevPage",
        Event::FirstPage => "FirstPage",
        Event::LastPage => "LastPage",
        Event::PageDigit(_) => "PageDigit",
        Event::GoToPage(_) => "GoToPage",
        Event::CancelPageJump => "CancelPageJump",
        Event::ToggleRow => "ToggleRow",
        Event::ToggleAll => "ToggleAll",
        Event::DeleteRow => "DeleteRow",
        Event::DeleteSelected => "DeleteSelected",
        Event::BeginEdit => "BeginEdit",
        Event::NextField => "NextField",
        Event::PrevField => "PrevField",
        Event::CommitEdit => "CommitEdit",
        Event::CancelEdit => "CancelEdit",
        Event::SearchMode => "SearchMode",
        Event::ConfirmSearch => "ConfirmSearch",
        Event::ClearSearch => "ClearSearch",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::CloseFocus => "CloseFocus",
    }
}

#[allow(clippy::too_many_lines)]
fn dispatch(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Start => start_load(state),
        Event::FetchCompleted { status, body } => {
            if !state.load_status.is_pending() {
                tracing::debug!(status = status, "ignoring fetch result outside pending load");
                return (false, vec![]);
            }
            match decode_response(*status, body) {
                Ok(records) => {
                    let received = records.len();
                    state.list.load(records);
                    let count = state.list.records().len();
                    state.load_status = LoadStatus::loaded_now(count);
                    state.cursor = 0;
                    tracing::info!(count = count, received = received, "member list loaded");
                }
                Err(e) => {
                    tracing::warn!(error = %e, status = status, "member list load failed");
                    state.load_status = LoadStatus::Failed {
                        message: e.to_string(),
                    };
                }
            }
            (true, vec![])
        }
        Event::FetchFailed { error } => {
            if !state.load_status.is_pending() {
                return (false, vec![]);
            }
            tracing::warn!(error = %error, "member list request failed");
            state.load_status = LoadStatus::Failed {
                message: format!("Load error: {error}"),
            };
            (true, vec![])
        }
        Event::PermissionDenied => {
            if state.load_status != LoadStatus::Idle {
                return (false, vec![]);
            }
            tracing::warn!("web access denied, member list not loaded");
            state.load_status = LoadStatus::Failed {
                message: "web access permission denied".to_string(),
            };
            (true, vec![])
        }

        Event::CursorDown => (state.move_cursor_down(), vec![]),
        Event::CursorUp => (state.move_cursor_up(), vec![]),
        Event::NextPage => {
            let page = state.list.current_page() + 1;
            change_page(state, page)
        }
        Event::PrevPage => {
            let page = state.list.current_page().saturating_sub(1);
            change_page(state, page)
        }
        Event::FirstPage => change_page(state, 1),
        Event::LastPage => {
            let page = state.list.total_pages();
            change_page(state, page)
        }
        Event::PageDigit(digit) => {
            let digit = *digit as usize;
            let typed = match state.input_mode {
                InputMode::Normal => digit,
                InputMode::PageJump(typed) => typed.saturating_mul(10).saturating_add(digit),
                _ => return (false, vec![]),
            };
            state.input_mode = InputMode::PageJump(typed);
            (true, vec![])
        }
        Event::GoToPage(page) => {
            let was_jumping = state.input_mode.is_jumping();
            if was_jumping {
                state.input_mode = InputMode::Normal;
            }
            let (changed, actions) = change_page(state, *page);
            (changed || was_jumping, actions)
        }
        Event::CancelPageJump => {
            if !state.input_mode.is_jumping() {
                return (false, vec![]);
            }
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }

        Event::ToggleRow => {
            let Some(id) = state.cursor_id() else {
                return (false, vec![]);
            };
            (state.list.toggle_row_selected(&id), vec![])
        }
        Event::ToggleAll => (state.list.toggle_select_all(), vec![]),
        Event::DeleteRow => {
            let Some(id) = state.cursor_id() else {
                return (false, vec![]);
            };
            (state.list.delete_one(&id), vec![])
        }
        Event::DeleteSelected => (state.list.delete_selected(), vec![]),

        Event::BeginEdit => {
            let Some(id) = state.cursor_id() else {
                return (false, vec![]);
            };
            if state.list.begin_edit(&id) {
                state.input_mode = InputMode::Edit(EditField::Name);
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
        Event::NextField | Event::PrevField => {
            let InputMode::Edit(field) = state.input_mode else {
                return (false, vec![]);
            };
            let next = if *event == Event::NextField {
                field.next()
            } else {
                field.prev()
            };
            state.input_mode = InputMode::Edit(next);
            (true, vec![])
        }
        Event::CommitEdit => {
            let changed = state.list.commit_edit();
            state.input_mode = InputMode::Normal;
            (changed, vec![])
        }
        Event::CancelEdit => {
            let changed = state.list.cancel_edit();
            state.input_mode = InputMode::Normal;
            (changed, vec![])
        }

        Event::SearchMode => {
            if state.input_mode != InputMode::Normal {
                return (false, vec![]);
            }
            state.input_mode = InputMode::Search;
            (true, vec![])
        }
        Event::ConfirmSearch => {
            if !state.input_mode.is_searching() {
                return (false, vec![]);
            }
            tracing::debug!(term = %state.list.search_term(), "search kept");
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::ClearSearch => {
            let was_searching = state.input_mode.is_searching();
            state.input_mode = InputMode::Normal;
            let cleared = state.list.set_search_term("");
            (was_searching || cleared, vec![])
        }

        Event::Char(c) => match state.input_mode {
            InputMode::Search => {
                let mut term = state.list.search_term().to_string();
                term.push(*c);
                (state.list.set_search_term(&term), vec![])
            }
            InputMode::Edit(EditField::Role) => (toggle_role(state), vec![]),
            InputMode::Edit(field) => {
                let mut value = current_value(state, field);
                value.push(*c);
                (state.list.update_edit_buffer(field, &value), vec![])
            }
            InputMode::Normal | InputMode::PageJump(_) => (false, vec![]),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search => {
                let mut term = state.list.search_term().to_string();
                if term.pop().is_none() {
                    return (false, vec![]);
                }
                (state.list.set_search_term(&term), vec![])
            }
            InputMode::PageJump(typed) => {
                state.input_mode = match typed / 10 {
                    0 => InputMode::Normal,
                    rest => InputMode::PageJump(rest),
                };
                (true, vec![])
            }
            InputMode::Edit(EditField::Role) | InputMode::Normal => (false, vec![]),
            InputMode::Edit(field) => {
                let mut value = current_value(state, field);
                if value.pop().is_none() {
                    return (false, vec![]);
                }
                (state.list.update_edit_buffer(field, &value), vec![])
            }
        },

        Event::CloseFocus => (false, vec![Action::CloseFocus]),
    }
}

fn start_load(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.load_status != LoadStatus::Idle {
        tracing::debug!(status = ?state.load_status, "load already started, ignoring");
        return (false, vec![]);
    }

    match &state.source {
        SourceConfig::Remote { url } => {
            tracing::debug!(url = %url, "requesting member list");
            state.load_status = LoadStatus::Pending;
            (true, vec![Action::FetchRecords { url: url.clone() }])
        }
        SourceConfig::Sample { count } => {
            let records = generate_sample_records(*count);
            tracing::debug!(count = count, "loading sample members");
            state.list.load(records);
            state.load_status = LoadStatus::loaded_now(state.list.records().len());
            state.cursor = 0;
            (true, vec![])
        }
    }
}

fn change_page(state: &mut AppState, page: usize) -> (bool, Vec<Action>) {
    if state.list.set_page(page) {
        state.cursor = 0;
        (true, vec![])
    } else {
        (false, vec![])
    }
}

fn current_value(state: &AppState, field: EditField) -> String {
    state
        .list
        .edit_buffer()
        .map(|buffer| buffer.value(field).to_string())
        .unwrap_or_default()
}

fn toggle_role(state: &mut AppState) -> bool {
    let Some(role) = state.list.edit_buffer().map(|buffer| buffer.role) else {
        return false;
    };
    state
        .list
        .update_edit_buffer(EditField::Role, role.toggled().as_str())
}
