//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry no
//! business logic, only display-ready data: truncated cell text, highlight ranges,
//! checkbox and cursor flags and the pager summary.
//!
//! # Example
//!
//! ```
//! use memberdesk::ui::viewmodel::RowItem;
//!
//! let row = RowItem {
//!     id: "1".to_string(),
//!     name: "Ada".to_string(),
//!     email: "ada@example.com".to_string(),
//!     role: "admin".to_string(),
//!     is_checked: false,
//!     is_cursor: true,
//!     edit: None,
//!     name_highlights: vec![(0, 2)],
//!     email_highlights: vec![],
//! };
//! assert!(row.edit.is_none());
//! ```

use crate::domain::EditField;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar with load status.
    pub header: HeaderInfo,

    /// Search input, present while searching or while a term is applied.
    pub search_bar: Option<SearchBarInfo>,

    /// Rows of the current page, in display order.
    pub rows: Vec<RowItem>,

    /// Page position and selection summary.
    pub pager: PagerInfo,

    /// Keybinding hints for the current input mode.
    pub footer: FooterInfo,

    /// Shown instead of the table when the page has no rows.
    pub empty_state: Option<EmptyState>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Load status, e.g. "46 fetched 2m ago".
    pub status: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search term.
    pub query: String,
    /// Whether keystrokes currently go to the search bar.
    pub is_active: bool,
    /// Number of records matching the term.
    pub matches: usize,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowItem {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Row is in the selection set.
    pub is_checked: bool,
    /// Row is under the keyboard cursor.
    pub is_cursor: bool,
    /// Edit buffer values when this row is being edited.
    pub edit: Option<EditCells>,
    /// Character ranges in `name` that match the search term.
    pub name_highlights: Vec<(usize, usize)>,
    /// Character ranges in `email` that match the search term.
    pub email_highlights: Vec<(usize, usize)>,
}

/// Edit buffer contents shown in place of a row's cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCells {
    pub name: String,
    pub email: String,
    pub role: String,
    /// Field receiving keystrokes.
    pub focus: EditField,
}

/// Pagination bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerInfo {
    /// Current page, 1-based.
    pub page: usize,
    pub total_pages: usize,
    /// "{selected} of {total} row(s) selected".
    pub summary: String,
    /// State of the select-all checkbox.
    pub all_selected: bool,
    /// Page numbers to list, a window around the current page.
    pub pages: Vec<usize>,
    /// Page number being typed, if any.
    pub jump: Option<usize>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown when there are no rows to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    /// Rendered with the error color.
    pub is_error: bool,
}
