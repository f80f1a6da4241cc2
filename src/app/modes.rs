//! Input mode state type for the application.
//!
//! The input mode decides how key presses are interpreted and which parts of the
//! table chrome are shown:
//! - **Normal**: navigation, selection, deletion and paging
//! - **Search**: typing into the search term
//! - **Edit**: typing into one field of the row under edit
//! - **Page jump**: typing a page number to go to
//!
//! ```
//! use memberdesk::app::InputMode;
//! use memberdesk::domain::EditField;
//!
//! let mode = InputMode::Edit(EditField::Email);
//! assert!(mode.is_editing());
//! ```

use crate::domain::EditField;

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (row), h/l (page), g/G (first/last page),
    /// space (select), a (select all), d (delete row), D (delete selected),
    /// e/enter (edit), / (search), 0-9 (go to page), q (hide).
    #[default]
    Normal,

    /// Typing into the search bar. Enter keeps the term, Esc clears it.
    Search,

    /// Editing a row, with focus on one field. Tab cycles fields, Enter saves,
    /// Esc cancels.
    Edit(EditField),

    /// Typing a page number, holding the digits entered so far. Enter goes to
    /// the page, Esc drops it.
    PageJump(usize),
}

impl InputMode {
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Edit(_))
    }

    #[must_use]
    pub const fn is_searching(self) -> bool {
        matches!(self, Self::Search)
    }

    #[must_use]
    pub const fn is_jumping(self) -> bool {
        matches!(self, Self::PageJump(_))
    }
}
