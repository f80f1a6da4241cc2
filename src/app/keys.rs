//! Key bindings per input mode.
//!
//! The plugin shim converts host key events into [`Key`] and asks [`map_key`] for
//! the library [`Event`]; keeping the table here lets it be tested off-host.
//!
//! ```
//! use memberdesk::app::keys::{map_key, Key};
//! use memberdesk::app::{Event, InputMode};
//!
//! assert_eq!(map_key(InputMode::Normal, Key::Char('j')), Some(Event::CursorDown));
//! assert_eq!(map_key(InputMode::Search, Key::Char('j')), Some(Event::Char('j')));
//! assert_eq!(map_key(InputMode::PageJump(4), Key::Enter), Some(Event::GoToPage(4)));
//! ```

use super::handler::Event;
use super::modes::InputMode;

/// Host-independent key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Esc,
    Tab,
    /// Shift-Tab.
    BackTab,
    Backspace,
    Delete,
}

/// Maps a key press to an event for the current input mode, or `None` if the
/// key is unbound there.
#[must_use]
pub fn map_key(mode: InputMode, key: Key) -> Option<Event> {
    match mode {
        InputMode::Normal => map_normal(key),
        InputMode::Search => map_search(key),
        InputMode::Edit(_) => map_edit(key),
        InputMode::PageJump(page) => map_page_jump(page, key),
    }
}

fn page_digit(key: Key) -> Option<u32> {
    match key {
        Key::Char(c) => c.to_digit(10),
        _ => None,
    }
}

fn map_normal(key: Key) -> Option<Event> {
    if let Some(digit) = page_digit(key) {
        return Some(Event::PageDigit(digit));
    }
    Some(match key {
        Key::Down | Key::Char('j') => Event::CursorDown,
        Key::Up | Key::Char('k') => Event::CursorUp,
        Key::Right | Key::PageDown | Key::Char('l') => Event::NextPage,
        Key::Left | Key::PageUp | Key::Char('h') => Event::PrevPage,
        Key::Home | Key::Char('g') => Event::FirstPage,
        Key::End | Key::Char('G') => Event::LastPage,
        Key::Char(' ') => Event::ToggleRow,
        Key::Char('a') => Event::ToggleAll,
        Key::Delete | Key::Char('d') => Event::DeleteRow,
        Key::Char('D') => Event::DeleteSelected,
        Key::Enter | Key::Char('e') => Event::BeginEdit,
        Key::Char('/') => Event::SearchMode,
        Key::Esc => Event::ClearSearch,
        Key::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

fn map_search(key: Key) -> Option<Event> {
    Some(match key {
        Key::Char(c) => Event::Char(c),
        Key::Backspace => Event::Backspace,
        Key::Enter => Event::ConfirmSearch,
        Key::Esc => Event::ClearSearch,
        Key::Down => Event::CursorDown,
        Key::Up => Event::CursorUp,
        _ => return None,
    })
}

fn map_page_jump(page: usize, key: Key) -> Option<Event> {
    if let Some(digit) = page_digit(key) {
        return Some(Event::PageDigit(digit));
    }
    Some(match key {
        Key::Backspace => Event::Backspace,
        Key::Enter => Event::GoToPage(page),
        Key::Esc => Event::CancelPageJump,
        _ => return None,
    })
}

fn map_edit(key: Key) -> Option<Event> {
    Some(match key {
        Key::Char(c) => Event::Char(c),
        Key::Backspace => Event::Backspace,
        Key::Tab => Event::NextField,
        Key::BackTab => Event::PrevField,
        Key::Enter => Event::CommitEdit,
        Key::Esc => Event::CancelEdit,
        _ => return None,
    })
}
