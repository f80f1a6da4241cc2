//! Application state and view model computation.
//!
//! [`AppState`] wraps the [`ListState`] core with everything the plugin needs
//! around it: the load lifecycle, the row cursor, the input mode and the theme.
//! It is the single source of truth for the UI; the view model handed to the
//! renderer is recomputed from it on every frame.
//!
//! # State Components
//!
//! - **List**: records, selection, search term, page and the open edit
//! - **Load status**: progress of the one-shot fetch
//! - **Cursor**: row index within the current page slice
//! - **Input mode**: how keys are interpreted (normal, search, edit)
//!
//! # Example
//!
//! ```
//! use memberdesk::app::AppState;
//! use memberdesk::source::SourceConfig;
//! use memberdesk::ui::Theme;
//!
//! let state = AppState::new(SourceConfig::Sample { count: 5 }, Theme::default());
//! let viewmodel = state.compute_viewmodel(0);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::list_state::ListState;
use super::modes::InputMode;
use crate::domain::{EditField, Record};
use crate::source::{LoadStatus, SourceConfig};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EditCells, EmptyState, FooterInfo, HeaderInfo, PagerInfo, RowItem, SearchBarInfo, UIViewModel,
};

/// Visible width of the ID column.
pub const ID_COLUMN_WIDTH: usize = 6;

/// Visible width of the NAME column.
pub const NAME_COLUMN_WIDTH: usize = 24;

/// Visible width of the EMAIL column.
pub const EMAIL_COLUMN_WIDTH: usize = 32;

/// Most page numbers listed in the pager at once.
pub const PAGE_WINDOW: usize = 7;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The member list and its transitions.
    pub list: ListState,

    /// Where the records come from.
    pub source: SourceConfig,

    /// Progress of the one-shot load.
    pub load_status: LoadStatus,

    /// Zero-based row index within the current page slice.
    ///
    /// Clamped after every handled event.
    pub cursor: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an idle state with an empty list.
    #[must_use]
    pub fn new(source: SourceConfig, theme: Theme) -> Self {
        Self {
            list: ListState::new(),
            source,
            load_status: LoadStatus::Idle,
            cursor: 0,
            input_mode: InputMode::Normal,
            theme,
        }
    }

    /// Moves the cursor one row down, stopping at the last row of the page.
    pub fn move_cursor_down(&mut self) -> bool {
        let rows = self.list.page_records().len();
        if self.cursor + 1 >= rows {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Moves the cursor one row up, stopping at the first row.
    pub fn move_cursor_up(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Keeps the cursor inside the current page slice.
    pub fn clamp_cursor(&mut self) {
        let rows = self.list.page_records().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    /// Record under the cursor, if the page has any rows.
    #[must_use]
    pub fn cursor_record(&self) -> Option<&Record> {
        self.list.page_records().get(self.cursor).copied()
    }

    /// Id of the record under the cursor.
    #[must_use]
    pub fn cursor_id(&self) -> Option<String> {
        self.cursor_record().map(|record| record.id.clone())
    }

    /// Drops back to normal mode if the edit this mode refers to is gone.
    pub fn sync_mode(&mut self) {
        if self.input_mode.is_editing() && self.list.editing().is_none() {
            tracing::debug!("edit closed underneath edit mode, returning to normal mode");
            self.input_mode = InputMode::Normal;
        }
    }

    /// Computes a renderable view model from the current state.
    ///
    /// `now` is the current unix time, used for the "fetched ... ago" label.
    #[must_use]
    pub fn compute_viewmodel(&self, now: i64) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", mode = ?self.input_mode).entered();

        let rows: Vec<RowItem> = self
            .list
            .page_records()
            .into_iter()
            .enumerate()
            .map(|(index, record)| self.compute_row(record, index))
            .collect();

        let empty_state = if rows.is_empty() {
            Some(self.compute_empty_state())
        } else {
            None
        };

        UIViewModel {
            header: self.compute_header(now),
            search_bar: self.compute_search_bar(),
            rows,
            pager: self.compute_pager(),
            footer: self.compute_footer(),
            empty_state,
        }
    }

    fn compute_row(&self, record: &Record, index: usize) -> RowItem {
        let term = self.list.search_term();
        let edit = self
            .list
            .editing()
            .filter(|session| session.id == record.id)
            .map(|session| EditCells {
                name: session.buffer.name.clone(),
                email: session.buffer.email.clone(),
                role: session.buffer.role.as_str().to_string(),
                focus: match self.input_mode {
                    InputMode::Edit(field) => field,
                    _ => EditField::Name,
                },
            });

        let name = truncate(&record.name, NAME_COLUMN_WIDTH);
        let email = truncate(&record.email, EMAIL_COLUMN_WIDTH);

        RowItem {
            id: truncate(&record.id, ID_COLUMN_WIDTH),
            name_highlights: match_ranges(&name, term),
            email_highlights: match_ranges(&email, term),
            name,
            email,
            role: record.role.as_str().to_string(),
            is_checked: self.list.is_selected(&record.id),
            is_cursor: index == self.cursor,
            edit,
        }
    }

    fn compute_header(&self, now: i64) -> HeaderInfo {
        let status = match &self.load_status {
            LoadStatus::Idle => "waiting for permissions".to_string(),
            LoadStatus::Pending => format!("fetching {}", self.source.describe()),
            LoadStatus::Loaded { count, .. } => {
                let age = self.load_status.age(now).unwrap_or_default();
                format!("{count} fetched {age}")
            }
            LoadStatus::Failed { .. } => "load failed".to_string(),
        };

        HeaderInfo {
            title: " Members ".to_string(),
            status,
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let term = self.list.search_term();
        if self.input_mode.is_searching() || !term.is_empty() {
            Some(SearchBarInfo {
                query: term.to_string(),
                is_active: self.input_mode.is_searching(),
                matches: self.list.filtered_count(),
            })
        } else {
            None
        }
    }

    fn compute_pager(&self) -> PagerInfo {
        let summary = self.list.selection_summary();
        PagerInfo {
            page: self.list.current_page(),
            total_pages: self.list.total_pages(),
            summary: format!("{} of {} row(s) selected", summary.selected, summary.total),
            all_selected: self.list.all_selected(),
            pages: page_window(self.list.current_page(), self.list.total_pages()),
            jump: match self.input_mode {
                InputMode::PageJump(typed) => Some(typed),
                _ => None,
            },
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: row  h/l: page  g/G: first/last  0-9: go to page  space: select  a: all  e: edit  d: delete  D: delete selected  /: search  q: hide"
            }
            InputMode::Search => "Type to filter  Enter: keep  Esc: clear",
            InputMode::Edit(EditField::Role) => "space: toggle role  Tab: next field  Enter: save  Esc: cancel",
            InputMode::Edit(_) => "Type to edit  Tab: next field  Enter: save  Esc: cancel",
            InputMode::PageJump(_) => "Type a page number  Enter: go  Esc: cancel",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        match &self.load_status {
            LoadStatus::Idle | LoadStatus::Pending => EmptyState {
                message: "Fetching members...".to_string(),
                subtitle: self.source.describe(),
                is_error: false,
            },
            LoadStatus::Failed { message } => EmptyState {
                message: "Could not load members".to_string(),
                subtitle: message.clone(),
                is_error: true,
            },
            LoadStatus::Loaded { .. } if self.list.records().is_empty() => EmptyState {
                message: "No members left".to_string(),
                subtitle: "Reload the plugin to fetch the list again".to_string(),
                is_error: false,
            },
            LoadStatus::Loaded { .. } => EmptyState {
                message: format!("No members match \"{}\"", self.list.search_term()),
                subtitle: "Esc clears the search".to_string(),
                is_error: false,
            },
        }
    }
}

/// Up to [`PAGE_WINDOW`] consecutive page numbers, centered on `current` where
/// the range allows.
#[must_use]
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    let half = PAGE_WINDOW / 2;
    let end = current.saturating_add(half).max(PAGE_WINDOW).min(total);
    let start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
    (start..=end).collect()
}

/// Shortens `text` to `width` characters, ending in "..." when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Character ranges of every case-insensitive occurrence of `term` in `text`.
///
/// Ranges are `(start, end)` character indices with exclusive end. Text whose
/// lowercase form has a different character count gets no highlights.
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return vec![];
    }
    let folded_text = text.to_lowercase();
    if folded_text.chars().count() != text.chars().count() {
        return vec![];
    }
    let folded_term = term.to_lowercase();
    let term_chars = folded_term.chars().count();

    folded_text
        .match_indices(&folded_term)
        .map(|(byte_start, _)| {
            let start = folded_text[..byte_start].chars().count();
            (start, start + term_chars)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generate_sample_records;

    fn loaded(count: usize) -> AppState {
        let mut state = AppState::new(SourceConfig::Sample { count }, Theme::default());
        state.list.load(generate_sample_records(count));
        state.load_status = LoadStatus::Loaded { at: 0, count };
        state
    }

    #[test]
    fn cursor_stops_at_page_edges() {
        let mut state = loaded(12);
        assert!(!state.move_cursor_up());
        for _ in 0..9 {
            assert!(state.move_cursor_down());
        }
        assert!(!state.move_cursor_down());
        assert_eq!(state.cursor_id().as_deref(), Some("10"));
    }

    #[test]
    fn clamp_cursor_follows_shorter_page() {
        let mut state = loaded(12);
        state.cursor = 9;
        state.list.set_page(2);
        state.clamp_cursor();
        assert_eq!(state.cursor, 1);
        assert_eq!(state.cursor_id().as_deref(), Some("12"));
    }

    #[test]
    fn viewmodel_marks_cursor_selection_and_edit() {
        let mut state = loaded(3);
        state.list.toggle_row_selected("2");
        state.list.begin_edit("3");
        state.input_mode = InputMode::Edit(EditField::Email);
        state.cursor = 1;

        let vm = state.compute_viewmodel(30);
        assert_eq!(vm.rows.len(), 3);
        assert!(vm.rows[1].is_cursor && vm.rows[1].is_checked);
        assert!(!vm.rows[0].is_checked);
        let edit = vm.rows[2].edit.as_ref().unwrap();
        assert_eq!(edit.focus, EditField::Email);
        assert_eq!(edit.email, "user3@mailinator.com");
        assert_eq!(vm.pager.summary, "1 of 3 row(s) selected");
        assert_eq!(vm.header.status, "3 fetched just now");
        assert!(vm.empty_state.is_none());
        assert!(vm.search_bar.is_none());
    }

    #[test]
    fn viewmodel_empty_states() {
        let mut state = AppState::new(SourceConfig::default(), Theme::default());
        state.load_status = LoadStatus::Failed { message: "HTTP 500".into() };
        let empty = state.compute_viewmodel(0).empty_state.unwrap();
        assert!(empty.is_error);
        assert_eq!(empty.subtitle, "HTTP 500");

        let mut state = loaded(5);
        state.list.set_search_term("zzz");
        let vm = state.compute_viewmodel(0);
        assert_eq!(vm.empty_state.unwrap().message, "No members match \"zzz\"");
        assert_eq!(vm.search_bar.unwrap().matches, 0);
    }

    #[test]
    fn pager_lists_pages_around_the_current_one() {
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(2, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(1, 20), (1..=7).collect::<Vec<_>>());
        assert_eq!(page_window(10, 20), (7..=13).collect::<Vec<_>>());
        assert_eq!(page_window(20, 20), (14..=20).collect::<Vec<_>>());

        let mut state = loaded(25);
        state.list.set_page(3);
        state.input_mode = InputMode::PageJump(2);
        let pager = state.compute_viewmodel(0).pager;
        assert_eq!(pager.pages, vec![1, 2, 3]);
        assert_eq!(pager.jump, Some(2));
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-name", 8), "a-ver...");
    }

    #[test]
    fn match_ranges_finds_every_occurrence() {
        assert_eq!(match_ranges("User 12 Name", "user"), vec![(0, 4)]);
        assert_eq!(match_ranges("user22@x", "2"), vec![(4, 5), (5, 6)]);
        assert!(match_ranges("anything", "").is_empty());
    }
}
