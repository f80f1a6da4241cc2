//! Composable UI component renderers.
//!
//! Each component writes one part of the frame into the shared buffer and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with load status
//! - [`search`]: Search input box
//! - [`table`]: Member table with checkbox column
//! - [`empty`]: Message shown in place of the table
//! - [`pager`]: Selection summary and page position
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, optional]
//! [Table Headers]
//! [Table Rows | Empty State]
//! ...
//! [Border]
//! [Pager]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod pager;
mod search;
mod table;

use crate::ui::helpers::render_border;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use pager::render_pager;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Composes a full frame for a terminal of `rows` x `cols`.
///
/// The bottom three lines always hold the border, pager and footer; content
/// above is laid out top-down and cut off before the border.
#[must_use]
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(&mut out, current_row, &vm.header, theme, cols);
    current_row = render_border(&mut out, current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(&mut out, current_row, search, theme, cols);
    }

    let footer_row = rows;
    let pager_row = footer_row.saturating_sub(1);
    let border_row = pager_row.saturating_sub(1);

    if let Some(empty) = &vm.empty_state {
        if current_row + 3 < border_row {
            render_empty_state(&mut out, current_row + 2, empty, theme, cols);
        }
    } else if current_row < border_row {
        current_row = render_table_headers(&mut out, current_row, vm.pager.all_selected, theme, cols);
        let room = border_row.saturating_sub(current_row).min(vm.rows.len());
        render_table_rows(&mut out, current_row, &vm.rows[..room], theme, cols);
    }

    render_border(&mut out, border_row, &theme.colors.border, cols);
    render_pager(&mut out, pager_row, &vm.pager, theme, cols);
    render_footer(&mut out, footer_row, &vm.footer, theme, cols);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;
    use crate::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo, PagerInfo, RowItem, SearchBarInfo};

    fn viewmodel(empty_state: Option<EmptyState>) -> UIViewModel {
        UIViewModel {
            header: HeaderInfo {
                title: " Members ".to_string(),
                status: "0 fetched just now".to_string(),
            },
            search_bar: Some(SearchBarInfo {
                query: "zz".to_string(),
                is_active: true,
                matches: 0,
            }),
            rows: vec![],
            pager: PagerInfo {
                page: 1,
                total_pages: 1,
                summary: "0 of 3 row(s) selected".to_string(),
                all_selected: false,
                pages: vec![1],
                jump: None,
            },
            footer: FooterInfo {
                keybindings: "Esc: clear".to_string(),
            },
            empty_state,
        }
    }

    #[test]
    fn empty_frame_keeps_search_and_pager() {
        let vm = viewmodel(Some(EmptyState {
            message: "No members match \"zz\"".to_string(),
            subtitle: "Esc clears the search".to_string(),
            is_error: false,
        }));
        let frame = strip_ansi(&render_frame(&vm, &Theme::default(), 24, 80));
        assert!(frame.contains("Search: zz"));
        assert!(frame.contains("0 matches"));
        assert!(frame.contains("No members match \"zz\""));
        assert!(frame.contains("0 of 3 row(s) selected"));
        assert!(frame.contains("Page 1 of 1"));
        assert!(!frame.contains("EMAIL"));
    }

    #[test]
    fn short_pane_keeps_rows_above_the_border() {
        let mut vm = viewmodel(None);
        vm.search_bar = None;
        vm.rows = (1..=10)
            .map(|n| RowItem {
                id: n.to_string(),
                name: format!("User {n} Name"),
                email: format!("user{n}@mailinator.com"),
                role: "member".to_string(),
                is_checked: false,
                is_cursor: n == 1,
                edit: None,
                name_highlights: vec![],
                email_highlights: vec![],
            })
            .collect();

        // header at 2, border at 3, column titles at 4, rows from 5; border at 12
        let frame = render_frame(&vm, &Theme::default(), 14, 80);
        let plain = strip_ansi(&frame);
        assert_eq!(plain.matches("@mailinator").count(), 7);
        assert!(frame.contains("\u{1b}[11;1H"));
        assert!(plain.contains("Page 1 of 1"));
        assert!(plain.contains("Esc: clear"));

        let full = strip_ansi(&render_frame(&vm, &Theme::default(), 24, 80));
        assert_eq!(full.matches("@mailinator").count(), 10);
    }

    #[test]
    fn error_state_uses_error_color() {
        let theme = Theme::default();
        let vm = viewmodel(Some(EmptyState {
            message: "Could not load members".to_string(),
            subtitle: "Load error: HTTP 500".to_string(),
            is_error: true,
        }));
        let frame = render_frame(&vm, &theme, 24, 80);
        assert!(frame.contains(&Theme::fg(&theme.colors.error_fg)));
    }
}
