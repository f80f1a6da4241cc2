//! Table component renderer.
//!
//! Draws the member table: a checkbox column followed by ID, NAME, EMAIL and ROLE.
//! The checkbox in the header row reflects select-all. A row being edited shows
//! the edit buffer instead of the record, with the focused cell highlighted.

use crate::app::state::{EMAIL_COLUMN_WIDTH, ID_COLUMN_WIDTH, NAME_COLUMN_WIDTH};
use crate::domain::EditField;
use crate::ui::helpers::{self, clip_visible, pad_to, position_cursor, visible_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EditCells, RowItem};

/// Space between columns.
const GUTTER: usize = 2;

/// Width of the `[x] ` checkbox column.
const CHECKBOX_WIDTH: usize = 4;

const ROLE_COLUMN_WIDTH: usize = 6;

/// Total width of one table line before trailing padding.
const LINE_WIDTH: usize = CHECKBOX_WIDTH
    + ID_COLUMN_WIDTH
    + NAME_COLUMN_WIDTH
    + EMAIL_COLUMN_WIDTH
    + ROLE_COLUMN_WIDTH
    + 3 * GUTTER;

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Renders the column titles at `row`; the checkbox shows the select-all state.
pub fn render_table_headers(out: &mut String, row: usize, all_selected: bool, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));

    let line = format!(
        "{} {}{}{}{}",
        checkbox(all_selected),
        pad_to("ID", ID_COLUMN_WIDTH + GUTTER),
        pad_to("NAME", NAME_COLUMN_WIDTH + GUTTER),
        pad_to("EMAIL", EMAIL_COLUMN_WIDTH + GUTTER),
        "ROLE",
    );
    out.push_str(&pad_to(&line, cols));

    out.push_str(Theme::reset());
    row + 1
}

/// Renders all rows starting at `row` and returns the row after the last one.
pub fn render_table_rows(out: &mut String, row: usize, rows: &[RowItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in rows {
        current_row = render_table_row(out, current_row, item, theme, cols);
    }
    current_row
}

fn render_table_row(out: &mut String, row: usize, item: &RowItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    let mut line = String::new();
    write_row(&mut line, item, theme, cols);
    out.push_str(&clip_visible(&line, cols));
    row + 1
}

fn write_row(out: &mut String, item: &RowItem, theme: &Theme, cols: usize) {
    let base = if item.is_cursor {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.cursor_fg),
            Theme::bg(&theme.colors.cursor_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    out.push_str(&base);

    if item.is_checked {
        out.push_str(&Theme::fg(&theme.colors.checkbox_fg));
        out.push_str(checkbox(true));
        out.push_str(&base);
    } else {
        out.push_str(checkbox(false));
    }
    out.push(' ');

    out.push_str(&pad_to(&item.id, ID_COLUMN_WIDTH + GUTTER));

    match &item.edit {
        Some(edit) => render_edit_cells(out, edit, &base, theme),
        None => {
            render_cell(out, &item.name, &item.name_highlights, NAME_COLUMN_WIDTH + GUTTER, &base, theme);
            render_cell(out, &item.email, &item.email_highlights, EMAIL_COLUMN_WIDTH + GUTTER, &base, theme);
            out.push_str(&pad_to(&item.role, ROLE_COLUMN_WIDTH));
        }
    }

    out.push_str(&" ".repeat(cols.saturating_sub(LINE_WIDTH)));
    out.push_str(Theme::reset());
}

fn render_cell(out: &mut String, text: &str, ranges: &[(usize, usize)], width: usize, base: &str, theme: &Theme) {
    helpers::render_highlighted_text(out, text, ranges, theme, base);
    out.push_str(&" ".repeat(width.saturating_sub(visible_len(text))));
}

fn render_edit_cells(out: &mut String, edit: &EditCells, base: &str, theme: &Theme) {
    let cells = [
        (EditField::Name, edit.name.as_str(), NAME_COLUMN_WIDTH),
        (EditField::Email, edit.email.as_str(), EMAIL_COLUMN_WIDTH),
        (EditField::Role, edit.role.as_str(), ROLE_COLUMN_WIDTH),
    ];

    for (field, value, width) in cells {
        let shown = pad_to(&tail_fit(value, width), width);
        if field == edit.focus {
            out.push_str(&Theme::fg(&theme.colors.edit_fg));
            out.push_str(&Theme::bg(&theme.colors.edit_bg));
            out.push_str(&shown);
            out.push_str(Theme::reset());
            out.push_str(base);
        } else {
            out.push_str(Theme::dim());
            out.push_str(&shown);
            out.push_str(Theme::reset());
            out.push_str(base);
        }
        if field != EditField::Role {
            out.push_str(&" ".repeat(GUTTER));
        }
    }
}

/// Keeps the end of `text` visible when it is wider than `width`, leaving room
/// for the typing position.
fn tail_fit(text: &str, width: usize) -> String {
    let len = visible_len(text);
    let room = width.saturating_sub(1);
    if len <= room {
        return text.to_string();
    }
    text.chars().skip(len - room).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    fn row(is_cursor: bool, edit: Option<EditCells>) -> RowItem {
        RowItem {
            id: "7".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: "admin".to_string(),
            is_checked: true,
            is_cursor,
            edit,
            name_highlights: vec![(0, 3)],
            email_highlights: vec![],
        }
    }

    #[test]
    fn row_has_fixed_columns() {
        let theme = Theme::default();
        let mut out = String::new();
        render_table_rows(&mut out, 5, &[row(true, None)], &theme, LINE_WIDTH);
        let plain = strip_ansi(&out);
        assert_eq!(visible_len(&plain), LINE_WIDTH);
        assert!(plain.starts_with("[x] 7 "));
        assert!(plain.contains("Ada Lovelace"));
        assert!(plain.trim_end().ends_with("admin"));
        assert!(out.contains(&Theme::bg(&theme.colors.cursor_bg)));
    }

    #[test]
    fn narrow_pane_clips_rows() {
        let theme = Theme::default();
        let mut out = String::new();
        render_table_rows(&mut out, 5, &[row(true, None)], &theme, 30);
        let plain = strip_ansi(&out);
        assert_eq!(visible_len(&plain), 30);
        assert!(!plain.contains("admin"));
        assert!(out.ends_with(Theme::reset()));
    }

    #[test]
    fn edit_row_shows_buffer_with_focus() {
        let theme = Theme::default();
        let edit = EditCells {
            name: "Ada K".to_string(),
            email: "ada@example.com".to_string(),
            role: "member".to_string(),
            focus: EditField::Email,
        };
        let mut out = String::new();
        render_table_rows(&mut out, 5, &[row(false, Some(edit))], &theme, 120);
        let plain = strip_ansi(&out);
        assert!(plain.contains("Ada K"));
        assert!(plain.contains("member"));
        assert!(!plain.contains("Lovelace"));
        assert!(out.contains(&Theme::bg(&theme.colors.edit_bg)));
    }

    #[test]
    fn header_reflects_select_all() {
        let theme = Theme::default();
        let mut out = String::new();
        render_table_headers(&mut out, 1, true, &theme, 100);
        assert!(strip_ansi(&out).starts_with("[x] ID"));
    }

    #[test]
    fn long_edit_values_keep_their_tail() {
        assert_eq!(tail_fit("abcdef", 4), "def");
        assert_eq!(tail_fit("abc", 4), "abc");
    }
}
