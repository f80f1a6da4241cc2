//! Search bar component renderer.

use crate::ui::helpers::{position_cursor, visible_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the 3-line search box at `row` and returns the row after it.
///
/// ```text
///   ┌──────────────────────────────────────────────┐
///   │ Search: ada▏                       3 matches │
///   └──────────────────────────────────────────────┘
/// ```
///
/// The frame uses `search_bar_border` while the box has focus and the plain
/// border color once the term is merely applied.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let frame = if search.is_active {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&frame);
    out.push('┌');
    out.push_str(&"─".repeat(inner_width));
    out.push('┐');
    out.push_str(Theme::reset());

    let caret = if search.is_active { "▏" } else { "" };
    let query = format!(" Search: {}{caret}", search.query);
    let count = match search.matches {
        1 => "1 match ".to_string(),
        n => format!("{n} matches "),
    };
    let query_len = visible_len(&query).min(inner_width);
    let gap = inner_width.saturating_sub(query_len + visible_len(&count));

    position_cursor(out, row + 1, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&frame);
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.extend(query.chars().take(query_len));
    if gap > 0 {
        out.push_str(&" ".repeat(gap));
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&count);
    } else {
        out.push_str(&" ".repeat(inner_width - query_len));
    }
    out.push_str(&frame);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&frame);
    out.push('└');
    out.push_str(&"─".repeat(inner_width));
    out.push('┘');
    out.push_str(Theme::reset());

    row + 3
}
