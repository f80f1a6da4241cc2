//! Pagination bar renderer.

use crate::ui::helpers::{position_cursor, visible_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PagerInfo;
use std::fmt::Write;

/// Renders the selection summary and page position at `row`.
///
/// ```text
///  3 of 46 row(s) selected                  ‹ 1 2 3 4 5 ›  Page 2 of 5
/// ```
///
/// The current page number is highlighted and the arrows are dimmed on the first
/// and last page respectively. While a page number is being typed it replaces
/// the page position.
pub fn render_pager(out: &mut String, row: usize, pager: &PagerInfo, theme: &Theme, cols: usize) -> usize {
    let summary = format!(" {}", pager.summary);
    let numbers: String = pager.pages.iter().map(|page| format!(" {page}")).collect();
    let position = match pager.jump {
        Some(typed) => format!("  Go to page: {typed}_ "),
        None => format!("  Page {} of {} ", pager.page, pager.total_pages),
    };
    let used = visible_len(&summary) + visible_len(&numbers) + visible_len(&position) + 3;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&summary);
    out.push_str(&" ".repeat(cols.saturating_sub(used)));

    render_arrow(out, '‹', pager.page > 1, theme);
    for &page in &pager.pages {
        out.push(' ');
        if page == pager.page {
            out.push_str(&Theme::fg(&theme.colors.cursor_fg));
            out.push_str(&Theme::bg(&theme.colors.cursor_bg));
            let _ = write!(out, "{page}");
            out.push_str(Theme::reset());
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
            let _ = write!(out, "{page}");
        }
    }
    out.push(' ');
    render_arrow(out, '›', pager.page < pager.total_pages, theme);

    if pager.jump.is_some() {
        out.push_str(&Theme::fg(&theme.colors.edit_fg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    out.push_str(&position);

    out.push_str(Theme::reset());
    row + 1
}

fn render_arrow(out: &mut String, arrow: char, enabled: bool, theme: &Theme) {
    if enabled {
        out.push_str(&Theme::fg(&theme.colors.header_fg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.border));
    }
    out.push(arrow);
}
