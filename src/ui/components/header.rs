//! Header component renderer.

use crate::ui::helpers::{position_cursor, visible_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at `row` and returns the next row.
///
/// The title is left-aligned and bold; the load status is right-aligned and
/// dropped when the line is too narrow for both.
///
/// ```text
///  Members                                          46 fetched just now
/// ```
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = visible_len(&header.title);
    let status = format!("{} ", header.status);
    let status_len = visible_len(&status);

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }

    out.push_str(Theme::bold());
    out.extend(header.title.chars().take(cols));
    out.push_str(Theme::reset());

    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    if title_len + status_len < cols {
        out.push_str(&" ".repeat(cols - title_len - status_len));
        out.push_str(&status);
    } else {
        out.push_str(&" ".repeat(cols.saturating_sub(title_len)));
    }

    out.push_str(Theme::reset());
    row + 1
}
