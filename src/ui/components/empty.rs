//! Empty state component renderer.

use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
///
/// Shown in place of the table while fetching, after a failed load, when every
/// record was deleted, and when the search term matches nothing. Errors use the
/// theme's `error_fg` color.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(Theme::bold());
    write_centered(out, &empty.message, cols);
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    write_centered(out, &empty.subtitle, cols);
    out.push_str(Theme::reset());

    row + 2
}
