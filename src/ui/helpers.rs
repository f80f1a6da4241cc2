//! Shared rendering utilities.
//!
//! Components write ANSI-styled text into a frame buffer (`&mut String`) instead of
//! printing directly, so a whole frame is emitted with a single `print!` and can be
//! inspected in tests. All widths and highlight ranges are in characters, not bytes.
//!
//! # Example
//!
//! ```
//! use memberdesk::ui::helpers::render_highlighted_text;
//! use memberdesk::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut out = String::new();
//! render_highlighted_text(&mut out, "ada@example.com", &[(0, 3)], &theme, "");
//! assert!(out.contains("ada"));
//! assert!(out.ends_with("@example.com"));
//! ```

use crate::ui::theme::Theme;
use std::fmt::Write;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn visible_len(text: &str) -> usize {
    text.chars().count()
}

/// Left-aligns `text` in a field of `width` characters.
///
/// Text longer than the field is cut to fit.
#[must_use]
pub fn pad_to(text: &str, width: usize) -> String {
    let len = visible_len(text);
    if len >= width {
        return text.chars().take(width).collect();
    }
    let mut padded = String::with_capacity(text.len() + width - len);
    padded.push_str(text);
    padded.push_str(&" ".repeat(width - len));
    padded
}

/// Cuts styled `text` to `width` visible characters.
///
/// Escape sequences are kept, including those past the cut, so trailing resets
/// still apply.
#[must_use]
pub fn clip_visible(text: &str, width: usize) -> String {
    let mut clipped = String::with_capacity(text.len());
    let mut shown = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            clipped.push(c);
            for next in chars.by_ref() {
                clipped.push(next);
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else if shown < width {
            clipped.push(c);
            shown += 1;
        }
    }
    clipped
}

/// Writes `text` centered in a line of `cols` characters.
pub fn write_centered(out: &mut String, text: &str, cols: usize) {
    let len = visible_len(text).min(cols);
    let padding = cols.saturating_sub(len) / 2;
    out.push_str(&" ".repeat(padding));
    out.extend(text.chars().take(len));
    out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
}

/// Writes `text` with the character ranges in `ranges` highlighted.
///
/// Ranges are `(start, end)` with exclusive end. Ranges that overlap an earlier one
/// or run past the text are clipped. After every highlighted section `restore` is
/// written so the surrounding style (e.g. the cursor row colors) continues.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &str,
) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.max(current_pos).min(chars.len());
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(restore);

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

/// Writes a horizontal separator line at `row` and returns the next row.
pub fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Removes ANSI escape sequences, leaving the visible text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_and_center_count_characters() {
        assert_eq!(pad_to("ab", 4), "ab  ");
        assert_eq!(pad_to("abcdef", 3), "abc");
        assert_eq!(pad_to("éé", 3), "éé ");

        let mut out = String::new();
        write_centered(&mut out, "hi", 6);
        assert_eq!(out, "  hi  ");
    }

    #[test]
    fn highlight_clips_bad_ranges() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "abcdef", &[(1, 3), (2, 4), (5, 99), (9, 12)], &theme, "");
        assert_eq!(strip_ansi(&out), "abcdef");
        assert_eq!(out.matches(Theme::reset()).count(), 3);
    }

    #[test]
    fn clip_keeps_styles_and_cuts_text() {
        let styled = format!("{}abc{}def", Theme::fg("#ffffff"), Theme::reset());
        let clipped = clip_visible(&styled, 4);
        assert_eq!(strip_ansi(&clipped), "abcd");
        assert!(clipped.ends_with(&format!("{}d", Theme::reset())));
        assert_eq!(clip_visible("abc", 10), "abc");
    }

    #[test]
    fn strip_ansi_removes_sequences() {
        let styled = format!("{}x{}y", Theme::fg("#ffffff"), Theme::reset());
        assert_eq!(strip_ansi(&styled), "xy");

        let mut out = String::new();
        position_cursor(&mut out, 3, 1);
        assert_eq!(out, "\u{1b}[3;1H");
        assert_eq!(strip_ansi(&out), "");
    }
}
