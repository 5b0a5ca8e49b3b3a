//! Shared rendering utilities.
//!
//! Low-level helpers used across UI components: cursor positioning and
//! centered line printing with proper ANSI escape sequence management.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` centered within `cols`, padding the full line.
///
/// Padding is split evenly; when the width does not divide evenly the left
/// side gets the extra cell. Any styling must already be active; the line
/// is not reset afterwards.
pub fn print_centered(text: &str, cols: usize) {
    let text_len = text.chars().count().min(cols);
    let padding = (cols.saturating_sub(text_len)) / 2;

    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
}

/// Renders a full-width horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}
