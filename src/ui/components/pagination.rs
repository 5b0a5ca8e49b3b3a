//! Pagination bar component renderer.
//!
//! Renders the windowed page items computed by the view model as a single
//! centered line with edge jumps, e.g. `« ‹ 1 … 6 [7] 8 … 12 › »`.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageItem, PaginationInfo};

/// Renders the pagination bar at the specified row.
///
/// The current page is bracketed and drawn in the accent color; edge-jump
/// glyphs dim out when the corresponding move is unavailable, mirroring a
/// disabled button.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pagination(row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let mut line = String::new();
    for item in &info.items {
        match item {
            PageItem::Page(n) if *n == info.current => line.push_str(&format!(" [{n}]")),
            PageItem::Page(n) => line.push_str(&format!(" {n} ")),
            PageItem::Ellipsis => line.push_str(" … "),
        }
    }

    let at_first = info.current <= 1;
    let at_last = info.current >= info.total;
    let full = format!("« ‹{line} › »");

    let width = full.chars().count();
    let left = (cols.saturating_sub(width)) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(left));

    print_edge("« ‹", at_first, theme);
    for item in &info.items {
        match item {
            PageItem::Page(n) if *n == info.current => {
                print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
                print!(" [{n}]");
                print!("{}", Theme::reset());
            }
            PageItem::Page(n) => {
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print!(" {n} ");
            }
            PageItem::Ellipsis => {
                print!("{}", Theme::fg(&theme.colors.text_dim));
                print!(" … ");
            }
        }
    }
    print_edge(" › »", at_last, theme);

    print!("{}", Theme::reset());
    row + 1
}

/// Prints an edge-jump glyph pair, dimmed when disabled.
fn print_edge(glyphs: &str, disabled: bool, theme: &Theme) {
    if disabled {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", Theme::fg(&theme.colors.accent));
    }
    print!("{glyphs}");
    print!("{}", Theme::reset());
}
