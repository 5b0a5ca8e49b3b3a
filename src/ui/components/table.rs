//! Character table component renderer.
//!
//! Renders the list view's character rows as a three-column table (NAME,
//! SPECIES, STATUS) with selection highlighting and per-status badge
//! colors.

use crate::ui::components::status::print_status_badge;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CharacterRow;

/// Rendered width of the NAME column, including separator spacing.
const NAME_COLUMN: usize = 34;

/// Rendered width of the SPECIES column, including separator spacing.
const SPECIES_COLUMN: usize = 18;

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<NAME_COLUMN$}{:<SPECIES_COLUMN$}{}", "NAME", "SPECIES", "STATUS");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_table_rows(row: usize, items: &[CharacterRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single character row.
///
/// The selected row gets the full-width selection background; the status
/// badge keeps its own color either way and restores the row's foreground
/// afterwards. The row is padded to the terminal width so the selection
/// background renders consistently.
fn render_table_row(row: usize, item: &CharacterRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let row_fg: &str = if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        &theme.colors.text_normal
    };

    print!("{:<NAME_COLUMN$}", item.name);
    print!("{:<SPECIES_COLUMN$}", item.species);
    print_status_badge(item.status, theme, Some(row_fg));
    if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }

    // Indicator dot + space + label.
    let badge_len = 2 + item.status.label().len();
    let line_len = NAME_COLUMN + SPECIES_COLUMN + badge_len;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
