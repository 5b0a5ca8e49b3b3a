//! Detail pane component renderer.
//!
//! Renders a loaded character profile: the status badge line, the
//! label/value field table, and the episode list.

use crate::ui::components::status::print_status_badge;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ProfileInfo;

/// Width of the label column in the field table.
const LABEL_COLUMN: usize = 12;

/// Left indent of the detail pane.
const INDENT: usize = 3;

/// Renders the character profile starting at the specified row.
///
/// Layout: badge line, blank, field rows, blank, `EPISODES` heading, one
/// line per episode. Episodes that do not fit above `max_row` are summed up
/// in a trailing dim line instead of overflowing the chrome below.
///
/// # Returns
///
/// The next available row position
pub fn render_profile(
    row: usize,
    profile: &ProfileInfo,
    theme: &Theme,
    max_row: usize,
) -> usize {
    let indent = " ".repeat(INDENT);
    let mut current_row = row;

    position_cursor(current_row, 1);
    print!("{indent}");
    print_status_badge(profile.status, theme, None);
    current_row += 2;

    for field in &profile.fields {
        position_cursor(current_row, 1);
        print!("{indent}");
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{:<LABEL_COLUMN$}", field.label);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", field.value);
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if profile.episodes.is_empty() || current_row + 2 > max_row {
        return current_row;
    }

    current_row += 1;
    position_cursor(current_row, 1);
    print!("{indent}");
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("EPISODES ({})", profile.episodes.len());
    print!("{}", Theme::reset());
    current_row += 1;

    let available = max_row.saturating_sub(current_row);
    let shown = profile.episodes.len().min(available);

    for episode in &profile.episodes[..shown] {
        position_cursor(current_row, 1);
        print!("{indent}");
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{episode}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if shown < profile.episodes.len() {
        position_cursor(current_row, 1);
        print!("{indent}");
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("... and {} more", profile.episodes.len() - shown);
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
