//! Status badge renderer.
//!
//! One place decides how a character's life status looks: the indicator
//! glyph, the uppercase label, and which theme color applies. Both the list
//! table and the detail pane use it, so the badge can never drift between
//! surfaces.

use crate::domain::Status;
use crate::ui::theme::{Theme, ThemeColors};

/// Returns the theme color assigned to a status.
#[must_use]
pub fn status_color(status: Status, colors: &ThemeColors) -> &str {
    match status {
        Status::Alive => &colors.status_alive,
        Status::Dead => &colors.status_dead,
        Status::Unknown => &colors.status_unknown,
    }
}

/// Prints the status badge: a colored indicator dot plus the uppercase
/// label, e.g. `● ALIVE`.
///
/// When `restore_fg` is given, that foreground color is re-applied after
/// the badge so the surrounding row styling continues (used inside selected
/// rows).
pub fn print_status_badge(status: Status, theme: &Theme, restore_fg: Option<&str>) {
    print!("{}", Theme::fg(status_color(status, &theme.colors)));
    print!("● {}", status.label());

    match restore_fg {
        Some(color) => print!("{}", Theme::fg(color)),
        None => print!("{}", Theme::reset()),
    }
}
