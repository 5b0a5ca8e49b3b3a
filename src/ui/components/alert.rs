//! Alert component renderer.
//!
//! Renders the centered alert shown in place of content: the generic
//! failure message when a query errored or produced no payload, and the
//! no-results message when a search matched nothing.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AlertInfo, AlertSeverity};

/// Row at which the alert box starts.
const ALERT_START_ROW: usize = 8;

/// Renders a centered alert box.
///
/// Draws a bordered single-message box in the severity's color:
///
/// ```text
///        ┌──────────────────────────────────┐
///        │ Error: Please refresh or try later │
///        └──────────────────────────────────┘
/// ```
pub fn render_alert(alert: &AlertInfo, theme: &Theme, cols: usize) {
    let color = match alert.severity {
        AlertSeverity::Error => &theme.colors.error_fg,
        AlertSeverity::Warning => &theme.colors.warning_fg,
    };

    let inner_width = alert.title.chars().count() + 2;
    let box_width = inner_width + 2;
    let left = (cols.saturating_sub(box_width)) / 2;

    position_cursor(ALERT_START_ROW, 1);
    print!("{}", " ".repeat(left));
    print!("{}", Theme::fg(color));
    print!("┌{}┐", "─".repeat(inner_width));

    position_cursor(ALERT_START_ROW + 1, 1);
    print!("{}", " ".repeat(left));
    print!("│ {} │", alert.title);

    position_cursor(ALERT_START_ROW + 2, 1);
    print!("{}", " ".repeat(left));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

/// Renders the centered loading indicator.
pub fn render_loading(theme: &Theme, cols: usize) {
    position_cursor(ALERT_START_ROW + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered("Loading...", cols);
    print!("{}", Theme::reset());
}
