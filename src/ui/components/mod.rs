//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture, plus the two
//! top-level layout functions the renderer dispatches to.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`table`]: Character list with NAME / SPECIES / STATUS columns
//! - [`pagination`]: Windowed page bar with edge jumps
//! - [`alert`]: Centered failure / no-results boxes and the loading line
//! - [`detail`]: Character profile pane
//! - [`status`]: Status badge shared by table and detail

mod alert;
mod detail;
mod footer;
mod header;
mod pagination;
mod search;
mod status;
mod table;

use crate::ui::helpers::render_border;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailContent, DetailViewModel, ListContent, ListViewModel};

use alert::{render_alert, render_loading};
use detail::render_profile;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders the list view layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Box - 3 lines, search mode only]
/// [Table Headers]
/// [Table Rows | Loading | Alert]
/// [Blank padding to fill screen]
/// [Pagination]
/// [Border]
/// [Footer]
/// ```
pub fn render_list_view(vm: &ListViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    match &vm.content {
        ListContent::Loading => render_loading(theme, cols),
        ListContent::Alert(alert) => render_alert(alert, theme, cols),
        ListContent::Rows(items) => {
            current_row = render_table_headers(current_row, theme);
            render_table_rows(current_row, items, theme, cols);
        }
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let pagination_row = border_row.saturating_sub(1);

    if let Some(pagination) = &vm.pagination {
        render_pagination(pagination_row, pagination, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the detail view layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header - character name]
/// [Border]
/// [Profile | Loading | Alert]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_detail_view(vm: &DetailViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row += 1;

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);

    match &vm.content {
        DetailContent::Loading => render_loading(theme, cols),
        DetailContent::Alert(alert) => render_alert(alert, theme, cols),
        DetailContent::Profile(profile) => {
            render_profile(current_row, profile, theme, border_row.saturating_sub(1));
        }
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
