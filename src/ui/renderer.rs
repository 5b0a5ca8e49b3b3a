//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to the route's layout function.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into a `UIViewModel`
//! 2. **Component Rendering**: Delegate to the layout for the current route

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// list or detail layout. Prints ANSI-styled output using `print!`; Zellij
/// clears the pane before each render pass.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    match state.compute_viewmodel(rows, cols) {
        UIViewModel::List(vm) => components::render_list_view(&vm, &state.theme, rows, cols),
        UIViewModel::Detail(vm) => components::render_detail_view(&vm, &state.theme, rows, cols),
    }
}
