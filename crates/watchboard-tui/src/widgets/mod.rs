//! Ratatui widgets for the watchboard TUI.

pub mod amount_chart;
pub mod command_bar;
pub mod forecast_chart;
pub mod help;
pub mod input_bar;
pub mod picture_panel;
pub mod recent_table;
pub mod selection_bar;
pub mod tab_bar;
