//! Form widgets

pub mod results_table;
pub mod search_bar;
pub mod theme;
