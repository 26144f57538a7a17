//! Charts module - Chart rendering

mod plotter;

pub use plotter::{format_currency, group_color, ScatterPlotter};
