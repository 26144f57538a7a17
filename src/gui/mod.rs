//! GUI module - User interface components

mod app;
mod control_panel;

pub use app::StateScatterApp;
pub use control_panel::{ControlPanel, ControlPanelAction};
