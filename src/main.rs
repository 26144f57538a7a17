//! State Scatter - U.S. State Income vs Home Value Viewer
//!
//! Interactive scatterplot of state median household income against typical
//! home value over selectable years, with region coloring and annotations.

mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::StateScatterApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("State Scatter"),
        ..Default::default()
    };

    eframe::run_native(
        "State Scatter",
        options,
        Box::new(|cc| Ok(Box::new(StateScatterApp::new(cc)))),
    )
}
