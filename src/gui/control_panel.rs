//! Control Panel Widget
//! Left side panel with data source selection, year selection and status.

use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

use crate::data::SUPPORTED_YEARS;

/// Years with their own buttons; the rest sit in the "more years" combo box.
const BUTTON_YEARS: [i32; 3] = [2000, 2005, 2010];

/// User settings for the viewer.
#[derive(Clone)]
pub struct UserSettings {
    pub home_value_path: PathBuf,
    pub income_path: PathBuf,
    pub year: i32,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            home_value_path: PathBuf::from("homevalue.csv"),
            income_path: PathBuf::from("medianincome.csv"),
            year: SUPPORTED_YEARS[0],
        }
    }
}

/// Left side control panel with file selection and year controls.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub status: String,
    pub year_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            status: "Ready".to_string(),
            year_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏠 State Scatter")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Income vs Home Value by State")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Sources Section =====
        ui.label(RichText::new("📁 Data Sources").size(14.0).strong());
        ui.add_space(5.0);

        let home_path = self.settings.home_value_path.clone();
        if Self::file_picker_row(ui, "Home values:", &home_path) {
            action = ControlPanelAction::BrowseHomeValueCsv;
        }
        ui.add_space(5.0);
        let income_path = self.settings.income_path.clone();
        if Self::file_picker_row(ui, "Incomes:", &income_path) {
            action = ControlPanelAction::BrowseIncomeCsv;
        }

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("▶ Load Data").size(16.0))
                .min_size(egui::vec2(180.0, 32.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::Load;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Year Selection Section =====
        ui.label(RichText::new("📅 Year").size(14.0).strong());
        ui.add_space(5.0);

        ui.add_enabled_ui(self.year_enabled, |ui| {
            ui.horizontal(|ui| {
                for year in BUTTON_YEARS {
                    if ui
                        .selectable_label(self.settings.year == year, year.to_string())
                        .clicked()
                    {
                        self.settings.year = year;
                        action = ControlPanelAction::YearChanged;
                    }
                }
            });

            ui.add_space(5.0);

            // 2015-2019 live in a combo box, like the source chart's
            // "more years" selector
            ui.horizontal(|ui| {
                ui.label("More years:");
                ComboBox::from_id_salt("extra_years")
                    .width(90.0)
                    .selected_text(self.settings.year.to_string())
                    .show_ui(ui, |ui| {
                        for &year in SUPPORTED_YEARS.iter().filter(|y| !BUTTON_YEARS.contains(y)) {
                            if ui
                                .selectable_label(self.settings.year == year, year.to_string())
                                .clicked()
                            {
                                self.settings.year = year;
                                action = ControlPanelAction::YearChanged;
                            }
                        }
                    });
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// One labeled file row with a browse button; returns true when clicked.
    fn file_picker_row(ui: &mut egui::Ui, label: &str, path: &PathBuf) -> bool {
        let mut clicked = false;
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).size(12.0));
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());
                    ui.label(RichText::new(name).size(12.0).color(Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            clicked = true;
                        }
                    });
                });
            });
        clicked
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseHomeValueCsv,
    BrowseIncomeCsv,
    Load,
    YearChanged,
}
