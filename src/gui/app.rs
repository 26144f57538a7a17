//! State Scatter Main Application
//! Main window with control panel and scatterplot viewer.

use anyhow::{anyhow, Context};
use egui::{RichText, SidePanel};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use crate::charts::ScatterPlotter;
use crate::data::{project, DatasetLoader, MergedTable, Projection};
use crate::gui::{ControlPanel, ControlPanelAction};

/// Load result from the background thread
enum LoadResult {
    Complete(MergedTable),
    Error(String),
}

/// Main application window.
pub struct StateScatterApp {
    control_panel: ControlPanel,
    table: Option<MergedTable>,
    projection: Option<Projection>,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl StateScatterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            control_panel: ControlPanel::new(),
            table: None,
            projection: None,
            load_rx: None,
            is_loading: false,
        }
    }

    fn handle_browse(&mut self, income: bool) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            if income {
                self.control_panel.settings.income_path = path;
            } else {
                self.control_panel.settings.home_value_path = path;
            }
        }
    }

    /// Kick off loading both CSVs on background threads.
    fn handle_load(&mut self) {
        if self.is_loading {
            return;
        }

        self.table = None;
        self.projection = None;
        self.control_panel.year_enabled = false;
        self.control_panel.set_status("Loading CSV files...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        let home_path = self
            .control_panel
            .settings
            .home_value_path
            .to_string_lossy()
            .to_string();
        let income_path = self
            .control_panel
            .settings
            .income_path
            .to_string_lossy()
            .to_string();

        thread::spawn(move || {
            let result = match Self::load_tables(home_path, income_path) {
                Ok(table) => LoadResult::Complete(table),
                Err(e) => LoadResult::Error(format!("{:#}", e)),
            };
            let _ = tx.send(result);
        });
    }

    /// Load both tables with both reads in flight, then merge. Either
    /// failure aborts the whole pipeline with no partial table.
    fn load_tables(home_path: String, income_path: String) -> anyhow::Result<MergedTable> {
        let home_handle = thread::spawn(move || DatasetLoader::load_home_values(&home_path));
        let income_handle = thread::spawn(move || DatasetLoader::load_incomes(&income_path));

        let home_rows = home_handle
            .join()
            .map_err(|_| anyhow!("home value load thread panicked"))?
            .context("home value table")?;
        let income_rows = income_handle
            .join()
            .map_err(|_| anyhow!("income load thread panicked"))?
            .context("income table")?;

        Ok(MergedTable::build(home_rows, income_rows))
    }

    /// Check for load results from the background thread
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Complete(table) => {
                        self.control_panel
                            .set_status(&format!("Loaded {} states", table.len()));
                        self.control_panel.year_enabled = true;
                        self.projection = Some(project(&table, self.control_panel.settings.year));
                        self.table = Some(table);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        self.control_panel.set_status(&format!("Error: {}", error));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Re-project the immutable table for the newly selected year.
    fn handle_year_changed(&mut self) {
        if let Some(table) = &self.table {
            self.projection = Some(project(table, self.control_panel.settings.year));
        }
    }
}

impl eframe::App for StateScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseHomeValueCsv => self.handle_browse(false),
                        ControlPanelAction::BrowseIncomeCsv => self.handle_browse(true),
                        ControlPanelAction::Load => self.handle_load(),
                        ControlPanelAction::YearChanged => self.handle_year_changed(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Scatterplot
        egui::CentralPanel::default().show(ctx, |ui| match &self.projection {
            Some(projection) => {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "Median Household Income vs Typical Home Value — {}",
                            projection.year
                        ))
                        .size(16.0)
                        .strong(),
                    );
                });
                ui.add_space(5.0);
                ScatterPlotter::draw(ui, projection);
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0));
                });
            }
        });
    }
}
