//! Dashboard Application
//! Main window: control panel on the left, dashboard on the right. Every
//! filter change rebuilds the view from scratch; loads are synchronous.

use anyhow::Context;
use egui::SidePanel;
use std::path::{Path, PathBuf};

use crate::data::export::EXPORT_FILE_NAME;
use crate::data::DataLoader;
use crate::gui::{ControlPanel, ControlPanelAction, DashboardPanel};
use crate::report::DashboardView;

/// Fixed relative path tried at startup.
const DEFAULT_DATA_PATH: &str = "sales_data.csv";

/// Main application window. The loaded table lives in the memoized loader;
/// `view` is the current filter evaluation.
pub struct DashboardApp {
    loader: DataLoader,
    control_panel: ControlPanel,
    view: Option<DashboardView>,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let mut app = Self {
            loader: DataLoader::new(),
            control_panel: ControlPanel::new(),
            view: None,
        };

        let default_path = PathBuf::from(DEFAULT_DATA_PATH);
        if default_path.exists() {
            app.load_path(default_path);
        }

        app
    }

    /// Load (or re-load) the table at `path` and reset filters to the full
    /// range. A load failure clears the dashboard and surfaces the error.
    fn load_path(&mut self, path: PathBuf) {
        self.control_panel.csv_path = Some(path.clone());

        match self.loader.load(&path) {
            Ok(table) => {
                self.control_panel.set_table(&table);
                self.control_panel.set_status(format!(
                    "Loaded {} rows from {}",
                    table.row_count(),
                    path.file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| path.display().to_string()),
                ));
                self.rebuild_view();
            }
            Err(e) => {
                // A stale table from an earlier file must not keep rendering.
                self.loader.clear();
                self.view = None;
                self.control_panel.set_status(format!("Error: {}", e));
            }
        }
    }

    /// Re-evaluate the pure render step for the current filter state. Keeps
    /// the previous view while a date input is mid-edit and unparseable.
    fn rebuild_view(&mut self) {
        let Some(table) = self.loader.table() else {
            self.view = None;
            return;
        };
        if let Some(criteria) = self.control_panel.criteria() {
            self.view = Some(DashboardView::build(&table, &criteria));
        }
    }

    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.load_path(path);
        }
    }

    fn handle_reload_csv(&mut self) {
        if let Some(path) = self.control_panel.csv_path.clone() {
            self.load_path(path);
        }
    }

    /// Save the filtered subset through a file dialog, then reveal it.
    fn handle_download_csv(&mut self) {
        let Some(view) = &self.view else {
            self.control_panel.set_status("No data to download");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(EXPORT_FILE_NAME)
            .save_file()
        else {
            return; // User cancelled
        };

        match write_export(view, &path) {
            Ok(row_count) => {
                self.control_panel.set_status(format!(
                    "Saved {} rows to {}",
                    row_count,
                    path.display()
                ));
                if let Some(parent) = path.parent() {
                    let _ = open::that(parent);
                }
            }
            Err(e) => {
                self.control_panel.set_status(format!("Error: {:#}", e));
            }
        }
    }
}

/// Serialize the view's filtered rows and write them to disk.
fn write_export(view: &DashboardView, path: &Path) -> anyhow::Result<usize> {
    let bytes = view
        .csv_bytes()
        .context("serializing filtered rows to CSV")?;
    std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(view.rows.len())
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - filters and actions
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::ReloadCsv => self.handle_reload_csv(),
                        ControlPanelAction::FiltersChanged => self.rebuild_view(),
                        ControlPanelAction::ResetFilters => {
                            self.control_panel.reset_filters();
                            self.rebuild_view();
                        }
                        ControlPanelAction::DownloadCsv => self.handle_download_csv(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - KPIs and charts
        egui::CentralPanel::default().show(ctx, |ui| {
            DashboardPanel::show(ui, self.view.as_ref());
        });
    }
}
