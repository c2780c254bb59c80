//! Control Panel Widget
//! Left side panel: data source, filter inputs, actions and status line.

use chrono::NaiveDate;
use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

use crate::data::{FilterCriteria, SalesTable, ALL};

/// Format used by the date-range text inputs.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Actions the panel reports back to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    ReloadCsv,
    FiltersChanged,
    ResetFilters,
    DownloadCsv,
}

/// Left side control panel. Filter state lives here as widget text/selection;
/// `criteria()` turns it into a `FilterCriteria` when both dates parse.
pub struct ControlPanel {
    pub csv_path: Option<PathBuf>,

    start_text: String,
    end_text: String,
    category: String,
    region: String,

    categories: Vec<String>,
    regions: Vec<String>,
    date_bounds: Option<(NaiveDate, NaiveDate)>,

    status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            csv_path: None,
            start_text: String::new(),
            end_text: String::new(),
            category: ALL.to_string(),
            region: ALL.to_string(),
            categories: Vec::new(),
            regions: Vec::new(),
            date_bounds: None,
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate selector options and default the filters to the full range
    /// after a table load.
    pub fn set_table(&mut self, table: &SalesTable) {
        self.categories = table.categories().to_vec();
        self.regions = table.regions().to_vec();
        self.date_bounds = Some(table.date_range());
        self.reset_filters();
    }

    /// Restore defaults: full date span, both selectors "All".
    pub fn reset_filters(&mut self) {
        if let Some((min, max)) = self.date_bounds {
            self.start_text = min.format(DATE_INPUT_FORMAT).to_string();
            self.end_text = max.format(DATE_INPUT_FORMAT).to_string();
        }
        self.category = ALL.to_string();
        self.region = ALL.to_string();
    }

    /// Current criteria, or `None` while a date input does not parse.
    pub fn criteria(&self) -> Option<FilterCriteria> {
        let start_date = parse_input_date(&self.start_text)?;
        let end_date = parse_input_date(&self.end_text)?;
        Some(FilterCriteria {
            start_date,
            end_date,
            category: self.category.clone(),
            region: self.region.clone(),
        })
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Draw the panel. Returns the action the user triggered this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Sales Dashboard")
                    .size(20.0)
                    .color(Color32::from_rgb(37, 99, 235)),
            );
            ui.label(
                RichText::new("E-commerce sales insights")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.csv_path.is_some() {
                            ui.visuals().text_color()
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                        if self.csv_path.is_some() && ui.button("🔄 Reload").clicked() {
                            action = ControlPanelAction::ReloadCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Filters =====
        ui.label(RichText::new("🔧 Filters").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 80.0;
        let input_width = 150.0;
        let enabled = self.date_bounds.is_some();

        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                ui.add_sized([label_width, 20.0], egui::Label::new("Start Date:"));
                let response = ui.add_sized(
                    [input_width, 20.0],
                    egui::TextEdit::singleline(&mut self.start_text),
                );
                if response.changed() {
                    action = ControlPanelAction::FiltersChanged;
                }
            });
            if parse_input_date(&self.start_text).is_none() && enabled {
                ui.label(
                    RichText::new("Expected YYYY-MM-DD")
                        .size(10.0)
                        .color(Color32::from_rgb(220, 53, 69)),
                );
            }

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.add_sized([label_width, 20.0], egui::Label::new("End Date:"));
                let response = ui.add_sized(
                    [input_width, 20.0],
                    egui::TextEdit::singleline(&mut self.end_text),
                );
                if response.changed() {
                    action = ControlPanelAction::FiltersChanged;
                }
            });
            if parse_input_date(&self.end_text).is_none() && enabled {
                ui.label(
                    RichText::new("Expected YYYY-MM-DD")
                        .size(10.0)
                        .color(Color32::from_rgb(220, 53, 69)),
                );
            }

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.add_sized([label_width, 20.0], egui::Label::new("Category:"));
                ComboBox::from_id_salt("category_filter")
                    .width(input_width)
                    .selected_text(&self.category)
                    .show_ui(ui, |ui| {
                        for option in selector_options(&self.categories) {
                            if ui
                                .selectable_label(self.category == option, &option)
                                .clicked()
                            {
                                self.category = option;
                                action = ControlPanelAction::FiltersChanged;
                            }
                        }
                    });
            });

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.add_sized([label_width, 20.0], egui::Label::new("Region:"));
                ComboBox::from_id_salt("region_filter")
                    .width(input_width)
                    .selected_text(&self.region)
                    .show_ui(ui, |ui| {
                        for option in selector_options(&self.regions) {
                            if ui
                                .selectable_label(self.region == option, &option)
                                .clicked()
                            {
                                self.region = option;
                                action = ControlPanelAction::FiltersChanged;
                            }
                        }
                    });
            });

            ui.add_space(10.0);

            if ui.button("Reset Filters").clicked() {
                action = ControlPanelAction::ResetFilters;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export =====
        ui.label(RichText::new("📥 Export").size(14.0).strong());
        ui.add_space(5.0);
        ui.add_enabled_ui(enabled, |ui| {
            if ui.button("Download Filtered Data").clicked() {
                action = ControlPanelAction::DownloadCsv;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);
        ui.label(RichText::new(&self.status).size(11.0).color(Color32::GRAY));

        action
    }
}

fn parse_input_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_INPUT_FORMAT).ok()
}

/// "All" followed by every distinct value.
fn selector_options(values: &[String]) -> Vec<String> {
    let mut options = Vec::with_capacity(values.len() + 1);
    options.push(ALL.to_string());
    options.extend(values.iter().cloned());
    options
}
