//! Salesboard - E-Commerce Sales Dashboard
//!
//! A Rust application for filtering e-commerce order data and viewing
//! revenue KPIs and charts.

mod charts;
mod data;
mod gui;
mod metrics;
mod report;

use eframe::egui;
use gui::DashboardApp;

fn main() -> eframe::Result<()> {
    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1000.0, 650.0])
            .with_title("E-Commerce Sales Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "E-Commerce Sales Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
