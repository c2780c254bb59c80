//! Dashboard Panel
//! Central display: KPI row, the two grouped bar charts side by side and the
//! collapsible monthly trend.

use egui::{Color32, CollapsingHeader, RichText};
use num_format::{Locale, ToFormattedString};

use crate::charts::ChartPlotter;
use crate::report::DashboardView;

const CHART_HEIGHT: f32 = 220.0;
const TREND_HEIGHT: f32 = 200.0;

/// Central dashboard widget.
pub struct DashboardPanel;

impl DashboardPanel {
    pub fn show(ui: &mut egui::Ui, view: Option<&DashboardView>) {
        ui.add_space(5.0);
        ui.heading("E-Commerce Sales Dashboard");
        ui.label(
            RichText::new("Professional dashboard for e-commerce sales insights")
                .size(12.0)
                .color(Color32::GRAY),
        );
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        let Some(view) = view else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Load a sales CSV to get started").size(18.0));
            });
            return;
        };

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::draw_kpi_row(ui, view);

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.columns(2, |columns| {
                    columns[0].label(RichText::new("Revenue by Category").size(14.0).strong());
                    ChartPlotter::draw_category_chart(
                        &mut columns[0],
                        &view.summary,
                        CHART_HEIGHT,
                    );

                    columns[1].label(RichText::new("Revenue by Region").size(14.0).strong());
                    ChartPlotter::draw_region_chart(&mut columns[1], &view.summary, CHART_HEIGHT);
                });

                ui.add_space(10.0);

                CollapsingHeader::new("Monthly Revenue Trend")
                    .default_open(true)
                    .show(ui, |ui| {
                        ChartPlotter::draw_monthly_chart(ui, &view.summary, TREND_HEIGHT);
                    });

                ui.add_space(15.0);
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "{} rows in current selection · Built with Rust, Polars & egui",
                        view.rows.len()
                    ))
                    .size(10.0)
                    .color(Color32::GRAY),
                );
            });
    }

    fn draw_kpi_row(ui: &mut egui::Ui, view: &DashboardView) {
        ui.columns(3, |columns| {
            Self::kpi_card(
                &mut columns[0],
                "Total Revenue",
                &format_currency(view.summary.total_revenue),
            );
            Self::kpi_card(
                &mut columns[1],
                "Total Orders",
                &(view.summary.total_orders as i64).to_formatted_string(&Locale::en),
            );
            Self::kpi_card(&mut columns[2], "Top Product", &view.summary.top_product);
        });
    }

    fn kpi_card(ui: &mut egui::Ui, title: &str, value: &str) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(title).size(12.0).color(Color32::GRAY));
                    ui.label(RichText::new(value).size(20.0).strong());
                });
            });
    }
}

/// "₹1,234,567.89" - thousands-separated with two decimals.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let value = value.abs();
    let whole = value.trunc() as i64;
    let cents = ((value - value.trunc()) * 100.0).round() as i64;
    // Carry when the fraction rounds up to a whole unit.
    let (whole, cents) = if cents >= 100 {
        (whole + 1, 0)
    } else {
        (whole, cents)
    };
    format!(
        "{}₹{}.{:02}",
        if negative { "-" } else { "" },
        whole.to_formatted_string(&Locale::en),
        cents
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_is_grouped_with_two_decimals() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(20.0), "₹20.00");
        assert_eq!(format_currency(1234567.5), "₹1,234,567.50");
        assert_eq!(format_currency(999.999), "₹1,000.00");
    }
}
