//! Chart Plotter Module
//! Draws the three dashboard charts with egui_plot: revenue by category
//! (bars), by region (horizontal bars) and by month (line with markers).

use egui::Color32;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::metrics::SalesSummary;

/// Chart colors, matching the dashboard styling.
pub const CATEGORY_COLOR: Color32 = Color32::from_rgb(37, 99, 235); // Blue
pub const REGION_COLOR: Color32 = Color32::from_rgb(16, 185, 129); // Green
pub const TREND_COLOR: Color32 = Color32::from_rgb(17, 24, 39); // Near-black

const BAR_WIDTH: f64 = 0.6;

/// Renders the dashboard charts. All charts degrade to an empty plot when the
/// filtered subset is empty.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Vertical bar chart of summed revenue per category.
    pub fn draw_category_chart(ui: &mut egui::Ui, summary: &SalesSummary, height: f32) {
        let labels: Vec<String> = summary.category_sales.keys().cloned().collect();
        let bars: Vec<Bar> = summary
            .category_sales
            .values()
            .enumerate()
            .map(|(i, &revenue)| Bar::new(i as f64, revenue).width(BAR_WIDTH))
            .collect();

        Plot::new("category_sales")
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_y(0.0)
            .y_axis_label("Revenue")
            .x_axis_formatter(move |mark, _range| index_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(CATEGORY_COLOR).name("Revenue"));
            });
    }

    /// Horizontal bar chart of summed revenue per region.
    pub fn draw_region_chart(ui: &mut egui::Ui, summary: &SalesSummary, height: f32) {
        let labels: Vec<String> = summary.region_sales.keys().cloned().collect();
        let bars: Vec<Bar> = summary
            .region_sales
            .values()
            .enumerate()
            .map(|(i, &revenue)| Bar::new(i as f64, revenue).width(BAR_WIDTH))
            .collect();

        Plot::new("region_sales")
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_x(0.0)
            .x_axis_label("Revenue")
            .y_axis_formatter(move |mark, _range| index_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .horizontal()
                        .color(REGION_COLOR)
                        .name("Revenue"),
                );
            });
    }

    /// Line chart of summed revenue per calendar month, chronological, with
    /// point markers.
    pub fn draw_monthly_chart(ui: &mut egui::Ui, summary: &SalesSummary, height: f32) {
        let labels: Vec<String> = summary
            .monthly_sales
            .keys()
            .map(|month| month.to_string())
            .collect();
        let points: Vec<[f64; 2]> = summary
            .monthly_sales
            .values()
            .enumerate()
            .map(|(i, &revenue)| [i as f64, revenue])
            .collect();

        Plot::new("monthly_sales")
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_y(0.0)
            .y_axis_label("Revenue")
            .x_axis_formatter(move |mark, _range| index_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(TREND_COLOR)
                        .width(2.0)
                        .name("Revenue"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(3.5)
                        .color(TREND_COLOR),
                );
            });
    }
}

/// Categorical axis tick label: the group name at integer positions, blank
/// elsewhere.
fn index_label(labels: &[String], value: f64) -> String {
    let idx = value.round() as usize;
    if (value - idx as f64).abs() < 1e-6 {
        labels.get(idx).cloned().unwrap_or_default()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_label_hits_integer_positions_only() {
        let labels = vec!["East".to_string(), "West".to_string()];
        assert_eq!(index_label(&labels, 0.0), "East");
        assert_eq!(index_label(&labels, 1.0), "West");
        assert_eq!(index_label(&labels, 0.5), "");
        assert_eq!(index_label(&labels, 7.0), "");
    }
}
