//! Dashboard View
//! The explicit render step: filter state in, display-ready data out. The GUI
//! rebuilds this from scratch on every filter change and never recomputes
//! implicitly.

use polars::prelude::PolarsError;

use crate::data::{export, FilterCriteria, OrderRecord, SalesTable};
use crate::metrics::SalesSummary;

/// Everything one filter evaluation produces: the criteria it was built from,
/// the filtered rows and their aggregates.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub criteria: FilterCriteria,
    pub rows: Vec<OrderRecord>,
    pub summary: SalesSummary,
}

impl DashboardView {
    /// Pure function of the loaded table and the current filter state.
    pub fn build(table: &SalesTable, criteria: &FilterCriteria) -> Self {
        let rows = criteria.apply(table);
        let summary = SalesSummary::compute(&rows);
        Self {
            criteria: criteria.clone(),
            rows,
            summary,
        }
    }

    /// The filtered subset as downloadable CSV bytes.
    pub fn csv_bytes(&self) -> Result<Vec<u8>, PolarsError> {
        export::to_csv_bytes(&self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ALL;
    use crate::metrics::NO_DATA;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn two_row_table() -> SalesTable {
        let rows = vec![
            OrderRecord::new(
                "O1".into(),
                date(2024, 1, 5),
                "A".into(),
                "East".into(),
                "Widget".into(),
                2.0,
                10.0,
            ),
            OrderRecord::new(
                "O2".into(),
                date(2024, 1, 10),
                "B".into(),
                "West".into(),
                "Gadget".into(),
                1.0,
                50.0,
            ),
        ];
        SalesTable::from_records(rows).unwrap()
    }

    #[test]
    fn single_day_window_selects_one_order() {
        let table = two_row_table();
        let criteria = FilterCriteria {
            start_date: date(2024, 1, 5),
            end_date: date(2024, 1, 5),
            category: ALL.into(),
            region: ALL.into(),
        };
        let view = DashboardView::build(&table, &criteria);

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].order_id, "O1");
        assert_eq!(view.summary.total_revenue, 20.0);
        assert_eq!(view.summary.total_orders, 1);
        assert_eq!(view.summary.top_product, "Widget");
    }

    #[test]
    fn window_before_all_orders_is_empty_everywhere() {
        let table = two_row_table();
        let criteria = FilterCriteria {
            start_date: date(2023, 1, 1),
            end_date: date(2023, 12, 31),
            category: ALL.into(),
            region: ALL.into(),
        };
        let view = DashboardView::build(&table, &criteria);

        assert!(view.rows.is_empty());
        assert_eq!(view.summary.total_revenue, 0.0);
        assert_eq!(view.summary.total_orders, 0);
        assert_eq!(view.summary.top_product, NO_DATA);

        let text = String::from_utf8(view.csv_bytes().unwrap()).unwrap();
        assert_eq!(text.trim_end().lines().count(), 1);
    }
}
