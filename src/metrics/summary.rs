//! Aggregation Stage
//! Pure reductions over the filtered subset: revenue total, distinct order
//! count, top product and the three grouped revenue breakdowns.

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::data::OrderRecord;

/// Sentinel shown when the filtered subset is empty.
pub const NO_DATA: &str = "No data";

/// Calendar month key, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// All aggregates the dashboard displays, computed in one pass over the
/// filtered rows.
#[derive(Debug, Clone)]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub total_orders: usize,
    pub top_product: String,
    pub category_sales: BTreeMap<String, f64>,
    pub region_sales: BTreeMap<String, f64>,
    pub monthly_sales: BTreeMap<Month, f64>,
}

impl Default for SalesSummary {
    fn default() -> Self {
        Self {
            total_revenue: 0.0,
            total_orders: 0,
            top_product: NO_DATA.to_string(),
            category_sales: BTreeMap::new(),
            region_sales: BTreeMap::new(),
            monthly_sales: BTreeMap::new(),
        }
    }
}

impl SalesSummary {
    pub fn compute(rows: &[OrderRecord]) -> Self {
        let mut total_revenue = 0.0;
        let mut order_ids: BTreeSet<&str> = BTreeSet::new();
        let mut product_sales: BTreeMap<&str, f64> = BTreeMap::new();
        let mut category_sales: BTreeMap<String, f64> = BTreeMap::new();
        let mut region_sales: BTreeMap<String, f64> = BTreeMap::new();
        let mut monthly_sales: BTreeMap<Month, f64> = BTreeMap::new();

        for row in rows {
            total_revenue += row.revenue;
            order_ids.insert(row.order_id.as_str());
            *product_sales.entry(row.product.as_str()).or_insert(0.0) += row.revenue;
            *category_sales.entry(row.category.clone()).or_insert(0.0) += row.revenue;
            *region_sales.entry(row.region.clone()).or_insert(0.0) += row.revenue;
            *monthly_sales.entry(Month::of(row.order_date)).or_insert(0.0) += row.revenue;
        }

        // Ties go to the lexicographically smallest product name: the map
        // iterates in key order and a later entry only wins when strictly
        // greater.
        let mut top: Option<(&str, f64)> = None;
        for (name, revenue) in &product_sales {
            match top {
                Some((_, best)) if *revenue <= best => {}
                _ => top = Some((name, *revenue)),
            }
        }

        Self {
            total_revenue,
            total_orders: order_ids.len(),
            top_product: top
                .map(|(name, _)| name.to_string())
                .unwrap_or_else(|| NO_DATA.to_string()),
            category_sales,
            region_sales,
            monthly_sales,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: &str, d: NaiveDate, cat: &str, reg: &str, prod: &str, qty: f64, price: f64) -> OrderRecord {
        OrderRecord::new(id.into(), d, cat.into(), reg.into(), prod.into(), qty, price)
    }

    #[test]
    fn empty_subset_degrades_to_zeros_and_sentinel() {
        let summary = SalesSummary::compute(&[]);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.top_product, NO_DATA);
        assert!(summary.category_sales.is_empty());
        assert!(summary.region_sales.is_empty());
        assert!(summary.monthly_sales.is_empty());
    }

    #[test]
    fn totals_and_groupings() {
        let rows = vec![
            record("O1", date(2024, 1, 5), "A", "East", "Widget", 2.0, 10.0),
            record("O1", date(2024, 1, 6), "B", "East", "Gadget", 1.0, 30.0),
            record("O2", date(2024, 2, 1), "A", "West", "Widget", 1.0, 10.0),
        ];
        let summary = SalesSummary::compute(&rows);

        assert_eq!(summary.total_revenue, 60.0);
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.top_product, "Gadget");
        assert_eq!(summary.category_sales.get("A"), Some(&30.0));
        assert_eq!(summary.category_sales.get("B"), Some(&30.0));
        assert_eq!(summary.region_sales.get("East"), Some(&50.0));
        assert_eq!(summary.region_sales.get("West"), Some(&10.0));
    }

    #[test]
    fn top_product_tie_breaks_lexicographically() {
        let rows = vec![
            record("O1", date(2024, 1, 5), "A", "East", "Zebra", 1.0, 40.0),
            record("O2", date(2024, 1, 6), "A", "East", "Anvil", 2.0, 20.0),
        ];
        let summary = SalesSummary::compute(&rows);
        assert_eq!(summary.top_product, "Anvil");
    }

    #[test]
    fn monthly_sales_are_chronological_across_years() {
        let rows = vec![
            record("O1", date(2024, 2, 10), "A", "East", "W", 1.0, 5.0),
            record("O2", date(2023, 12, 1), "A", "East", "W", 1.0, 7.0),
            record("O3", date(2024, 1, 20), "A", "East", "W", 1.0, 3.0),
            record("O4", date(2024, 1, 25), "A", "East", "W", 1.0, 1.0),
        ];
        let summary = SalesSummary::compute(&rows);

        let labels: Vec<String> = summary
            .monthly_sales
            .keys()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(labels, vec!["2023-12", "2024-01", "2024-02"]);

        let totals: Vec<f64> = summary.monthly_sales.values().copied().collect();
        assert_eq!(totals, vec![7.0, 4.0, 5.0]);
    }

    #[test]
    fn distinct_order_count_ignores_duplicates() {
        let rows = vec![
            record("O1", date(2024, 1, 5), "A", "East", "W", 1.0, 1.0),
            record("O1", date(2024, 1, 5), "A", "East", "X", 1.0, 1.0),
            record("O1", date(2024, 1, 6), "B", "West", "Y", 1.0, 1.0),
        ];
        assert_eq!(SalesSummary::compute(&rows).total_orders, 1);
    }
}
