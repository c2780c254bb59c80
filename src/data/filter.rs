//! Filter Stage
//! Row selection by date interval, category and region. "All" disables a
//! criterion.

use chrono::NaiveDate;

use super::table::{OrderRecord, SalesTable};

/// Sentinel selector value meaning "criterion inactive".
pub const ALL: &str = "All";

/// The three user-selected filter criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: String,
    pub region: String,
}

impl FilterCriteria {
    /// Defaults: the table's full date span, both selectors inactive.
    pub fn full_range(table: &SalesTable) -> Self {
        let (start_date, end_date) = table.date_range();
        Self {
            start_date,
            end_date,
            category: ALL.to_string(),
            region: ALL.to_string(),
        }
    }

    /// Whether a single row satisfies every active criterion. Date bounds are
    /// inclusive on both ends.
    pub fn matches(&self, record: &OrderRecord) -> bool {
        record.order_date >= self.start_date
            && record.order_date <= self.end_date
            && (self.category == ALL || record.category == self.category)
            && (self.region == ALL || record.region == self.region)
    }

    /// Select the subset of rows satisfying all active criteria. An inverted
    /// interval (start > end) yields an empty subset; no swap, no error.
    pub fn apply(&self, table: &SalesTable) -> Vec<OrderRecord> {
        table
            .records()
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_table() -> SalesTable {
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
            OrderRecord::new(
                "O3".into(),
                date(2024, 2, 1),
                "A".into(),
                "West".into(),
                "Widget".into(),
                4.0,
                10.0,
            ),
        ];
        SalesTable::from_records(rows).unwrap()
    }

    #[test]
    fn full_range_defaults_are_inactive() {
        let table = sample_table();
        let criteria = FilterCriteria::full_range(&table);
        assert_eq!(criteria.start_date, date(2024, 1, 5));
        assert_eq!(criteria.end_date, date(2024, 2, 1));
        assert_eq!(criteria.category, ALL);
        assert_eq!(criteria.region, ALL);
        assert_eq!(criteria.apply(&table).len(), 3);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let table = sample_table();
        let criteria = FilterCriteria {
            start_date: date(2024, 1, 5),
            end_date: date(2024, 1, 10),
            category: ALL.into(),
            region: ALL.into(),
        };
        let rows = criteria.apply(&table);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| criteria.matches(r)));
    }

    #[test]
    fn category_and_region_are_conjunctive() {
        let table = sample_table();
        let criteria = FilterCriteria {
            start_date: date(2024, 1, 1),
            end_date: date(2024, 12, 31),
            category: "A".into(),
            region: "West".into(),
        };
        let rows = criteria.apply(&table);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].order_id, "O3");
    }

    #[test]
    fn all_category_imposes_no_restriction() {
        let table = sample_table();
        let date_only = FilterCriteria {
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 31),
            category: ALL.into(),
            region: ALL.into(),
        };
        let rows = date_only.apply(&table);
        let mut categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        categories.sort();
        categories.dedup();
        assert_eq!(categories, vec!["A", "B"]);
    }

    #[test]
    fn inverted_interval_yields_empty_subset() {
        let table = sample_table();
        let criteria = FilterCriteria {
            start_date: date(2024, 2, 1),
            end_date: date(2024, 1, 1),
            category: ALL.into(),
            region: ALL.into(),
        };
        assert!(criteria.apply(&table).is_empty());
    }

    #[test]
    fn filtered_rows_are_a_subset_of_the_table() {
        let table = sample_table();
        let criteria = FilterCriteria {
            start_date: date(2024, 1, 1),
            end_date: date(2024, 12, 31),
            category: "A".into(),
            region: ALL.into(),
        };
        for row in criteria.apply(&table) {
            assert!(table.records().contains(&row));
        }
    }
}
