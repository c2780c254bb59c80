//! Order Record Table
//! Typed in-memory representation of the loaded sales dataset.

use chrono::NaiveDate;

/// One row of the source table: a single product line item within an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub order_id: String,
    pub order_date: NaiveDate,
    pub category: String,
    pub region: String,
    pub product: String,
    pub quantity: f64,
    pub price: f64,
    /// Derived at load time, never read from the source file.
    pub revenue: f64,
}

impl OrderRecord {
    pub fn new(
        order_id: String,
        order_date: NaiveDate,
        category: String,
        region: String,
        product: String,
        quantity: f64,
        price: f64,
    ) -> Self {
        Self {
            order_id,
            order_date,
            category,
            region,
            product,
            quantity,
            price,
            revenue: quantity * price,
        }
    }
}

/// The full loaded table. Immutable after construction; always non-empty.
///
/// Distinct category/region lists and the overall date span are precomputed
/// once so the filter widgets can populate without rescanning rows.
#[derive(Debug, Clone)]
pub struct SalesTable {
    records: Vec<OrderRecord>,
    categories: Vec<String>,
    regions: Vec<String>,
    date_min: NaiveDate,
    date_max: NaiveDate,
}

impl SalesTable {
    /// Build a table from loaded records. Returns `None` for an empty set,
    /// which the loader reports as a load error.
    pub fn from_records(records: Vec<OrderRecord>) -> Option<Self> {
        let first = records.first()?;
        let mut date_min = first.order_date;
        let mut date_max = first.order_date;

        let mut categories: Vec<String> = Vec::new();
        let mut regions: Vec<String> = Vec::new();

        for record in &records {
            date_min = date_min.min(record.order_date);
            date_max = date_max.max(record.order_date);
            if !categories.contains(&record.category) {
                categories.push(record.category.clone());
            }
            if !regions.contains(&record.region) {
                regions.push(record.region.clone());
            }
        }

        categories.sort();
        regions.sort();

        Some(Self {
            records,
            categories,
            regions,
            date_min,
            date_max,
        })
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Distinct regions, sorted.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Earliest and latest order date present in the data.
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        (self.date_min, self.date_max)
    }
}
