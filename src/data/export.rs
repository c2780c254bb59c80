//! Filtered Subset Export
//! Serializes the filtered rows back to delimited text, header row included,
//! same column order as the loaded table plus the derived Revenue column.

use polars::prelude::*;

use super::table::OrderRecord;

/// Default file name offered for the download action.
pub const EXPORT_FILE_NAME: &str = "filtered_sales_data.csv";

/// Serialize rows to UTF-8 CSV bytes. An empty subset produces the header
/// row only.
pub fn to_csv_bytes(rows: &[OrderRecord]) -> Result<Vec<u8>, PolarsError> {
    let mut df = frame_from_rows(rows)?;
    let mut buf: Vec<u8> = Vec::new();
    CsvWriter::new(&mut buf)
        .include_header(true)
        .finish(&mut df)?;
    Ok(buf)
}

fn frame_from_rows(rows: &[OrderRecord]) -> Result<DataFrame, PolarsError> {
    let order_ids: Vec<String> = rows.iter().map(|r| r.order_id.clone()).collect();
    let order_dates: Vec<String> = rows
        .iter()
        .map(|r| r.order_date.format("%Y-%m-%d").to_string())
        .collect();
    let categories: Vec<String> = rows.iter().map(|r| r.category.clone()).collect();
    let regions: Vec<String> = rows.iter().map(|r| r.region.clone()).collect();
    let products: Vec<String> = rows.iter().map(|r| r.product.clone()).collect();
    let quantities: Vec<f64> = rows.iter().map(|r| r.quantity).collect();
    let prices: Vec<f64> = rows.iter().map(|r| r.price).collect();
    let revenues: Vec<f64> = rows.iter().map(|r| r.revenue).collect();

    DataFrame::new(vec![
        Column::new("OrderID".into(), order_ids),
        Column::new("OrderDate".into(), order_dates),
        Column::new("Category".into(), categories),
        Column::new("Region".into(), regions),
        Column::new("Product".into(), products),
        Column::new("Quantity".into(), quantities),
        Column::new("Price".into(), prices),
        Column::new("Revenue".into(), revenues),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_table;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_rows() -> Vec<OrderRecord> {
        vec![
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
                50.5,
            ),
        ]
    }

    #[test]
    fn empty_subset_exports_header_only() {
        let bytes = to_csv_bytes(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text.trim_end(),
            "OrderID,OrderDate,Category,Region,Product,Quantity,Price,Revenue"
        );
    }

    #[test]
    fn export_contains_one_line_per_row_plus_header() {
        let bytes = to_csv_bytes(&sample_rows()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.trim_end().lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("O1,2024-01-05,A,East,Widget,"));
    }

    #[test]
    fn export_round_trips_through_the_loader() {
        let rows = sample_rows();
        let bytes = to_csv_bytes(&rows).unwrap();

        let path: PathBuf = std::env::temp_dir().join(format!(
            "salesboard_export_roundtrip_{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, &bytes).unwrap();

        let reloaded = read_table(&path).unwrap();
        assert_eq!(reloaded.records(), rows.as_slice());
    }
}
