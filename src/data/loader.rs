//! CSV Data Loader Module
//! Reads the sales CSV with Polars, extracts typed order records and derives
//! the Revenue column. Loads are memoized per (path, mtime).

use chrono::NaiveDate;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use thiserror::Error;

use super::table::{OrderRecord, SalesTable};

/// Columns the source file must provide. Revenue is derived, never read.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "OrderID",
    "OrderDate",
    "Category",
    "Region",
    "Product",
    "Quantity",
    "Price",
];

/// Accepted OrderDate formats. A trailing time-of-day component is ignored.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%m/%d/%Y"];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Row {row}: invalid {column} value {value:?}")]
    BadValue {
        row: usize,
        column: String,
        value: String,
    },
    #[error("No data rows in file")]
    NoData,
}

/// Read and type the full table from a CSV file. Fatal on any I/O, schema or
/// parse problem; the caller surfaces the error and renders nothing.
pub fn read_table(path: &Path) -> Result<SalesTable, LoaderError> {
    let df = LazyCsvReader::new(path.to_string_lossy().to_string())
        .with_infer_schema_length(Some(10_000))
        .finish()?
        .collect()?;

    table_from_frame(&df)
}

/// Convert an inferred DataFrame into typed records.
fn table_from_frame(df: &DataFrame) -> Result<SalesTable, LoaderError> {
    for name in REQUIRED_COLUMNS {
        if df.column(name).is_err() {
            return Err(LoaderError::MissingColumn(name.to_string()));
        }
    }

    let ids = df.column("OrderID")?;
    let dates = df.column("OrderDate")?;
    let categories = df.column("Category")?;
    let regions = df.column("Region")?;
    let products = df.column("Product")?;
    let raw_quantities = df.column("Quantity")?;
    let raw_prices = df.column("Price")?;
    let quantities = raw_quantities.cast(&DataType::Float64)?;
    let quantities = quantities.f64()?;
    let prices = raw_prices.cast(&DataType::Float64)?;
    let prices = prices.f64()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        // Header occupies line 1 of the file.
        let row = i + 2;

        let order_id =
            cell_text(ids, i).ok_or_else(|| bad_value(row, "OrderID", None))?;
        let raw_date =
            cell_text(dates, i).ok_or_else(|| bad_value(row, "OrderDate", None))?;
        let order_date = parse_order_date(&raw_date)
            .ok_or_else(|| bad_value(row, "OrderDate", Some(raw_date.clone())))?;
        let category =
            cell_text(categories, i).ok_or_else(|| bad_value(row, "Category", None))?;
        let region =
            cell_text(regions, i).ok_or_else(|| bad_value(row, "Region", None))?;
        let product =
            cell_text(products, i).ok_or_else(|| bad_value(row, "Product", None))?;
        let quantity = quantities
            .get(i)
            .filter(|v| v.is_finite())
            .ok_or_else(|| bad_value(row, "Quantity", cell_text(raw_quantities, i)))?;
        let price = prices
            .get(i)
            .filter(|v| v.is_finite())
            .ok_or_else(|| bad_value(row, "Price", cell_text(raw_prices, i)))?;

        records.push(OrderRecord::new(
            order_id, order_date, category, region, product, quantity, price,
        ));
    }

    SalesTable::from_records(records).ok_or(LoaderError::NoData)
}

fn bad_value(row: usize, column: &str, value: Option<String>) -> LoaderError {
    LoaderError::BadValue {
        row,
        column: column.to_string(),
        value: value.unwrap_or_default(),
    }
}

/// Non-null cell rendered as plain text.
fn cell_text(col: &Column, i: usize) -> Option<String> {
    let val = col.get(i).ok()?;
    if val.is_null() {
        None
    } else {
        Some(val.to_string().trim_matches('"').to_string())
    }
}

/// Parse an OrderDate cell, trying each supported format in turn.
fn parse_order_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().split_whitespace().next()?;
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(head, fmt).ok())
}

struct CacheEntry {
    path: PathBuf,
    modified: Option<SystemTime>,
    table: Arc<SalesTable>,
}

/// Memoized table loader keyed on file path and modification time. An
/// unchanged file is parsed once per process; a touched file reloads.
#[derive(Default)]
pub struct DataLoader {
    cached: Option<CacheEntry>,
}

impl DataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table at `path`, reusing the cached copy when the file has
    /// not changed since the previous load.
    pub fn load(&mut self, path: &Path) -> Result<Arc<SalesTable>, LoaderError> {
        let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok();

        if let Some(entry) = &self.cached {
            if entry.path == path && entry.modified == modified && modified.is_some() {
                return Ok(Arc::clone(&entry.table));
            }
        }

        let table = Arc::new(read_table(path)?);
        self.cached = Some(CacheEntry {
            path: path.to_path_buf(),
            modified,
            table: Arc::clone(&table),
        });
        Ok(table)
    }

    /// Most recently loaded table, if any.
    pub fn table(&self) -> Option<Arc<SalesTable>> {
        self.cached.as_ref().map(|entry| Arc::clone(&entry.table))
    }

    /// Drop the cached table, e.g. after a failed reload.
    pub fn clear(&mut self) {
        self.cached = None;
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.cached.as_ref().map(|entry| entry.path.as_path())
    }
}
