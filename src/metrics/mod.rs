//! Metrics module - aggregations over the filtered subset

mod summary;

pub use summary::{Month, SalesSummary, NO_DATA};
