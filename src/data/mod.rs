//! Data module - loading, filtering and export of the order table

pub mod export;
pub mod filter;
pub mod loader;
mod table;

pub use filter::{FilterCriteria, ALL};
pub use loader::{DataLoader, LoaderError};
pub use table::{OrderRecord, SalesTable};
