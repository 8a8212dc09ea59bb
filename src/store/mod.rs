//! Persistence seam for the sales ledger.

pub mod sqlite;

pub use sqlite::SqliteSalesStore;

use crate::domain::{ProductSummary, SaleRecord};
use crate::error::Result;

/// Storage operations for the sales ledger.
pub trait SalesStore: Send + Sync {
    /// Replace the ledger contents with the given lots. Returns rows inserted.
    fn seed(&self, records: &[SaleRecord]) -> Result<usize>;

    /// Aggregate quantity and revenue per product, ordered by product.
    fn summarize(&self) -> Result<Vec<ProductSummary>>;

    /// Count rows currently in the ledger.
    fn count(&self) -> Result<i64>;
}
