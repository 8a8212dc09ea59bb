//! Sales ledger domain types.
//!
//! DTOs for seeding the ledger and carrying aggregate results.

use serde::Serialize;

/// A single sales lot to be recorded in the ledger.
///
/// Products repeat across lots by design; quantity and price are per lot.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub product: String,
    pub quantity: i32,
    pub price: f64,
}

impl SaleRecord {
    /// Create a record for one lot of a product.
    #[must_use]
    pub fn new(product: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            product: product.into(),
            quantity,
            price,
        }
    }
}

/// Aggregated quantity and revenue for one product.
///
/// `revenue` is the sum of `quantity * price` over the product's lots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub product: String,
    pub total_quantity: i64,
    pub revenue: f64,
}

/// The fixed sample lots used to seed the ledger.
///
/// Six lots across three products; the same batch is inserted on every
/// seeding run.
#[must_use]
pub fn sample_sales() -> Vec<SaleRecord> {
    vec![
        SaleRecord::new("Apples", 10, 2.5),
        SaleRecord::new("Apples", 5, 2.5),
        SaleRecord::new("Bananas", 8, 1.2),
        SaleRecord::new("Bananas", 12, 1.2),
        SaleRecord::new("Cherries", 3, 5.0),
        SaleRecord::new("Cherries", 6, 5.0),
    ]
}
