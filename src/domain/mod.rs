//! Store-agnostic domain types for the sales ledger.

mod sales;

pub use sales::{sample_sales, ProductSummary, SaleRecord};
