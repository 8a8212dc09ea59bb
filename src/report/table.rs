//! Tabular rendering of the sales summary.

use tabled::{Table, Tabled};

use crate::domain::ProductSummary;

/// Table row for one product summary line.
#[derive(Tabled)]
struct SummaryLine {
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Total Qty")]
    total_quantity: i64,
    #[tabled(rename = "Revenue")]
    revenue: String,
}

impl From<&ProductSummary> for SummaryLine {
    fn from(row: &ProductSummary) -> Self {
        Self {
            product: row.product.clone(),
            total_quantity: row.total_quantity,
            revenue: format!("{:.2}", row.revenue),
        }
    }
}

/// Render the per-product summary as a text table.
#[must_use]
pub fn format_summary(rows: &[ProductSummary]) -> String {
    let lines: Vec<SummaryLine> = rows.iter().map(SummaryLine::from).collect();
    Table::new(lines).to_string()
}
