//! Pipeline composition for the sales report.
//!
//! One entry point sequences the three stages: seed the ledger, aggregate
//! it, render the revenue chart. Printing and viewer handoff stay with the
//! CLI handlers.

use std::path::Path;

use tracing::info;

use crate::domain::{sample_sales, ProductSummary};
use crate::error::Result;
use crate::report::chart;
use crate::store::SalesStore;

/// Seed the ledger, aggregate it, and render the revenue chart.
///
/// Returns the aggregate rows for the caller to print. The chart file is
/// written before this returns; opening it in a viewer is the caller's
/// concern.
///
/// # Errors
/// Propagates the first stage failure; later stages do not run.
pub fn generate<S: SalesStore>(store: &S, chart_path: &Path) -> Result<Vec<ProductSummary>> {
    let lots = sample_sales();
    let inserted = store.seed(&lots)?;
    info!(rows = inserted, "ledger seeded");

    let summaries = store.summarize()?;
    info!(products = summaries.len(), "ledger aggregated");

    chart::render(chart_path, &summaries)?;
    info!(path = %chart_path.display(), "chart rendered");

    Ok(summaries)
}
