//! Path utilities for tallyman.
//!
//! All artifacts live in the working directory:
//! - `tallyman.toml` - main configuration
//! - `sales_data.db` - sales ledger database
//! - `sales_chart.svg` - rendered revenue chart

use std::path::PathBuf;

/// Returns the default config file path (`tallyman.toml`).
pub fn default_config() -> PathBuf {
    PathBuf::from("tallyman.toml")
}
