//! Tallyman - Sales ledger seeding and revenue reporting.
//!
//! This crate seeds a local SQLite ledger with a fixed batch of sample
//! sales lots, aggregates quantity and revenue per product, prints the
//! result as a table, and renders a revenue bar chart to an SVG file.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Store-agnostic types: sales lots and per-product summaries
//! - [`error`] - Error types for the crate
//! - [`db`] - Connection pooling and embedded schema migrations
//! - [`store`] - Sales store trait and its SQLite implementation
//! - [`report`] - Table formatting, chart rendering, and viewer handoff
//! - [`app`] - Pipeline composition
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tallyman::app;
//! use tallyman::store::SqliteSalesStore;
//!
//! # fn main() -> tallyman::error::Result<()> {
//! let store = SqliteSalesStore::open("sqlite://sales_data.db")?;
//! let summaries = app::generate(&store, Path::new("sales_chart.svg"))?;
//! assert_eq!(summaries.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod report;
pub mod store;
