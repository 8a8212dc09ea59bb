//! Command-line interface definitions.

pub mod chart;
pub mod command;
pub mod output;
pub mod paths;
pub mod run;
pub mod seed;
pub mod summary;
