//! Report rendering: summary table, revenue chart, viewer handoff.

pub mod chart;
pub mod table;
pub mod viewer;
