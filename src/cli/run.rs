//! Handler for the `run` command.

use serde_json::json;

use crate::app;
use crate::cli::command::RunArgs;
use crate::cli::output;
use crate::config::Config;
use crate::db;
use crate::error::Result;
use crate::report::{table, viewer};
use crate::store::SqliteSalesStore;

/// Execute the full report pipeline: reseed, summarize, print, chart.
pub fn execute(args: &RunArgs, config: &Config) -> Result<()> {
    let db_path = args.db.clone().unwrap_or_else(|| config.store.path.clone());
    let chart_path = args
        .chart
        .clone()
        .unwrap_or_else(|| config.report.chart_path.clone());

    let store = SqliteSalesStore::open(&db::database_url(&db_path))?;
    let summaries = app::generate(&store, &chart_path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "run",
            "store": db_path.display().to_string(),
            "chart": chart_path.display().to_string(),
            "summary": summaries,
        }));
    } else {
        output::header(env!("CARGO_PKG_VERSION"));
        output::field("Store", db_path.display());
        if output::verbosity() > 0 {
            output::field("Products", summaries.len());
        }
        output::section("Sales Summary");
        output::lines(&table::format_summary(&summaries));
        output::success(&format!("Chart saved to {}", chart_path.display()));
    }

    if !args.no_open {
        viewer::open_chart(&chart_path);
    }

    Ok(())
}
