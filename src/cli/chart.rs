//! Handler for the `chart` command.

use serde_json::json;

use crate::cli::command::ChartArgs;
use crate::cli::output;
use crate::config::Config;
use crate::db;
use crate::error::Result;
use crate::report::{chart, viewer};
use crate::store::{SalesStore, SqliteSalesStore};

/// Execute `chart`: render the revenue chart from the current ledger.
pub fn execute(args: &ChartArgs, config: &Config) -> Result<()> {
    let db_path = args.db.clone().unwrap_or_else(|| config.store.path.clone());
    let chart_path = args
        .chart
        .clone()
        .unwrap_or_else(|| config.report.chart_path.clone());

    let store = SqliteSalesStore::connect(&db::database_url(&db_path))?;
    let summaries = store.summarize()?;
    chart::render(&chart_path, &summaries)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "chart",
            "store": db_path.display().to_string(),
            "chart": chart_path.display().to_string(),
            "products": summaries.len(),
        }));
    } else {
        output::success(&format!("Chart saved to {}", chart_path.display()));
        output::field("Products", summaries.len());
    }

    if !args.no_open {
        viewer::open_chart(&chart_path);
    }

    Ok(())
}
