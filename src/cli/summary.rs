//! Handler for the `summary` command.

use serde_json::json;

use crate::cli::command::SummaryArgs;
use crate::cli::output;
use crate::config::Config;
use crate::db;
use crate::error::Result;
use crate::report::table;
use crate::store::{SalesStore, SqliteSalesStore};

/// Execute `summary`: print the per-product table from the current ledger.
///
/// Connects without running migrations, so a ledger that was never seeded
/// reports a query error instead of being silently created empty. Quiet mode
/// suppresses the table but not the ledger read, so a broken store still
/// exits nonzero.
pub fn execute(args: &SummaryArgs, config: &Config) -> Result<()> {
    let db_path = args.db.clone().unwrap_or_else(|| config.store.path.clone());

    let store = SqliteSalesStore::connect(&db::database_url(&db_path))?;
    let summaries = store.summarize()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "summary",
            "store": db_path.display().to_string(),
            "summary": summaries,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::section("Sales Summary");
    output::lines(&table::format_summary(&summaries));

    if summaries.is_empty() {
        output::hint(&format!(
            "the ledger is empty; run {} to load the sample lots",
            output::highlight("tallyman seed")
        ));
    }

    Ok(())
}
