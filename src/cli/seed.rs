//! Handler for the `seed` command.

use serde_json::json;

use crate::cli::command::SeedArgs;
use crate::cli::output;
use crate::config::Config;
use crate::db;
use crate::domain::sample_sales;
use crate::error::Result;
use crate::store::{SalesStore, SqliteSalesStore};

/// Execute `seed`: reset the ledger to the fixed sample lots.
pub fn execute(args: &SeedArgs, config: &Config) -> Result<()> {
    let db_path = args.db.clone().unwrap_or_else(|| config.store.path.clone());

    let store = SqliteSalesStore::open(&db::database_url(&db_path))?;
    let inserted = store.seed(&sample_sales())?;

    if output::is_json() {
        output::json_output(json!({
            "command": "seed",
            "store": db_path.display().to_string(),
            "rows": inserted,
        }));
        return Ok(());
    }

    output::success("Ledger reset to the sample lots");
    output::field("Store", db_path.display());
    output::field("Rows", inserted);
    Ok(())
}
