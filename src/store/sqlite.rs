//! SQLite sales store implementation.
//!
//! Provides persistent storage for sales lots using SQLite and Diesel ORM.

use diesel::prelude::*;

use crate::db::model::{NewSaleRow, ProductSummaryRow};
use crate::db::schema::sales;
use crate::db::{create_pool, run_migrations, DbPool};
use crate::domain::{ProductSummary, SaleRecord};
use crate::error::{Error, Result};
use crate::store::SalesStore;

/// Per-product aggregation over the ledger.
///
/// The mixed-type `SUM(quantity * price)` is expressed as raw SQL; the
/// explicit ORDER BY keeps repeated runs byte-identical.
const SUMMARY_QUERY: &str = "SELECT product, \
     SUM(quantity) AS total_quantity, \
     SUM(quantity * price) AS revenue \
     FROM sales GROUP BY product ORDER BY product";

/// SQLite-backed sales store.
///
/// Implements the [`SalesStore`] trait over a pooled SQLite connection.
pub struct SqliteSalesStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteSalesStore {
    /// Create a new SQLite sales store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open a store at the given database URL, applying migrations.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be created or migrations fail.
    pub fn open(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url)?;
        run_migrations(&pool)?;
        Ok(Self::new(pool))
    }

    /// Connect to a store at the given database URL without touching schema.
    ///
    /// Reads against a store whose table was never created fail with
    /// [`Error::Query`].
    ///
    /// # Errors
    /// Returns an error if the pool cannot be created.
    pub fn connect(database_url: &str) -> Result<Self> {
        Ok(Self::new(create_pool(database_url)?))
    }

    fn to_row(record: &SaleRecord) -> NewSaleRow {
        NewSaleRow {
            product: record.product.clone(),
            quantity: record.quantity,
            price: record.price,
        }
    }

    fn from_row(row: ProductSummaryRow) -> ProductSummary {
        ProductSummary {
            product: row.product,
            total_quantity: row.total_quantity,
            revenue: row.revenue,
        }
    }
}

impl SalesStore for SqliteSalesStore {
    fn seed(&self, records: &[SaleRecord]) -> Result<usize> {
        let rows: Vec<NewSaleRow> = records.iter().map(Self::to_row).collect();
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        // Clear and reinsert atomically so a reseed never half-applies.
        conn.transaction(|conn| {
            diesel::delete(sales::table).execute(conn)?;
            diesel::insert_into(sales::table)
                .values(&rows)
                .execute(conn)
        })
        .map_err(|e| Error::Database(e.to_string()))
    }

    fn summarize(&self) -> Result<Vec<ProductSummary>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<ProductSummaryRow> = diesel::sql_query(SUMMARY_QUERY)
            .load(&mut conn)
            .map_err(|e| Error::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    fn count(&self) -> Result<i64> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        sales::table
            .count()
            .get_result(&mut conn)
            .map_err(|e| Error::Query(e.to_string()))
    }
}
