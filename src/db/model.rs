//! Database model types for Diesel ORM.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Text};

use super::schema::sales;

/// Database row for a sales lot (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = sales)]
pub struct NewSaleRow {
    pub product: String,
    pub quantity: i32,
    pub price: f64,
}

/// Result row for the per-product summary query.
///
/// Loaded via `sql_query`. SUM over a non-empty group never yields NULL,
/// so the fields are non-nullable.
#[derive(QueryableByName, Debug, Clone)]
pub struct ProductSummaryRow {
    #[diesel(sql_type = Text)]
    pub product: String,
    #[diesel(sql_type = BigInt)]
    pub total_quantity: i64,
    #[diesel(sql_type = Double)]
    pub revenue: f64,
}
