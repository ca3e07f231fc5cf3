// trolley_api/src/db/mod.rs

//! Postgres access. Runtime-checked queries only, so the crate builds without
//! a live database.

pub mod carts;
pub mod items;
pub mod users;

use sqlx::PgPool;
use tracing::{info, instrument};

const SCHEMA_SQL: &str = include_str!("../../schema.sql");

/// Creates the tables if they are missing.
#[instrument(name = "db::apply_schema", skip(pool), err(Display))]
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
  sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
  info!("Database schema applied.");
  Ok(())
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
  err
    .as_database_error()
    .map(|db_err| db_err.is_unique_violation())
    .unwrap_or(false)
}
