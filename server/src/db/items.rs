// trolley_api/src/db/items.rs

use crate::errors::{AppError, Result};
use crate::models::{Item, ItemPatch, NewItem};
use sqlx::PgPool;
use uuid::Uuid;

const ITEM_COLUMNS: &str = "id, name, description, price, created_at, updated_at";

pub async fn insert(pool: &PgPool, item: &NewItem) -> Result<Item> {
  let created = sqlx::query_as::<_, Item>(&format!(
    "INSERT INTO items (id, name, description, price) VALUES ($1, $2, $3, $4) RETURNING {}",
    ITEM_COLUMNS
  ))
  .bind(Uuid::new_v4())
  .bind(&item.name)
  .bind(&item.description)
  .bind(item.price)
  .fetch_one(pool)
  .await?;
  Ok(created)
}

pub async fn list(pool: &PgPool) -> Result<Vec<Item>> {
  let items = sqlx::query_as::<_, Item>(&format!("SELECT {} FROM items ORDER BY name ASC, id ASC", ITEM_COLUMNS))
    .fetch_all(pool)
    .await?;
  Ok(items)
}

pub async fn count(pool: &PgPool) -> Result<i64> {
  let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items").fetch_one(pool).await?;
  Ok(count)
}

pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Item>> {
  let item = sqlx::query_as::<_, Item>(&format!("SELECT {} FROM items WHERE id = $1", ITEM_COLUMNS))
    .bind(id)
    .fetch_optional(pool)
    .await?;
  Ok(item)
}

pub async fn patch(pool: &PgPool, id: Uuid, patch: &ItemPatch) -> Result<()> {
  let result = sqlx::query(
    "UPDATE items SET name = COALESCE($2, name), description = COALESCE($3, description), \
     price = COALESCE($4, price), updated_at = NOW() WHERE id = $1",
  )
  .bind(id)
  .bind(&patch.name)
  .bind(&patch.description)
  .bind(patch.price)
  .execute(pool)
  .await?;
  ensure_touched(result.rows_affected(), id)
}

pub async fn replace(pool: &PgPool, id: Uuid, item: &NewItem) -> Result<()> {
  let result = sqlx::query("UPDATE items SET name = $2, description = $3, price = $4, updated_at = NOW() WHERE id = $1")
    .bind(id)
    .bind(&item.name)
    .bind(&item.description)
    .bind(item.price)
    .execute(pool)
    .await?;
  ensure_touched(result.rows_affected(), id)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<()> {
  let result = sqlx::query("DELETE FROM items WHERE id = $1").bind(id).execute(pool).await?;
  ensure_touched(result.rows_affected(), id)
}

fn ensure_touched(rows_affected: u64, id: Uuid) -> Result<()> {
  if rows_affected == 0 {
    return Err(AppError::NotFound(format!("Item with ID {} not found.", id)));
  }
  Ok(())
}
