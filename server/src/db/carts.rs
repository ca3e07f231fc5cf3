// trolley_api/src/db/carts.rs

//! `CartStore` over the `carts` table, plus the listing/deletion used by the
//! cart admin routes.

use anyhow::Context;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::{event, instrument, Level};
use trolley::{Cart, CartError, CartLineItem, CartPatch, CartResult, CartStore};

#[derive(Debug, FromRow)]
struct CartRow {
  user_id: String,
  items: Json<Vec<CartLineItem>>,
  total_price: f64,
}

impl From<CartRow> for Cart {
  fn from(row: CartRow) -> Self {
    Cart {
      user_id: row.user_id,
      items: row.items.0,
      total_price: row.total_price,
    }
  }
}

#[derive(Debug, Clone)]
pub struct PgCartStore {
  pool: PgPool,
}

impl PgCartStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CartStore for PgCartStore {
  #[instrument(name = "PgCartStore::find_by_user", skip(self), err(Display))]
  async fn find_by_user(&self, user_id: &str) -> CartResult<Option<Cart>> {
    let row = sqlx::query_as::<_, CartRow>("SELECT user_id, items, total_price FROM carts WHERE user_id = $1")
      .bind(user_id)
      .fetch_optional(&self.pool)
      .await
      .with_context(|| format!("loading cart for user {}", user_id))?;
    Ok(row.map(Cart::from))
  }

  #[instrument(name = "PgCartStore::create", skip_all, fields(user_id = %cart.user_id), err(Display))]
  async fn create(&self, cart: Cart) -> CartResult<Cart> {
    let result = sqlx::query_as::<_, CartRow>(
      "INSERT INTO carts (user_id, items, total_price) VALUES ($1, $2, $3) RETURNING user_id, items, total_price",
    )
    .bind(&cart.user_id)
    .bind(Json(&cart.items))
    .bind(cart.total_price)
    .fetch_one(&self.pool)
    .await;

    match result {
      Ok(row) => Ok(row.into()),
      Err(e) if super::is_unique_violation(&e) => Err(CartError::already_exists(cart.user_id)),
      Err(e) => Err(CartError::store(e)),
    }
  }

  #[instrument(name = "PgCartStore::update", skip(self, patch), err(Display))]
  async fn update(&self, user_id: &str, patch: CartPatch) -> CartResult<()> {
    if patch.is_empty() {
      event!(Level::DEBUG, "Empty patch, only checking the cart exists.");
      return match self.find_by_user(user_id).await? {
        Some(_) => Ok(()),
        None => Err(CartError::not_found(user_id)),
      };
    }

    let result = sqlx::query(
      "UPDATE carts SET items = COALESCE($2, items), total_price = COALESCE($3, total_price), updated_at = NOW() \
       WHERE user_id = $1",
    )
    .bind(user_id)
    .bind(patch.items.as_ref().map(Json))
    .bind(patch.total_price)
    .execute(&self.pool)
    .await
    .map_err(CartError::store)?;

    if result.rows_affected() == 0 {
      return Err(CartError::not_found(user_id));
    }
    Ok(())
  }

  #[instrument(name = "PgCartStore::replace", skip(self, cart), err(Display))]
  async fn replace(&self, user_id: &str, cart: Cart) -> CartResult<()> {
    let result =
      sqlx::query("UPDATE carts SET items = $2, total_price = $3, updated_at = NOW() WHERE user_id = $1")
        .bind(user_id)
        .bind(Json(&cart.items))
        .bind(cart.total_price)
        .execute(&self.pool)
        .await
        .map_err(CartError::store)?;

    if result.rows_affected() == 0 {
      return Err(CartError::not_found(user_id));
    }
    Ok(())
  }
}

/// Every stored cart, ordered by user id.
pub async fn list_all(pool: &PgPool) -> CartResult<Vec<Cart>> {
  let rows = sqlx::query_as::<_, CartRow>("SELECT user_id, items, total_price FROM carts ORDER BY user_id ASC")
    .fetch_all(pool)
    .await
    .context("listing carts")?;
  Ok(rows.into_iter().map(Cart::from).collect())
}

pub async fn delete(pool: &PgPool, user_id: &str) -> CartResult<()> {
  let result = sqlx::query("DELETE FROM carts WHERE user_id = $1")
    .bind(user_id)
    .execute(pool)
    .await
    .map_err(CartError::store)?;
  if result.rows_affected() == 0 {
    return Err(CartError::not_found(user_id));
  }
  Ok(())
}
