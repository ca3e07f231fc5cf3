// trolley_api/src/db/users.rs

use crate::errors::{AppError, Result};
use crate::models::{User, UserName};
use sqlx::PgPool;
use tracing::{error, instrument, warn};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, email, password_hash, first_name, last_name, created_at, updated_at";

#[instrument(name = "db::users::find_by_email", skip(pool))]
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
  sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS))
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
      error!("Database error while looking up user by email: {}", e);
      AppError::Sqlx(e)
    })
}

#[instrument(name = "db::users::insert", skip(pool, password_hash, name))]
pub async fn insert(pool: &PgPool, email: &str, password_hash: &str, name: &UserName) -> Result<User> {
  sqlx::query_as::<_, User>(&format!(
    "INSERT INTO users (id, email, password_hash, first_name, last_name) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
    USER_COLUMNS
  ))
  .bind(Uuid::new_v4())
  .bind(email)
  .bind(password_hash)
  .bind(&name.first)
  .bind(&name.last)
  .fetch_one(pool)
  .await
  .map_err(|e| {
    if super::is_unique_violation(&e) {
      warn!("Attempt to signup with existing email: {}", email);
      AppError::Conflict("An account with this email already exists.".to_string())
    } else {
      error!("Database error while creating user: {}", e);
      AppError::Sqlx(e)
    }
  })
}
