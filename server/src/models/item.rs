// trolley_api/src/models/item.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>,
  pub price: f64,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

// Body of POST /items and PUT /items/{id}. The id is never client-supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
  pub name: String,
  pub description: Option<String>,
  pub price: f64,
}

// Body of PATCH /items/{id}. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<f64>,
}
