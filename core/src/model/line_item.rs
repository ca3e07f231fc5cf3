// trolley/src/model/line_item.rs

use serde::{Deserialize, Serialize};

/// An `(itemId, quantity)` pair inside a cart.
///
/// `quantity` is any JSON number, unvalidated: negative and fractional values
/// are kept as sent. Removal deletes the line item rather than decrementing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
  pub item_id: String,
  pub quantity: f64,
}

impl CartLineItem {
  pub fn new(item_id: impl Into<String>, quantity: impl Into<f64>) -> Self {
    Self {
      item_id: item_id.into(),
      quantity: quantity.into(),
    }
  }
}
