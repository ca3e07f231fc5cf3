// trolley/src/model/cart.rs

use super::line_item::CartLineItem;
use serde::{Deserialize, Serialize};

/// A user's single shopping cart, keyed by `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
  pub user_id: String,
  #[serde(default)]
  pub items: Vec<CartLineItem>,
  // Not recomputed when items change; only a replace or patch sets it.
  #[serde(default)]
  pub total_price: f64,
}

impl Cart {
  /// A fresh cart as created by the first add for a user.
  pub fn new(user_id: impl Into<String>, items: Vec<CartLineItem>) -> Self {
    Self {
      user_id: user_id.into(),
      items,
      total_price: 0.0,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Sum of quantities for `item_id` across all matching line items.
  pub fn quantity_of(&self, item_id: &str) -> Option<f64> {
    let mut matches = self.items.iter().filter(|li| li.item_id == item_id).peekable();
    matches.peek()?;
    Some(matches.map(|li| li.quantity).sum())
  }
}

/// Partial update for a stored cart. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub items: Option<Vec<CartLineItem>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub total_price: Option<f64>,
}

impl CartPatch {
  pub fn is_empty(&self) -> bool {
    self.items.is_none() && self.total_price.is_none()
  }

  /// Merges the present fields into `cart`.
  pub fn apply_to(&self, cart: &mut Cart) {
    if let Some(items) = &self.items {
      cart.items = items.clone();
    }
    if let Some(total_price) = self.total_price {
      cart.total_price = total_price;
    }
  }
}

impl From<&Cart> for CartPatch {
  fn from(cart: &Cart) -> Self {
    Self {
      items: Some(cart.items.clone()),
      total_price: Some(cart.total_price),
    }
  }
}
