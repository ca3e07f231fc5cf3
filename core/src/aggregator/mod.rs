// trolley/src/aggregator/mod.rs

//! `CartAggregator`: merge and removal semantics for a user's single cart.

mod locks;
pub mod merge;

use crate::error::{CartError, CartResult};
use crate::model::{Cart, CartLineItem, CartPatch};
use crate::store::CartStore;
use locks::{UserLockGuard, UserLocks};
use std::fmt;
use std::sync::Arc;
use tracing::{event, instrument, Level};

pub use merge::{merge_line_items, remove_line_items};

/// How the read-modify-write pair of each operation is guarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
  /// One read then one write, no locking and no version check.
  /// Concurrent operations on the same user can lose updates.
  #[default]
  Unguarded,
  /// Operations on the same user id are serialized inside this process.
  /// Other processes writing to the same store are not covered.
  SerializedPerUser,
}

/// Produces and persists the new state of a user's cart.
///
/// Every failure from the store is returned to the caller unchanged; nothing
/// is retried.
pub struct CartAggregator {
  store: Arc<dyn CartStore>,
  mode: WriteMode,
  locks: UserLocks,
}

impl CartAggregator {
  pub fn new(store: Arc<dyn CartStore>) -> Self {
    Self {
      store,
      mode: WriteMode::default(),
      locks: UserLocks::default(),
    }
  }

  pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn write_mode(&self) -> WriteMode {
    self.mode
  }

  /// The underlying store, for plain reads and writes that bypass merge logic.
  pub fn store(&self) -> &Arc<dyn CartStore> {
    &self.store
  }

  pub async fn find(&self, user_id: &str) -> CartResult<Option<Cart>> {
    self.store.find_by_user(user_id).await
  }

  /// Adds `incoming` to the cart of `user_id`, creating the cart on first use.
  ///
  /// A new cart takes `incoming` verbatim (no merging inside that first batch)
  /// with a zero total price. An existing cart has each item merged in input
  /// order, see [`merge_line_items`], and is written back with a partial update.
  #[instrument(
    name = "CartAggregator::add_items",
    skip(self, incoming),
    fields(incoming_count = incoming.len(), mode = ?self.mode),
    err(Display)
  )]
  pub async fn add_items(&self, user_id: &str, incoming: Vec<CartLineItem>) -> CartResult<Cart> {
    let _serialized = self.serialize(user_id).await;

    let existing = self.store.find_by_user(user_id).await?;
    let mut cart = match existing {
      Some(cart) => cart,
      None => {
        event!(Level::DEBUG, "No cart yet, creating one from the incoming batch.");
        let created = self.store.create(Cart::new(user_id, incoming)).await?;
        event!(Level::INFO, items = created.items.len(), "Cart created.");
        return Ok(created);
      }
    };

    let before = cart.items.len();
    merge_line_items(&mut cart.items, incoming);
    event!(
      Level::DEBUG,
      appended = cart.items.len() - before,
      total_lines = cart.items.len(),
      "Merged incoming items into existing cart."
    );

    self.store.update(user_id, CartPatch::from(&cart)).await?;
    Ok(cart)
  }

  /// Removes every line item with `item_id` from the cart of `user_id` and
  /// replaces the stored document. The cart itself is kept even when emptied.
  ///
  /// Fails with [`CartError::NotFound`] when the user has no cart.
  #[instrument(name = "CartAggregator::remove_item", skip(self), fields(mode = ?self.mode), err(Display))]
  pub async fn remove_item(&self, item_id: &str, user_id: &str) -> CartResult<Cart> {
    let _serialized = self.serialize(user_id).await;

    let mut cart = self
      .store
      .find_by_user(user_id)
      .await?
      .ok_or_else(|| CartError::not_found(user_id))?;

    let removed = remove_line_items(&mut cart.items, item_id);
    event!(Level::DEBUG, removed, remaining = cart.items.len(), "Filtered cart items.");

    self.store.replace(user_id, cart.clone()).await?;
    Ok(cart)
  }

  async fn serialize(&self, user_id: &str) -> Option<UserLockGuard> {
    match self.mode {
      WriteMode::Unguarded => None,
      WriteMode::SerializedPerUser => Some(self.locks.lock(user_id).await),
    }
  }
}

impl fmt::Debug for CartAggregator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CartAggregator").field("mode", &self.mode).finish_non_exhaustive()
  }
}
