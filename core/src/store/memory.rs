// trolley/src/store/memory.rs

use crate::error::{CartError, CartResult};
use crate::model::{Cart, CartPatch};
use crate::store::CartStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{event, instrument, Level};

/// A `CartStore` backed by a process-local map.
///
/// Locks are only held for the duration of a single map access, never
/// across an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
  carts: RwLock<HashMap<String, Cart>>,
}

impl InMemoryCartStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Seeds the store with pre-existing carts, keyed by their `user_id`.
  pub fn with_carts(carts: impl IntoIterator<Item = Cart>) -> Self {
    let map = carts.into_iter().map(|c| (c.user_id.clone(), c)).collect();
    Self { carts: RwLock::new(map) }
  }

  pub fn len(&self) -> usize {
    self.carts.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.carts.read().is_empty()
  }

  /// Snapshot of every stored cart, ordered by user id.
  pub fn all(&self) -> Vec<Cart> {
    let mut carts: Vec<Cart> = self.carts.read().values().cloned().collect();
    carts.sort_by(|a, b| a.user_id.cmp(&b.user_id));
    carts
  }

  pub fn remove(&self, user_id: &str) -> Option<Cart> {
    self.carts.write().remove(user_id)
  }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
  async fn find_by_user(&self, user_id: &str) -> CartResult<Option<Cart>> {
    Ok(self.carts.read().get(user_id).cloned())
  }

  #[instrument(name = "InMemoryCartStore::create", skip_all, fields(user_id = %cart.user_id), err(Display))]
  async fn create(&self, cart: Cart) -> CartResult<Cart> {
    let mut guard = self.carts.write();
    if guard.contains_key(&cart.user_id) {
      event!(Level::DEBUG, "Refusing to create a second cart for the same user.");
      return Err(CartError::already_exists(cart.user_id));
    }
    guard.insert(cart.user_id.clone(), cart.clone());
    Ok(cart)
  }

  #[instrument(name = "InMemoryCartStore::update", skip(self, patch), err(Display))]
  async fn update(&self, user_id: &str, patch: CartPatch) -> CartResult<()> {
    let mut guard = self.carts.write();
    let stored = guard.get_mut(user_id).ok_or_else(|| CartError::not_found(user_id))?;
    patch.apply_to(stored);
    Ok(())
  }

  #[instrument(name = "InMemoryCartStore::replace", skip(self, cart), err(Display))]
  async fn replace(&self, user_id: &str, mut cart: Cart) -> CartResult<()> {
    let mut guard = self.carts.write();
    let stored = guard.get_mut(user_id).ok_or_else(|| CartError::not_found(user_id))?;
    // The key wins over whatever the body claims.
    cart.user_id = user_id.to_string();
    *stored = cart;
    Ok(())
  }
}
