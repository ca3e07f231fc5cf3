// trolley/src/store/mod.rs

//! The persistence contract the aggregator consumes, plus an in-process
//! implementation.

use crate::error::CartResult;
use crate::model::{Cart, CartPatch};
use async_trait::async_trait;

pub mod memory;

pub use memory::InMemoryCartStore;

/// Key-value persistence for cart documents, keyed by user identifier.
///
/// None of these calls carry a timeout; the aggregator resolves or fails
/// solely on what the store returns.
#[async_trait]
pub trait CartStore: Send + Sync {
  /// At most one cart exists per user.
  async fn find_by_user(&self, user_id: &str) -> CartResult<Option<Cart>>;

  /// Persists a new cart and returns the stored form.
  /// Fails with `CartError::AlreadyExists` if the key is taken.
  async fn create(&self, cart: Cart) -> CartResult<Cart>;

  /// Merges the fields present in `patch` into the stored cart.
  /// Fails with `CartError::NotFound` if nothing is stored at `user_id`.
  async fn update(&self, user_id: &str, patch: CartPatch) -> CartResult<()>;

  /// Replaces the stored cart's content at `user_id` wholesale.
  /// Fails with `CartError::NotFound` if nothing is stored at `user_id`.
  async fn replace(&self, user_id: &str, cart: Cart) -> CartResult<()>;
}
