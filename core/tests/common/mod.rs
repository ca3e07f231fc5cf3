// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::{
  atomic::{AtomicBool, AtomicUsize, Ordering},
  Arc,
};
use tokio::sync::Barrier;
use tracing::Level;
use trolley::{Cart, CartError, CartLineItem, CartPatch, CartResult, CartStore, InMemoryCartStore};

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn li(item_id: &str, quantity: impl Into<f64>) -> CartLineItem {
  CartLineItem::new(item_id, quantity)
}

pub fn seeded(user_id: &str, items: Vec<CartLineItem>) -> Arc<InMemoryCartStore> {
  Arc::new(InMemoryCartStore::with_carts([Cart::new(user_id, items)]))
}

/// Sorted `(item_id, quantity)` pairs, for order-insensitive comparisons.
pub fn as_pairs(items: &[CartLineItem]) -> Vec<(String, f64)> {
  let mut pairs: Vec<(String, f64)> = items.iter().map(|li| (li.item_id.clone(), li.quantity)).collect();
  pairs.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
  pairs
}

// --- Store wrappers ---

#[derive(Debug, thiserror::Error)]
#[error("simulated backend outage during {0}")]
pub struct Outage(pub &'static str);

/// Delegates to an in-memory store but can be told to fail individual operations.
#[derive(Debug, Default)]
pub struct FlakyStore {
  pub inner: InMemoryCartStore,
  pub fail_reads: AtomicBool,
  pub fail_writes: AtomicBool,
  pub writes: AtomicUsize,
}

impl FlakyStore {
  pub fn seeded(cart: Cart) -> Self {
    Self {
      inner: InMemoryCartStore::with_carts([cart]),
      ..Default::default()
    }
  }

  fn check_write(&self, op: &'static str) -> CartResult<()> {
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(CartError::store(Outage(op)));
    }
    self.writes.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }
}

#[async_trait]
impl CartStore for FlakyStore {
  async fn find_by_user(&self, user_id: &str) -> CartResult<Option<Cart>> {
    if self.fail_reads.load(Ordering::SeqCst) {
      return Err(CartError::store(Outage("find_by_user")));
    }
    self.inner.find_by_user(user_id).await
  }

  async fn create(&self, cart: Cart) -> CartResult<Cart> {
    self.check_write("create")?;
    self.inner.create(cart).await
  }

  async fn update(&self, user_id: &str, patch: CartPatch) -> CartResult<()> {
    self.check_write("update")?;
    self.inner.update(user_id, patch).await
  }

  async fn replace(&self, user_id: &str, cart: Cart) -> CartResult<()> {
    self.check_write("replace")?;
    self.inner.replace(user_id, cart).await
  }
}

/// Holds every reader at a barrier after its read, so N concurrent operations
/// all observe the same snapshot before any of them writes.
pub struct LockstepStore {
  pub inner: InMemoryCartStore,
  barrier: Barrier,
}

impl LockstepStore {
  pub fn new(inner: InMemoryCartStore, participants: usize) -> Self {
    Self {
      inner,
      barrier: Barrier::new(participants),
    }
  }
}

#[async_trait]
impl CartStore for LockstepStore {
  async fn find_by_user(&self, user_id: &str) -> CartResult<Option<Cart>> {
    let snapshot = self.inner.find_by_user(user_id).await?;
    self.barrier.wait().await;
    Ok(snapshot)
  }

  async fn create(&self, cart: Cart) -> CartResult<Cart> {
    self.inner.create(cart).await
  }

  async fn update(&self, user_id: &str, patch: CartPatch) -> CartResult<()> {
    self.inner.update(user_id, patch).await
  }

  async fn replace(&self, user_id: &str, cart: Cart) -> CartResult<()> {
    self.inner.replace(user_id, cart).await
  }
}

/// Yields to the scheduler between the read and the caller's write,
/// widening the race window without forcing lockstep.
#[derive(Debug, Default)]
pub struct YieldingStore {
  pub inner: InMemoryCartStore,
}

#[async_trait]
impl CartStore for YieldingStore {
  async fn find_by_user(&self, user_id: &str) -> CartResult<Option<Cart>> {
    let snapshot = self.inner.find_by_user(user_id).await?;
    tokio::task::yield_now().await;
    Ok(snapshot)
  }

  async fn create(&self, cart: Cart) -> CartResult<Cart> {
    self.inner.create(cart).await
  }

  async fn update(&self, user_id: &str, patch: CartPatch) -> CartResult<()> {
    tokio::task::yield_now().await;
    self.inner.update(user_id, patch).await
  }

  async fn replace(&self, user_id: &str, cart: Cart) -> CartResult<()> {
    tokio::task::yield_now().await;
    self.inner.replace(user_id, cart).await
  }
}
