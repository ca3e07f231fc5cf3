// src/lib.rs

//! Trolley: the cart aggregate behind a per-user shopping cart.
//!
//! A user owns at most one cart, keyed by user id. The crate provides:
//!  - The `Cart` / `CartLineItem` document model (camelCase on the wire).
//!  - The `CartStore` contract the aggregate persists through, and an
//!    in-memory implementation of it.
//!  - `CartAggregator`, which merges batches of line items into a cart
//!    (summing quantities per item id, appending unseen ids) and removes
//!    items by id.
//!
//! Operations are a single read followed by a single write. By default there
//! is no guard against two concurrent writers on the same user; build the
//! aggregator with `WriteMode::SerializedPerUser` to serialize them in-process.

pub mod aggregator;
pub mod error;
pub mod model;
pub mod store;

pub use crate::aggregator::{merge_line_items, remove_line_items, CartAggregator, WriteMode};
pub use crate::error::{CartError, CartResult};
pub use crate::model::{Cart, CartLineItem, CartPatch};
pub use crate::store::{CartStore, InMemoryCartStore};
