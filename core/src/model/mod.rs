//! Cart documents as they are persisted and returned to callers.

pub mod cart;
pub mod line_item;

pub use cart::{Cart, CartPatch};
pub use line_item::CartLineItem;
