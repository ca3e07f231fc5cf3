// trolley/src/aggregator/merge.rs

//! Line-item merge and removal over a cart's item sequence.

use crate::model::CartLineItem;
use std::collections::HashMap;

/// Folds `incoming` into `existing` in input order.
///
/// An incoming item whose `item_id` matches no existing line item is appended;
/// otherwise its quantity is added to every line item with that `item_id`.
/// Items appended earlier in the same batch are matchable by later ones.
/// First-seen order is preserved; merged entries keep their position.
///
/// Runs in O(n + m) using an `item_id -> positions` index.
pub fn merge_line_items<I>(existing: &mut Vec<CartLineItem>, incoming: I)
where
  I: IntoIterator<Item = CartLineItem>,
{
  let mut positions: HashMap<String, Vec<usize>> = HashMap::with_capacity(existing.len());
  for (idx, line_item) in existing.iter().enumerate() {
    positions.entry(line_item.item_id.clone()).or_default().push(idx);
  }

  for item in incoming {
    match positions.get(&item.item_id) {
      Some(matching) => {
        for &idx in matching {
          if let Some(line_item) = existing.get_mut(idx) {
            line_item.quantity += item.quantity;
          }
        }
      }
      None => {
        positions.insert(item.item_id.clone(), vec![existing.len()]);
        existing.push(item);
      }
    }
  }
}

/// Drops every line item with `item_id`. Returns how many were removed.
pub fn remove_line_items(items: &mut Vec<CartLineItem>, item_id: &str) -> usize {
  let before = items.len();
  items.retain(|li| li.item_id != item_id);
  before - items.len()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn li(id: &str, qty: impl Into<f64>) -> CartLineItem {
    CartLineItem::new(id, qty)
  }

  #[test]
  fn duplicate_in_batch_merges_into_freshly_appended_item() {
    let mut items = vec![li("a", 1)];
    merge_line_items(&mut items, vec![li("b", 2), li("b", 3)]);
    assert_eq!(items, vec![li("a", 1), li("b", 5)]);
  }

  #[test]
  fn every_duplicate_existing_entry_is_incremented() {
    // Duplicates only arise through a direct replace, but merge still touches all of them.
    let mut items = vec![li("a", 1), li("x", 7), li("a", 2)];
    merge_line_items(&mut items, vec![li("a", 10)]);
    assert_eq!(items, vec![li("a", 11), li("x", 7), li("a", 12)]);
  }

  #[test]
  fn negative_quantities_are_summed_not_rejected() {
    let mut items = vec![li("a", 2)];
    merge_line_items(&mut items, vec![li("a", -5)]);
    assert_eq!(items, vec![li("a", -3)]);
  }

  #[test]
  fn fractional_quantities_are_summed() {
    let mut items = vec![li("a", 1.5)];
    merge_line_items(&mut items, vec![li("a", 0.25), li("b", 2.0), li("b", 0.5)]);
    assert_eq!(items, vec![li("a", 1.75), li("b", 2.5)]);
  }

  #[test]
  fn empty_batch_leaves_items_alone() {
    let mut items = vec![li("a", 2), li("b", 1)];
    merge_line_items(&mut items, Vec::new());
    assert_eq!(items, vec![li("a", 2), li("b", 1)]);
  }

  #[test]
  fn remove_drops_all_matches() {
    let mut items = vec![li("a", 1), li("b", 1), li("a", 4)];
    assert_eq!(remove_line_items(&mut items, "a"), 2);
    assert_eq!(items, vec![li("b", 1)]);
    assert_eq!(remove_line_items(&mut items, "a"), 0);
  }
}
