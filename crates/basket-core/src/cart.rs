//! The cart: an ordered collection of line items.
//!
//! All state transitions are pure methods on [`Cart`]. They never fail:
//! loose input is coerced by [`crate::coerce`], unknown ids are no-ops.
//!
//! # Invariants
//!
//! - At most one line item per id.
//! - Insertion order is first-added order; merges update in place.
//! - Every mutation leaves the touched item's quantity at 1 or more.

use serde::Serialize;
use serde_json::Value;

use crate::coerce::{parse_increment, parse_quantity};
use crate::error::{CoreError, Result};
use crate::item::{LineItem, Product, StoredItem};
use crate::types::ItemId;

/// Result of adding a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line item was appended.
    Appended {
        /// Quantity of the new line item.
        qty: i64,
    },
    /// The quantity of an existing line item was increased.
    Merged {
        /// Quantity after the merge.
        qty: i64,
    },
}

impl AddOutcome {
    /// Resulting quantity of the line item.
    pub fn qty(&self) -> i64 {
        match self {
            Self::Appended { qty } | Self::Merged { qty } => *qty,
        }
    }
}

/// An ordered collection of line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stored document.
    ///
    /// The document must be a JSON array; anything else is
    /// [`CoreError::MalformedDocument`]. Elements that are not objects, or
    /// whose id is not numeric, are skipped. If the same id appears more than
    /// once, the first occurrence wins.
    pub fn decode(raw: &str) -> Result<Self> {
        let elements: Vec<Value> = serde_json::from_str(raw)
            .map_err(|e| CoreError::MalformedDocument(e.to_string()))?;

        let mut cart = Self::new();
        for element in elements {
            if !element.is_object() {
                continue;
            }
            let Ok(stored) = serde_json::from_value::<StoredItem>(element) else {
                continue;
            };
            if let Some(item) = LineItem::from_stored(stored) {
                if cart.get(item.id).is_none() {
                    cart.items.push(item);
                }
            }
        }
        Ok(cart)
    }

    /// Encode as a stored document.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.items)?)
    }

    /// The line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line item by id.
    pub fn get(&self, id: ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `product`, merging into an existing line item with the same id.
    ///
    /// A merge adds [`parse_increment`] of `qty` to the stored quantity (a
    /// non-numeric stored quantity counts as 0). A new item gets
    /// [`parse_quantity`] of `qty`. Either way the result is at least 1.
    pub fn add(&mut self, product: &Product, qty: &Value) -> AddOutcome {
        if let Some(item) = self.get_mut(product.id) {
            let merged = item
                .counted_qty()
                .saturating_add(parse_increment(qty))
                .max(1);
            item.qty = Some(merged);
            AddOutcome::Merged { qty: merged }
        } else {
            let qty = parse_quantity(qty);
            self.items.push(LineItem::from_product(product, qty));
            AddOutcome::Appended { qty }
        }
    }

    /// Shift the quantity of `id` by `delta`, flooring at 1.
    ///
    /// A non-numeric stored quantity counts as 1. Returns the new quantity,
    /// or `None` if no line item has that id.
    pub fn change_qty(&mut self, id: ItemId, delta: i64) -> Option<i64> {
        let item = self.get_mut(id)?;
        let qty = item.base_qty().saturating_add(delta).max(1);
        item.qty = Some(qty);
        Some(qty)
    }

    /// Set the quantity of `id` to [`parse_quantity`] of `value`.
    ///
    /// Returns the new quantity, or `None` if no line item has that id.
    pub fn set_qty(&mut self, id: ItemId, value: &Value) -> Option<i64> {
        let item = self.get_mut(id)?;
        let qty = parse_quantity(value);
        item.qty = Some(qty);
        Some(qty)
    }

    /// Remove the line item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Sum of quantities; non-numeric stored quantities count as 0.
    pub fn count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.counted_qty()))
    }

    /// Sum of `qty * price`.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn product(id: i64) -> Product {
        Product::new(id, format!("Product {id}"), 10.0, "x")
    }

    #[test]
    fn test_add_appends_then_merges() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(&product(1), &json!(1)), AddOutcome::Appended { qty: 1 });
        assert_eq!(cart.add(&product(1), &json!(2)), AddOutcome::Merged { qty: 3 });
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ItemId(1)).unwrap().qty, Some(3));
    }

    #[test]
    fn test_add_invalid_qty_counts_as_one() {
        let mut cart = Cart::new();
        cart.add(&product(1), &json!("abc"));
        cart.add(&product(1), &json!(null));
        assert_eq!(cart.get(ItemId(1)).unwrap().qty, Some(2));
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product(2), &json!(1));
        cart.add(&product(1), &json!(1));
        cart.add(&product(2), &json!(5));
        let ids: Vec<i64> = cart.items().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_add_negative_increment_floors_at_one() {
        let mut cart = Cart::new();
        cart.add(&product(1), &json!(2));
        assert_eq!(cart.add(&product(1), &json!(-10)).qty(), 1);
    }

    #[test]
    fn test_change_qty() {
        let mut cart = Cart::new();
        cart.add(&product(1), &json!(2));
        assert_eq!(cart.change_qty(ItemId(1), 1), Some(3));
        assert_eq!(cart.change_qty(ItemId(1), -10), Some(1));
        assert_eq!(cart.change_qty(ItemId(9), 1), None);
        assert_eq!(cart.change_qty(ItemId(1), i64::MIN), Some(1));
    }

    #[test]
    fn test_set_qty() {
        let mut cart = Cart::new();
        cart.add(&product(1), &json!(2));
        assert_eq!(cart.set_qty(ItemId(1), &json!("7")), Some(7));
        assert_eq!(cart.set_qty(ItemId(1), &json!("abc")), Some(1));
        assert_eq!(cart.set_qty(ItemId(1), &json!(-3)), Some(1));
        assert_eq!(cart.set_qty(ItemId(2), &json!(4)), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(&product(1), &json!(1));
        cart.add(&product(2), &json!(1));
        assert!(cart.remove(ItemId(1)));
        let after_first = cart.clone();
        assert!(!cart.remove(ItemId(1)));
        assert_eq!(cart, after_first);
    }

    #[test]
    fn test_count_and_total() {
        let cart = Cart::decode(
            r#"[{"id":1,"title":"A","price":9.99,"image":"","qty":2},
                {"id":2,"title":"B","price":5,"image":"","qty":1}]"#,
        )
        .unwrap();
        assert_eq!(cart.count(), 3);
        assert!((cart.total() - 24.98).abs() < 1e-9);

        let cart = Cart::decode(r#"[{"id":1,"qty":2},{"id":2,"qty":3}]"#).unwrap();
        assert_eq!(cart.count(), 5);

        assert_eq!(Cart::new().count(), 0);
        assert_eq!(Cart::new().total(), 0.0);
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(
            Cart::decode("{not json"),
            Err(CoreError::MalformedDocument(_))
        ));
        assert!(matches!(
            Cart::decode(r#"{"id":1}"#),
            Err(CoreError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_decode_skips_unreachable_elements() {
        let cart = Cart::decode(
            r#"[5, "x", null, [1, "A", 1.0, "", 1], {"id":"abc","qty":1},
                {"id":1,"qty":2}, {"id":"1","qty":9}]"#,
        )
        .unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ItemId(1)).unwrap().qty, Some(2));
    }

    #[test]
    fn test_decode_non_numeric_qty() {
        let mut cart = Cart::decode(r#"[{"id":1,"price":3,"qty":"many"}]"#).unwrap();
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.change_qty(ItemId(1), 2), Some(3));
    }

    #[test]
    fn test_encode_decode_preserves_cart() {
        let mut cart = Cart::new();
        cart.add(&product(3), &json!(4));
        cart.add(&product(1), &json!(1));
        let decoded = Cart::decode(&cart.encode().unwrap()).unwrap();
        assert_eq!(decoded, cart);
    }

    #[test]
    fn test_untouched_bad_qty_is_written_as_null() {
        let mut cart = Cart::decode(r#"[{"id":1,"qty":"lots"},{"id":2,"qty":1}]"#).unwrap();
        assert!(cart.remove(ItemId(2)));

        let written: serde_json::Value = serde_json::from_str(&cart.encode().unwrap()).unwrap();
        assert_eq!(written[0]["id"], json!(1));
        assert_eq!(written[0]["qty"], json!(null));

        let reread = Cart::decode(&cart.encode().unwrap()).unwrap();
        assert_eq!(reread.get(ItemId(1)).unwrap().qty, None);
        assert_eq!(reread.count(), 0);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(Cart::new().encode().unwrap(), "[]");
    }

    proptest! {
        #[test]
        fn change_qty_never_drops_below_one(start in 1i64..1000, delta in any::<i64>()) {
            let mut cart = Cart::new();
            cart.add(&product(1), &json!(start));
            let qty = cart.change_qty(ItemId(1), delta).unwrap();
            prop_assert!(qty >= 1);
        }

        #[test]
        fn ids_stay_unique(ids in prop::collection::vec(0i64..5, 0..40)) {
            let mut cart = Cart::new();
            for id in &ids {
                cart.add(&product(*id), &json!(1));
            }
            let mut seen: Vec<i64> = cart.items().iter().map(|i| i.id.get()).collect();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), cart.len());
        }
    }
}
