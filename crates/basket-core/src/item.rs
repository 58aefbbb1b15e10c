//! Products and line items.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::{parse_id, parse_int, parse_price};
use crate::types::ItemId;

/// A product as the UI hands it over when adding to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ItemId,
    pub title: String,
    /// Unit price, never negative.
    pub price: f64,
    pub image: String,
}

impl Product {
    /// Create a product. Negative or non-finite prices become `0.0`.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId(id),
            title: title.into(),
            price: if price.is_finite() { price.max(0.0) } else { 0.0 },
            image: image.into(),
        }
    }

    /// Build a product from string attributes, as carried by an
    /// "add to cart" button.
    ///
    /// Returns `None` when `id` is not numeric; the price falls back to `0.0`.
    pub fn from_attributes(id: &str, title: &str, price: &str, image: &str) -> Option<Self> {
        let id = parse_id(&Value::from(id))?;
        Some(Self {
            id,
            title: title.to_string(),
            price: parse_price(&Value::from(price)),
            image: image.to_string(),
        })
    }
}

/// One entry of the cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub id: ItemId,
    pub title: String,
    pub price: f64,
    pub image: String,
    /// `None` only when a stored document carried a non-numeric quantity.
    /// A mutation that touches the item writes `Some(q)` with `q >= 1`;
    /// untouched items keep `None` and encode as `null`.
    pub qty: Option<i64>,
}

impl LineItem {
    /// A fresh line item for `product` with quantity `qty`.
    pub fn from_product(product: &Product, qty: i64) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            qty: Some(qty.max(1)),
        }
    }

    /// Quantity for counting and totals; non-numeric counts as 0.
    pub fn counted_qty(&self) -> i64 {
        self.qty.unwrap_or(0)
    }

    /// Quantity as a base for relative changes; non-numeric counts as 1.
    pub fn base_qty(&self) -> i64 {
        self.qty.unwrap_or(1)
    }

    /// `qty * price`.
    pub fn subtotal(&self) -> f64 {
        self.counted_qty() as f64 * self.price
    }

    /// Convert a stored element. `None` when the element cannot be matched
    /// by id and is therefore unreachable.
    pub(crate) fn from_stored(stored: StoredItem) -> Option<Self> {
        Some(Self {
            id: parse_id(&stored.id)?,
            title: text(stored.title),
            price: parse_price(&stored.price),
            image: text(stored.image),
            qty: parse_int(&stored.qty),
        })
    }
}

/// A stored element as written, before coercion.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StoredItem {
    id: Value,
    title: Value,
    price: Value,
    image: Value,
    qty: Value,
}

fn text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored(value: Value) -> StoredItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_product_clamps_price() {
        assert_eq!(Product::new(1, "A", -4.0, "x").price, 0.0);
        assert_eq!(Product::new(1, "A", f64::NAN, "x").price, 0.0);
        assert_eq!(Product::new(1, "A", 12.5, "x").price, 12.5);
    }

    #[test]
    fn test_product_from_attributes() {
        let p = Product::from_attributes("4", "Running Sneakers", "79.50", "img.jpg").unwrap();
        assert_eq!(p.id, ItemId(4));
        assert_eq!(p.price, 79.5);

        assert!(Product::from_attributes("", "A", "1", "x").is_none());
        let free = Product::from_attributes("5", "A", "n/a", "x").unwrap();
        assert_eq!(free.price, 0.0);
    }

    #[test]
    fn test_from_stored_coerces_fields() {
        let item = LineItem::from_stored(stored(json!({
            "id": "3", "title": "Camera", "price": "649.00", "image": null, "qty": "2"
        })))
        .unwrap();
        assert_eq!(item.id, ItemId(3));
        assert_eq!(item.price, 649.0);
        assert_eq!(item.image, "");
        assert_eq!(item.qty, Some(2));
    }

    #[test]
    fn test_from_stored_keeps_bad_qty_as_none() {
        let item =
            LineItem::from_stored(stored(json!({"id": 1, "price": 2, "qty": "lots"}))).unwrap();
        assert_eq!(item.qty, None);
        assert_eq!(item.counted_qty(), 0);
        assert_eq!(item.base_qty(), 1);
        assert_eq!(item.subtotal(), 0.0);
    }

    #[test]
    fn test_from_stored_rejects_bad_id() {
        assert!(LineItem::from_stored(stored(json!({"id": "abc", "qty": 1}))).is_none());
        assert!(LineItem::from_stored(stored(json!({"qty": 1}))).is_none());
    }

    #[test]
    fn test_line_item_serializes_in_stored_order() {
        let item = LineItem::from_product(&Product::new(1, "A", 9.99, "x"), 2);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":1,"title":"A","price":9.99,"image":"x","qty":2}"#);
    }
}
