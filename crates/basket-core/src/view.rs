//! Render model for the cart page.
//!
//! A [`CartView`] carries everything a renderer needs: the rows with their
//! quantity controls, the badge count, and the total. Markup is left to the
//! renderer.

use serde::Serialize;

use crate::cart::Cart;
use crate::types::ItemId;

/// One table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: ItemId,
    pub title: String,
    pub image: String,
    pub price: f64,
    pub qty: i64,
    pub subtotal: f64,
}

impl RowView {
    pub fn price_label(&self) -> String {
        format_money(self.price)
    }

    pub fn subtotal_label(&self) -> String {
        format_money(self.subtotal)
    }
}

/// The whole cart as a renderer sees it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartView {
    pub rows: Vec<RowView>,
    pub count: i64,
    pub total: f64,
}

impl CartView {
    /// Derive the view from a cart snapshot.
    pub fn from_cart(cart: &Cart) -> Self {
        let rows = cart
            .items()
            .iter()
            .map(|item| RowView {
                id: item.id,
                title: item.title.clone(),
                image: item.image.clone(),
                price: item.price,
                qty: item.counted_qty(),
                subtotal: item.subtotal(),
            })
            .collect();

        Self {
            rows,
            count: cart.count(),
            total: cart.total(),
        }
    }

    /// Whether the empty-state panel should be shown instead of the table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_label(&self) -> String {
        format_money(self.total)
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self::from_cart(cart)
    }
}

/// `$` followed by the amount with two decimals.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}
