//! Checkout payload.
//!
//! The order form submits the cart as `{"items": [...], "total": ...}`. The
//! same payload renders into the plain-text order summary sent to the shop.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::types::ItemId;

/// One ordered line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: ItemId,
    pub title: String,
    pub price: f64,
    pub qty: i64,
}

impl OrderLine {
    pub fn subtotal(&self) -> f64 {
        self.qty as f64 * self.price
    }
}

/// The document submitted at checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub items: Vec<OrderLine>,
    pub total: f64,
}

impl OrderPayload {
    /// Snapshot a cart for checkout.
    pub fn from_cart(cart: &Cart) -> Self {
        let items = cart
            .items()
            .iter()
            .map(|item| OrderLine {
                id: item.id,
                title: item.title.clone(),
                price: item.price,
                qty: item.counted_qty(),
            })
            .collect();

        Self {
            items,
            total: cart.total(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Human-readable summary: one line per item, then the total.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .items
            .iter()
            .map(|line| {
                format!(
                    "• {} × {} = {}",
                    line.title,
                    line.qty,
                    format_money_grouped(line.subtotal())
                )
            })
            .collect();
        lines.push(format!("Total: {}", format_money_grouped(self.total)));
        lines
    }
}

/// `$` followed by the amount with thousands separators and two decimals
/// (`1299.0` is `"$1,299.00"`).
pub fn format_money_grouped(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}
