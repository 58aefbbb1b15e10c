//! The CartStore: cart operations over one storage slot.
//!
//! The slot is the single source of truth. Every operation reads it fresh,
//! applies a pure [`Cart`] transition, writes the whole document back, and
//! then publishes to the registered observers.

use std::sync::Arc;
use std::time::Duration;

use basket_core::{parse_id, parse_int, AddOutcome, Cart, CartView, OrderPayload, Product};
use basket_store::SlotStorage;
use serde_json::Value;

use crate::error::Result;
use crate::observer::{CartObserver, Notice};

/// Configuration for the CartStore.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Name of the slot holding the cart document.
    pub storage_key: String,
    /// Text of the notice shown after an add.
    pub notice_message: String,
    /// How long the add notice stays visible.
    pub notice_duration: Duration,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: "cart".to_string(),
            notice_message: "Added to cart".to_string(),
            notice_duration: Duration::from_millis(1500),
        }
    }
}

impl CartConfig {
    /// Use a different slot name.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Change the add notice.
    pub fn with_notice(mut self, message: impl Into<String>, duration: Duration) -> Self {
        self.notice_message = message.into();
        self.notice_duration = duration;
        self
    }

    fn notice(&self) -> Notice {
        Notice {
            message: self.notice_message.clone(),
            dismiss_after: self.notice_duration,
        }
    }
}

/// Shopping cart backed by a storage slot.
///
/// Operations are synchronous and never fail. Malformed stored documents
/// read as an empty cart, and storage write failures are logged. Two
/// instances on the same slot are not coordinated: the last write wins.
pub struct CartStore<S: SlotStorage> {
    storage: S,
    config: CartConfig,
    observers: Vec<Arc<dyn CartObserver>>,
}

impl<S: SlotStorage> CartStore<S> {
    /// Create a cart store over `storage`.
    pub fn new(storage: S, config: CartConfig) -> Self {
        Self {
            storage,
            config,
            observers: Vec::new(),
        }
    }

    /// Create a cart store with the default configuration.
    pub fn with_defaults(storage: S) -> Self {
        Self::new(storage, CartConfig::default())
    }

    /// Get the storage reference.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Register an observer for render, badge and notify publications.
    pub fn subscribe(&mut self, observer: Arc<dyn CartObserver>) {
        self.observers.push(observer);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Load the cart, surfacing storage and decoding failures.
    ///
    /// An absent slot is an empty cart, not an error.
    pub fn try_read(&self) -> Result<Cart> {
        match self.storage.get(&self.config.storage_key)? {
            Some(raw) => Ok(Cart::decode(&raw)?),
            None => Ok(Cart::new()),
        }
    }

    /// Load the cart. Anything unreadable is an empty cart.
    pub fn read(&self) -> Cart {
        self.try_read().unwrap_or_else(|e| {
            tracing::warn!(key = %self.config.storage_key, error = %e, "treating cart as empty");
            Cart::new()
        })
    }

    /// Sum of quantities, for the badge.
    pub fn count(&self) -> i64 {
        self.read().count()
    }

    /// Sum of `qty * price`.
    pub fn total(&self) -> f64 {
        self.read().total()
    }

    /// Render model for the current cart.
    pub fn view(&self) -> CartView {
        CartView::from_cart(&self.read())
    }

    /// Checkout payload for the current cart.
    pub fn checkout(&self) -> OrderPayload {
        OrderPayload::from_cart(&self.read())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add one unit of `product`.
    pub fn add_one(&self, product: &Product) -> AddOutcome {
        self.add(product, 1)
    }

    /// Add `qty` units of `product`, merging with an existing line item.
    ///
    /// A non-numeric `qty` counts as 1. Publishes, then shows the add notice
    /// if the write went through.
    pub fn add(&self, product: &Product, qty: impl Into<Value>) -> AddOutcome {
        let mut cart = self.read();
        let outcome = cart.add(product, &qty.into());
        tracing::debug!(id = %product.id, qty = outcome.qty(), ?outcome, "added to cart");

        let saved = self.persist(&cart);
        self.publish();
        if saved {
            self.announce();
        }
        outcome
    }

    /// Shift the quantity of `id` by `delta`, never below 1.
    ///
    /// A non-numeric `delta` shifts by 0. Unknown ids are a no-op: nothing
    /// is written or published.
    pub fn change_qty(&self, id: impl Into<Value>, delta: impl Into<Value>) -> Option<i64> {
        let id = parse_id(&id.into())?;
        let delta = parse_int(&delta.into()).unwrap_or(0);
        let mut cart = self.read();
        let qty = cart.change_qty(id, delta)?;
        tracing::debug!(%id, delta, qty, "changed quantity");

        self.persist(&cart);
        self.publish();
        Some(qty)
    }

    /// Set the quantity of `id`; non-numeric values set 1.
    ///
    /// Unknown ids are a no-op: nothing is written or published.
    pub fn set_qty(&self, id: impl Into<Value>, value: impl Into<Value>) -> Option<i64> {
        let id = parse_id(&id.into())?;
        let mut cart = self.read();
        let qty = cart.set_qty(id, &value.into())?;
        tracing::debug!(%id, qty, "set quantity");

        self.persist(&cart);
        self.publish();
        Some(qty)
    }

    /// Remove the line item with `id`. Idempotent; always persists and
    /// publishes. Returns whether anything was removed.
    pub fn remove(&self, id: impl Into<Value>) -> bool {
        let mut cart = self.read();
        let removed = parse_id(&id.into()).map_or(false, |id| cart.remove(id));
        tracing::debug!(removed, "removed from cart");

        self.persist(&cart);
        self.publish();
        removed
    }

    /// Delete the slot, as after a completed order.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.config.storage_key) {
            tracing::warn!(key = %self.config.storage_key, error = %e, "failed to clear cart");
        } else {
            tracing::debug!(key = %self.config.storage_key, "cleared cart");
        }
        self.publish();
    }

    /// Initial publication on page load: badge and render, no writes.
    pub fn mount(&self) {
        self.publish();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn try_persist(&self, cart: &Cart) -> Result<()> {
        let raw = cart.encode()?;
        self.storage.set(&self.config.storage_key, &raw)?;
        Ok(())
    }

    /// Returns whether the slot now holds `cart`.
    fn persist(&self, cart: &Cart) -> bool {
        match self.try_persist(cart) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.config.storage_key, error = %e, "failed to persist cart");
                false
            }
        }
    }

    /// Badge then render, from what the slot actually holds.
    fn publish(&self) {
        if self.observers.is_empty() {
            return;
        }
        let view = self.view();
        for observer in &self.observers {
            observer.badge(view.count);
        }
        for observer in &self.observers {
            observer.render(&view);
        }
    }

    fn announce(&self) {
        let notice = self.config.notice();
        for observer in &self.observers {
            if let Err(e) = observer.notify(&notice) {
                tracing::debug!(error = %e, "notice skipped");
            }
        }
    }
}
