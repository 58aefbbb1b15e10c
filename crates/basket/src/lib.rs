//! # Basket
//!
//! A shopping cart kept in a persistent key-value slot, with hooks for the
//! page that displays it.
//!
//! ## Overview
//!
//! - **Cart**: an ordered list of line items, at most one per product id
//! - **Slot**: one named entry of a string key-value store holding the cart
//!   as a JSON array
//! - **Observers**: render, badge and notify collaborators called after each
//!   state change
//!
//! Every operation reads the slot fresh, applies a pure transition, writes
//! the whole document back, and publishes. Nothing fails: loose input is
//! coerced with safe defaults and a malformed document reads as empty.
//!
//! ## Usage
//!
//! ```rust
//! use basket::{CartStore, Product};
//! use basket::store::MemorySlots;
//!
//! let store = CartStore::with_defaults(MemorySlots::new());
//! let headphones = Product::new(1, "Wireless Headphones", 99.99, "headphones.jpg");
//!
//! store.add_one(&headphones);
//! store.add(&headphones, 2);
//! assert_eq!(store.count(), 3);
//!
//! store.change_qty(1, -10);
//! assert_eq!(store.count(), 1);
//!
//! store.remove(1);
//! assert!(store.read().is_empty());
//! ```
//!
//! ## Re-exports
//!
//! - `basket::core` - Cart primitives and coercion rules
//! - `basket::store` - Slot storage trait and backends

pub mod cart_store;
pub mod error;
pub mod observer;

// Re-export component crates
pub use basket_core as core;
pub use basket_store as store;

// Re-export main types for convenience
pub use cart_store::{CartConfig, CartStore};
pub use error::{CartError, NoticeError, Result};
pub use observer::{CartObserver, Notice};

// Re-export commonly used core types
pub use basket_core::{
    AddOutcome, Cart, CartView, ItemId, LineItem, OrderLine, OrderPayload, Product, RowView,
};
