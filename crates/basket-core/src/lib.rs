//! # Basket Core
//!
//! Pure primitives for Basket: products, line items, carts, and the
//! coercion rules that turn loosely-typed UI and storage input into numbers.
//!
//! This crate contains no I/O and no storage. It is pure computation over the
//! cart document; persistence lives in `basket-store` and orchestration in
//! `basket`.
//!
//! ## Key Types
//!
//! - [`Cart`] - Ordered collection of line items, at most one per id
//! - [`LineItem`] - One product entry with its quantity
//! - [`Product`] - What the UI hands over when adding to the cart
//! - [`ItemId`] - Identity key of a line item
//! - [`CartView`] - Render model derived from a cart
//! - [`OrderPayload`] - Checkout document derived from a cart
//!
//! ## Stored Format
//!
//! Carts are stored as a JSON array of objects:
//!
//! ```json
//! [{"id":1,"title":"Wireless Headphones","price":99.99,"image":"...","qty":2}]
//! ```
//!
//! Decoding is tolerant field by field. See [`Cart::decode`].

pub mod cart;
pub mod coerce;
pub mod error;
pub mod item;
pub mod order;
pub mod types;
pub mod view;

pub use cart::{AddOutcome, Cart};
pub use coerce::{
    parse_float, parse_id, parse_increment, parse_int, parse_price, parse_quantity,
};
pub use error::{CoreError, Result};
pub use item::{LineItem, Product};
pub use order::{format_money_grouped, OrderLine, OrderPayload};
pub use types::ItemId;
pub use view::{format_money, CartView, RowView};
