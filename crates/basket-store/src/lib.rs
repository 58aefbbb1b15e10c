//! # Basket Store
//!
//! Storage abstraction for Basket. A cart lives in one named slot of a
//! string key-value store, the way a browser keeps it in `localStorage`.
//!
//! ## Key Types
//!
//! - [`SlotStorage`] - The trait for slot reads and whole-value writes
//! - [`MemorySlots`] - In-memory slots for tests and embedding
//! - [`SqliteSlots`] - SQLite-backed slots that survive restarts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use basket_store::{SlotStorage, SqliteSlots};
//!
//! let slots = SqliteSlots::open("basket.db").unwrap();
//! slots.set("cart", "[]").unwrap();
//! assert_eq!(slots.get("cart").unwrap().as_deref(), Some("[]"));
//! ```
//!
//! ## Design Notes
//!
//! - **Whole-value writes**: `set` replaces the slot; there are no patches.
//! - **No cross-instance locking**: two writers on one slot race; the last
//!   write wins.

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemorySlots;
pub use sqlite::SqliteSlots;
pub use traits::SlotStorage;
