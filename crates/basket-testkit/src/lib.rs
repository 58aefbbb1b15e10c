//! # Basket Testkit
//!
//! Testing utilities for Basket.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Stored-document vectors**: Known slot contents, well-formed and not,
//!   with the count and total they must read as
//! - **Generators**: Proptest strategies for products, loose quantity input,
//!   and operation sequences
//! - **Fixtures**: A recording observer and a cart store wired to in-memory
//!   slots
//!
//! ## Stored-Document Vectors
//!
//! ```rust
//! use basket_testkit::vectors::verify_all_vectors;
//!
//! verify_all_vectors().unwrap();
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use basket_testkit::generators::{cart_ops, CartOp};
//! use basket_testkit::TestFixture;
//!
//! proptest! {
//!     #[test]
//!     fn quantities_stay_positive(ops in cart_ops(50)) {
//!         let fixture = TestFixture::new();
//!         for op in &ops {
//!             op.apply(&fixture.store);
//!         }
//!         prop_assert!(fixture.store.read().items().iter().all(|i| i.qty >= Some(1)));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use basket_testkit::fixtures::{catalog, TestFixture};
//!
//! let fixture = TestFixture::new();
//! fixture.store.add_one(&catalog()[0]);
//! assert_eq!(fixture.observer.badges(), vec![1]);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{catalog, CartEvent, RecordingObserver, TestFixture};
pub use generators::{cart_ops, CartOp};
pub use vectors::{all_vectors, verify_all_vectors, StoredVector};
