//! Error types for Basket.
//!
//! The cart operations themselves never fail; these errors surface only
//! through [`crate::CartStore::try_read`] and from notify collaborators.

use basket_core::CoreError;
use basket_store::StoreError;
use thiserror::Error;

/// Errors that can occur while reading or persisting the cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// The stored document could not be decoded or encoded.
    #[error("cart document error: {0}")]
    Document(#[from] CoreError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// A notify collaborator could not show its notice (e.g. no mount point).
#[derive(Debug, Error)]
#[error("notice not shown: {0}")]
pub struct NoticeError(pub String);

/// Result type for Basket operations.
pub type Result<T> = std::result::Result<T, CartError>;
