//! Error types for Basket Core.

use thiserror::Error;

/// Errors that can occur while decoding or encoding a cart document.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The stored text is not JSON, or not a JSON array.
    #[error("malformed cart document: {0}")]
    MalformedDocument(String),

    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
