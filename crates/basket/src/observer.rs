//! Presentation collaborators.
//!
//! A [`CartObserver`] receives what the page needs after each state change:
//! a render model for the cart table, the badge count, and a transient notice
//! after an add. All methods default to no-ops so an observer implements only
//! what it displays.

use std::time::Duration;

use basket_core::CartView;

use crate::error::NoticeError;

/// A transient, auto-dismissing acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    /// How long the notice stays visible before dismissing itself.
    pub dismiss_after: Duration,
}

/// Receives cart publications.
pub trait CartObserver: Send + Sync {
    /// Re-derive the visible cart from `view`.
    fn render(&self, _view: &CartView) {}

    /// Show the item count.
    fn badge(&self, _count: i64) {}

    /// Show a notice. Errors are ignored by the store.
    fn notify(&self, _notice: &Notice) -> Result<(), NoticeError> {
        Ok(())
    }
}
