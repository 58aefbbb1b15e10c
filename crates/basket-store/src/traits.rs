//! SlotStorage trait: the abstract interface for slot persistence.
//!
//! This trait keeps the cart storage-agnostic. Implementations include
//! SQLite (durable) and in-memory (tests).

use std::sync::Arc;

use crate::error::Result;

/// A string key-value store addressed by slot name.
///
/// # Design Notes
///
/// - **Absent is not an error**: `get` on an unknown key returns `Ok(None)`.
/// - **Whole-value writes**: `set` replaces the value in full.
/// - **Idempotent removal**: removing an absent key succeeds.
pub trait SlotStorage: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key` and its value.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySlots;

    fn write_through<S: SlotStorage>(slots: S) {
        slots.set("cart", "[]").unwrap();
    }

    #[test]
    fn test_shared_handles_see_same_slot() {
        let slots = Arc::new(MemorySlots::new());
        write_through(Arc::clone(&slots));
        assert_eq!(slots.get("cart").unwrap().as_deref(), Some("[]"));

        write_through(&*slots);
        slots.remove("cart").unwrap();
        assert_eq!(slots.get("cart").unwrap(), None);
    }
}
