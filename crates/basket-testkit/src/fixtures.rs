//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::{Arc, Mutex, MutexGuard};

use basket::{CartObserver, CartStore, CartView, Notice, NoticeError, Product};
use basket_store::{MemorySlots, SlotStorage};

/// Something an observer was told.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    Badge(i64),
    Render(CartView),
    Notify(Notice),
}

/// Observer that records every publication.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<CartEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn events(&self) -> Vec<CartEvent> {
        self.lock().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<CartEvent> {
        std::mem::take(&mut *self.lock())
    }

    pub fn badges(&self) -> Vec<i64> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                CartEvent::Badge(count) => Some(*count),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                CartEvent::Notify(notice) => Some(notice.clone()),
                _ => None,
            })
            .collect()
    }

    /// The most recent render, if any.
    pub fn last_render(&self) -> Option<CartView> {
        self.lock().iter().rev().find_map(|e| match e {
            CartEvent::Render(view) => Some(view.clone()),
            _ => None,
        })
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CartEvent>> {
        // A panicking test poisons the lock; the events are still usable.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CartObserver for RecordingObserver {
    fn render(&self, view: &CartView) {
        self.lock().push(CartEvent::Render(view.clone()));
    }

    fn badge(&self, count: i64) {
        self.lock().push(CartEvent::Badge(count));
    }

    fn notify(&self, notice: &Notice) -> Result<(), NoticeError> {
        self.lock().push(CartEvent::Notify(notice.clone()));
        Ok(())
    }
}

/// A cart store over shared in-memory slots, with a recording observer.
pub struct TestFixture {
    pub slots: Arc<MemorySlots>,
    pub observer: Arc<RecordingObserver>,
    pub store: CartStore<Arc<MemorySlots>>,
}

impl TestFixture {
    /// Create a fixture with an empty slot.
    pub fn new() -> Self {
        Self::with_slots(MemorySlots::new())
    }

    /// Create a fixture whose cart slot already holds `raw`.
    pub fn with_document(raw: &str) -> Self {
        Self::with_slots(MemorySlots::with_entries([("cart", raw)]))
    }

    fn with_slots(slots: MemorySlots) -> Self {
        let slots = Arc::new(slots);
        let observer = Arc::new(RecordingObserver::new());
        let mut store = CartStore::with_defaults(Arc::clone(&slots));
        store.subscribe(observer.clone());
        Self {
            slots,
            observer,
            store,
        }
    }

    /// The raw cart document, if the slot is occupied.
    pub fn document(&self) -> Option<String> {
        self.slots
            .get(&self.store.config().storage_key)
            .ok()
            .flatten()
    }

    /// A second, unobserved store over the same slots.
    pub fn second_tab(&self) -> CartStore<Arc<MemorySlots>> {
        CartStore::new(Arc::clone(&self.slots), self.store.config().clone())
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The shop's demo catalog, ids 1 through 10.
pub fn catalog() -> Vec<Product> {
    [
        ("Wireless Headphones", 99.99, 1062),
        ("Smartwatch Pro", 149.00, 903),
        ("Mirrorless Camera", 649.00, 250),
        ("Running Sneakers", 79.50, 21),
        ("Urban Backpack", 59.99, 1084),
        ("Polarized Sunglasses", 39.99, 582),
        ("Ultrabook 14\"", 899.00, 7),
        ("5G Smartphone", 499.00, 1011),
        ("Single-Origin Coffee", 16.50, 35),
        ("Ergonomic Chair", 219.00, 433),
    ]
    .into_iter()
    .zip(1i64..)
    .map(|((title, price, photo), id)| {
        Product::new(
            id,
            title,
            price,
            format!("https://picsum.photos/id/{photo}/800/800"),
        )
    })
    .collect()
}
