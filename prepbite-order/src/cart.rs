use std::sync::Arc;

use prepbite_core::storage::{read_slot, write_slot};
use prepbite_core::{CoreError, KeyValueStore, NotificationSink, Slot, StorageError};

use crate::models::{items_total, LineItem};

/// Storage slot holding the serialized cart
pub const CART_KEY: &str = "prepbiteCart";

pub const ITEM_ADDED_MESSAGE: &str = "Item added to cart successfully.";

/// The shopper's cart, mirrored to a single storage slot.
///
/// The slot is read once when the store is opened and rewritten in full after
/// every change. A change whose write fails is not applied in memory either,
/// so the in-memory items always match the last successful write.
pub struct CartStore {
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn NotificationSink>,
    key: String,
    items: Vec<LineItem>,
    restored: Slot<()>,
}

impl CartStore {
    pub fn open(
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Result<Self, CartError> {
        Self::open_with_key(store, notifier, CART_KEY)
    }

    /// Restore the cart from `key`. A missing or malformed slot yields an
    /// empty cart; [`CartStore::restored_from`] tells the two apart.
    pub fn open_with_key(
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn NotificationSink>,
        key: impl Into<String>,
    ) -> Result<Self, CartError> {
        let key = key.into();
        let slot: Slot<Vec<LineItem>> = read_slot(store.as_ref(), &key).map_err(CartError::Read)?;

        if let Slot::Corrupt(reason) = &slot {
            tracing::warn!("Discarding unreadable cart in {}: {}", key, reason);
        }

        let restored = slot.status();
        let items = slot.unwrap_or_default();
        tracing::debug!("Cart restored from {} with {} item(s)", key, items.len());

        Ok(Self {
            store,
            notifier,
            key,
            items,
            restored,
        })
    }

    /// How the cart was initialised: from saved items, from nothing, or
    /// after discarding a malformed payload.
    pub fn restored_from(&self) -> &Slot<()> {
        &self.restored
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item. Identical items are kept as separate entries.
    pub fn add_item(&mut self, item: LineItem) -> Result<(), CartError> {
        let mut next = self.items.clone();
        next.push(item);
        self.commit(next)?;

        self.notifier.notify(ITEM_ADDED_MESSAGE);
        Ok(())
    }

    /// Remove the item at `index`, with array-splice semantics: a negative
    /// index counts back from the end, and an index past the end removes
    /// nothing. The cart is written back either way.
    pub fn remove_item(&mut self, index: i64) -> Result<Option<LineItem>, CartError> {
        let mut next = self.items.clone();
        let removed = splice_position(next.len(), index).map(|position| next.remove(position));
        self.commit(next)?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<(), CartError> {
        self.commit(Vec::new())
    }

    /// Sum of price times quantity over all items, saturating at the `i64` bounds
    pub fn total(&self) -> i64 {
        items_total(&self.items)
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    fn commit(&mut self, next: Vec<LineItem>) -> Result<(), CartError> {
        if let Err(e) = write_slot(self.store.as_ref(), &self.key, &next) {
            tracing::error!("Failed to save cart to {}: {}", self.key, e);
            return Err(CartError::Write(e));
        }

        tracing::info!(
            "Cart saved: {} item(s), total {}",
            next.len(),
            items_total(&next)
        );
        self.items = next;
        Ok(())
    }
}

/// Position a one-element splice at `index` would remove, if any.
fn splice_position(len: usize, index: i64) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let start = if index < 0 { (len + index).max(0) } else { index };

    if start < len {
        usize::try_from(start).ok()
    } else {
        None
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Failed to read cart: {0}")]
    Read(StorageError),

    #[error("Failed to save cart: {0}")]
    Write(CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use prepbite_core::LogNotifier;
    use prepbite_store::MemoryStore;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier(Mutex<Vec<String>>);

    impl NotificationSink for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    fn item(name: &str, price: i64) -> LineItem {
        LineItem::new(name, price, price, "Medium Spice | 1 Person Serving(s) | Vegetarian")
    }

    fn open_cart(store: &Arc<MemoryStore>) -> CartStore {
        CartStore::open(store.clone(), Arc::new(LogNotifier)).unwrap()
    }

    fn names(cart: &CartStore) -> Vec<&str> {
        cart.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_fresh_cart_is_empty() {
        let store = Arc::new(MemoryStore::new());
        let cart = open_cart(&store);

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.restored_from(), &Slot::Empty);
    }

    #[test]
    fn test_add_updates_total_and_count() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = open_cart(&store);
        cart.clear().unwrap();

        cart.add_item(item("Hakka Noodles Kit", 140)).unwrap();
        assert_eq!(cart.total(), 140);
        assert_eq!(cart.item_count(), 1);

        cart.add_item(item("Hakka Noodles Kit", 120)).unwrap();
        assert_eq!(cart.total(), 260);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_quantities_weight_totals() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = open_cart(&store);

        cart.add_item(item("Korean Rice Kit", 160).with_quantity(3)).unwrap();
        cart.add_item(item("Fried Rice Kit", 130)).unwrap();
        assert_eq!(cart.total(), 610);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_identical_items_are_not_merged() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = open_cart(&store);

        cart.add_item(item("Pasta", 140)).unwrap();
        cart.add_item(item("Pasta", 140)).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0], cart.items()[1]);
    }

    #[test]
    fn test_add_notifies() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let mut cart = CartStore::open(store, notifier.clone()).unwrap();

        cart.add_item(item("Pasta", 140)).unwrap();
        assert_eq!(*notifier.0.lock().unwrap(), vec![ITEM_ADDED_MESSAGE.to_string()]);
    }

    #[test]
    fn test_remove_by_position_keeps_order() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = open_cart(&store);
        for name in ["a", "b", "c", "d"] {
            cart.add_item(item(name, 100)).unwrap();
        }

        let removed = cart.remove_item(1).unwrap();
        assert_eq!(removed.map(|i| i.name), Some("b".to_string()));
        assert_eq!(names(&cart), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_out_of_range_changes_nothing() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = open_cart(&store);
        cart.add_item(item("a", 100)).unwrap();
        cart.add_item(item("b", 100)).unwrap();

        assert!(cart.remove_item(2).unwrap().is_none());
        assert!(cart.remove_item(99).unwrap().is_none());
        assert_eq!(names(&cart), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_negative_index_counts_from_end() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = open_cart(&store);
        for name in ["a", "b", "c"] {
            cart.add_item(item(name, 100)).unwrap();
        }

        cart.remove_item(-1).unwrap();
        assert_eq!(names(&cart), vec!["a", "b"]);

        // A start before the beginning clamps to the first item.
        cart.remove_item(-10).unwrap();
        assert_eq!(names(&cart), vec!["b"]);
    }

    #[test]
    fn test_splice_position() {
        assert_eq!(splice_position(3, 0), Some(0));
        assert_eq!(splice_position(3, 2), Some(2));
        assert_eq!(splice_position(3, 3), None);
        assert_eq!(splice_position(3, -1), Some(2));
        assert_eq!(splice_position(3, -3), Some(0));
        assert_eq!(splice_position(3, -4), Some(0));
        assert_eq!(splice_position(0, 0), None);
        assert_eq!(splice_position(0, -1), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = open_cart(&store);
        cart.add_item(item("a", 100)).unwrap();

        cart.clear().unwrap();
        let once = cart.items().to_vec();
        cart.clear().unwrap();

        assert_eq!(cart.items(), once.as_slice());
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.item_count(), 0);
        assert_eq!(store.get(CART_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_reopen_restores_every_field() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = open_cart(&store);
        cart.add_item(LineItem::new("Paneer Tikka Kit", 150, 190, "Hot Spice | 2 Persons Serving(s) | Vegetarian"))
            .unwrap();
        cart.add_item(item("Manchurian Kit", 140).with_quantity(2)).unwrap();

        let reopened = open_cart(&store);
        assert_eq!(reopened.items(), cart.items());
        assert_eq!(reopened.restored_from(), &Slot::Loaded(()));
        assert_eq!(reopened.total(), 470);
    }

    #[test]
    fn test_malformed_slot_opens_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(CART_KEY, "[{\"name\": 12").unwrap();

        let mut cart = open_cart(&store);
        assert!(cart.is_empty());
        assert!(cart.restored_from().is_corrupt());

        cart.add_item(item("a", 100)).unwrap();
        assert_eq!(open_cart(&store).len(), 1);
    }

    #[test]
    fn test_restored_oversized_prices_do_not_overflow() {
        let store = Arc::new(MemoryStore::new());
        let slot = format!(
            "[{{\"name\":\"x\",\"basePrice\":1,\"price\":{},\"customization\":\"\",\"quantity\":2}}]",
            i64::MAX / 2 + 1
        );
        store.set(CART_KEY, &slot).unwrap();

        let mut cart = open_cart(&store);
        assert_eq!(cart.restored_from(), &Slot::Loaded(()));
        assert_eq!(cart.total(), i64::MAX);

        cart.add_item(item("a", 100)).unwrap();
        assert_eq!(cart.total(), i64::MAX);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_write_failure_propagates_and_keeps_state() {
        let store = Arc::new(MemoryStore::with_quota(160));
        let mut cart = open_cart(&store);
        cart.add_item(item("a", 100)).unwrap();

        let big = LineItem::new("b".repeat(200), 100, 100, "");
        let err = cart.add_item(big).unwrap_err();
        assert!(matches!(err, CartError::Write(CoreError::Storage(StorageError::QuotaExceeded { .. }))));
        assert_eq!(names(&cart), vec!["a"]);
        assert_eq!(open_cart(&store).len(), 1);
    }

    #[test]
    fn test_custom_key() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = CartStore::open_with_key(store.clone(), Arc::new(LogNotifier), "testCart").unwrap();
        cart.add_item(item("a", 100)).unwrap();

        assert!(store.get("testCart").unwrap().is_some());
        assert!(store.get(CART_KEY).unwrap().is_none());
    }
}
