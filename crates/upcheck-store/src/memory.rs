use std::collections::HashMap;

use crate::traits::ItemStore;
use crate::types::{Item, ItemId};

/// In-memory [`ItemStore`] for tests and embedded catalogs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<ItemId, StoredItem>,
}

#[derive(Debug, Clone)]
struct StoredItem {
    item: Item,
    free: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a paid item. Replaces any previous item with the same id.
    pub fn insert(&mut self, item: Item) {
        self.items
            .insert(item.id, StoredItem { item, free: false });
    }

    /// Insert an item offered free of charge.
    pub fn insert_free(&mut self, item: Item) {
        self.items.insert(item.id, StoredItem { item, free: true });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemStore for MemoryStore {
    fn get_item(&self, id: ItemId) -> Option<Item> {
        self.items.get(&id).map(|stored| stored.item.clone())
    }

    fn is_free(&self, id: ItemId) -> bool {
        self.items.get(&id).is_some_and(|stored| stored.free)
    }
}
