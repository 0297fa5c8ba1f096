use crate::types::{Item, ItemId};

/// Read-only access to the item catalog.
///
/// The update-check endpoint only ever reads through this trait; nothing in
/// one request evaluation mutates the store, and every lookup is total —
/// unknown ids yield `None` or `false`, never an error.
pub trait ItemStore: Send + Sync {
    /// Fetch an item by id.
    fn get_item(&self, id: ItemId) -> Option<Item>;

    /// Whether the item is offered free of charge.
    ///
    /// The pricing model behind this predicate is the integration layer's
    /// business; unknown ids are not free.
    fn is_free(&self, id: ItemId) -> bool;
}

impl<S: ItemStore + ?Sized> ItemStore for &S {
    fn get_item(&self, id: ItemId) -> Option<Item> {
        (**self).get_item(id)
    }

    fn is_free(&self, id: ItemId) -> bool {
        (**self).is_free(id)
    }
}
