use log::debug;
use upcheck_store::{Channel, FileTable, ItemId, ItemStore};

use crate::hooks::Hooks;

/// Resolve the download URL for one release channel of an item.
///
/// A missing item, an empty file table, or a selected key that does not
/// resolve all yield an empty URL rather than an error. The requested-file
/// and package-URL hooks run in that order either way and may substitute
/// their own value.
#[must_use]
pub fn resolve_package(
    store: &dyn ItemStore,
    hooks: &Hooks,
    item_id: ItemId,
    channel: Channel,
) -> String {
    let (files, key) = match store.get_item(item_id) {
        Some(item) => {
            let files = item.files(channel).clone();
            let key = files.selected_key();
            (files, key)
        }
        None => {
            debug!("package lookup for unknown item {item_id}");
            (FileTable::default(), 0)
        }
    };

    let url = files.selected_url().unwrap_or_default().to_string();
    let url = hooks.filter_requested_file(url, &files, key);
    hooks.filter_package_url(url, item_id)
}
