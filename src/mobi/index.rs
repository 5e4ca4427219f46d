//! Tagged-array lookup on index entries.

use super::types::models::IndexEntry;

/// Returns the value array stored under `tag_id` in `entry`.
///
/// A missing entry is simply "not found". The scan is linear and the first
/// pair with a matching id wins. The returned slice borrows the entry's own
/// storage.
pub fn lookup(entry: Option<&IndexEntry>, tag_id: u32) -> Option<&[u32]> {
    entry?
        .tags
        .iter()
        .find(|tag| tag.tag_id == tag_id)
        .map(|tag| tag.values.as_slice())
}

/// Returns the first value stored under `tag_id`, if any.
pub fn first_value(entry: Option<&IndexEntry>, tag_id: u32) -> Option<u32> {
    lookup(entry, tag_id).and_then(|values| values.first().copied())
}
