use crate::SortOrder;
use crate::artifacts::entry::entry::Entry;

/// Order entries in place. Both orderings are stable: entries that compare
/// equal keep the order they arrived in.
pub fn sort_entries(entries: &mut [Entry], order: SortOrder) {
    match order {
        SortOrder::Name => entries.sort_by_cached_key(|entry| entry.name().to_lowercase()),
        SortOrder::State => entries.sort_by_key(|entry| entry.state().priority()),
    }
}
