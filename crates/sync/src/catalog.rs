use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use rustc_hash::FxHashMap;
use slotsync_primitives::ItemId;

/// Source of item display names.
pub trait ItemCatalog {
	/// Returns the name of `item`, or `None` if the host has no metadata.
	fn item_name(&self, item: ItemId) -> Option<String>;
}

impl<S: BuildHasher> ItemCatalog for HashMap<ItemId, String, S> {
	fn item_name(&self, item: ItemId) -> Option<String> {
		self.get(&item).cloned()
	}
}

impl ItemCatalog for BTreeMap<ItemId, String> {
	fn item_name(&self, item: ItemId) -> Option<String> {
		self.get(&item).cloned()
	}
}

/// Memoizes catalog lookups, including misses.
#[derive(Debug, Default)]
pub struct NameCache {
	names: FxHashMap<ItemId, Option<String>>,
}

impl NameCache {
	/// Returns the cached name of `item`, asking `catalog` on first use.
	pub fn get<C: ItemCatalog + ?Sized>(&mut self, catalog: &C, item: ItemId) -> Option<&str> {
		self.names
			.entry(item)
			.or_insert_with(|| catalog.item_name(item))
			.as_deref()
	}

	/// Forgets every cached name.
	pub fn clear(&mut self) {
		self.names.clear();
	}

	/// Returns the number of cached lookups.
	pub fn len(&self) -> usize {
		self.names.len()
	}

	/// Returns true if nothing is cached.
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	struct Counting {
		calls: Cell<usize>,
	}

	impl ItemCatalog for Counting {
		fn item_name(&self, item: ItemId) -> Option<String> {
			self.calls.set(self.calls.get() + 1);
			(item.get() == 1).then(|| "Ring of dueling(8)".to_string())
		}
	}

	#[test]
	fn caches_hits_and_misses() {
		let catalog = Counting { calls: Cell::new(0) };
		let mut cache = NameCache::default();
		let one = ItemId::new(1).expect("id");
		let two = ItemId::new(2).expect("id");

		assert_eq!(cache.get(&catalog, one), Some("Ring of dueling(8)"));
		assert_eq!(cache.get(&catalog, one), Some("Ring of dueling(8)"));
		assert_eq!(cache.get(&catalog, two), None);
		assert_eq!(cache.get(&catalog, two), None);
		assert_eq!(catalog.calls.get(), 2);

		cache.clear();
		assert!(cache.is_empty());
	}
}
