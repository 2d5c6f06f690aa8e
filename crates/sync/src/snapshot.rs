use std::collections::BTreeSet;

use rustc_hash::FxHashSet;
use slotsync_primitives::ItemId;

/// The set of item ids held at one notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySnapshot {
	items: FxHashSet<ItemId>,
}

impl InventorySnapshot {
	/// Builds a snapshot from raw host ids, dropping empty-slot values.
	pub fn from_raw(raw: impl IntoIterator<Item = i64>) -> Self {
		raw.into_iter().filter_map(ItemId::from_raw).collect()
	}

	/// Returns true if `item` is held.
	#[inline]
	pub fn contains(&self, item: ItemId) -> bool {
		self.items.contains(&item)
	}

	/// Returns the number of distinct ids held.
	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if nothing is held.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns ids held now but not in `previous`, in ascending order.
	pub fn newly_acquired(&self, previous: &InventorySnapshot) -> BTreeSet<ItemId> {
		self.items.difference(&previous.items).copied().collect()
	}
}

impl FromIterator<ItemId> for InventorySnapshot {
	fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().collect(),
		}
	}
}
