use indexmap::IndexMap;
use slotsync_primitives::{ItemId, Position};

/// Text dialect a layout was decoded from and will be encoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
	/// Comma-separated ids; the field index is the position.
	Dense,
	/// Comma-separated `item:position` pairs for occupied slots only.
	Explicit,
}

/// Positional storage for the dense dialect.
///
/// Invariant: the last slot is occupied (or there are no slots), so the
/// vector length is always `max_position + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenseSlots {
	slots: Vec<Option<ItemId>>,
}

impl DenseSlots {
	pub(crate) fn get(&self, pos: Position) -> Option<ItemId> {
		self.slots.get(pos as usize).copied().flatten()
	}

	pub(crate) fn set(&mut self, pos: Position, id: Option<ItemId>) -> Option<ItemId> {
		let idx = pos as usize;
		match id {
			Some(id) => {
				if idx >= self.slots.len() {
					self.slots.resize(idx + 1, None);
				}
				self.slots[idx].replace(id)
			}
			None => {
				let prev = self.slots.get_mut(idx).and_then(Option::take);
				while matches!(self.slots.last(), Some(None)) {
					self.slots.pop();
				}
				prev
			}
		}
	}

	/// Returns every slot from position 0 to the last occupied one.
	pub fn slots(&self) -> &[Option<ItemId>] {
		&self.slots
	}
}

/// Sparse storage for the explicit dialect, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitSlots {
	slots: IndexMap<Position, ItemId>,
}

impl ExplicitSlots {
	pub(crate) fn get(&self, pos: Position) -> Option<ItemId> {
		self.slots.get(&pos).copied()
	}

	pub(crate) fn set(&mut self, pos: Position, id: Option<ItemId>) -> Option<ItemId> {
		match id {
			Some(id) => self.slots.insert(pos, id),
			None => self.slots.shift_remove(&pos),
		}
	}
}

/// A decoded layout.
///
/// Each variant carries only the storage its dialect needs, so encoding is
/// exhaustive and dialects cannot be mixed. Equality compares the
/// position → item mapping; explicit insertion order is not significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
	/// Index-based layout.
	Dense(DenseSlots),
	/// Pair-based layout.
	Explicit(ExplicitSlots),
}

impl Default for Layout {
	fn default() -> Self {
		Self::Dense(DenseSlots::default())
	}
}

impl Layout {
	/// Creates an empty layout of the given dialect.
	pub fn new(dialect: Dialect) -> Self {
		match dialect {
			Dialect::Dense => Self::Dense(DenseSlots::default()),
			Dialect::Explicit => Self::Explicit(ExplicitSlots::default()),
		}
	}

	/// Returns the layout's dialect.
	pub fn dialect(&self) -> Dialect {
		match self {
			Self::Dense(_) => Dialect::Dense,
			Self::Explicit(_) => Dialect::Explicit,
		}
	}

	/// Returns the item at `pos`, if occupied.
	pub fn get(&self, pos: Position) -> Option<ItemId> {
		match self {
			Self::Dense(s) => s.get(pos),
			Self::Explicit(s) => s.get(pos),
		}
	}

	/// Stores `id` at `pos`, or clears `pos` when `id` is `None`.
	///
	/// Returns the previous occupant. Dense layouts grow to cover `pos`.
	pub fn set_item(&mut self, pos: Position, id: Option<ItemId>) -> Option<ItemId> {
		match self {
			Self::Dense(s) => s.set(pos, id),
			Self::Explicit(s) => s.set(pos, id),
		}
	}

	/// Clears `pos`, returning the previous occupant.
	pub fn remove(&mut self, pos: Position) -> Option<ItemId> {
		self.set_item(pos, None)
	}

	/// Returns the number of occupied positions.
	pub fn len(&self) -> usize {
		match self {
			Self::Dense(s) => s.slots.iter().flatten().count(),
			Self::Explicit(s) => s.slots.len(),
		}
	}

	/// Returns true if no position is occupied.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Dense(s) => s.slots.is_empty(),
			Self::Explicit(s) => s.slots.is_empty(),
		}
	}

	/// Returns the highest occupied position.
	pub fn max_position(&self) -> Option<Position> {
		match self {
			Self::Dense(s) => s.slots.len().checked_sub(1).map(|p| p as Position),
			Self::Explicit(s) => s.slots.keys().copied().max(),
		}
	}

	/// Returns true if any position holds `id`.
	pub fn contains_item(&self, id: ItemId) -> bool {
		self.iter().any(|(_, item)| item == id)
	}

	/// Iterates occupied positions in storage order.
	///
	/// Dense layouts yield ascending positions; explicit layouts yield
	/// insertion order.
	pub fn iter(&self) -> Iter<'_> {
		match self {
			Self::Dense(s) => Iter::Dense(s.slots.iter().enumerate()),
			Self::Explicit(s) => Iter::Explicit(s.slots.iter()),
		}
	}

	/// Returns occupied positions sorted by position.
	pub fn entries(&self) -> Vec<(Position, ItemId)> {
		let mut entries: Vec<_> = self.iter().collect();
		entries.sort_unstable_by_key(|&(pos, _)| pos);
		entries
	}
}

/// Iterator over a layout's occupied `(position, item)` pairs.
pub enum Iter<'a> {
	#[doc(hidden)]
	Dense(std::iter::Enumerate<std::slice::Iter<'a, Option<ItemId>>>),
	#[doc(hidden)]
	Explicit(indexmap::map::Iter<'a, Position, ItemId>),
}

impl Iterator for Iter<'_> {
	type Item = (Position, ItemId);

	fn next(&mut self) -> Option<Self::Item> {
		match self {
			Self::Dense(it) => it.find_map(|(pos, slot)| slot.map(|id| (pos as Position, id))),
			Self::Explicit(it) => it.next().map(|(&pos, &id)| (pos, id)),
		}
	}
}

impl<'a> IntoIterator for &'a Layout {
	type Item = (Position, ItemId);
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn id(raw: u32) -> ItemId {
		ItemId::new(raw).expect("test id")
	}

	#[test]
	fn dense_trims_trailing_gaps() {
		let mut layout = Layout::new(Dialect::Dense);
		layout.set_item(2, Some(id(10)));
		layout.set_item(5, Some(id(20)));
		assert_eq!(layout.max_position(), Some(5));

		assert_eq!(layout.remove(5), Some(id(20)));
		assert_eq!(layout.max_position(), Some(2));
		assert_eq!(layout.len(), 1);

		layout.remove(2);
		assert!(layout.is_empty());
		assert_eq!(layout.max_position(), None);
	}

	#[test]
	fn explicit_keeps_insertion_order() {
		let mut layout = Layout::new(Dialect::Explicit);
		layout.set_item(9, Some(id(1)));
		layout.set_item(3, Some(id(2)));
		layout.set_item(9, Some(id(3)));
		let order: Vec<_> = layout.iter().collect();
		assert_eq!(order, vec![(9, id(3)), (3, id(2))]);
		assert_eq!(layout.entries(), vec![(3, id(2)), (9, id(3))]);
	}

	#[test]
	fn removing_an_empty_slot_is_a_noop() {
		let mut layout = Layout::new(Dialect::Explicit);
		assert_eq!(layout.remove(4), None);
		assert!(layout.is_empty());
	}
}
