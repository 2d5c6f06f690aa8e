//! In-place layout edits.
//!
//! # Invariants
//!
//! - Finders break ties by the lowest position, whatever the storage order.
//! - [`Layout::insert_at_same_row`] never moves an occupant out of its row,
//!   except the single occupant pushed past the row end, which is appended
//!   after the layout's highest position.
//! - No edit places an item past [`MAX_POSITION`].

use slotsync_primitives::{ItemId, MAX_POSITION, Position, row_end};
use slotsync_variants::VariantGroup;

use crate::layout::Layout;

/// Outcome of [`Layout::insert_at_same_row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
	/// Where the inserted item now sits.
	pub position: Position,
	/// The row-end occupant that had to leave its row, if any.
	pub displaced: Option<Displaced>,
}

/// An occupant pushed off the end of its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displaced {
	pub item: ItemId,
	pub from: Position,
	pub to: Position,
}

impl Layout {
	/// Returns the lowest position whose item satisfies `pred`.
	pub fn find_position(&self, mut pred: impl FnMut(ItemId) -> bool) -> Option<Position> {
		self.iter()
			.filter(|&(_, id)| pred(id))
			.map(|(pos, _)| pos)
			.min()
	}

	/// Returns the lowest position holding `id`.
	pub fn find_item_position(&self, id: ItemId) -> Option<Position> {
		self.find_position(|item| item == id)
	}

	/// Returns the lowest position holding any member of `group`.
	pub fn find_variant_position(&self, group: &VariantGroup) -> Option<Position> {
		self.find_position(|item| group.contains(item))
	}

	/// Inserts `id` at `pos`, shifting only occupants of the same row.
	///
	/// An empty `pos` is filled directly. Otherwise everything in
	/// `pos..row_end` moves one slot right, `id` lands at `pos`, and whatever
	/// sat at the row end is appended after the highest occupied position.
	///
	/// Returns `None`, leaving the layout untouched, if `pos` or the appended
	/// position would lie past [`MAX_POSITION`].
	pub fn insert_at_same_row(&mut self, pos: Position, id: ItemId) -> Option<Insertion> {
		if pos > MAX_POSITION {
			tracing::debug!(pos, item = %id, "insert position out of range");
			return None;
		}

		if self.get(pos).is_none() {
			self.set_item(pos, Some(id));
			tracing::trace!(pos, item = %id, "inserted into empty slot");
			return Some(Insertion {
				position: pos,
				displaced: None,
			});
		}

		let end = row_end(pos);
		let evicted = self.get(end);
		// The highest position is unchanged by the shift; the evicted item goes after it.
		if evicted.is_some() && self.max_position().is_some_and(|max| max >= MAX_POSITION) {
			tracing::debug!(pos, item = %id, "no room to append displaced item");
			return None;
		}

		// Right to left so each slot is read before it is overwritten.
		for p in (pos..end).rev() {
			let moved = self.get(p);
			self.set_item(p + 1, moved);
		}
		self.set_item(pos, Some(id));

		let displaced = evicted.map(|item| {
			let to = self.max_position().map_or(0, |max| max + 1);
			self.set_item(to, Some(item));
			Displaced {
				item,
				from: end,
				to,
			}
		});

		tracing::trace!(pos, item = %id, ?displaced, "inserted with row shift");
		Some(Insertion {
			position: pos,
			displaced,
		})
	}
}

#[cfg(test)]
mod tests;
