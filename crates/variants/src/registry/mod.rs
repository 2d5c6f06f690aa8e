//! Immutable variant group index.
//!
//! # Invariants
//!
//! - Every indexed id maps to exactly one group, and that group lists it.
//! - The index never changes after [`VariantRegistryBuilder::build`].

mod builder;
mod collision;
mod error;

pub use builder::VariantRegistryBuilder;
pub use collision::{Collision, DuplicatePolicy};
pub use error::RegistryError;
use rustc_hash::FxHashMap;
use slotsync_primitives::ItemId;

use crate::group::{GroupId, VariantGroup};

/// Lookup from item id to the variant group it belongs to.
#[derive(Debug, Clone)]
pub struct VariantRegistry {
	pub(crate) label: &'static str,
	pub(crate) groups: Vec<VariantGroup>,
	pub(crate) by_item: FxHashMap<ItemId, GroupId>,
	pub(crate) collisions: Vec<Collision>,
}

impl VariantRegistry {
	/// Returns the label given at build time.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the group containing `id`, if any.
	#[inline]
	pub fn lookup(&self, id: ItemId) -> Option<&VariantGroup> {
		let gid = self.by_item.get(&id)?;
		self.groups.get(gid.index())
	}

	/// Returns the id of the group containing `id`, if any.
	#[inline]
	pub fn group_of(&self, id: ItemId) -> Option<GroupId> {
		self.by_item.get(&id).copied()
	}

	/// Returns true if `a` and `b` are distinct members of the same group.
	pub fn are_variants(&self, a: ItemId, b: ItemId) -> bool {
		a != b && self.group_of(a).is_some_and(|g| self.group_of(b) == Some(g))
	}

	/// Returns true if `id` belongs to any group.
	#[inline]
	pub fn is_variant(&self, id: ItemId) -> bool {
		self.by_item.contains_key(&id)
	}

	/// Returns the group with the given index.
	#[inline]
	pub fn group(&self, id: GroupId) -> Option<&VariantGroup> {
		self.groups.get(id.index())
	}

	/// Returns all groups in declaration order.
	pub fn groups(&self) -> impl Iterator<Item = &VariantGroup> + '_ {
		self.groups.iter()
	}

	/// Returns recorded collisions for diagnostics.
	#[inline]
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}

	/// Returns the number of indexed ids.
	#[inline]
	pub fn item_count(&self) -> usize {
		self.by_item.len()
	}

	/// Returns the number of declared groups.
	#[inline]
	pub fn group_count(&self) -> usize {
		self.groups.len()
	}
}

#[cfg(test)]
mod tests;
