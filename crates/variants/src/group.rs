use std::borrow::Cow;
use std::fmt;

use slotsync_primitives::ItemId;

/// Dense index of a group inside its registry, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub(crate) u32);

impl GroupId {
	/// Returns the declaration index of this group.
	#[inline]
	pub const fn index(self) -> usize {
		self.0 as usize
	}
}

impl fmt::Display for GroupId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A set of item ids treated as interchangeable placements.
///
/// Members keep their declaration order. Ids claimed by an earlier group
/// (under the registry's duplicate policy) are not members here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantGroup {
	pub(crate) id: GroupId,
	pub(crate) name: Cow<'static, str>,
	pub(crate) members: Box<[ItemId]>,
}

impl VariantGroup {
	/// Returns the group's registry index.
	#[inline]
	pub fn id(&self) -> GroupId {
		self.id
	}

	/// Returns the human-readable group name.
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the effective members in declaration order.
	#[inline]
	pub fn members(&self) -> &[ItemId] {
		&self.members
	}

	/// Returns true if `id` belongs to this group.
	#[inline]
	pub fn contains(&self, id: ItemId) -> bool {
		self.members.contains(&id)
	}

	/// Returns the members other than `id`.
	pub fn siblings(&self, id: ItemId) -> impl Iterator<Item = ItemId> + '_ {
		self.members.iter().copied().filter(move |&m| m != id)
	}

	/// Returns the number of effective members.
	#[inline]
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Returns true if every declared member was claimed by another group.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}
}
