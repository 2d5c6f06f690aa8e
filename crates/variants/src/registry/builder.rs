use std::borrow::Cow;
use std::collections::hash_map::Entry;

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use slotsync_primitives::ItemId;

use super::collision::{Collision, DuplicatePolicy};
use super::error::RegistryError;
use super::VariantRegistry;
use crate::builtin::VariantGroupDef;
use crate::group::{GroupId, VariantGroup};

struct PendingGroup {
	name: Cow<'static, str>,
	members: Vec<u32>,
}

/// Builder for constructing a [`VariantRegistry`].
pub struct VariantRegistryBuilder {
	label: &'static str,
	defs: Vec<PendingGroup>,
	policy: DuplicatePolicy,
}

impl VariantRegistryBuilder {
	/// Creates a new builder with the given label for error messages.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			defs: Vec::new(),
			policy: DuplicatePolicy::default(),
		}
	}

	/// Returns the number of groups registered so far.
	pub fn len(&self) -> usize {
		self.defs.len()
	}

	/// Returns true if no groups have been registered so far.
	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Sets the cross-group duplicate handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Adds one group declaration.
	pub fn push(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		members: impl IntoIterator<Item = u32>,
	) -> &mut Self {
		self.defs.push(PendingGroup {
			name: name.into(),
			members: members.into_iter().collect(),
		});
		self
	}

	/// Adds static group declarations in order.
	pub fn extend(mut self, defs: &'static [VariantGroupDef]) -> Self {
		for def in defs {
			self.push(def.name, def.members.iter().copied());
		}
		self
	}

	/// Builds the index, resolving cross-group duplicates by policy.
	///
	/// Ownership is decided in a first pass over all declarations; the second
	/// pass materializes each group with only the members it owns, so the
	/// resulting groups partition the indexed ids.
	pub fn build(self) -> Result<VariantRegistry, RegistryError> {
		let label = self.label;
		let policy = self.policy;

		let mut declared: Vec<Vec<ItemId>> = Vec::with_capacity(self.defs.len());
		let mut owner: HashMap<ItemId, GroupId> = HashMap::default();
		let mut collisions = Vec::new();

		for (idx, def) in self.defs.iter().enumerate() {
			let gid = GroupId(idx as u32);
			let mut seen: HashSet<ItemId> = HashSet::default();
			let mut ids = Vec::with_capacity(def.members.len());

			for &raw in &def.members {
				let id = ItemId::new(raw).ok_or_else(|| RegistryError::InvalidItem {
					registry: label,
					group: def.name.to_string(),
					raw,
				})?;
				if !seen.insert(id) {
					continue;
				}
				ids.push(id);

				match owner.entry(id) {
					Entry::Vacant(slot) => {
						slot.insert(gid);
					}
					Entry::Occupied(mut slot) => {
						let existing = *slot.get();
						let collision = match policy {
							DuplicatePolicy::Reject => {
								return Err(RegistryError::DuplicateMember {
									registry: label,
									item: id,
									existing: self.defs[existing.index()].name.to_string(),
									incoming: def.name.to_string(),
								});
							}
							DuplicatePolicy::FirstWins => Collision {
								item: id,
								kept: existing,
								dropped: gid,
								policy,
							},
							DuplicatePolicy::LastWins => {
								slot.insert(gid);
								Collision {
									item: id,
									kept: gid,
									dropped: existing,
									policy,
								}
							}
						};
						tracing::debug!(registry = label, %collision, "variant group collision");
						collisions.push(collision);
					}
				}
			}
			declared.push(ids);
		}

		let groups: Vec<VariantGroup> = self
			.defs
			.into_iter()
			.zip(declared)
			.enumerate()
			.map(|(idx, (def, ids))| {
				let gid = GroupId(idx as u32);
				let members = ids
					.into_iter()
					.filter(|id| owner.get(id) == Some(&gid))
					.collect();
				VariantGroup {
					id: gid,
					name: def.name,
					members,
				}
			})
			.collect();

		if !collisions.is_empty() {
			tracing::debug!(
				registry = label,
				collisions = collisions.len(),
				%policy,
				"resolved duplicate variant declarations"
			);
		}

		Ok(VariantRegistry {
			label,
			groups,
			by_item: owner,
			collisions,
		})
	}
}
