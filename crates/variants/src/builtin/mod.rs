//! Builtin variant table and the process-wide registry built from it.

mod data;

use std::sync::LazyLock;

pub use data::BUILTIN_GROUPS;

use crate::registry::{DuplicatePolicy, VariantRegistry, VariantRegistryBuilder};

/// A static group declaration: a name and its raw member ids.
#[derive(Debug, Clone, Copy)]
pub struct VariantGroupDef {
	/// Display name of the group.
	pub name: &'static str,
	/// Member ids in declaration order.
	pub members: &'static [u32],
}

impl VariantGroupDef {
	/// Creates a declaration.
	pub const fn new(name: &'static str, members: &'static [u32]) -> Self {
		Self { name, members }
	}
}

static BUILTIN: LazyLock<VariantRegistry> = LazyLock::new(|| {
	let registry = VariantRegistryBuilder::new("builtin")
		.duplicate_policy(DuplicatePolicy::FirstWins)
		.extend(BUILTIN_GROUPS)
		.build()
		.unwrap_or_else(|e| panic!("builtin variant table: {e}"));
	tracing::info!(
		items = registry.item_count(),
		groups = registry.group_count(),
		collisions = registry.collisions().len(),
		"builtin variant registry ready"
	);
	registry
});

/// Returns the registry built from [`BUILTIN_GROUPS`].
///
/// Built on first use. Ids declared by several groups stay with the first
/// declaring group.
pub fn builtin() -> &'static VariantRegistry {
	&BUILTIN
}

#[cfg(test)]
mod tests {
	use slotsync_primitives::ItemId;

	use super::*;

	fn id(raw: u32) -> ItemId {
		ItemId::new(raw).expect("test id")
	}

	#[test]
	fn builtin_groups_recolors() {
		let registry = builtin();
		assert!(registry.are_variants(id(11850), id(13579)));
		assert!(!registry.are_variants(id(11850), id(11852)));
		assert_eq!(registry.group_count(), BUILTIN_GROUPS.len());
	}

	#[test]
	fn shared_sceptre_ids_resolve_to_first_group() {
		let registry = builtin();
		let group = registry.lookup(id(26948)).expect("sceptre group");
		assert_eq!(group.name(), "Pharaoh's sceptre");
		assert!(registry.collisions().iter().any(|c| c.item == id(26948)));
	}

	#[test]
	fn builtin_index_is_a_partition() {
		let registry = builtin();
		let listed: usize = registry.groups().map(|g| g.len()).sum();
		assert_eq!(listed, registry.item_count());
	}
}
