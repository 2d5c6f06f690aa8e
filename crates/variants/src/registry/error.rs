use slotsync_primitives::ItemId;

/// Errors raised while building a [`VariantRegistry`](super::VariantRegistry).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// A group declares a value that is not a valid item id.
	#[error("registry {registry}: group {group:?} declares invalid item id {raw}")]
	InvalidItem {
		registry: &'static str,
		group: String,
		raw: u32,
	},

	/// An id is declared by two groups and the policy forbids it.
	#[error(
		"registry {registry}: item {item} declared by group {existing:?} and again by {incoming:?}"
	)]
	DuplicateMember {
		registry: &'static str,
		item: ItemId,
		existing: String,
		incoming: String,
	},
}
