use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Grouped key-value configuration owned by the host.
///
/// Reads are infallible: a missing key is `None`. Writes may fail and are
/// never retried by callers in this crate.
pub trait ConfigStore {
	/// Returns the value stored under `group`/`key`.
	fn get(&self, group: &str, key: &str) -> Option<String>;

	/// Stores `value` under `group`/`key`.
	fn set(&mut self, group: &str, key: &str, value: &str) -> Result<(), StoreError>;

	/// Removes `group`/`key`.
	fn unset(&mut self, group: &str, key: &str) -> Result<(), StoreError>;
}

/// In-memory [`ConfigStore`], sorted by group then key.
///
/// Deserializes from a table of tables:
///
/// ```toml
/// [banktags]
/// tagtabs = "melee,ranged"
/// layout_melee = "4151,-1,11802"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
	groups: BTreeMap<String, BTreeMap<String, String>>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the store with one more entry set.
	pub fn with(mut self, group: &str, key: &str, value: &str) -> Self {
		self.insert(group, key, value);
		self
	}

	/// Sets an entry.
	pub fn insert(&mut self, group: &str, key: &str, value: &str) {
		self.groups
			.entry(group.to_string())
			.or_default()
			.insert(key.to_string(), value.to_string());
	}

	/// Iterates `(group, key, value)` in sorted order.
	pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
		self.groups.iter().flat_map(|(group, keys)| {
			keys.iter()
				.map(move |(key, value)| (group.as_str(), key.as_str(), value.as_str()))
		})
	}
}

impl ConfigStore for MemoryStore {
	fn get(&self, group: &str, key: &str) -> Option<String> {
		self.groups.get(group)?.get(key).cloned()
	}

	fn set(&mut self, group: &str, key: &str, value: &str) -> Result<(), StoreError> {
		self.insert(group, key, value);
		Ok(())
	}

	fn unset(&mut self, group: &str, key: &str) -> Result<(), StoreError> {
		if let Some(keys) = self.groups.get_mut(group) {
			keys.remove(key);
			if keys.is_empty() {
				self.groups.remove(group);
			}
		}
		Ok(())
	}
}
