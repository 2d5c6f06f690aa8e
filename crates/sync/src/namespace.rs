//! Namespace resolution for layouts, tag tabs, and item tags.
//!
//! A layout may live in the primary group or in the alternate group written by
//! the layouts extension. Reads prefer a non-empty alternate entry; writes go
//! to the same place a read would have found, so one tag's layout is never
//! split across groups.

use slotsync_primitives::ItemId;

use crate::error::StoreError;
use crate::keys::{self, BANK_TAGS_GROUP, LAYOUTS_GROUP, TAG_TABS_KEY};
use crate::store::ConfigStore;

/// Store group holding a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
	/// The host's own tagging group.
	Primary,
	/// The layouts extension's group.
	Alternate,
}

impl Namespace {
	/// Returns the store group name.
	pub const fn group(self) -> &'static str {
		match self {
			Self::Primary => BANK_TAGS_GROUP,
			Self::Alternate => LAYOUTS_GROUP,
		}
	}
}

/// Layout text read from the store, with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredLayout {
	pub text: String,
	pub namespace: Namespace,
}

/// Typed access to the host entries synchronization reads and writes.
pub struct HostStore<'s, S: ?Sized> {
	store: &'s mut S,
}

impl<'s, S: ConfigStore + ?Sized> HostStore<'s, S> {
	/// Wraps a store.
	pub fn new(store: &'s mut S) -> Self {
		Self { store }
	}

	fn non_empty(&self, group: &str, key: &str) -> Option<String> {
		self.store.get(group, key).filter(|v| !v.is_empty())
	}

	/// Returns the tag tab names in stored order, skipping blanks.
	pub fn tag_tabs(&self) -> Vec<String> {
		self.non_empty(BANK_TAGS_GROUP, TAG_TABS_KEY)
			.map(|list| {
				list.split(',')
					.filter(|name| !name.trim().is_empty())
					.map(str::to_string)
					.collect()
			})
			.unwrap_or_default()
	}

	/// Returns the namespace a write for `tag` must target.
	pub fn resolve(&self, tag: &str) -> Namespace {
		if self.non_empty(LAYOUTS_GROUP, &keys::layout_key(tag)).is_some() {
			Namespace::Alternate
		} else {
			Namespace::Primary
		}
	}

	/// Reads the layout for `tag`, preferring the alternate namespace.
	pub fn read_layout(&self, tag: &str) -> Option<StoredLayout> {
		let key = keys::layout_key(tag);
		[Namespace::Alternate, Namespace::Primary]
			.into_iter()
			.find_map(|namespace| {
				self.non_empty(namespace.group(), &key)
					.map(|text| StoredLayout { text, namespace })
			})
	}

	/// Writes the layout for `tag` to the namespace a read would use.
	pub fn write_layout(&mut self, tag: &str, text: &str) -> Result<Namespace, StoreError> {
		let namespace = self.resolve(tag);
		self.store
			.set(namespace.group(), &keys::layout_key(tag), text)?;
		Ok(namespace)
	}

	/// Returns the tags recorded for `item`, if any.
	pub fn item_tags(&self, item: ItemId) -> Option<String> {
		self.non_empty(BANK_TAGS_GROUP, &keys::item_tags_key(item))
	}

	/// Records tags for `item`. Empty tag lists are not written.
	pub fn set_item_tags(&mut self, item: ItemId, tags: &str) -> Result<(), StoreError> {
		if tags.is_empty() {
			return Ok(());
		}
		self.store
			.set(BANK_TAGS_GROUP, &keys::item_tags_key(item), tags)
	}

	/// Removes every tag recorded for `item`.
	pub fn clear_item_tags(&mut self, item: ItemId) -> Result<(), StoreError> {
		self.store.unset(BANK_TAGS_GROUP, &keys::item_tags_key(item))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::store::MemoryStore;

	#[test]
	fn read_prefers_non_empty_alternate() {
		let mut store = MemoryStore::new()
			.with(BANK_TAGS_GROUP, "layout_melee", "1,2")
			.with(LAYOUTS_GROUP, "layout_melee", "3:0");
		let host = HostStore::new(&mut store);
		assert_eq!(
			host.read_layout("Melee"),
			Some(StoredLayout {
				text: "3:0".to_string(),
				namespace: Namespace::Alternate,
			})
		);
	}

	#[test]
	fn empty_alternate_falls_back_to_primary() {
		let mut store = MemoryStore::new()
			.with(BANK_TAGS_GROUP, "layout_melee", "1,2")
			.with(LAYOUTS_GROUP, "layout_melee", "");
		let mut host = HostStore::new(&mut store);
		assert_eq!(
			host.read_layout("melee").map(|l| l.namespace),
			Some(Namespace::Primary)
		);

		assert_eq!(host.write_layout("melee", "1,2,3"), Ok(Namespace::Primary));
		assert_eq!(store.get(BANK_TAGS_GROUP, "layout_melee").as_deref(), Some("1,2,3"));
		assert_eq!(store.get(LAYOUTS_GROUP, "layout_melee").as_deref(), Some(""));
	}

	#[test]
	fn write_mirrors_alternate() {
		let mut store = MemoryStore::new().with(LAYOUTS_GROUP, "layout_ranged", "3:0");
		let mut host = HostStore::new(&mut store);
		assert_eq!(host.write_layout("Ranged", "4:0"), Ok(Namespace::Alternate));
		assert_eq!(store.get(LAYOUTS_GROUP, "layout_ranged").as_deref(), Some("4:0"));
		assert_eq!(store.get(BANK_TAGS_GROUP, "layout_ranged"), None);
	}

	#[test]
	fn missing_layout_reads_none_and_writes_primary() {
		let mut store = MemoryStore::new();
		let mut host = HostStore::new(&mut store);
		assert_eq!(host.read_layout("magic"), None);
		assert_eq!(host.write_layout("magic", "1"), Ok(Namespace::Primary));
	}

	#[test]
	fn tag_tabs_skip_blanks() {
		let mut store = MemoryStore::new().with(BANK_TAGS_GROUP, TAG_TABS_KEY, "melee,,ranged, ");
		let host = HostStore::new(&mut store);
		assert_eq!(host.tag_tabs(), vec!["melee".to_string(), "ranged".to_string()]);
	}
}
