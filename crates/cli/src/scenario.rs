//! Replay scenarios: a store, item names, and a sequence of inventories.
//!
//! ```toml
//! snapshots = [[4151], [12773]]
//!
//! [policy]
//! layout_mode = "replace"
//!
//! [store.banktags]
//! tagtabs = "gear"
//! layout_gear = "4151,-1,11840"
//!
//! [[names]]
//! id = 12773
//! name = "Frozen abyssal whip"
//! ```
//!
//! Each snapshot is delivered as one notification followed by one tick.

use std::collections::BTreeMap;

use serde::Deserialize;
use slotsync_primitives::ItemId;
use slotsync_sync::{InventorySnapshot, MemoryStore, SyncEngine, SyncPolicy, SyncReport};
use slotsync_variants::VariantRegistry;

/// A scenario file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
	pub policy: SyncPolicy,
	pub store: MemoryStore,
	pub names: Vec<NamedItem>,
	/// Raw host ids per notification; non-positive values are empty slots.
	pub snapshots: Vec<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedItem {
	pub id: ItemId,
	pub name: String,
}

/// What a replay did.
#[derive(Debug)]
pub struct Replay {
	/// One report per snapshot.
	pub steps: Vec<SyncReport>,
	/// The store after the last tick.
	pub store: MemoryStore,
}

impl Scenario {
	pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(text)
	}

	/// Runs every snapshot through a fresh engine.
	pub fn run(self, registry: &VariantRegistry) -> Replay {
		let catalog: BTreeMap<ItemId, String> = self
			.names
			.into_iter()
			.map(|named| (named.id, named.name))
			.collect();
		let mut store = self.store;
		let mut engine = SyncEngine::new(registry, self.policy);

		let steps = self
			.snapshots
			.into_iter()
			.enumerate()
			.map(|(step, raw)| {
				let queued = engine.on_inventory_changed(InventorySnapshot::from_raw(raw));
				tracing::debug!(step, queued, "notified");
				engine.on_tick(&mut store, &catalog)
			})
			.collect();

		Replay { steps, store }
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use slotsync_sync::{ConfigStore, PlacementMode, SyncEvent};
	use slotsync_variants::builtin;

	use super::*;

	const WHIP_SWAP: &str = r#"
snapshots = [[4151, 995], [12773, 995, -1]]

[policy]
layout_mode = "replace"

[store.banktags]
tagtabs = "gear"
layout_gear = "4151,-1,11840"
item_4151 = "melee"

[[names]]
id = 12773
name = "Frozen abyssal whip"
"#;

	#[test]
	fn parses_all_sections() {
		let scenario = Scenario::from_toml(WHIP_SWAP).expect("scenario");
		assert_eq!(scenario.policy.layout_mode, PlacementMode::Replace);
		assert_eq!(scenario.snapshots.len(), 2);
		assert_eq!(scenario.names.len(), 1);
		assert_eq!(
			scenario.store.get("banktags", "layout_gear").as_deref(),
			Some("4151,-1,11840")
		);
	}

	#[test]
	fn rejects_unknown_keys() {
		assert!(Scenario::from_toml("snapshot = []").is_err());
		assert!(Scenario::from_toml("[[names]]\nid = 0\nname = \"x\"").is_err());
	}

	#[test]
	fn replays_against_builtin_groups() {
		let replay = Scenario::from_toml(WHIP_SWAP)
			.expect("scenario")
			.run(builtin());

		assert_eq!(replay.steps.len(), 2);
		assert!(replay.steps[0].is_empty());
		assert_eq!(
			replay.store.get("banktags", "layout_gear").as_deref(),
			Some("12773,-1,11840")
		);
		assert_eq!(replay.store.get("banktags", "item_12773").as_deref(), Some("melee"));

		let whip = ItemId::new(4151).expect("id");
		let frozen = ItemId::new(12773).expect("id");
		assert!(replay.steps[1].events().contains(&SyncEvent::Replaced {
			tag: "gear".into(),
			position: 0,
			item: frozen,
			previous: whip,
		}));
	}
}
