use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where a new variant goes relative to the placed one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
	/// Take the old variant's exact position.
	#[default]
	Replace,
	/// Insert right after the old variant, shifting only that row.
	Adjacent,
}

/// User-facing switches that steer synchronization.
///
/// Every field has a default, so a partial TOML table is valid:
///
/// ```toml
/// layout_mode = "adjacent"
/// remove_old_tags = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncPolicy {
	/// Master switch. When off, notifications record no work.
	pub enabled: bool,
	/// Placement when the old variant has left the inventory.
	pub layout_mode: PlacementMode,
	/// Copy tags from a departed sibling variant to the new item.
	pub copy_tags: bool,
	/// Clear the departed sibling's tags after copying.
	pub remove_old_tags: bool,
	/// Fall back to name heuristics for items outside the registry.
	pub detect_charge_variants: bool,
	/// In `Replace` mode, still place adjacent when both variants are held.
	pub adjacent_when_occupied: bool,
}

impl Default for SyncPolicy {
	fn default() -> Self {
		Self {
			enabled: true,
			layout_mode: PlacementMode::Replace,
			copy_tags: true,
			remove_old_tags: true,
			detect_charge_variants: true,
			adjacent_when_occupied: false,
		}
	}
}

impl SyncPolicy {
	/// Parses a policy from TOML, filling omitted fields with defaults.
	pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	/// Returns true if a new variant is placed next to an old one the user
	/// still holds.
	pub fn places_beside_held_variant(&self) -> bool {
		match self.layout_mode {
			PlacementMode::Adjacent => true,
			PlacementMode::Replace => self.adjacent_when_occupied,
		}
	}
}
