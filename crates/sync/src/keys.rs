//! Store groups and key names shared with the host's tagging feature.

use std::sync::LazyLock;

use regex::Regex;
use slotsync_primitives::ItemId;

/// Group owned by the host's built-in tagging feature.
pub const BANK_TAGS_GROUP: &str = "banktags";
/// Group owned by the optional layouts extension.
pub const LAYOUTS_GROUP: &str = "banktaglayouts";
/// Key listing tag tab names, comma-separated.
pub const TAG_TABS_KEY: &str = "tagtabs";
/// Prefix of per-tag layout keys.
pub const LAYOUT_PREFIX: &str = "layout_";
/// Prefix of per-item tag keys.
pub const ITEM_TAG_PREFIX: &str = "item_";

static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup pattern"));

/// Canonicalizes a tag name the way the host does before using it as a key:
/// markup tags are stripped, non-breaking spaces become spaces, and the result
/// is trimmed and lower-cased.
pub fn standardize(name: &str) -> String {
	MARKUP
		.replace_all(name, "")
		.replace('\u{00A0}', " ")
		.trim()
		.to_lowercase()
}

/// Key of the layout stored for `tag`.
pub fn layout_key(tag: &str) -> String {
	format!("{LAYOUT_PREFIX}{}", standardize(tag))
}

/// Key of the tags recorded for `item`.
pub fn item_tags_key(item: ItemId) -> String {
	format!("{ITEM_TAG_PREFIX}{item}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn standardize_matches_host_canonical_form() {
		assert_eq!(standardize("  Melee Gear "), "melee gear");
		assert_eq!(standardize("<col=ff0000>Slayer</col>"), "slayer");
		assert_eq!(standardize("Boss\u{00A0}Drops"), "boss drops");
	}

	#[test]
	fn keys() {
		assert_eq!(layout_key(" Melee"), "layout_melee");
		assert_eq!(item_tags_key(ItemId::new(4151).expect("id")), "item_4151");
	}
}
