//! Name-based detection of charge, degradation, and state variants.
//!
//! Items outside the curated table can still be recognised as variants of one
//! another when their names differ only by a trailing suffix:
//!
//! 1. A parenthesised charge count: `Ring of dueling(8)`.
//! 2. A degradation percentage: `Ahrim's robetop 75` (0, 25, 50, 75, or 100).
//! 3. A parenthesised state word: `Crystal bow (new)`, `Crystal bow (inactive)`.
//!
//! Rules are tried in that order and the first match wins. Digits and
//! whitespace are ASCII only.

use std::sync::LazyLock;

use regex::Regex;

static CHARGES: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(.+?)\(([0-9]+)\)$").expect("charge pattern"));

static DEGRADATION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(.+?)(?-u:\s)+(0|25|50|75|100)$").expect("degradation pattern"));

static STATE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(.+?)(?-u:\s)+\((new|inactive)\)$").expect("state pattern"));

/// State words recognised in a trailing parenthetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateWord {
	/// `(new)`
	New,
	/// `(inactive)`
	Inactive,
}

/// The suffix that marked a name as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeSuffix {
	/// Remaining charges, e.g. `(4)`. Saturates for absurdly long digit runs.
	Charges(u32),
	/// Degradation percentage.
	Degradation(u8),
	/// Crystal equipment state.
	State(StateWord),
}

/// An item name split into its base and variant suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeName<'a> {
	/// Trimmed base name, original casing.
	pub base: &'a str,
	/// The suffix that matched.
	pub suffix: ChargeSuffix,
}

/// Splits `name` into base and suffix, if any rule matches.
pub fn parse_charge_name(name: &str) -> Option<ChargeName<'_>> {
	if name.is_empty() {
		return None;
	}

	if let Some(caps) = CHARGES.captures(name) {
		let count = caps[2].parse().unwrap_or(u32::MAX);
		return Some(ChargeName {
			base: caps.get(1)?.as_str().trim(),
			suffix: ChargeSuffix::Charges(count),
		});
	}

	if let Some(caps) = DEGRADATION.captures(name) {
		let pct = caps[2].parse().ok()?;
		return Some(ChargeName {
			base: caps.get(1)?.as_str().trim(),
			suffix: ChargeSuffix::Degradation(pct),
		});
	}

	if let Some(caps) = STATE.captures(name) {
		let word = match &caps[2] {
			"new" => StateWord::New,
			_ => StateWord::Inactive,
		};
		return Some(ChargeName {
			base: caps.get(1)?.as_str().trim(),
			suffix: ChargeSuffix::State(word),
		});
	}

	None
}

/// Returns the base name with the variant suffix removed, or `None` if the
/// name carries no recognised suffix.
pub fn extract_base_name(name: &str) -> Option<&str> {
	parse_charge_name(name).map(|n| n.base)
}

/// Returns true if the name carries a charge, degradation, or state suffix.
pub fn is_charged_item(name: &str) -> bool {
	parse_charge_name(name).is_some()
}

/// Lower-cased base name, or the lower-cased name itself when no rule matches.
pub fn normalized_base_name(name: &str) -> String {
	extract_base_name(name).unwrap_or(name).to_lowercase()
}

/// Returns true if two distinct names share a normalized base name.
pub fn are_charge_variants(a: &str, b: &str) -> bool {
	!a.is_empty()
		&& !b.is_empty()
		&& a != b
		&& normalized_base_name(a) == normalized_base_name(b)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn charge_count_suffix() {
		assert_eq!(
			parse_charge_name("Ring of dueling(8)"),
			Some(ChargeName {
				base: "Ring of dueling",
				suffix: ChargeSuffix::Charges(8),
			})
		);
		assert_eq!(extract_base_name("Games necklace (1)"), Some("Games necklace"));
	}

	#[test]
	fn degradation_suffix_only_accepts_known_steps() {
		assert_eq!(extract_base_name("Ahrim's robetop 75"), Some("Ahrim's robetop"));
		assert_eq!(extract_base_name("Ahrim's robetop 0"), Some("Ahrim's robetop"));
		assert_eq!(extract_base_name("Dharok's helm 60"), None);
	}

	#[test]
	fn state_suffix() {
		assert_eq!(
			parse_charge_name("Crystal bow (inactive)").map(|n| n.suffix),
			Some(ChargeSuffix::State(StateWord::Inactive))
		);
		assert_eq!(extract_base_name("Crystal bow (new)"), Some("Crystal bow"));
		assert_eq!(extract_base_name("Crystal bow (i)"), None);
	}

	#[test]
	fn suffix_digits_and_spaces_are_ascii() {
		assert_eq!(extract_base_name("Ring of dueling(\u{0668})"), None);
		assert_eq!(extract_base_name("Ahrim's robetop\u{00A0}75"), None);
		assert_eq!(extract_base_name("Crystal bow\u{2003}(new)"), None);
		assert_eq!(extract_base_name("Ahrim's robetop\t75"), Some("Ahrim's robetop"));
	}

	#[test]
	fn charge_rule_takes_precedence() {
		assert_eq!(
			parse_charge_name("Thing 100(3)").map(|n| n.suffix),
			Some(ChargeSuffix::Charges(3))
		);
	}

	#[test]
	fn plain_names_have_no_base() {
		assert!(!is_charged_item("Amulet of glory"));
		assert!(!is_charged_item(""));
		assert_eq!(normalized_base_name("Amulet of Glory"), "amulet of glory");
	}

	#[test]
	fn detects_charge_variants() {
		assert_eq!(normalized_base_name("Ring of dueling(8)"), "ring of dueling");
		assert!(are_charge_variants("Ring of dueling(8)", "Ring of dueling(1)"));
		assert!(are_charge_variants("Crystal bow (new)", "Crystal bow (inactive)"));
		assert!(are_charge_variants("Amulet of glory(4)", "amulet of glory"));
		assert!(!are_charge_variants("Crystal bow (new)", "Amulet of glory"));
		assert!(!are_charge_variants("Ring of dueling(8)", "Ring of dueling(8)"));
	}
}
