//! Layout text encodings.
//!
//! Two dialects share one store key and are told apart by content alone: any
//! `:` in the text selects [`Dialect::Explicit`].
//!
//! - Dense: `"100,-1,200"`. The field index is the position, `-1` (or any
//!   non-positive value) marks an empty slot.
//! - Explicit: `"100:0,200:2"`, `item:position` pairs. Item first, position
//!   second; the order is fixed by the stores that share this format.
//!
//! Decoding never fails. Tokens that cannot be read are skipped and reported
//! as [`DecodeWarning`]s; the rest of the text is still decoded.

use std::fmt;

use slotsync_primitives::{ItemId, MAX_POSITION, Position};

use crate::layout::{Dialect, Layout};

/// Text written for an empty dense slot.
const EMPTY_SLOT: &str = "-1";

/// A skipped token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeWarning {
	/// The token is not a usable item id.
	#[error("field {field}: invalid item id {token:?}")]
	InvalidItem { field: usize, token: String },
	/// The token is not an `item:position` pair.
	#[error("field {field}: expected `item:position`, got {token:?}")]
	MalformedPair { field: usize, token: String },
	/// The position half of a pair is not a usable position.
	#[error("field {field}: invalid position {token:?}")]
	InvalidPosition { field: usize, token: String },
}

/// Returns the dialect `text` is written in.
pub fn detect_dialect(text: &str) -> Dialect {
	if text.contains(':') {
		Dialect::Explicit
	} else {
		Dialect::Dense
	}
}

/// Decodes persisted layout text, logging any skipped tokens.
pub fn decode(text: &str) -> Layout {
	let (layout, warnings) = decode_with_warnings(text);
	for warning in &warnings {
		tracing::warn!(%warning, "skipped layout entry");
	}
	tracing::debug!(
		dialect = ?layout.dialect(),
		items = layout.len(),
		skipped = warnings.len(),
		"decoded layout"
	);
	layout
}

/// Decodes persisted layout text and returns the skipped tokens alongside.
pub fn decode_with_warnings(text: &str) -> (Layout, Vec<DecodeWarning>) {
	let mut warnings = Vec::new();
	let dialect = detect_dialect(text);
	let mut layout = Layout::new(dialect);

	if text.is_empty() {
		return (layout, warnings);
	}

	for (field, part) in text.split(',').enumerate() {
		let token = part.trim();
		if token.is_empty() {
			continue;
		}
		match dialect {
			Dialect::Dense => {
				let Some(pos) = Position::try_from(field).ok().filter(|&p| p <= MAX_POSITION) else {
					break;
				};
				match parse_item(token) {
					Ok(Some(id)) => {
						layout.set_item(pos, Some(id));
					}
					Ok(None) => {}
					Err(()) => warnings.push(DecodeWarning::InvalidItem {
						field,
						token: token.to_string(),
					}),
				}
			}
			Dialect::Explicit => {
				if let Err(warning) = decode_pair(&mut layout, field, token) {
					warnings.push(warning);
				}
			}
		}
	}

	(layout, warnings)
}

fn decode_pair(layout: &mut Layout, field: usize, token: &str) -> Result<(), DecodeWarning> {
	let malformed = || DecodeWarning::MalformedPair {
		field,
		token: token.to_string(),
	};

	let mut halves = token.split(':');
	let (Some(item), Some(pos), None) = (halves.next(), halves.next(), halves.next()) else {
		return Err(malformed());
	};

	let item = parse_item(item.trim()).map_err(|()| DecodeWarning::InvalidItem {
		field,
		token: token.to_string(),
	})?;
	let pos = parse_position(pos.trim()).ok_or_else(|| DecodeWarning::InvalidPosition {
		field,
		token: token.to_string(),
	})?;

	if let Some(item) = item {
		layout.set_item(pos, Some(item));
	}
	Ok(())
}

/// Parses a signed id token. `Ok(None)` is a placeholder, `Err` is unreadable.
fn parse_item(token: &str) -> Result<Option<ItemId>, ()> {
	let raw: i64 = token.parse().map_err(|_| ())?;
	if raw <= 0 {
		return Ok(None);
	}
	ItemId::from_raw(raw).map(Some).ok_or(())
}

fn parse_position(token: &str) -> Option<Position> {
	let raw: i64 = token.parse().ok()?;
	Position::try_from(raw).ok().filter(|&p| p <= MAX_POSITION)
}

/// Encodes a layout in its own dialect.
///
/// Dense output has exactly `max_position + 1` fields so every occupant
/// keeps its index on re-decode. An empty layout encodes to `""`.
pub fn encode(layout: &Layout) -> String {
	layout.to_string()
}

impl fmt::Display for Layout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Layout::Dense(slots) => {
				for (idx, slot) in slots.slots().iter().enumerate() {
					if idx > 0 {
						f.write_str(",")?;
					}
					match slot {
						Some(id) => write!(f, "{id}")?,
						None => f.write_str(EMPTY_SLOT)?,
					}
				}
			}
			Layout::Explicit(_) => {
				for (idx, (pos, id)) in self.iter().enumerate() {
					if idx > 0 {
						f.write_str(",")?;
					}
					write!(f, "{id}:{pos}")?;
				}
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
