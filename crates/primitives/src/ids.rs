use std::fmt;
use std::num::{NonZeroU32, ParseIntError};
use std::str::FromStr;

/// Identifier of an item kind.
///
/// Valid ids are strictly positive and fit the host's signed 32-bit id space.
/// Zero and negative raw values denote an empty slot, which is modelled as
/// `Option<ItemId>::None` rather than a sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i64"))]
pub struct ItemId(NonZeroU32);

impl ItemId {
	/// Largest id the host can represent.
	pub const MAX: u32 = i32::MAX as u32;

	/// Creates an id from an unsigned value, rejecting zero and out-of-range values.
	#[inline]
	pub const fn new(raw: u32) -> Option<Self> {
		if raw > Self::MAX {
			return None;
		}
		match NonZeroU32::new(raw) {
			Some(v) => Some(Self(v)),
			None => None,
		}
	}

	/// Creates an id from a signed host value. Non-positive values are empty slots.
	#[inline]
	pub fn from_raw(raw: i64) -> Option<Self> {
		u32::try_from(raw).ok().and_then(Self::new)
	}

	/// Returns the raw numeric id.
	#[inline]
	pub const fn get(self) -> u32 {
		self.0.get()
	}
}

impl fmt::Display for ItemId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl From<ItemId> for i64 {
	fn from(id: ItemId) -> Self {
		i64::from(id.get())
	}
}

impl TryFrom<i64> for ItemId {
	type Error = ParseItemIdError;

	fn try_from(raw: i64) -> Result<Self, Self::Error> {
		Self::from_raw(raw).ok_or(ParseItemIdError::OutOfRange(raw))
	}
}

/// Error returned when text does not name a valid item id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseItemIdError {
	/// The token is not an integer.
	#[error("not an integer: {0}")]
	Invalid(#[from] ParseIntError),
	/// The token is an integer but not a usable id.
	#[error("item id out of range: {0}")]
	OutOfRange(i64),
}

impl FromStr for ItemId {
	type Err = ParseItemIdError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let raw: i64 = s.trim().parse()?;
		Self::try_from(raw)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn non_positive_values_are_empty() {
		assert_eq!(ItemId::from_raw(0), None);
		assert_eq!(ItemId::from_raw(-1), None);
		assert_eq!(ItemId::from_raw(4151).map(ItemId::get), Some(4151));
	}

	#[test]
	fn rejects_values_past_host_range() {
		assert_eq!(ItemId::from_raw(i64::from(i32::MAX) + 1), None);
		assert!(ItemId::new(ItemId::MAX).is_some());
	}

	#[test]
	fn parses_trimmed_text() {
		assert_eq!(" 11850 ".parse::<ItemId>().map(ItemId::get), Ok(11850));
		assert!(matches!("abc".parse::<ItemId>(), Err(ParseItemIdError::Invalid(_))));
		assert_eq!("-1".parse::<ItemId>(), Err(ParseItemIdError::OutOfRange(-1)));
	}
}
