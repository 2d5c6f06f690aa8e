use std::fmt;

use slotsync_layout::Displaced;
use slotsync_primitives::{ItemId, Position};

/// Something a tick changed, or failed to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
	/// `item` took over the slot of `previous`.
	Replaced {
		tag: String,
		position: Position,
		item: ItemId,
		previous: ItemId,
	},
	/// `item` was inserted right after `beside`.
	Inserted {
		tag: String,
		position: Position,
		item: ItemId,
		beside: ItemId,
		displaced: Option<Displaced>,
	},
	/// Tags of a departed variant were copied to the new item.
	TagsCopied {
		from: ItemId,
		to: ItemId,
		tags: String,
	},
	/// A departed variant's tags were removed.
	TagsCleared { item: ItemId },
	/// A store write failed. Nothing is retried.
	PersistFailed { target: String, error: String },
}

impl fmt::Display for SyncEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Replaced {
				tag,
				position,
				item,
				..
			} => write!(f, "Synced {item} to '{tag}' (slot {position})"),
			Self::Inserted {
				tag,
				position,
				item,
				..
			} => write!(f, "Added {item} to '{tag}' (slot {position})"),
			Self::TagsCopied { from, to, tags } => {
				write!(f, "Copied tags '{tags}' from {from} to {to}")
			}
			Self::TagsCleared { item } => write!(f, "Removed tags from {item}"),
			Self::PersistFailed { target, error } => {
				write!(f, "Could not save {target}: {error}")
			}
		}
	}
}

/// Everything one tick did, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
	events: Vec<SyncEvent>,
}

impl SyncReport {
	pub(crate) fn push(&mut self, event: SyncEvent) {
		self.events.push(event);
	}

	/// Returns the events in the order they happened.
	pub fn events(&self) -> &[SyncEvent] {
		&self.events
	}

	/// Returns the failed writes.
	pub fn failures(&self) -> impl Iterator<Item = &SyncEvent> + '_ {
		self.events
			.iter()
			.filter(|e| matches!(e, SyncEvent::PersistFailed { .. }))
	}

	/// Returns true if the tick did nothing.
	pub fn is_empty(&self) -> bool {
		self.events.is_empty()
	}
}

impl IntoIterator for SyncReport {
	type Item = SyncEvent;
	type IntoIter = std::vec::IntoIter<SyncEvent>;

	fn into_iter(self) -> Self::IntoIter {
		self.events.into_iter()
	}
}
