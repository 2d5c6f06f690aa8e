//! One-tick deferral of newly acquired items.
//!
//! Notifications only accumulate work here; the next scheduler tick takes the
//! whole batch and leaves the state `Idle` again.

use std::collections::BTreeSet;
use std::mem;

use slotsync_primitives::ItemId;

use crate::snapshot::InventorySnapshot;

/// Items waiting for the next tick, plus the newest snapshot seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBatch {
	/// Every id that became newly held since the last tick, ascending.
	pub items: BTreeSet<ItemId>,
	/// Inventory as of the latest notification.
	pub latest: InventorySnapshot,
}

/// Debounce state between notifications and ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PendingWork {
	/// Nothing to do on the next tick.
	#[default]
	Idle,
	/// A batch will be processed on the next tick.
	Batch(PendingBatch),
}

impl PendingWork {
	/// Folds one notification's results into the pending state.
	///
	/// An empty `new_items` leaves `Idle` untouched but still refreshes the
	/// snapshot of an open batch, so the batch is judged against the latest
	/// inventory.
	pub fn record(&mut self, new_items: BTreeSet<ItemId>, snapshot: InventorySnapshot) {
		match self {
			Self::Idle if new_items.is_empty() => {}
			Self::Idle => {
				*self = Self::Batch(PendingBatch {
					items: new_items,
					latest: snapshot,
				});
			}
			Self::Batch(batch) => {
				batch.items.extend(new_items);
				batch.latest = snapshot;
			}
		}
	}

	/// Takes the pending batch, leaving `Idle`.
	pub fn take(&mut self) -> Option<PendingBatch> {
		match mem::take(self) {
			Self::Idle => None,
			Self::Batch(batch) => Some(batch),
		}
	}

	/// Drops any pending batch unprocessed.
	pub fn discard(&mut self) {
		*self = Self::Idle;
	}

	/// Returns true if no batch is waiting.
	pub fn is_idle(&self) -> bool {
		matches!(self, Self::Idle)
	}

	/// Returns the number of ids waiting.
	pub fn len(&self) -> usize {
		match self {
			Self::Idle => 0,
			Self::Batch(batch) => batch.items.len(),
		}
	}

	/// Returns true if no ids are waiting.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
