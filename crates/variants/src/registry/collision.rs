//! Collision types and precedence rules.
//!
//! # Role
//!
//! The curated tables register some ids into more than one group. This module
//! names the policies that settle such conflicts and the records kept for
//! diagnostics.

use std::fmt;

use slotsync_primitives::ItemId;

use crate::group::GroupId;

/// How the builder settles an id declared in more than one group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// The first group to declare an id keeps it; later declarations are dropped.
	#[default]
	FirstWins,
	/// The last group to declare an id takes it from earlier groups.
	LastWins,
	/// Fail the build on the first cross-group duplicate.
	Reject,
}

impl fmt::Display for DuplicatePolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::FirstWins => write!(f, "first_wins"),
			Self::LastWins => write!(f, "last_wins"),
			Self::Reject => write!(f, "reject"),
		}
	}
}

/// A resolved cross-group duplicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collision {
	/// The id declared more than once.
	pub item: ItemId,
	/// Group that owns the id after resolution.
	pub kept: GroupId,
	/// Group whose declaration was discarded.
	pub dropped: GroupId,
	/// Policy that made the decision.
	pub policy: DuplicatePolicy,
}

impl fmt::Display for Collision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"item {} kept by group {} over group {} ({})",
			self.item, self.kept, self.dropped, self.policy
		)
	}
}
