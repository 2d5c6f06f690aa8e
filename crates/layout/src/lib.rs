//! Item layouts: a mapping from grid position to item id.
//!
//! Layouts are persisted as text in one of two dialects (see [`codec`]),
//! decoded into a [`Layout`] for editing, and encoded back. A decoded layout
//! is a transient value; nothing here caches or shares it.

pub mod codec;
mod layout;
mod mutate;

pub use codec::{DecodeWarning, decode, decode_with_warnings, encode};
pub use layout::{DenseSlots, Dialect, ExplicitSlots, Iter, Layout};
pub use mutate::{Displaced, Insertion};
pub use slotsync_primitives::{ItemId, Position, ROW_WIDTH};
