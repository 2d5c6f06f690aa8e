//! Core value types for slotsync: item identifiers and layout grid positions.

/// Layout grid geometry: positions, rows, and row boundaries.
pub mod grid;
/// Item identifier newtype and parsing.
pub mod ids;

pub use grid::{MAX_POSITION, Position, ROW_WIDTH, row_end, row_of, row_start, same_row};
pub use ids::{ItemId, ParseItemIdError};
