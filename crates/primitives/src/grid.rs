/// Zero-based slot index inside a layout.
///
/// Positions are laid out row-major on a grid [`ROW_WIDTH`] slots wide, so
/// positions `0..8` form row 0, `8..16` row 1, and so on.
pub type Position = u32;

/// Number of slots in one layout row.
pub const ROW_WIDTH: Position = 8;

/// Largest position the persisted formats can address.
pub const MAX_POSITION: Position = i32::MAX as u32;

/// Returns the row index containing `pos`.
#[inline]
pub const fn row_of(pos: Position) -> Position {
	pos / ROW_WIDTH
}

/// Returns the first position of the row containing `pos`.
#[inline]
pub const fn row_start(pos: Position) -> Position {
	row_of(pos) * ROW_WIDTH
}

/// Returns the last position of the row containing `pos`.
#[inline]
pub const fn row_end(pos: Position) -> Position {
	row_start(pos) + (ROW_WIDTH - 1)
}

/// Returns true if both positions lie on the same row.
#[inline]
pub const fn same_row(a: Position, b: Position) -> bool {
	row_of(a) == row_of(b)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn row_bounds() {
		assert_eq!((row_start(0), row_end(0)), (0, 7));
		assert_eq!((row_start(7), row_end(7)), (0, 7));
		assert_eq!((row_start(8), row_end(8)), (8, 15));
		assert_eq!(row_end(21), 23);
		assert!(same_row(16, 23));
		assert!(!same_row(7, 8));
	}

	proptest! {
		#[test]
		fn position_lies_within_its_row(pos in 0..=MAX_POSITION) {
			prop_assert!(row_start(pos) <= pos);
			prop_assert!(pos <= row_end(pos));
			prop_assert_eq!(row_end(pos) - row_start(pos), ROW_WIDTH - 1);
		}
	}
}
