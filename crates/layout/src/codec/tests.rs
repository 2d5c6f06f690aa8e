use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn id(raw: u32) -> ItemId {
	ItemId::new(raw).expect("test id")
}

#[test]
fn empty_text_is_an_empty_dense_layout() {
	let (layout, warnings) = decode_with_warnings("");
	assert_eq!(layout.dialect(), Dialect::Dense);
	assert!(layout.is_empty());
	assert!(warnings.is_empty());
	assert_eq!(encode(&layout), "");
}

#[test]
fn dialect_follows_colon() {
	assert_eq!(detect_dialect("1,2,3"), Dialect::Dense);
	assert_eq!(detect_dialect("1:0"), Dialect::Explicit);
	assert_eq!(decode("4151:3").dialect(), Dialect::Explicit);
}

#[test]
fn dense_field_index_is_position() {
	let layout = decode("100,-1,200,0, 300 ");
	assert_eq!(layout.entries(), vec![(0, id(100)), (2, id(200)), (4, id(300))]);
}

#[test]
fn dense_skips_unreadable_fields_and_keeps_going() {
	let (layout, warnings) = decode_with_warnings("100,abc,200,,99999999999");
	assert_eq!(layout.entries(), vec![(0, id(100)), (2, id(200))]);
	assert_eq!(
		warnings,
		vec![
			DecodeWarning::InvalidItem {
				field: 1,
				token: "abc".to_string(),
			},
			DecodeWarning::InvalidItem {
				field: 4,
				token: "99999999999".to_string(),
			},
		]
	);
}

#[test]
fn explicit_pairs_are_item_then_position() {
	let layout = decode("4151:0,11802:9");
	assert_eq!(layout.get(0), Some(id(4151)));
	assert_eq!(layout.get(9), Some(id(11802)));
}

#[test]
fn explicit_skips_malformed_pairs() {
	let (layout, warnings) = decode_with_warnings("4151:0,7,1:2:3,x:4,5:y,-1:5,6:-2");
	assert_eq!(layout.entries(), vec![(0, id(4151))]);
	assert_eq!(warnings.len(), 5);
	assert!(matches!(warnings[0], DecodeWarning::MalformedPair { field: 1, .. }));
	assert!(matches!(warnings[1], DecodeWarning::MalformedPair { field: 2, .. }));
	assert!(matches!(warnings[2], DecodeWarning::InvalidItem { field: 3, .. }));
	assert!(matches!(warnings[3], DecodeWarning::InvalidPosition { field: 4, .. }));
	assert!(matches!(warnings[4], DecodeWarning::InvalidPosition { field: 6, .. }));
}

#[test]
fn explicit_later_pair_wins_a_position() {
	let layout = decode("1:4,2:4");
	assert_eq!(layout.entries(), vec![(4, id(2))]);
}

#[test]
fn positions_stop_at_the_host_range() {
	let (layout, warnings) = decode_with_warnings("5:2147483647,9:2147483648");

	assert_eq!(layout.entries(), vec![(MAX_POSITION, id(5))]);
	assert_eq!(
		warnings,
		vec![DecodeWarning::InvalidPosition {
			field: 1,
			token: "9:2147483648".to_string(),
		}]
	);
}

#[test]
fn dense_encode_fills_gaps_up_to_max() {
	let mut layout = Layout::new(Dialect::Dense);
	layout.set_item(0, Some(id(100)));
	layout.set_item(7, Some(id(300)));
	let text = encode(&layout);
	assert_eq!(text, "100,-1,-1,-1,-1,-1,-1,300");
	assert_eq!(text.split(',').count(), 8);
}

#[test]
fn explicit_encode_keeps_insertion_order() {
	let mut layout = Layout::new(Dialect::Explicit);
	layout.set_item(12, Some(id(2)));
	layout.set_item(3, Some(id(1)));
	assert_eq!(encode(&layout), "2:12,1:3");
}

fn any_layout() -> impl Strategy<Value = Layout> {
	(
		any::<bool>(),
		proptest::collection::vec((0u32..200, 1u32..50_000), 0..40),
	)
		.prop_map(|(explicit, pairs)| {
			let dialect = if explicit { Dialect::Explicit } else { Dialect::Dense };
			let mut layout = Layout::new(dialect);
			for (pos, raw) in pairs {
				layout.set_item(pos, ItemId::new(raw));
			}
			layout
		})
}

proptest! {
	#[test]
	fn decode_inverts_encode(layout in any_layout()) {
		let text = encode(&layout);
		let (decoded, warnings) = decode_with_warnings(&text);
		prop_assert!(warnings.is_empty());
		prop_assert_eq!(decoded.entries(), layout.entries());
		if !layout.is_empty() {
			prop_assert_eq!(decoded.dialect(), layout.dialect());
			prop_assert_eq!(decoded, layout);
		}
	}

	#[test]
	fn dense_encode_emits_max_plus_one_fields(layout in any_layout()) {
		prop_assume!(layout.dialect() == Dialect::Dense && !layout.is_empty());
		let text = encode(&layout);
		let max = layout.max_position().unwrap_or_default() as usize;
		prop_assert_eq!(text.split(',').count(), max + 1);
	}
}
