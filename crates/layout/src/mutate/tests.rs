use pretty_assertions::assert_eq;
use proptest::prelude::*;
use slotsync_primitives::{ItemId, MAX_POSITION, Position, row_of};
use slotsync_variants::VariantRegistryBuilder;

use super::*;
use crate::codec::{decode, decode_with_warnings, encode};
use crate::layout::Dialect;

fn id(raw: u32) -> ItemId {
	ItemId::new(raw).expect("test id")
}

#[test]
fn insert_into_empty_slot_touches_nothing_else() {
	let mut layout = decode("100,-1,200,-1,-1,-1,-1,300");
	let result = layout.insert_at_same_row(1, id(400)).expect("insertion");

	assert_eq!(result, Insertion { position: 1, displaced: None });
	assert_eq!(encode(&layout), "100,400,200,-1,-1,-1,-1,300");
}

#[test]
fn insert_at_occupied_row_end_appends_displaced_item() {
	let mut layout = decode("1,2,3,4,5,6,7,300");
	let result = layout.insert_at_same_row(7, id(400)).expect("insertion");

	assert_eq!(
		result.displaced,
		Some(Displaced { item: id(300), from: 7, to: 8 })
	);
	assert_eq!(encode(&layout), "1,2,3,4,5,6,7,400,300");
}

#[test]
fn shift_stays_within_row() {
	let mut layout = decode("1,2,3,4,5,6,7,8,9,10");
	layout.insert_at_same_row(2, id(99)).expect("insertion");

	assert_eq!(encode(&layout), "1,2,99,3,4,5,6,7,9,10,8");
}

#[test]
fn shift_moves_gaps_along_with_occupants() {
	let mut layout = decode("1,2,-1,4");
	let result = layout.insert_at_same_row(1, id(99)).expect("insertion");

	assert_eq!(result.displaced, None);
	assert_eq!(encode(&layout), "1,99,2,-1,4");
}

#[test]
fn explicit_insert_uses_same_rules() {
	let mut layout = decode("10:0,11:1,17:7,30:16");
	let result = layout.insert_at_same_row(1, id(99)).expect("insertion");

	assert_eq!(
		result.displaced,
		Some(Displaced { item: id(17), from: 7, to: 17 })
	);
	assert_eq!(
		layout.entries(),
		vec![(0, id(10)), (1, id(99)), (2, id(11)), (16, id(30)), (17, id(17))]
	);
}

#[test]
fn insert_refuses_positions_past_the_last_addressable_slot() {
	let text = "5:2147483647,6:0";
	let mut layout = decode(text);

	assert_eq!(layout.insert_at_same_row(MAX_POSITION + 1, id(9)), None);
	assert_eq!(encode(&layout), text);
}

#[test]
fn insert_refuses_to_push_displaced_item_out_of_range() {
	let text = "5:2147483647,6:0,7:7";
	let mut layout = decode(text);

	assert_eq!(layout.insert_at_same_row(7, id(9)), None);
	assert_eq!(encode(&layout), text);
}

#[test]
fn insert_at_last_slot_round_trips() {
	let mut layout = decode("6:0");
	let result = layout.insert_at_same_row(MAX_POSITION, id(9)).expect("insertion");

	assert_eq!(result.position, MAX_POSITION);
	let (decoded, warnings) = decode_with_warnings(&encode(&layout));
	assert!(warnings.is_empty());
	assert_eq!(decoded.entries(), vec![(0, id(6)), (MAX_POSITION, id(9))]);
}

#[test]
fn finders_prefer_lowest_position() {
	let layout = decode("5:9,7:3,5:1");
	assert_eq!(layout.find_item_position(id(5)), Some(1));

	let mut builder = VariantRegistryBuilder::new("test");
	builder.push("pair", [5, 7]);
	let registry = builder.build().expect("build");
	let group = registry.lookup(id(5)).expect("group");

	assert_eq!(layout.find_variant_position(group), Some(1));
	assert_eq!(Layout::new(Dialect::Dense).find_variant_position(group), None);
}

fn occupied_positions() -> impl Strategy<Value = Vec<Position>> {
	proptest::collection::btree_set(0u32..40, 0..30).prop_map(|set| set.into_iter().collect())
}

proptest! {
	#[test]
	fn only_the_row_end_occupant_leaves_its_row(
		positions in occupied_positions(),
		target in 0u32..40,
		explicit in any::<bool>(),
	) {
		let dialect = if explicit { Dialect::Explicit } else { Dialect::Dense };
		let mut layout = Layout::new(dialect);
		for &p in &positions {
			layout.set_item(p, Some(id(1000 + p)));
		}
		let before = layout.entries();
		let new_id = id(1);

		let result = layout.insert_at_same_row(target, new_id);
		prop_assert!(result.is_some(), "insertion refused");
		let Some(result) = result else { return Ok(()) };
		prop_assert_eq!(layout.get(target), Some(new_id));
		prop_assert_eq!(layout.len(), before.len() + 1);

		for (old_pos, item) in before {
			let new_pos = layout.find_item_position(item);
			prop_assert!(new_pos.is_some(), "item {} lost", item);
			let new_pos = new_pos.unwrap_or_default();
			match result.displaced {
				Some(d) if d.item == item => {
					prop_assert_eq!(new_pos, d.to);
					prop_assert_eq!(Some(new_pos), layout.max_position());
				}
				_ => prop_assert_eq!(row_of(new_pos), row_of(old_pos)),
			}
		}
	}

	#[test]
	fn found_variant_position_holds_a_member(
		positions in occupied_positions(),
		members in proptest::collection::btree_set(1000u32..1040, 1..6),
	) {
		let mut layout = Layout::new(Dialect::Dense);
		for &p in &positions {
			layout.set_item(p, Some(id(1000 + p)));
		}
		let mut builder = VariantRegistryBuilder::new("prop");
		builder.push("group", members.iter().copied());
		let registry = builder.build().expect("build");
		let group = registry.groups().next().expect("group");

		match layout.find_variant_position(group) {
			Some(pos) => prop_assert!(layout.get(pos).is_some_and(|item| group.contains(item))),
			None => prop_assert!(layout.iter().all(|(_, item)| !group.contains(item))),
		}
	}
}
