use pretty_assertions::assert_eq;
use slotsync_primitives::ItemId;

use super::*;

fn id(raw: u32) -> ItemId {
	ItemId::new(raw).expect("test id")
}

fn members(registry: &VariantRegistry, raw: u32) -> Vec<u32> {
	registry
		.lookup(id(raw))
		.map(|g| g.members().iter().map(|m| m.get()).collect())
		.unwrap_or_default()
}

/// Two overlapping groups, the shape of the curated sceptre entries.
fn overlapping(policy: DuplicatePolicy) -> Result<VariantRegistry, RegistryError> {
	let mut builder = VariantRegistryBuilder::new("test").duplicate_policy(policy);
	builder.push("sceptre", [26945, 26948, 26950]);
	builder.push("sceptre (or)", [26948, 26950, 26952]);
	builder.build()
}

#[test]
fn lookup_returns_the_declaring_group() {
	let mut builder = VariantRegistryBuilder::new("test");
	builder
		.push("graceful hood", [11850, 13579, 13591])
		.push("graceful cape", [11852, 13581]);
	let registry = builder.build().expect("build");

	assert_eq!(registry.lookup(id(13579)).map(|g| g.name()), Some("graceful hood"));
	assert_eq!(registry.lookup(id(11852)).map(|g| g.name()), Some("graceful cape"));
	assert!(registry.lookup(id(4151)).is_none());
	assert_eq!(registry.item_count(), 5);
	assert_eq!(registry.group_count(), 2);
}

#[test]
fn are_variants_requires_distinct_members_of_one_group() {
	let mut builder = VariantRegistryBuilder::new("test");
	builder.push("a", [1, 2]).push("b", [3, 4]);
	let registry = builder.build().expect("build");

	assert!(registry.are_variants(id(1), id(2)));
	assert!(!registry.are_variants(id(1), id(1)));
	assert!(!registry.are_variants(id(2), id(3)));
	assert!(!registry.are_variants(id(9), id(10)));
}

#[test]
fn first_wins_keeps_earliest_group_and_records_collisions() {
	let registry = overlapping(DuplicatePolicy::FirstWins).expect("build");

	assert_eq!(members(&registry, 26948), vec![26945, 26948, 26950]);
	assert_eq!(members(&registry, 26952), vec![26952]);
	assert_eq!(registry.collisions().len(), 2);

	let first = registry.collisions()[0];
	assert_eq!(first.item, id(26948));
	assert_eq!(first.kept.index(), 0);
	assert_eq!(first.dropped.index(), 1);
	assert!(!registry.are_variants(id(26948), id(26952)));
}

#[test]
fn last_wins_moves_ids_to_latest_group() {
	let registry = overlapping(DuplicatePolicy::LastWins).expect("build");

	assert_eq!(members(&registry, 26945), vec![26945]);
	assert_eq!(members(&registry, 26948), vec![26948, 26950, 26952]);
	assert_eq!(registry.collisions()[0].kept.index(), 1);
}

#[test]
fn reject_fails_on_cross_group_duplicate() {
	let err = overlapping(DuplicatePolicy::Reject).expect_err("duplicate must fail");
	assert_eq!(
		err,
		RegistryError::DuplicateMember {
			registry: "test",
			item: id(26948),
			existing: "sceptre".to_string(),
			incoming: "sceptre (or)".to_string(),
		}
	);
}

#[test]
fn repeats_within_one_group_are_not_collisions() {
	let mut builder = VariantRegistryBuilder::new("test").duplicate_policy(DuplicatePolicy::Reject);
	builder.push("assembler", [22109, 21898, 22109]);
	let registry = builder.build().expect("build");

	assert_eq!(members(&registry, 21898), vec![22109, 21898]);
	assert!(registry.collisions().is_empty());
}

#[test]
fn zero_member_is_rejected() {
	let mut builder = VariantRegistryBuilder::new("test");
	builder.push("broken", [1, 0]);
	assert!(matches!(
		builder.build(),
		Err(RegistryError::InvalidItem { raw: 0, .. })
	));
}

#[test]
fn every_indexed_id_is_listed_by_its_group() {
	let registry = overlapping(DuplicatePolicy::FirstWins).expect("build");
	for group in registry.groups() {
		for &member in group.members() {
			assert_eq!(registry.group_of(member), Some(group.id()));
		}
	}
}
