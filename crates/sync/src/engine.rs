//! Per-tick synchronization of stored layouts.
//!
//! # Invariants
//!
//! - Notifications never touch a layout; only [`SyncEngine::on_tick`] does.
//! - A layout is decoded, edited, and re-encoded within one step and never
//!   kept across steps.
//! - A layout the user arranged with both variants present is left alone
//!   unless the policy asks for adjacent placement.

use slotsync_layout::{Layout, decode, encode};
use slotsync_primitives::{ItemId, Position};
use slotsync_variants::{VariantGroup, VariantRegistry, charge};

use crate::catalog::{ItemCatalog, NameCache};
use crate::namespace::HostStore;
use crate::pending::{PendingBatch, PendingWork};
use crate::policy::{PlacementMode, SyncPolicy};
use crate::report::{SyncEvent, SyncReport};
use crate::snapshot::InventorySnapshot;
use crate::store::ConfigStore;

/// How a placed variant was recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchSource {
	Registry,
	ChargeName,
}

/// A placed item the new item should sit with.
#[derive(Debug, Clone, Copy)]
struct VariantMatch {
	position: Position,
	existing: ItemId,
	source: MatchSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
	Replace,
	Adjacent,
}

/// Debounced variant synchronization driven by host notifications and ticks.
pub struct SyncEngine<'r> {
	registry: &'r VariantRegistry,
	policy: SyncPolicy,
	previous: InventorySnapshot,
	pending: PendingWork,
	names: NameCache,
}

impl<'r> SyncEngine<'r> {
	/// Creates an idle engine with no prior snapshot.
	pub fn new(registry: &'r VariantRegistry, policy: SyncPolicy) -> Self {
		Self {
			registry,
			policy,
			previous: InventorySnapshot::default(),
			pending: PendingWork::Idle,
			names: NameCache::default(),
		}
	}

	/// Returns the active policy.
	pub fn policy(&self) -> &SyncPolicy {
		&self.policy
	}

	/// Replaces the active policy. Takes effect from the next notification.
	pub fn set_policy(&mut self, policy: SyncPolicy) {
		self.policy = policy;
	}

	/// Returns the work waiting for the next tick.
	pub fn pending(&self) -> &PendingWork {
		&self.pending
	}

	/// Records a new inventory snapshot.
	///
	/// Ids absent from the previous snapshot are queued for the next tick.
	/// Returns how many ids were newly queued.
	pub fn on_inventory_changed(&mut self, snapshot: InventorySnapshot) -> usize {
		if !self.policy.enabled {
			self.previous = snapshot;
			return 0;
		}

		let new_items = snapshot.newly_acquired(&self.previous);
		let queued = new_items.len();
		if queued > 0 {
			tracing::debug!(?new_items, "new items detected");
		}
		self.pending.record(new_items, snapshot.clone());
		self.previous = snapshot;
		queued
	}

	/// Processes the pending batch, if any, against the host's store.
	pub fn on_tick<S, C>(&mut self, store: &mut S, catalog: &C) -> SyncReport
	where
		S: ConfigStore + ?Sized,
		C: ItemCatalog + ?Sized,
	{
		let mut report = SyncReport::default();
		let Some(batch) = self.pending.take() else {
			return report;
		};
		if !self.policy.enabled {
			tracing::debug!(items = batch.items.len(), "sync disabled, dropping batch");
			return report;
		}

		tracing::debug!(items = batch.items.len(), "processing pending items");
		let mut host = HostStore::new(store);
		self.process_batch(&mut host, catalog, &batch, &mut report);
		report
	}

	/// Drops pending work and all remembered state.
	pub fn deactivate(&mut self) {
		self.pending.discard();
		self.previous = InventorySnapshot::default();
		self.names.clear();
	}

	fn process_batch<S, C>(
		&mut self,
		host: &mut HostStore<'_, S>,
		catalog: &C,
		batch: &PendingBatch,
		report: &mut SyncReport,
	) where
		S: ConfigStore + ?Sized,
		C: ItemCatalog + ?Sized,
	{
		let tabs = host.tag_tabs();
		if tabs.is_empty() {
			tracing::debug!(items = batch.items.len(), "no tag tabs found, skipping batch");
			return;
		}

		let registry = self.registry;
		for &item in &batch.items {
			if self.policy.copy_tags
				&& let Some(group) = registry.lookup(item)
			{
				self.transfer_tags(host, item, group, &batch.latest, report);
			}

			for tag in &tabs {
				self.sync_layout(host, catalog, tag, item, &batch.latest, report);
			}
		}
	}

	/// Moves tags from the first departed sibling that has any.
	fn transfer_tags<S: ConfigStore + ?Sized>(
		&self,
		host: &mut HostStore<'_, S>,
		item: ItemId,
		group: &VariantGroup,
		held: &InventorySnapshot,
		report: &mut SyncReport,
	) {
		let Some((sibling, tags)) = group
			.siblings(item)
			.filter(|&sibling| !held.contains(sibling))
			.find_map(|sibling| host.item_tags(sibling).map(|tags| (sibling, tags)))
		else {
			return;
		};

		if host.item_tags(item).is_none() {
			match host.set_item_tags(item, &tags) {
				Ok(()) => {
					tracing::info!(%tags, from = %sibling, to = %item, "copied tags");
					report.push(SyncEvent::TagsCopied {
						from: sibling,
						to: item,
						tags,
					});
				}
				Err(error) => persist_failed(report, format!("tags of {item}"), &error),
			}
		}

		if self.policy.remove_old_tags {
			match host.clear_item_tags(sibling) {
				Ok(()) => {
					tracing::info!(item = %sibling, "removed tags from old variant");
					report.push(SyncEvent::TagsCleared { item: sibling });
				}
				Err(error) => persist_failed(report, format!("tags of {sibling}"), &error),
			}
		}
	}

	fn sync_layout<S, C>(
		&mut self,
		host: &mut HostStore<'_, S>,
		catalog: &C,
		tag: &str,
		item: ItemId,
		held: &InventorySnapshot,
		report: &mut SyncReport,
	) where
		S: ConfigStore + ?Sized,
		C: ItemCatalog + ?Sized,
	{
		let Some(stored) = host.read_layout(tag) else {
			return;
		};
		let mut layout = decode(&stored.text);

		let Some(found) = self.find_match(catalog, &layout, item) else {
			return;
		};
		tracing::debug!(
			tag,
			%item,
			existing = %found.existing,
			position = found.position,
			source = ?found.source,
			"variant matched"
		);

		if found.existing == item {
			tracing::debug!(tag, %item, "already at its position");
			return;
		}

		let placement = if held.contains(found.existing) {
			if !self.policy.places_beside_held_variant() {
				tracing::debug!(tag, existing = %found.existing, "old variant still held, leaving layout");
				return;
			}
			Placement::Adjacent
		} else {
			match self.policy.layout_mode {
				PlacementMode::Replace => Placement::Replace,
				PlacementMode::Adjacent => Placement::Adjacent,
			}
		};

		remove_everywhere(&mut layout, item);

		let event = match placement {
			Placement::Replace => {
				layout.set_item(found.position, Some(item));
				SyncEvent::Replaced {
					tag: tag.to_string(),
					position: found.position,
					item,
					previous: found.existing,
				}
			}
			Placement::Adjacent => {
				let Some(inserted) = layout.insert_at_same_row(found.position + 1, item) else {
					tracing::debug!(tag, %item, beside = found.position, "no room beside variant, leaving layout");
					return;
				};
				SyncEvent::Inserted {
					tag: tag.to_string(),
					position: inserted.position,
					item,
					beside: found.existing,
					displaced: inserted.displaced,
				}
			}
		};

		let text = encode(&layout);
		if text == stored.text {
			tracing::debug!(tag, "layout unchanged");
			return;
		}

		match host.write_layout(tag, &text) {
			Ok(namespace) => {
				tracing::info!(tag, ?namespace, %event, "layout synced");
				report.push(event);
			}
			Err(error) => persist_failed(report, format!("layout '{tag}'"), &error),
		}
	}

	/// Finds the placed variant of `item`: registry group first, then charge names.
	fn find_match<C: ItemCatalog + ?Sized>(
		&mut self,
		catalog: &C,
		layout: &Layout,
		item: ItemId,
	) -> Option<VariantMatch> {
		let registry_match = self
			.registry
			.lookup(item)
			.and_then(|group| layout.find_variant_position(group))
			.and_then(|position| {
				Some(VariantMatch {
					position,
					existing: layout.get(position)?,
					source: MatchSource::Registry,
				})
			});
		if registry_match.is_some() || !self.policy.detect_charge_variants {
			return registry_match;
		}
		self.find_charge_match(catalog, layout, item)
	}

	fn find_charge_match<C: ItemCatalog + ?Sized>(
		&mut self,
		catalog: &C,
		layout: &Layout,
		item: ItemId,
	) -> Option<VariantMatch> {
		let name = self.names.get(catalog, item)?.to_owned();
		if !charge::is_charged_item(&name) {
			return None;
		}

		let mut best: Option<(Position, ItemId)> = None;
		for (position, other) in layout {
			if other == item || best.is_some_and(|(p, _)| p < position) {
				continue;
			}
			let Some(other_name) = self.names.get(catalog, other) else {
				continue;
			};
			if charge::are_charge_variants(&name, other_name) {
				best = Some((position, other));
			}
		}

		best.map(|(position, existing)| VariantMatch {
			position,
			existing,
			source: MatchSource::ChargeName,
		})
	}
}

/// Clears every position holding `item`.
fn remove_everywhere(layout: &mut Layout, item: ItemId) {
	while let Some(pos) = layout.find_item_position(item) {
		layout.remove(pos);
		tracing::debug!(%item, pos, "removed duplicate placement");
	}
}

fn persist_failed(report: &mut SyncReport, target: String, error: &crate::StoreError) {
	tracing::warn!(%target, %error, "failed to persist sync change");
	report.push(SyncEvent::PersistFailed {
		target,
		error: error.to_string(),
	});
}
