//! Keeps stored layouts consistent when new item variants are acquired.
//!
//! The host feeds inventory snapshots to [`SyncEngine::on_inventory_changed`]
//! as they arrive and calls [`SyncEngine::on_tick`] once per scheduler step.
//! Work found by a notification is held until the following tick, so other
//! consumers of the same notification (the host's own tagging) finish first.
//!
//! Collaborators are traits: [`ConfigStore`] for persisted key-value data and
//! [`ItemCatalog`] for item names.

mod catalog;
mod engine;
mod error;
pub mod keys;
mod namespace;
mod pending;
mod policy;
mod report;
mod snapshot;
mod store;

pub use catalog::{ItemCatalog, NameCache};
pub use engine::SyncEngine;
pub use error::{ConfigError, StoreError};
pub use namespace::{HostStore, Namespace, StoredLayout};
pub use pending::{PendingBatch, PendingWork};
pub use policy::{PlacementMode, SyncPolicy};
pub use report::{SyncEvent, SyncReport};
pub use snapshot::InventorySnapshot;
pub use store::{ConfigStore, MemoryStore};
