//! Variant detection for slotsync.
//!
//! Two sources decide whether item ids are interchangeable placements:
//!
//! - [`VariantRegistry`]: an immutable id → group index built once from a
//!   curated table ([`builtin()`]) or from caller-supplied groups.
//! - [`charge`]: name-pattern heuristics for charge, degradation, and state
//!   suffixes, used for items the registry does not know about.

pub mod builtin;
pub mod charge;
mod group;
mod registry;

pub use builtin::{BUILTIN_GROUPS, VariantGroupDef, builtin};
pub use charge::{ChargeName, ChargeSuffix, StateWord};
pub use group::{GroupId, VariantGroup};
pub use registry::{
	Collision, DuplicatePolicy, RegistryError, VariantRegistry, VariantRegistryBuilder,
};
