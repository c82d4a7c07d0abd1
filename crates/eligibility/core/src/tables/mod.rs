//! Stores populated by the bulk loader and read by the evaluator.
//!
//! Everything except [`HackedProjects`] is immutable once a load pass ends.
mod faction;
mod hacked;
mod overrides;
mod restriction;

pub use faction::FactionResearchPolicy;
pub use hacked::HackedProjects;
pub use overrides::{ExperimentalOverrides, ResourceRef};
pub use restriction::RestrictionTable;

use crate::registry::EntityRegistry;

/// One complete load-pass result.
#[derive(Clone, Debug, Default)]
pub struct Tables {
    pub registry: EntityRegistry,
    pub restrictions: RestrictionTable,
    pub overrides: ExperimentalOverrides,
    pub factions: FactionResearchPolicy,
}
