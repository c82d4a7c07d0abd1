//! Identifiers, kinds, categories and definitions.
mod category;
mod definition;
mod ids;
mod kind;

pub use category::{ResourceCategory, ResourceTags, SubjectCategory, SubjectFlags};
pub use definition::{
    Catalog, ContentPack, FactionPolicyDefinition, FactionResearchEntry, SubjectDefinition,
};
pub use ids::{FactionId, ResourceId, SubjectId};
pub use kind::{Fallback, ResourceKind, RestrictionKind};
