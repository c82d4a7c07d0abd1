//! Category eligibility engine.
//!
//! `eligibility-core` answers one question: may subject category S use
//! resource R of restriction kind K? Answers come from tables built in a
//! single load pass over a [`Catalog`] and are then read without locking.
//! Hosts talk to [`EligibilityEngine`] directly for raw verdicts or through
//! [`Gates`] for the composite checks (apparel, food, research by faction).
pub mod config;
pub mod denial;
pub mod engine;
pub mod error;
pub mod gates;
pub mod registry;
pub mod tables;
pub mod types;

pub use config::{EngineConfig, EvaluationMode};
pub use denial::Denial;
pub use engine::{
    BulkLoader, EligibilityEngine, Evaluator, LoadReport, LoadState, QueryOptions,
};
pub use error::{EligibilityError, ErrorSeverity, PolicyError, Result};
pub use gates::{GateResult, Gates};
pub use registry::EntityRegistry;
pub use tables::{
    ExperimentalOverrides, FactionResearchPolicy, HackedProjects, ResourceRef, RestrictionTable,
    Tables,
};
pub use types::{
    Catalog, ContentPack, FactionId, FactionPolicyDefinition, FactionResearchEntry, Fallback,
    ResourceCategory, ResourceId, ResourceKind, ResourceTags, RestrictionKind, SubjectCategory,
    SubjectDefinition, SubjectFlags, SubjectId,
};
