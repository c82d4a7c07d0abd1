//! The eligibility engine facade.
//!
//! [`EligibilityEngine`] owns one load pass worth of [`Tables`] plus the live
//! [`HackedProjects`] registry. Loading needs `&mut self`; every query takes
//! `&self`, so a loaded engine can be shared behind an `Arc` and queried from
//! any thread without locking.
//!
//! # Lifecycle
//!
//! ```text
//! NotStarted ──load_all──▶ Loading ──▶ Loaded
//!     ▲                                  │
//!     └────────────── reload ────────────┘
//! ```
mod evaluator;
mod loader;
mod query;

pub use evaluator::Evaluator;
pub use loader::{BulkLoader, LoadReport};
pub use query::QueryOptions;

use std::collections::BTreeSet;

use crate::config::{EngineConfig, EvaluationMode};
use crate::denial::Denial;
use crate::error::{EligibilityError, PolicyError, Result};
use crate::gates::Gates;
use crate::registry::EntityRegistry;
use crate::tables::{HackedProjects, ResourceRef, Tables};
use crate::types::{Catalog, ResourceId, RestrictionKind, SubjectId};

/// Load-pass state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum LoadState {
    #[default]
    NotStarted,
    /// Held only inside `load_all`, which borrows the engine mutably, so no
    /// query ever observes it.
    Loading,
    Loaded,
}

pub struct EligibilityEngine {
    config: EngineConfig,
    state: LoadState,
    tables: Tables,
    hacked: HackedProjects,
}

impl EligibilityEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: LoadState::NotStarted,
            tables: Tables::default(),
            hacked: HackedProjects::new(),
        }
    }

    /// Creates an engine and runs the first load pass.
    pub fn with_catalog(config: EngineConfig, catalog: &Catalog) -> (Self, LoadReport) {
        let mut engine = Self::new(config);
        let report = engine.load_all(catalog);
        (engine, report)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mode(&self) -> EvaluationMode {
        self.config.mode
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Builds every table from `catalog`, replacing whatever was loaded
    /// before. Never partial: the previous tables are dropped first.
    pub fn load_all(&mut self, catalog: &Catalog) -> LoadReport {
        if self.state == LoadState::Loaded {
            tracing::info!("rebuilding eligibility tables");
            self.reset();
        }

        self.state = LoadState::Loading;
        let (tables, report) = BulkLoader::new(&self.config).run(catalog);
        self.tables = tables;
        self.state = LoadState::Loaded;
        report
    }

    /// Explicit hot-reload: back to `NotStarted`, then a full pass.
    pub fn reload(&mut self, catalog: &Catalog) -> LoadReport {
        self.reset();
        self.load_all(catalog)
    }

    /// Drops all loaded tables. Hacked projects are gameplay state and are
    /// kept.
    pub fn reset(&mut self) {
        self.tables = Tables::default();
        self.state = LoadState::NotStarted;
    }

    /// Strict query: reports misuse instead of falling back.
    pub fn check(
        &self,
        kind: RestrictionKind,
        resource: &str,
        subject: &str,
        options: &QueryOptions,
    ) -> Result<bool> {
        if self.state != LoadState::Loaded {
            return Err(EligibilityError::NotLoaded);
        }
        Evaluator::new(self.config.mode, &self.tables, &self.hacked)
            .evaluate(kind, resource, subject, options)
    }

    /// The query entry point used by every gating decision.
    ///
    /// Errors never block gameplay: they are logged and answered with
    /// "allowed". With `strict_kinds` a debug build asserts on a query against
    /// an uninitialised table.
    pub fn is_eligible(
        &self,
        kind: RestrictionKind,
        resource: &str,
        subject: &str,
        options: &QueryOptions,
    ) -> bool {
        match self.check(kind, resource, subject, options) {
            Ok(verdict) => verdict,
            Err(err @ EligibilityError::UnknownKind(_)) => {
                tracing::error!(code = err.error_code(), resource, subject, "{}", err);
                debug_assert!(!self.config.strict_kinds, "{err}");
                true
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), resource, subject, "{}", err);
                true
            }
        }
    }

    /// Gameplay trigger: marks a research project as (un)hacked.
    pub fn set_hacked(&self, research: impl Into<ResourceId>, hacked: bool) {
        let research = research.into();
        if self.state == LoadState::Loaded
            && self.tables.registry.resource(research.as_str()).is_none()
        {
            tracing::warn!(research = %research, "hacking unknown research project");
        }
        tracing::debug!(research = %research, hacked, "research hack flag changed");
        self.hacked.set_hacked(research, hacked);
    }

    pub fn is_hacked(&self, research: &str) -> bool {
        self.hacked.is_hacked(research)
    }

    pub fn hacked_projects(&self) -> &HackedProjects {
        &self.hacked
    }

    /// Introspection: subjects granted `resource` in the active mode's store.
    pub fn allowed_subjects(
        &self,
        kind: RestrictionKind,
        resource: &str,
    ) -> Result<BTreeSet<SubjectId>> {
        if self.state != LoadState::Loaded {
            return Err(EligibilityError::NotLoaded);
        }
        match self.config.mode {
            EvaluationMode::Standard => Ok(self
                .tables
                .restrictions
                .allowed_subjects(kind, resource)?
                .cloned()
                .unwrap_or_default()),
            EvaluationMode::Experimental => {
                if !self.tables.restrictions.has_kind(kind) {
                    return Err(EligibilityError::UnknownKind(kind));
                }
                Ok(self
                    .tables
                    .overrides
                    .subjects_with(&ResourceRef::new(kind.resource_kind(), resource)))
            }
        }
    }

    /// Denial reason for the triple, labelled from the registry.
    pub fn explain(&self, kind: RestrictionKind, resource: &str, subject: &str) -> Denial {
        let registry = &self.tables.registry;
        Denial::new(kind, resource, subject).with_labels(
            registry.resource_label(resource),
            registry.subject_label(subject),
        )
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.tables.registry
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Composite host checks built on this engine.
    pub fn gates(&self) -> Gates<'_> {
        Gates::new(self)
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
