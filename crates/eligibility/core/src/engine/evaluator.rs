//! The decision procedure.
//!
//! ```text
//! subject denial? ──yes──▶ deny
//!       │no
//!       ▼
//! mode == Standard ──▶ RestrictionTable::is_allowed
//! mode == Experimental ──▶ ExperimentalOverrides::is_allowed
//!       │
//!       ▼
//! kind == Research && faction known ──▶ verdict && FactionResearchPolicy::evaluate
//! ```
//!
//! The two stores are never consulted by the same query.

use crate::config::EvaluationMode;
use crate::engine::QueryOptions;
use crate::error::{EligibilityError, Result};
use crate::tables::{HackedProjects, ResourceRef, Tables};
use crate::types::RestrictionKind;

/// Read-only view over one load pass plus the live hacked registry.
#[derive(Clone, Copy)]
pub struct Evaluator<'a> {
    mode: EvaluationMode,
    tables: &'a Tables,
    hacked: &'a HackedProjects,
}

impl<'a> Evaluator<'a> {
    pub fn new(mode: EvaluationMode, tables: &'a Tables, hacked: &'a HackedProjects) -> Self {
        Self {
            mode,
            tables,
            hacked,
        }
    }

    pub fn evaluate(
        &self,
        kind: RestrictionKind,
        resource: &str,
        subject: &str,
        options: &QueryOptions,
    ) -> Result<bool> {
        if !self.tables.restrictions.has_kind(kind) {
            return Err(EligibilityError::UnknownKind(kind));
        }

        let denied_by_subject = self
            .tables
            .registry
            .subject(subject)
            .is_some_and(|category| category.denies(kind, resource));
        if denied_by_subject {
            tracing::debug!(%kind, resource, subject, "denied by subject declaration");
            return Ok(false);
        }

        let missing_key = options.missing_key_for(kind);
        let subject_verdict = match self.mode {
            EvaluationMode::Standard => {
                self.tables
                    .restrictions
                    .is_allowed(kind, resource, subject, missing_key)?
            }
            EvaluationMode::Experimental => self.tables.overrides.is_allowed(
                subject,
                &ResourceRef::new(kind.resource_kind(), resource),
                missing_key,
                options.subject_not_found,
            ),
        };

        if kind != RestrictionKind::Research {
            return Ok(subject_verdict);
        }
        let Some(faction) = options.faction.as_ref() else {
            return Ok(subject_verdict);
        };

        // Faction policy narrows, never widens.
        Ok(subject_verdict
            && self
                .tables
                .factions
                .evaluate(faction.as_str(), resource, self.hacked))
    }
}
