//! Bulk loader: one synchronous pass from a [`Catalog`] to fresh [`Tables`].
//!
//! # Pass order
//!
//! 1. Register resources (catalog first, then content packs) and subjects
//! 2. Declare locked entries
//! 3. Explicit subject claims, denials and body types
//! 4. Content-pack wildcard claims (after every explicit claim)
//! 5. Faction research policies
//!
//! Malformed entries are logged, recorded in the [`LoadReport`] and skipped.

use crate::config::EngineConfig;
use crate::error::{EligibilityError, PolicyError};
use crate::tables::{RestrictionTable, ResourceRef, Tables};
use crate::types::{
    Catalog, FactionPolicyDefinition, ResourceId, ResourceKind, RestrictionKind,
    SubjectCategory, SubjectDefinition, SubjectFlags,
};

/// Outcome of one load pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub subjects: usize,
    pub resources: usize,
    pub packs: usize,
    /// (resource, subject) pairs in the standard tables.
    pub restrictions: usize,
    /// (subject, resource) pairs in the experimental store.
    pub overrides: usize,
    pub faction_entries: usize,
    /// Entries rejected while loading.
    pub skipped: Vec<EligibilityError>,
}

impl LoadReport {
    /// True when no entry was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

pub struct BulkLoader<'a> {
    config: &'a EngineConfig,
    tables: Tables,
    report: LoadReport,
}

impl<'a> BulkLoader<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self {
            config,
            tables: Tables {
                restrictions: RestrictionTable::with_kinds(config.kinds.iter().copied()),
                ..Tables::default()
            },
            report: LoadReport::default(),
        }
    }

    pub fn run(mut self, catalog: &Catalog) -> (Tables, LoadReport) {
        tracing::debug!(mode = %self.config.mode, "setting up subject restrictions");

        self.register_resources(catalog);
        let accepted = self.register_subjects(&catalog.subjects);
        self.declare_locked();

        for subject in &accepted {
            self.load_subject(subject);
        }
        for subject in &accepted {
            self.expand_packs(subject);
        }

        tracing::debug!("setting up faction research policies");
        for faction in &catalog.factions {
            self.load_faction(faction);
        }

        let registry = &self.tables.registry;
        self.report.subjects = registry.subject_count();
        self.report.resources = registry.resource_count();
        self.report.packs = registry.pack_count();
        self.report.restrictions = self.tables.restrictions.pair_count();
        self.report.overrides = self.tables.overrides.override_count();
        self.report.faction_entries = self.tables.factions.entry_count();

        tracing::info!(
            resources = self.report.resources,
            packs = self.report.packs,
            restrictions = self.report.restrictions,
            overrides = self.report.overrides,
            faction_entries = self.report.faction_entries,
            skipped = self.report.skipped.len(),
            "loaded {} subjects",
            self.report.subjects
        );

        (self.tables, self.report)
    }

    fn skip(&mut self, err: EligibilityError) {
        tracing::warn!(code = err.error_code(), "skipping definition: {}", err);
        self.report.skipped.push(err);
    }

    fn register_resources(&mut self, catalog: &Catalog) {
        for resource in &catalog.resources {
            if let Err(err) = self.tables.registry.register_resource(resource.clone()) {
                self.skip(err);
            }
        }
        for pack in &catalog.packs {
            for err in self.tables.registry.register_pack(pack) {
                self.skip(err);
            }
        }
    }

    /// Registers subject categories and returns the definitions that won
    /// their id.
    fn register_subjects<'c>(
        &mut self,
        subjects: &'c [SubjectDefinition],
    ) -> Vec<&'c SubjectDefinition> {
        let mut accepted = Vec::with_capacity(subjects.len());
        for definition in subjects {
            let category = SubjectCategory {
                label: definition.label.clone(),
                flags: definition.flags,
                ..SubjectCategory::new(definition.id.clone())
            };
            match self.tables.registry.register_subject(category) {
                Ok(()) => accepted.push(definition),
                Err(err) => self.skip(err),
            }
        }
        accepted
    }

    fn declare_locked(&mut self) {
        let locked: Vec<_> = self
            .tables
            .registry
            .resources()
            .flat_map(|resource| {
                resource
                    .locked
                    .iter()
                    .map(move |kind| (*kind, resource.id.clone(), resource.kind))
            })
            .collect();

        for (kind, id, found) in locked {
            if found != kind.resource_kind() {
                self.skip(EligibilityError::KindMismatch {
                    owner: format!("{kind} lock"),
                    resource: id,
                    expected: kind.resource_kind(),
                    found,
                });
                continue;
            }
            if !self.tables.restrictions.has_kind(kind) {
                tracing::debug!(%kind, resource = %id, "table disabled, lock ignored");
                continue;
            }
            if let Err(err) = self.tables.restrictions.declare(kind, id) {
                self.skip(err);
            }
        }
    }

    fn load_subject(&mut self, definition: &SubjectDefinition) {
        let owner = format!("subject '{}'", definition.id);

        for (&kind, resources) in &definition.restrictions {
            if !self.tables.restrictions.has_kind(kind) {
                tracing::debug!(%kind, subject = %definition.id, "table disabled, claims ignored");
                continue;
            }
            for id in resources {
                if self.resolve(&owner, id, kind.resource_kind()) {
                    self.claim(definition, kind, id.clone());
                }
            }
        }

        for (&kind, resources) in &definition.denials {
            for id in resources {
                if !self.resolve(&owner, id, kind.resource_kind()) {
                    continue;
                }
                if let Some(subject) = self.tables.registry.subject_mut(definition.id.as_str()) {
                    subject.add_denial(kind, id.clone());
                }
            }
        }

        for id in &definition.body_types {
            if !self.resolve(&owner, id, ResourceKind::BodyType) {
                continue;
            }
            if let Some(subject) = self.tables.registry.subject_mut(definition.id.as_str()) {
                subject.add_body_type(id.clone());
            }
        }
    }

    fn expand_packs(&mut self, definition: &SubjectDefinition) {
        for (&kind, packs) in &definition.packs {
            if !self.tables.restrictions.has_kind(kind) {
                continue;
            }
            for reference in packs {
                if !self.tables.registry.has_pack(reference) {
                    tracing::debug!(pack = %reference, subject = %definition.id, "content pack not installed");
                    continue;
                }
                let matched: Vec<ResourceId> = self
                    .tables
                    .registry
                    .pack_resources(reference)
                    .filter(|resource| resource.matches_pack_wildcard(kind))
                    .map(|resource| resource.id.clone())
                    .collect();

                tracing::debug!(
                    pack = %reference,
                    subject = %definition.id,
                    %kind,
                    count = matched.len(),
                    "expanding content pack"
                );
                for id in matched {
                    self.claim(definition, kind, id);
                }
            }
        }
    }

    fn load_faction(&mut self, definition: &FactionPolicyDefinition) {
        let owner = format!("faction '{}'", definition.faction);
        let faction_resource = ResourceId::from(&definition.faction);
        if !self.resolve(&owner, &faction_resource, ResourceKind::Faction) {
            return;
        }

        for entry in &definition.allow {
            if self.resolve(&owner, &entry.research, ResourceKind::Research) {
                self.tables.factions.add_allow(
                    definition.faction.clone(),
                    entry.research.clone(),
                    entry.hackable,
                );
            }
        }
        for entry in &definition.deny {
            if self.resolve(&owner, &entry.research, ResourceKind::Research) {
                self.tables.factions.add_deny(
                    definition.faction.clone(),
                    entry.research.clone(),
                    entry.hackable,
                );
            }
        }
    }

    /// Resolves a reference, recording the failure. Returns whether it resolved.
    fn resolve(&mut self, owner: &str, id: &ResourceId, expected: ResourceKind) -> bool {
        match self.tables.registry.resolve(owner, id, expected) {
            Ok(_) => true,
            Err(err) => {
                self.skip(err);
                false
            }
        }
    }

    /// Records a claim in both stores. Experimental-only subjects stay out of
    /// the standard tables.
    fn claim(&mut self, definition: &SubjectDefinition, kind: RestrictionKind, id: ResourceId) {
        if !definition.flags.contains(SubjectFlags::EXPERIMENTAL_ONLY) {
            if let Err(err) =
                self.tables
                    .restrictions
                    .add_restriction(kind, id.clone(), definition.id.clone())
            {
                self.skip(err);
                return;
            }
        }
        self.tables.overrides.add_override(
            definition.id.clone(),
            ResourceRef::new(kind.resource_kind(), id),
        );
    }
}
