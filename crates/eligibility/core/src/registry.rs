//! Entity registry: the load-time source of truth for every category.
//!
//! Flat id → category maps with O(1) lookup. Registration never aborts a load
//! pass; conflicting entries are rejected individually and reported.

use std::collections::HashMap;

use crate::error::{EligibilityError, Result};
use crate::types::{
    ContentPack, ResourceCategory, ResourceId, ResourceKind, SubjectCategory, SubjectId,
};

/// Resources contributed by one content pack.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PackIndex {
    name: String,
    package_id: String,
    resources: Vec<ResourceId>,
}

impl PackIndex {
    fn is_referenced_by(&self, reference: &str) -> bool {
        self.name == reference || self.package_id.eq_ignore_ascii_case(reference)
    }
}

/// Registry of every known subject and resource category.
#[derive(Clone, Debug, Default)]
pub struct EntityRegistry {
    resources: HashMap<ResourceId, ResourceCategory>,
    subjects: HashMap<SubjectId, SubjectCategory>,
    packs: Vec<PackIndex>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource. The first definition of an id wins.
    pub fn register_resource(&mut self, resource: ResourceCategory) -> Result<()> {
        if self.resources.contains_key(&resource.id) {
            return Err(EligibilityError::DuplicateResource(resource.id));
        }
        self.resources.insert(resource.id.clone(), resource);
        Ok(())
    }

    /// Registers every resource of a pack and remembers which ones it owns.
    ///
    /// Returns the resources that could not be registered; the rest of the
    /// pack is still usable.
    pub fn register_pack(&mut self, pack: &ContentPack) -> Vec<EligibilityError> {
        let mut rejected = Vec::new();
        let mut owned = Vec::with_capacity(pack.resources.len());

        for resource in &pack.resources {
            let id = resource.id.clone();
            match self.register_resource(resource.clone()) {
                Ok(()) => owned.push(id),
                Err(err) => rejected.push(err),
            }
        }

        self.packs.push(PackIndex {
            name: pack.name.clone(),
            package_id: pack.package_id.clone(),
            resources: owned,
        });
        rejected
    }

    /// Registers a subject. The first definition of an id wins.
    pub fn register_subject(&mut self, subject: SubjectCategory) -> Result<()> {
        if self.subjects.contains_key(&subject.id) {
            return Err(EligibilityError::DuplicateSubject(subject.id));
        }
        self.subjects.insert(subject.id.clone(), subject);
        Ok(())
    }

    pub fn resource(&self, id: &str) -> Option<&ResourceCategory> {
        self.resources.get(id)
    }

    pub fn subject(&self, id: &str) -> Option<&SubjectCategory> {
        self.subjects.get(id)
    }

    pub(crate) fn subject_mut(&mut self, id: &str) -> Option<&mut SubjectCategory> {
        self.subjects.get_mut(id)
    }

    /// Resolves a reference made by `owner`, checking it names a resource of
    /// the `expected` kind.
    pub fn resolve(
        &self,
        owner: &str,
        id: &ResourceId,
        expected: ResourceKind,
    ) -> Result<&ResourceCategory> {
        let resource =
            self.resources
                .get(id)
                .ok_or_else(|| EligibilityError::UnresolvedResource {
                    owner: owner.to_owned(),
                    kind: expected,
                    resource: id.clone(),
                })?;

        if resource.kind != expected {
            return Err(EligibilityError::KindMismatch {
                owner: owner.to_owned(),
                resource: id.clone(),
                expected,
                found: resource.kind,
            });
        }
        Ok(resource)
    }

    /// All resources contributed by packs matching `reference` (by name or
    /// package id). Unknown references yield nothing: the pack is simply not
    /// installed.
    pub fn pack_resources<'a>(
        &'a self,
        reference: &'a str,
    ) -> impl Iterator<Item = &'a ResourceCategory> + 'a {
        self.packs
            .iter()
            .filter(move |pack| pack.is_referenced_by(reference))
            .flat_map(|pack| pack.resources.iter())
            .filter_map(|id| self.resources.get(id))
    }

    pub fn has_pack(&self, reference: &str) -> bool {
        self.packs
            .iter()
            .any(|pack| pack.is_referenced_by(reference))
    }

    /// Label used in denial reasons; unknown ids are shown verbatim.
    pub fn resource_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.resources
            .get(id)
            .map_or(id, ResourceCategory::display_label)
    }

    pub fn subject_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.subjects
            .get(id)
            .map_or(id, SubjectCategory::display_label)
    }

    pub fn subjects(&self) -> impl Iterator<Item = &SubjectCategory> {
        self.subjects.values()
    }

    pub fn resources(&self) -> impl Iterator<Item = &ResourceCategory> {
        self.resources.values()
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn pack_count(&self) -> usize {
        self.packs.len()
    }
}
