//! Experimental-mode override store: subject → resources it may use.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::types::{Fallback, ResourceId, ResourceKind, SubjectId};

/// A resource reference qualified by its kind, so that an item and a trait
/// sharing an id stay distinct in the pooled set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub id: ResourceId,
}

impl ResourceRef {
    pub fn new(kind: ResourceKind, id: impl Into<ResourceId>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// Per-subject whitelists, pooled across every restriction kind.
#[derive(Clone, Debug, Default)]
pub struct ExperimentalOverrides {
    permitted: HashMap<SubjectId, HashSet<ResourceRef>>,
}

impl ExperimentalOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the subject already had the resource.
    pub fn add_override(&mut self, subject: SubjectId, resource: ResourceRef) -> bool {
        self.permitted.entry(subject).or_default().insert(resource)
    }

    /// `subject_not_found` answers for subjects with no overrides at all;
    /// `missing_key` answers when the subject is known but the resource is
    /// not in its set.
    pub fn is_allowed(
        &self,
        subject: &str,
        resource: &ResourceRef,
        missing_key: Fallback,
        subject_not_found: Fallback,
    ) -> bool {
        match self.permitted.get(subject) {
            None => subject_not_found.is_allowed(),
            Some(set) if set.contains(resource) => true,
            Some(_) => missing_key.is_allowed(),
        }
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        self.permitted.contains_key(subject)
    }

    /// Subjects whose set contains `resource`.
    pub fn subjects_with(&self, resource: &ResourceRef) -> BTreeSet<SubjectId> {
        self.permitted
            .iter()
            .filter(|(_, set)| set.contains(resource))
            .map(|(subject, _)| subject.clone())
            .collect()
    }

    pub fn subject_count(&self) -> usize {
        self.permitted.len()
    }

    pub fn override_count(&self) -> usize {
        self.permitted.values().map(HashSet::len).sum()
    }
}
