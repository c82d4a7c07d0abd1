//! Human-readable denial reasons.

use crate::types::{ResourceId, RestrictionKind, SubjectId};

/// Why a subject may not use a resource, for tooltips and job-failure
/// messages.
///
/// Built from the same (kind, resource, subject) triple as the query, so a
/// caller can construct one without consulting the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} cannot {} {}", .subject_label, .kind.verb(), .resource_label)]
pub struct Denial {
    pub kind: RestrictionKind,
    pub resource: ResourceId,
    pub subject: SubjectId,
    pub resource_label: String,
    pub subject_label: String,
}

impl Denial {
    /// A denial labelled with the raw ids.
    pub fn new(
        kind: RestrictionKind,
        resource: impl Into<ResourceId>,
        subject: impl Into<SubjectId>,
    ) -> Self {
        let resource = resource.into();
        let subject = subject.into();
        Self {
            kind,
            resource_label: resource.to_string(),
            subject_label: subject.to_string(),
            resource,
            subject,
        }
    }

    #[must_use]
    pub fn with_labels(
        mut self,
        resource_label: impl Into<String>,
        subject_label: impl Into<String>,
    ) -> Self {
        self.resource_label = resource_label.into();
        self.subject_label = subject_label.into();
        self
    }
}
