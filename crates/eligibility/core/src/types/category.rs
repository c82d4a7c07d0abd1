//! Resolved categories held by the [`EntityRegistry`](crate::EntityRegistry).

use std::collections::{HashMap, HashSet};

use bitflags::bitflags;

use super::{ResourceId, ResourceKind, RestrictionKind, SubjectId};

bitflags! {
    /// Properties of a resource that pack wildcard expansion filters on.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ResourceTags: u8 {
        const APPAREL    = 1 << 0;
        const INGESTIBLE = 1 << 1;
        const WEAPON     = 1 << 2;
    }
}

bitflags! {
    /// Per-subject switches.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SubjectFlags: u8 {
        /// Declarations feed only the experimental override store.
        const EXPERIMENTAL_ONLY     = 1 << 0;
        /// May only wear apparel from its own whitelist.
        const APPROVED_APPAREL_ONLY = 1 << 1;
        /// Never receives thoughts.
        const NO_THOUGHTS           = 1 << 2;
    }
}

/// A restrictable resource. Immutable after load.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceCategory {
    pub id: ResourceId,
    pub kind: ResourceKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: ResourceTags,
    /// Tables in which this resource has an entry even when no subject claims
    /// it. An entry with no subjects denies everyone.
    #[cfg_attr(feature = "serde", serde(default))]
    pub locked: Vec<RestrictionKind>,
}

impl ResourceCategory {
    pub fn new(id: impl Into<ResourceId>, kind: ResourceKind) -> Self {
        Self {
            id: id.into(),
            kind,
            label: None,
            tags: ResourceTags::empty(),
            locked: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: ResourceTags) -> Self {
        self.tags = tags;
        self
    }

    #[must_use]
    pub fn locked_for(mut self, kind: RestrictionKind) -> Self {
        self.locked.push(kind);
        self
    }

    /// Label for reasons and tooltips, falling back to the id.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.id.as_str())
    }

    pub fn is_apparel(&self) -> bool {
        self.kind == ResourceKind::Item && self.tags.contains(ResourceTags::APPAREL)
    }

    /// Whether a content-pack wildcard for `restriction` should pick this
    /// resource up.
    pub fn matches_pack_wildcard(&self, restriction: RestrictionKind) -> bool {
        if self.kind != restriction.resource_kind() {
            return false;
        }
        match restriction {
            RestrictionKind::Equipment | RestrictionKind::ApparelWhitelist => {
                self.tags.contains(ResourceTags::APPAREL)
            }
            RestrictionKind::Consumable | RestrictionKind::ConsumableWhitelist => {
                self.tags.contains(ResourceTags::INGESTIBLE)
            }
            _ => true,
        }
    }
}

/// A subject (race) after its definition has been resolved against the
/// registry. Only the parts the evaluator reads after load are kept here;
/// restriction claims live in the tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubjectCategory {
    pub id: SubjectId,
    pub label: Option<String>,
    pub flags: SubjectFlags,
    pub(crate) denials: HashMap<RestrictionKind, HashSet<ResourceId>>,
    pub(crate) body_types: Vec<ResourceId>,
}

impl SubjectCategory {
    pub fn new(id: impl Into<SubjectId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.id.as_str())
    }

    /// Whether the subject declared `resource` as denied for `kind`.
    pub fn denies(&self, kind: RestrictionKind, resource: &str) -> bool {
        self.denials
            .get(&kind)
            .is_some_and(|denied| denied.contains(resource))
    }

    /// Body types this subject may be generated with. Empty means any.
    pub fn body_types(&self) -> &[ResourceId] {
        &self.body_types
    }

    pub(crate) fn add_denial(&mut self, kind: RestrictionKind, resource: ResourceId) {
        self.denials.entry(kind).or_default().insert(resource);
    }

    pub(crate) fn add_body_type(&mut self, body: ResourceId) {
        if !self.body_types.contains(&body) {
            self.body_types.push(body);
        }
    }
}
