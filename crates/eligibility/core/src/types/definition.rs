//! Unresolved definitions as handed over by a content source.
//!
//! Everything here references other categories by id only. The bulk loader
//! resolves ids against the registry and skips entries it cannot resolve.

use std::collections::BTreeMap;

use super::{FactionId, ResourceCategory, ResourceId, RestrictionKind, SubjectFlags, SubjectId};

/// A subject and everything it declares.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SubjectDefinition {
    pub id: SubjectId,
    pub label: Option<String>,
    pub flags: SubjectFlags,
    /// Resources this subject claims per table. In standard mode a claimed
    /// resource is usable only by the subjects that claim it.
    pub restrictions: BTreeMap<RestrictionKind, Vec<ResourceId>>,
    /// Resources this subject may never use, whatever the tables say.
    pub denials: BTreeMap<RestrictionKind, Vec<ResourceId>>,
    /// Content packs whose matching resources are claimed wholesale.
    pub packs: BTreeMap<RestrictionKind, Vec<String>>,
    pub body_types: Vec<ResourceId>,
}

impl SubjectDefinition {
    pub fn new(id: impl Into<SubjectId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: SubjectFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn restrict(mut self, kind: RestrictionKind, resource: impl Into<ResourceId>) -> Self {
        self.restrictions
            .entry(kind)
            .or_default()
            .push(resource.into());
        self
    }

    #[must_use]
    pub fn deny(mut self, kind: RestrictionKind, resource: impl Into<ResourceId>) -> Self {
        self.denials.entry(kind).or_default().push(resource.into());
        self
    }

    #[must_use]
    pub fn claim_pack(mut self, kind: RestrictionKind, pack: impl Into<String>) -> Self {
        self.packs.entry(kind).or_default().push(pack.into());
        self
    }

    #[must_use]
    pub fn with_body_type(mut self, body: impl Into<ResourceId>) -> Self {
        self.body_types.push(body.into());
        self
    }
}

/// One research entry of a faction allow- or deny-list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactionResearchEntry {
    pub research: ResourceId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hackable: bool,
}

impl FactionResearchEntry {
    pub fn new(research: impl Into<ResourceId>, hackable: bool) -> Self {
        Self {
            research: research.into(),
            hackable,
        }
    }
}

/// Research allow/deny declarations for one faction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactionPolicyDefinition {
    pub faction: FactionId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow: Vec<FactionResearchEntry>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub deny: Vec<FactionResearchEntry>,
}

impl FactionPolicyDefinition {
    pub fn new(faction: impl Into<FactionId>) -> Self {
        Self {
            faction: faction.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn allow(mut self, research: impl Into<ResourceId>, hackable: bool) -> Self {
        self.allow.push(FactionResearchEntry::new(research, hackable));
        self
    }

    #[must_use]
    pub fn deny(mut self, research: impl Into<ResourceId>, hackable: bool) -> Self {
        self.deny.push(FactionResearchEntry::new(research, hackable));
        self
    }
}

/// An externally supplied bundle of resources that subjects can claim by
/// name or package id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentPack {
    pub name: String,
    pub package_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resources: Vec<ResourceCategory>,
}

impl ContentPack {
    pub fn new(name: impl Into<String>, package_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package_id: package_id.into(),
            resources: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_resource(mut self, resource: ResourceCategory) -> Self {
        self.resources.push(resource);
        self
    }

    /// Name matches exactly; package ids are compared case-insensitively.
    pub fn is_referenced_by(&self, reference: &str) -> bool {
        self.name == reference || self.package_id.eq_ignore_ascii_case(reference)
    }
}

/// Complete input of one load pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Catalog {
    pub resources: Vec<ResourceCategory>,
    pub packs: Vec<ContentPack>,
    pub subjects: Vec<SubjectDefinition>,
    pub factions: Vec<FactionPolicyDefinition>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_resource(mut self, resource: ResourceCategory) -> Self {
        self.resources.push(resource);
        self
    }

    #[must_use]
    pub fn with_pack(mut self, pack: ContentPack) -> Self {
        self.packs.push(pack);
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: SubjectDefinition) -> Self {
        self.subjects.push(subject);
        self
    }

    #[must_use]
    pub fn with_faction(mut self, faction: FactionPolicyDefinition) -> Self {
        self.factions.push(faction);
        self
    }
}
