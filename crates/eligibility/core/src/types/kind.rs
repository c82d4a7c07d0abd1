//! Resource and restriction kinds.
//!
//! A [`ResourceKind`] tags what a resource *is*; a [`RestrictionKind`] names
//! one restriction table. Several tables may gate the same kind of resource
//! (equipment restrictions and the apparel whitelist both gate items).

/// Category tag of a restrictable resource.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourceKind {
    /// Equippable, wearable or edible thing.
    Item,
    Trait,
    Research,
    Building,
    Bed,
    BodyType,
    Thought,
    Faction,
}

/// Names one restriction table.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RestrictionKind {
    /// Items restricted to the listed subjects.
    Equipment,
    /// Apparel explicitly approved for the listed subjects.
    ApparelWhitelist,
    /// Food restricted to the listed subjects.
    Consumable,
    /// Food explicitly approved for the listed subjects.
    ConsumableWhitelist,
    Building,
    BuildingWhitelist,
    Research,
    Trait,
    Thought,
    Bed,
    BodyType,
}

impl RestrictionKind {
    /// The kind of resource this table gates.
    pub const fn resource_kind(self) -> ResourceKind {
        match self {
            Self::Equipment
            | Self::ApparelWhitelist
            | Self::Consumable
            | Self::ConsumableWhitelist => ResourceKind::Item,
            Self::Building | Self::BuildingWhitelist => ResourceKind::Building,
            Self::Research => ResourceKind::Research,
            Self::Trait => ResourceKind::Trait,
            Self::Thought => ResourceKind::Thought,
            Self::Bed => ResourceKind::Bed,
            Self::BodyType => ResourceKind::BodyType,
        }
    }

    /// Verdict used when a resource has no entry in this table.
    pub const fn default_missing_key(self) -> Fallback {
        match self {
            Self::ApparelWhitelist => Fallback::Deny,
            _ => Fallback::Allow,
        }
    }

    /// Verb used in denial reasons ("Avian cannot *wear* Power Armor").
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Equipment | Self::ApparelWhitelist => "wear",
            Self::Consumable | Self::ConsumableWhitelist => "eat",
            Self::Building | Self::BuildingWhitelist => "build",
            Self::Research => "research",
            Self::Trait => "gain the trait",
            Self::Thought => "have the thought",
            Self::Bed => "sleep in",
            Self::BodyType => "have the body type",
        }
    }

    pub const fn is_whitelist(self) -> bool {
        matches!(
            self,
            Self::ApparelWhitelist | Self::ConsumableWhitelist | Self::BuildingWhitelist
        )
    }
}

/// Default verdict applied when a lookup finds nothing to decide on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Fallback {
    #[default]
    Allow,
    Deny,
}

impl Fallback {
    #[inline]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl From<bool> for Fallback {
    fn from(allowed: bool) -> Self {
        if allowed { Self::Allow } else { Self::Deny }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_apparel_whitelist_denies_missing_keys() {
        let denying: Vec<_> = RestrictionKind::iter()
            .filter(|kind| !kind.default_missing_key().is_allowed())
            .collect();

        assert_eq!(denying, vec![RestrictionKind::ApparelWhitelist]);
    }

    #[test]
    fn kinds_parse_from_snake_case() {
        assert_eq!(
            "apparel_whitelist".parse::<RestrictionKind>().ok(),
            Some(RestrictionKind::ApparelWhitelist)
        );
        assert_eq!(
            "BODY_TYPE".parse::<RestrictionKind>().ok(),
            Some(RestrictionKind::BodyType)
        );
        assert_eq!(RestrictionKind::Bed.to_string(), "bed");
        assert_eq!(ResourceKind::BodyType.as_ref(), "body_type");
    }

    #[test]
    fn whitelists_gate_the_same_resources_as_their_restriction_table() {
        assert_eq!(
            RestrictionKind::ApparelWhitelist.resource_kind(),
            RestrictionKind::Equipment.resource_kind()
        );
        assert_eq!(
            RestrictionKind::BuildingWhitelist.resource_kind(),
            RestrictionKind::Building.resource_kind()
        );
    }
}
