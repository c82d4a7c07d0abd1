use crate::types::{Fallback, FactionId, RestrictionKind};

/// Per-query policy overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    /// Verdict for resources without a table entry. `None` uses the kind's
    /// default (see [`RestrictionKind::default_missing_key`]).
    pub missing_key: Option<Fallback>,
    /// Verdict for subjects the experimental store has never heard of.
    pub subject_not_found: Fallback,
    /// Faction of the querying subject; narrows research verdicts.
    pub faction: Option<FactionId>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self {
            missing_key: None,
            subject_not_found: Fallback::Deny,
            faction: None,
        }
    }

    #[must_use]
    pub fn with_missing_key(mut self, policy: Fallback) -> Self {
        self.missing_key = Some(policy);
        self
    }

    #[must_use]
    pub fn with_subject_not_found(mut self, policy: Fallback) -> Self {
        self.subject_not_found = policy;
        self
    }

    #[must_use]
    pub fn with_faction(mut self, faction: impl Into<FactionId>) -> Self {
        self.faction = Some(faction.into());
        self
    }

    pub fn missing_key_for(&self, kind: RestrictionKind) -> Fallback {
        self.missing_key.unwrap_or(kind.default_missing_key())
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::new()
    }
}
