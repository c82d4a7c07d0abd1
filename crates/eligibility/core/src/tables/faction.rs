//! Faction research policy: per-faction allow- and deny-lists.

use std::collections::HashMap;

use crate::tables::HackedProjects;
use crate::types::{FactionId, FactionResearchEntry, ResourceId};

#[derive(Clone, Debug, Default)]
struct FactionLists {
    allow: Vec<FactionResearchEntry>,
    deny: Vec<FactionResearchEntry>,
}

/// Research allow/deny lists keyed by faction.
///
/// Lists keep declaration order and tolerate duplicates.
#[derive(Clone, Debug, Default)]
pub struct FactionResearchPolicy {
    factions: HashMap<FactionId, FactionLists>,
}

impl FactionResearchPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_allow(&mut self, faction: FactionId, research: ResourceId, hackable: bool) {
        self.factions
            .entry(faction)
            .or_default()
            .allow
            .push(FactionResearchEntry { research, hackable });
    }

    pub fn add_deny(&mut self, faction: FactionId, research: ResourceId, hackable: bool) {
        self.factions
            .entry(faction)
            .or_default()
            .deny
            .push(FactionResearchEntry { research, hackable });
    }

    /// Faction-level verdict for `research`.
    ///
    /// Denied when a deny-list entry matches and is either not hackable or
    /// not yet hacked. Otherwise allowed when the faction declares no
    /// allow-list or lists the project in it.
    pub fn evaluate(&self, faction: &str, research: &str, hacked: &HackedProjects) -> bool {
        let Some(lists) = self.factions.get(faction) else {
            return true;
        };

        let denied = lists
            .deny
            .iter()
            .filter(|entry| entry.research.as_str() == research)
            .any(|entry| !entry.hackable || !hacked.is_hacked(research));
        if denied {
            return false;
        }

        lists.allow.is_empty()
            || lists
                .allow
                .iter()
                .any(|entry| entry.research.as_str() == research)
    }

    pub fn has_faction(&self, faction: &str) -> bool {
        self.factions.contains_key(faction)
    }

    pub fn entry_count(&self) -> usize {
        self.factions
            .values()
            .map(|lists| lists.allow.len() + lists.deny.len())
            .sum()
    }
}
