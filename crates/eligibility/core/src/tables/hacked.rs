//! Research projects unlocked through gameplay.
//!
//! The only structure mutated after load. Writers (gameplay triggers) and
//! readers (the evaluator) may race; last write wins.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::types::ResourceId;

/// Thread-safe research → hacked flag map.
#[derive(Debug, Default)]
pub struct HackedProjects {
    flags: RwLock<HashMap<ResourceId, bool>>,
}

impl HackedProjects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the hacked flag for `research`, returning the previous value.
    pub fn set_hacked(&self, research: ResourceId, hacked: bool) -> Option<bool> {
        // A panicking writer cannot leave a half-written bool behind.
        let mut flags = self.flags.write().unwrap_or_else(PoisonError::into_inner);
        flags.insert(research, hacked)
    }

    pub fn is_hacked(&self, research: &str) -> bool {
        let flags = self.flags.read().unwrap_or_else(PoisonError::into_inner);
        flags.get(research).copied().unwrap_or(false)
    }

    /// Projects currently flagged as hacked.
    pub fn hacked(&self) -> Vec<ResourceId> {
        let flags = self.flags.read().unwrap_or_else(PoisonError::into_inner);
        let mut hacked: Vec<_> = flags
            .iter()
            .filter(|(_, hacked)| **hacked)
            .map(|(id, _)| id.clone())
            .collect();
        hacked.sort();
        hacked
    }
}
