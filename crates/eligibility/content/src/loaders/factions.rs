//! Faction research policy loader.

use std::path::Path;

use eligibility_core::FactionPolicyDefinition;

use crate::loaders::{LoadResult, parse_ron};

/// Loader for faction research policies from RON files.
pub struct FactionLoader;

impl FactionLoader {
    /// Load faction policies from a RON file containing a list of
    /// `(faction, allow, deny)` records.
    pub fn load(path: &Path) -> LoadResult<Vec<FactionPolicyDefinition>> {
        parse_ron(path, "faction policies")
    }
}
