//! Subject definition loader.

use std::path::Path;

use eligibility_core::SubjectDefinition;

use crate::loaders::{LoadResult, parse_ron};

/// Loader for subject definitions from RON files.
///
/// File format: a list of subject definitions. Every field except `id` may
/// be omitted.
///
/// ```ron
/// [
///     (
///         id: "Avian",
///         flags: ("APPROVED_APPAREL_ONLY"),
///         restrictions: { apparel_whitelist: ["FeatherCloak"] },
///         denials: { equipment: ["HeavyArmor"] },
///     ),
/// ]
/// ```
pub struct SubjectLoader;

impl SubjectLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<SubjectDefinition>> {
        parse_ron(path, "subject definitions")
    }
}
