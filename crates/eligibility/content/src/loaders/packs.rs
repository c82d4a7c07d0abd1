//! Content pack loader.

use std::path::Path;

use eligibility_core::ContentPack;

use crate::loaders::{LoadResult, parse_ron};

/// Loads every content pack from a directory, one pack per `.ron` file.
///
/// Expected directory structure:
/// ```text
/// packs/
///   ├── avian_expansion.ron
///   └── frontier_kitchen.ron
/// ```
pub struct PackLoader;

impl PackLoader {
    /// Load a single content pack file.
    pub fn load(path: &Path) -> LoadResult<ContentPack> {
        parse_ron(path, "content pack")
    }

    /// Load all packs in `packs_dir`, ordered by file name.
    ///
    /// A missing directory means no pack is installed.
    pub fn load_dir(packs_dir: &Path) -> LoadResult<Vec<ContentPack>> {
        if !packs_dir.is_dir() {
            tracing::debug!(dir = %packs_dir.display(), "no content pack directory");
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(packs_dir).map_err(|e| {
            anyhow::anyhow!("Failed to read pack directory {}: {}", packs_dir.display(), e)
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| anyhow::anyhow!("Failed to read pack directory entry: {}", e))?
                .path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        paths.iter().map(|path| Self::load(path)).collect()
    }
}
