//! Resource catalog loader.

use std::path::Path;

use eligibility_core::ResourceCategory;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron};

/// Resource catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCatalog {
    pub resources: Vec<ResourceCategory>,
}

/// Loader for the resource catalog from RON files.
pub struct ResourceLoader;

impl ResourceLoader {
    /// Load the resource catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a ResourceCatalog
    pub fn load(path: &Path) -> LoadResult<Vec<ResourceCategory>> {
        let catalog: ResourceCatalog = parse_ron(path, "resource catalog")?;
        Ok(catalog.resources)
    }
}
