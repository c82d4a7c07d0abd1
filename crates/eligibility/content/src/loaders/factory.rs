//! Content factory for building a catalog from data files.

use std::path::{Path, PathBuf};

use eligibility_core::{
    Catalog, ContentPack, EngineConfig, FactionPolicyDefinition, ResourceCategory,
    SubjectDefinition,
};

use crate::loaders::{
    ConfigLoader, FactionLoader, LoadResult, PackLoader, ResourceLoader, SubjectLoader,
};

/// Environment variable overriding the content directory.
pub const DATA_DIR_ENV: &str = "ELIGIBILITY_DATA_DIR";

/// Content factory that loads all eligibility content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── resources.ron
/// ├── subjects.ron
/// ├── factions.ron
/// └── packs/
///     └── avian_expansion.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory for the default data directory: `ELIGIBILITY_DATA_DIR` when
    /// set, otherwise the sample data shipped with this crate.
    pub fn from_env() -> Self {
        Self::new(Self::default_data_dir())
    }

    pub fn default_data_dir() -> PathBuf {
        std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load engine configuration from `config.toml`, then apply environment
    /// overrides. A missing file means defaults.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join("config.toml");
        let config = if path.exists() {
            ConfigLoader::load(&path)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            EngineConfig::default()
        };
        Ok(ConfigLoader::apply_env(config))
    }

    /// Load the resource catalog from `resources.ron`.
    pub fn load_resources(&self) -> LoadResult<Vec<ResourceCategory>> {
        let path = self.data_dir.join("resources.ron");
        ResourceLoader::load(&path)
    }

    /// Load subject definitions from `subjects.ron`.
    pub fn load_subjects(&self) -> LoadResult<Vec<SubjectDefinition>> {
        let path = self.data_dir.join("subjects.ron");
        SubjectLoader::load(&path)
    }

    /// Load faction research policies from `factions.ron`.
    ///
    /// The file is optional; without it no faction narrows research.
    pub fn load_factions(&self) -> LoadResult<Vec<FactionPolicyDefinition>> {
        let path = self.data_dir.join("factions.ron");
        if !path.exists() {
            return Ok(Vec::new());
        }
        FactionLoader::load(&path)
    }

    /// Load content packs from the `packs/` directory.
    pub fn load_packs(&self) -> LoadResult<Vec<ContentPack>> {
        PackLoader::load_dir(&self.data_dir.join("packs"))
    }

    /// Load everything a load pass needs.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let catalog = Catalog {
            resources: self.load_resources()?,
            packs: self.load_packs()?,
            subjects: self.load_subjects()?,
            factions: self.load_factions()?,
        };
        tracing::debug!(
            dir = %self.data_dir.display(),
            resources = catalog.resources.len(),
            packs = catalog.packs.len(),
            subjects = catalog.subjects.len(),
            factions = catalog.factions.len(),
            "content catalog read"
        );
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
