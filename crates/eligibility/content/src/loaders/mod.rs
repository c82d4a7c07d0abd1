//! Content loaders for reading eligibility definitions from files.

pub mod config;
pub mod factions;
pub mod factory;
pub mod packs;
pub mod resources;
pub mod subjects;

pub use config::ConfigLoader;
pub use factions::FactionLoader;
pub use factory::ContentFactory;
pub use packs::PackLoader;
pub use resources::{ResourceCatalog, ResourceLoader};
pub use subjects::SubjectLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parses a RON document, naming the file in the error.
pub(crate) fn parse_ron<T>(path: &Path, what: &str) -> LoadResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = read_file(path)?;
    ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON at {}: {}", what, path.display(), e))
}
