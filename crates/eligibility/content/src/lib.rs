//! Data-driven eligibility content.
//!
//! Loads the files of a content directory into the in-memory definitions
//! consumed by `eligibility-core`:
//! - Engine configuration (TOML, with environment overrides)
//! - Resource catalog (RON)
//! - Subject definitions (RON)
//! - Faction research policies (RON)
//! - Content packs, one per file (RON)
//!
//! Everything is deserialized straight into `eligibility-core` types; no id is
//! resolved here. Unresolvable references are the bulk loader's concern.

pub mod loaders;

pub use loaders::{
    ConfigLoader, ContentFactory, FactionLoader, LoadResult, PackLoader, ResourceCatalog,
    ResourceLoader, SubjectLoader,
};
