//! Content loaders for reading loadout data from files.
//!
//! Each loader turns one data file into a core snapshot type.

pub mod config;
pub mod factory;
pub mod item;
pub mod tables;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};
pub use tables::{CharacterSpec, RuneSpec, TablesLoader, TablesSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
