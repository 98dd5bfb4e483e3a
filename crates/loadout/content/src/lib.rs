//! Data-driven loadout content.
//!
//! Loaders read static content from RON/TOML data files:
//! - Loadout configuration (TOML)
//! - Balance tables: characters, set effects, costume stats, runes (RON)
//! - Item catalogs (RON)
//!
//! Everything lands in the core's snapshot oracles; content never appears in
//! persisted slot state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CharacterSpec, ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, LoadResult, RuneSpec,
    TablesLoader, TablesSpec,
};
