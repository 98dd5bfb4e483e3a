//! Content factory for building snapshots from data files.

use std::path::{Path, PathBuf};

use loadout_core::{ItemsSnapshot, LoadoutConfig, LoadoutSnapshot, TablesSnapshot};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, TablesLoader};

/// Content factory that loads all loadout content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── tables.ron
/// └── items.ron
/// ```
///
/// `config.toml` is optional; without it the defaults apply.
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

    /// Load loadout configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<LoadoutConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(LoadoutConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load balance tables from `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<TablesSnapshot> {
        let path = self.data_dir.join("tables.ron");
        TablesLoader::load(&path)
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemsSnapshot> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load everything into a single snapshot.
    pub fn load(&self) -> LoadResult<LoadoutSnapshot> {
        let config = self.load_config()?;
        let tables = self.load_tables()?;
        let items = self.load_items()?;
        Ok(LoadoutSnapshot::new(items, tables, config))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_core::{
        AvatarProfile, ItemId, ItemRef, ItemSubtype, LoadoutController, SessionSnapshot,
        SlotStates, StatKind,
    };

    const CONFIG: &str = r#"
        ring_slot2_level = 40
        consumable_slot_levels = [1, 5, 10, 15, 20]
    "#;

    const TABLES: &str = r#"(
        characters: [(id: 100010, base: [(Hp, 300), (Atk, 20)], per_level: [(Atk, 2)])],
    )"#;

    const ITEMS: &str = r#"(
        items: [
            (
                id: ItemId(1),
                template_id: 10100000,
                category: Equipment,
                subtype: Weapon,
                stats: [(stat: Atk, op: Add, value: 30)],
            ),
        ],
    )"#;

    fn write_data_dir(with_config: bool) -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        if with_config {
            std::fs::write(dir.path().join("config.toml"), CONFIG).expect("write config");
        }
        std::fs::write(dir.path().join("tables.ron"), TABLES).expect("write tables");
        std::fs::write(dir.path().join("items.ron"), ITEMS).expect("write items");
        dir
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_a_complete_data_dir() {
        let dir = write_data_dir(true);
        let content = ContentFactory::new(dir.path()).load().expect("load content");

        assert_eq!(content.config.ring_slot2_level, 40);
        assert_eq!(content.items.len(), 1);
        assert_eq!(content.tables.character_count(), 1);

        let session = SessionSnapshot::new(AvatarProfile::new(100010, 3));
        let mut slots = SlotStates::default();
        let mut controller = LoadoutController::new(content.env(&session), &mut slots);
        controller
            .equip(ItemRef::equipment(ItemId(1), ItemSubtype::Weapon))
            .expect("equip weapon");

        let stats = controller.last_recalculation().expect("stats").stats;
        assert_eq!(stats.get(StatKind::Atk), 20 + 2 * 2 + 30);
    }

    #[test]
    fn missing_config_uses_defaults() {
        let dir = write_data_dir(false);
        let config = ContentFactory::new(dir.path())
            .load_config()
            .expect("default config");
        assert_eq!(config, LoadoutConfig::default());
    }

    #[test]
    fn missing_tables_name_the_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let error = ContentFactory::new(dir.path())
            .load_tables()
            .expect_err("no tables file");
        assert!(error.to_string().contains("tables.ron"));
    }
}
