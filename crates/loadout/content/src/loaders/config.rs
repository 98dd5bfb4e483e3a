//! Loadout configuration loader.

use std::path::Path;

use loadout_core::LoadoutConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for loadout configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`LoadoutConfig::default`].
    pub fn load(path: &Path) -> LoadResult<LoadoutConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<LoadoutConfig> {
        let config: LoadoutConfig = toml::from_str(content)?;
        if config.consumable_slot_levels.windows(2).any(|w| w[0] > w[1]) {
            anyhow::bail!(
                "consumable_slot_levels must be non-decreasing, got {:?}",
                config.consumable_slot_levels
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            ring_slot2_level = 30

            [power]
            atk = 2000
            "#,
        )
        .expect("parse config");

        assert_eq!(config.ring_slot2_level, 30);
        assert_eq!(config.power.atk, 2000);
        assert_eq!(
            config.power.hp,
            LoadoutConfig::default().power.hp
        );
        assert_eq!(
            config.consumable_slot_levels,
            LoadoutConfig::DEFAULT_CONSUMABLE_SLOT_LEVELS
        );
    }

    #[test]
    fn unordered_consumable_levels_are_rejected() {
        let error = ConfigLoader::parse("consumable_slot_levels = [1, 20, 12, 16, 1]")
            .expect_err("unordered thresholds");
        assert!(error.to_string().contains("non-decreasing"));
    }

    #[test]
    fn wrong_threshold_count_is_rejected() {
        assert!(ConfigLoader::parse("consumable_slot_levels = [1, 2, 3]").is_err());
    }
}
