//! Item catalog loader.

use std::path::Path;

use loadout_core::{ItemDefinition, ItemsSnapshot};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    ///
    /// Duplicate ids are rejected.
    pub fn load(path: &Path) -> LoadResult<ItemsSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<ItemsSnapshot> {
        let catalog: ItemCatalog = ron::from_str(content)?;

        let mut items = ItemsSnapshot::empty();
        for definition in catalog.items {
            let id = definition.id;
            if items.insert(definition).is_some() {
                anyhow::bail!("duplicate item id {}", id);
            }
        }
        tracing::debug!(count = items.len(), "item catalog loaded");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_core::{ItemId, ItemOracle, ItemSubtype, StatKind, StatModifier};

    #[test]
    fn parses_items_with_optional_fields() {
        let items = ItemLoader::parse(
            r#"(
                items: [
                    (
                        id: ItemId(1),
                        template_id: 10100000,
                        category: Equipment,
                        subtype: Weapon,
                        stats: [(stat: Atk, op: Add, value: 12)],
                    ),
                    (
                        id: ItemId(2),
                        template_id: 10200000,
                        category: Equipment,
                        subtype: Armor,
                        required_level: 30,
                        set_id: Some(7),
                    ),
                ],
            )"#,
        )
        .expect("parse catalog");

        assert_eq!(items.len(), 2);
        let weapon = items.definition(ItemId(1)).expect("weapon");
        assert_eq!(weapon.stats, vec![StatModifier::add(StatKind::Atk, 12)]);
        assert_eq!(weapon.required_level, 0);

        let armor = items.definition(ItemId(2)).expect("armor");
        assert_eq!(armor.subtype, ItemSubtype::Armor);
        assert_eq!(armor.set_id, Some(7));
        assert!(armor.is_level_limited(29));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = ItemLoader::parse(
            r#"(
                items: [
                    (id: ItemId(1), template_id: 1, category: Consumable, subtype: Food),
                    (id: ItemId(1), template_id: 2, category: Consumable, subtype: Food),
                ],
            )"#,
        );
        assert!(result.is_err());
    }
}
