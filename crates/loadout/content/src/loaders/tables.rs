//! Balance tables loader.
//!
//! Tables are authored as flat record lists and folded into a
//! [`TablesSnapshot`]. Stat profiles are written as `(stat, value)` pairs so
//! unlisted stats read as zero.

use std::collections::BTreeSet;
use std::path::Path;

use loadout_core::{
    CharacterRow, RuneCategory, RuneId, SetEffectRow, StatKind, StatMap, StatModifier,
    TablesSnapshot,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Base stats and growth of one character archetype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSpec {
    pub id: u32,
    pub base: Vec<(StatKind, i64)>,
    #[serde(default)]
    pub per_level: Vec<(StatKind, i64)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEffectSpec {
    pub set_id: u32,
    pub pieces: u32,
    pub modifiers: Vec<StatModifier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostumeStatSpec {
    pub template_id: u32,
    pub stats: Vec<StatModifier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuneOptionSpec {
    pub level: u32,
    pub modifiers: Vec<StatModifier>,
}

/// A rune row with its options per rune level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuneSpec {
    pub id: u32,
    pub category: RuneCategory,
    #[serde(default)]
    pub options: Vec<RuneOptionSpec>,
}

/// Top-level structure of `tables.ron`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesSpec {
    pub characters: Vec<CharacterSpec>,
    pub set_effects: Vec<SetEffectSpec>,
    pub costume_stats: Vec<CostumeStatSpec>,
    pub runes: Vec<RuneSpec>,
}

/// Loader for balance tables from RON files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load balance tables from a RON file.
    pub fn load(path: &Path) -> LoadResult<TablesSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<TablesSnapshot> {
        let spec: TablesSpec = ron::from_str(content)?;
        Self::build(spec)
    }

    /// Folds parsed records into a snapshot, rejecting duplicate keys.
    pub fn build(spec: TablesSpec) -> LoadResult<TablesSnapshot> {
        let mut tables = TablesSnapshot::empty();

        let mut characters = BTreeSet::new();
        for character in spec.characters {
            if !characters.insert(character.id) {
                anyhow::bail!("duplicate character row {}", character.id);
            }
            tables.insert_character(CharacterRow::new(
                character.id,
                StatMap::from_pairs(&character.base),
                StatMap::from_pairs(&character.per_level),
            ));
        }

        let mut tiers = BTreeSet::new();
        for effect in spec.set_effects {
            if !tiers.insert((effect.set_id, effect.pieces)) {
                anyhow::bail!(
                    "duplicate set effect for set {} at {} pieces",
                    effect.set_id,
                    effect.pieces
                );
            }
            tables.insert_set_effect(
                effect.set_id,
                SetEffectRow {
                    pieces: effect.pieces,
                    modifiers: effect.modifiers,
                },
            );
        }

        for costume in spec.costume_stats {
            tables.insert_costume_stats(costume.template_id, costume.stats);
        }

        let mut runes = BTreeSet::new();
        for rune in spec.runes {
            let id = RuneId(rune.id);
            if !runes.insert(id) {
                anyhow::bail!("duplicate rune row {}", id);
            }
            tables.insert_rune(id, rune.category);
            for option in rune.options {
                tables.insert_rune_options(id, option.level, option.modifiers);
            }
        }

        tracing::debug!(
            characters = tables.character_count(),
            runes = tables.rune_count(),
            "balance tables loaded"
        );
        Ok(tables)
    }
}
