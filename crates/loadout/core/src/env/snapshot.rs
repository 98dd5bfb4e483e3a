//! Map-backed oracle implementations.
//!
//! Snapshots capture oracle data in plain ordered maps. Content loaders fill
//! them from data files; tests build them inline.

use std::collections::BTreeMap;

use super::{
    AvatarProfile, CharacterRow, ItemDefinition, ItemOracle, LoadoutEnv, PowerOracle,
    RuneRow, SessionOracle, SetEffectRow, TablesOracle, WeightedPower,
};
use crate::config::LoadoutConfig;
use crate::state::{ItemId, RuneCategory, RuneId};
use crate::stats::StatModifier;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Bundle
// ============================================================================

/// Static content needed by the loadout: inventory, tables and config.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadoutSnapshot {
    pub items: ItemsSnapshot,
    pub tables: TablesSnapshot,
    pub config: LoadoutConfig,
    power: WeightedPower,
}

impl LoadoutSnapshot {
    pub fn new(items: ItemsSnapshot, tables: TablesSnapshot, config: LoadoutConfig) -> Self {
        let power = WeightedPower::new(config.power);
        Self {
            items,
            tables,
            config,
            power,
        }
    }

    /// Builds a complete environment around a live session.
    pub fn env<'a>(&'a self, session: &'a dyn SessionOracle) -> LoadoutEnv<'a> {
        LoadoutEnv::new()
            .with_session(session)
            .with_items(&self.items)
            .with_tables(&self.tables)
            .with_power(&self.power)
            .with_config(&self.config)
    }

    /// Same as [`LoadoutSnapshot::env`] but with a custom CP formula.
    pub fn env_with_power<'a>(
        &'a self,
        session: &'a dyn SessionOracle,
        power: &'a dyn PowerOracle,
    ) -> LoadoutEnv<'a> {
        self.env(session).with_power(power)
    }
}

// ============================================================================
// Items
// ============================================================================

/// Inventory snapshot keyed by item id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemsSnapshot {
    items: BTreeMap<ItemId, ItemDefinition>,
}

impl ItemsSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, definition: ItemDefinition) -> Option<ItemDefinition> {
        self.items.insert(definition.id, definition)
    }

    #[must_use]
    pub fn with(mut self, definition: ItemDefinition) -> Self {
        self.insert(definition);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ItemDefinition> for ItemsSnapshot {
    fn from_iter<T: IntoIterator<Item = ItemDefinition>>(iter: T) -> Self {
        let mut snapshot = Self::empty();
        for definition in iter {
            snapshot.insert(definition);
        }
        snapshot
    }
}

impl ItemOracle for ItemsSnapshot {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition> {
        self.items.get(&id).cloned()
    }
}

// ============================================================================
// Tables
// ============================================================================

/// Rune row plus its option list per rune level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuneTableEntry {
    pub row: RuneRow,
    pub options: BTreeMap<u32, Vec<StatModifier>>,
}

/// Balance tables snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TablesSnapshot {
    characters: BTreeMap<u32, CharacterRow>,
    set_effects: BTreeMap<u32, Vec<SetEffectRow>>,
    costume_stats: BTreeMap<u32, Vec<StatModifier>>,
    runes: BTreeMap<RuneId, RuneTableEntry>,
}

impl TablesSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert_character(&mut self, row: CharacterRow) {
        self.characters.insert(row.id, row);
    }

    pub fn insert_set_effect(&mut self, set_id: u32, row: SetEffectRow) {
        let rows = self.set_effects.entry(set_id).or_default();
        rows.push(row);
        rows.sort_by_key(|row| row.pieces);
    }

    pub fn insert_costume_stats(&mut self, template_id: u32, stats: Vec<StatModifier>) {
        self.costume_stats.insert(template_id, stats);
    }

    pub fn insert_rune(&mut self, id: RuneId, category: RuneCategory) {
        self.runes.entry(id).or_insert_with(|| RuneTableEntry {
            row: RuneRow { id, category },
            options: BTreeMap::new(),
        });
    }

    /// Sets the options of `id` at `level`. The rune row must exist.
    pub fn insert_rune_options(&mut self, id: RuneId, level: u32, options: Vec<StatModifier>) -> bool {
        match self.runes.get_mut(&id) {
            Some(entry) => {
                entry.options.insert(level, options);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn with_character(mut self, row: CharacterRow) -> Self {
        self.insert_character(row);
        self
    }

    #[must_use]
    pub fn with_set_effect(mut self, set_id: u32, pieces: u32, modifiers: Vec<StatModifier>) -> Self {
        self.insert_set_effect(set_id, SetEffectRow { pieces, modifiers });
        self
    }

    #[must_use]
    pub fn with_costume_stats(mut self, template_id: u32, stats: Vec<StatModifier>) -> Self {
        self.insert_costume_stats(template_id, stats);
        self
    }

    #[must_use]
    pub fn with_rune(
        mut self,
        id: RuneId,
        category: RuneCategory,
        options: impl IntoIterator<Item = (u32, Vec<StatModifier>)>,
    ) -> Self {
        self.insert_rune(id, category);
        for (level, modifiers) in options {
            self.insert_rune_options(id, level, modifiers);
        }
        self
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    pub fn rune_count(&self) -> usize {
        self.runes.len()
    }
}

impl TablesOracle for TablesSnapshot {
    fn character(&self, character_id: u32) -> Option<CharacterRow> {
        self.characters.get(&character_id).cloned()
    }

    fn set_effects(&self, set_id: u32) -> Vec<SetEffectRow> {
        self.set_effects.get(&set_id).cloned().unwrap_or_default()
    }

    fn costume_stats(&self, template_id: u32) -> Vec<StatModifier> {
        self.costume_stats
            .get(&template_id)
            .cloned()
            .unwrap_or_default()
    }

    fn rune(&self, rune: RuneId) -> Option<RuneRow> {
        self.runes.get(&rune).map(|entry| entry.row)
    }

    fn rune_options(&self, rune: RuneId, level: u32) -> Option<Vec<StatModifier>> {
        self.runes.get(&rune)?.options.get(&level).cloned()
    }
}

// ============================================================================
// Session
// ============================================================================

/// Fixed session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionSnapshot {
    pub avatar: AvatarProfile,
    pub in_engagement: bool,
    pub rune_levels: BTreeMap<RuneId, u32>,
    pub gold: u64,
    pub action_points: u32,
    pub charging_action_points: bool,
    pub unviewed_items: bool,
}

impl SessionSnapshot {
    pub fn new(avatar: AvatarProfile) -> Self {
        Self {
            avatar,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rune(mut self, rune: RuneId, level: u32) -> Self {
        self.rune_levels.insert(rune, level);
        self
    }

    #[must_use]
    pub fn engaged(mut self, engaged: bool) -> Self {
        self.in_engagement = engaged;
        self
    }

    #[must_use]
    pub fn with_gold(mut self, gold: u64) -> Self {
        self.gold = gold;
        self
    }

    #[must_use]
    pub fn with_action_points(mut self, points: u32) -> Self {
        self.action_points = points;
        self
    }
}

impl SessionOracle for SessionSnapshot {
    fn avatar(&self) -> AvatarProfile {
        self.avatar
    }

    fn in_engagement(&self) -> bool {
        self.in_engagement
    }

    fn rune_level(&self, rune: RuneId) -> Option<u32> {
        self.rune_levels.get(&rune).copied()
    }

    fn gold(&self) -> u64 {
        self.gold
    }

    fn action_points(&self) -> u32 {
        self.action_points
    }

    fn is_charging_action_points(&self) -> bool {
        self.charging_action_points
    }

    fn has_unviewed_items(&self) -> bool {
        self.unviewed_items
    }
}
