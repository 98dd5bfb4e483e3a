use crate::state::{RuneCategory, RuneId};
use crate::stats::{StatMap, StatModifier};

/// Oracle providing balance tables.
///
/// Loading these tables is external; the loadout only consumes lookups. Every
/// lookup may miss, and callers treat a miss as "skip this contribution".
pub trait TablesOracle: Send + Sync {
    fn character(&self, character_id: u32) -> Option<CharacterRow>;

    /// Set-effect rows of `set_id`, each active once `pieces` reaches its threshold.
    fn set_effects(&self, set_id: u32) -> Vec<SetEffectRow>;

    fn costume_stats(&self, template_id: u32) -> Vec<StatModifier>;

    fn rune(&self, rune: RuneId) -> Option<RuneRow>;

    /// Modifiers granted by `rune` at `level`.
    fn rune_options(&self, rune: RuneId, level: u32) -> Option<Vec<StatModifier>>;
}

/// Base stat profile of a character archetype.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterRow {
    pub id: u32,
    pub base: StatMap,
    /// Growth added for every level above 1.
    pub per_level: StatMap,
}

impl CharacterRow {
    pub fn new(id: u32, base: StatMap, per_level: StatMap) -> Self {
        Self {
            id,
            base,
            per_level,
        }
    }

    /// Stats at `level` before any equipment.
    pub fn stats_at(&self, level: u32) -> StatMap {
        let steps = i64::from(level.saturating_sub(1));
        let mut stats = StatMap::zero();
        for (stat, base) in self.base.iter() {
            stats[stat] = base + self.per_level[stat] * steps;
        }
        stats
    }
}

/// One tier of an equipment set bonus.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetEffectRow {
    pub pieces: u32,
    pub modifiers: Vec<StatModifier>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuneRow {
    pub id: RuneId,
    pub category: RuneCategory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatKind;

    #[test]
    fn character_growth_starts_at_level_one() {
        let row = CharacterRow::new(
            100010,
            StatMap::from_pairs(&[(StatKind::Hp, 300), (StatKind::Atk, 20)]),
            StatMap::from_pairs(&[(StatKind::Hp, 12), (StatKind::Atk, 1)]),
        );
        assert_eq!(row.stats_at(1)[StatKind::Hp], 300);
        assert_eq!(row.stats_at(11)[StatKind::Hp], 420);
        assert_eq!(row.stats_at(11)[StatKind::Atk], 30);
        assert_eq!(row.stats_at(0)[StatKind::Atk], 20);
    }
}
