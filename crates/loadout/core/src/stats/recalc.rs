//! Stat recalculation pipeline.
//!
//! Two stages, each a [`StatBonuses`] pass over the previous stage:
//!
//! 1. Level base + equipment intrinsic stats + set effects + costume stats
//! 2. Rune options at the owned rune level
//!
//! Current HP is then equalized to the new max HP.

use std::collections::BTreeMap;

use crate::env::{ItemDefinition, OracleError, PowerOracle, TablesOracle};
use crate::state::RuneId;

use super::bonus::{StatBonuses, StatBounds};
use super::character::{CharacterStats, Recalculation};

/// Everything a recalculation reads, resolved up front.
#[derive(Clone, Copy, Debug)]
pub struct RecalcInput<'i> {
    pub character_id: u32,
    pub level: u32,
    pub equipment: &'i [ItemDefinition],
    pub costumes: &'i [ItemDefinition],
    /// Equipped runes with their owned level.
    pub runes: &'i [(RuneId, u32)],
}

/// Pure function from a resolved loadout to stats and CP.
#[derive(Clone, Copy)]
pub struct StatRecalculator<'a> {
    tables: &'a dyn TablesOracle,
    power: &'a dyn PowerOracle,
}

impl<'a> StatRecalculator<'a> {
    pub fn new(tables: &'a dyn TablesOracle, power: &'a dyn PowerOracle) -> Self {
        Self { tables, power }
    }

    /// Recomputes stats and CP.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CharacterNotFound` if the character row is missing.
    /// Missing set, costume or rune rows only drop that contribution.
    pub fn recompute(&self, input: &RecalcInput<'_>) -> Result<Recalculation, OracleError> {
        let row = self
            .tables
            .character(input.character_id)
            .ok_or(OracleError::CharacterNotFound(input.character_id))?;

        let base = row.stats_at(input.level);
        let loadout = self.loadout_bonuses(input).apply(&base, StatBounds::CHARACTER);
        let final_stats = self.rune_bonuses(input).apply(&loadout, StatBounds::CHARACTER);

        let mut stats = CharacterStats::new(input.level, final_stats);
        stats.equalize_hp();
        let power = self.power.character_power(&stats);

        tracing::trace!(
            level = input.level,
            equipment = input.equipment.len(),
            costumes = input.costumes.len(),
            runes = input.runes.len(),
            power,
            "recomputed character stats"
        );

        Ok(Recalculation { stats, power })
    }

    fn loadout_bonuses(&self, input: &RecalcInput<'_>) -> StatBonuses {
        let mut bonuses = StatBonuses::new();

        let mut set_pieces: BTreeMap<u32, u32> = BTreeMap::new();
        for item in input.equipment {
            bonuses.add_modifiers(&item.stats);
            if let Some(set_id) = item.set_id {
                *set_pieces.entry(set_id).or_default() += 1;
            }
        }

        for (set_id, pieces) in set_pieces {
            for effect in self.tables.set_effects(set_id) {
                if pieces >= effect.pieces {
                    bonuses.add_modifiers(&effect.modifiers);
                }
            }
        }

        for costume in input.costumes {
            bonuses.add_modifiers(&costume.stats);
            bonuses.add_modifiers(&self.tables.costume_stats(costume.template_id));
        }

        bonuses
    }

    fn rune_bonuses(&self, input: &RecalcInput<'_>) -> StatBonuses {
        let mut bonuses = StatBonuses::new();
        for &(rune, level) in input.runes {
            match self.tables.rune_options(rune, level) {
                Some(options) => bonuses.add_modifiers(&options),
                None => tracing::trace!(%rune, level, "rune options missing, skipped"),
            }
        }
        bonuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PowerWeights;
    use crate::env::{CharacterRow, TablesSnapshot, WeightedPower};
    use crate::state::{ItemCategory, ItemId, ItemSubtype, RuneCategory};
    use crate::stats::{StatKind, StatMap, StatModifier};

    fn tables() -> TablesSnapshot {
        TablesSnapshot::empty()
            .with_character(CharacterRow::new(
                100010,
                StatMap::from_pairs(&[(StatKind::Hp, 300), (StatKind::Atk, 20), (StatKind::Def, 10)]),
                StatMap::from_pairs(&[(StatKind::Hp, 10), (StatKind::Atk, 2)]),
            ))
            .with_set_effect(1, 2, vec![StatModifier::percentage(StatKind::Atk, 10)])
            .with_set_effect(1, 3, vec![StatModifier::add(StatKind::Def, 100)])
            .with_costume_stats(40100000, vec![StatModifier::add(StatKind::Hp, 50)])
            .with_rune(
                RuneId(10001),
                RuneCategory::Stat,
                [(1, vec![StatModifier::percentage(StatKind::Hp, 10)])],
            )
    }

    fn sword(id: u64) -> ItemDefinition {
        ItemDefinition::new(ItemId(id), 10100000, ItemCategory::Equipment, ItemSubtype::Weapon)
            .with_set(1)
            .with_stats(vec![StatModifier::add(StatKind::Atk, 30)])
    }

    fn armor(id: u64) -> ItemDefinition {
        ItemDefinition::new(ItemId(id), 10200000, ItemCategory::Equipment, ItemSubtype::Armor)
            .with_set(1)
    }

    #[test]
    fn base_stats_grow_with_level() {
        let tables = tables();
        let power = WeightedPower::new(PowerWeights::default());
        let recalc = StatRecalculator::new(&tables, &power);

        let out = recalc
            .recompute(&RecalcInput {
                character_id: 100010,
                level: 11,
                equipment: &[],
                costumes: &[],
                runes: &[],
            })
            .unwrap();
        assert_eq!(out.stats.max_hp(), 400);
        assert_eq!(out.stats.get(StatKind::Atk), 40);
        assert_eq!(out.stats.current_hp, 400);
    }

    #[test]
    fn set_effects_apply_per_threshold_met() {
        let tables = tables();
        let power = WeightedPower::default();
        let recalc = StatRecalculator::new(&tables, &power);
        let equipment = [sword(1), armor(2)];

        let out = recalc
            .recompute(&RecalcInput {
                character_id: 100010,
                level: 1,
                equipment: &equipment,
                costumes: &[],
                runes: &[],
            })
            .unwrap();
        // (20 + 30) * 1.1; the 3-piece tier is not active
        assert_eq!(out.stats.get(StatKind::Atk), 55);
        assert_eq!(out.stats.get(StatKind::Def), 10);
    }

    #[test]
    fn runes_apply_after_loadout_and_heal_to_full() {
        let tables = tables();
        let power = WeightedPower::default();
        let recalc = StatRecalculator::new(&tables, &power);
        let costume = [ItemDefinition::new(
            ItemId(9),
            40100000,
            ItemCategory::Costume,
            ItemSubtype::FullCostume,
        )];

        let out = recalc
            .recompute(&RecalcInput {
                character_id: 100010,
                level: 1,
                equipment: &[],
                costumes: &costume,
                runes: &[(RuneId(10001), 1), (RuneId(99), 1)],
            })
            .unwrap();
        // (300 + 50) * 1.1, the unknown rune contributes nothing
        assert_eq!(out.stats.max_hp(), 385);
        assert_eq!(out.stats.current_hp, out.stats.max_hp());
    }

    #[test]
    fn missing_character_row_is_an_error() {
        let tables = TablesSnapshot::empty();
        let power = WeightedPower::default();
        let recalc = StatRecalculator::new(&tables, &power);

        let err = recalc
            .recompute(&RecalcInput {
                character_id: 1,
                level: 1,
                equipment: &[],
                costumes: &[],
                runes: &[],
            })
            .unwrap_err();
        assert_eq!(err, OracleError::CharacterNotFound(1));
    }

    #[test]
    fn recompute_is_pure() {
        let tables = tables();
        let power = WeightedPower::default();
        let recalc = StatRecalculator::new(&tables, &power);
        let equipment = [sword(1)];
        let input = RecalcInput {
            character_id: 100010,
            level: 30,
            equipment: &equipment,
            costumes: &[],
            runes: &[(RuneId(10001), 1)],
        };
        assert_eq!(recalc.recompute(&input), recalc.recompute(&input));
    }
}
