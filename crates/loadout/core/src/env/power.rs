//! Combat power formula.

use crate::config::PowerWeights;
use crate::stats::{CharacterStats, StatKind, StatMap};

use super::ItemDefinition;

/// Opaque CP formula.
///
/// Must be a pure function of its inputs; the controller compares values
/// across mutations to report transitions.
pub trait PowerOracle: Send + Sync {
    /// CP of the final, fully recalculated character.
    fn character_power(&self, stats: &CharacterStats) -> u64;

    /// CP contribution of a single item, used to rank ring occupants.
    fn item_power(&self, item: &ItemDefinition) -> u64;
}

/// Default linear formula: sum of `stat * weight / 100` plus a per-level term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeightedPower {
    weights: PowerWeights,
}

impl WeightedPower {
    pub const fn new(weights: PowerWeights) -> Self {
        Self { weights }
    }

    fn weight(&self, stat: StatKind) -> i64 {
        let weight = match stat {
            StatKind::Hp => self.weights.hp,
            StatKind::Atk => self.weights.atk,
            StatKind::Def => self.weights.def,
            StatKind::Cri => self.weights.cri,
            StatKind::Hit => self.weights.hit,
            StatKind::Spd => self.weights.spd,
        };
        i64::from(weight)
    }

    fn weigh(&self, stats: &StatMap) -> i64 {
        stats
            .iter()
            .map(|(stat, value)| value.saturating_mul(self.weight(stat)))
            .fold(0i64, i64::saturating_add)
            / 100
    }
}

impl PowerOracle for WeightedPower {
    fn character_power(&self, stats: &CharacterStats) -> u64 {
        let level_term = i64::from(stats.level) * i64::from(self.weights.per_level);
        u64::try_from(self.weigh(&stats.stats) + level_term).unwrap_or(0)
    }

    fn item_power(&self, item: &ItemDefinition) -> u64 {
        // Percentage rows have no base to scale here; only flat rows count.
        let mut flat = StatMap::zero();
        for modifier in item
            .stats
            .iter()
            .filter(|m| m.op == crate::stats::ModifierOp::Add)
        {
            flat[modifier.stat] += modifier.value;
        }
        u64::try_from(self.weigh(&flat)).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ItemCategory, ItemId, ItemSubtype};
    use crate::stats::StatModifier;

    #[test]
    fn character_power_is_weighted_sum() {
        let power = WeightedPower::default();
        let stats = CharacterStats::new(
            1,
            StatMap::from_pairs(&[(StatKind::Hp, 1000), (StatKind::Atk, 100)]),
        );
        // 1000 * 0.7 + 100 * 10.5
        assert_eq!(power.character_power(&stats), 700 + 1050);
    }

    #[test]
    fn item_power_ignores_percentage_rows() {
        let power = WeightedPower::default();
        let ring = ItemDefinition::new(ItemId(1), 10, ItemCategory::Equipment, ItemSubtype::Ring)
            .with_stats(vec![
                StatModifier::add(StatKind::Atk, 10),
                StatModifier::percentage(StatKind::Atk, 50),
            ]);
        assert_eq!(power.item_power(&ring), 105);
    }

    #[test]
    fn negative_totals_floor_at_zero() {
        let power = WeightedPower::default();
        let cursed = ItemDefinition::new(ItemId(2), 11, ItemCategory::Equipment, ItemSubtype::Ring)
            .with_stats(vec![StatModifier::add(StatKind::Def, -10)]);
        assert_eq!(power.item_power(&cursed), 0);
    }
}
