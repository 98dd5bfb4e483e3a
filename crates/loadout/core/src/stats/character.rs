//! Derived character stats.

use super::kinds::{StatKind, StatMap};

/// Aggregate character stats after every loadout modifier.
///
/// Never mutated directly; a fresh value comes out of every recalculation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStats {
    pub level: u32,
    /// Final stat values; `Hp` is the maximum HP.
    pub stats: StatMap,
    pub current_hp: i64,
}

impl CharacterStats {
    /// Creates stats at full health.
    pub fn new(level: u32, stats: StatMap) -> Self {
        Self {
            level,
            stats,
            current_hp: stats[StatKind::Hp],
        }
    }

    pub fn max_hp(&self) -> i64 {
        self.stats[StatKind::Hp]
    }

    pub fn get(&self, stat: StatKind) -> i64 {
        self.stats[stat]
    }

    /// Sets current HP to max HP.
    pub fn equalize_hp(&mut self) {
        self.current_hp = self.max_hp();
    }
}

/// Output of one recalculation: stats plus their combat power.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recalculation {
    pub stats: CharacterStats,
    pub power: u64,
}

/// CP before and after a change, for delta feedback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpTransition {
    pub previous: u64,
    pub current: u64,
}

impl CpTransition {
    pub const fn new(previous: u64, current: u64) -> Self {
        Self { previous, current }
    }

    /// A transition where nothing changed.
    pub const fn unchanged(power: u64) -> Self {
        Self::new(power, power)
    }

    pub fn delta(&self) -> i64 {
        let current = i64::try_from(self.current).unwrap_or(i64::MAX);
        let previous = i64::try_from(self.previous).unwrap_or(i64::MAX);
        current - previous
    }

    pub fn is_changed(&self) -> bool {
        self.previous != self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stats_start_at_full_health() {
        let stats = CharacterStats::new(3, StatMap::from_pairs(&[(StatKind::Hp, 450)]));
        assert_eq!(stats.current_hp, 450);
        assert_eq!(stats.max_hp(), 450);
    }

    #[test]
    fn transition_delta_is_signed() {
        assert_eq!(CpTransition::new(1200, 1000).delta(), -200);
        assert!(!CpTransition::unchanged(5).is_changed());
    }
}
