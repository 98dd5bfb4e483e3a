//! Bonus application stack.
//!
//! Every stage of the recalculation uses the same order:
//! Flat → %Inc → Clamp
//!
//! Table rows arrive as [`StatModifier`]s; `Add` rows become flat bonuses and
//! `Percentage` rows become percentage increases of the stage's base value.

use strum::EnumCount;

use super::kinds::{ModifierOp, StatKind, StatMap, StatModifier};

/// A single bonus that can be applied to a stat value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bonus {
    /// Flat additive bonus (applied first)
    Flat(i64),

    /// Percentage increase (summed with other %Inc, then multiplied)
    /// Stored as integer percentage (e.g., 20 = +20%)
    Increased(i64),
}

impl Bonus {
    pub fn flat(value: i64) -> Self {
        Bonus::Flat(value)
    }

    pub fn increased(percent: i64) -> Self {
        Bonus::Increased(percent)
    }
}

impl From<&StatModifier> for Bonus {
    fn from(modifier: &StatModifier) -> Self {
        match modifier.op {
            ModifierOp::Add => Bonus::Flat(modifier.value),
            ModifierOp::Percentage => Bonus::Increased(modifier.value),
        }
    }
}

/// A collection of bonuses for one stat, applied in a fixed order.
///
/// # Example
/// ```
/// # use loadout_core::stats::bonus::{Bonus, BonusStack};
/// let mut stack = BonusStack::new();
/// stack.add(Bonus::flat(5));           // +5
/// stack.add(Bonus::increased(20));     // +20%
/// stack.add(Bonus::increased(30));     // +30% (summed)
///
/// // (10 + 5) × 1.5
/// assert_eq!(stack.apply(10, 0, 100), 22);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BonusStack {
    bonuses: Vec<Bonus>,
}

impl BonusStack {
    pub fn new() -> Self {
        Self {
            bonuses: Vec::new(),
        }
    }

    pub fn add(&mut self, bonus: Bonus) {
        self.bonuses.push(bonus);
    }

    pub fn extend(&mut self, bonuses: impl IntoIterator<Item = Bonus>) {
        self.bonuses.extend(bonuses);
    }

    /// Apply all bonuses to a base value with clamping
    ///
    /// # Formula
    /// ```text
    /// result = clamp((base + flat_sum) × (100 + inc_sum) / 100, min, max)
    /// ```
    pub fn apply(&self, base: i64, min: i64, max: i64) -> i64 {
        let flat_sum: i64 = self
            .bonuses
            .iter()
            .filter_map(|b| match b {
                Bonus::Flat(v) => Some(*v),
                _ => None,
            })
            .sum();

        let inc_sum: i64 = self
            .bonuses
            .iter()
            .filter_map(|b| match b {
                Bonus::Increased(p) => Some(*p),
                _ => None,
            })
            .sum();

        let after_inc = if inc_sum == 0 {
            base + flat_sum
        } else {
            ((base + flat_sum) * (100 + inc_sum)) / 100
        };

        after_inc.clamp(min, max)
    }

    pub fn is_empty(&self) -> bool {
        self.bonuses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bonuses.len()
    }
}

/// One [`BonusStack`] per stat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatBonuses {
    stacks: [BonusStack; StatKind::COUNT],
}

impl StatBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, stat: StatKind, bonus: Bonus) {
        self.stacks[stat as usize].add(bonus);
    }

    pub fn add_modifier(&mut self, modifier: &StatModifier) {
        self.add(modifier.stat, Bonus::from(modifier));
    }

    pub fn add_modifiers<'m>(&mut self, modifiers: impl IntoIterator<Item = &'m StatModifier>) {
        for modifier in modifiers {
            self.add_modifier(modifier);
        }
    }

    pub fn stack(&self, stat: StatKind) -> &BonusStack {
        &self.stacks[stat as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.iter().all(BonusStack::is_empty)
    }

    /// Applies every stack to the matching stat of `base`.
    pub fn apply(&self, base: &StatMap, bounds: StatBounds) -> StatMap {
        let mut out = StatMap::zero();
        for (stat, value) in base.iter() {
            out[stat] = self.stack(stat).apply(value, bounds.min, bounds.max);
        }
        out
    }
}

/// Clamping bounds for a recalculation stage.
#[derive(Clone, Copy, Debug)]
pub struct StatBounds {
    pub min: i64,
    pub max: i64,
}

impl StatBounds {
    /// Character stats never go negative.
    pub const CHARACTER: Self = Self {
        min: 0,
        max: 999_999_999,
    };
}
