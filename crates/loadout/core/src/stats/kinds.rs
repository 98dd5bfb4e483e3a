//! Stat identifiers, stat maps and table-driven modifiers.

use std::ops::{Index, IndexMut};

use strum::{EnumCount, IntoEnumIterator};

/// Character stats tracked by the loadout.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Hp,
    Atk,
    Def,
    Cri,
    Hit,
    Spd,
}

/// How a modifier value combines with the stat it targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ModifierOp {
    /// Adds the value to the stat.
    Add,
    /// Scales the stat by `value` percent (20 = +20%).
    Percentage,
}

/// A single `(stat, operation, value)` row from a balance table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub stat: StatKind,
    pub op: ModifierOp,
    pub value: i64,
}

impl StatModifier {
    pub const fn new(stat: StatKind, op: ModifierOp, value: i64) -> Self {
        Self { stat, op, value }
    }

    pub const fn add(stat: StatKind, value: i64) -> Self {
        Self::new(stat, ModifierOp::Add, value)
    }

    pub const fn percentage(stat: StatKind, percent: i64) -> Self {
        Self::new(stat, ModifierOp::Percentage, percent)
    }
}

/// Dense map from every [`StatKind`] to a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatMap {
    values: [i64; StatKind::COUNT],
}

impl StatMap {
    pub const fn zero() -> Self {
        Self {
            values: [0; StatKind::COUNT],
        }
    }

    /// Builds a map from `(stat, value)` pairs; unlisted stats are zero.
    pub fn from_pairs(pairs: &[(StatKind, i64)]) -> Self {
        let mut map = Self::zero();
        for &(stat, value) in pairs {
            map[stat] = value;
        }
        map
    }

    pub fn get(&self, stat: StatKind) -> i64 {
        self.values[stat as usize]
    }

    pub fn set(&mut self, stat: StatKind, value: i64) {
        self.values[stat as usize] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKind, i64)> + '_ {
        StatKind::iter().map(|stat| (stat, self.get(stat)))
    }
}

impl Index<StatKind> for StatMap {
    type Output = i64;

    fn index(&self, stat: StatKind) -> &i64 {
        &self.values[stat as usize]
    }
}

impl IndexMut<StatKind> for StatMap {
    fn index_mut(&mut self, stat: StatKind) -> &mut i64 {
        &mut self.values[stat as usize]
    }
}
