//! Rune slot state.
//!
//! Rune slots are a fixed-length array per mode. Length, categories and lock
//! sources come from external configuration; the loadout only flips the
//! assigned rune.

use super::RuneId;

/// Category a rune (and a rune slot) belongs to.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RuneCategory {
    Stat,
    Skill,
}

/// How a locked rune slot can be opened.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RuneSlotKind {
    /// Unlocked by paying currency.
    Currency,
    /// Unlocked by staking; cannot be opened from the loadout.
    Stake,
}

/// A single fixed-index rune slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuneSlot {
    pub index: usize,
    pub category: RuneCategory,
    pub kind: RuneSlotKind,
    pub locked: bool,
    pub rune: Option<RuneId>,
}

impl RuneSlot {
    /// Creates an unlocked, empty slot.
    pub const fn open(index: usize, category: RuneCategory, kind: RuneSlotKind) -> Self {
        Self {
            index,
            category,
            kind,
            locked: false,
            rune: None,
        }
    }

    /// Creates a locked, empty slot.
    pub const fn locked(index: usize, category: RuneCategory, kind: RuneSlotKind) -> Self {
        Self {
            index,
            category,
            kind,
            locked: true,
            rune: None,
        }
    }

    /// Builder: pre-assign a rune.
    #[must_use]
    pub const fn with_rune(mut self, rune: RuneId) -> Self {
        self.rune = Some(rune);
        self
    }

    pub const fn is_occupied(&self) -> bool {
        self.rune.is_some()
    }

    /// Whether a rune of `category` may be placed here.
    pub fn accepts(&self, category: RuneCategory) -> bool {
        !self.locked && self.category == category
    }

    pub fn assign(&mut self, rune: RuneId) -> Option<RuneId> {
        self.rune.replace(rune)
    }

    pub fn clear(&mut self) -> Option<RuneId> {
        self.rune.take()
    }
}
