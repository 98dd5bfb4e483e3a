//! Event payloads published by the controller and consumed from the host.

use crate::state::{Mode, RuneId};
use crate::stats::{CharacterStats, CpTransition};

/// Notifications published to loadout observers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadoutEvent {
    /// Fresh stats after a mutation or refresh.
    StatsRecalculated {
        mode: Mode,
        stats: CharacterStats,
        power: CpTransition,
    },

    /// "Has unviewed equippable items" indicator.
    BadgeChanged(bool),

    /// The player has to choose which of `candidates` receives `rune`.
    RuneSlotPickRequested {
        mode: Mode,
        rune: RuneId,
        candidates: Vec<usize>,
    },

    /// The pending pick finished; `index` is `None` when it was cancelled.
    RuneSlotPickResolved {
        mode: Mode,
        rune: RuneId,
        index: Option<usize>,
    },
}

/// Changes pushed by the host that require a refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExternalChange {
    /// Owned rune levels or ownership changed.
    RuneStateChanged,
    /// Number of unlocked rune slots changed.
    RuneSlotUnlockCountChanged(u32),
}
