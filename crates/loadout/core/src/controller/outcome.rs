//! Mutation results returned to the UI layer.

use crate::state::ItemId;
use crate::stats::CpTransition;

/// Why a mutation silently declined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DeclineReason {
    /// The session is inside an active engagement.
    InEngagement,
    /// The item is not in the inventory.
    Unresolved,
    LevelLimited,
    AlreadyEquipped,
    NotEquipped,
    /// Consumables cannot be changed in the avatar-info view.
    AvatarInfoView,
    NoConsumableSlot,
    RuneNotOwned,
    RuneRowMissing,
    /// No unlocked slot of the rune's category.
    NoRuneSlot,
    /// No rune slot pick is pending, or the slot is not a candidate.
    NoPendingPick,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadoutStatus {
    /// State changed; `evicted` lists displaced items in eviction order.
    Applied { evicted: Vec<ItemId> },
    /// Nothing changed; the player has to pick one of these rune slots.
    AwaitingRuneSlotPick { candidates: Vec<usize> },
    Declined(DeclineReason),
}

/// Result of `equip`, `unequip` and `toggle`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadoutOutcome {
    pub status: LoadoutStatus,
    /// CP before and after the request. Unchanged unless applied.
    pub power: CpTransition,
}

impl LoadoutOutcome {
    pub fn declined(reason: DeclineReason, power: u64) -> Self {
        Self {
            status: LoadoutStatus::Declined(reason),
            power: CpTransition::unchanged(power),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self.status, LoadoutStatus::Applied { .. })
    }

    pub fn decline_reason(&self) -> Option<DeclineReason> {
        match self.status {
            LoadoutStatus::Declined(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn evicted(&self) -> &[ItemId] {
        match &self.status {
            LoadoutStatus::Applied { evicted } => evicted,
            _ => &[],
        }
    }
}
