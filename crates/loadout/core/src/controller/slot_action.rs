//! Rune slot clicks.

use super::{
    ControllerError, DeclineReason, LoadoutController, LoadoutOutcome, LoadoutStatus, Notice,
};
use crate::state::{ItemCategory, ItemRef, RuneCategory, RuneId, RuneSlotKind};

/// What the host should do after a rune slot click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuneSlotAction {
    /// Nothing to do: locked during an engagement, or no such slot.
    Blocked,
    /// Offer to open the slot for `cost`. When not `affordable` the prompt
    /// leads to the market instead.
    UnlockPrompt {
        index: usize,
        cost: u64,
        affordable: bool,
    },
    Notice(Notice),
    /// The held rune replaced `evicted` in slot `index`.
    Swapped { index: usize, evicted: RuneId },
    /// Show the tooltip of the rune in the slot.
    ShowRune(RuneId),
    /// Open the inventory on runes of this category.
    FocusInventory(RuneCategory),
}

impl LoadoutController<'_> {
    /// Handles a single click on the rune slot at `index`.
    ///
    /// # Errors
    ///
    /// `Oracle` when an oracle is missing.
    pub fn rune_slot_clicked(&mut self, index: usize) -> Result<RuneSlotAction, ControllerError> {
        let Some(slot) = self.slots.mode(self.mode).rune_slot(index).copied() else {
            tracing::debug!(index, "unknown rune slot clicked");
            return Ok(RuneSlotAction::Blocked);
        };
        let session = self.env.session()?;

        if slot.locked {
            if session.in_engagement() {
                return Ok(RuneSlotAction::Blocked);
            }
            return Ok(match slot.kind {
                RuneSlotKind::Currency => {
                    let config = self.env.config()?;
                    let cost = match slot.category {
                        RuneCategory::Stat => config.rune_stat_slot_unlock_cost(),
                        RuneCategory::Skill => config.rune_skill_slot_unlock_cost(),
                    };
                    RuneSlotAction::UnlockPrompt {
                        index,
                        cost,
                        affordable: session.gold() >= cost,
                    }
                }
                RuneSlotKind::Stake => RuneSlotAction::Notice(Notice::RuneSlotCannotOpen),
            });
        }

        match slot.rune {
            Some(current) => {
                let picking = self
                    .phase
                    .pending_pick()
                    .is_some_and(|pick| pick.is_candidate(index));
                if !picking {
                    return Ok(RuneSlotAction::ShowRune(current));
                }
                let outcome = self.pick_rune_slot(index)?;
                Ok(match outcome.status {
                    LoadoutStatus::Applied { .. } => RuneSlotAction::Swapped {
                        index,
                        evicted: current,
                    },
                    _ => RuneSlotAction::Blocked,
                })
            }
            None => {
                self.select_tab(ItemCategory::Rune);
                Ok(RuneSlotAction::FocusInventory(slot.category))
            }
        }
    }

    /// Handles a double click: unequips the slot's rune.
    ///
    /// # Errors
    ///
    /// `Oracle` when an oracle is missing.
    pub fn rune_slot_double_clicked(
        &mut self,
        index: usize,
    ) -> Result<LoadoutOutcome, ControllerError> {
        let rune = self
            .slots
            .mode(self.mode)
            .rune_slot(index)
            .and_then(|slot| slot.rune);
        match rune {
            Some(rune) => self.unequip(ItemRef::rune(rune)),
            None => {
                let previous = self.last.map(|last| last.power).unwrap_or(0);
                Ok(LoadoutOutcome::declined(
                    DeclineReason::NotEquipped,
                    previous,
                ))
            }
        }
    }
}
