//! Rune slot assignment.
//!
//! Runes go into the first free unlocked slot of their category. With no free
//! slot the single occupied candidate is swapped out; with several occupied
//! candidates nothing changes and the caller has to pick a slot explicitly.

use crate::state::{RuneCategory, RuneId, RuneSlot};

/// Result of a rune assignment attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuneEquipOutcome {
    Assigned { index: usize },
    Swapped { index: usize, evicted: RuneId },
    /// Several occupied candidates; slots untouched.
    Ambiguous { candidates: Vec<usize> },
    /// No unlocked slot of the rune's category.
    NoCandidate,
    AlreadyEquipped { index: usize },
}

impl RuneEquipOutcome {
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Assigned { .. } | Self::Swapped { .. })
    }
}

/// Type-restricted, lock-aware rune slot assignment.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuneSlotAllocator;

impl RuneSlotAllocator {
    /// Indices of unlocked slots accepting `category`, in slot index order.
    pub fn candidates(slots: &[RuneSlot], category: RuneCategory) -> Vec<usize> {
        let mut indices: Vec<usize> = slots
            .iter()
            .filter(|slot| slot.accepts(category))
            .map(|slot| slot.index)
            .collect();
        indices.sort_unstable();
        indices
    }

    pub fn equip(slots: &mut [RuneSlot], rune: RuneId, category: RuneCategory) -> RuneEquipOutcome {
        if let Some(slot) = slots.iter().find(|slot| slot.rune == Some(rune)) {
            return RuneEquipOutcome::AlreadyEquipped { index: slot.index };
        }

        let candidates = Self::candidates(slots, category);
        let free = candidates
            .iter()
            .copied()
            .find(|&index| slot_at(slots, index).is_some_and(|slot| !slot.is_occupied()));

        if let Some(index) = free {
            if let Some(slot) = slot_at_mut(slots, index) {
                slot.assign(rune);
            }
            tracing::debug!(%rune, index, "rune assigned to free slot");
            return RuneEquipOutcome::Assigned { index };
        }

        match candidates.len() {
            0 => RuneEquipOutcome::NoCandidate,
            1 => Self::assign_to(slots, candidates[0], rune, category),
            _ => {
                tracing::debug!(%rune, ?candidates, "rune slots all occupied, awaiting pick");
                RuneEquipOutcome::Ambiguous { candidates }
            }
        }
    }

    /// Assigns `rune` to the slot at `index`, evicting its occupant.
    ///
    /// Locked slots, category mismatches and runes already placed elsewhere
    /// yield [`RuneEquipOutcome::NoCandidate`] without mutation.
    pub fn assign_to(
        slots: &mut [RuneSlot],
        index: usize,
        rune: RuneId,
        category: RuneCategory,
    ) -> RuneEquipOutcome {
        if slots
            .iter()
            .any(|slot| slot.index != index && slot.rune == Some(rune))
        {
            return RuneEquipOutcome::NoCandidate;
        }
        let Some(slot) = slot_at_mut(slots, index) else {
            return RuneEquipOutcome::NoCandidate;
        };
        if !slot.accepts(category) {
            return RuneEquipOutcome::NoCandidate;
        }

        match slot.assign(rune) {
            Some(evicted) if evicted != rune => {
                tracing::debug!(%rune, %evicted, index, "rune swapped");
                RuneEquipOutcome::Swapped { index, evicted }
            }
            Some(_) => RuneEquipOutcome::AlreadyEquipped { index },
            None => RuneEquipOutcome::Assigned { index },
        }
    }

    /// Clears the slot holding `rune`. Returns its index.
    pub fn unequip(slots: &mut [RuneSlot], rune: RuneId) -> Option<usize> {
        let slot = slots.iter_mut().find(|slot| slot.rune == Some(rune))?;
        slot.clear();
        Some(slot.index)
    }
}

fn slot_at(slots: &[RuneSlot], index: usize) -> Option<&RuneSlot> {
    slots.iter().find(|slot| slot.index == index)
}

fn slot_at_mut(slots: &mut [RuneSlot], index: usize) -> Option<&mut RuneSlot> {
    slots.iter_mut().find(|slot| slot.index == index)
}
