//! Persisted per-mode slot state.
//!
//! This is the small record an external session container owns and lends to
//! the controller: equipment ids, costume ids and the rune slot array, one per
//! [`Mode`]. Consumables are session-only and live in
//! [`ConsumableSlots`](super::ConsumableSlots) instead.

use strum::EnumCount;

use super::{ItemId, Mode, RuneId, RuneSlot};

/// Insertion-ordered set of item ids.
///
/// Order is the equip order; it is the "stable slot order" used to break
/// ties deterministically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipSet {
    ids: Vec<ItemId>,
}

impl EquipSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `id` at the end. Returns false if it was already present.
    pub fn insert(&mut self, id: ItemId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Removes `id`, preserving the order of the rest. Returns false if absent.
    pub fn remove(&mut self, id: ItemId) -> bool {
        match self.ids.iter().position(|&other| other == id) {
            Some(position) => {
                self.ids.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn as_slice(&self) -> &[ItemId] {
        &self.ids
    }
}

impl FromIterator<ItemId> for EquipSet {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        let mut set = EquipSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Slot state for a single mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeSlotState {
    pub equipment: EquipSet,
    pub costumes: EquipSet,
    pub rune_slots: Vec<RuneSlot>,
}

impl ModeSlotState {
    /// Creates empty collections with the given rune slot layout.
    pub fn with_rune_layout(rune_slots: Vec<RuneSlot>) -> Self {
        Self {
            equipment: EquipSet::new(),
            costumes: EquipSet::new(),
            rune_slots,
        }
    }

    /// Rune ids currently assigned, in slot order.
    pub fn equipped_runes(&self) -> impl Iterator<Item = RuneId> + '_ {
        self.rune_slots.iter().filter_map(|slot| slot.rune)
    }

    pub fn rune_slot(&self, index: usize) -> Option<&RuneSlot> {
        self.rune_slots.iter().find(|slot| slot.index == index)
    }

    pub fn is_rune_equipped(&self, rune: RuneId) -> bool {
        self.rune_slots.iter().any(|slot| slot.rune == Some(rune))
    }
}

/// Slot state for every mode, created once per session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotStates {
    modes: [ModeSlotState; Mode::COUNT],
}

impl SlotStates {
    /// Creates state for all modes sharing one rune slot layout.
    pub fn new(rune_layout: Vec<RuneSlot>) -> Self {
        Self {
            modes: std::array::from_fn(|_| ModeSlotState::with_rune_layout(rune_layout.clone())),
        }
    }

    pub fn mode(&self, mode: Mode) -> &ModeSlotState {
        &self.modes[mode as usize]
    }

    pub fn mode_mut(&mut self, mode: Mode) -> &mut ModeSlotState {
        &mut self.modes[mode as usize]
    }

    /// Encodes all modes into a compact binary record.
    #[cfg(feature = "serde")]
    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decodes a record produced by [`SlotStates::encode`].
    #[cfg(feature = "serde")]
    pub fn decode(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{RuneCategory, RuneSlotKind};

    #[test]
    fn equip_set_keeps_insertion_order_and_uniqueness() {
        let mut set = EquipSet::new();
        assert!(set.insert(ItemId(3)));
        assert!(set.insert(ItemId(1)));
        assert!(!set.insert(ItemId(3)));
        assert_eq!(set.as_slice(), &[ItemId(3), ItemId(1)]);

        assert!(set.remove(ItemId(3)));
        assert!(!set.remove(ItemId(3)));
        assert_eq!(set.as_slice(), &[ItemId(1)]);
    }

    #[test]
    fn modes_are_independent() {
        let layout = vec![RuneSlot::open(0, RuneCategory::Stat, RuneSlotKind::Currency)];
        let mut states = SlotStates::new(layout);
        states.mode_mut(Mode::Arena).equipment.insert(ItemId(9));

        assert!(states.mode(Mode::Arena).equipment.contains(ItemId(9)));
        assert!(states.mode(Mode::Adventure).equipment.is_empty());
        assert_eq!(states.mode(Mode::Raid).rune_slots.len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn slot_states_survive_binary_encoding() {
        let layout = vec![
            RuneSlot::open(0, RuneCategory::Stat, RuneSlotKind::Currency).with_rune(RuneId(1)),
            RuneSlot::locked(1, RuneCategory::Skill, RuneSlotKind::Stake),
        ];
        let mut states = SlotStates::new(layout);
        states.mode_mut(Mode::Raid).costumes.insert(ItemId(42));

        let bytes = states.encode().unwrap();
        assert_eq!(SlotStates::decode(&bytes).unwrap(), states);
    }
}
