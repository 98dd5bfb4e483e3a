//! Equipment and costume slot replacement.
//!
//! Every subtype owns one slot except `Ring`, which owns
//! [`LoadoutConfig::RING_SLOT_CAPACITY`] slots with the second one gated by
//! avatar level. Equipping into a full subtype evicts occupants first.

use crate::config::LoadoutConfig;
use crate::state::{EquipSet, ItemId, ItemRef, ItemSubtype};

/// Per-subtype replacement policy for equipment and costume collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipmentSlotAllocator {
    ring_slot2_level: u32,
}

impl EquipmentSlotAllocator {
    pub const fn new(ring_slot2_level: u32) -> Self {
        Self { ring_slot2_level }
    }

    /// Number of usable slots for `subtype` at `level`.
    pub fn capacity(&self, subtype: ItemSubtype, level: u32) -> usize {
        if !subtype.is_multi_slot() {
            1
        } else if level >= self.ring_slot2_level {
            LoadoutConfig::RING_SLOT_CAPACITY
        } else {
            1
        }
    }

    /// Equips `item` into `set`, evicting occupants of the same subtype.
    ///
    /// `equipped` holds the resolved members of `set`; ids that could not be
    /// resolved are simply never counted as occupants. Single-slot subtypes
    /// lose every occupant. A lone ring is evicted only below the second ring
    /// slot's level; with both ring slots filled exactly one ring goes, whatever
    /// the level: the lowest `power`, ties going to the earliest equipped.
    ///
    /// Returns the evicted ids in eviction order. Equipping an id already in
    /// the set is a no-op.
    pub fn equip<F>(
        &self,
        set: &mut EquipSet,
        equipped: &[ItemRef],
        item: ItemRef,
        level: u32,
        power: F,
    ) -> Vec<ItemId>
    where
        F: Fn(ItemId) -> u64,
    {
        if set.contains(item.id) {
            return Vec::new();
        }

        let mut occupants: Vec<ItemId> = equipped
            .iter()
            .filter(|other| other.subtype == item.subtype && set.contains(other.id))
            .map(|other| other.id)
            .collect();

        let full_rings = item.subtype.is_multi_slot()
            && occupants.len() >= LoadoutConfig::RING_SLOT_CAPACITY;
        let capacity = if full_rings {
            LoadoutConfig::RING_SLOT_CAPACITY
        } else {
            self.capacity(item.subtype, level)
        };
        let mut evicted = Vec::new();
        while occupants.len() >= capacity {
            let victim = if item.subtype.is_multi_slot() {
                // min_by_key keeps the first of equal minima
                occupants
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, id)| power(**id))
                    .map(|(position, _)| position)
            } else {
                Some(0)
            };
            let Some(position) = victim else { break };
            let id = occupants.remove(position);
            set.remove(id);
            evicted.push(id);
        }

        set.insert(item.id);
        if !evicted.is_empty() {
            tracing::debug!(item = %item.id, subtype = %item.subtype, ?evicted, "evicted occupants");
        }
        evicted
    }

    /// Removes `id` from `set`. Returns false if it was not equipped.
    pub fn unequip(&self, set: &mut EquipSet, id: ItemId) -> bool {
        set.remove(id)
    }
}

impl Default for EquipmentSlotAllocator {
    fn default() -> Self {
        Self::new(LoadoutConfig::DEFAULT_RING_SLOT2_LEVEL)
    }
}
