//! Level-gated consumable sequence.

use crate::config::LoadoutConfig;
use crate::state::{ConsumableSlots, ItemId};

/// Result of a consumable equip request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsumableEquip {
    /// Appended at the end, after evicting the oldest entries if full.
    Equipped { evicted: Vec<ItemId> },
    /// No slot is open at the current level.
    NoCapacity,
    AlreadyEquipped,
}

/// Bounded FIFO of consumables whose capacity follows avatar level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsumableSlotManager {
    thresholds: [u32; LoadoutConfig::MAX_CONSUMABLE_SLOTS],
}

impl ConsumableSlotManager {
    pub const fn new(thresholds: [u32; LoadoutConfig::MAX_CONSUMABLE_SLOTS]) -> Self {
        Self { thresholds }
    }

    /// Count of slot thresholds met at `level`.
    pub fn capacity(&self, level: u32) -> usize {
        self.thresholds.iter().filter(|&&t| level >= t).count()
    }

    pub fn equip(&self, slots: &mut ConsumableSlots, id: ItemId, level: u32) -> ConsumableEquip {
        let capacity = self.capacity(level);
        if capacity == 0 {
            return ConsumableEquip::NoCapacity;
        }
        if slots.contains(id) {
            return ConsumableEquip::AlreadyEquipped;
        }

        let mut evicted = Vec::new();
        while slots.len() >= capacity {
            match slots.remove_oldest() {
                Some(oldest) => evicted.push(oldest),
                None => break,
            }
        }
        slots.push(id);

        if !evicted.is_empty() {
            tracing::debug!(item = %id, ?evicted, capacity, "consumable slots full, evicted oldest");
        }
        ConsumableEquip::Equipped { evicted }
    }

    pub fn unequip(&self, slots: &mut ConsumableSlots, id: ItemId) -> bool {
        slots.remove(id)
    }
}

impl Default for ConsumableSlotManager {
    fn default() -> Self {
        Self::new(LoadoutConfig::DEFAULT_CONSUMABLE_SLOT_LEVELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [u32; 5] = [1, 5, 12, 16, 20];

    #[test]
    fn capacity_is_a_step_function() {
        let manager = ConsumableSlotManager::new(LEVELS);
        assert_eq!(manager.capacity(0), 0);
        assert_eq!(manager.capacity(1), 1);
        assert_eq!(manager.capacity(11), 2);
        assert_eq!(manager.capacity(16), 4);
        assert_eq!(manager.capacity(300), 5);
    }

    #[test]
    fn zero_capacity_is_a_no_op() {
        let manager = ConsumableSlotManager::new(LEVELS);
        let mut slots = ConsumableSlots::new();
        assert_eq!(manager.equip(&mut slots, ItemId(1), 0), ConsumableEquip::NoCapacity);
        assert!(slots.is_empty());
    }

    #[test]
    fn sixth_consumable_evicts_oldest() {
        let manager = ConsumableSlotManager::new(LEVELS);
        let mut slots = ConsumableSlots::new();
        for id in 1..=5 {
            manager.equip(&mut slots, ItemId(id), 20);
        }

        let outcome = manager.equip(&mut slots, ItemId(6), 20);
        assert_eq!(outcome, ConsumableEquip::Equipped { evicted: vec![ItemId(1)] });
        assert_eq!(
            slots.as_slice(),
            &[ItemId(2), ItemId(3), ItemId(4), ItemId(5), ItemId(6)]
        );
    }

    #[test]
    fn duplicates_are_rejected() {
        let manager = ConsumableSlotManager::new(LEVELS);
        let mut slots = ConsumableSlots::new();
        manager.equip(&mut slots, ItemId(1), 20);
        assert_eq!(manager.equip(&mut slots, ItemId(1), 20), ConsumableEquip::AlreadyEquipped);
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn unequip_removes_by_identity() {
        let manager = ConsumableSlotManager::new(LEVELS);
        let mut slots = ConsumableSlots::new();
        manager.equip(&mut slots, ItemId(1), 20);
        manager.equip(&mut slots, ItemId(2), 20);

        assert!(manager.unequip(&mut slots, ItemId(1)));
        assert!(!manager.unequip(&mut slots, ItemId(1)));
        assert_eq!(slots.as_slice(), &[ItemId(2)]);
    }
}
