//! Configuration oracle for exposing loadout configuration to the controller.

use crate::config::LoadoutConfig;

/// Provides access to runtime configuration values.
pub trait ConfigOracle: Send + Sync {
    /// Avatar level at which the second ring slot opens.
    fn ring_slot2_level(&self) -> u32;

    /// Level thresholds opening each consumable slot.
    fn consumable_slot_levels(&self) -> [u32; LoadoutConfig::MAX_CONSUMABLE_SLOTS];

    fn rune_stat_slot_unlock_cost(&self) -> u64;

    fn rune_skill_slot_unlock_cost(&self) -> u64;

    fn action_point_max(&self) -> u32;
}

impl ConfigOracle for LoadoutConfig {
    fn ring_slot2_level(&self) -> u32 {
        self.ring_slot2_level
    }

    fn consumable_slot_levels(&self) -> [u32; LoadoutConfig::MAX_CONSUMABLE_SLOTS] {
        self.consumable_slot_levels
    }

    fn rune_stat_slot_unlock_cost(&self) -> u64 {
        self.rune_stat_slot_unlock_cost
    }

    fn rune_skill_slot_unlock_cost(&self) -> u64 {
        self.rune_skill_slot_unlock_cost
    }

    fn action_point_max(&self) -> u32 {
        self.action_point_max
    }
}
