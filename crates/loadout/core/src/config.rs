/// Loadout configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadoutConfig {
    /// Avatar level at which the second ring slot opens.
    pub ring_slot2_level: u32,

    /// Level thresholds opening consumable slots 1 through 5.
    /// Capacity is the number of thresholds at or below the avatar level.
    pub consumable_slot_levels: [u32; LoadoutConfig::MAX_CONSUMABLE_SLOTS],

    /// Currency cost of opening a locked stat rune slot.
    pub rune_stat_slot_unlock_cost: u64,

    /// Currency cost of opening a locked skill rune slot.
    pub rune_skill_slot_unlock_cost: u64,

    /// Maximum action points; charging is pointless at this value.
    pub action_point_max: u32,

    /// Per-stat weights used by the default combat power formula.
    pub power: PowerWeights,
}

impl LoadoutConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_CONSUMABLE_SLOTS: usize = 5;
    pub const RING_SLOT_CAPACITY: usize = 2;
    /// Scheduler ticks to wait before the first view refresh after initialization.
    pub const REFRESH_DEFERRAL_TICKS: u8 = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RING_SLOT2_LEVEL: u32 = 46;
    pub const DEFAULT_CONSUMABLE_SLOT_LEVELS: [u32; Self::MAX_CONSUMABLE_SLOTS] =
        [1, 1, 12, 16, 20];
    pub const DEFAULT_RUNE_STAT_SLOT_UNLOCK_COST: u64 = 100;
    pub const DEFAULT_RUNE_SKILL_SLOT_UNLOCK_COST: u64 = 1000;
    pub const DEFAULT_ACTION_POINT_MAX: u32 = 120;

    pub fn new() -> Self {
        Self {
            ring_slot2_level: Self::DEFAULT_RING_SLOT2_LEVEL,
            consumable_slot_levels: Self::DEFAULT_CONSUMABLE_SLOT_LEVELS,
            rune_stat_slot_unlock_cost: Self::DEFAULT_RUNE_STAT_SLOT_UNLOCK_COST,
            rune_skill_slot_unlock_cost: Self::DEFAULT_RUNE_SKILL_SLOT_UNLOCK_COST,
            action_point_max: Self::DEFAULT_ACTION_POINT_MAX,
            power: PowerWeights::default(),
        }
    }

    pub fn with_ring_slot2_level(mut self, level: u32) -> Self {
        self.ring_slot2_level = level;
        self
    }

    pub fn with_consumable_slot_levels(
        mut self,
        levels: [u32; Self::MAX_CONSUMABLE_SLOTS],
    ) -> Self {
        self.consumable_slot_levels = levels;
        self
    }
}

impl Default for LoadoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Weights of the default combat power formula, in hundredths per stat point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PowerWeights {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub cri: u32,
    pub hit: u32,
    pub spd: u32,
    /// Flat CP added per avatar level.
    pub per_level: u32,
}

impl Default for PowerWeights {
    fn default() -> Self {
        Self {
            hp: 70,
            atk: 1050,
            def: 1050,
            cri: 500,
            hit: 230,
            spd: 300,
            per_level: 0,
        }
    }
}
