//! Loadout state representation.
//!
//! This module owns the data structures describing what is equipped per mode:
//! persisted slot state (equipment, costumes, rune slots) and the session-only
//! consumable sequence. Hosts own these values; the controller mutates them
//! exclusively through the allocators.
pub mod types;

pub use types::{
    ConsumableSlots, EquipSet, ItemCategory, ItemId, ItemRef, ItemSubtype, Mode, ModeSlotState,
    RuneCategory, RuneId, RuneSlot, RuneSlotKind, SlotStates,
};
