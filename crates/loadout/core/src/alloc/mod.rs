//! Slot allocators.
//!
//! Each allocator owns the replacement rule of one collection and mutates it
//! in place. None of them raises: a request that cannot be honoured leaves the
//! collection untouched and reports why.
mod consumable;
mod equipment;
mod rune;

pub use consumable::{ConsumableEquip, ConsumableSlotManager};
pub use equipment::EquipmentSlotAllocator;
pub use rune::{RuneEquipOutcome, RuneSlotAllocator};
