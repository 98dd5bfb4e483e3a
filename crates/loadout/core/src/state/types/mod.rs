mod common;
mod consumable;
mod item;
mod rune;
mod slots;

pub use common::{ItemId, Mode, RuneId};
pub use consumable::ConsumableSlots;
pub use item::{ItemCategory, ItemRef, ItemSubtype};
pub use rune::{RuneCategory, RuneSlot, RuneSlotKind};
pub use slots::{EquipSet, ModeSlotState, SlotStates};
