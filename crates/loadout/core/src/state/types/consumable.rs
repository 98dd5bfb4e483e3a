//! Session-only consumable sequence.

use arrayvec::ArrayVec;

use crate::config::LoadoutConfig;
use crate::state::types::ItemId;

/// Ordered consumable ids, oldest first.
///
/// Bounded by the largest capacity any level can reach; the level-derived
/// capacity is enforced by [`crate::alloc::ConsumableSlotManager`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ConsumableSlots {
    items: ArrayVec<ItemId, { LoadoutConfig::MAX_CONSUMABLE_SLOTS }>,
}

impl ConsumableSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[ItemId] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn push(&mut self, id: ItemId) -> bool {
        self.items.try_push(id).is_ok()
    }

    pub(crate) fn remove_oldest(&mut self) -> Option<ItemId> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    pub(crate) fn remove(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|&other| other == id) {
            Some(position) => {
                self.items.remove(position);
                true
            }
            None => false,
        }
    }
}
