//! Item references as seen by the loadout.
//!
//! An [`ItemRef`] is the tagged reference the controller dispatches on: the
//! category picks the allocator, the subtype picks the replacement rule.

use super::{ItemId, RuneId};

/// Top-level item category; the discriminant routed by the controller.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Equipment,
    Costume,
    Consumable,
    Rune,
    Material,
}

/// Item subtype; decides which slot an item competes for.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemSubtype {
    // Equipment
    Weapon,
    Armor,
    Belt,
    Necklace,
    Ring,
    Aura,
    Grimoire,

    // Costumes
    FullCostume,
    HairCostume,
    EarCostume,
    EyeCostume,
    TailCostume,
    Title,

    // Consumables
    Food,

    // Materials
    ApStone,
    Hourglass,
    Crystal,
    EquipmentMaterial,

    /// Runes carry no finer subtype; their slot category comes from the tables.
    Rune,
}

impl ItemSubtype {
    /// Whether more than one item of this subtype may be equipped at once.
    pub const fn is_multi_slot(self) -> bool {
        matches!(self, ItemSubtype::Ring)
    }
}

/// Reference to an inventory item plus its category and subtype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRef {
    pub id: ItemId,
    pub category: ItemCategory,
    pub subtype: ItemSubtype,
}

impl ItemRef {
    pub const fn new(id: ItemId, category: ItemCategory, subtype: ItemSubtype) -> Self {
        Self {
            id,
            category,
            subtype,
        }
    }

    pub const fn equipment(id: ItemId, subtype: ItemSubtype) -> Self {
        Self::new(id, ItemCategory::Equipment, subtype)
    }

    pub const fn costume(id: ItemId, subtype: ItemSubtype) -> Self {
        Self::new(id, ItemCategory::Costume, subtype)
    }

    pub const fn consumable(id: ItemId) -> Self {
        Self::new(id, ItemCategory::Consumable, ItemSubtype::Food)
    }

    pub const fn material(id: ItemId, subtype: ItemSubtype) -> Self {
        Self::new(id, ItemCategory::Material, subtype)
    }

    pub fn rune(rune: RuneId) -> Self {
        Self::new(rune.into(), ItemCategory::Rune, ItemSubtype::Rune)
    }

    /// Returns the rune id when this reference points at a rune.
    pub fn rune_id(&self) -> Option<RuneId> {
        match self.category {
            ItemCategory::Rune => u32::try_from(self.id.0).ok().map(RuneId),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rune_reference_round_trips_its_id() {
        let item = ItemRef::rune(RuneId(10001));
        assert_eq!(item.category, ItemCategory::Rune);
        assert_eq!(item.rune_id(), Some(RuneId(10001)));
    }

    #[test]
    fn non_rune_reference_has_no_rune_id() {
        let item = ItemRef::equipment(ItemId(7), ItemSubtype::Ring);
        assert_eq!(item.rune_id(), None);
        assert!(item.subtype.is_multi_slot());
        assert!(!ItemSubtype::Weapon.is_multi_slot());
    }
}
