use crate::state::{ItemCategory, ItemId, ItemRef, ItemSubtype};
use crate::stats::StatModifier;

/// Read access to the avatar's inventory.
///
/// The loadout never decides whether an item exists; it asks this oracle and
/// treats a miss as an unresolved reference.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition>;
}

/// Inventory item as far as the loadout cares.
///
/// # Design: Base + Tables
///
/// - Intrinsic stats (`stats`) travel with the item instance
/// - Set membership (`set_id`) and costume stats (`template_id`) are resolved
///   through [`super::TablesOracle`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    /// Row id in the static item sheets.
    pub template_id: u32,
    pub category: ItemCategory,
    pub subtype: ItemSubtype,
    /// Minimum avatar level to equip; items above the avatar level are "level limited".
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_level: u32,
    /// Equipment set this piece belongs to, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub set_id: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Vec<StatModifier>,
}

impl ItemDefinition {
    pub fn new(id: ItemId, template_id: u32, category: ItemCategory, subtype: ItemSubtype) -> Self {
        Self {
            id,
            template_id,
            category,
            subtype,
            required_level: 0,
            set_id: None,
            stats: Vec::new(),
        }
    }

    pub fn with_required_level(mut self, level: u32) -> Self {
        self.required_level = level;
        self
    }

    pub fn with_set(mut self, set_id: u32) -> Self {
        self.set_id = Some(set_id);
        self
    }

    pub fn with_stats(mut self, stats: Vec<StatModifier>) -> Self {
        self.stats = stats;
        self
    }

    pub fn item_ref(&self) -> ItemRef {
        ItemRef::new(self.id, self.category, self.subtype)
    }

    pub fn is_level_limited(&self, level: u32) -> bool {
        self.required_level > level
    }
}
