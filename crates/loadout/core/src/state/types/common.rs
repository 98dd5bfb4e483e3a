use std::fmt;

/// Opaque identifier of an inventory item.
///
/// The loadout never owns item data; it only references items by id into the
/// external inventory (see [`crate::env::ItemOracle`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Identifier of a rune row in the rune tables.
///
/// Runes are owned per rune id (one state per id, carrying a level), so the
/// rune id doubles as the inventory reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuneId(pub u32);

impl fmt::Display for RuneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rune#{}", self.0)
    }
}

impl From<RuneId> for ItemId {
    fn from(rune: RuneId) -> Self {
        ItemId(u64::from(rune.0))
    }
}

/// Battle context partitioning all loadout state.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Mode {
    #[default]
    Adventure,
    Arena,
    Raid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn mode_names_round_trip_through_strum() {
        assert_eq!(Mode::Raid.to_string(), "raid");
        assert_eq!(Mode::from_str("ARENA").unwrap(), Mode::Arena);
        assert_eq!(Mode::iter().count(), Mode::COUNT);
    }

    #[test]
    fn rune_id_widens_into_item_id() {
        assert_eq!(ItemId::from(RuneId(30001)), ItemId(30001));
    }
}
