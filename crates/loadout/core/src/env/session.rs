use crate::state::RuneId;

/// Read access to the external per-session game state.
///
/// Replaces ambient global session state: everything the controller needs to
/// know about the avatar and the session is asked through this trait.
pub trait SessionOracle: Send + Sync {
    fn avatar(&self) -> AvatarProfile;

    /// True while the session is inside an active engagement; all loadout
    /// mutations are declined meanwhile.
    fn in_engagement(&self) -> bool;

    /// Level of an owned rune. `None` means the rune is not owned or not usable.
    fn rune_level(&self, rune: RuneId) -> Option<u32>;

    /// Spendable currency balance, in major units.
    fn gold(&self) -> u64;

    fn action_points(&self) -> u32;

    /// True while an action point refill is already in flight.
    fn is_charging_action_points(&self) -> bool;

    /// True when the inventory has equippable items the player has not viewed.
    fn has_unviewed_items(&self) -> bool;
}

/// Identity and progression of the current avatar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvatarProfile {
    pub character_id: u32,
    pub level: u32,
}

impl AvatarProfile {
    pub const fn new(character_id: u32, level: u32) -> Self {
        Self {
            character_id,
            level,
        }
    }
}
