//! Tooltip submit-button parameters.
//!
//! The controller only decides what the button says, whether it can be
//! pressed and which notice explains a refusal. Rendering, localization and
//! the action-point refill itself belong to the host.

use super::{ControllerError, LoadoutController};
use crate::alloc::{ConsumableSlotManager, RuneSlotAllocator};
use crate::state::{ItemCategory, ItemRef, ItemSubtype, RuneId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SubmitLabel {
    Equip,
    Unequip,
    ChargeActionPoint,
}

/// What pressing the submit button asks the host to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SubmitAction {
    /// Call [`LoadoutController::toggle`] on the item.
    Toggle,
    /// Ask the player to confirm a refill while points remain.
    ConfirmRefill,
    /// Spend the stone right away.
    ChargeNow,
}

/// Fixed feedback texts shown instead of acting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Notice {
    EquipBlockedDuringEngagement,
    EquipFailed,
    ChargeBlockedDuringEngagement,
    ActionPointFull,
    RuneSlotCannotOpen,
}

/// Parameters of an item tooltip's submit button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TooltipParams {
    pub label: Option<SubmitLabel>,
    pub interactable: bool,
    pub submit: Option<SubmitAction>,
    /// Shown when the button is pressed while not interactable.
    pub blocked_notice: Option<Notice>,
    /// Offer a shortcut to the enhancement screen.
    pub enhancement_shortcut: bool,
}

impl TooltipParams {
    /// No submit button at all.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl LoadoutController<'_> {
    /// Builds tooltip parameters for `item`.
    ///
    /// Selecting an unequipped rune whose candidate slots are all occupied
    /// enters the rune slot pick.
    ///
    /// # Errors
    ///
    /// `Oracle` when an oracle is missing.
    pub fn tooltip(&mut self, item: ItemRef) -> Result<TooltipParams, ControllerError> {
        let session = self.env.session()?;
        let engaged = session.in_engagement();

        let params = match item.category {
            ItemCategory::Equipment | ItemCategory::Costume | ItemCategory::Consumable => {
                let level = session.avatar().level;
                let equipped = self.is_equipped(item);
                let usable = self
                    .env
                    .items()?
                    .definition(item.id)
                    .is_some_and(|definition| !definition.is_level_limited(level));

                let mut interactable = !engaged && (usable || equipped);
                if item.category == ItemCategory::Consumable {
                    let capacity = ConsumableSlotManager::new(
                        self.env.config()?.consumable_slot_levels(),
                    )
                    .capacity(level);
                    interactable &= !self.view.avatar_info && capacity > 0;
                }

                TooltipParams {
                    label: Some(toggle_label(equipped)),
                    interactable,
                    submit: Some(SubmitAction::Toggle),
                    blocked_notice: Some(equip_notice(engaged)),
                    enhancement_shortcut: item.category == ItemCategory::Equipment,
                }
            }
            ItemCategory::Rune => {
                let Some(rune) = item.rune_id() else {
                    return Ok(TooltipParams::empty());
                };
                let equipped = self.is_equipped(item);
                let owned = session.rune_level(rune).is_some();
                if owned && !equipped && !engaged {
                    self.offer_rune_pick(rune)?;
                }

                TooltipParams {
                    label: Some(toggle_label(equipped)),
                    interactable: !engaged && owned,
                    submit: Some(SubmitAction::Toggle),
                    blocked_notice: Some(equip_notice(engaged)),
                    enhancement_shortcut: false,
                }
            }
            ItemCategory::Material if item.subtype == ItemSubtype::ApStone => {
                let points = session.action_points();
                let max = self.env.config()?.action_point_max();
                TooltipParams {
                    label: Some(SubmitLabel::ChargeActionPoint),
                    interactable: !session.is_charging_action_points() && points < max && !engaged,
                    submit: Some(if points > 0 {
                        SubmitAction::ConfirmRefill
                    } else {
                        SubmitAction::ChargeNow
                    }),
                    blocked_notice: Some(if engaged {
                        Notice::ChargeBlockedDuringEngagement
                    } else {
                        Notice::ActionPointFull
                    }),
                    enhancement_shortcut: false,
                }
            }
            ItemCategory::Material => TooltipParams::empty(),
        };
        Ok(params)
    }

    /// Enters the rune slot pick when `rune` has several occupied candidates
    /// and no free one.
    fn offer_rune_pick(&mut self, rune: RuneId) -> Result<(), ControllerError> {
        let Some(row) = self.env.tables()?.rune(rune) else {
            return Ok(());
        };
        let slots = &self.slots.mode(self.mode).rune_slots;
        let candidates = RuneSlotAllocator::candidates(slots, row.category);
        let all_occupied = slots
            .iter()
            .filter(|slot| candidates.contains(&slot.index))
            .all(|slot| slot.is_occupied());

        if candidates.len() > 1 && all_occupied {
            self.request_rune_pick(rune, row.category, candidates);
        }
        Ok(())
    }
}

fn toggle_label(equipped: bool) -> SubmitLabel {
    if equipped {
        SubmitLabel::Unequip
    } else {
        SubmitLabel::Equip
    }
}

fn equip_notice(engaged: bool) -> Notice {
    if engaged {
        Notice::EquipBlockedDuringEngagement
    } else {
        Notice::EquipFailed
    }
}
