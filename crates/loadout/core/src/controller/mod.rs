//! Loadout orchestration.
//!
//! The [`LoadoutController`] is the only writer of [`SlotStates`] and the
//! session consumables. Every request goes through the same pipeline:
//! guard → allocate → recalculate → publish.
//!
//! Guards never raise. A request that cannot be honoured returns a
//! [`LoadoutStatus::Declined`] and leaves state untouched; only caller bugs
//! (an unsupported category, a missing oracle) surface as
//! [`ControllerError`].

mod errors;
mod lifecycle;
mod outcome;
mod phase;
mod slot_action;
mod tooltip;

use std::collections::HashMap;

use strum::EnumCount;
use tokio::sync::broadcast;

pub use errors::{ControllerError, LoadoutOperation};
pub use lifecycle::ViewOptions;
pub use outcome::{DeclineReason, LoadoutOutcome, LoadoutStatus};
pub use phase::{LoadoutPhase, PendingRunePick};
pub use slot_action::RuneSlotAction;
pub use tooltip::{Notice, SubmitAction, SubmitLabel, TooltipParams};

use crate::alloc::{
    ConsumableEquip, ConsumableSlotManager, EquipmentSlotAllocator, RuneEquipOutcome,
    RuneSlotAllocator,
};
use crate::env::{ItemDefinition, LoadoutEnv, OracleError};
use crate::events::{ChangeFeed, EventBus, ExternalChange, LoadoutEvent};
use crate::state::{
    ConsumableSlots, ItemCategory, ItemId, ItemRef, Mode, RuneCategory, RuneId, SlotStates,
};
use crate::stats::{CpTransition, RecalcInput, Recalculation, StatRecalculator};

/// Orchestrates allocators, the recalculator and observers for one avatar.
pub struct LoadoutController<'a> {
    env: LoadoutEnv<'a>,
    slots: &'a mut SlotStates,
    consumables: [ConsumableSlots; Mode::COUNT],
    mode: Mode,
    view: ViewOptions,
    phase: LoadoutPhase,
    active_tab: ItemCategory,
    pending_refresh: Option<u8>,
    feed: Option<ChangeFeed>,
    changes: Option<broadcast::Receiver<ExternalChange>>,
    bus: EventBus,
    last: Option<Recalculation>,
}

impl<'a> LoadoutController<'a> {
    /// Creates a controller over externally owned slot state.
    pub fn new(env: LoadoutEnv<'a>, slots: &'a mut SlotStates) -> Self {
        Self {
            env,
            slots,
            consumables: Default::default(),
            mode: Mode::default(),
            view: ViewOptions::default(),
            phase: LoadoutPhase::Idle,
            active_tab: ItemCategory::Equipment,
            pending_refresh: None,
            feed: None,
            changes: None,
            bus: EventBus::new(),
            last: None,
        }
    }

    /// Builder: publish through an existing bus.
    #[must_use]
    pub fn with_bus(mut self, bus: EventBus) -> Self {
        self.bus = bus;
        self
    }

    /// Builder: listen to host changes while initialized.
    #[must_use]
    pub fn with_change_feed(mut self, feed: ChangeFeed) -> Self {
        self.feed = Some(feed);
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> &LoadoutPhase {
        &self.phase
    }

    pub fn view(&self) -> ViewOptions {
        self.view
    }

    pub fn active_tab(&self) -> ItemCategory {
        self.active_tab
    }

    pub fn slots(&self) -> &SlotStates {
        self.slots
    }

    pub fn consumables(&self, mode: Mode) -> &ConsumableSlots {
        &self.consumables[mode as usize]
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Stats and CP from the latest successful recalculation.
    pub fn last_recalculation(&self) -> Option<&Recalculation> {
        self.last.as_ref()
    }

    /// Whether `item` is equipped in the current mode.
    pub fn is_equipped(&self, item: ItemRef) -> bool {
        let state = self.slots.mode(self.mode);
        match item.category {
            ItemCategory::Equipment => state.equipment.contains(item.id),
            ItemCategory::Costume => state.costumes.contains(item.id),
            ItemCategory::Consumable => self.consumables(self.mode).contains(item.id),
            ItemCategory::Rune => item.rune_id().is_some_and(|rune| state.is_rune_equipped(rune)),
            ItemCategory::Material => false,
        }
    }

    // ===== mutations =====

    /// Equips `item` in the current mode.
    ///
    /// # Errors
    ///
    /// `UnsupportedCategory` for materials; `Oracle` when an oracle is missing.
    pub fn equip(&mut self, item: ItemRef) -> Result<LoadoutOutcome, ControllerError> {
        if item.category == ItemCategory::Material {
            return Err(ControllerError::unsupported(item.category, LoadoutOperation::Equip));
        }

        let previous = self.previous_power()?;
        if self.env.session()?.in_engagement() {
            return Ok(self.decline(item, DeclineReason::InEngagement, previous));
        }

        let status = match item.category {
            ItemCategory::Equipment | ItemCategory::Costume => self.equip_item(item)?,
            ItemCategory::Consumable => self.equip_consumable(item)?,
            ItemCategory::Rune => self.equip_rune(item)?,
            ItemCategory::Material => {
                return Err(ControllerError::unsupported(item.category, LoadoutOperation::Equip));
            }
        };
        self.finish(item, status, previous)
    }

    /// Unequips `item` from the current mode.
    ///
    /// # Errors
    ///
    /// `UnsupportedCategory` for materials; `Oracle` when an oracle is missing.
    pub fn unequip(&mut self, item: ItemRef) -> Result<LoadoutOutcome, ControllerError> {
        if item.category == ItemCategory::Material {
            return Err(ControllerError::unsupported(item.category, LoadoutOperation::Unequip));
        }

        let previous = self.previous_power()?;
        if self.env.session()?.in_engagement() {
            return Ok(self.decline(item, DeclineReason::InEngagement, previous));
        }

        let mode = self.mode;
        let removed = match item.category {
            ItemCategory::Equipment => {
                EquipmentSlotAllocator::default().unequip(&mut self.slots.mode_mut(mode).equipment, item.id)
            }
            ItemCategory::Costume => {
                EquipmentSlotAllocator::default().unequip(&mut self.slots.mode_mut(mode).costumes, item.id)
            }
            ItemCategory::Consumable => ConsumableSlotManager::default()
                .unequip(&mut self.consumables[mode as usize], item.id),
            ItemCategory::Rune => item.rune_id().is_some_and(|rune| {
                RuneSlotAllocator::unequip(&mut self.slots.mode_mut(mode).rune_slots, rune).is_some()
            }),
            ItemCategory::Material => {
                return Err(ControllerError::unsupported(item.category, LoadoutOperation::Unequip));
            }
        };

        if !removed {
            return Ok(self.decline(item, DeclineReason::NotEquipped, previous));
        }
        self.finish(item, LoadoutStatus::Applied { evicted: Vec::new() }, previous)
    }

    /// Equips `item` if it is not equipped, otherwise unequips it.
    ///
    /// # Errors
    ///
    /// Same as [`LoadoutController::equip`].
    pub fn toggle(&mut self, item: ItemRef) -> Result<LoadoutOutcome, ControllerError> {
        if item.category == ItemCategory::Material {
            return Err(ControllerError::unsupported(item.category, LoadoutOperation::Toggle));
        }
        if self.is_equipped(item) {
            self.unequip(item)
        } else {
            self.equip(item)
        }
    }

    fn equip_item(&mut self, item: ItemRef) -> Result<LoadoutStatus, ControllerError> {
        let env = self.env;
        let Some(definition) = env.items()?.definition(item.id).filter(|definition| {
            matches!(definition.category, ItemCategory::Equipment | ItemCategory::Costume)
        }) else {
            return Ok(LoadoutStatus::Declined(DeclineReason::Unresolved));
        };
        let level = env.avatar_level()?;
        if definition.is_level_limited(level) {
            return Ok(LoadoutStatus::Declined(DeclineReason::LevelLimited));
        }
        if self.in_any_collection(item.id) {
            return Ok(LoadoutStatus::Declined(DeclineReason::AlreadyEquipped));
        }

        let items = env.items()?;
        let power = env.power()?;
        let allocator = EquipmentSlotAllocator::new(env.config()?.ring_slot2_level());

        let state = self.slots.mode_mut(self.mode);
        let set = match definition.category {
            ItemCategory::Equipment => &mut state.equipment,
            ItemCategory::Costume => &mut state.costumes,
            _ => return Ok(LoadoutStatus::Declined(DeclineReason::Unresolved)),
        };

        let mut powers = HashMap::new();
        let equipped: Vec<ItemRef> = set
            .iter()
            .filter_map(|id| items.definition(id))
            .map(|occupant| {
                powers.insert(occupant.id, power.item_power(&occupant));
                occupant.item_ref()
            })
            .collect();

        let evicted = allocator.equip(set, &equipped, definition.item_ref(), level, |id| {
            powers.get(&id).copied().unwrap_or(0)
        });
        Ok(LoadoutStatus::Applied { evicted })
    }

    fn equip_consumable(&mut self, item: ItemRef) -> Result<LoadoutStatus, ControllerError> {
        if self.view.avatar_info {
            return Ok(LoadoutStatus::Declined(DeclineReason::AvatarInfoView));
        }

        let env = self.env;
        let Some(definition) = env
            .items()?
            .definition(item.id)
            .filter(|definition| definition.category == ItemCategory::Consumable)
        else {
            return Ok(LoadoutStatus::Declined(DeclineReason::Unresolved));
        };
        let level = env.avatar_level()?;
        if definition.is_level_limited(level) {
            return Ok(LoadoutStatus::Declined(DeclineReason::LevelLimited));
        }
        if self.in_any_collection(item.id) {
            return Ok(LoadoutStatus::Declined(DeclineReason::AlreadyEquipped));
        }

        let manager = ConsumableSlotManager::new(env.config()?.consumable_slot_levels());
        let status = match manager.equip(&mut self.consumables[self.mode as usize], item.id, level) {
            ConsumableEquip::Equipped { evicted } => LoadoutStatus::Applied { evicted },
            ConsumableEquip::NoCapacity => LoadoutStatus::Declined(DeclineReason::NoConsumableSlot),
            ConsumableEquip::AlreadyEquipped => {
                LoadoutStatus::Declined(DeclineReason::AlreadyEquipped)
            }
        };
        Ok(status)
    }

    fn equip_rune(&mut self, item: ItemRef) -> Result<LoadoutStatus, ControllerError> {
        let Some(rune) = item.rune_id() else {
            return Ok(LoadoutStatus::Declined(DeclineReason::Unresolved));
        };
        let Some(category) = self.owned_rune_category(rune)? else {
            return Ok(LoadoutStatus::Declined(self.rune_decline_reason(rune)?));
        };

        let slots = &mut self.slots.mode_mut(self.mode).rune_slots;
        let status = match RuneSlotAllocator::equip(slots, rune, category) {
            RuneEquipOutcome::Assigned { .. } => LoadoutStatus::Applied {
                evicted: Vec::new(),
            },
            RuneEquipOutcome::Swapped { evicted, .. } => LoadoutStatus::Applied {
                evicted: vec![evicted.into()],
            },
            RuneEquipOutcome::Ambiguous { candidates } => {
                self.request_rune_pick(rune, category, candidates.clone());
                LoadoutStatus::AwaitingRuneSlotPick { candidates }
            }
            RuneEquipOutcome::NoCandidate => LoadoutStatus::Declined(DeclineReason::NoRuneSlot),
            RuneEquipOutcome::AlreadyEquipped { .. } => {
                LoadoutStatus::Declined(DeclineReason::AlreadyEquipped)
            }
        };
        Ok(status)
    }

    /// Category of `rune` if it is owned and has a table row.
    fn owned_rune_category(&self, rune: RuneId) -> Result<Option<RuneCategory>, ControllerError> {
        if self.env.session()?.rune_level(rune).is_none() {
            return Ok(None);
        }
        Ok(self.env.tables()?.rune(rune).map(|row| row.category))
    }

    fn rune_decline_reason(&self, rune: RuneId) -> Result<DeclineReason, ControllerError> {
        Ok(if self.env.session()?.rune_level(rune).is_none() {
            DeclineReason::RuneNotOwned
        } else {
            DeclineReason::RuneRowMissing
        })
    }

    fn in_any_collection(&self, id: ItemId) -> bool {
        let state = self.slots.mode(self.mode);
        state.equipment.contains(id)
            || state.costumes.contains(id)
            || self.consumables(self.mode).contains(id)
    }

    // ===== rune slot pick =====

    fn request_rune_pick(&mut self, rune: RuneId, category: RuneCategory, candidates: Vec<usize>) {
        tracing::debug!(%rune, ?candidates, mode = %self.mode, "awaiting rune slot pick");
        self.phase = LoadoutPhase::AwaitingRuneSlotPick(PendingRunePick {
            mode: self.mode,
            rune,
            category,
            candidates: candidates.clone(),
        });
        self.bus.publish(LoadoutEvent::RuneSlotPickRequested {
            mode: self.mode,
            rune,
            candidates,
        });
    }

    /// Completes a pending rune pick by placing the held rune into `index`.
    ///
    /// # Errors
    ///
    /// `Oracle` when an oracle is missing.
    pub fn pick_rune_slot(&mut self, index: usize) -> Result<LoadoutOutcome, ControllerError> {
        let previous = self.previous_power()?;
        let pick = match self.phase.pending_pick() {
            Some(pick) if pick.mode == self.mode && pick.is_candidate(index) => pick.clone(),
            _ => return Ok(LoadoutOutcome::declined(DeclineReason::NoPendingPick, previous)),
        };
        if self.env.session()?.in_engagement() {
            return Ok(self.decline(ItemRef::rune(pick.rune), DeclineReason::InEngagement, previous));
        }
        if self.owned_rune_category(pick.rune)?.is_none() {
            // The rune left the session while the pick was pending.
            let reason = self.rune_decline_reason(pick.rune)?;
            self.resolve_rune_pick(None);
            return Ok(self.decline(ItemRef::rune(pick.rune), reason, previous));
        }

        let slots = &mut self.slots.mode_mut(self.mode).rune_slots;
        let status = match RuneSlotAllocator::assign_to(slots, index, pick.rune, pick.category) {
            RuneEquipOutcome::Swapped { evicted, .. } => LoadoutStatus::Applied {
                evicted: vec![evicted.into()],
            },
            RuneEquipOutcome::Assigned { .. } => LoadoutStatus::Applied {
                evicted: Vec::new(),
            },
            _ => LoadoutStatus::Declined(DeclineReason::NoRuneSlot),
        };

        self.resolve_rune_pick(status_index(&status, index));
        self.finish(ItemRef::rune(pick.rune), status, previous)
    }

    /// Drops a pending rune pick. Returns false if none was pending.
    pub fn cancel_rune_slot_pick(&mut self) -> bool {
        if self.phase.is_idle() {
            return false;
        }
        self.resolve_rune_pick(None);
        true
    }

    fn resolve_rune_pick(&mut self, index: Option<usize>) {
        if let LoadoutPhase::AwaitingRuneSlotPick(pick) = std::mem::take(&mut self.phase) {
            tracing::debug!(rune = %pick.rune, ?index, "rune slot pick resolved");
            self.bus.publish(LoadoutEvent::RuneSlotPickResolved {
                mode: pick.mode,
                rune: pick.rune,
                index,
            });
        }
    }

    // ===== recalculation =====

    fn decline(&self, item: ItemRef, reason: DeclineReason, power: u64) -> LoadoutOutcome {
        tracing::debug!(item = %item.id, category = %item.category, %reason, "loadout request declined");
        LoadoutOutcome::declined(reason, power)
    }

    fn finish(
        &mut self,
        item: ItemRef,
        status: LoadoutStatus,
        previous: u64,
    ) -> Result<LoadoutOutcome, ControllerError> {
        let power = match &status {
            LoadoutStatus::Applied { .. } => self
                .refresh(previous)?
                .unwrap_or(CpTransition::unchanged(previous)),
            LoadoutStatus::Declined(reason) => {
                return Ok(self.decline(item, *reason, previous));
            }
            LoadoutStatus::AwaitingRuneSlotPick { .. } => CpTransition::unchanged(previous),
        };
        Ok(LoadoutOutcome { status, power })
    }

    /// CP shown before the pending mutation.
    fn previous_power(&self) -> Result<u64, ControllerError> {
        match self.last {
            Some(last) => Ok(last.power),
            None => Ok(self.recompute()?.map(|r| r.power).unwrap_or(0)),
        }
    }

    /// Recomputes stats for the current mode.
    ///
    /// A missing character row skips the update and returns `Ok(None)`.
    fn recompute(&self) -> Result<Option<Recalculation>, ControllerError> {
        let env = self.env;
        let session = env.session()?;
        let items = env.items()?;
        let avatar = session.avatar();
        let state = self.slots.mode(self.mode);

        let equipment: Vec<ItemDefinition> =
            state.equipment.iter().filter_map(|id| items.definition(id)).collect();
        let costumes: Vec<ItemDefinition> =
            state.costumes.iter().filter_map(|id| items.definition(id)).collect();
        let runes: Vec<(RuneId, u32)> = state
            .equipped_runes()
            .filter_map(|rune| session.rune_level(rune).map(|level| (rune, level)))
            .collect();

        let recalculator = StatRecalculator::new(env.tables()?, env.power()?);
        let input = RecalcInput {
            character_id: avatar.character_id,
            level: avatar.level,
            equipment: &equipment,
            costumes: &costumes,
            runes: &runes,
        };
        match recalculator.recompute(&input) {
            Ok(recalculation) => Ok(Some(recalculation)),
            Err(OracleError::CharacterNotFound(id)) => {
                tracing::warn!(character = id, "character row missing, stat update skipped");
                Ok(None)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Recomputes, stores and publishes stats. Returns the CP transition, or
    /// `None` when the update was skipped.
    fn refresh(&mut self, previous: u64) -> Result<Option<CpTransition>, ControllerError> {
        let Some(recalculation) = self.recompute()? else {
            return Ok(None);
        };

        let power = CpTransition::new(previous, recalculation.power);
        self.last = Some(recalculation);
        self.bus.publish(LoadoutEvent::StatsRecalculated {
            mode: self.mode,
            stats: recalculation.stats,
            power,
        });
        self.bus.publish(LoadoutEvent::BadgeChanged(
            self.env.session()?.has_unviewed_items(),
        ));
        Ok(Some(power))
    }
}

fn status_index(status: &LoadoutStatus, index: usize) -> Option<usize> {
    match status {
        LoadoutStatus::Applied { .. } => Some(index),
        _ => None,
    }
}
