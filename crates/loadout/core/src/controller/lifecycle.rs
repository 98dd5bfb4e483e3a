//! Initialization, deferred refresh, external change handling and teardown.

use tokio::sync::broadcast::error::TryRecvError;

use super::{ControllerError, LoadoutController, LoadoutPhase};
use crate::config::LoadoutConfig;
use crate::env::ItemDefinition;
use crate::events::ExternalChange;
use crate::state::{ItemCategory, ItemSubtype, Mode};
use crate::stats::Recalculation;

/// How the loadout is being presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Read-only inspection of an avatar: tab clicks are ignored and
    /// consumables cannot be equipped.
    pub avatar_info: bool,
}

impl ViewOptions {
    pub const fn editable() -> Self {
        Self { avatar_info: false }
    }

    pub const fn avatar_info() -> Self {
        Self { avatar_info: true }
    }
}

impl LoadoutController<'_> {
    /// Prepares the loadout for display in `mode`.
    ///
    /// Clears session consumables, drops any pending rune pick, replaces the
    /// change-feed subscription and schedules the first refresh
    /// [`LoadoutConfig::REFRESH_DEFERRAL_TICKS`] ticks from now.
    pub fn initialize(&mut self, mode: Mode, view: ViewOptions) {
        for slots in &mut self.consumables {
            slots.clear();
        }
        self.phase = LoadoutPhase::Idle;
        self.mode = mode;
        self.view = view;
        self.last = None;

        // Release the previous subscription before taking a new one.
        self.changes = None;
        self.changes = self.feed.as_ref().map(|feed| feed.subscribe());
        self.pending_refresh = Some(LoadoutConfig::REFRESH_DEFERRAL_TICKS);

        tracing::debug!(%mode, avatar_info = view.avatar_info, "loadout initialized");
    }

    /// Advances one scheduler tick.
    ///
    /// Performs the deferred first refresh once its countdown expires, then
    /// drains host changes. Returns the recalculation if a refresh ran.
    ///
    /// # Errors
    ///
    /// `Oracle` when an oracle is missing.
    pub fn tick(&mut self) -> Result<Option<Recalculation>, ControllerError> {
        let mut refreshed = None;

        if let Some(remaining) = self.pending_refresh {
            let remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                self.pending_refresh = None;
                self.active_tab = ItemCategory::Equipment;
                refreshed = self.update_view(self.mode)?;
            } else {
                self.pending_refresh = Some(remaining);
            }
        }

        if self.drain_changes() && self.pending_refresh.is_none() {
            refreshed = self.update_view(self.mode)?;
        }
        Ok(refreshed)
    }

    /// Consumes every queued host change. Returns true if any arrived.
    fn drain_changes(&mut self) -> bool {
        let Some(changes) = self.changes.as_mut() else {
            return false;
        };

        let mut dirty = false;
        loop {
            match changes.try_recv() {
                Ok(ExternalChange::RuneStateChanged) => {
                    tracing::trace!("rune state changed");
                    dirty = true;
                }
                Ok(ExternalChange::RuneSlotUnlockCountChanged(count)) => {
                    tracing::trace!(count, "rune slot unlock count changed");
                    dirty = true;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "change feed lagged");
                    dirty = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        dirty
    }

    /// Switches to `mode`, recomputes and publishes.
    ///
    /// A pending rune pick for another mode is cancelled. Returns `None` when
    /// the character row is missing and the update was skipped.
    ///
    /// # Errors
    ///
    /// `Oracle` when an oracle is missing.
    pub fn update_view(&mut self, mode: Mode) -> Result<Option<Recalculation>, ControllerError> {
        if mode != self.mode {
            if self
                .phase
                .pending_pick()
                .is_some_and(|pick| pick.mode != mode)
            {
                self.resolve_rune_pick(None);
            }
            self.mode = mode;
        }

        let previous = self.last.map(|last| last.power).unwrap_or(0);
        let Some(power) = self.refresh(previous)? else {
            return Ok(None);
        };
        tracing::trace!(%mode, previous = power.previous, current = power.current, "view updated");
        Ok(self.last)
    }

    /// Drops subscriptions and the pending refresh.
    pub fn teardown(&mut self) {
        self.changes = None;
        self.pending_refresh = None;
        self.resolve_rune_pick(None);
        tracing::debug!(mode = %self.mode, "loadout torn down");
    }

    /// Whether a change-feed subscription is live.
    pub fn is_subscribed(&self) -> bool {
        self.changes.is_some()
    }

    /// Ticks left before the deferred first refresh, if one is scheduled.
    pub fn pending_refresh(&self) -> Option<u8> {
        self.pending_refresh
    }

    /// Selects an inventory tab. Ignored in the avatar-info view.
    pub fn select_tab(&mut self, tab: ItemCategory) -> bool {
        if self.view.avatar_info {
            tracing::trace!(%tab, "tab selection ignored in avatar info view");
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// Equipped costume of subtype `Title` in the current mode.
    ///
    /// # Errors
    ///
    /// `Oracle` when the item oracle is missing.
    pub fn title(&self) -> Result<Option<ItemDefinition>, ControllerError> {
        let items = self.env.items()?;
        Ok(self
            .slots
            .mode(self.mode)
            .costumes
            .iter()
            .filter_map(|id| items.definition(id))
            .find(|costume| costume.subtype == ItemSubtype::Title))
    }
}
