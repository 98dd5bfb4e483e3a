//! Loadout allocation and stat recalculation.
//!
//! `loadout-core` decides which slot an item occupies, what gets displaced
//! when a slot is full, and how the equipped set feeds into stats and combat
//! power. All mutation flows through [`controller::LoadoutController`]; the
//! session, inventory, balance tables and CP formula are injected through the
//! oracles in [`env`].
pub mod alloc;
pub mod config;
pub mod controller;
pub mod env;
pub mod error;
pub mod events;
pub mod state;
pub mod stats;

pub use alloc::{
    ConsumableEquip, ConsumableSlotManager, EquipmentSlotAllocator, RuneEquipOutcome,
    RuneSlotAllocator,
};
pub use config::{LoadoutConfig, PowerWeights};
pub use controller::{
    ControllerError, DeclineReason, LoadoutController, LoadoutOperation, LoadoutOutcome,
    LoadoutPhase, LoadoutStatus, Notice, PendingRunePick, RuneSlotAction, SubmitAction,
    SubmitLabel, TooltipParams, ViewOptions,
};
pub use env::{
    AvatarProfile, CharacterRow, ConfigOracle, ItemDefinition, ItemOracle, ItemsSnapshot,
    LoadoutEnv, LoadoutSnapshot, OracleError, PowerOracle, RuneRow, RuneTableEntry,
    SessionOracle, SessionSnapshot, SetEffectRow, TablesOracle, TablesSnapshot, WeightedPower,
};
pub use error::{ErrorSeverity, GameError};
pub use events::{ChangeFeed, EventBus, ExternalChange, LoadoutEvent, Topic};
pub use state::{
    ConsumableSlots, EquipSet, ItemCategory, ItemId, ItemRef, ItemSubtype, Mode, ModeSlotState,
    RuneCategory, RuneId, RuneSlot, RuneSlotKind, SlotStates,
};
pub use stats::{
    CharacterStats, CpTransition, ModifierOp, RecalcInput, Recalculation, StatKind, StatMap,
    StatModifier, StatRecalculator,
};
