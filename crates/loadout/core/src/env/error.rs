//! Oracle access errors.
//!
//! Errors related to oracle availability and data access.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ItemId, RuneId};

/// Errors that occur when accessing oracle data.
///
/// A missing oracle means the host wired the controller incorrectly and is
/// fatal. A lookup miss is a validation error; the controller turns it into a
/// guarded no-op and keeps the previous stats on screen.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("SessionOracle not available")]
    SessionNotAvailable,

    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("TablesOracle not available")]
    TablesNotAvailable,

    #[error("PowerOracle not available")]
    PowerNotAvailable,

    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    /// Character row was not found for the avatar's archetype.
    #[error("character row {0} not found")]
    CharacterNotFound(u32),

    /// Item id could not be resolved in the inventory.
    #[error("{0} not found in inventory")]
    ItemNotFound(ItemId),

    /// Rune row or option table entry was not found.
    #[error("{0} not found in rune tables")]
    RuneNotFound(RuneId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            SessionNotAvailable | ItemsNotAvailable | TablesNotAvailable | PowerNotAvailable
            | ConfigNotAvailable => ErrorSeverity::Fatal,

            CharacterNotFound(_) | ItemNotFound(_) | RuneNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            SessionNotAvailable => "ORACLE_SESSION_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            TablesNotAvailable => "ORACLE_TABLES_NOT_AVAILABLE",
            PowerNotAvailable => "ORACLE_POWER_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            CharacterNotFound(_) => "ORACLE_CHARACTER_NOT_FOUND",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
            RuneNotFound(_) => "ORACLE_RUNE_NOT_FOUND",
        }
    }
}
