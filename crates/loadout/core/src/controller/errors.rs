//! Error types for the loadout controller.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemCategory;

/// Controller entry point that raised an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LoadoutOperation {
    Equip,
    Unequip,
    Toggle,
    Tooltip,
}

/// Errors surfaced by [`super::LoadoutController`].
///
/// Declined mutations are not errors; they come back as
/// [`super::LoadoutStatus::Declined`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControllerError {
    /// The category has no handling for this operation. Always a caller bug.
    #[error("{operation} is not defined for {category} items")]
    UnsupportedCategory {
        category: ItemCategory,
        operation: LoadoutOperation,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl ControllerError {
    pub fn unsupported(category: ItemCategory, operation: LoadoutOperation) -> Self {
        Self::UnsupportedCategory {
            category,
            operation,
        }
    }
}

impl GameError for ControllerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnsupportedCategory { .. } => ErrorSeverity::Fatal,
            Self::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedCategory { .. } => "CONTROLLER_UNSUPPORTED_CATEGORY",
            Self::Oracle(error) => error.error_code(),
        }
    }
}
