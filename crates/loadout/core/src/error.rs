//! Common error infrastructure for loadout-core.
//!
//! This module provides shared types and traits used across all error types in
//! loadout-core. Domain-specific errors (e.g., `OracleError`, `ControllerError`)
//! are defined next to the components that raise them.
//!
//! # Design Principles
//!
//! - **Guarded no-ops are not errors**: declined mutations (mid-engagement, locked
//!   slot, unresolved item) return an outcome, never an `Err`
//! - **Severity Classification**: lookup misses vs caller errors
//! - **Stable Codes**: every variant exposes a static code for logs and tests

/// Severity level of an error.
///
/// - **Validation**: a lookup missed; the request should not be repeated unchanged
/// - **Fatal**: caller or data error the loadout cannot proceed past
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Examples: rune id missing from the option table, unknown character row
    Validation,

    /// Examples: missing required oracle, equip request for a material
    Fatal,
}

/// Common trait for all loadout-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
