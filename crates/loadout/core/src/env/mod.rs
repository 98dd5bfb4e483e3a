//! Traits describing read-only session and content data.
//!
//! Oracles expose the inventory, balance tables, session flags, the CP formula
//! and configuration. The [`LoadoutEnv`] aggregate bundles them so the
//! controller reaches everything it needs without ambient global state.
mod config;
mod error;
mod items;
mod power;
mod session;
mod snapshot;
mod tables;

use std::fmt;

pub use config::ConfigOracle;
pub use error::OracleError;
pub use items::{ItemDefinition, ItemOracle};
pub use power::{PowerOracle, WeightedPower};
pub use session::{AvatarProfile, SessionOracle};
pub use snapshot::{
    ItemsSnapshot, LoadoutSnapshot, RuneTableEntry, SessionSnapshot, TablesSnapshot,
};
pub use tables::{CharacterRow, RuneRow, SetEffectRow, TablesOracle};

/// Aggregates the read-only oracles required by the controller.
#[derive(Clone, Copy, Default)]
pub struct LoadoutEnv<'a> {
    session: Option<&'a dyn SessionOracle>,
    items: Option<&'a dyn ItemOracle>,
    tables: Option<&'a dyn TablesOracle>,
    power: Option<&'a dyn PowerOracle>,
    config: Option<&'a dyn ConfigOracle>,
}

impl<'a> LoadoutEnv<'a> {
    /// Creates an environment with no oracles attached.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_all(
        session: &'a dyn SessionOracle,
        items: &'a dyn ItemOracle,
        tables: &'a dyn TablesOracle,
        power: &'a dyn PowerOracle,
        config: &'a dyn ConfigOracle,
    ) -> Self {
        Self {
            session: Some(session),
            items: Some(items),
            tables: Some(tables),
            power: Some(power),
            config: Some(config),
        }
    }

    #[must_use]
    pub fn with_session(mut self, session: &'a dyn SessionOracle) -> Self {
        self.session = Some(session);
        self
    }

    #[must_use]
    pub fn with_items(mut self, items: &'a dyn ItemOracle) -> Self {
        self.items = Some(items);
        self
    }

    #[must_use]
    pub fn with_tables(mut self, tables: &'a dyn TablesOracle) -> Self {
        self.tables = Some(tables);
        self
    }

    #[must_use]
    pub fn with_power(mut self, power: &'a dyn PowerOracle) -> Self {
        self.power = Some(power);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: &'a dyn ConfigOracle) -> Self {
        self.config = Some(config);
        self
    }

    /// Returns the SessionOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SessionNotAvailable` if no session oracle was provided.
    pub fn session(&self) -> Result<&'a dyn SessionOracle, OracleError> {
        self.session.ok_or(OracleError::SessionNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no items oracle was provided.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the TablesOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TablesNotAvailable` if no tables oracle was provided.
    pub fn tables(&self) -> Result<&'a dyn TablesOracle, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }

    /// Returns the PowerOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PowerNotAvailable` if no power oracle was provided.
    pub fn power(&self) -> Result<&'a dyn PowerOracle, OracleError> {
        self.power.ok_or(OracleError::PowerNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a dyn ConfigOracle, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Current avatar level.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SessionNotAvailable` if no session oracle was provided.
    pub fn avatar_level(&self) -> Result<u32, OracleError> {
        Ok(self.session()?.avatar().level)
    }
}

impl fmt::Debug for LoadoutEnv<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadoutEnv")
            .field("session", &self.session.is_some())
            .field("items", &self.items.is_some())
            .field("tables", &self.tables.is_some())
            .field("power", &self.power.is_some())
            .field("config", &self.config.is_some())
            .finish()
    }
}
