//! Traits describing read-only collaborator data.
//!
//! Oracles expose the item catalog and the hosting entity; the balance
//! configuration rides along as plain data. The [`Env`] aggregate bundles
//! them so the engine can reach everything it needs without hard coupling
//! to concrete implementations.

mod error;
mod host;
mod items;

pub use error::OracleError;
pub use host::HostOracle;
pub use items::{ItemCategory, ItemDefinition, ItemOracle};

use crate::config::InventoryConfig;

/// Aggregates the read-only inputs required by the engine.
///
/// Every accessor returns an error when the corresponding input is
/// missing, so a partially wired environment fails loudly inside the
/// engine instead of silently misbehaving.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    items: Option<&'a dyn ItemOracle>,
    host: Option<&'a dyn HostOracle>,
    balance: Option<&'a InventoryConfig>,
}

impl<'a> Env<'a> {
    pub fn new(
        items: Option<&'a dyn ItemOracle>,
        host: Option<&'a dyn HostOracle>,
        balance: Option<&'a InventoryConfig>,
    ) -> Self {
        Self {
            items,
            host,
            balance,
        }
    }

    pub fn with_all(
        items: &'a dyn ItemOracle,
        host: &'a dyn HostOracle,
        balance: &'a InventoryConfig,
    ) -> Self {
        Self::new(Some(items), Some(host), Some(balance))
    }

    pub fn empty() -> Self {
        Self {
            items: None,
            host: None,
            balance: None,
        }
    }

    /// Returns the item oracle, or an error if not available.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the host oracle, or an error if not available.
    pub fn host(&self) -> Result<&'a dyn HostOracle, OracleError> {
        self.host.ok_or(OracleError::HostNotAvailable)
    }

    /// Returns the balance configuration, or an error if not available.
    pub fn balance(&self) -> Result<&'a InventoryConfig, OracleError> {
        self.balance.ok_or(OracleError::BalanceNotAvailable)
    }
}
