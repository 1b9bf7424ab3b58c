//! Content loading for the inventory system.
//!
//! Reads the item catalog (RON) and the balance configuration (TOML) from
//! disk and exposes the catalog through the oracle trait the engine
//! consumes. Nothing here is hot-path; everything happens once at load
//! time.
pub mod catalog;
pub mod loaders;

pub use catalog::ItemCatalog;
pub use loaders::{BalanceLoader, ItemLoader, LoadResult};
