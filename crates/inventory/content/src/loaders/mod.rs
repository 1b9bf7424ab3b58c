//! Loaders for reading inventory data from files.
//!
//! RON for the item catalog, TOML for the balance configuration.

pub mod balance;
pub mod items;

pub use balance::BalanceLoader;
pub use items::ItemLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
