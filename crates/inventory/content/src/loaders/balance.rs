//! Balance configuration loader.

use std::path::Path;

use inventory_core::InventoryConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for balance tuning from TOML files.
///
/// Every field of [`InventoryConfig`] is optional in the file; anything
/// omitted keeps its default (3 slots, unlimited bag, locator disabled).
pub struct BalanceLoader;

impl BalanceLoader {
    /// Load balance data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<InventoryConfig> {
        let content = read_file(path)?;
        let config: InventoryConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse balance TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BALANCE_TOML: &str = r#"
max_tool_slots = 4
max_bag_weight = 25.0
locate_cooldown_seconds = 2.0
near_distance = 5.0
medium_distance = 15.0

[movement_speed_by_weight]
keys = [
    { input = 0.0, value = 1.0 },
    { input = 25.0, value = 0.5 },
]
"#;

    #[test]
    fn loads_full_balance_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BALANCE_TOML.as_bytes()).unwrap();

        let config = BalanceLoader::load(file.path()).unwrap();
        assert_eq!(config.max_tool_slots, 4);
        assert_eq!(config.max_bag_weight, 25.0);
        assert_eq!(config.locate_cooldown_seconds, 2.0);
        assert!((config.movement_speed_multiplier(12.5) - 0.75).abs() < 1.0e-6);
        // Unconfigured curve stays neutral.
        assert_eq!(config.stamina_drain_multiplier(12.5), 1.0);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"max_bag_weight = 10.0\n").unwrap();

        let config = BalanceLoader::load(file.path()).unwrap();
        assert_eq!(
            config.max_tool_slots,
            InventoryConfig::DEFAULT_TOOL_SLOTS
        );
        assert_eq!(config.max_bag_weight, 10.0);
        assert_eq!(config.near_distance, 0.0);
        assert!(config.movement_speed_by_weight.is_none());
    }
}
