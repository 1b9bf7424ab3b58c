//! Item catalog loader.

use std::path::Path;

use inventory_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::catalog::ItemCatalog;
use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogDoc {
    pub items: Vec<ItemDefinition>,
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let doc: ItemCatalogDoc = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(doc.items)
    }

    /// Load a ready-to-query catalog from a RON file.
    pub fn load_catalog(path: &Path) -> LoadResult<ItemCatalog> {
        ItemCatalog::from_definitions(Self::load(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{ItemCategory, ItemHandle, ItemOracle};
    use std::io::Write;

    const CATALOG_RON: &str = r#"(
    items: [
        (
            handle: 1,
            id: "shovel",
            display_name: "Rusty Shovel",
            category: Tool,
            unit_weight: 3.5,
            stackable: false,
            max_stack: 1,
        ),
        (
            handle: 2,
            id: "scrap",
            display_name: "Metal Scrap",
            category: Cleanup,
            unit_weight: 0.5,
            stackable: true,
            max_stack: 50,
        ),
    ],
)"#;

    #[test]
    fn loads_catalog_from_ron() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_RON.as_bytes()).unwrap();

        let catalog = ItemLoader::load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let shovel = catalog.definition(ItemHandle::new(1)).unwrap();
        assert_eq!(shovel.category, ItemCategory::Tool);
        assert_eq!(shovel.unit_weight, 3.5);
        assert!(!shovel.stackable);

        let scrap = catalog.definition(ItemHandle::new(2)).unwrap();
        assert_eq!(scrap.display_name, "Metal Scrap");
        assert_eq!(scrap.max_stack, 50);
    }

    #[test]
    fn malformed_catalog_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"(items: [broken").unwrap();

        let error = ItemLoader::load(file.path()).unwrap_err();
        assert!(error.to_string().contains("item catalog"));
    }
}
