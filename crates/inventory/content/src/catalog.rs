//! In-memory item catalog backing the [`ItemOracle`] trait.

use std::collections::HashMap;

use inventory_core::{ItemDefinition, ItemHandle, ItemOracle};

/// Immutable item catalog keyed by handle.
#[derive(Debug, Default)]
pub struct ItemCatalog {
    definitions: HashMap<ItemHandle, ItemDefinition>,
}

impl ItemCatalog {
    /// Builds a catalog, rejecting duplicate handles.
    pub fn from_definitions(definitions: Vec<ItemDefinition>) -> anyhow::Result<Self> {
        let mut map = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            if let Some(previous) = map.insert(definition.handle, definition) {
                anyhow::bail!(
                    "duplicate item handle {} (first declared as '{}')",
                    previous.handle,
                    previous.id
                );
            }
        }
        Ok(Self { definitions: map })
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Looks a definition up by its stable content id.
    pub fn by_content_id(&self, id: &str) -> Option<&ItemDefinition> {
        self.definitions.values().find(|definition| definition.id == id)
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.definitions.get(&handle).cloned()
    }
}
