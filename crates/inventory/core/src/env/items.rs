use crate::state::ItemHandle;

/// Read-only access to item definitions.
///
/// Implementations resolve a handle to the definition data behind it. The
/// engine only ever needs the unit weight; the remaining fields exist for
/// presentation layers and content tooling.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition>;

    /// Unit weight behind `handle`, or zero when the definition is
    /// unknown.
    fn unit_weight(&self, handle: ItemHandle) -> f32 {
        self.definition(handle)
            .map(|definition| definition.unit_weight)
            .unwrap_or(0.0)
    }
}

/// Coarse gameplay category of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCategory {
    /// Equippable tool; lives in tool slots and can be tracked when
    /// dropped in the world.
    Tool,
    /// Collected debris; accumulates in the weight-limited bag.
    Cleanup,
}

/// Static definition of one item kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    /// Stable content id, unique across the catalog.
    pub id: String,
    pub display_name: String,
    pub category: ItemCategory,
    pub unit_weight: f32,
    pub stackable: bool,
    pub max_stack: u32,
}
