//! Authoritative inventory state and its change tracking.

mod delta;
mod types;

pub use delta::{InventoryFields, StateDelta};
pub use types::{BagEntry, ItemHandle, PlayerId, ToolId, ToolSlot, TrackedTool, Vec3};

use crate::config::InventoryConfig;
use crate::env::ItemOracle;

/// Complete inventory state for one entity.
///
/// The first four fields replicate to mirrors; `last_locate_time` is
/// authority-only bookkeeping for the locate rate limit. Only the
/// authority-side [`crate::engine::InventoryEngine`] may mutate any of
/// this; mirrors receive whole-field overwrites from the replication
/// layer.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct InventoryState {
    /// Fixed-size tool belt, sized once at construction.
    pub tool_slots: Vec<ToolSlot>,
    /// Unordered bag stacks, at most one entry per item definition.
    pub bag: Vec<BagEntry>,
    /// Derived total weight of the bag, recomputed on every bag mutation.
    pub bag_weight: f32,
    /// Registry of world-placed tools available to the locator.
    pub tracked_tools: Vec<TrackedTool>,
    /// World time of the last accepted locate request; `None` = never.
    pub last_locate_time: Option<f64>,
}

impl InventoryState {
    /// Creates an empty state with the configured number of tool slots.
    ///
    /// The slot count is fixed here and never resized afterwards.
    pub fn new(config: &InventoryConfig) -> Self {
        Self {
            tool_slots: vec![ToolSlot::EMPTY; config.max_tool_slots as usize],
            bag: Vec::new(),
            bag_weight: 0.0,
            tracked_tools: Vec::new(),
            last_locate_time: None,
        }
    }

    /// Index of the bag entry for `item`, if one exists.
    pub fn find_bag_entry(&self, item: ItemHandle) -> Option<usize> {
        self.bag.iter().position(|entry| entry.item == item)
    }

    /// Index of the tracked record for `tool_id`, if one exists.
    pub fn find_tracked(&self, tool_id: ToolId) -> Option<usize> {
        self.tracked_tools
            .iter()
            .position(|tracked| tracked.tool_id == tool_id)
    }

    /// Recomputes `bag_weight` as the sum over entries of
    /// unit weight times quantity.
    ///
    /// Entries whose definition the oracle no longer knows contribute
    /// nothing, mirroring how a dangling definition reference weighs
    /// nothing.
    pub fn recalculate_bag_weight(&mut self, items: &dyn ItemOracle) {
        self.bag_weight = self
            .bag
            .iter()
            .map(|entry| items.unit_weight(entry.item) * entry.quantity as f32)
            .sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ItemCategory, ItemDefinition};
    use std::collections::HashMap;

    struct StubItems(HashMap<ItemHandle, ItemDefinition>);

    impl ItemOracle for StubItems {
        fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
            self.0.get(&handle).cloned()
        }
    }

    fn weighted(handle: u32, weight: f32) -> ItemDefinition {
        ItemDefinition {
            handle: ItemHandle::new(handle),
            id: format!("item-{handle}"),
            display_name: format!("Item {handle}"),
            category: ItemCategory::Cleanup,
            unit_weight: weight,
            stackable: true,
            max_stack: 99,
        }
    }

    #[test]
    fn new_state_sizes_slots_from_config() {
        let config = InventoryConfig {
            max_tool_slots: 5,
            ..InventoryConfig::default()
        };
        let state = InventoryState::new(&config);
        assert_eq!(state.tool_slots.len(), 5);
        assert!(state.tool_slots.iter().all(|slot| !slot.occupied));
        assert_eq!(state.last_locate_time, None);
    }

    #[test]
    fn recalculate_sums_weight_over_entries() {
        let mut items = HashMap::new();
        items.insert(ItemHandle::new(1), weighted(1, 2.5));
        items.insert(ItemHandle::new(2), weighted(2, 1.0));
        let oracle = StubItems(items);

        let mut state = InventoryState::new(&InventoryConfig::default());
        state.bag.push(BagEntry::new(ItemHandle::new(1), 2));
        state.bag.push(BagEntry::new(ItemHandle::new(2), 3));
        state.recalculate_bag_weight(&oracle);

        assert_eq!(state.bag_weight, 8.0);
    }

    #[test]
    fn unknown_definitions_weigh_nothing() {
        let oracle = StubItems(HashMap::new());
        let mut state = InventoryState::new(&InventoryConfig::default());
        state.bag.push(BagEntry::new(ItemHandle::new(9), 4));
        state.recalculate_bag_weight(&oracle);
        assert_eq!(state.bag_weight, 0.0);
    }
}
