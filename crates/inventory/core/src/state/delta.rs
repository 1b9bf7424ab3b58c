//! Bitmask change tracking for replicated inventory fields.
//!
//! Produced by comparing the state before and after a command. The mask is
//! what drives both local change notifications and which fields the
//! replication layer re-sends; actual values are read from the state
//! itself when needed.

use bitflags::bitflags;

use crate::state::InventoryState;

bitflags! {
    /// Tracks which replicated fields of an [`InventoryState`] changed
    /// during command execution.
    ///
    /// The authority-only locate-cooldown stamp is deliberately not part
    /// of this mask; it never replicates and never notifies.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct InventoryFields: u8 {
        const TOOL_SLOTS    = 1 << 0;
        const BAG_ENTRIES   = 1 << 1;
        const BAG_WEIGHT    = 1 << 2;
        const TRACKED_TOOLS = 1 << 3;
    }
}

/// Minimal description of a command's impact on replicated state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StateDelta {
    pub fields: InventoryFields,
}

impl StateDelta {
    /// Creates a delta by field-by-field comparison of two states.
    pub fn from_states(before: &InventoryState, after: &InventoryState) -> Self {
        let mut fields = InventoryFields::empty();

        if before.tool_slots != after.tool_slots {
            fields |= InventoryFields::TOOL_SLOTS;
        }
        if before.bag != after.bag {
            fields |= InventoryFields::BAG_ENTRIES;
        }
        if before.bag_weight != after.bag_weight {
            fields |= InventoryFields::BAG_WEIGHT;
        }
        if before.tracked_tools != after.tracked_tools {
            fields |= InventoryFields::TRACKED_TOOLS;
        }

        Self { fields }
    }

    /// Returns true if no replicated field changed (no-op command).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InventoryConfig;
    use crate::state::{BagEntry, ItemHandle, ToolId};

    #[test]
    fn identical_states_produce_empty_delta() {
        let state = InventoryState::new(&InventoryConfig::default());
        let delta = StateDelta::from_states(&state, &state.clone());
        assert!(delta.is_empty());
    }

    #[test]
    fn bag_mutation_marks_entries_and_weight() {
        let before = InventoryState::new(&InventoryConfig::default());
        let mut after = before.clone();
        after.bag.push(BagEntry::new(ItemHandle::new(1), 2));
        after.bag_weight = 5.0;

        let delta = StateDelta::from_states(&before, &after);
        assert_eq!(
            delta.fields,
            InventoryFields::BAG_ENTRIES | InventoryFields::BAG_WEIGHT
        );
    }

    #[test]
    fn slot_mutation_marks_only_tool_slots() {
        let before = InventoryState::new(&InventoryConfig::default());
        let mut after = before.clone();
        after.tool_slots[0].assign(ItemHandle::new(1), ToolId::new(42));

        let delta = StateDelta::from_states(&before, &after);
        assert_eq!(delta.fields, InventoryFields::TOOL_SLOTS);
    }

    #[test]
    fn cooldown_stamp_is_not_tracked() {
        let before = InventoryState::new(&InventoryConfig::default());
        let mut after = before.clone();
        after.last_locate_time = Some(12.0);

        assert!(StateDelta::from_states(&before, &after).is_empty());
    }
}
