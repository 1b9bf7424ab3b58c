//! Commands accepted by the authoritative engine.
//!
//! A command is the validated-on-arrival form of a client request: the
//! request facade forwards one of these to wherever the authority lives,
//! and the engine re-checks every precondition before mutating state.

use crate::state::{ItemHandle, PlayerId, ToolId, Vec3};

/// One requested inventory mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Put a tool into a slot, overwriting any previous occupant.
    AssignSlot {
        item: ItemHandle,
        tool_id: ToolId,
        slot_index: usize,
    },

    /// Empty a slot.
    ClearSlot { slot_index: usize },

    /// Add `quantity` of an item to the bag, subject to the weight cap.
    AddBagItem { item: ItemHandle, quantity: u32 },

    /// Remove up to `quantity` of an item from the bag.
    RemoveBagItem { item: ItemHandle, quantity: u32 },

    /// Register (or re-register) a dropped tool with the locator.
    RegisterDropped {
        tool_id: ToolId,
        owner: PlayerId,
        position: Vec3,
    },

    /// Move an already-registered dropped tool.
    UpdateDroppedLocation { tool_id: ToolId, position: Vec3 },

    /// Forget a dropped tool.
    RemoveDropped { tool_id: ToolId },

    /// Ask for a directional hint toward one of the requester's dropped
    /// tools.
    Locate { tool_id: ToolId },
}

impl Command {
    /// Short name for tracing.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AssignSlot { .. } => "assign_slot",
            Command::ClearSlot { .. } => "clear_slot",
            Command::AddBagItem { .. } => "add_bag_item",
            Command::RemoveBagItem { .. } => "remove_bag_item",
            Command::RegisterDropped { .. } => "register_dropped",
            Command::UpdateDroppedLocation { .. } => "update_dropped_location",
            Command::RemoveDropped { .. } => "remove_dropped",
            Command::Locate { .. } => "locate",
        }
    }
}
