//! Event types for the two notification topics.

use inventory_core::{DistanceBand, ToolId};

/// Change notifications for replicated inventory fields.
///
/// Listeners re-read current state through the read accessors; only the
/// weight change carries its new value, matching the replicated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InventoryEvent {
    /// The tool slot sequence changed.
    SlotsChanged,

    /// The bag entry collection changed.
    BagChanged,

    /// The aggregate bag weight changed.
    WeightChanged { weight: f32 },
}

/// Locator notifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocatorEvent {
    /// An accepted locate produced a reading. The direction vector is
    /// deliberately absent here; it travels only in the addressed reply
    /// to the requesting player.
    LocateResult {
        tool_id: ToolId,
        band: DistanceBand,
        distance: f32,
    },
}
