//! Per-field replication payloads and the transport-facing ports.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use inventory_core::{
    BagEntry, InventoryFields, LocateReading, PlayerId, ToolSlot, TrackedTool,
};

/// Whole-field snapshot of one replicated inventory field.
///
/// Replication is field-granular: whichever fields a command touched are
/// re-sent in full. Small collections make whole-field overwrite cheaper
/// and simpler than element diffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldUpdate {
    ToolSlots(Vec<ToolSlot>),
    BagEntries(Vec<BagEntry>),
    BagWeight(f32),
    TrackedTools(Vec<TrackedTool>),
}

impl FieldUpdate {
    /// The field bit this update carries.
    pub fn field(&self) -> InventoryFields {
        match self {
            FieldUpdate::ToolSlots(_) => InventoryFields::TOOL_SLOTS,
            FieldUpdate::BagEntries(_) => InventoryFields::BAG_ENTRIES,
            FieldUpdate::BagWeight(_) => InventoryFields::BAG_WEIGHT,
            FieldUpdate::TrackedTools(_) => InventoryFields::TRACKED_TOOLS,
        }
    }

    /// Encodes the update as a compact wire frame.
    pub fn encode(&self) -> Result<Vec<u8>, ReplicationError> {
        bincode::serialize(self).map_err(ReplicationError::Encode)
    }

    /// Decodes a wire frame produced by [`FieldUpdate::encode`].
    pub fn decode(frame: &[u8]) -> Result<Self, ReplicationError> {
        bincode::deserialize(frame).map_err(ReplicationError::Decode)
    }
}

#[derive(Debug, Error)]
pub enum ReplicationError {
    #[error("failed to encode field update")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode field update")]
    Decode(#[source] bincode::Error),
}

/// Outbound side of the replication substrate.
///
/// Implementations carry updates to every remote mirror, reliably and in
/// order per field. The authority fires and forgets; there is no
/// acknowledgment to observe.
#[async_trait]
pub trait ReplicationSink: Send + Sync {
    async fn publish(&self, update: FieldUpdate);
}

/// Addressed delivery of locate readings.
///
/// This is a separate channel from general replication on purpose: the
/// reading is transient per-requester data, not state worth replicating
/// to everyone, and it is the only payload that carries the direction
/// vector.
#[async_trait]
pub trait LocateDelivery: Send + Sync {
    async fn deliver(&self, recipient: PlayerId, reading: LocateReading);
}

/// Sink that drops every update; the default when no transport is wired.
pub struct NullSink;

#[async_trait]
impl ReplicationSink for NullSink {
    async fn publish(&self, update: FieldUpdate) {
        tracing::trace!(field = ?update.field(), "no replication sink attached; update dropped");
    }
}

/// Delivery that drops every reading; the default when no transport is
/// wired.
pub struct NullLocate;

#[async_trait]
impl LocateDelivery for NullLocate {
    async fn deliver(&self, recipient: PlayerId, reading: LocateReading) {
        tracing::trace!(
            %recipient,
            tool = %reading.tool_id,
            "no locate delivery attached; reading dropped"
        );
    }
}
