//! In-process transport for tests and single-process embedders.
//!
//! Wires the authority's sink directly to a mirror over a byte channel,
//! going through the same encode/decode framing a real transport would
//! use.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use inventory_core::{LocateReading, PlayerId};

use crate::events::{Event, EventBus, LocatorEvent};

use super::mirror::Mirror;
use super::update::{FieldUpdate, LocateDelivery, ReplicationSink};

/// Replication sink that frames updates onto an in-process channel.
pub struct LoopbackSink {
    frames: mpsc::Sender<Vec<u8>>,
}

#[async_trait]
impl ReplicationSink for LoopbackSink {
    async fn publish(&self, update: FieldUpdate) {
        match update.encode() {
            // A closed pump just means the mirror went away; the sink
            // stays fire-and-forget either way.
            Ok(frame) => {
                let _ = self.frames.send(frame).await;
            }
            Err(error) => warn!(%error, "failed to frame replication update"),
        }
    }
}

/// Connects a mirror to the authority over an in-process byte channel.
///
/// Returns the sink to hand to the runtime builder and the pump task that
/// applies decoded frames to the mirror until the sink is dropped.
pub fn connect_mirror(mirror: Arc<Mirror>) -> (Arc<LoopbackSink>, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel::<Vec<u8>>(64);

    let pump = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            match FieldUpdate::decode(&frame) {
                Ok(update) => mirror.apply(update),
                Err(error) => warn!(%error, "dropping malformed replication frame"),
            }
        }
    });

    (Arc::new(LoopbackSink { frames: tx }), pump)
}

/// Locate delivery that lands readings on a client-side bus.
///
/// Models the addressed reply arriving at the requesting client, which
/// then re-announces the result locally, band and distance only.
pub struct LoopbackLocate {
    bus: EventBus,
}

impl LoopbackLocate {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }

    /// Delivery wired to a mirror's local bus.
    pub fn for_mirror(mirror: &Mirror) -> Self {
        Self::new(mirror.event_bus())
    }
}

#[async_trait]
impl LocateDelivery for LoopbackLocate {
    async fn deliver(&self, recipient: PlayerId, reading: LocateReading) {
        tracing::trace!(%recipient, tool = %reading.tool_id, "delivering locate reading");
        self.bus.publish(Event::Locator(LocatorEvent::LocateResult {
            tool_id: reading.tool_id,
            band: reading.band,
            distance: reading.distance,
        }));
    }
}
