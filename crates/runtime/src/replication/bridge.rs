//! Background task that feeds the replication sink.
//!
//! The authority worker queues a whole-field update for every field a
//! committed command touched. This task coalesces queued updates (latest
//! wins per field) and flushes them on a periodic tick, so propagation is
//! bounded-delay rather than per-commit, and per-field ordering is
//! preserved because only the newest snapshot of a field ever leaves.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

use super::update::{FieldUpdate, ReplicationSink};

/// Canonical flush order: slots, bag, weight, tracked tools.
const FIELD_SLOTS: usize = 4;

pub(crate) struct ReplicationBridge {
    update_rx: mpsc::Receiver<FieldUpdate>,
    sink: Arc<dyn ReplicationSink>,
    flush_interval: Duration,
}

impl ReplicationBridge {
    pub(crate) fn new(
        update_rx: mpsc::Receiver<FieldUpdate>,
        sink: Arc<dyn ReplicationSink>,
        flush_interval: Duration,
    ) -> Self {
        Self {
            update_rx,
            sink,
            flush_interval,
        }
    }

    /// Main bridge loop. Exits, after a final flush, once the authority
    /// worker drops its sender.
    pub(crate) async fn run(mut self) {
        let mut pending: [Option<FieldUpdate>; FIELD_SLOTS] = [None, None, None, None];
        let mut ticker = interval(self.flush_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                update = self.update_rx.recv() => match update {
                    Some(update) => stash(&mut pending, update),
                    None => {
                        self.flush(&mut pending).await;
                        debug!("replication bridge shutting down");
                        break;
                    }
                },
                _ = ticker.tick() => self.flush(&mut pending).await,
            }
        }
    }

    async fn flush(&self, pending: &mut [Option<FieldUpdate>; FIELD_SLOTS]) {
        for slot in pending.iter_mut() {
            if let Some(update) = slot.take() {
                self.sink.publish(update).await;
            }
        }
    }
}

/// Stores an update in its field's slot, replacing any older snapshot.
fn stash(pending: &mut [Option<FieldUpdate>; FIELD_SLOTS], update: FieldUpdate) {
    let index = match update {
        FieldUpdate::ToolSlots(_) => 0,
        FieldUpdate::BagEntries(_) => 1,
        FieldUpdate::BagWeight(_) => 2,
        FieldUpdate::TrackedTools(_) => 3,
    };
    pending[index] = Some(update);
}
