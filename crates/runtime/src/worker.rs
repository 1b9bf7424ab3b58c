//! Authority worker that owns the authoritative [`InventoryState`].
//!
//! Receives requests from [`crate::api::InventoryHandle`], executes them
//! via [`InventoryEngine`], publishes change notifications, and hands
//! changed fields to the replication bridge. This is the single logical
//! writer: nothing else ever touches the authoritative state.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use inventory_core::{
    Command, Env, HostOracle, InventoryConfig, InventoryEngine, InventoryFields, InventoryState,
    ItemOracle, LocateReading,
};

use crate::events::{Event, EventBus, InventoryEvent, LocatorEvent};
use crate::replication::{FieldUpdate, LocateDelivery};

/// Requests that can be sent to the authority worker.
pub(crate) enum Request {
    /// Execute a mutation. Fire-and-forget: rejections are logged and
    /// dropped, never reported back.
    Execute(Command),
    /// Query a clone of the current state (read-only).
    QueryState {
        reply: oneshot::Sender<InventoryState>,
    },
}

pub(crate) struct AuthorityWorker {
    state: InventoryState,
    items: Arc<dyn ItemOracle>,
    host: Arc<dyn HostOracle>,
    balance: Arc<InventoryConfig>,
    request_rx: mpsc::Receiver<Request>,
    event_bus: EventBus,
    update_tx: mpsc::Sender<FieldUpdate>,
    locate_delivery: Arc<dyn LocateDelivery>,
}

impl AuthorityWorker {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        state: InventoryState,
        items: Arc<dyn ItemOracle>,
        host: Arc<dyn HostOracle>,
        balance: Arc<InventoryConfig>,
        request_rx: mpsc::Receiver<Request>,
        event_bus: EventBus,
        update_tx: mpsc::Sender<FieldUpdate>,
        locate_delivery: Arc<dyn LocateDelivery>,
    ) -> Self {
        Self {
            state,
            items,
            host,
            balance,
            request_rx,
            event_bus,
            update_tx,
            locate_delivery,
        }
    }

    /// Main worker loop. Exits when every request sender is gone.
    pub(crate) async fn run(mut self) {
        info!(
            slots = self.state.tool_slots.len(),
            "inventory authority worker started"
        );

        // Initial replication: late-attaching mirrors converge from a
        // full snapshot of every replicated field.
        if self.host.is_authoritative() {
            self.queue_updates(InventoryFields::all()).await;
        }

        while let Some(request) = self.request_rx.recv().await {
            match request {
                Request::Execute(command) => self.handle_command(command).await,
                Request::QueryState { reply } => {
                    if reply.send(self.state.clone()).is_err() {
                        debug!("state query reply channel closed (caller dropped)");
                    }
                }
            }
        }

        info!("inventory authority worker shutting down");
    }

    async fn handle_command(&mut self, command: Command) {
        let env = Env::with_all(self.items.as_ref(), self.host.as_ref(), &self.balance);

        match InventoryEngine::new(&mut self.state).execute(&env, &command) {
            Ok(outcome) => {
                self.commit(outcome.delta.fields, outcome.locate).await;
            }
            // Fail-closed, fail-silent: the caller only ever observes the
            // absence of a change notification.
            Err(reject) => {
                debug!(command = command.name(), %reject, "inventory request rejected");
            }
        }
    }

    /// Publishes notifications and queues replication for changed fields,
    /// in canonical field order, then routes an accepted locate reading.
    async fn commit(&mut self, fields: InventoryFields, locate: Option<LocateReading>) {
        if fields.contains(InventoryFields::TOOL_SLOTS) {
            self.event_bus
                .publish(Event::Inventory(InventoryEvent::SlotsChanged));
        }
        if fields.contains(InventoryFields::BAG_ENTRIES) {
            self.event_bus
                .publish(Event::Inventory(InventoryEvent::BagChanged));
        }
        if fields.contains(InventoryFields::BAG_WEIGHT) {
            self.event_bus
                .publish(Event::Inventory(InventoryEvent::WeightChanged {
                    weight: self.state.bag_weight,
                }));
        }
        // Tracked tools replicate but never notify.

        self.queue_updates(fields).await;

        if let Some(reading) = locate {
            let recipient = self.host.owner_player_id();
            self.locate_delivery.deliver(recipient, reading).await;
            self.event_bus
                .publish(Event::Locator(LocatorEvent::LocateResult {
                    tool_id: reading.tool_id,
                    band: reading.band,
                    distance: reading.distance,
                }));
        }
    }

    async fn queue_updates(&self, fields: InventoryFields) {
        if fields.contains(InventoryFields::TOOL_SLOTS) {
            self.queue(FieldUpdate::ToolSlots(self.state.tool_slots.clone()))
                .await;
        }
        if fields.contains(InventoryFields::BAG_ENTRIES) {
            self.queue(FieldUpdate::BagEntries(self.state.bag.clone()))
                .await;
        }
        if fields.contains(InventoryFields::BAG_WEIGHT) {
            self.queue(FieldUpdate::BagWeight(self.state.bag_weight)).await;
        }
        if fields.contains(InventoryFields::TRACKED_TOOLS) {
            self.queue(FieldUpdate::TrackedTools(self.state.tracked_tools.clone()))
                .await;
        }
    }

    async fn queue(&self, update: FieldUpdate) {
        if self.update_tx.send(update).await.is_err() {
            debug!("replication bridge gone; update dropped");
        }
    }
}
