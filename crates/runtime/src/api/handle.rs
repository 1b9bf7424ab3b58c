//! Cloneable façade for issuing requests to the authority.
//!
//! [`InventoryHandle`] hides the channel plumbing. Mutating requests are
//! fire-and-forget: they carry no return value and report no errors; a
//! rejected request is observable only as the absence of the matching
//! change notification. Read queries go over a reply channel.

use std::sync::Arc;

use tokio::sync::{broadcast, oneshot};
use tracing::debug;

use inventory_core::{
    Command, InventoryConfig, InventoryState, ItemHandle, PlayerId, ToolId, Vec3,
};

use crate::events::{Event, EventBus, Topic};
use crate::worker::Request;

use super::errors::{Result, RuntimeError};

/// Client-facing handle to one inventory authority.
#[derive(Clone)]
pub struct InventoryHandle {
    request_tx: tokio::sync::mpsc::Sender<Request>,
    event_bus: EventBus,
    balance: Arc<InventoryConfig>,
}

impl InventoryHandle {
    pub(crate) fn new(
        request_tx: tokio::sync::mpsc::Sender<Request>,
        event_bus: EventBus,
        balance: Arc<InventoryConfig>,
    ) -> Self {
        Self {
            request_tx,
            event_bus,
            balance,
        }
    }

    /// Request that a tool be placed into `slot_index`.
    ///
    /// No-op without an item definition; an occupied slot is overwritten.
    pub async fn request_assign_slot(
        &self,
        item: Option<ItemHandle>,
        tool_id: ToolId,
        slot_index: usize,
    ) {
        let Some(item) = item else {
            return;
        };
        self.forward(Command::AssignSlot {
            item,
            tool_id,
            slot_index,
        })
        .await;
    }

    /// Request that `slot_index` be emptied.
    pub async fn request_clear_slot(&self, slot_index: usize) {
        self.forward(Command::ClearSlot { slot_index }).await;
    }

    /// Request that `quantity` of an item be added to the bag.
    ///
    /// No-op without an item definition or a positive quantity.
    pub async fn request_add_bag_item(&self, item: Option<ItemHandle>, quantity: u32) {
        let Some(item) = item else {
            return;
        };
        if quantity == 0 {
            return;
        }
        self.forward(Command::AddBagItem { item, quantity }).await;
    }

    /// Request that up to `quantity` of an item be removed from the bag.
    pub async fn request_remove_bag_item(&self, item: Option<ItemHandle>, quantity: u32) {
        let Some(item) = item else {
            return;
        };
        if quantity == 0 {
            return;
        }
        self.forward(Command::RemoveBagItem { item, quantity }).await;
    }

    /// Request registration of a dropped tool with the locator.
    pub async fn request_register_dropped(
        &self,
        tool_id: ToolId,
        owner: PlayerId,
        position: Vec3,
    ) {
        self.forward(Command::RegisterDropped {
            tool_id,
            owner,
            position,
        })
        .await;
    }

    /// Request a position update for an already-registered dropped tool.
    pub async fn request_update_dropped_location(&self, tool_id: ToolId, position: Vec3) {
        self.forward(Command::UpdateDroppedLocation { tool_id, position })
            .await;
    }

    /// Request removal of a dropped tool from the locator registry.
    pub async fn request_remove_dropped(&self, tool_id: ToolId) {
        self.forward(Command::RemoveDropped { tool_id }).await;
    }

    /// Request a directional hint toward one of the requester's dropped
    /// tools. The result, if the request is accepted, arrives through the
    /// locate delivery channel and the `Locator` topic.
    pub async fn request_locate(&self, tool_id: ToolId) {
        self.forward(Command::Locate { tool_id }).await;
    }

    async fn forward(&self, command: Command) {
        if self
            .request_tx
            .send(Request::Execute(command))
            .await
            .is_err()
        {
            debug!("inventory authority gone; request dropped");
        }
    }

    /// Query a read-only snapshot of the authoritative state.
    pub async fn query_state(&self) -> Result<InventoryState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.request_tx
            .send(Request::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::RequestChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Current aggregate bag weight.
    pub async fn bag_weight(&self) -> Result<f32> {
        Ok(self.query_state().await?.bag_weight)
    }

    /// Movement-speed multiplier at the current bag weight.
    pub async fn movement_speed_multiplier(&self) -> Result<f32> {
        Ok(self
            .balance
            .movement_speed_multiplier(self.bag_weight().await?))
    }

    /// Stamina-drain multiplier at the current bag weight.
    pub async fn stamina_drain_multiplier(&self) -> Result<f32> {
        Ok(self
            .balance
            .stamina_drain_multiplier(self.bag_weight().await?))
    }

    /// The balance configuration this inventory was built with.
    pub fn balance(&self) -> &InventoryConfig {
        &self.balance
    }

    /// Subscribe to events from a specific topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage.
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
