//! Non-authoritative replica of the inventory state.

use std::sync::{Arc, RwLock};

use inventory_core::{BagEntry, InventoryConfig, InventoryState, ToolSlot, TrackedTool};

use crate::events::{Event, EventBus, InventoryEvent, Topic};

use super::update::FieldUpdate;

/// Read-only replica kept eventually consistent by field updates.
///
/// A mirror never mutates its own state: the only write path is
/// [`Mirror::apply`], invoked by the transport when a field arrives, and
/// each arrival fires the same notification the authority fired locally
/// when it committed the change. Tracked-tool arrivals fire nothing; the
/// registry is only read on the authority when resolving locates.
pub struct Mirror {
    state: RwLock<InventoryState>,
    balance: Arc<InventoryConfig>,
    bus: EventBus,
}

impl Mirror {
    pub fn new(balance: Arc<InventoryConfig>) -> Self {
        Self {
            state: RwLock::new(InventoryState::new(&balance)),
            balance,
            bus: EventBus::new(),
        }
    }

    /// Overwrites one replicated field and re-announces the change.
    pub fn apply(&self, update: FieldUpdate) {
        let event = {
            let mut state = self.state.write().expect("mirror state lock poisoned");
            match update {
                FieldUpdate::ToolSlots(slots) => {
                    state.tool_slots = slots;
                    Some(InventoryEvent::SlotsChanged)
                }
                FieldUpdate::BagEntries(entries) => {
                    state.bag = entries;
                    Some(InventoryEvent::BagChanged)
                }
                FieldUpdate::BagWeight(weight) => {
                    state.bag_weight = weight;
                    Some(InventoryEvent::WeightChanged { weight })
                }
                FieldUpdate::TrackedTools(tracked) => {
                    state.tracked_tools = tracked;
                    None
                }
            }
        };

        if let Some(event) = event {
            self.bus.publish(Event::Inventory(event));
        }
    }

    /// Snapshot of the whole replica.
    pub fn state(&self) -> InventoryState {
        self.state.read().expect("mirror state lock poisoned").clone()
    }

    pub fn tool_slots(&self) -> Vec<ToolSlot> {
        self.state().tool_slots
    }

    pub fn bag_entries(&self) -> Vec<BagEntry> {
        self.state().bag
    }

    pub fn bag_weight(&self) -> f32 {
        self.state().bag_weight
    }

    pub fn tracked_tools(&self) -> Vec<TrackedTool> {
        self.state().tracked_tools
    }

    /// Movement-speed multiplier at the replica's current bag weight.
    pub fn movement_speed_multiplier(&self) -> f32 {
        self.balance.movement_speed_multiplier(self.bag_weight())
    }

    /// Stamina-drain multiplier at the replica's current bag weight.
    pub fn stamina_drain_multiplier(&self) -> f32 {
        self.balance.stamina_drain_multiplier(self.bag_weight())
    }

    pub fn subscribe(&self, topic: Topic) -> tokio::sync::broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    /// The mirror's local notification bus.
    pub fn event_bus(&self) -> EventBus {
        self.bus.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{ItemHandle, PlayerId, ToolId, Vec3};

    fn mirror() -> Mirror {
        Mirror::new(Arc::new(InventoryConfig::default()))
    }

    #[tokio::test]
    async fn bag_weight_arrival_fires_weight_changed_with_value() {
        let mirror = mirror();
        let mut rx = mirror.subscribe(Topic::Inventory);

        mirror.apply(FieldUpdate::BagWeight(6.5));

        assert_eq!(mirror.bag_weight(), 6.5);
        assert_eq!(
            rx.recv().await.unwrap(),
            Event::Inventory(InventoryEvent::WeightChanged { weight: 6.5 })
        );
    }

    #[tokio::test]
    async fn tracked_tool_arrival_is_presentation_inert() {
        let mirror = mirror();
        let mut rx = mirror.subscribe(Topic::Inventory);

        mirror.apply(FieldUpdate::TrackedTools(vec![TrackedTool {
            tool_id: ToolId::new(1),
            owner: PlayerId::new(7),
            position: Vec3::ZERO,
            dropped: true,
        }]));

        assert_eq!(mirror.tracked_tools().len(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn slot_and_bag_arrivals_fire_their_notifications() {
        let mirror = mirror();
        let mut rx = mirror.subscribe(Topic::Inventory);

        let mut slot = inventory_core::ToolSlot::EMPTY;
        slot.assign(ItemHandle::new(1), ToolId::new(2));
        mirror.apply(FieldUpdate::ToolSlots(vec![slot]));
        mirror.apply(FieldUpdate::BagEntries(vec![BagEntry::new(
            ItemHandle::new(1),
            3,
        )]));

        assert_eq!(
            rx.recv().await.unwrap(),
            Event::Inventory(InventoryEvent::SlotsChanged)
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            Event::Inventory(InventoryEvent::BagChanged)
        );
        assert!(mirror.tool_slots()[0].occupied);
        assert_eq!(mirror.bag_entries()[0].quantity, 3);
    }
}
