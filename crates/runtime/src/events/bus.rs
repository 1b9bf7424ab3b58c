//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{InventoryEvent, LocatorEvent};

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Topic {
    /// Inventory field change notifications.
    Inventory,
    /// Locate results.
    Locator,
}

const TOPICS: [Topic; 2] = [Topic::Inventory, Topic::Locator];

/// Event wrapper that carries the topic and typed event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Inventory(InventoryEvent),
    Locator(LocatorEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Inventory(_) => Topic::Inventory,
            Event::Locator(_) => Topic::Locator,
        }
    }
}

/// Topic-based event bus.
///
/// Channels are created once at construction, so publishing is lock-free
/// fan-out; subscribers only receive events for the topic they asked for.
/// Delivery order per topic is publish order.
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic.
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = TOPICS
            .iter()
            .map(|&topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("no subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic.
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels
            .get(&topic)
            .expect("topic channel not initialized")
            .subscribe()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
