//! High-level runtime orchestrator.
//!
//! The runtime owns the authority worker and the replication bridge,
//! wires up the request/event channels, and exposes a builder-based API
//! for embedders to attach their oracles and transport.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use inventory_core::{HostOracle, InventoryConfig, InventoryState, ItemOracle};

use crate::api::{InventoryHandle, Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::replication::{LocateDelivery, NullLocate, NullSink, ReplicationBridge, ReplicationSink};
use crate::worker::AuthorityWorker;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub request_buffer_size: usize,
    /// How often coalesced field updates are flushed to the sink.
    pub replication_flush_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            request_buffer_size: 32,
            replication_flush_interval: Duration::from_millis(100),
        }
    }
}

/// Main runtime that hosts one inventory authority.
///
/// Design: the runtime owns the background tasks; [`InventoryHandle`]
/// provides a cloneable façade for clients.
pub struct Runtime {
    handle: InventoryHandle,
    worker_handle: JoinHandle<()>,
    bridge_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    pub fn handle(&self) -> InventoryHandle {
        self.handle.clone()
    }

    /// Subscribe to events from a specific topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Shutdown the runtime gracefully.
    ///
    /// Remaining queued requests are processed and pending replication is
    /// flushed before the tasks exit. Handles cloned out of this runtime
    /// must be dropped first or the worker will keep waiting on them.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;
        self.bridge_handle.await.map_err(RuntimeError::WorkerJoin)?;
        Ok(())
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    runtime_config: RuntimeConfig,
    balance: InventoryConfig,
    items: Option<Arc<dyn ItemOracle>>,
    host: Option<Arc<dyn HostOracle>>,
    sink: Option<Arc<dyn ReplicationSink>>,
    locate_delivery: Option<Arc<dyn LocateDelivery>>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            runtime_config: RuntimeConfig::default(),
            balance: InventoryConfig::default(),
            items: None,
            host: None,
            sink: None,
            locate_delivery: None,
        }
    }

    pub fn runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Balance configuration; immutable once the runtime is spawned.
    pub fn balance(mut self, balance: InventoryConfig) -> Self {
        self.balance = balance;
        self
    }

    /// Item definition oracle (required).
    pub fn items(mut self, items: Arc<dyn ItemOracle>) -> Self {
        self.items = Some(items);
        self
    }

    /// Host entity oracle (required).
    pub fn host(mut self, host: Arc<dyn HostOracle>) -> Self {
        self.host = Some(host);
        self
    }

    /// Transport sink for replication updates; defaults to discarding.
    pub fn replication_sink(mut self, sink: Arc<dyn ReplicationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Addressed channel for locate readings; defaults to discarding.
    pub fn locate_delivery(mut self, delivery: Arc<dyn LocateDelivery>) -> Self {
        self.locate_delivery = Some(delivery);
        self
    }

    /// Spawns the worker tasks and returns the running runtime.
    pub fn spawn(self) -> Result<Runtime> {
        let items = self.items.ok_or(RuntimeError::MissingOracles)?;
        let host = self.host.ok_or(RuntimeError::MissingOracles)?;
        let sink = self.sink.unwrap_or_else(|| Arc::new(NullSink));
        let locate_delivery = self
            .locate_delivery
            .unwrap_or_else(|| Arc::new(NullLocate));

        let balance = Arc::new(self.balance);
        let event_bus = EventBus::with_capacity(self.runtime_config.event_buffer_size);
        let (request_tx, request_rx) = mpsc::channel(self.runtime_config.request_buffer_size);
        let (update_tx, update_rx) = mpsc::channel(64);

        // Authority-side state is created here, sized from configuration,
        // and lives for the runtime's lifetime.
        let state = InventoryState::new(&balance);

        let worker = AuthorityWorker::new(
            state,
            items,
            host,
            Arc::clone(&balance),
            request_rx,
            event_bus.clone(),
            update_tx,
            locate_delivery,
        );
        let worker_handle = tokio::spawn(worker.run());

        let bridge = ReplicationBridge::new(
            update_rx,
            sink,
            self.runtime_config.replication_flush_interval,
        );
        let bridge_handle = tokio::spawn(bridge.run());

        Ok(Runtime {
            handle: InventoryHandle::new(request_tx, event_bus, balance),
            worker_handle,
            bridge_handle,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
