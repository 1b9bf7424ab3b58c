//! Runtime orchestration for the server-authoritative inventory.
//!
//! This crate wires the pure engine from `inventory-core` into a running
//! component: a single authority worker validates and applies requests,
//! a topic-based event bus fans out change notifications, and the
//! replication bridge keeps read-only mirrors eventually consistent over
//! a pluggable transport.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based notification bus
//! - [`replication`] carries field updates to mirrors and locate
//!   readings to their requester
//! - [`oracle`] provides adapters for the host-entity boundary
pub mod api;
pub mod events;
pub mod oracle;
pub mod replication;
pub mod runtime;

mod worker;

pub use api::{InventoryHandle, Result, RuntimeError};
pub use events::{Event, EventBus, InventoryEvent, LocatorEvent, Topic};
pub use oracle::{HostStatus, SharedHost};
pub use replication::{
    FieldUpdate, LocateDelivery, LoopbackLocate, LoopbackSink, Mirror, NullLocate, NullSink,
    ReplicationError, ReplicationSink, connect_mirror,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
