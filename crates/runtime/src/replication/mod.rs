//! Replication bridge between the authority and its mirrors.
//!
//! The authority marks changed fields; the bridge coalesces and flushes
//! whole-field updates to the transport sink on a periodic tick; mirrors
//! overwrite the matching field on arrival and re-announce the change.
//! The transport itself (reliable, ordered delivery) is an external
//! collaborator behind the [`ReplicationSink`] and [`LocateDelivery`]
//! ports.

mod bridge;
mod loopback;
mod mirror;
mod update;

pub(crate) use bridge::ReplicationBridge;
pub use loopback::{LoopbackLocate, LoopbackSink, connect_mirror};
pub use mirror::Mirror;
pub use update::{
    FieldUpdate, LocateDelivery, NullLocate, NullSink, ReplicationError, ReplicationSink,
};
