//! Oracle adapters the runtime wires into the engine environment.

mod host;

pub use host::{HostStatus, SharedHost};
