//! Deterministic inventory logic shared by the authority and its mirrors.
//!
//! `inventory-core` defines the canonical rules for the tool belt, the
//! weight-limited bag, and the dropped-tool locator, and exposes pure
//! APIs reused by the runtime and by offline tooling. All state mutation
//! flows through [`engine::InventoryEngine`]; everything else here is
//! read-only data or change metadata.
pub mod command;
pub mod config;
pub mod engine;
pub mod env;
pub mod locator;
pub mod state;

pub use command::Command;
pub use config::{CurveKey, InventoryConfig, ResponseCurve};
pub use engine::{ExecutionOutcome, InventoryEngine, Reject};
pub use env::{Env, HostOracle, ItemCategory, ItemDefinition, ItemOracle, OracleError};
pub use locator::{DistanceBand, LocateReading, resolve_distance_band};
pub use state::{
    BagEntry, InventoryFields, InventoryState, ItemHandle, PlayerId, StateDelta, ToolId, ToolSlot,
    TrackedTool, Vec3,
};
