//! Host-entity adapter backed by shared mutable facts.

use std::sync::{Arc, RwLock};

use inventory_core::{HostOracle, PlayerId, Vec3};

/// Snapshot of the facts the host entity supplies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostStatus {
    pub authoritative: bool,
    pub position: Vec3,
    pub player_id: PlayerId,
    pub world_time_seconds: f64,
}

impl Default for HostStatus {
    fn default() -> Self {
        Self {
            authoritative: true,
            position: Vec3::ZERO,
            player_id: PlayerId::NONE,
            world_time_seconds: 0.0,
        }
    }
}

/// [`HostOracle`] implementation the embedding game updates as its
/// entity moves and its clock advances.
///
/// Cheap to clone; all clones observe the same facts.
#[derive(Clone, Default)]
pub struct SharedHost {
    inner: Arc<RwLock<HostStatus>>,
}

impl SharedHost {
    pub fn new(status: HostStatus) -> Self {
        Self {
            inner: Arc::new(RwLock::new(status)),
        }
    }

    pub fn set_authoritative(&self, authoritative: bool) {
        self.write().authoritative = authoritative;
    }

    pub fn set_position(&self, position: Vec3) {
        self.write().position = position;
    }

    pub fn set_player_id(&self, player_id: PlayerId) {
        self.write().player_id = player_id;
    }

    pub fn set_world_time(&self, seconds: f64) {
        self.write().world_time_seconds = seconds;
    }

    pub fn status(&self) -> HostStatus {
        *self.inner.read().expect("host status lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HostStatus> {
        self.inner.write().expect("host status lock poisoned")
    }
}

impl HostOracle for SharedHost {
    fn is_authoritative(&self) -> bool {
        self.status().authoritative
    }

    fn world_position(&self) -> Vec3 {
        self.status().position
    }

    fn owner_player_id(&self) -> PlayerId {
        self.status().player_id
    }

    fn world_time_seconds(&self) -> f64 {
        self.status().world_time_seconds
    }
}
