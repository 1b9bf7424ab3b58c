use crate::state::{PlayerId, Vec3};

/// Read-only view of the entity hosting the inventory.
///
/// This is the authority boundary: the host decides whether the current
/// execution context owns simulation responsibility, and supplies the
/// position, owning player, and monotonic clock the locator needs. The
/// engine consults it on every command and never caches its answers.
pub trait HostOracle: Send + Sync {
    /// True iff this execution context may commit state mutations.
    fn is_authoritative(&self) -> bool;

    /// Current world position of the hosting entity.
    fn world_position(&self) -> Vec3;

    /// Id of the player controlling the hosting entity.
    fn owner_player_id(&self) -> PlayerId;

    /// Monotonic world clock in seconds.
    fn world_time_seconds(&self) -> f64;
}
