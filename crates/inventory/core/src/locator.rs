//! Distance banding and locate results.

use crate::state::{ToolId, Vec3};

/// Coarse distance classification reported instead of a raw range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceBand {
    Near,
    Medium,
    Far,
    /// Banding disabled or misconfigured (a threshold is not positive).
    Unknown,
}

/// Outcome of an accepted locate request.
///
/// The full reading, direction included, travels only over the addressed
/// reply channel to the requesting player; broadcast-shaped notifications
/// carry band and distance without the direction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocateReading {
    pub tool_id: ToolId,
    /// Unit vector from the requester toward the tool, or zero when the
    /// two positions coincide.
    pub direction: Vec3,
    pub band: DistanceBand,
    pub distance: f32,
}

/// Maps a distance onto a band using the configured thresholds.
///
/// `Near` is checked first, so a distance equal to `near` classifies as
/// Near even when `near >= medium` (a misconfigured but deterministic
/// mapping). Either threshold at or below zero disables banding.
pub fn resolve_distance_band(distance: f32, near: f32, medium: f32) -> DistanceBand {
    if near <= 0.0 || medium <= 0.0 {
        return DistanceBand::Unknown;
    }

    if distance <= near {
        DistanceBand::Near
    } else if distance <= medium {
        DistanceBand::Medium
    } else {
        DistanceBand::Far
    }
}
