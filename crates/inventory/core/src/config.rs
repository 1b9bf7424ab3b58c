//! Balance configuration injected at construction.
//!
//! [`InventoryConfig`] is plain data: tuning scalars plus two optional
//! response curves mapping current bag weight to movement and stamina
//! multipliers. It is handed to the component once and never mutated.

/// One keyframe of a [`ResponseCurve`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveKey {
    pub input: f32,
    pub value: f32,
}

impl CurveKey {
    pub fn new(input: f32, value: f32) -> Self {
        Self { input, value }
    }
}

/// Piecewise-linear response curve.
///
/// Evaluation clamps to the first/last keyframe outside the keyed range
/// and interpolates linearly between neighbors inside it. A curve with no
/// keyframes evaluates to the neutral multiplier 1.0.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawCurve"))]
pub struct ResponseCurve {
    keys: Vec<CurveKey>,
}

impl ResponseCurve {
    /// Neutral multiplier returned when there is nothing to sample.
    pub const NEUTRAL: f32 = 1.0;

    /// Builds a curve, sorting keyframes by input.
    pub fn new(mut keys: Vec<CurveKey>) -> Self {
        keys.sort_by(|a, b| a.input.total_cmp(&b.input));
        Self { keys }
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Samples the curve at `input`.
    pub fn evaluate(&self, input: f32) -> f32 {
        let Some(first) = self.keys.first() else {
            return Self::NEUTRAL;
        };
        if input <= first.input {
            return first.value;
        }
        // keys is non-empty here, so last() always yields a key
        let last = self.keys[self.keys.len() - 1];
        if input >= last.input {
            return last.value;
        }

        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if input <= b.input {
                let span = b.input - a.input;
                if span <= f32::EPSILON {
                    return b.value;
                }
                let t = (input - a.input) / span;
                return a.value + (b.value - a.value) * t;
            }
        }

        last.value
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCurve {
    keys: Vec<CurveKey>,
}

#[cfg(feature = "serde")]
impl From<RawCurve> for ResponseCurve {
    fn from(raw: RawCurve) -> Self {
        ResponseCurve::new(raw.keys)
    }
}

/// Tuning parameters for one inventory component.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InventoryConfig {
    /// Number of tool slots created at initialization.
    pub max_tool_slots: u32,
    /// Weight capacity of the bag; zero or negative means unlimited.
    pub max_bag_weight: f32,
    /// Minimum seconds between accepted locate requests; zero or negative
    /// disables the rate limit.
    pub locate_cooldown_seconds: f32,
    /// Distance at or below which a located tool reads as Near.
    pub near_distance: f32,
    /// Distance at or below which a located tool reads as Medium.
    pub medium_distance: f32,
    /// Bag weight to movement-speed multiplier; absent = neutral.
    pub movement_speed_by_weight: Option<ResponseCurve>,
    /// Bag weight to stamina-drain multiplier; absent = neutral.
    pub stamina_drain_by_weight: Option<ResponseCurve>,
}

impl InventoryConfig {
    pub const DEFAULT_TOOL_SLOTS: u32 = 3;

    pub fn new() -> Self {
        Self {
            max_tool_slots: Self::DEFAULT_TOOL_SLOTS,
            max_bag_weight: 0.0,
            locate_cooldown_seconds: 0.0,
            near_distance: 0.0,
            medium_distance: 0.0,
            movement_speed_by_weight: None,
            stamina_drain_by_weight: None,
        }
    }

    /// Movement-speed multiplier for the given bag weight.
    pub fn movement_speed_multiplier(&self, bag_weight: f32) -> f32 {
        curve_value_or_neutral(self.movement_speed_by_weight.as_ref(), bag_weight)
    }

    /// Stamina-drain multiplier for the given bag weight.
    pub fn stamina_drain_multiplier(&self, bag_weight: f32) -> f32 {
        curve_value_or_neutral(self.stamina_drain_by_weight.as_ref(), bag_weight)
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn curve_value_or_neutral(curve: Option<&ResponseCurve>, input: f32) -> f32 {
    match curve {
        Some(curve) => curve.evaluate(input),
        None => ResponseCurve::NEUTRAL,
    }
}
