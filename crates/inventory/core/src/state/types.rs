use std::fmt;

/// Unique identifier for one physical tool instance.
///
/// Two tools of the same definition are distinguished by their `ToolId`.
/// The zero value is reserved as "no tool"; every locator operation treats
/// it the same as an unknown id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolId(pub u128);

impl ToolId {
    /// Reserved invalid identifier.
    pub const NIL: Self = Self(0);

    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns true if this id refers to an actual tool instance.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Integer id of a participating player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub i32);

impl PlayerId {
    /// Reserved identifier for "no owning player".
    pub const NONE: Self = Self(-1);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of an item definition.
///
/// The core never resolves a handle itself; it compares handles for bag
/// aggregation and asks the [`crate::env::ItemOracle`] when it needs the
/// unit weight behind one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

impl ItemHandle {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item:{}", self.0)
    }
}

/// World-space position in meters.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Component magnitude below which a vector counts as zero.
    pub const NEAR_ZERO: f32 = 1.0e-4;

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns true if every component is within the near-zero tolerance.
    #[inline]
    pub fn is_nearly_zero(self) -> bool {
        self.x.abs() <= Self::NEAR_ZERO
            && self.y.abs() <= Self::NEAR_ZERO
            && self.z.abs() <= Self::NEAR_ZERO
    }

    /// Unit vector in the direction of `self`, or zero when degenerate.
    pub fn normalized(self) -> Self {
        let length_squared = self.length_squared();
        if length_squared < f32::EPSILON {
            return Self::ZERO;
        }
        let inv = 1.0 / length_squared.sqrt();
        Self {
            x: self.x * inv,
            y: self.y * inv,
            z: self.z * inv,
        }
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// One equipment slot in the fixed tool belt.
///
/// Invariant: `occupied == tool_id.is_valid()`. Use [`ToolSlot::assign`]
/// and [`ToolSlot::clear`] rather than mutating fields directly.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolSlot {
    pub item: Option<ItemHandle>,
    pub tool_id: ToolId,
    pub occupied: bool,
}

impl ToolSlot {
    pub const EMPTY: Self = Self {
        item: None,
        tool_id: ToolId::NIL,
        occupied: false,
    };

    /// Fills the slot, overwriting whatever it held before.
    pub fn assign(&mut self, item: ItemHandle, tool_id: ToolId) {
        self.item = Some(item);
        self.tool_id = tool_id;
        self.occupied = true;
    }

    pub fn clear(&mut self) {
        self.item = None;
        self.tool_id = ToolId::NIL;
        self.occupied = false;
    }
}

/// One stack of a single item definition in the bag.
///
/// At most one entry exists per distinct handle, and `quantity >= 1`
/// always holds; an entry that would reach zero is removed instead.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BagEntry {
    pub item: ItemHandle,
    pub quantity: u32,
}

impl BagEntry {
    pub fn new(item: ItemHandle, quantity: u32) -> Self {
        Self { item, quantity }
    }
}

/// Registry record for a tool placed somewhere in the world.
///
/// Keyed by `tool_id`; re-registering an existing id updates the record in
/// place, so at most one live record exists per instance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackedTool {
    pub tool_id: ToolId,
    pub owner: PlayerId,
    pub position: Vec3,
    pub dropped: bool,
}
