//! Generation constants

/// Default map side length
pub const DEFAULT_MAP_SIZE: usize = 16;

/// Default number of rooms to attempt
pub const DEFAULT_ROOM_GOAL: usize = 8;

/// Default number of smoothing passes
pub const DEFAULT_SMOOTHNESS: usize = 2;

/// Default largest room radius (a radius-r room has side 2r+1)
pub const DEFAULT_MAX_ROOM_RADIUS: usize = 2;

/// Largest accepted map side length
pub const MAX_MAP_SIZE: usize = 4096;

/// Consecutive failed placements before a room slot is abandoned
pub const MAX_ROOM_ATTEMPTS: u32 = 10;

/// Probability that a surviving doorway is culled in each smoothing pass
pub const DOORWAY_CULL_CHANCE: f64 = 0.45;

/// Distance along an axis at which two doorways count as too close
pub const DOORWAY_MIN_SPACING: usize = 2;
