//! Generation configuration
//!
//! Serializable so the CLI can load it from JSON; missing fields fall back
//! to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};
use crate::{
    DEFAULT_MAP_SIZE, DEFAULT_MAX_ROOM_RADIUS, DEFAULT_ROOM_GOAL, DEFAULT_SMOOTHNESS,
    MAX_MAP_SIZE,
};

/// Parameters for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Side length of the square grid
    pub map_size: usize,
    /// Number of rooms to attempt (clamped to `map_size²`)
    pub room_goal: usize,
    /// Number of smoothing passes
    pub smoothness: usize,
    /// Largest room radius; rooms have side `2r + 1`
    pub max_room_radius: usize,
    /// Seed for the generator's RNG
    pub seed: u64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            map_size: DEFAULT_MAP_SIZE,
            room_goal: DEFAULT_ROOM_GOAL,
            smoothness: DEFAULT_SMOOTHNESS,
            max_room_radius: DEFAULT_MAX_ROOM_RADIUS,
            seed: 0,
        }
    }
}

impl GenConfig {
    /// Create a configuration with the given size and room goal, defaults elsewhere
    pub fn new(map_size: usize, room_goal: usize) -> Self {
        Self {
            map_size,
            room_goal,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_smoothness(mut self, smoothness: usize) -> Self {
        self.smoothness = smoothness;
        self
    }

    pub fn with_max_room_radius(mut self, max_room_radius: usize) -> Self {
        self.max_room_radius = max_room_radius;
        self
    }

    /// Reject configurations no stage can run on
    pub fn validate(&self) -> GenResult<()> {
        if self.map_size == 0 {
            return Err(GenError::DegenerateConfig {
                field: "map_size",
                value: self.map_size,
            });
        }
        if self.max_room_radius == 0 {
            return Err(GenError::DegenerateConfig {
                field: "max_room_radius",
                value: self.max_room_radius,
            });
        }
        if self.map_size > MAX_MAP_SIZE {
            return Err(GenError::MapTooLarge {
                size: self.map_size,
                max: MAX_MAP_SIZE,
            });
        }
        Ok(())
    }

    /// Room goal clamped to the number of cells in the grid
    pub fn effective_room_goal(&self) -> usize {
        self.room_goal.min(self.map_size.saturating_mul(self.map_size))
    }

    /// Parse a configuration from JSON text
    #[cfg(feature = "std")]
    pub fn from_json_str(text: &str) -> GenResult<Self> {
        serde_json::from_str(text).map_err(|e| GenError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = GenConfig::default();
        assert_eq!(config.map_size, 16);
        assert_eq!(config.room_goal, 8);
        assert_eq!(config.smoothness, 2);
        assert_eq!(config.max_room_radius, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_map_size_rejected() {
        let config = GenConfig::new(0, 4);
        assert_eq!(
            config.validate(),
            Err(GenError::DegenerateConfig {
                field: "map_size",
                value: 0
            })
        );
    }

    #[test]
    fn test_zero_radius_rejected() {
        let config = GenConfig::new(16, 4).with_max_room_radius(0);
        assert!(matches!(
            config.validate(),
            Err(GenError::DegenerateConfig {
                field: "max_room_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_oversized_map_rejected() {
        let config = GenConfig::new(MAX_MAP_SIZE + 1, 4);
        assert!(matches!(config.validate(), Err(GenError::MapTooLarge { .. })));
    }

    #[test]
    fn test_room_goal_clamped() {
        let config = GenConfig::new(3, 100);
        assert_eq!(config.effective_room_goal(), 9);
        let config = GenConfig::new(16, 5);
        assert_eq!(config.effective_room_goal(), 5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GenConfig::from_json_str(r#"{ "map_size": 32, "seed": 9 }"#).unwrap();
        assert_eq!(config.map_size, 32);
        assert_eq!(config.seed, 9);
        assert_eq!(config.room_goal, DEFAULT_ROOM_GOAL);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = GenConfig::from_json_str("{ map_size: }").unwrap_err();
        assert!(matches!(err, GenError::Config(_)));
    }
}
