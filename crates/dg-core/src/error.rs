//! Generation errors
//!
//! Configuration problems are fatal and reported before any stage runs.
//! [`GenError::RoomUnplaceable`] is soft: the room placer produces it for an
//! abandoned slot and the pipeline logs it instead of propagating it.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use thiserror::Error;

/// Errors produced while configuring or running the generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("degenerate configuration: {field} = {value}")]
    DegenerateConfig { field: &'static str, value: usize },

    #[error("map size {size} exceeds the maximum of {max}")]
    MapTooLarge { size: usize, max: usize },

    #[error("room slot {slot} abandoned after {attempts} failed placements")]
    RoomUnplaceable { slot: usize, attempts: u32 },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GenError {
    /// Whether generation can carry on after this error
    pub fn is_soft(&self) -> bool {
        matches!(self, GenError::RoomUnplaceable { .. })
    }
}

/// Result alias used across the crate
pub type GenResult<T> = Result<T, GenError>;
