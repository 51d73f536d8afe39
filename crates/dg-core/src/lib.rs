//! dg-core: Procedural dungeon layout generation
//!
//! Turns a [`GenConfig`] into a square grid of empty, room, corridor and
//! doorway cells whose occupied cells form one 4-connected region.
//!
//! The pipeline runs in a fixed order, every stage mutating the same grid:
//! rooms, corridors, doorways, smoothing, then the connectivity pass.
//! Rendering, meshing and entity spawning live outside this crate and only
//! read the finished [`Layout`].
//!
//! Supports `no_std` environments by disabling the default `std` feature.
//! Entropy seeding and JSON configuration are gated behind `cfg(feature = "std")`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::boxed::Box;
    pub use alloc::format;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod generation;
pub mod grid;

mod config;
mod consts;
mod error;
mod layout;
mod rng;

pub use config::GenConfig;
pub use consts::*;
pub use error::{GenError, GenResult};
pub use generation::{DungeonGenerator, Room, generate};
pub use grid::{Direction, Grid, NoopObserver, Pos, Tile, TileKind, TileObserver};
pub use layout::{GenStats, Layout};
pub use rng::GenRng;
