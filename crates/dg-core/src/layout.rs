//! Finished generation output
//!
//! Downstream mesh and spawn code reads this; nothing here is mutated after
//! [`crate::DungeonGenerator::generate`] returns it.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use crate::generation::{ComponentSummary, Room, SmoothStats, is_single_component};
use crate::grid::{Grid, Pos, TileKind};

/// Per-stage counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenStats {
    pub rooms_placed: usize,
    pub rooms_abandoned: usize,
    pub corridors_carved: usize,
    pub doorways_inserted: usize,
    pub smoothing: SmoothStats,
    pub connectivity: ComponentSummary,
}

/// A finalized dungeon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Seed the layout was generated from
    pub seed: u64,
    pub grid: Grid,
    /// Rooms as stamped, before later stages trimmed anything
    pub rooms: Vec<Room>,
    /// Room cells, row-major; candidate enemy spawn points
    pub spawn_points: Vec<Pos>,
    /// Dead-end corridor cells, row-major; candidate prop anchors
    pub prefab_anchors: Vec<Pos>,
    pub stats: GenStats,
}

impl Layout {
    /// Derive spawn points and anchors from a finished grid
    pub fn from_grid(seed: u64, grid: Grid, rooms: Vec<Room>, stats: GenStats) -> Self {
        let spawn_points = grid.positions_of(TileKind::Room);
        let prefab_anchors = grid
            .positions()
            .filter(|p| grid.is_kind(*p, TileKind::Corridor) && grid.occupied_neighbors(*p) == 1)
            .collect();

        Self {
            seed,
            grid,
            rooms,
            spawn_points,
            prefab_anchors,
            stats,
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Occupied cells form at most one 4-connected component
    pub fn is_connected(&self) -> bool {
        is_single_component(&self.grid)
    }

    /// Render as text, one row per line
    pub fn to_ascii(&self) -> String {
        self.grid.to_string()
    }
}
