//! Smoothing passes
//!
//! Each pass reads a frozen snapshot of the grid and writes removals into a
//! separate output grid, which becomes the next pass's snapshot. Decisions
//! inside a pass therefore never see each other's removals.
//!
//! Per occupied interior cell, in order:
//! 1. a corridor or doorway with at most one occupied neighbour is removed
//! 2. a doorway removes any doorway two cells away along either axis
//! 3. a doorway is culled at random with [`DOORWAY_CULL_CHANCE`]
//!
//! Steps 2 and 3 only run for cells at least two cells from the edge.

use serde::{Deserialize, Serialize};

use crate::grid::{Direction, Grid, Pos, TileKind, TileObserver};
use crate::rng::GenRng;
use crate::{DOORWAY_CULL_CHANCE, DOORWAY_MIN_SPACING};

/// Removal counts across all passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmoothStats {
    pub passes: usize,
    pub dead_ends_removed: usize,
    pub crowded_doorways_removed: usize,
    pub doorways_culled: usize,
}

impl SmoothStats {
    pub fn total_removed(&self) -> usize {
        self.dead_ends_removed + self.crowded_doorways_removed + self.doorways_culled
    }
}

/// Run `passes` smoothing passes over `grid`
pub fn smooth<O: TileObserver + ?Sized>(
    grid: &mut Grid,
    passes: usize,
    rng: &mut GenRng,
    observer: &mut O,
) -> SmoothStats {
    let mut stats = SmoothStats::default();

    for _ in 0..passes {
        *grid = smooth_pass(grid, rng, observer, &mut stats);
        stats.passes += 1;
    }

    stats
}

/// One pass: read `snapshot`, return the grid with this pass's removals
fn smooth_pass<O: TileObserver + ?Sized>(
    snapshot: &Grid,
    rng: &mut GenRng,
    observer: &mut O,
    stats: &mut SmoothStats,
) -> Grid {
    let mut output = snapshot.clone();

    for pos in snapshot.interior_positions() {
        let tile = snapshot.tile(pos);
        if !tile.occupied {
            continue;
        }

        if tile.kind.is_passage()
            && snapshot.occupied_neighbors(pos) <= 1
            && output.clear_tile(pos, observer)
        {
            stats.dead_ends_removed += 1;
        }

        if tile.kind != TileKind::Doorway || !snapshot.is_inset(pos, DOORWAY_MIN_SPACING) {
            continue;
        }

        for other in doorways_in_reach(snapshot, pos) {
            if output.clear_tile(other, observer) {
                stats.crowded_doorways_removed += 1;
            }
        }

        if rng.chance(DOORWAY_CULL_CHANCE) && output.clear_tile(pos, observer) {
            stats.doorways_culled += 1;
        }
    }

    output
}

/// Doorways exactly [`DOORWAY_MIN_SPACING`] cells away along either axis
fn doorways_in_reach(grid: &Grid, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |dir| pos.offset(dir, DOORWAY_MIN_SPACING))
        .filter(|p| grid.is_kind(*p, TileKind::Doorway))
}
