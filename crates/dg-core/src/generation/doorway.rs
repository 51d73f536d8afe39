//! Doorway insertion
//!
//! An empty interior cell becomes a doorway when it sits in a one-cell gap
//! between two solid (non-doorway) occupied cells on opposite sides, and
//! touches nothing else.

use crate::grid::{Direction, Grid, Pos, TileKind};

/// Promote every qualifying gap to a doorway, scanning row-major
///
/// Cells are evaluated against the grid as it is being updated, so a new
/// doorway no longer counts as solid for the cells after it. Returns the
/// number of doorways inserted.
pub fn insert_doorways(grid: &mut Grid) -> usize {
    let mut inserted = 0;

    for pos in grid.interior_positions() {
        if is_doorway_gap(grid, pos) {
            grid.set_kind(pos, TileKind::Doorway);
            inserted += 1;
        }
    }

    inserted
}

/// Check whether `pos` bridges two solid cells across one axis
pub fn is_doorway_gap(grid: &Grid, pos: Pos) -> bool {
    if !grid.is_interior(pos) || grid.occupied(pos) {
        return false;
    }

    let bridges_horizontal =
        is_solid(grid, pos, Direction::West) && is_solid(grid, pos, Direction::East);
    let bridges_vertical =
        is_solid(grid, pos, Direction::North) && is_solid(grid, pos, Direction::South);

    (bridges_horizontal || bridges_vertical) && grid.occupied_neighbors(pos) == 2
}

/// Occupied and not itself a doorway
fn is_solid(grid: &Grid, pos: Pos, dir: Direction) -> bool {
    grid.neighbor(pos, dir)
        .map(|p| grid.tile(p))
        .is_some_and(|t| t.occupied && t.kind != TileKind::Doorway)
}
