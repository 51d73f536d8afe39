//! Corridor carving
//!
//! Every empty cell with no occupied neighbours seeds a depth-first walk
//! that grows a single-cell-wide, loop-free corridor through open ground.
//! Eligibility is re-checked live, so a freshly carved corridor removes
//! candidates next to it.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use crate::grid::{Direction, Grid, Pos, TileKind};
use crate::rng::GenRng;

/// Per-seed scratch: the cells this walk has visited
///
/// Every visited cell becomes part of the path, so one mask serves both.
#[derive(Debug, Clone)]
struct CorridorWalk {
    size: usize,
    visited: Vec<bool>,
    path: Vec<Pos>,
}

impl CorridorWalk {
    fn new(size: usize) -> Self {
        Self {
            size,
            visited: vec![false; size * size],
            path: Vec::new(),
        }
    }

    fn is_visited(&self, pos: Pos) -> bool {
        pos.x < self.size && pos.y < self.size && self.visited[pos.y * self.size + pos.x]
    }

    fn mark(&mut self, pos: Pos) {
        self.visited[pos.y * self.size + pos.x] = true;
        self.path.push(pos);
    }

    /// Visited 4-neighbours; cells on the edge report 4
    fn visited_neighbors(&self, grid: &Grid, pos: Pos) -> usize {
        if !grid.is_interior(pos) {
            return 4;
        }
        grid.neighbors(pos).filter(|p| self.is_visited(*p)).count()
    }

    /// Write the path into the grid as corridor
    fn commit(self, grid: &mut Grid) -> usize {
        for pos in &self.path {
            grid.set_kind(*pos, TileKind::Corridor);
        }
        self.path.len()
    }
}

/// Carve corridors from every isolated empty cell, scanning row-major
///
/// Returns the number of corridors committed.
pub fn carve_corridors(grid: &mut Grid, rng: &mut GenRng) -> usize {
    let mut carved = 0;

    for pos in grid.interior_positions() {
        if is_corridor_seed(grid, pos) && carve_corridor(grid, pos, rng) > 0 {
            carved += 1;
        }
    }

    carved
}

/// Empty, interior, and with no occupied neighbour
pub fn is_corridor_seed(grid: &Grid, pos: Pos) -> bool {
    grid.in_bounds(pos) && !grid.occupied(pos) && grid.occupied_neighbors(pos) == 0
}

/// Grow one corridor from `start` and commit it
///
/// A popped cell is dropped when more than one of its neighbours is already
/// on the path, which keeps the corridor from looping or touching itself.
/// The walk stops early once it reaches the map edge. Returns the number of
/// cells committed.
pub fn carve_corridor(grid: &mut Grid, start: Pos, rng: &mut GenRng) -> usize {
    let mut walk = CorridorWalk::new(grid.size());
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        if walk.is_visited(pos) {
            continue;
        }
        if walk.visited_neighbors(grid, pos) > 1 {
            continue;
        }

        walk.mark(pos);
        if grid.is_border(pos) {
            break;
        }

        let mut dirs = Direction::ALL;
        rng.shuffle(&mut dirs);
        for dir in dirs {
            let Some(next) = grid.neighbor(pos, dir) else {
                continue;
            };
            if !grid.occupied(next)
                && grid.occupied_neighbors(next) == 0
                && walk.visited_neighbors(grid, next) <= 1
            {
                stack.push(next);
            }
        }
    }

    walk.commit(grid)
}
