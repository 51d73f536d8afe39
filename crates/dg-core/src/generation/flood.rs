//! Connectivity reduction
//!
//! Flood-fills the occupied cells into 4-connected components and keeps only
//! the largest. Ties go to the component discovered first in row-major scan
//! order.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Pos, TileObserver};

/// What the connectivity pass found and removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    /// Components present before reduction
    pub components: usize,
    /// Cells in the retained component
    pub kept: usize,
    /// Occupied cells cleared because they were outside it
    pub discarded: usize,
}

/// Clear every occupied cell outside the largest component
///
/// Uses the tiles' `visited` marks as scratch and leaves them reset.
pub fn keep_largest_component<O: TileObserver + ?Sized>(
    grid: &mut Grid,
    observer: &mut O,
) -> ComponentSummary {
    grid.reset_visited();

    let mut summary = ComponentSummary::default();
    let mut best: Vec<Pos> = Vec::new();

    for seed in grid.positions() {
        let tile = grid.tile(seed);
        if !tile.occupied || tile.visited {
            continue;
        }

        let members = flood_from(grid, seed);
        summary.components += 1;
        if members.len() > best.len() {
            best = members;
        }
    }

    grid.reset_visited();
    for pos in &best {
        if let Some(tile) = grid.get_mut(*pos) {
            tile.visited = true;
        }
    }

    for pos in grid.positions() {
        let tile = grid.tile(pos);
        if tile.occupied && !tile.visited && grid.clear_tile(pos, observer) {
            summary.discarded += 1;
        }
    }

    grid.reset_visited();
    summary.kept = best.len();
    summary
}

/// Mark and collect the component containing `seed`
fn flood_from(grid: &mut Grid, seed: Pos) -> Vec<Pos> {
    let mut members = Vec::new();
    let mut stack = vec![seed];

    while let Some(pos) = stack.pop() {
        let Some(tile) = grid.get_mut(pos) else {
            continue;
        };
        if !tile.occupied || tile.visited {
            continue;
        }
        tile.visited = true;
        members.push(pos);
        stack.extend(grid.neighbors(pos));
    }

    members
}

/// Sizes of every 4-connected component, in discovery order
///
/// Read-only; does not touch the tiles' scratch marks.
pub fn component_sizes(grid: &Grid) -> Vec<usize> {
    let size = grid.size();
    let mut seen = vec![false; size * size];
    let mut sizes = Vec::new();

    for seed in grid.positions() {
        if !grid.occupied(seed) || seen[seed.y * size + seed.x] {
            continue;
        }

        let mut count = 0;
        let mut stack = vec![seed];
        while let Some(pos) = stack.pop() {
            let idx = pos.y * size + pos.x;
            if seen[idx] || !grid.occupied(pos) {
                continue;
            }
            seen[idx] = true;
            count += 1;
            stack.extend(grid.neighbors(pos));
        }
        sizes.push(count);
    }

    sizes
}

/// At most one component (an empty grid counts)
pub fn is_single_component(grid: &Grid) -> bool {
    component_sizes(grid).len() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{NoopObserver, TileKind};

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let kind = match c {
                    '.' => TileKind::Room,
                    '#' => TileKind::Corridor,
                    '+' => TileKind::Doorway,
                    _ => TileKind::None,
                };
                grid.set_kind(Pos::new(x, y), kind);
            }
        }
        grid
    }

    #[test]
    fn test_keeps_largest() {
        let mut grid = grid_from(&[
            "..   ", //
            "..   ", //
            "   ##", //
            "    #", //
            ".    ", //
        ]);
        assert_eq!(component_sizes(&grid), vec![4, 3, 1]);

        let mut released = Vec::new();
        let mut record = |p: Pos| released.push(p);
        let summary = keep_largest_component(&mut grid, &mut record);

        assert_eq!(
            summary,
            ComponentSummary {
                components: 3,
                kept: 4,
                discarded: 4
            }
        );
        assert_eq!(grid.count(TileKind::Room), 4);
        assert_eq!(grid.count(TileKind::Corridor), 0);
        assert_eq!(released.len(), 4);
        assert!(is_single_component(&grid));
    }

    #[test]
    fn test_tie_keeps_first_in_scan_order() {
        let mut grid = grid_from(&[
            "#  ..", //
            "#    ", //
            "     ", //
            "     ", //
            "     ", //
        ]);
        // The corridor at (0, 0) is discovered before the room at (3, 0)
        keep_largest_component(&mut grid, &mut NoopObserver);
        assert_eq!(grid.count(TileKind::Corridor), 2);
        assert_eq!(grid.count(TileKind::Room), 0);
    }

    #[test]
    fn test_edge_cells_connect() {
        // Row 0 and column 0 take part in the fill like any other cell
        let mut grid = grid_from(&[
            "###  ", //
            "#    ", //
            "#    ", //
            "     ", //
            "   . ", //
        ]);
        let summary = keep_largest_component(&mut grid, &mut NoopObserver);
        assert_eq!(summary.kept, 5);
        assert_eq!(summary.components, 2);
        assert!(grid.is_kind(Pos::new(2, 0), TileKind::Corridor));
        assert!(grid.is_kind(Pos::new(0, 2), TileKind::Corridor));
    }

    #[test]
    fn test_diagonals_do_not_connect() {
        let grid = grid_from(&[
            ".    ", //
            " .   ", //
            "  .  ", //
            "     ", //
            "     ", //
        ]);
        assert_eq!(component_sizes(&grid), vec![1, 1, 1]);
        assert!(!is_single_component(&grid));
    }

    #[test]
    fn test_empty_grid() {
        let mut grid = Grid::new(6);
        let summary = keep_largest_component(&mut grid, &mut NoopObserver);
        assert_eq!(summary, ComponentSummary::default());
        assert!(is_single_component(&grid));
        assert_eq!(grid, Grid::new(6));
    }

    #[test]
    fn test_visited_marks_reset() {
        let mut grid = grid_from(&[
            "...", //
            "   ", //
            "  #", //
        ]);
        keep_largest_component(&mut grid, &mut NoopObserver);
        assert!(grid.tiles().iter().all(|t| !t.visited));
        assert!(grid.invariant_holds());
    }
}
