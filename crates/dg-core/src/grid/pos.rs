//! Grid coordinates and cardinal directions

use serde::{Deserialize, Serialize};

/// A cell coordinate; `x` is the column, `y` the row
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move `distance` cells in `dir`, or `None` on underflow
    ///
    /// Does not know the grid size; callers check the upper bound.
    pub fn offset(self, dir: Direction, distance: usize) -> Option<Pos> {
        match dir {
            Direction::West => self.x.checked_sub(distance).map(|x| Pos::new(x, self.y)),
            Direction::East => self.x.checked_add(distance).map(|x| Pos::new(x, self.y)),
            Direction::North => self.y.checked_sub(distance).map(|y| Pos::new(self.x, y)),
            Direction::South => self.y.checked_add(distance).map(|y| Pos::new(self.x, y)),
        }
    }

    /// Move one cell in `dir`
    pub fn step(self, dir: Direction) -> Option<Pos> {
        self.offset(dir, 1)
    }
}

/// The four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    West,
    East,
    North,
    South,
}

impl Direction {
    /// Fixed iteration order used by every stage
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];
}
