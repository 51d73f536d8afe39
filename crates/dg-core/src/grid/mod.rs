//! Grid data model
//!
//! A square, row-major array of [`Tile`]s owned by one generation run.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use core::fmt;

use serde::{Deserialize, Serialize};

mod observer;
mod pos;
mod tile;

pub use observer::{NoopObserver, TileObserver};
pub use pos::{Direction, Pos};
pub use tile::{Tile, TileKind};

use crate::error::GenError;

/// Square tile grid, `size × size`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

/// Unchecked wire form of [`Grid`]
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    tiles: Vec<Tile>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GenError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let RawGrid { size, tiles } = raw;
        if size.checked_mul(size) != Some(tiles.len()) {
            return Err(GenError::Config(format!(
                "grid of size {size} holds {} tiles",
                tiles.len()
            )));
        }
        if !tiles.iter().all(Tile::is_consistent) {
            return Err(GenError::Config(format!(
                "grid of size {size} has tiles whose kind disagrees with occupancy"
            )));
        }
        Ok(Self { size, tiles })
    }
}

impl Grid {
    /// Allocate a grid with every tile empty
    pub fn new(size: usize) -> Self {
        Self {
            size,
            tiles: vec![Tile::empty(); size * size],
        }
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// On the outermost ring of cells
    pub fn is_border(&self, pos: Pos) -> bool {
        self.in_bounds(pos)
            && (pos.x == 0 || pos.y == 0 || pos.x == self.size - 1 || pos.y == self.size - 1)
    }

    /// All four neighbours are in bounds
    pub fn is_interior(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && !self.is_border(pos)
    }

    /// At least `margin` cells away from every edge
    pub fn is_inset(&self, pos: Pos, margin: usize) -> bool {
        self.in_bounds(pos)
            && pos.x >= margin
            && pos.y >= margin
            && pos.x + margin < self.size
            && pos.y + margin < self.size
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| pos.y * self.size + pos.x)
    }

    pub fn get(&self, pos: Pos) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut Tile> {
        self.index(pos).map(move |i| &mut self.tiles[i])
    }

    /// Tile at `pos`, or an empty tile when out of bounds
    pub fn tile(&self, pos: Pos) -> Tile {
        self.get(pos).copied().unwrap_or_default()
    }

    pub fn occupied(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(|t| t.occupied)
    }

    pub fn kind(&self, pos: Pos) -> TileKind {
        self.get(pos).map_or(TileKind::None, |t| t.kind)
    }

    /// Occupied with the given kind
    pub fn is_kind(&self, pos: Pos, kind: TileKind) -> bool {
        self.get(pos).is_some_and(|t| t.is_kind(kind))
    }

    /// Stamp `kind` at `pos`, keeping `occupied` in step with it
    ///
    /// Setting [`TileKind::None`] this way does not notify an observer;
    /// use [`Grid::clear_tile`] for removals that must release resources.
    pub fn set_kind(&mut self, pos: Pos, kind: TileKind) {
        if let Some(tile) = self.get_mut(pos) {
            tile.occupied = kind != TileKind::None;
            tile.kind = kind;
        }
    }

    /// Empty the tile at `pos`
    ///
    /// The observer is told exactly once per occupied-to-empty transition.
    /// Returns whether the tile was occupied.
    pub fn clear_tile<O: TileObserver + ?Sized>(&mut self, pos: Pos, observer: &mut O) -> bool {
        let Some(tile) = self.get_mut(pos) else {
            return false;
        };
        let was_occupied = tile.occupied;
        tile.occupied = false;
        tile.kind = TileKind::None;
        if was_occupied {
            observer.on_tile_cleared(pos);
        }
        was_occupied
    }

    /// In-bounds neighbour of `pos` in `dir`
    pub fn neighbor(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        pos.step(dir).filter(|p| self.in_bounds(*p))
    }

    /// In-bounds neighbours of `pos`, in [`Direction::ALL`] order
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(pos, dir))
    }

    /// Count occupied 4-neighbours
    ///
    /// Border cells report 4, which keeps every stage that looks for
    /// sparse neighbourhoods away from the edge.
    pub fn occupied_neighbors(&self, pos: Pos) -> usize {
        if !self.is_interior(pos) {
            return 4;
        }
        self.neighbors(pos).filter(|p| self.occupied(*p)).count()
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Pos::new(x, y)))
    }

    /// Interior positions (not on the border) in row-major order
    pub fn interior_positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let size = self.size;
        (1..size.saturating_sub(1))
            .flat_map(move |y| (1..size.saturating_sub(1)).map(move |x| Pos::new(x, y)))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of occupied tiles of `kind`
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.is_kind(kind)).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.occupied).count()
    }

    /// Occupied positions of `kind`, row-major
    pub fn positions_of(&self, kind: TileKind) -> Vec<Pos> {
        self.positions().filter(|p| self.is_kind(*p, kind)).collect()
    }

    /// Clear the visited marks left by a flood fill
    pub fn reset_visited(&mut self) {
        for tile in &mut self.tiles {
            tile.visited = false;
        }
    }

    /// Empty every tile without notifying anyone
    pub fn reset(&mut self) {
        self.tiles.fill(Tile::empty());
    }

    /// Every tile satisfies `occupied == (kind != None)`
    pub fn invariant_holds(&self) -> bool {
        self.tiles.iter().all(Tile::is_consistent)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.size.max(1)) {
            for tile in row {
                write!(f, "{}", tile.kind.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
