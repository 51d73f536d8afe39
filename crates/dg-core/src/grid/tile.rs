//! Tile classification

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// What a cell has been carved into
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    None = 0,
    Room = 1,
    Corridor = 2,
    Doorway = 3,
}

impl TileKind {
    /// Corridors and doorways, the kinds smoothing may prune
    pub const fn is_passage(&self) -> bool {
        matches!(self, TileKind::Corridor | TileKind::Doorway)
    }

    /// Get the display character for this kind
    pub const fn symbol(&self) -> char {
        match self {
            TileKind::None => ' ',
            TileKind::Room => '.',
            TileKind::Corridor => '#',
            TileKind::Doorway => '+',
        }
    }
}

/// A single grid cell
///
/// `occupied` is true exactly when `kind` is not [`TileKind::None`]; the
/// constructors and [`super::Grid`] mutators keep that in step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tile {
    pub occupied: bool,
    pub kind: TileKind,

    /// Flood-fill scratch mark, only meaningful during the connectivity pass
    #[serde(skip)]
    pub visited: bool,
}

impl Tile {
    /// Create an empty tile
    pub const fn empty() -> Self {
        Self {
            occupied: false,
            kind: TileKind::None,
            visited: false,
        }
    }

    /// Create a tile of the given kind, occupied unless the kind is `None`
    pub const fn with_kind(kind: TileKind) -> Self {
        Self {
            occupied: !matches!(kind, TileKind::None),
            kind,
            visited: false,
        }
    }

    pub const fn is_kind(&self, kind: TileKind) -> bool {
        self.occupied && self.kind as u8 == kind as u8
    }

    /// Check the occupied/kind invariant
    pub const fn is_consistent(&self) -> bool {
        self.occupied == !matches!(self.kind, TileKind::None)
    }
}
