//! Release notifications for cleared tiles
//!
//! The generator holds no rendering handles. Whatever a caller attached to a
//! cell (a spawned visual, a physics body) is released through this callback
//! when a stage clears that cell.

use super::Pos;

/// Receives a call each time an occupied tile is cleared
pub trait TileObserver {
    fn on_tile_cleared(&mut self, pos: Pos);
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl TileObserver for NoopObserver {
    fn on_tile_cleared(&mut self, _pos: Pos) {}
}

impl<F: FnMut(Pos)> TileObserver for F {
    fn on_tile_cleared(&mut self, pos: Pos) {
        self(pos)
    }
}
