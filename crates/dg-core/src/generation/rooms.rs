//! Room placement
//!
//! Stamps square rooms of random radius at random free positions. Each room
//! slot gets a bounded number of attempts; a slot that never finds space is
//! abandoned and the layout simply ends up with fewer rooms.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};
use crate::grid::{Grid, Pos, TileKind};
use crate::rng::GenRng;
use crate::MAX_ROOM_ATTEMPTS;

/// A square room, side `2 * radius + 1`, centred on `center`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub center: Pos,
    pub radius: usize,
}

impl Room {
    pub const fn new(center: Pos, radius: usize) -> Self {
        Self { center, radius }
    }

    /// Side length, saturating for radii no grid could hold
    pub const fn side(&self) -> usize {
        self.radius.saturating_mul(2).saturating_add(1)
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.side().saturating_mul(self.side())
    }

    /// Whether the whole square lies inside a `size × size` grid
    pub fn fits(&self, size: usize) -> bool {
        let within = |c: usize| {
            c >= self.radius && c.checked_add(self.radius).is_some_and(|far| far < size)
        };
        within(self.center.x) && within(self.center.y)
    }

    /// Check if the two squares share any cell
    pub fn overlaps(&self, other: &Room) -> bool {
        let reach = self.radius.saturating_add(other.radius);
        self.center.x.abs_diff(other.center.x) <= reach
            && self.center.y.abs_diff(other.center.y) <= reach
    }

    /// Covered cells in row-major order
    ///
    /// Only valid for rooms that [`fit`](Room::fits) somewhere.
    pub fn cells(&self) -> impl Iterator<Item = Pos> + use<> {
        let Room { center, radius } = *self;
        let (lx, ly) = (center.x - radius, center.y - radius);
        let side = self.side();
        (ly..ly + side).flat_map(move |y| (lx..lx + side).map(move |x| Pos::new(x, y)))
    }
}

/// Outcome of the placement stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomPlacement {
    /// Rooms stamped, in placement order
    pub rooms: Vec<Room>,
    /// Slots given up after exhausting their attempts
    pub abandoned: usize,
}

/// Try to place `goal` rooms with radius in `1..=max_radius`
pub fn place_rooms(
    grid: &mut Grid,
    goal: usize,
    max_radius: usize,
    rng: &mut GenRng,
) -> RoomPlacement {
    let mut placement = RoomPlacement::default();

    for slot in 0..goal {
        match place_room(grid, slot, max_radius, rng) {
            Ok(room) => placement.rooms.push(room),
            Err(err) => {
                log::debug!("{err}");
                placement.abandoned += 1;
            }
        }
    }

    placement
}

/// Place a single room, retrying with a fresh radius and centre on failure
///
/// Returns [`GenError::RoomUnplaceable`] once every attempt has collided
/// with existing structure or could not fit the grid.
pub fn place_room(
    grid: &mut Grid,
    slot: usize,
    max_radius: usize,
    rng: &mut GenRng,
) -> GenResult<Room> {
    for _ in 0..MAX_ROOM_ATTEMPTS {
        let radius = rng.rnd(max_radius);
        let Some(room) = random_room(grid.size(), radius, rng) else {
            continue;
        };
        if can_place(grid, &room) {
            stamp(grid, &room);
            return Ok(room);
        }
    }

    Err(GenError::RoomUnplaceable {
        slot,
        attempts: MAX_ROOM_ATTEMPTS,
    })
}

/// Pick a centre so the room lies inside the grid, if any such centre exists
fn random_room(size: usize, radius: usize, rng: &mut GenRng) -> Option<Room> {
    if size == 0 || radius > (size - 1) / 2 {
        return None;
    }
    let hi = size - 1 - radius;
    let x = rng.range_inclusive(radius, hi);
    let y = rng.range_inclusive(radius, hi);
    Some(Room::new(Pos::new(x, y), radius))
}

/// Every cell under the room is unoccupied
pub fn can_place(grid: &Grid, room: &Room) -> bool {
    room.fits(grid.size()) && room.cells().all(|p| !grid.occupied(p))
}

fn stamp(grid: &mut Grid, room: &Room) {
    for pos in room.cells() {
        grid.set_kind(pos, TileKind::Room);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_geometry() {
        let room = Room::new(Pos::new(3, 3), 2);
        assert_eq!(room.side(), 5);
        assert_eq!(room.area(), 25);
        assert_eq!(room.cells().count(), 25);
        assert_eq!(room.cells().next(), Some(Pos::new(1, 1)));
        assert!(room.fits(6));
        assert!(!room.fits(5));
    }

    #[test]
    fn test_overlap() {
        let a = Room::new(Pos::new(3, 3), 1);
        let touching = Room::new(Pos::new(5, 3), 1);
        let apart = Room::new(Pos::new(6, 3), 1);
        assert!(a.overlaps(&touching));
        assert!(!a.overlaps(&apart));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_rooms_are_stamped_and_disjoint() {
        let mut grid = Grid::new(32);
        let mut rng = GenRng::new(42);
        let placement = place_rooms(&mut grid, 12, 3, &mut rng);

        assert!(!placement.rooms.is_empty());
        assert_eq!(placement.rooms.len() + placement.abandoned, 12);

        for (i, a) in placement.rooms.iter().enumerate() {
            assert!((1..=3).contains(&a.radius));
            assert!(a.fits(32));
            for b in &placement.rooms[i + 1..] {
                assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
            }
        }

        let covered: usize = placement.rooms.iter().map(Room::area).sum();
        assert_eq!(grid.count(TileKind::Room), covered);
        assert_eq!(grid.occupied_count(), covered);
        assert!(grid.invariant_holds());
    }

    #[test]
    fn test_full_grid_abandons_slot() {
        let mut grid = Grid::new(8);
        for pos in grid.positions() {
            grid.set_kind(pos, TileKind::Corridor);
        }
        let mut rng = GenRng::new(1);
        let err = place_room(&mut grid, 4, 2, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenError::RoomUnplaceable {
                slot: 4,
                attempts: MAX_ROOM_ATTEMPTS
            }
        );
        assert_eq!(grid.count(TileKind::Room), 0);
    }

    #[test]
    fn test_tiny_map_places_nothing() {
        let mut grid = Grid::new(1);
        let mut rng = GenRng::new(42);
        let placement = place_rooms(&mut grid, 1, 1, &mut rng);
        assert!(placement.rooms.is_empty());
        assert_eq!(placement.abandoned, 1);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_room_fills_exact_map() {
        // A radius-1 room is 3x3, the only centre on a 3x3 map is (1, 1)
        let mut grid = Grid::new(3);
        let mut rng = GenRng::new(5);
        let placement = place_rooms(&mut grid, 2, 1, &mut rng);
        assert_eq!(placement.rooms, vec![Room::new(Pos::new(1, 1), 1)]);
        assert_eq!(placement.abandoned, 1);
        assert_eq!(grid.count(TileKind::Room), 9);
    }

    #[test]
    fn test_huge_radius_is_abandoned() {
        let mut grid = Grid::new(16);
        let mut rng = GenRng::new(1);
        let placement = place_rooms(&mut grid, 8, usize::MAX, &mut rng);
        assert_eq!(placement.rooms.len() + placement.abandoned, 8);
        for room in &placement.rooms {
            assert!(room.fits(16));
        }
        assert!(grid.invariant_holds());
    }

    #[test]
    fn test_geometry_saturates() {
        let room = Room::new(Pos::new(usize::MAX, 0), usize::MAX);
        assert_eq!(room.side(), usize::MAX);
        assert_eq!(room.area(), usize::MAX);
        assert!(!room.fits(16));
        assert!(!Room::new(Pos::new(usize::MAX, 1), 1).fits(16));
        assert!(room.overlaps(&Room::new(Pos::new(0, 0), 1)));
    }
}
