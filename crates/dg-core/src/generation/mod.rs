//! Dungeon generation pipeline
//!
//! Stages run strictly in order over one shared grid:
//! rooms, corridors, doorways, smoothing, connectivity. Every stage draws
//! from the same seeded [`GenRng`], so a configuration (seed included)
//! always produces the same layout.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::{debug, info};

mod corridor;
mod doorway;
mod flood;
mod rooms;
mod smooth;

pub use corridor::{carve_corridor, carve_corridors, is_corridor_seed};
pub use doorway::{insert_doorways, is_doorway_gap};
pub use flood::{ComponentSummary, component_sizes, is_single_component, keep_largest_component};
pub use rooms::{Room, RoomPlacement, can_place, place_room, place_rooms};
pub use smooth::{SmoothStats, smooth};

use crate::config::GenConfig;
use crate::error::GenResult;
use crate::grid::{Grid, NoopObserver, TileKind, TileObserver};
use crate::layout::{GenStats, Layout};
use crate::rng::GenRng;

/// Owns one generation run's grid and bookkeeping
///
/// `O` receives a release call for every occupied tile the run clears,
/// including everything still standing when [`clear`](Self::clear) is called.
#[derive(Debug)]
pub struct DungeonGenerator<O: TileObserver = NoopObserver> {
    config: GenConfig,
    grid: Grid,
    rooms: Vec<Room>,
    stats: GenStats,
    observer: O,
}

impl DungeonGenerator<NoopObserver> {
    /// Create a generator, rejecting degenerate configurations
    pub fn new(config: GenConfig) -> GenResult<Self> {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O: TileObserver> DungeonGenerator<O> {
    /// Create a generator that reports cleared tiles to `observer`
    pub fn with_observer(config: GenConfig, observer: O) -> GenResult<Self> {
        config.validate()?;
        let grid = Grid::new(config.map_size);
        Ok(Self {
            config,
            grid,
            rooms: Vec::new(),
            stats: GenStats::default(),
            observer,
        })
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// The grid as left by the last run (empty after [`clear`](Self::clear))
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Run the full pipeline from a fresh grid and a freshly seeded RNG
    pub fn generate(&mut self) -> Layout {
        self.clear();

        let config = &self.config;
        let mut rng = GenRng::new(config.seed);
        let goal = config.effective_room_goal();
        debug!(
            "generating {size}x{size} dungeon, seed {seed}, room goal {goal}",
            size = config.map_size,
            seed = config.seed,
        );

        let placement = place_rooms(&mut self.grid, goal, config.max_room_radius, &mut rng);
        self.stats.rooms_placed = placement.rooms.len();
        self.stats.rooms_abandoned = placement.abandoned;
        self.rooms = placement.rooms;
        debug!(
            "rooms: {} placed, {} abandoned",
            self.stats.rooms_placed, self.stats.rooms_abandoned
        );

        self.stats.corridors_carved = carve_corridors(&mut self.grid, &mut rng);
        debug!(
            "corridors: {} carved, {} cells",
            self.stats.corridors_carved,
            self.grid.count(TileKind::Corridor)
        );

        self.stats.doorways_inserted = insert_doorways(&mut self.grid);
        debug!("doorways: {} inserted", self.stats.doorways_inserted);

        self.stats.smoothing = smooth(
            &mut self.grid,
            self.config.smoothness,
            &mut rng,
            &mut self.observer,
        );
        debug!(
            "smoothing: {} passes removed {} cells",
            self.stats.smoothing.passes,
            self.stats.smoothing.total_removed()
        );

        self.stats.connectivity = keep_largest_component(&mut self.grid, &mut self.observer);
        debug!(
            "connectivity: {} components, kept {} cells, discarded {}",
            self.stats.connectivity.components,
            self.stats.connectivity.kept,
            self.stats.connectivity.discarded
        );

        let layout = Layout::from_grid(
            self.config.seed,
            self.grid.clone(),
            self.rooms.clone(),
            self.stats,
        );
        info!(
            "generated dungeon seed {}: {} cells, {} rooms, {} spawn points, {} anchors",
            layout.seed,
            layout.grid.occupied_count(),
            layout.rooms.len(),
            layout.spawn_points.len(),
            layout.prefab_anchors.len()
        );
        layout
    }

    /// Drop all run state, releasing every occupied tile
    ///
    /// Idempotent: a second call finds nothing left to release.
    pub fn clear(&mut self) {
        for pos in self.grid.positions() {
            self.grid.clear_tile(pos, &mut self.observer);
        }
        self.grid = Grid::new(self.config.map_size);
        self.rooms.clear();
        self.stats = GenStats::default();
    }
}

/// Validate `config` and run one generation
pub fn generate(config: &GenConfig) -> GenResult<Layout> {
    let mut generator = DungeonGenerator::new(config.clone())?;
    Ok(generator.generate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenError;
    use crate::grid::Pos;

    #[test]
    fn test_degenerate_config_rejected_up_front() {
        let err = generate(&GenConfig::new(0, 3)).unwrap_err();
        assert!(matches!(err, GenError::DegenerateConfig { .. }));
        let err = DungeonGenerator::new(GenConfig::new(8, 3).with_max_room_radius(0)).unwrap_err();
        assert!(matches!(err, GenError::DegenerateConfig { .. }));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = GenConfig::new(24, 6).with_seed(77);
        let a = generate(&config).unwrap();
        let b = generate(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generator_reuse_matches_fresh_run() {
        let config = GenConfig::new(20, 5).with_seed(3);
        let mut generator = DungeonGenerator::new(config.clone()).unwrap();
        let first = generator.generate();
        let second = generator.generate();
        assert_eq!(first, second);
        assert_eq!(first, generate(&config).unwrap());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut generator = DungeonGenerator::new(GenConfig::new(16, 4).with_seed(5)).unwrap();
        generator.generate();
        generator.clear();
        let once = generator.grid().clone();
        generator.clear();
        assert_eq!(generator.grid(), &once);
        assert_eq!(once, Grid::new(16));
    }

    #[test]
    fn test_clear_releases_remaining_tiles() {
        let mut released: Vec<Pos> = Vec::new();
        let record = |p: Pos| released.push(p);
        let config = GenConfig::new(16, 4).with_seed(12);
        let mut generator = DungeonGenerator::with_observer(config, record).unwrap();
        let layout = generator.generate();
        let kept = layout.grid.occupied_count();
        let during_run =
            generator.stats.smoothing.total_removed() + generator.stats.connectivity.discarded;

        generator.clear();
        generator.clear();
        drop(generator);
        assert_eq!(released.len(), during_run + kept);
    }

    #[test]
    fn test_stats_match_grid() {
        let layout = generate(&GenConfig::new(32, 10).with_seed(99)).unwrap();
        assert_eq!(layout.stats.rooms_placed, layout.rooms.len());
        assert_eq!(layout.stats.rooms_placed + layout.stats.rooms_abandoned, 10);
        assert_eq!(layout.stats.connectivity.kept, layout.grid.occupied_count());
        assert_eq!(layout.spawn_points.len(), layout.grid.count(TileKind::Room));
    }
}
