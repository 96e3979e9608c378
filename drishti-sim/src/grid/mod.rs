//! Occupancy grid access for range simulation.
//!
//! The simulators treat the grid as a read-only snapshot. Cells hold
//! quantized log-odds of being free; see [`log_odds`] for the encoding.
//!
//! ## Key Components
//!
//! - [`GridAccessor`]: Read-only geometry + cell access used by the ray caster
//! - [`OccupancyGrid`]: Dense row-major grid implementing [`GridAccessor`]
//! - [`MapMetadata`]: ROS `map_server` YAML for loading PGM maps
//!
//! ## Cell Classes
//!
//! ```text
//! value > free_threshold   → ray passes through
//! |value| ≤ 1              → unknown (ray stops, reading invalid)
//! value ≤ free_threshold   → obstacle (ray stops, reading valid)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use drishti_sim::core::{GridCoord, WorldPoint};
//! use drishti_sim::grid::{GridAccessor, OccupancyGrid, probability_to_log_odds};
//!
//! let mut grid = OccupancyGrid::centered(200, 200, 0.05).unwrap();
//! grid.set_occupied_probability(GridCoord::new(150, 100), 0.95);
//!
//! let cell = grid.world_to_cell(WorldPoint::new(2.51, 0.01));
//! assert_eq!(cell, GridCoord::new(150, 100));
//! assert!(grid.cell_value(cell).unwrap() < probability_to_log_odds(0.5));
//! ```

mod accessor;
pub mod log_odds;
mod map_loader;
mod storage;

pub use accessor::GridAccessor;
pub use log_odds::{
    CELL_MAX, CELL_MIN, CellValue, UNKNOWN_CELL, is_unknown, log_odds_to_probability,
    probability_to_log_odds,
};
pub use map_loader::MapMetadata;
pub use storage::OccupancyGrid;
