//! Read-only grid access used by the ray caster.

use crate::core::{GridCoord, WorldPoint};
use crate::error::{Result, SimError};

use super::log_odds::CellValue;

/// Read-only view of a 2D log-odds occupancy grid.
///
/// Simulators only ever read cells through this trait, so any grid that can
/// report its geometry and per-cell log-odds can be ray cast.
///
/// # Example
///
/// ```
/// use drishti_sim::core::WorldPoint;
/// use drishti_sim::grid::{GridAccessor, OccupancyGrid};
///
/// let grid = OccupancyGrid::new(10, 10, 0.1, WorldPoint::ZERO).unwrap();
/// let coord = grid.world_to_cell(WorldPoint::new(-0.05, 0.25));
/// assert_eq!((coord.x, coord.y), (-1, 2));
/// assert!(grid.cell_value(coord).is_none());
/// ```
pub trait GridAccessor {
    /// Width in cells.
    fn size_x(&self) -> usize;

    /// Height in cells.
    fn size_y(&self) -> usize;

    /// Meters per cell.
    fn resolution(&self) -> f32;

    /// Map a world point to (possibly out-of-range) cell indices.
    fn world_to_cell(&self, point: WorldPoint) -> GridCoord;

    /// Value of the cell at `coord`, or `None` when out of bounds.
    ///
    /// Implementations must bounds-check before touching storage.
    fn cell_value(&self, coord: GridCoord) -> Option<CellValue>;

    /// Signed bounds check: `0 ≤ x < size_x` and `0 ≤ y < size_y`.
    #[inline]
    fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.size_x()
            && (coord.y as usize) < self.size_y()
    }

    /// Ray budget in cells for a sensor range: `round(max_range / resolution)`.
    fn max_ray_length_cells(&self, max_range: f32) -> Result<u32> {
        if !max_range.is_finite() || max_range < 0.0 {
            return Err(SimError::InvalidMaxRange(max_range));
        }
        let cells = (max_range / self.resolution()).round();
        Ok(cells.min(u32::MAX as f32) as u32)
    }
}
