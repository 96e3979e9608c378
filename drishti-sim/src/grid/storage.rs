//! Dense occupancy grid storage.
//!
//! Cells are stored row-major (`index = x + y * size_x`) as quantized
//! free-space log-odds. See [`super::log_odds`] for the encoding.

use crate::core::{GridCoord, WorldPoint};
use crate::error::{Result, SimError};

use super::accessor::GridAccessor;
use super::log_odds::{CellValue, UNKNOWN_CELL, log_odds_to_probability, probability_to_log_odds};

/// 2D occupancy grid snapshot.
///
/// The grid is read-only input for simulation; the editing helpers exist to
/// build test worlds and to import maps.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    size_x: usize,
    size_y: usize,
    resolution: f32,
    /// World coordinates of the outer corner of cell (0, 0)
    origin: WorldPoint,
    cells: Vec<CellValue>,
}

impl OccupancyGrid {
    /// Create a grid with every cell unknown.
    pub fn new(size_x: usize, size_y: usize, resolution: f32, origin: WorldPoint) -> Result<Self> {
        Self::filled(size_x, size_y, resolution, origin, UNKNOWN_CELL)
    }

    /// Create a grid with every cell set to `value`.
    pub fn filled(
        size_x: usize,
        size_y: usize,
        resolution: f32,
        origin: WorldPoint,
        value: CellValue,
    ) -> Result<Self> {
        let count = validate_geometry(size_x, size_y, resolution)?;
        Ok(Self {
            size_x,
            size_y,
            resolution,
            origin,
            cells: vec![value; count],
        })
    }

    /// Create an all-unknown grid centered on the world origin.
    pub fn centered(size_x: usize, size_y: usize, resolution: f32) -> Result<Self> {
        let origin = WorldPoint::new(
            -(size_x as f32 * resolution) / 2.0,
            -(size_y as f32 * resolution) / 2.0,
        );
        Self::new(size_x, size_y, resolution, origin)
    }

    /// Wrap an existing row-major cell buffer.
    pub fn from_cells(
        size_x: usize,
        size_y: usize,
        resolution: f32,
        origin: WorldPoint,
        cells: Vec<CellValue>,
    ) -> Result<Self> {
        let expected = validate_geometry(size_x, size_y, resolution)?;
        if cells.len() != expected {
            return Err(SimError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            size_x,
            size_y,
            resolution,
            origin,
            cells,
        })
    }

    /// World coordinates of the corner of cell (0, 0).
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// World-space bounds `(min, max)`.
    pub fn bounds(&self) -> (WorldPoint, WorldPoint) {
        let max = WorldPoint::new(
            self.origin.x + self.size_x as f32 * self.resolution,
            self.origin.y + self.size_y as f32 * self.resolution,
        );
        (self.origin, max)
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Raw row-major cells.
    #[inline]
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// World coordinates of a cell's center.
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            self.origin.x + (coord.x as f32 + 0.5) * self.resolution,
            self.origin.y + (coord.y as f32 + 0.5) * self.resolution,
        )
    }

    /// Storage index for an in-bounds coordinate.
    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.x as usize + coord.y as usize * self.size_x)
        } else {
            None
        }
    }

    /// Set a cell's raw value. Returns false if `coord` is out of bounds.
    pub fn set_cell_value(&mut self, coord: GridCoord, value: CellValue) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Set a cell from its probability of being free.
    pub fn set_free_probability(&mut self, coord: GridCoord, p_free: f32) -> bool {
        self.set_cell_value(coord, probability_to_log_odds(p_free))
    }

    /// Set a cell from its probability of being occupied.
    pub fn set_occupied_probability(&mut self, coord: GridCoord, p_occupied: f32) -> bool {
        self.set_free_probability(coord, 1.0 - p_occupied)
    }

    /// Probability that the cell at `coord` is free.
    pub fn free_probability(&self, coord: GridCoord) -> Option<f32> {
        self.cell_value(coord).map(log_odds_to_probability)
    }

    /// Fill the inclusive rectangle `[min, max]`, clipped to the grid.
    ///
    /// Returns the number of cells written.
    pub fn fill_rect(&mut self, min: GridCoord, max: GridCoord, value: CellValue) -> usize {
        let x0 = min.x.max(0);
        let y0 = min.y.max(0);
        let x1 = max.x.min(self.size_x as i32 - 1);
        let y1 = max.y.min(self.size_y as i32 - 1);

        let mut written = 0;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let idx = x as usize + y as usize * self.size_x;
                self.cells[idx] = value;
                written += 1;
            }
        }
        written
    }
}

impl GridAccessor for OccupancyGrid {
    #[inline]
    fn size_x(&self) -> usize {
        self.size_x
    }

    #[inline]
    fn size_y(&self) -> usize {
        self.size_y
    }

    #[inline]
    fn resolution(&self) -> f32 {
        self.resolution
    }

    #[inline]
    fn world_to_cell(&self, point: WorldPoint) -> GridCoord {
        GridCoord::new(
            axis_index((point.x - self.origin.x) / self.resolution),
            axis_index((point.y - self.origin.y) / self.resolution),
        )
    }

    #[inline]
    fn cell_value(&self, coord: GridCoord) -> Option<CellValue> {
        self.index(coord).map(|idx| self.cells[idx])
    }
}

/// Floor a cell-space coordinate; non-finite input is always out of range.
#[inline]
fn axis_index(v: f32) -> i32 {
    if v.is_finite() {
        v.floor() as i32
    } else {
        i32::MIN
    }
}

fn validate_geometry(size_x: usize, size_y: usize, resolution: f32) -> Result<usize> {
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(SimError::InvalidResolution(resolution));
    }
    let max_axis = i32::MAX as usize;
    if size_x == 0 || size_y == 0 || size_x > max_axis || size_y > max_axis {
        return Err(SimError::InvalidDimensions { size_x, size_y });
    }
    size_x
        .checked_mul(size_y)
        .ok_or(SimError::InvalidDimensions { size_x, size_y })
}
