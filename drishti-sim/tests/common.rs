//! Test utilities for DrishtiSim.
//!
//! This module provides helpers for building rooms and computing the
//! analytic ranges a perfect sensor would return in them.

#![allow(dead_code)]

use drishti_sim::grid::{CELL_MAX, CELL_MIN, UNKNOWN_CELL};
use drishti_sim::{GridAccessor, GridCoord, OccupancyGrid, WorldPoint};

/// Initialize logging once for tests that want simulator output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Free rectangular room spanning `[0, width] x [0, height]`.
///
/// Walls are a one-cell ring just outside the room, so the grid origin sits
/// at `(-resolution, -resolution)`.
pub fn room_grid(width: f32, height: f32, resolution: f32) -> OccupancyGrid {
    let inner_x = (width / resolution).round() as i32;
    let inner_y = (height / resolution).round() as i32;
    let size_x = inner_x as usize + 2;
    let size_y = inner_y as usize + 2;

    let mut grid = OccupancyGrid::filled(
        size_x,
        size_y,
        resolution,
        WorldPoint::new(-resolution, -resolution),
        CELL_MAX,
    )
    .unwrap();

    let (max_x, max_y) = (inner_x + 1, inner_y + 1);
    grid.fill_rect(GridCoord::new(0, 0), GridCoord::new(max_x, 0), CELL_MIN);
    grid.fill_rect(GridCoord::new(0, max_y), GridCoord::new(max_x, max_y), CELL_MIN);
    grid.fill_rect(GridCoord::new(0, 0), GridCoord::new(0, max_y), CELL_MIN);
    grid.fill_rect(GridCoord::new(max_x, 0), GridCoord::new(max_x, max_y), CELL_MIN);
    grid
}

/// Room whose cells with `x >= split_x` (meters) are unexplored.
pub fn half_explored_room(width: f32, height: f32, resolution: f32, split_x: f32) -> OccupancyGrid {
    let mut grid = room_grid(width, height, resolution);
    let split = GridCoord::new(((split_x + resolution) / resolution).round() as i32, 0);
    let far = GridCoord::new(grid.size_x() as i32 - 1, grid.size_y() as i32 - 1);
    grid.fill_rect(split, far, UNKNOWN_CELL);
    grid
}

/// Distance from `(x, y)` along `angle` to the walls of a
/// `[0, width] x [0, height]` room.
pub fn room_wall_distance(width: f32, height: f32, x: f32, y: f32, angle: f32) -> f32 {
    let (sin_a, cos_a) = angle.sin_cos();
    let mut range = f32::INFINITY;

    // Right wall (x = width)
    if cos_a > 0.0 {
        let t = (width - x) / cos_a;
        let hit_y = y + t * sin_a;
        if t > 0.0 && t < range && (0.0..=height).contains(&hit_y) {
            range = t;
        }
    }
    // Left wall (x = 0)
    if cos_a < 0.0 {
        let t = -x / cos_a;
        let hit_y = y + t * sin_a;
        if t > 0.0 && t < range && (0.0..=height).contains(&hit_y) {
            range = t;
        }
    }
    // Top wall (y = height)
    if sin_a > 0.0 {
        let t = (height - y) / sin_a;
        let hit_x = x + t * cos_a;
        if t > 0.0 && t < range && (0.0..=width).contains(&hit_x) {
            range = t;
        }
    }
    // Bottom wall (y = 0)
    if sin_a < 0.0 {
        let t = -y / sin_a;
        let hit_x = x + t * cos_a;
        if t > 0.0 && t < range && (0.0..=width).contains(&hit_x) {
            range = t;
        }
    }

    range
}
