//! Fixed-step ray marching through a log-odds occupancy grid.
//!
//! Every step advances the ray by exactly one grid resolution of real
//! distance, whatever the ray angle:
//!
//! ```text
//! step = (cos θ, sin θ) · resolution          |step| = resolution
//!
//! origin ●────●────●────●────■ obstacle
//!        0    1    2    3    4        range = 4 · resolution
//! ```
//!
//! so a budget of `max_len_cells` steps bounds the loop and
//! `steps · resolution` is the exact distance travelled.
//!
//! ## Termination
//!
//! | Stop condition                      | Class         | Valid |
//! |-------------------------------------|---------------|-------|
//! | cell ≤ free threshold, known        | `Obstacle`    | yes   |
//! | budget used up on a known cell      | `Exhausted`   | no    |
//! | stopping cell is unknown (\|L\| ≤ 1)| `Unknown`     | no    |
//! | left the grid                       | `OutOfBounds` | no    |
//!
//! Invalid rays report the distance to the first unknown cell crossed, if
//! one was crossed before the stopping cell.

use crate::core::{NoiseSource, RayTermination, ScanSample, WorldPoint};
use crate::grid::{CellValue, GridAccessor, is_unknown};

/// Per-ray parameters shared by every ray of a scan or cone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayParams {
    /// Maximum number of steps (cells) to march.
    pub max_len_cells: u32,
    /// Cells must be strictly above this value for the ray to pass.
    pub free_threshold: CellValue,
    /// Range noise standard deviation (meters), applied to valid hits only.
    pub range_noise_std: f32,
    /// Angular noise standard deviation (radians).
    pub angle_noise_std: f32,
}

/// Result of casting a single ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayOutcome {
    /// Simulated range in meters.
    pub range: f32,
    /// True only for an obstacle found within the budget.
    pub valid: bool,
    /// How the ray ended.
    pub termination: RayTermination,
}

impl From<RayOutcome> for ScanSample {
    fn from(outcome: RayOutcome) -> Self {
        ScanSample {
            range: outcome.range,
            valid: outcome.valid,
            termination: outcome.termination,
        }
    }
}

/// Casts rays through a borrowed grid.
#[derive(Clone, Copy, Debug)]
pub struct RayCaster<'a, G: GridAccessor + ?Sized> {
    grid: &'a G,
}

impl<'a, G: GridAccessor + ?Sized> RayCaster<'a, G> {
    /// Create a ray caster over `grid`.
    pub fn new(grid: &'a G) -> Self {
        Self { grid }
    }

    /// The grid being cast against.
    pub fn grid(&self) -> &'a G {
        self.grid
    }

    /// Displacement of one march step at `angle`.
    ///
    /// Its length is always the grid resolution.
    #[inline]
    pub fn step_vector(&self, angle: f32) -> WorldPoint {
        let resolution = self.grid.resolution();
        let (sin, cos) = angle.sin_cos();
        WorldPoint::new(cos * resolution, sin * resolution)
    }

    /// Cast one ray from `origin` at absolute `angle` (radians).
    ///
    /// Consumes one noise sample for the angle when `angle_noise_std > 0`,
    /// and one for the range when the hit is valid and `range_noise_std > 0`.
    pub fn cast<N: NoiseSource + ?Sized>(
        &self,
        origin: WorldPoint,
        angle: f32,
        params: &RayParams,
        noise: &mut N,
    ) -> RayOutcome {
        let angle = angle + noise.gaussian(params.angle_noise_std);
        let step = self.step_vector(angle);
        let resolution = self.grid.resolution();

        let mut steps: u32 = 0;
        let mut first_unknown: Option<u32> = None;

        // `None` when the ray left the grid, else the value of the stopping cell
        let stop_cell = loop {
            // Position from the step count, so error does not accumulate
            let position = WorldPoint::new(
                origin.x + steps as f32 * step.x,
                origin.y + steps as f32 * step.y,
            );
            let coord = self.grid.world_to_cell(position);

            let Some(value) = self.grid.cell_value(coord) else {
                break None;
            };
            if value <= params.free_threshold || steps >= params.max_len_cells {
                break Some(value);
            }
            if first_unknown.is_none() && is_unknown(value) {
                first_unknown = Some(steps);
            }
            steps += 1;
        };

        let termination = match stop_cell {
            None => RayTermination::OutOfBounds,
            Some(value) if is_unknown(value) => RayTermination::Unknown,
            Some(_) if steps < params.max_len_cells => RayTermination::Obstacle,
            Some(_) => RayTermination::Exhausted,
        };

        match termination {
            RayTermination::Obstacle => RayOutcome {
                range: steps as f32 * resolution + noise.gaussian(params.range_noise_std),
                valid: true,
                termination,
            },
            RayTermination::Exhausted => RayOutcome {
                range: steps as f32 * resolution,
                valid: false,
                termination,
            },
            RayTermination::Unknown | RayTermination::OutOfBounds => {
                let reported = first_unknown.filter(|&k| k < steps).unwrap_or(steps);
                RayOutcome {
                    range: reported as f32 * resolution,
                    valid: false,
                    termination,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridCoord, NoNoise, NoiseGenerator, deg_to_rad};
    use crate::grid::{CELL_MAX, CELL_MIN, OccupancyGrid, UNKNOWN_CELL, probability_to_log_odds};
    use approx::assert_relative_eq;

    const RES: f32 = 0.1;

    /// 40x40 all-free grid, origin at (0, 0).
    fn free_grid() -> OccupancyGrid {
        OccupancyGrid::filled(40, 40, RES, WorldPoint::ZERO, CELL_MAX).unwrap()
    }

    fn params(max_len_cells: u32) -> RayParams {
        RayParams {
            max_len_cells,
            free_threshold: probability_to_log_odds(0.5),
            range_noise_std: 0.0,
            angle_noise_std: 0.0,
        }
    }

    /// Center of cell (2, 20), looking along +X.
    fn start() -> WorldPoint {
        WorldPoint::new(2.5 * RES, 20.5 * RES)
    }

    #[test]
    fn test_step_length_is_resolution() {
        let grid = free_grid();
        let caster = RayCaster::new(&grid);
        for deg in [0.0f32, 45.0, 90.0, 137.0, -170.0] {
            let step = caster.step_vector(deg_to_rad(deg));
            assert_relative_eq!(step.length(), RES, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_obstacle_hit() {
        let mut grid = free_grid();
        grid.set_cell_value(GridCoord::new(9, 20), CELL_MIN);
        let caster = RayCaster::new(&grid);

        let out = caster.cast(start(), 0.0, &params(30), &mut NoNoise);
        assert_eq!(out.termination, RayTermination::Obstacle);
        assert!(out.valid);
        assert_relative_eq!(out.range, 7.0 * RES, epsilon = 1e-5);
    }

    #[test]
    fn test_exhausted_budget() {
        let grid = free_grid();
        let caster = RayCaster::new(&grid);

        let out = caster.cast(start(), 0.0, &params(12), &mut NoNoise);
        assert_eq!(out.termination, RayTermination::Exhausted);
        assert!(!out.valid);
        assert_relative_eq!(out.range, 12.0 * RES, epsilon = 1e-5);
    }

    #[test]
    fn test_obstacle_exactly_at_budget_is_invalid() {
        let mut grid = free_grid();
        grid.set_cell_value(GridCoord::new(9, 20), CELL_MIN);
        let caster = RayCaster::new(&grid);

        let out = caster.cast(start(), 0.0, &params(7), &mut NoNoise);
        assert_eq!(out.termination, RayTermination::Exhausted);
        assert!(!out.valid);
        assert_relative_eq!(out.range, 7.0 * RES, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_budget() {
        let grid = free_grid();
        let caster = RayCaster::new(&grid);

        let out = caster.cast(start(), 0.0, &params(0), &mut NoNoise);
        assert_eq!(out.termination, RayTermination::Exhausted);
        assert_eq!(out.range, 0.0);
    }

    #[test]
    fn test_unknown_cell_stops_ray() {
        let mut grid = free_grid();
        grid.set_cell_value(GridCoord::new(6, 20), UNKNOWN_CELL);
        grid.set_cell_value(GridCoord::new(12, 20), CELL_MIN);
        let caster = RayCaster::new(&grid);

        let out = caster.cast(start(), 0.0, &params(30), &mut NoNoise);
        assert_eq!(out.termination, RayTermination::Unknown);
        assert!(!out.valid);
        assert_relative_eq!(out.range, 4.0 * RES, epsilon = 1e-5);
    }

    #[test]
    fn test_crossed_unknown_reported_when_leaving_grid() {
        // Higher occupancy threshold: unknown cells no longer stop the ray
        let mut grid = free_grid();
        grid.set_cell_value(GridCoord::new(6, 20), UNKNOWN_CELL);
        let caster = RayCaster::new(&grid);
        let p = RayParams {
            free_threshold: probability_to_log_odds(0.4),
            ..params(100)
        };

        let out = caster.cast(start(), 0.0, &p, &mut NoNoise);
        assert_eq!(out.termination, RayTermination::OutOfBounds);
        assert!(!out.valid);
        assert_relative_eq!(out.range, 4.0 * RES, epsilon = 1e-5);
    }

    #[test]
    fn test_crossed_unknown_does_not_invalidate_hit() {
        let mut grid = free_grid();
        grid.set_cell_value(GridCoord::new(6, 20), UNKNOWN_CELL);
        grid.set_cell_value(GridCoord::new(12, 20), CELL_MIN);
        let caster = RayCaster::new(&grid);
        let p = RayParams {
            free_threshold: probability_to_log_odds(0.4),
            ..params(100)
        };

        let out = caster.cast(start(), 0.0, &p, &mut NoNoise);
        assert_eq!(out.termination, RayTermination::Obstacle);
        assert!(out.valid);
        assert_relative_eq!(out.range, 10.0 * RES, epsilon = 1e-5);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = free_grid();
        let caster = RayCaster::new(&grid);

        // Heading -X from cell 2: cells 2, 1, 0 then off the grid
        let out = caster.cast(start(), std::f32::consts::PI, &params(100), &mut NoNoise);
        assert_eq!(out.termination, RayTermination::OutOfBounds);
        assert!(!out.valid);
        assert_relative_eq!(out.range, 3.0 * RES, epsilon = 1e-5);
    }

    #[test]
    fn test_origin_outside_grid() {
        let grid = free_grid();
        let caster = RayCaster::new(&grid);

        let out = caster.cast(WorldPoint::new(-1.0, 2.0), 0.0, &params(100), &mut NoNoise);
        assert_eq!(out.termination, RayTermination::OutOfBounds);
        assert_eq!(out.range, 0.0);
    }

    #[test]
    fn test_origin_on_obstacle() {
        let mut grid = free_grid();
        grid.set_cell_value(GridCoord::new(2, 20), CELL_MIN);
        let caster = RayCaster::new(&grid);

        let out = caster.cast(start(), 0.0, &params(100), &mut NoNoise);
        assert_eq!(out.termination, RayTermination::Obstacle);
        assert!(out.valid);
        assert_eq!(out.range, 0.0);
    }

    #[test]
    fn test_diagonal_hit_distance() {
        let mut grid = free_grid();
        // Wall along x = 30
        grid.fill_rect(GridCoord::new(30, 0), GridCoord::new(30, 39), CELL_MIN);
        let caster = RayCaster::new(&grid);

        let origin = WorldPoint::new(10.5 * RES, 10.5 * RES);
        let out = caster.cast(origin, deg_to_rad(45.0), &params(100), &mut NoNoise);
        assert!(out.valid);
        // Wall face is 19.5 cells away along x, so ~27.6 cells along the ray
        let expected = 19.5 * RES * std::f32::consts::SQRT_2;
        assert!((out.range - expected).abs() <= RES * 1.5, "range {}", out.range);
    }

    #[test]
    fn test_deterministic_without_noise() {
        let mut grid = free_grid();
        grid.set_cell_value(GridCoord::new(25, 27), CELL_MIN);
        grid.fill_rect(GridCoord::new(0, 35), GridCoord::new(39, 39), CELL_MIN);
        let caster = RayCaster::new(&grid);

        let origin = WorldPoint::new(5.5 * RES, 5.5 * RES);
        let first = caster.cast(origin, 0.9, &params(100), &mut NoNoise);
        for _ in 0..10 {
            assert_eq!(caster.cast(origin, 0.9, &params(100), &mut NoNoise), first);
        }
    }

    #[test]
    fn test_range_noise_only_on_valid() {
        let mut grid = free_grid();
        grid.set_cell_value(GridCoord::new(9, 20), CELL_MIN);
        let caster = RayCaster::new(&grid);
        let noisy = RayParams {
            range_noise_std: 0.05,
            ..params(30)
        };

        let mut noise = NoiseGenerator::new(11);
        let mut reference = NoiseGenerator::new(11);
        let out = caster.cast(start(), 0.0, &noisy, &mut noise);
        let expected = 7.0 * RES + 0.05 * reference.standard_normal();
        assert!(out.valid);
        assert_relative_eq!(out.range, expected, epsilon = 1e-5);

        // Invalid rays never get range noise
        let out = caster.cast(start(), std::f32::consts::PI, &noisy, &mut noise);
        assert!(!out.valid);
        assert_relative_eq!(out.range, 3.0 * RES, epsilon = 1e-5);
    }

    #[test]
    fn test_angle_noise_reproducible() {
        let mut grid = free_grid();
        grid.fill_rect(GridCoord::new(30, 0), GridCoord::new(30, 39), CELL_MIN);
        let caster = RayCaster::new(&grid);
        let noisy = RayParams {
            angle_noise_std: 0.2,
            ..params(100)
        };

        let origin = WorldPoint::new(10.5 * RES, 20.5 * RES);
        let a: Vec<RayOutcome> = {
            let mut noise = NoiseGenerator::new(5);
            (0..8).map(|_| caster.cast(origin, 0.0, &noisy, &mut noise)).collect()
        };
        let b: Vec<RayOutcome> = {
            let mut noise = NoiseGenerator::new(5);
            (0..8).map(|_| caster.cast(origin, 0.0, &noisy, &mut noise)).collect()
        };
        assert_eq!(a, b);
        // Perturbed rays hit the wall at varying slant distances
        assert!(a.iter().all(|o| o.valid && o.range >= 19.0 * RES));
    }
}
