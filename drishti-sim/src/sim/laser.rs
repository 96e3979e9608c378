//! Planar laser scanner simulation.

use crate::core::{LaserScan, NoiseSource, Pose2D, ScanRequest, SweepDirection};
use crate::error::{Result, SimError};
use crate::grid::{CellValue, GridAccessor};

use super::free_threshold;
use super::raycaster::{RayCaster, RayParams};

/// Simulates laser scans against a borrowed grid.
///
/// # Example
///
/// ```
/// use drishti_sim::core::{NoNoise, Pose2D, ScanRequest};
/// use drishti_sim::grid::OccupancyGrid;
/// use drishti_sim::sim::ScanSimulator;
///
/// let grid = OccupancyGrid::centered(100, 100, 0.05).unwrap();
/// let simulator = ScanSimulator::new(&grid, 0.5).unwrap();
/// let scan = simulator
///     .simulate(Pose2D::identity(), &ScanRequest::default(), &mut NoNoise)
///     .unwrap();
/// assert_eq!(scan.len(), 361);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ScanSimulator<'a, G: GridAccessor + ?Sized> {
    caster: RayCaster<'a, G>,
    free_threshold: CellValue,
}

impl<'a, G: GridAccessor + ?Sized> ScanSimulator<'a, G> {
    /// Create a simulator. `occupancy_threshold` must lie in (0, 1).
    pub fn new(grid: &'a G, occupancy_threshold: f32) -> Result<Self> {
        Ok(Self {
            caster: RayCaster::new(grid),
            free_threshold: free_threshold(occupancy_threshold)?,
        })
    }

    /// Log-odds threshold rays must exceed to keep marching.
    pub fn free_threshold(&self) -> CellValue {
        self.free_threshold
    }

    /// Simulate one scan from `robot_pose`.
    ///
    /// The sensor sits at `robot_pose ⊕ request.sensor_pose`. Rays are
    /// numbered in sweep order; indices skipped by decimation are `None`.
    pub fn simulate<N: NoiseSource + ?Sized>(
        &self,
        robot_pose: Pose2D,
        request: &ScanRequest,
        noise: &mut N,
    ) -> Result<LaserScan> {
        if request.num_rays < 2 {
            return Err(SimError::TooFewRays(request.num_rays));
        }
        if request.decimation < 1 {
            return Err(SimError::InvalidDecimation(request.decimation));
        }
        let max_len_cells = self.caster.grid().max_ray_length_cells(request.max_range)?;

        let sensor_pose = robot_pose.compose(request.sensor_pose);
        let half_aperture = 0.5 * request.aperture;
        let increment = request.aperture / (request.num_rays - 1) as f32;
        let (start_angle, angle_increment) = match request.sweep {
            SweepDirection::RightToLeft => (sensor_pose.theta - half_aperture, increment),
            SweepDirection::LeftToRight => (sensor_pose.theta + half_aperture, -increment),
        };

        let params = RayParams {
            max_len_cells,
            free_threshold: self.free_threshold,
            range_noise_std: request.range_noise_std,
            angle_noise_std: request.angle_noise_std,
        };

        let origin = sensor_pose.position();
        let mut samples = vec![None; request.num_rays];
        for index in (0..request.num_rays).step_by(request.decimation) {
            let angle = start_angle + index as f32 * angle_increment;
            let outcome = self.caster.cast(origin, angle, &params, noise);
            samples[index] = Some(outcome.into());
        }

        let scan = LaserScan {
            sensor_pose,
            start_angle,
            angle_increment,
            max_range: request.max_range,
            samples,
        };

        log::debug!(
            "Simulated scan at ({:.2}, {:.2}, {:.1}°): {}/{} rays cast, {} valid",
            sensor_pose.x,
            sensor_pose.y,
            sensor_pose.theta.to_degrees(),
            scan.computed_count(),
            scan.len(),
            scan.valid_count()
        );

        Ok(scan)
    }
}
