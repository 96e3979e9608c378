//! Sonar cone simulation.
//!
//! A sonar cone of aperture α is approximated by a fan of sub-rays spaced
//! about one degree apart:
//!
//! ```text
//! n_rays    = floor(1 + α / 1°)
//! direction = heading - α/2 + i · α / n_rays      i = 0 .. n_rays
//! ```
//!
//! The unit reports the nearest valid sub-ray hit, or its maximum range with
//! `detected = false` when no sub-ray found an obstacle.

use crate::core::{NoiseSource, Pose2D, SonarArray, SonarObservation, SonarReading};
use crate::error::{Result, SimError};
use crate::grid::{CellValue, GridAccessor};

use super::free_threshold;
use super::raycaster::{RayCaster, RayParams};

/// Nominal angular spacing between cone sub-rays (1°).
pub const CONE_RAY_SPACING: f32 = std::f32::consts::PI / 180.0;

/// Number of sub-rays used for a cone of `aperture` radians.
#[inline]
pub fn cone_ray_count(aperture: f32) -> usize {
    (1.0 + aperture / CONE_RAY_SPACING).floor() as usize
}

/// Simulates sonar arrays against a borrowed grid.
#[derive(Clone, Copy, Debug)]
pub struct ConeSimulator<'a, G: GridAccessor + ?Sized> {
    caster: RayCaster<'a, G>,
    free_threshold: CellValue,
}

impl<'a, G: GridAccessor + ?Sized> ConeSimulator<'a, G> {
    /// Create a simulator. `occupancy_threshold` must lie in (0, 1).
    pub fn new(grid: &'a G, occupancy_threshold: f32) -> Result<Self> {
        Ok(Self {
            caster: RayCaster::new(grid),
            free_threshold: free_threshold(occupancy_threshold)?,
        })
    }

    /// Simulate every unit of `array` from `robot_pose`.
    ///
    /// Readings come back in the order of `array.units`.
    pub fn simulate<N: NoiseSource + ?Sized>(
        &self,
        robot_pose: Pose2D,
        array: &SonarArray,
        noise: &mut N,
    ) -> Result<SonarObservation> {
        if !(array.cone_aperture > 0.0) {
            return Err(SimError::InvalidConeAperture(array.cone_aperture));
        }
        let max_len_cells = self.caster.grid().max_ray_length_cells(array.max_range)?;

        let params = RayParams {
            max_len_cells,
            free_threshold: self.free_threshold,
            range_noise_std: array.range_noise_std,
            angle_noise_std: array.angle_noise_std,
        };
        let n_rays = cone_ray_count(array.cone_aperture);
        let increment = array.cone_aperture / n_rays as f32;

        let readings: Vec<SonarReading> = array
            .units
            .iter()
            .map(|unit| {
                let sensor_pose = robot_pose.compose(unit.pose);
                let first = sensor_pose.theta - 0.5 * array.cone_aperture;
                let origin = sensor_pose.position();

                let mut nearest: Option<f32> = None;
                for i in 0..n_rays {
                    let direction = first + i as f32 * increment;
                    let outcome = self.caster.cast(origin, direction, &params, noise);
                    if !outcome.valid {
                        continue;
                    }
                    match nearest {
                        Some(best) if best <= outcome.range => {}
                        _ => nearest = Some(outcome.range),
                    }
                }

                SonarReading {
                    id: unit.id,
                    sensor_pose,
                    sensed_distance: nearest.unwrap_or(array.max_range),
                    detected: nearest.is_some(),
                }
            })
            .collect();

        log::debug!(
            "Simulated {} sonar units ({} sub-rays each, {:.1}° cone): {} detections",
            readings.len(),
            n_rays,
            array.cone_aperture.to_degrees(),
            readings.iter().filter(|r| r.detected).count()
        );

        Ok(SonarObservation { readings })
    }
}
