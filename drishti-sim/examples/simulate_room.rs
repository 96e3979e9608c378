//! Laser and sonar simulation in a synthetic room.
//!
//! This example demonstrates:
//! - Loading a simulation config (YAML) or falling back to defaults
//! - Loading a ROS map if the config names one, else building a room
//! - Driving a robot along a short path and simulating both sensors
//!
//! # Usage
//!
//! ```bash
//! cargo run --example simulate_room -- configs/simulation.yaml
//! ```

use std::path::Path;

use drishti_sim::grid::{CELL_MAX, CELL_MIN};
use drishti_sim::{
    ConeSimulator, GridCoord, OccupancyGrid, Pose2D, ScanSimulator, SimulationConfig, WorldPoint,
};

/// 6m x 4m room with a table in the middle, origin at the bottom-left corner.
fn build_room() -> Result<OccupancyGrid, Box<dyn std::error::Error>> {
    let mut grid = OccupancyGrid::filled(122, 82, 0.05, WorldPoint::new(-0.05, -0.05), CELL_MAX)?;
    grid.fill_rect(GridCoord::new(0, 0), GridCoord::new(121, 0), CELL_MIN);
    grid.fill_rect(GridCoord::new(0, 81), GridCoord::new(121, 81), CELL_MIN);
    grid.fill_rect(GridCoord::new(0, 0), GridCoord::new(0, 81), CELL_MIN);
    grid.fill_rect(GridCoord::new(121, 0), GridCoord::new(121, 81), CELL_MIN);
    grid.fill_rect(GridCoord::new(55, 35), GridCoord::new(70, 45), CELL_MIN);
    Ok(grid)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load(Path::new(&path))?,
        None => SimulationConfig::load_default()?,
    };

    let grid = match &config.map {
        Some(map) => OccupancyGrid::load_ros_map(map)?,
        None => build_room()?,
    };

    let laser = ScanSimulator::new(&grid, config.occupancy_threshold)?;
    let sonar = ConeSimulator::new(&grid, config.occupancy_threshold)?;
    let request = config.scan_request();
    let array = config.sonar_array();
    let mut noise = config.noise_generator();

    let path = [
        Pose2D::new(1.0, 1.0, 0.0),
        Pose2D::new(2.0, 1.0, 0.5),
        Pose2D::new(4.5, 1.5, 1.2),
        Pose2D::new(4.5, 3.0, 3.0),
        Pose2D::new(1.5, 3.0, -2.0),
    ];

    for pose in path {
        let scan = laser.simulate(pose, &request, &mut noise)?;
        let nearest = scan
            .iter_computed()
            .filter(|(_, s)| s.valid)
            .map(|(_, s)| s.range)
            .fold(f32::INFINITY, f32::min);

        log::info!(
            "Pose ({:.2}, {:.2}, {:.0}°): {}/{} valid rays, nearest {:.2}m",
            pose.x,
            pose.y,
            pose.theta.to_degrees(),
            scan.valid_count(),
            scan.computed_count(),
            nearest
        );

        let observation = sonar.simulate(pose, &array, &mut noise)?;
        for reading in &observation.readings {
            if reading.detected {
                log::info!("  sonar {}: {:.2}m", reading.id, reading.sensed_distance);
            } else {
                log::info!("  sonar {}: no echo", reading.id);
            }
        }
    }

    Ok(())
}
