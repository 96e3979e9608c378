//! Configuration loading for DrishtiSim.
//!
//! Loads simulator settings from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti_sim::config::SimulationConfig;
//!
//! // Load from default path (configs/simulation.yaml)
//! let config = SimulationConfig::load_default()?;
//!
//! // Convert to simulation inputs
//! let request = config.scan_request();
//! let sonar = config.sonar_array();
//! let mut noise = config.noise_generator();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`LaserSection`] | Aperture, ray count, range, mounting, noise |
//! | [`SonarSection`] | Cone aperture, range, noise, transducers |
//!
//! ## Example YAML
//!
//! ```yaml
//! occupancy_threshold: 0.5
//! random_seed: 42          # 0 = entropy
//! map: maps/room.yaml      # optional ROS map
//!
//! laser:
//!   aperture: 3.14159      # radians
//!   num_rays: 361
//!   max_range: 8.0
//!   sweep: right_to_left
//!   offset_x: -0.110
//!   range_noise_std: 0.01
//!
//! sonar:
//!   cone_aperture: 0.349   # ~20deg
//!   max_range: 4.0
//!   units:
//!     - id: 0
//!       pose: { x: 0.17, y: 0.0, theta: 0.0 }
//! ```

mod defaults;
mod error;
mod laser;
mod simulation;
mod sonar;

pub use error::ConfigLoadError;
pub use laser::LaserSection;
pub use simulation::{DEFAULT_CONFIG_PATH, SimulationConfig};
pub use sonar::SonarSection;
