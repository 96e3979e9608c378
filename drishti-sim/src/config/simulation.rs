//! Main SimulationConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{NoiseGenerator, ScanRequest, SonarArray};

use super::defaults;
use super::error::ConfigLoadError;
use super::laser::LaserSection;
use super::sonar::SonarSection;

/// Default config path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/simulation.yaml";

/// Full simulation configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Occupied probability above which a cell stops rays
    #[serde(default = "defaults::occupancy_threshold")]
    pub occupancy_threshold: f32,

    /// Noise seed (0 = entropy)
    #[serde(default)]
    pub random_seed: u64,

    /// Optional ROS map YAML to simulate against
    #[serde(default)]
    pub map: Option<String>,

    /// Laser scanner settings
    #[serde(default)]
    pub laser: LaserSection,

    /// Sonar settings
    #[serde(default)]
    pub sonar: SonarSection,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            occupancy_threshold: defaults::occupancy_threshold(),
            random_seed: 0,
            map: None,
            laser: LaserSection::default(),
            sonar: SonarSection::default(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path, falling back to built-in defaults
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Laser scan request
    pub fn scan_request(&self) -> ScanRequest {
        self.laser.to_scan_request()
    }

    /// Sonar array description
    pub fn sonar_array(&self) -> SonarArray {
        self.sonar.to_sonar_array()
    }

    /// Noise generator seeded from `random_seed`
    pub fn noise_generator(&self) -> NoiseGenerator {
        NoiseGenerator::new(self.random_seed)
    }
}
