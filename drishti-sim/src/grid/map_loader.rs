//! Map loader for PGM+YAML format (ROS standard)
//!
//! Converts a `map_server` style image into an [`OccupancyGrid`]:
//!
//! ```text
//! pixel v (0-255) → p_occ = (255 - v) / 255     (v / 255 if negate)
//!
//!   p_occ > occupied_thresh → occupied, stores L(1 - p_occ)
//!   p_occ < free_thresh     → free,     stores L(1 - p_occ)
//!   otherwise               → unknown (0)
//! ```
//!
//! Image row 0 is the top of the map (largest y).

use std::path::Path;

use image::GrayImage;
use serde::Deserialize;

use crate::core::{GridCoord, WorldPoint};
use crate::error::{Result, SimError};

use super::accessor::GridAccessor;
use super::log_odds::{CellValue, UNKNOWN_CELL, probability_to_log_odds};
use super::storage::OccupancyGrid;

/// Map metadata from YAML file (ROS standard format)
#[derive(Clone, Debug, Deserialize)]
pub struct MapMetadata {
    /// PGM image filename (relative to YAML file)
    pub image: String,

    /// Map resolution in meters per pixel
    pub resolution: f32,

    /// Origin of map [x, y, yaw] - world coordinates of bottom-left pixel
    pub origin: [f32; 3],

    /// Pixels with occupancy probability above this are occupied
    #[serde(default = "default_occupied_thresh")]
    pub occupied_thresh: f32,

    /// Pixels with occupancy probability below this are free
    #[serde(default = "default_free_thresh")]
    pub free_thresh: f32,

    /// Non-zero if white means occupied
    #[serde(default)]
    pub negate: i32,
}

fn default_occupied_thresh() -> f32 {
    0.65
}
fn default_free_thresh() -> f32 {
    0.196
}

impl MapMetadata {
    /// Metadata for an in-memory image with default thresholds.
    pub fn new(resolution: f32, origin: WorldPoint) -> Self {
        Self {
            image: String::new(),
            resolution,
            origin: [origin.x, origin.y, 0.0],
            occupied_thresh: default_occupied_thresh(),
            free_thresh: default_free_thresh(),
            negate: 0,
        }
    }

    /// Cell value for one pixel intensity.
    fn cell_for_pixel(&self, pixel: u8) -> CellValue {
        let v = pixel as f32 / 255.0;
        let p_occ = if self.negate != 0 { v } else { 1.0 - v };
        if p_occ > self.occupied_thresh || p_occ < self.free_thresh {
            probability_to_log_odds(1.0 - p_occ)
        } else {
            UNKNOWN_CELL
        }
    }
}

impl OccupancyGrid {
    /// Load map from ROS-standard YAML + PGM files
    pub fn load_ros_map<P: AsRef<Path>>(yaml_path: P) -> Result<Self> {
        let yaml_path = yaml_path.as_ref();

        let yaml_content = std::fs::read_to_string(yaml_path)
            .map_err(|e| SimError::Map(format!("Failed to read map YAML: {}", e)))?;

        let metadata: MapMetadata = serde_yaml::from_str(&yaml_content)
            .map_err(|e| SimError::Map(format!("Failed to parse map YAML: {}", e)))?;

        // Image path is relative to the YAML file
        let yaml_dir = yaml_path.parent().unwrap_or(Path::new("."));
        let image_path = yaml_dir.join(&metadata.image);
        let img = image::open(&image_path)
            .map_err(|e| {
                SimError::Map(format!(
                    "Failed to load map image {}: {}",
                    image_path.display(),
                    e
                ))
            })?
            .into_luma8();

        let grid = Self::from_image(&img, &metadata)?;
        log::info!(
            "Loaded map {} ({}x{} cells, {:.3} m/cell)",
            image_path.display(),
            grid.size_x(),
            grid.size_y(),
            metadata.resolution
        );
        Ok(grid)
    }

    /// Build a grid from a grayscale image and its metadata.
    pub fn from_image(img: &GrayImage, metadata: &MapMetadata) -> Result<Self> {
        if metadata.origin[2] != 0.0 {
            log::warn!(
                "Map origin yaw {:.3} rad ignored; grid is axis-aligned",
                metadata.origin[2]
            );
        }

        let (width, height) = img.dimensions();
        let origin = WorldPoint::new(metadata.origin[0], metadata.origin[1]);
        let mut grid = OccupancyGrid::new(
            width as usize,
            height as usize,
            metadata.resolution,
            origin,
        )?;

        for (px, py, pixel) in img.enumerate_pixels() {
            // Y is inverted: bottom of image = origin, top of image = +Y
            let coord = GridCoord::new(px as i32, (height - 1 - py) as i32);
            grid.set_cell_value(coord, metadata.cell_for_pixel(pixel.0[0]));
        }

        Ok(grid)
    }
}
