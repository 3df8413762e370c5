//! Render parameters and results.

use map_common::{MapError, MapResult};
use renderer::EncodedImage;
use serde::{Deserialize, Serialize};

/// Largest accepted canvas edge, in pixels.
pub const MAX_CANVAS_SIZE: u32 = 4096;

/// Accepted tile edge lengths, in pixels. Together with the canvas limit
/// this bounds a grid to at most 65 x 65 tiles.
pub const MIN_TILE_SIZE: u32 = 64;
pub const MAX_TILE_SIZE: u32 = 1024;

/// Parameters of one static map render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapRequest {
    pub width: u32,
    pub height: u32,
    /// Fixed zoom; derived from the geometry's extent when absent.
    pub zoom: Option<u8>,
    pub tile_size: u32,
    pub include_world_view: bool,
}

impl Default for MapRequest {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            zoom: None,
            tile_size: 256,
            include_world_view: true,
        }
    }
}

impl MapRequest {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn with_world_view(mut self, include: bool) -> Self {
        self.include_world_view = include;
        self
    }

    /// Reject canvas and tile sizes outside the supported ranges.
    pub fn validate(&self) -> MapResult<()> {
        for (param, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_CANVAS_SIZE {
                return Err(MapError::invalid_parameter(
                    param,
                    format!("must be between 1 and {}, got {}", MAX_CANVAS_SIZE, value),
                ));
            }
        }
        if !(MIN_TILE_SIZE..=MAX_TILE_SIZE).contains(&self.tile_size) {
            return Err(MapError::invalid_parameter(
                "tile_size",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_TILE_SIZE, MAX_TILE_SIZE, self.tile_size
                ),
            ));
        }
        Ok(())
    }
}

/// The images produced by one render.
#[derive(Debug, Clone)]
pub struct MapOutput {
    pub main: EncodedImage,
    /// Zoom-0 overview, present when the request asked for it.
    pub world: Option<EncodedImage>,
    /// Zoom the main view was rendered at.
    pub zoom: u8,
}

impl MapOutput {
    pub fn main_data_url(&self) -> String {
        self.main.to_data_url()
    }

    pub fn world_data_url(&self) -> Option<String> {
        self.world.as_ref().map(EncodedImage::to_data_url)
    }
}
