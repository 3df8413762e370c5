//! Slippy-map tile addressing.
//!
//! Tiles follow the XYZ scheme used by OpenStreetMap: origin top-left,
//! `2^z` columns and rows at zoom `z`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tile coordinate (z/x/y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    /// Zoom level
    pub z: u32,
    /// Column (x)
    pub x: u32,
    /// Row (y)
    pub y: u32,
}

impl TileCoord {
    pub fn new(z: u32, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }

    /// Build a coordinate from signed indices, rejecting anything outside
    /// the `2^z x 2^z` matrix.
    pub fn checked(z: u32, x: i64, y: i64) -> Option<TileCoord> {
        let n = tiles_per_axis(z) as i64;
        if x < 0 || y < 0 || x >= n || y >= n {
            return None;
        }
        Some(TileCoord {
            z,
            x: x as u32,
            y: y as u32,
        })
    }

    /// The single tile covering the whole world.
    pub fn world() -> Self {
        Self { z: 0, x: 0, y: 0 }
    }

    /// Whether x and y lie inside the tile matrix for this zoom.
    pub fn is_valid(&self) -> bool {
        let n = tiles_per_axis(self.z);
        self.x < n && self.y < n
    }

    /// Fill a `{z}/{x}/{y}` URL template.
    pub fn fill_template(&self, template: &str) -> String {
        template
            .replace("{z}", &self.z.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

/// Number of tile columns (and rows) at a zoom level.
///
/// Rendering never goes past zoom 19, but a `TileCoord` can be built or
/// deserialized with any `z`. Zooms above 31 are treated as 31, the largest
/// shift a `u32` count can hold.
pub fn tiles_per_axis(zoom: u32) -> u32 {
    1u32 << zoom.min(31)
}

/// A rectangular, inclusive range of tile indices around a center tile.
///
/// Bounds are signed because the range computed for a canvas near the edge
/// of the world may extend past the tile matrix; [`TileGrid::coords`] only
/// yields in-range tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub zoom: u32,
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl TileGrid {
    /// Grid covering a `width x height` canvas centered on tile
    /// `(center_x, center_y)`: the center tile plus
    /// `ceil((width / 2) / tile_size)` tiles on each side horizontally and
    /// the analogous count vertically.
    pub fn around(
        zoom: u32,
        center_x: i64,
        center_y: i64,
        width: u32,
        height: u32,
        tile_size: u32,
    ) -> Self {
        let tile_size = tile_size.max(1) as f64;
        let half_w = ((width as f64 / 2.0) / tile_size).ceil() as i64;
        let half_h = ((height as f64 / 2.0) / tile_size).ceil() as i64;

        // Centers far outside the world (huge longitudes) arrive as
        // saturated indices.
        Self {
            zoom,
            min_x: center_x.saturating_sub(half_w),
            max_x: center_x.saturating_add(half_w),
            min_y: center_y.saturating_sub(half_h),
            max_y: center_y.saturating_add(half_h),
        }
    }

    /// Number of index pairs in the range, valid or not.
    pub fn len(&self) -> usize {
        let span = |min: i64, max: i64| max.saturating_sub(min).saturating_add(1).max(0) as usize;
        span(self.min_x, self.max_x).saturating_mul(span(self.min_y, self.max_y))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// In-range tile coordinates, column-major (x outer, y inner).
    pub fn coords(&self) -> Vec<TileCoord> {
        let last = tiles_per_axis(self.zoom) as i64 - 1;
        let (x0, x1) = (self.min_x.max(0), self.max_x.min(last));
        let (y0, y1) = (self.min_y.max(0), self.max_y.min(last));

        let mut coords = Vec::new();
        for x in x0..=x1 {
            for y in y0..=y1 {
                if let Some(coord) = TileCoord::checked(self.zoom, x, y) {
                    coords.push(coord);
                }
            }
        }
        coords
    }
}
