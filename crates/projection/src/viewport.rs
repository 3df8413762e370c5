//! Canvas placement of projected coordinates.
//!
//! [`Viewport`] places a Mercator world at a fixed zoom so that a center
//! coordinate lands in the middle of the canvas; [`WorldFit`] scales the
//! single zoom-0 tile into a canvas with its aspect ratio preserved.

use map_common::tile::TileGrid;
use map_common::{Coordinate, TileCoord};

use crate::mercator::{
    lat_to_pixel, lat_to_tile_y, lon_fraction, lon_to_pixel, lon_to_tile_x, mercator_y_fraction,
    tile_to_pixel,
};

/// A canvas window onto the Mercator world at one zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: u32,
    pub tile_size: u32,
    pub width: u32,
    pub height: u32,
    /// Center coordinate in geographic degrees.
    pub center: Coordinate,
    /// World pixel of the center coordinate.
    center_px: f64,
    center_py: f64,
}

impl Viewport {
    pub fn centered(center: Coordinate, zoom: u32, tile_size: u32, width: u32, height: u32) -> Self {
        Self {
            zoom,
            tile_size,
            width,
            height,
            center,
            center_px: lon_to_pixel(center.lon, zoom, tile_size),
            center_py: lat_to_pixel(center.lat, zoom, tile_size),
        }
    }

    /// Canvas pixel of a geographic coordinate.
    pub fn project(&self, c: Coordinate) -> (f64, f64) {
        (
            lon_to_pixel(c.lon, self.zoom, self.tile_size) - self.center_px
                + self.width as f64 / 2.0,
            lat_to_pixel(c.lat, self.zoom, self.tile_size) - self.center_py
                + self.height as f64 / 2.0,
        )
    }

    /// Canvas offset of a tile's top-left corner:
    /// `tile_pixel_origin - center_pixel + canvas_dimension / 2`.
    pub fn tile_offset(&self, tile: &TileCoord) -> (f64, f64) {
        let (tx, ty) = tile_to_pixel(tile, self.tile_size);
        (
            tx - self.center_px + self.width as f64 / 2.0,
            ty - self.center_py + self.height as f64 / 2.0,
        )
    }

    /// Tile index range covering the canvas.
    pub fn tile_grid(&self) -> TileGrid {
        TileGrid::around(
            self.zoom,
            lon_to_tile_x(self.center.lon, self.zoom),
            lat_to_tile_y(self.center.lat, self.zoom),
            self.width,
            self.height,
            self.tile_size,
        )
    }
}

/// Placement of the zoom-0 world image inside a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldFit {
    pub draw_width: f64,
    pub draw_height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl WorldFit {
    /// Largest rectangle with the image's aspect ratio that fits the canvas,
    /// centered (letterbox or pillarbox).
    pub fn fit(canvas_width: u32, canvas_height: u32, image_width: u32, image_height: u32) -> Self {
        let cw = canvas_width as f64;
        let ch = canvas_height as f64;
        let aspect = image_width.max(1) as f64 / image_height.max(1) as f64;

        if cw / ch > aspect {
            // Canvas is wider than the image.
            let draw_height = ch;
            let draw_width = ch * aspect;
            Self {
                draw_width,
                draw_height,
                offset_x: (cw - draw_width) / 2.0,
                offset_y: 0.0,
            }
        } else {
            let draw_width = cw;
            let draw_height = cw / aspect;
            Self {
                draw_width,
                draw_height,
                offset_x: 0.0,
                offset_y: (ch - draw_height) / 2.0,
            }
        }
    }

    /// Canvas pixel of a geographic coordinate on the fitted world image.
    pub fn project(&self, c: Coordinate) -> (f64, f64) {
        (
            lon_fraction(c.lon) * self.draw_width + self.offset_x,
            mercator_y_fraction(c.lat) * self.draw_height + self.offset_y,
        )
    }
}
