//! Spherical Web-Mercator (EPSG:3857) slippy-tile equations.
//!
//! All functions take degrees. Latitude is clamped to
//! [`MAX_MERCATOR_LAT`] before projection: beyond it `tan + sec` grows
//! without bound and the formula reaches `ln(0)` / `ln(inf)` at the poles.
//! Longitude is never wrapped, so `lon = 180` lands exactly on the right
//! edge of the world (tile index `2^z`, which is out of range).

use std::f64::consts::PI;

use map_common::TileCoord;

/// Latitude at which the Mercator square world ends: `atan(sinh(pi))`.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Clamp a latitude into the projectable range.
pub fn clamp_latitude(lat: f64) -> f64 {
    lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT)
}

/// Normalized x in `[0, 1]` for a longitude in `[-180, 180]`.
pub fn lon_fraction(lon: f64) -> f64 {
    (lon + 180.0) / 360.0
}

/// Normalized y in `[0, 1]`, 0 at the north edge of the world.
pub fn mercator_y_fraction(lat: f64) -> f64 {
    let rad = clamp_latitude(lat).to_radians();
    (1.0 - (rad.tan() + 1.0 / rad.cos()).ln() / PI) / 2.0
}

/// `2^zoom` as a float.
pub fn world_tiles(zoom: u32) -> f64 {
    2f64.powi(zoom as i32)
}

/// Width (and height) of the whole world in pixels.
pub fn world_size_pixels(zoom: u32, tile_size: u32) -> f64 {
    world_tiles(zoom) * tile_size as f64
}

/// Tile column containing a longitude.
pub fn lon_to_tile_x(lon: f64, zoom: u32) -> i64 {
    (lon_fraction(lon) * world_tiles(zoom)).floor() as i64
}

/// Tile row containing a latitude.
pub fn lat_to_tile_y(lat: f64, zoom: u32) -> i64 {
    (mercator_y_fraction(lat) * world_tiles(zoom)).floor() as i64
}

/// Absolute (world) pixel x of a longitude.
pub fn lon_to_pixel(lon: f64, zoom: u32, tile_size: u32) -> f64 {
    lon_fraction(lon) * world_size_pixels(zoom, tile_size)
}

/// Absolute (world) pixel y of a latitude.
pub fn lat_to_pixel(lat: f64, zoom: u32, tile_size: u32) -> f64 {
    mercator_y_fraction(lat) * world_size_pixels(zoom, tile_size)
}

/// Inverse of [`lon_to_pixel`].
pub fn pixel_to_lon(px: f64, zoom: u32, tile_size: u32) -> f64 {
    px / world_size_pixels(zoom, tile_size) * 360.0 - 180.0
}

/// Inverse of [`lat_to_pixel`].
pub fn pixel_to_lat(py: f64, zoom: u32, tile_size: u32) -> f64 {
    let n = PI * (1.0 - 2.0 * py / world_size_pixels(zoom, tile_size));
    n.sinh().atan().to_degrees()
}

/// World pixel of a tile's top-left corner.
pub fn tile_to_pixel(coord: &TileCoord, tile_size: u32) -> (f64, f64) {
    let t = tile_size as f64;
    (coord.x as f64 * t, coord.y as f64 * t)
}

/// Tile containing a world pixel, if it lies inside the tile matrix.
pub fn pixel_to_tile(px: f64, py: f64, zoom: u32, tile_size: u32) -> Option<TileCoord> {
    let t = tile_size as f64;
    TileCoord::checked(zoom, (px / t).floor() as i64, (py / t).floor() as i64)
}
