//! Synthetic tile images.
//!
//! Tiles are generated in memory so no test depends on a tile server or on
//! image files checked into the repository.

use bytes::Bytes;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};

/// OSM tile edge length in pixels.
pub const TILE_SIZE: u32 = 256;

fn encode_png(img: &RgbaImage) -> Bytes {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)
        .expect("encoding an in-memory PNG cannot fail");
    Bytes::from(buf)
}

/// A PNG tile filled with one color.
///
/// # Example
///
/// ```
/// use test_utils::solid_tile_png;
///
/// let png = solid_tile_png(256, [0, 128, 0, 255]);
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn solid_tile_png(size: u32, rgba: [u8; 4]) -> Bytes {
    encode_png(&RgbaImage::from_pixel(size, size, Rgba(rgba)))
}

/// A PNG tile with an 8x8 checkerboard of two colors, useful for checking
/// that tiles land at the right offsets.
pub fn checker_tile_png(size: u32, a: [u8; 4], b: [u8; 4]) -> Bytes {
    let cell = (size / 8).max(1);
    let img = RgbaImage::from_fn(size, size, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            Rgba(a)
        } else {
            Rgba(b)
        }
    });
    encode_png(&img)
}

/// A tile that looks like land on the default map style.
pub fn land_tile_png() -> Bytes {
    solid_tile_png(TILE_SIZE, [242, 239, 233, 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_tile_decodes() {
        let png = solid_tile_png(16, [1, 2, 3, 255]);
        let img = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (16, 16));
        assert_eq!(img.get_pixel(7, 7).0, [1, 2, 3, 255]);
    }

    #[test]
    fn test_checker_tile_alternates() {
        let png = checker_tile_png(16, [255, 0, 0, 255], [0, 0, 255, 255]);
        let img = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 0).0, [0, 0, 255, 255]);
    }
}
