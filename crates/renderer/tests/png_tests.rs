//! Tests for PNG encoding of map canvases.
//!
//! Covers format selection (indexed vs RGBA), that the output decodes with
//! an independent decoder, and the size advantage of palette mode for flat
//! map imagery.

use renderer::png::{create_png, create_png_auto};
use std::collections::HashSet;

// ============================================================================
// Helper functions
// ============================================================================

fn count_unique_colors(pixels: &[u8]) -> usize {
    pixels
        .chunks_exact(4)
        .map(|px| u32::from_le_bytes([px[0], px[1], px[2], px[3]]))
        .collect::<HashSet<_>>()
        .len()
}

/// Ocean background with a translucent blue square and a solid outline,
/// roughly what an untiled map with a polygon looks like.
fn flat_map_pixels(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let edge = x == width / 4 || x == 3 * width / 4 || y == height / 4 || y == 3 * height / 4;
            let inside = (width / 4..=3 * width / 4).contains(&x)
                && (height / 4..=3 * height / 4).contains(&y);
            let c = if inside && edge {
                [0, 0, 255, 255]
            } else if inside {
                [157, 182, 255, 255]
            } else {
                [196, 228, 255, 255]
            };
            pixels.extend_from_slice(&c);
        }
    }
    pixels
}

fn decode(png: &[u8]) -> image::RgbaImage {
    image::load_from_memory_with_format(png, image::ImageFormat::Png)
        .unwrap()
        .to_rgba8()
}

// ============================================================================
// Basic PNG creation tests
// ============================================================================

#[test]
fn test_create_png_signature() {
    let pixels = [
        255, 0, 0, 255, // red
        0, 255, 0, 255, // green
        0, 255, 0, 255, // green
        255, 0, 0, 255, // red
    ];

    let png = create_png_auto(&pixels, 2, 2).unwrap();
    assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}

#[test]
fn test_rgba_png_decodes_exactly() {
    let pixels = [
        255, 0, 0, 255, // red
        0, 255, 0, 255, // green
        0, 0, 255, 255, // blue
        255, 255, 0, 255, // yellow
    ];

    let img = decode(&create_png(&pixels, 2, 2).unwrap());
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.as_raw().as_slice(), &pixels[..]);
}

#[test]
fn test_indexed_png_keeps_transparency() {
    let pixels = [
        255, 0, 0, 255, // red, opaque
        0, 0, 0, 0, // transparent
        0, 255, 0, 128, // green, semi-transparent
        0, 0, 255, 255, // blue, opaque
    ];

    let png = create_png_auto(&pixels, 2, 2).unwrap();
    assert_eq!(png[25], 3);
    let img = decode(&png);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);
    assert_eq!(img.get_pixel(0, 1).0, [0, 255, 0, 128]);
}

// ============================================================================
// Format selection tests
// ============================================================================

#[test]
fn test_many_colors_fall_back_to_rgba() {
    let mut pixels = Vec::with_capacity(300 * 4);
    for i in 0..300u32 {
        pixels.extend_from_slice(&[(i % 256) as u8, (i / 256) as u8, 7, 255]);
    }

    let png = create_png_auto(&pixels, 300, 1).unwrap();
    assert_eq!(png[25], 6);
    assert_eq!(decode(&png).as_raw().as_slice(), &pixels[..]);
}

#[test]
fn test_large_flat_map_uses_parallel_palette() {
    // 300x300 is well above the parallel threshold
    let pixels = flat_map_pixels(300, 300);
    assert_eq!(count_unique_colors(&pixels), 3);

    let png = create_png_auto(&pixels, 300, 300).unwrap();
    assert_eq!(png[25], 3);

    let img = decode(&png);
    assert_eq!(img.get_pixel(0, 0).0, [196, 228, 255, 255]);
    assert_eq!(img.get_pixel(150, 150).0, [157, 182, 255, 255]);
    assert_eq!(img.get_pixel(75, 150).0, [0, 0, 255, 255]);
}

// ============================================================================
// File size comparison tests
// ============================================================================

#[test]
fn test_indexed_is_smaller_for_flat_maps() {
    let pixels = flat_map_pixels(256, 256);

    let indexed = create_png_auto(&pixels, 256, 256).unwrap();
    let rgba = create_png(&pixels, 256, 256).unwrap();

    assert!(
        indexed.len() < rgba.len(),
        "Indexed PNG ({} bytes) should be smaller than RGBA ({} bytes)",
        indexed.len(),
        rgba.len()
    );
}
