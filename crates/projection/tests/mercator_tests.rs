//! Round-trip and monotonicity laws of the projection and zoom selection.

use map_common::{BoundingBox, TileCoord};
use projection::mercator::{
    lat_to_pixel, lon_to_pixel, pixel_to_lat, pixel_to_lon, pixel_to_tile, tile_to_pixel,
};
use projection::{select_zoom, MAX_ZOOM};
use test_utils::assert_approx_eq;

#[test]
fn test_tile_pixel_round_trip() {
    for tile_size in [256u32, 512] {
        for zoom in [0u32, 1, 5, 12, 19] {
            let n = 1u32 << zoom;
            for (x, y) in [(0, 0), (n / 2, n / 3), (n - 1, n - 1)] {
                let tile = TileCoord::new(zoom, x, y);
                let (px, py) = tile_to_pixel(&tile, tile_size);
                assert_eq!(pixel_to_tile(px, py, zoom, tile_size), Some(tile));

                // Anywhere inside the tile maps back to it.
                let inner = tile_size as f64 - 0.5;
                assert_eq!(
                    pixel_to_tile(px + inner, py + inner, zoom, tile_size),
                    Some(tile)
                );
            }
        }
    }
}

#[test]
fn test_pixel_outside_world_has_no_tile() {
    assert_eq!(pixel_to_tile(-1.0, 10.0, 2, 256), None);
    assert_eq!(pixel_to_tile(10.0, 1024.0, 2, 256), None);
}

#[test]
fn test_coordinate_pixel_round_trip() {
    for zoom in [0u32, 4, 12, 19] {
        for (lon, lat) in [(151.2093, -33.8688), (-179.9, 85.0), (0.0, 0.0), (178.44, -18.14)] {
            let px = lon_to_pixel(lon, zoom, 256);
            let py = lat_to_pixel(lat, zoom, 256);
            assert_approx_eq!(pixel_to_lon(px, zoom, 256), lon, 1e-9);
            assert_approx_eq!(pixel_to_lat(py, zoom, 256), lat, 1e-9);
        }
    }
}

#[test]
fn test_zoom_never_increases_with_span() {
    let (w, h) = (300, 300);
    let mut lon_span = 0.001;
    let mut previous = MAX_ZOOM;
    while lon_span <= 360.0 {
        let bbox = BoundingBox::new(10.0, 10.0, 10.0 + lon_span, 10.0 + lon_span / 2.0);
        let zoom = select_zoom(&bbox, w, h).unwrap();
        assert!(zoom <= previous, "span {} gave {} after {}", lon_span, zoom, previous);
        previous = zoom;
        lon_span *= 2.0;
    }
    assert_eq!(previous, 0);
}

#[test]
fn test_doubling_lat_span_alone_never_increases_zoom() {
    let mut lat_span = 0.01;
    let mut previous = MAX_ZOOM;
    while lat_span <= 160.0 {
        let bbox = BoundingBox::new(0.0, -80.0, 1.0, -80.0 + lat_span);
        let zoom = select_zoom(&bbox, 600, 200).unwrap();
        assert!(zoom <= previous);
        previous = zoom;
        lat_span *= 2.0;
    }
}
