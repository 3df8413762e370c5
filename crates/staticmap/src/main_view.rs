//! The tiled main view.

use map_common::{BoundingBox, Coordinate, Geometry, MapResult};
use projection::{resolve_zoom, Viewport, DEFAULT_ZOOM};
use renderer::{EncodedImage, MapCanvas, MapStyle};
use tile_fetcher::{fetch_tiles, TileImage, TileSource};
use tracing::{debug, instrument, warn};

use crate::request::MapRequest;

/// Center and zoom of the main view.
///
/// The view is centered on the geometry's bounding box, or on (0, 0) when
/// there is nothing to draw.
pub fn plan_viewport(geometry: Option<&Geometry>, request: &MapRequest) -> Viewport {
    let bbox = geometry
        .map(Geometry::bounding_box)
        .unwrap_or_else(|| BoundingBox::from_coords(std::iter::empty()));
    let center = if bbox.is_empty() {
        Coordinate::new(0.0, 0.0)
    } else {
        bbox.center()
    };

    let spans_area = matches!(
        geometry,
        Some(Geometry::LineString(_)) | Some(Geometry::Polygon(_))
    );
    if request.zoom.is_none() && spans_area && bbox.is_degenerate() {
        warn!(
            lon = center.lon,
            lat = center.lat,
            zoom = DEFAULT_ZOOM,
            "Degenerate bounding box, using default zoom"
        );
    }

    let zoom = resolve_zoom(geometry, &bbox, request.zoom, request.width, request.height);
    debug!(
        zoom,
        center_lon = center.lon,
        center_lat = center.lat,
        "Planned main view"
    );

    Viewport::centered(
        center,
        zoom as u32,
        request.tile_size,
        request.width,
        request.height,
    )
}

/// Render the main view: background, every tile that arrived, the geometry
/// and the attribution caption.
#[instrument(skip_all, fields(zoom = viewport.zoom, width = viewport.width, height = viewport.height))]
pub async fn render_main_view(
    source: &dyn TileSource,
    geometry: Option<&Geometry>,
    viewport: &Viewport,
    style: &MapStyle,
) -> MapResult<EncodedImage> {
    let mut canvas = MapCanvas::new(viewport.width, viewport.height, style.background)?;

    let coords = viewport.tile_grid().coords();
    let tiles = fetch_tiles(source, &coords).await;

    let tile_size = viewport.tile_size as f32;
    for tile in &tiles {
        if let TileImage::Loaded(pixmap) = &tile.image {
            let (x, y) = viewport.tile_offset(&tile.coord);
            canvas.draw_image(pixmap, x as f32, y as f32, tile_size, tile_size);
        }
    }

    if let Some(geometry) = geometry {
        canvas.draw_geometry(geometry, style, |c| viewport.project(c));
    }
    canvas.draw_attribution(&style.caption);

    canvas.encode_png()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assert_coordinate_approx_eq;

    fn plan(wkt: &str, request: &MapRequest) -> Viewport {
        let geometry = Geometry::from_wkt(wkt).unwrap();
        plan_viewport(Some(&geometry), request)
    }

    #[test]
    fn test_point_uses_default_zoom() {
        let vp = plan("POINT(151.2093 -33.8688)", &MapRequest::default());
        assert_eq!(vp.zoom, DEFAULT_ZOOM as u32);
        assert_eq!(vp.center, Coordinate::new(151.2093, -33.8688));
    }

    #[test]
    fn test_line_is_centered_on_its_box() {
        let vp = plan(
            "LINESTRING(151.2093 -33.8688, 144.9631 -37.8136)",
            &MapRequest::default(),
        );
        assert_eq!(vp.zoom, 5);
        assert_coordinate_approx_eq!(vp.center, Coordinate::new(148.0862, -35.8412), 1e-9);
    }

    #[test]
    fn test_explicit_zoom_wins() {
        let vp = plan(
            "POLYGON((140 -10,155 -10,155 -40,140 -40,140 -10))",
            &MapRequest::default().with_zoom(9),
        );
        assert_eq!(vp.zoom, 9);
    }

    #[test]
    fn test_degenerate_line_falls_back_to_default_zoom() {
        let vp = plan("LINESTRING(10 10, 10 10)", &MapRequest::default());
        assert_eq!(vp.zoom, DEFAULT_ZOOM as u32);
    }

    #[test]
    fn test_no_geometry_centers_on_origin() {
        let vp = plan_viewport(None, &MapRequest::default().with_size(512, 256));
        assert_eq!(vp.center, Coordinate::new(0.0, 0.0));
        assert_eq!(vp.zoom, DEFAULT_ZOOM as u32);
        assert_eq!((vp.width, vp.height, vp.tile_size), (512, 256, 256));
    }
}
