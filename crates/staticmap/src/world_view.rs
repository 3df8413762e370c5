//! The zoom-0 overview.

use map_common::{Coordinate, Geometry, MapError, MapResult, TileCoord};
use projection::WorldFit;
use renderer::{projected_extent, EncodedImage, MapCanvas, MapStyle};
use tile_fetcher::{fetch_tile_image, TileSource};
use tracing::{debug, instrument, warn};

/// Render the world view: the single zoom-0 tile fitted into the canvas
/// with the geometry on top, or an error message when the tile is
/// unavailable. The caption is drawn either way.
#[instrument(skip(source, geometry, style))]
pub async fn render_world_view(
    source: &dyn TileSource,
    geometry: Option<&Geometry>,
    width: u32,
    height: u32,
    style: &MapStyle,
) -> MapResult<EncodedImage> {
    let mut canvas = MapCanvas::new(width, height, style.background)?;

    match fetch_tile_image(source, TileCoord::world()).await {
        Ok(world) => {
            let fit = WorldFit::fit(width, height, world.width(), world.height());
            debug!(
                draw_width = fit.draw_width,
                draw_height = fit.draw_height,
                "Fitted world tile"
            );
            canvas.draw_image(
                &world,
                fit.offset_x as f32,
                fit.offset_y as f32,
                fit.draw_width as f32,
                fit.draw_height as f32,
            );
            if let Some(geometry) = geometry {
                draw_world_geometry(&mut canvas, geometry, &fit, style);
            }
        }
        Err(e) => {
            let err = MapError::WorldTileFetch(e.to_string());
            warn!(error = %err, "Rendering world view without its tile");
            canvas.draw_centered_text(&style.error_text, style.error_size, style.error_color);
        }
    }

    canvas.draw_attribution(&style.caption);
    canvas.encode_png()
}

/// Draw the geometry at world scale. Shapes that shrink below the marker
/// diameter also get a marker at their centroid.
fn draw_world_geometry(canvas: &mut MapCanvas, geometry: &Geometry, fit: &WorldFit, style: &MapStyle) {
    let project = |c: Coordinate| fit.project(c);
    canvas.draw_geometry(geometry, style, project);

    if matches!(geometry, Geometry::Point(_)) {
        return;
    }
    let (w, h) = projected_extent(geometry, project);
    if w.max(h) < 2.0 * style.marker.radius as f64 {
        let (x, y) = fit.project(geometry.vertex_centroid());
        canvas.draw_marker(x as f32, y as f32, &style.marker);
    }
}
