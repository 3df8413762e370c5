//! Static map rendering from WKT.
//!
//! Given a Point, LineString or Polygon in Well-Known Text, renders a map
//! image composited from OpenStreetMap tiles with the geometry drawn on top,
//! plus an optional zoom-0 world overview. Both come back as PNGs that can
//! be embedded as data URLs.
//!
//! ```no_run
//! # async fn demo() -> map_common::MapResult<()> {
//! let output = staticmap::render_static_map(
//!     "POINT(151.2093 -33.8688)",
//!     300,
//!     300,
//!     Some(12),
//!     256,
//!     true,
//! )
//! .await?;
//! let html = format!("<img src=\"{}\">", output.main_data_url());
//! # Ok(())
//! # }
//! ```
//!
//! Only malformed WKT and invalid sizes are errors. Unsupported geometry
//! types render without an overlay, and unreachable tiles leave the
//! background showing.

pub mod main_view;
pub mod request;
pub mod world_view;

use std::sync::Arc;

use map_common::{Geometry, MapResult};
use renderer::MapStyle;
use tile_fetcher::{FetcherConfig, HttpTileSource, TileSource};
use tracing::{info, instrument, warn};

pub use main_view::{plan_viewport, render_main_view};
pub use request::{MapOutput, MapRequest, MAX_CANVAS_SIZE, MAX_TILE_SIZE, MIN_TILE_SIZE};
pub use world_view::render_world_view;

/// Renders static maps against one tile source.
///
/// Cheap to share; each render owns its canvases and tile set.
pub struct StaticMapRenderer {
    source: Arc<dyn TileSource>,
    style: MapStyle,
}

impl StaticMapRenderer {
    pub fn new(source: Arc<dyn TileSource>) -> Self {
        Self {
            source,
            style: MapStyle::default(),
        }
    }

    /// Renderer backed by an HTTP tile server.
    pub fn from_config(config: &FetcherConfig) -> MapResult<Self> {
        Ok(Self::new(Arc::new(HttpTileSource::new(config)?)))
    }

    pub fn with_style(mut self, style: MapStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &MapStyle {
        &self.style
    }

    /// Render `wkt` per `request`.
    ///
    /// The main and world views are rendered concurrently over the same
    /// parsed geometry and returned together once both finish.
    #[instrument(skip(self, request), fields(source = self.source.name()))]
    pub async fn render(&self, wkt: &str, request: &MapRequest) -> MapResult<MapOutput> {
        request.validate()?;
        let geometry = parse_geometry(wkt)?;
        let geometry = geometry.as_ref();

        let viewport = plan_viewport(geometry, request);
        let source = self.source.as_ref();
        let main = render_main_view(source, geometry, &viewport, &self.style);

        let (main, world) = if request.include_world_view {
            let world =
                render_world_view(source, geometry, request.width, request.height, &self.style);
            let (main, world) = tokio::join!(main, world);
            (main?, Some(world?))
        } else {
            (main.await?, None)
        };

        info!(
            zoom = viewport.zoom,
            main_bytes = main.len(),
            world_bytes = world.as_ref().map(|w| w.len()),
            "Rendered static map"
        );

        Ok(MapOutput {
            main,
            world,
            zoom: viewport.zoom as u8,
        })
    }
}

/// Parse `wkt`, downgrading non-fatal problems to "nothing to draw".
fn parse_geometry(wkt: &str) -> MapResult<Option<Geometry>> {
    match Geometry::from_wkt(wkt) {
        Ok(geometry) => Ok(Some(geometry)),
        Err(e) if !e.is_fatal() => {
            warn!(error = %e, "Geometry will not be drawn");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Render `wkt` against the OpenStreetMap tile server (or the server named
/// by `TILE_URL_TEMPLATE`).
pub async fn render_static_map(
    wkt: &str,
    width: u32,
    height: u32,
    zoom: Option<u8>,
    tile_size: u32,
    include_world_view: bool,
) -> MapResult<MapOutput> {
    let request = MapRequest {
        width,
        height,
        zoom,
        tile_size,
        include_world_view,
    };
    StaticMapRenderer::from_config(&FetcherConfig::from_env())?
        .render(wkt, &request)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use map_common::MapError;

    #[test]
    fn test_parse_geometry_policy() {
        assert!(parse_geometry("POINT(1 2)").unwrap().is_some());
        assert!(parse_geometry("MULTIPOINT((1 2),(3 4))").unwrap().is_none());
        assert!(parse_geometry("POINT EMPTY").unwrap().is_none());
        assert!(matches!(
            parse_geometry("POINT(1").unwrap_err(),
            MapError::MalformedGeometry(_)
        ));
    }

    #[tokio::test]
    async fn test_render_static_map_rejects_bad_input_before_fetching() {
        let err = render_static_map("LINESTRING(1 2", 300, 300, None, 256, true)
            .await
            .unwrap_err();
        assert!(matches!(err, MapError::MalformedGeometry(_)));

        let err = render_static_map("POINT(1 2)", 0, 300, None, 256, true)
            .await
            .unwrap_err();
        assert!(matches!(err, MapError::InvalidParameter { .. }));
    }
}
