//! Zoom level selection from a geometry's extent.

use map_common::{BoundingBox, Geometry};
use tracing::{debug, warn};

/// Highest zoom served by the OpenStreetMap tile server.
pub const MAX_ZOOM: u8 = 19;

/// Zoom used for points and for extents too small to measure.
pub const DEFAULT_ZOOM: u8 = 12;

/// Derive a zoom level so the extent roughly fills a `width x height` canvas.
///
/// `zoom = clamp(floor(log2(min(width / lon_span, height / lat_span))), 0, 19)`
///
/// A zero span contributes an unbounded ratio. Returns `None` when both
/// spans are zero (or the box is empty), leaving the choice to the caller.
pub fn select_zoom(bbox: &BoundingBox, width: u32, height: u32) -> Option<u8> {
    if bbox.is_empty() {
        return None;
    }

    let ratio = |pixels: u32, span: f64| {
        if span > 0.0 {
            pixels as f64 / span
        } else {
            f64::INFINITY
        }
    };

    let scale = ratio(width, bbox.width()).min(ratio(height, bbox.height()));
    if !scale.is_finite() {
        return None;
    }

    let zoom = scale.log2().floor().clamp(0.0, MAX_ZOOM as f64);
    Some(zoom as u8)
}

/// Pick the zoom for a render.
///
/// Precedence: an explicit zoom (clamped to [`MAX_ZOOM`]), then
/// [`select_zoom`] for LineStrings and Polygons, then [`DEFAULT_ZOOM`].
pub fn resolve_zoom(
    geometry: Option<&Geometry>,
    bbox: &BoundingBox,
    explicit: Option<u8>,
    width: u32,
    height: u32,
) -> u8 {
    if let Some(zoom) = explicit {
        if zoom > MAX_ZOOM {
            warn!(requested = zoom, max = MAX_ZOOM, "Requested zoom above maximum, clamping");
            return MAX_ZOOM;
        }
        return zoom;
    }

    let selected = match geometry {
        Some(Geometry::LineString(_)) | Some(Geometry::Polygon(_)) => {
            let zoom = select_zoom(bbox, width, height);
            if zoom.is_none() {
                debug!(
                    lon_span = bbox.width(),
                    lat_span = bbox.height(),
                    "Degenerate bounding box, using default zoom"
                );
            }
            zoom
        }
        Some(Geometry::Point(_)) | None => None,
    };

    selected.unwrap_or(DEFAULT_ZOOM)
}
