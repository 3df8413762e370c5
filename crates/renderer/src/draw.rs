//! Geometry overlay drawing.
//!
//! One routine serves both the tiled main view and the world view; the
//! views differ only in the projection closure they pass in.

use map_common::{Coordinate, Geometry};
use projection::{split_path, split_ring};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Stroke, Transform};
use tracing::trace;

use crate::canvas::MapCanvas;
use crate::style::{MapStyle, MarkerStyle, Rgba8};

fn solid_paint(color: Rgba8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn round_stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    }
}

/// Append `coords` as one sub-path, skipping vertices that do not project
/// to finite pixels.
fn push_subpath<F>(pb: &mut PathBuilder, coords: &[Coordinate], project: &F, close: bool)
where
    F: Fn(Coordinate) -> (f64, f64),
{
    let mut started = false;
    for &c in coords {
        let (x, y) = project(c);
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        if started {
            pb.line_to(x as f32, y as f32);
        } else {
            pb.move_to(x as f32, y as f32);
            started = true;
        }
    }
    if started && close {
        pb.close();
    }
}

/// Pixel size `(width, height)` of the projected geometry's extent.
pub fn projected_extent<F>(geometry: &Geometry, project: F) -> (f64, f64)
where
    F: Fn(Coordinate) -> (f64, f64),
{
    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for c in geometry.coords() {
        let (x, y) = project(c);
        min = (min.0.min(x), min.1.min(y));
        max = (max.0.max(x), max.1.max(y));
    }
    if min.0 > max.0 {
        return (0.0, 0.0);
    }
    (max.0 - min.0, max.1 - min.1)
}

impl MapCanvas {
    /// Draw `geometry` with `style`, placing vertices with `project`.
    ///
    /// Polygons are filled and outlined, LineStrings stroked, Points drawn
    /// as markers. Rings and paths that cross the antimeridian are split
    /// first and each fragment becomes its own sub-path, so no edge is
    /// drawn across the width of the map.
    pub fn draw_geometry<F>(&mut self, geometry: &Geometry, style: &MapStyle, project: F)
    where
        F: Fn(Coordinate) -> (f64, f64),
    {
        match geometry {
            Geometry::Point(c) => {
                let (x, y) = project(*c);
                self.draw_marker(x as f32, y as f32, &style.marker);
            }
            Geometry::LineString(path) => {
                let mut pb = PathBuilder::new();
                let segments = split_path(path);
                trace!(segments = segments.len(), "Drawing line string");
                for segment in &segments {
                    push_subpath(&mut pb, segment, &project, false);
                }
                if let Some(path) = pb.finish() {
                    self.pixmap_mut().stroke_path(
                        &path,
                        &solid_paint(style.stroke.color),
                        &round_stroke(style.stroke.width),
                        Transform::identity(),
                        None,
                    );
                }
            }
            Geometry::Polygon(rings) => {
                let mut pb = PathBuilder::new();
                for ring in rings {
                    let parts = split_ring(ring);
                    trace!(parts = parts.len(), "Drawing polygon ring");
                    for part in &parts {
                        push_subpath(&mut pb, part, &project, true);
                    }
                }
                if let Some(path) = pb.finish() {
                    let pixmap = self.pixmap_mut();
                    // Even-odd so interior rings show as holes.
                    pixmap.fill_path(
                        &path,
                        &solid_paint(style.fill),
                        FillRule::EvenOdd,
                        Transform::identity(),
                        None,
                    );
                    pixmap.stroke_path(
                        &path,
                        &solid_paint(style.stroke.color),
                        &round_stroke(style.stroke.width),
                        Transform::identity(),
                        None,
                    );
                }
            }
        }
    }

    /// Filled circle with an outline, centered on `(x, y)`.
    pub fn draw_marker(&mut self, x: f32, y: f32, marker: &MarkerStyle) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        let Some(circle) = PathBuilder::from_circle(x, y, marker.radius) else {
            return;
        };

        let pixmap = self.pixmap_mut();
        pixmap.fill_path(
            &circle,
            &solid_paint(marker.fill),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        if marker.outline_width > 0.0 {
            pixmap.stroke_path(
                &circle,
                &solid_paint(marker.outline),
                &round_stroke(marker.outline_width),
                Transform::identity(),
                None,
            );
        }
    }
}
