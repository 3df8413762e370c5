//! Well-Known Text parsing for the geometry types a map overlay can draw.
//!
//! Text is tokenized and parsed by the `wkt` crate and converted through
//! `geo-types`; this module only narrows the result to the closed
//! [`Geometry`] enum. POINT, LINESTRING and POLYGON (with optional Z, M or
//! ZM ordinates, which are dropped) are drawable. Every other valid type,
//! and any `EMPTY` geometry, is reported as unsupported.

use std::str::FromStr;

use geo_types::{Coord, Geometry as GeoGeometry, LineString};
use ::wkt::Wkt;

use crate::{Coordinate, Geometry, MapError, MapResult};

/// Minimum vertex count for a LineString.
pub const MIN_LINESTRING_VERTICES: usize = 2;

/// Minimum vertex count for a polygon ring.
pub const MIN_RING_VERTICES: usize = 4;

/// Parse a WKT string into a [`Geometry`].
///
/// Returns `MalformedGeometry` for text that is not valid WKT (or holds
/// non-finite or too few vertices) and `UnsupportedGeometryType` for valid
/// WKT naming a type that cannot be drawn.
pub fn parse_wkt(input: &str) -> MapResult<Geometry> {
    let parsed = Wkt::<f64>::from_str(input).map_err(|e| malformed(input, e))?;

    // The only conversion failure for a full geometry is an empty point.
    let geometry = GeoGeometry::<f64>::try_from(parsed)
        .map_err(|_| MapError::UnsupportedGeometryType(format!("{} EMPTY", leading_tag(input))))?;

    match geometry {
        GeoGeometry::Point(point) => Ok(Geometry::Point(coordinate(point.0, input)?)),
        GeoGeometry::LineString(line) => {
            if line.0.is_empty() {
                return Err(empty("LINESTRING"));
            }
            let path = path(&line, input)?;
            if path.len() < MIN_LINESTRING_VERTICES {
                return Err(malformed(
                    input,
                    format!(
                        "LINESTRING needs at least {} vertices, got {}",
                        MIN_LINESTRING_VERTICES,
                        path.len()
                    ),
                ));
            }
            Ok(Geometry::LineString(path))
        }
        GeoGeometry::Polygon(polygon) => {
            if polygon.exterior().0.is_empty() {
                return Err(empty("POLYGON"));
            }
            let rings = std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .map(|ring| {
                    let ring = path(ring, input)?;
                    if ring.len() < MIN_RING_VERTICES {
                        return Err(malformed(
                            input,
                            format!(
                                "POLYGON ring needs at least {} vertices, got {}",
                                MIN_RING_VERTICES,
                                ring.len()
                            ),
                        ));
                    }
                    Ok(ring)
                })
                .collect::<MapResult<Vec<_>>>()?;
            Ok(Geometry::Polygon(rings))
        }
        other => Err(MapError::UnsupportedGeometryType(type_name(&other).to_string())),
    }
}

fn coordinate(c: Coord<f64>, input: &str) -> MapResult<Coordinate> {
    if !(c.x.is_finite() && c.y.is_finite()) {
        return Err(malformed(input, format!("non-finite coordinate ({} {})", c.x, c.y)));
    }
    Ok(Coordinate::new(c.x, c.y))
}

fn path(line: &LineString<f64>, input: &str) -> MapResult<Vec<Coordinate>> {
    line.0.iter().map(|&c| coordinate(c, input)).collect()
}

fn type_name(geometry: &GeoGeometry<f64>) -> &'static str {
    match geometry {
        GeoGeometry::Point(_) => "POINT",
        GeoGeometry::Line(_) => "LINE",
        GeoGeometry::LineString(_) => "LINESTRING",
        GeoGeometry::Polygon(_) => "POLYGON",
        GeoGeometry::MultiPoint(_) => "MULTIPOINT",
        GeoGeometry::MultiLineString(_) => "MULTILINESTRING",
        GeoGeometry::MultiPolygon(_) => "MULTIPOLYGON",
        GeoGeometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        GeoGeometry::Rect(_) => "RECT",
        GeoGeometry::Triangle(_) => "TRIANGLE",
    }
}

/// Upper-cased geometry keyword at the start of `input`.
fn leading_tag(input: &str) -> String {
    input
        .trim_start()
        .split(|c: char| !c.is_ascii_alphabetic())
        .next()
        .unwrap_or_default()
        .to_ascii_uppercase()
}

fn empty(tag: &str) -> MapError {
    MapError::UnsupportedGeometryType(format!("{} EMPTY", tag))
}

fn malformed(input: &str, message: impl std::fmt::Display) -> MapError {
    const MAX_ECHO: usize = 64;
    let echoed: String = input.chars().take(MAX_ECHO).collect();
    let ellipsis = if input.chars().count() > MAX_ECHO { "..." } else { "" };
    MapError::MalformedGeometry(format!("{} in '{}{}'", message, echoed, ellipsis))
}
