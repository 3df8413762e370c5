//! Geometry model for map overlays.
//!
//! Only the three shapes a preview map can draw are represented. Anything
//! else a WKT document may contain is reported by the parser as
//! [`MapError::UnsupportedGeometryType`](crate::MapError::UnsupportedGeometryType).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{BoundingBox, MapResult};

/// A longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

/// The geometry type tag, used for logging and dispatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryKind::Point => write!(f, "Point"),
            GeometryKind::LineString => write!(f, "LineString"),
            GeometryKind::Polygon => write!(f, "Polygon"),
        }
    }
}

/// A parsed geometry.
///
/// Polygon rings are kept exactly as given; a ring whose last vertex differs
/// from its first is treated as implicitly closed when drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
    Polygon(Vec<Vec<Coordinate>>),
}

impl Geometry {
    /// Parse a WKT string. See [`crate::wkt::parse_wkt`].
    pub fn from_wkt(input: &str) -> MapResult<Self> {
        crate::wkt::parse_wkt(input)
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
        }
    }

    /// Iterate over every vertex without materializing a flattened copy.
    pub fn coords(&self) -> Coords<'_> {
        match self {
            Geometry::Point(c) => Coords::Point(Some(*c)),
            Geometry::LineString(path) => Coords::Path(path.iter()),
            Geometry::Polygon(rings) => Coords::Rings(rings.iter().flatten()),
        }
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(path) => path.len(),
            Geometry::Polygon(rings) => rings.iter().map(Vec::len).sum(),
        }
    }

    /// Bounding box over all vertices.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_coords(self.coords())
    }

    /// Arithmetic mean of all vertices.
    pub fn vertex_centroid(&self) -> Coordinate {
        let (sum_lon, sum_lat, n) = self
            .coords()
            .fold((0.0, 0.0, 0usize), |(lon, lat, n), c| {
                (lon + c.lon, lat + c.lat, n + 1)
            });

        if n == 0 {
            return Coordinate::new(0.0, 0.0);
        }
        Coordinate::new(sum_lon / n as f64, sum_lat / n as f64)
    }
}

/// Vertex iterator returned by [`Geometry::coords`].
pub enum Coords<'a> {
    Point(Option<Coordinate>),
    Path(std::slice::Iter<'a, Coordinate>),
    Rings(std::iter::Flatten<std::slice::Iter<'a, Vec<Coordinate>>>),
}

impl Iterator for Coords<'_> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        match self {
            Coords::Point(c) => c.take(),
            Coords::Path(iter) => iter.next().copied(),
            Coords::Rings(iter) => iter.next().copied(),
        }
    }
}
