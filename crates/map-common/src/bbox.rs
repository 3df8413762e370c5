//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// A geographic bounding box in degrees (x = longitude, y = latitude).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Compute the extent of a vertex stream in a single pass.
    ///
    /// An empty stream yields an inverted box (min = +inf, max = -inf); check
    /// [`BoundingBox::is_empty`] before using it.
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        coords.into_iter().fold(
            BoundingBox::new(
                f64::INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
            ),
            |acc, c| BoundingBox {
                min_x: acc.min_x.min(c.lon),
                min_y: acc.min_y.min(c.lat),
                max_x: acc.max_x.max(c.lon),
                max_y: acc.max_y.max(c.lat),
            },
        )
    }

    /// Width of the bounding box in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// True when no vertex was folded into the box.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// True when both spans are zero (a single location).
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 && self.height() == 0.0
    }

    /// Check if a point is contained within this bbox.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}
