//! Common types shared across the static map crates.

pub mod bbox;
pub mod error;
pub mod geometry;
pub mod tile;
pub mod wkt;

pub use bbox::BoundingBox;
pub use error::{MapError, MapResult};
pub use geometry::{Coordinate, Geometry, GeometryKind};
pub use tile::TileCoord;
