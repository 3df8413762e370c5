//! Web-Mercator projection for slippy-map rendering.
//!
//! Implements the projection math from scratch: tile and pixel addressing,
//! zoom selection from a geometry extent, and antimeridian splitting so
//! projected paths never wrap across the whole map.

pub mod antimeridian;
pub mod mercator;
pub mod viewport;
pub mod zoom;

pub use antimeridian::{crosses_antimeridian, split_path, split_ring, CrossingDirection};
pub use mercator::MAX_MERCATOR_LAT;
pub use viewport::{Viewport, WorldFit};
pub use zoom::{resolve_zoom, select_zoom, DEFAULT_ZOOM, MAX_ZOOM};
