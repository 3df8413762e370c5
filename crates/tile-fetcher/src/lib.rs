//! Slippy-map tile fetching.
//!
//! A [`TileSource`] hands out the encoded bytes of one tile; [`fetch_tiles`]
//! requests a whole grid concurrently and decodes whatever arrives, turning
//! every failure into a [`TileImage::Missing`] slot instead of an error.

pub mod config;
pub mod fetch;
pub mod source;

pub use config::FetcherConfig;
pub use fetch::{decode_tile, fetch_tile_image, fetch_tiles, FetchedTile, TileImage};
pub use source::{HttpTileSource, TileSource};
