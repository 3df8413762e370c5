//! Concurrent grid fetching and tile decoding.

use futures::future::join_all;
use map_common::{MapError, MapResult, TileCoord};
use tiny_skia::{IntSize, Pixmap};
use tracing::{debug, instrument, warn};

use crate::source::TileSource;

/// Outcome of fetching one tile.
#[derive(Debug, Clone)]
pub enum TileImage {
    Loaded(Pixmap),
    /// The tile could not be fetched or decoded; its area stays background.
    Missing,
}

impl TileImage {
    pub fn is_loaded(&self) -> bool {
        matches!(self, TileImage::Loaded(_))
    }

    pub fn pixmap(&self) -> Option<&Pixmap> {
        match self {
            TileImage::Loaded(pixmap) => Some(pixmap),
            TileImage::Missing => None,
        }
    }
}

/// A tile slot of a grid fetch.
#[derive(Debug, Clone)]
pub struct FetchedTile {
    pub coord: TileCoord,
    pub image: TileImage,
}

/// Decode an encoded tile into a premultiplied pixmap.
pub fn decode_tile(coord: TileCoord, bytes: &[u8]) -> MapResult<Pixmap> {
    let decode_error = |message: String| MapError::TileDecode {
        tile: coord.to_string(),
        message,
    };

    let rgba = image::load_from_memory(bytes)
        .map_err(|e| decode_error(e.to_string()))?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    let size = IntSize::from_wh(width, height)
        .ok_or_else(|| decode_error(format!("invalid size {}x{}", width, height)))?;

    let mut data = rgba.into_raw();
    premultiply(&mut data);

    Pixmap::from_vec(data, size).ok_or_else(|| decode_error("pixel buffer mismatch".to_string()))
}

/// Convert straight RGBA to the premultiplied form tiny-skia stores.
fn premultiply(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u32 * a + 127) / 255) as u8;
        }
    }
}

/// Fetch and decode a single tile, keeping the error.
pub async fn fetch_tile_image(source: &dyn TileSource, coord: TileCoord) -> MapResult<Pixmap> {
    let bytes = source.fetch_tile(coord).await?;
    decode_tile(coord, &bytes)
}

/// Fetch every tile in `coords` concurrently.
///
/// All requests are in flight at once and run to completion; a failure
/// never cancels its siblings. The result has one entry per coordinate in
/// input order, with failures logged and recorded as [`TileImage::Missing`].
#[instrument(skip(source, coords), fields(source = source.name(), tiles = coords.len()))]
pub async fn fetch_tiles(source: &dyn TileSource, coords: &[TileCoord]) -> Vec<FetchedTile> {
    let requests = coords.iter().map(|&coord| async move {
        let image = match fetch_tile_image(source, coord).await {
            Ok(pixmap) => TileImage::Loaded(pixmap),
            Err(e) => {
                warn!(tile = %coord, error = %e, "Tile unavailable, leaving background");
                TileImage::Missing
            }
        };
        FetchedTile { coord, image }
    });

    let tiles = join_all(requests).await;

    let loaded = tiles.iter().filter(|t| t.image.is_loaded()).count();
    debug!(loaded, missing = tiles.len() - loaded, "Tile grid fetched");
    tiles
}
