//! In-memory [`TileSource`] implementations.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use map_common::{MapError, MapResult, TileCoord};
use tile_fetcher::TileSource;

use crate::generators::land_tile_png;

/// Serves the same image for every tile, except for explicit overrides and
/// tiles marked as failing.
pub struct StaticTileSource {
    default: Bytes,
    overrides: HashMap<TileCoord, Bytes>,
    failing: Vec<TileCoord>,
    delay: Option<Duration>,
}

impl StaticTileSource {
    pub fn new(default: Bytes) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
            failing: Vec::new(),
            delay: None,
        }
    }

    /// Plain land-colored 256px tiles.
    pub fn land() -> Self {
        Self::new(land_tile_png())
    }

    pub fn with_tile(mut self, coord: TileCoord, bytes: Bytes) -> Self {
        self.overrides.insert(coord, bytes);
        self
    }

    pub fn with_failing(mut self, coord: TileCoord) -> Self {
        self.failing.push(coord);
        self
    }

    /// Sleep before answering, to exercise concurrency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl TileSource for StaticTileSource {
    async fn fetch_tile(&self, coord: TileCoord) -> MapResult<Bytes> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(&coord) {
            return Err(MapError::TileFetch {
                tile: coord.to_string(),
                message: "HTTP 503 Service Unavailable".to_string(),
            });
        }
        Ok(self
            .overrides
            .get(&coord)
            .cloned()
            .unwrap_or_else(|| self.default.clone()))
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Fails every request, simulating a network outage.
#[derive(Debug, Default)]
pub struct FailingTileSource;

#[async_trait]
impl TileSource for FailingTileSource {
    async fn fetch_tile(&self, coord: TileCoord) -> MapResult<Bytes> {
        Err(MapError::TileFetch {
            tile: coord.to_string(),
            message: "connection refused".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Records every request before delegating to an inner source.
pub struct CountingTileSource {
    inner: Arc<dyn TileSource>,
    count: AtomicUsize,
    requested: Mutex<Vec<TileCoord>>,
}

impl CountingTileSource {
    pub fn new(inner: Arc<dyn TileSource>) -> Self {
        Self {
            inner,
            count: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Requested coordinates, sorted.
    pub fn requested(&self) -> Vec<TileCoord> {
        let mut coords = self.requested.lock().unwrap().clone();
        coords.sort_by_key(|c| (c.z, c.x, c.y));
        coords
    }
}

#[async_trait]
impl TileSource for CountingTileSource {
    async fn fetch_tile(&self, coord: TileCoord) -> MapResult<Bytes> {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(coord);
        self.inner.fetch_tile(coord).await
    }

    fn name(&self) -> &str {
        "counting"
    }
}
