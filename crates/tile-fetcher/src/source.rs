//! Tile sources.

use async_trait::async_trait;
use bytes::Bytes;
use map_common::{MapError, MapResult, TileCoord};
use reqwest::{header, Client};
use tracing::{debug, instrument};

use crate::config::FetcherConfig;

/// Anything that can produce the encoded image for one tile.
#[async_trait]
pub trait TileSource: Send + Sync {
    /// Fetch the encoded (PNG/JPEG/WebP) bytes of a tile.
    async fn fetch_tile(&self, coord: TileCoord) -> MapResult<Bytes>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Tile source backed by an XYZ tile server.
pub struct HttpTileSource {
    client: Client,
    url_template: String,
}

impl HttpTileSource {
    /// Build the HTTP client described by `config`.
    pub fn new(config: &FetcherConfig) -> MapResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(8)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| MapError::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url_template: config.url_template.clone(),
        })
    }

    /// URL of a tile on this server.
    pub fn tile_url(&self, coord: TileCoord) -> String {
        coord.fill_template(&self.url_template)
    }
}

#[async_trait]
impl TileSource for HttpTileSource {
    #[instrument(skip(self), fields(tile = %coord))]
    async fn fetch_tile(&self, coord: TileCoord) -> MapResult<Bytes> {
        let url = self.tile_url(coord);
        debug!(url = %url, "Requesting tile");

        let fetch_error = |message: String| MapError::TileFetch {
            tile: coord.to_string(),
            message,
        };

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "image/png,image/*;q=0.8")
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;
        debug!(size = bytes.len(), "Received tile");
        Ok(bytes)
    }

    fn name(&self) -> &str {
        &self.url_template
    }
}
