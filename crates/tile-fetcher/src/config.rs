//! Tile server configuration.

use std::time::Duration;

/// Default public OpenStreetMap tile endpoint.
pub const DEFAULT_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// OSM's tile usage policy requires an identifying User-Agent.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "staticmap/",
    env!("CARGO_PKG_VERSION"),
    " (metadata preview map renderer)"
);

/// Configuration for an HTTP tile source.
#[derive(Debug, Clone, PartialEq)]
pub struct FetcherConfig {
    /// URL with `{z}`, `{x}` and `{y}` placeholders
    pub url_template: String,
    pub user_agent: String,
    /// Whole-request timeout per tile
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl FetcherConfig {
    /// Create config from environment variables, falling back to the
    /// defaults for anything unset or unparsable:
    ///
    /// - `TILE_URL_TEMPLATE`
    /// - `TILE_USER_AGENT`
    /// - `TILE_REQUEST_TIMEOUT_SECS`
    /// - `TILE_CONNECT_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let secs = |name: &str, fallback: Duration| {
            std::env::var(name)
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(fallback)
        };

        Self {
            url_template: std::env::var("TILE_URL_TEMPLATE").unwrap_or(defaults.url_template),
            user_agent: std::env::var("TILE_USER_AGENT").unwrap_or(defaults.user_agent),
            request_timeout: secs("TILE_REQUEST_TIMEOUT_SECS", defaults.request_timeout),
            connect_timeout: secs("TILE_CONNECT_TIMEOUT_SECS", defaults.connect_timeout),
        }
    }

    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = template.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
