//! Error types for static map rendering.

use thiserror::Error;

/// Result type alias using MapError.
pub type MapResult<T> = Result<T, MapError>;

/// Primary error type for map rendering operations.
#[derive(Debug, Error)]
pub enum MapError {
    // === Input Errors ===
    #[error("Malformed geometry: {0}")]
    MalformedGeometry(String),

    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometryType(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // === Tile Errors ===
    #[error("Failed to fetch tile {tile}: {message}")]
    TileFetch { tile: String, message: String },

    #[error("Failed to decode tile {tile}: {message}")]
    TileDecode { tile: String, message: String },

    #[error("Failed to fetch world tile: {0}")]
    WorldTileFetch(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    // === Output Errors ===
    #[error("Image encoding failed: {0}")]
    Encode(String),
}

impl MapError {
    /// Whether this error aborts a render call.
    ///
    /// Tile failures and unsupported geometry types degrade to a visibly
    /// incomplete image instead.
    pub fn is_fatal(&self) -> bool {
        match self {
            MapError::MalformedGeometry(_)
            | MapError::InvalidParameter { .. }
            | MapError::Http(_)
            | MapError::Encode(_) => true,

            MapError::UnsupportedGeometryType(_)
            | MapError::TileFetch { .. }
            | MapError::TileDecode { .. }
            | MapError::WorldTileFetch(_) => false,
        }
    }

    pub fn invalid_parameter(param: &str, message: impl Into<String>) -> Self {
        MapError::InvalidParameter {
            param: param.to_string(),
            message: message.into(),
        }
    }
}
