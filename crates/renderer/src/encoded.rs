//! Encoded map images and their data-URL form.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// MIME prefix of a base64 PNG data URL.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// A finished PNG image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl EncodedImage {
    /// Self-contained `data:image/png;base64,...` handle, embeddable
    /// anywhere an image URL is accepted.
    pub fn to_data_url(&self) -> String {
        let mut url = String::with_capacity(PNG_DATA_URL_PREFIX.len() + self.png.len() * 4 / 3 + 4);
        url.push_str(PNG_DATA_URL_PREFIX);
        STANDARD.encode_string(&self.png, &mut url);
        url
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn len(&self) -> usize {
        self.png.len()
    }

    pub fn is_empty(&self) -> bool {
        self.png.is_empty()
    }
}
