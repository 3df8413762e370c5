//! Raster drawing for static maps.
//!
//! - [`MapCanvas`]: tiny-skia backed canvas for tiles, overlays and captions
//! - Geometry overlays with antimeridian splitting ([`draw`])
//! - Caption text rasterised from an embedded TrueType font ([`text`])
//! - Hand-rolled PNG encoding with automatic palette mode ([`png`])

pub mod canvas;
pub mod draw;
pub mod encoded;
pub mod png;
pub mod style;
pub mod text;

pub use canvas::MapCanvas;
pub use draw::projected_extent;
pub use encoded::{EncodedImage, PNG_DATA_URL_PREFIX};
pub use png::create_png_auto;
pub use style::{hex_to_rgba, CaptionLine, CaptionStyle, MapStyle, MarkerStyle, Rgba8, StrokeStyle};
pub use text::{draw_text, text_width, TextAlign};
