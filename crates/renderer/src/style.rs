//! Map styling loaded from JSON.
//!
//! Every field has a default, so a style file only needs to name what it
//! changes:
//!
//! ```json
//! { "background": "#aad3df", "stroke": { "color": "#d63e2a", "width": 4 } }
//! ```

use std::fmt;
use std::path::Path;

use map_common::{MapError, MapResult};
use serde::{Deserialize, Serialize};

/// An RGBA color written as `#rrggbb` or `#rrggbbaa` in style files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
pub fn hex_to_rgba(hex: &str) -> Option<Rgba8> {
    let hex = hex.trim().trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let a = if hex.len() == 8 { channel(6)? } else { 255 };

    Some(Rgba8::rgba(channel(0)?, channel(2)?, channel(4)?, a))
}

impl TryFrom<String> for Rgba8 {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        hex_to_rgba(&value).ok_or_else(|| format!("invalid color '{}', expected #rrggbb[aa]", value))
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Outline settings for LineStrings and polygon edges.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: Rgba8,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Rgba8::rgb(0, 0, 255),
            width: 3.0,
        }
    }
}

/// Circle drawn for Points.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub radius: f32,
    pub fill: Rgba8,
    pub outline: Rgba8,
    pub outline_width: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 8.0,
            fill: Rgba8::rgb(0, 0, 255),
            outline: Rgba8::rgb(255, 255, 255),
            outline_width: 2.0,
        }
    }
}

/// One right-aligned line of the attribution caption.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CaptionLine {
    pub text: String,
    pub color: Rgba8,
}

/// Attribution caption in the bottom-right corner.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CaptionStyle {
    /// Lines from top to bottom; the last sits 10px above the bottom edge,
    /// each earlier one 15px higher.
    pub lines: Vec<CaptionLine>,
    pub size: f32,
    /// Band drawn behind the text; fully transparent disables it.
    pub background: Rgba8,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            lines: vec![
                CaptionLine {
                    text: "(c) OpenStreetMap contributors".to_string(),
                    color: Rgba8::rgb(0, 0, 0),
                },
                CaptionLine {
                    text: "https://www.openstreetmap.org/copyright".to_string(),
                    color: Rgba8::rgb(0, 0, 255),
                },
            ],
            size: 12.0,
            background: Rgba8::rgba(255, 255, 255, 160),
        }
    }
}

/// Complete style of a rendered map.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MapStyle {
    /// Canvas fill under the tiles, visible wherever a tile is missing.
    pub background: Rgba8,
    pub stroke: StrokeStyle,
    /// Polygon interior.
    pub fill: Rgba8,
    pub marker: MarkerStyle,
    pub caption: CaptionStyle,
    /// Message shown on the world view when its tile cannot be loaded.
    pub error_text: String,
    pub error_color: Rgba8,
    pub error_size: f32,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(0xc4, 0xe4, 0xff),
            stroke: StrokeStyle::default(),
            fill: Rgba8::rgba(0, 0, 255, 51),
            marker: MarkerStyle::default(),
            caption: CaptionStyle::default(),
            error_text: "Error loading world map".to_string(),
            error_color: Rgba8::rgb(255, 0, 0),
            error_size: 14.0,
        }
    }
}

impl MapStyle {
    /// Load a style from a JSON string.
    pub fn from_json(json_str: &str) -> MapResult<Self> {
        let style: MapStyle = serde_json::from_str(json_str)
            .map_err(|e| MapError::invalid_parameter("style", e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Load a style from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> MapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MapError::invalid_parameter("style", format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> MapResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MapError::Encode(e.to_string()))
    }

    /// Reject sizes that cannot be drawn.
    pub fn validate(&self) -> MapResult<()> {
        let sizes = [
            ("stroke.width", self.stroke.width),
            ("marker.radius", self.marker.radius),
            ("marker.outline_width", self.marker.outline_width),
            ("caption.size", self.caption.size),
            ("error_size", self.error_size),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(MapError::invalid_parameter(
                    name,
                    format!("must be a non-negative number, got {}", value),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(hex_to_rgba("#c4e4ff"), Some(Rgba8::rgb(196, 228, 255)));
        assert_eq!(hex_to_rgba("0000ff33"), Some(Rgba8::rgba(0, 0, 255, 51)));
        assert_eq!(hex_to_rgba("#fff"), None);
        assert_eq!(hex_to_rgba("#gg0000"), None);
    }

    #[test]
    fn test_display_round_trips_through_hex() {
        let c = Rgba8::rgba(1, 2, 3, 4);
        assert_eq!(c.to_string(), "#01020304");
        assert_eq!(Rgba8::rgb(255, 0, 0).to_string(), "#ff0000");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let style = MapStyle::from_json(r##"{ "stroke": { "color": "#ff0000" } }"##).unwrap();
        assert_eq!(style.stroke.color, Rgba8::rgb(255, 0, 0));
        assert_eq!(style.stroke.width, 3.0);
        assert_eq!(style.background, Rgba8::rgb(0xc4, 0xe4, 0xff));
        assert_eq!(style.caption.lines.len(), 2);
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = MapStyle::from_json(r#"{ "background": "blue" }"#).unwrap_err();
        assert!(matches!(err, MapError::InvalidParameter { .. }));
    }

    #[test]
    fn test_negative_width_rejected() {
        let err = MapStyle::from_json(r#"{ "stroke": { "width": -1 } }"#).unwrap_err();
        assert!(err.to_string().contains("stroke.width"));
    }
}
