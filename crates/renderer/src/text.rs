//! Caption and message text, rasterised from an embedded TrueType font.

use rusttype::{point, Font, Scale};
use tiny_skia::{ColorU8, Pixmap, PixmapPaint, Transform};

use crate::style::Rgba8;

/// Embedded font data - DejaVu Sans
const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Horizontal anchor of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

fn load_font() -> Option<Font<'static>> {
    let font = Font::try_from_bytes(FONT_DATA);
    if font.is_none() {
        tracing::warn!("Failed to load font for text rendering");
    }
    font
}

/// Pen advance of `text`, kerning included.
fn advance(font: &Font<'_>, text: &str, scale: Scale) -> f32 {
    font.layout(text, scale, point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

/// Width in pixels of `text` at `size`.
pub fn text_width(text: &str, size: f32) -> f32 {
    load_font()
        .map(|font| advance(&font, text, Scale::uniform(size)))
        .unwrap_or(0.0)
}

/// Draw `text` with its baseline at `y`, anchored at `x` per `align`.
///
/// Each glyph is rasterised into a coverage mask tinted with `color` and
/// composited source-over onto `pixmap`.
pub fn draw_text(
    pixmap: &mut Pixmap,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: Rgba8,
    align: TextAlign,
) {
    let Some(font) = load_font() else {
        return;
    };
    let scale = Scale::uniform(size);

    let left = match align {
        TextAlign::Left => x,
        TextAlign::Center => x - advance(&font, text, scale) / 2.0,
        TextAlign::Right => x - advance(&font, text, scale),
    };

    for glyph in font.layout(text, scale, point(left, y)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        let Some(mut mask) = Pixmap::new(bb.width() as u32, bb.height() as u32) else {
            continue;
        };

        let stride = bb.width() as usize;
        let pixels = mask.pixels_mut();
        glyph.draw(|gx, gy, coverage| {
            let alpha = (color.a as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
            pixels[gy as usize * stride + gx as usize] =
                ColorU8::from_rgba(color.r, color.g, color.b, alpha).premultiply();
        });

        pixmap.draw_pixmap(
            bb.min.x,
            bb.min.y,
            mask.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ink_bounds(pixmap: &Pixmap) -> Option<(u32, u32, u32, u32)> {
        let w = pixmap.width();
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for (i, px) in pixmap.pixels().iter().enumerate() {
            if px.alpha() == 0 {
                continue;
            }
            let (x, y) = (i as u32 % w, i as u32 / w);
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
        bounds
    }

    #[test]
    fn test_font_covers_caption_characters() {
        let font = load_font().unwrap();
        for ch in "(c) OpenStreetMap contributors https://www.openstreetmap.org/copyright Error loading world map"
            .chars()
            .filter(|c| !c.is_whitespace())
        {
            assert_ne!(font.glyph(ch).id().0, 0, "missing glyph for {:?}", ch);
        }
    }

    #[test]
    fn test_text_width_scales_with_size() {
        assert_eq!(text_width("", 12.0), 0.0);
        let small = text_width("OpenStreetMap", 12.0);
        let large = text_width("OpenStreetMap", 24.0);
        assert!(small > 40.0 && small < 120.0, "width {}", small);
        assert!((large - 2.0 * small).abs() < 0.01 * large);
        assert!(text_width("Open", 12.0) < small);
    }

    #[test]
    fn test_right_aligned_text_ends_at_anchor() {
        let mut pixmap = Pixmap::new(200, 40).unwrap();
        draw_text(&mut pixmap, "OSM contributors", 190.0, 30.0, 12.0, Rgba8::rgb(0, 0, 0), TextAlign::Right);

        let (x0, y0, x1, y1) = ink_bounds(&pixmap).unwrap();
        assert!(x1 <= 191, "ink ends at {}", x1);
        assert!(x0 + 2 >= 190 - text_width("OSM contributors", 12.0) as u32);
        // No descenders, and nothing taller than the em box.
        assert!(y1 <= 31, "ink bottom at {}", y1);
        assert!(y0 >= 30 - 12, "ink top at {}", y0);
    }

    #[test]
    fn test_centered_text_is_symmetric() {
        let mut pixmap = Pixmap::new(200, 40).unwrap();
        draw_text(&mut pixmap, "HIH", 100.0, 30.0, 14.0, Rgba8::rgb(255, 0, 0), TextAlign::Center);
        let (x0, _, x1, _) = ink_bounds(&pixmap).unwrap();
        let mid = (x0 + x1) as f32 / 2.0;
        assert!((mid - 100.0).abs() <= 1.5, "center at {}", mid);
    }

    #[test]
    fn test_text_takes_color() {
        let mut pixmap = Pixmap::new(120, 40).unwrap();
        draw_text(&mut pixmap, "Error", 10.0, 30.0, 20.0, Rgba8::rgb(255, 0, 0), TextAlign::Left);
        let solid = pixmap
            .pixels()
            .iter()
            .filter(|px| px.alpha() == 255)
            .map(|px| px.demultiply())
            .collect::<Vec<_>>();
        assert!(!solid.is_empty());
        assert!(solid.iter().all(|c| c.red() == 255 && c.green() == 0 && c.blue() == 0));
    }
}
