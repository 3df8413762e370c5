//! Raster canvas a map is composited on.

use map_common::{MapError, MapResult};
use tiny_skia::{
    FilterQuality, Paint, Pattern, Pixmap, PixmapPaint, Rect, SpreadMode, Transform,
};
use tracing::debug;

use crate::encoded::EncodedImage;
use crate::png::create_png_auto;
use crate::style::{CaptionStyle, Rgba8};
use crate::text::{draw_text, text_width, TextAlign};

/// Distance of the caption's right edge and last baseline from the canvas
/// edges, in pixels.
const CAPTION_MARGIN: f32 = 10.0;

/// Vertical distance between caption baselines.
const CAPTION_LINE_SPACING: f32 = 15.0;

/// An RGBA canvas backed by a tiny-skia pixmap.
pub struct MapCanvas {
    pixmap: Pixmap,
}

impl MapCanvas {
    /// A `width x height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba8) -> MapResult<Self> {
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            MapError::invalid_parameter(
                "width/height",
                format!("cannot create a {}x{} canvas", width, height),
            )
        })?;
        pixmap.fill(background.to_color());
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Draw `image` with its top-left corner at `(x, y)`, scaled to
    /// `width x height`.
    ///
    /// Unscaled images are blitted at the nearest whole pixel so tiles stay
    /// sharp; scaled images are resampled bilinearly.
    pub fn draw_image(&mut self, image: &Pixmap, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let unscaled = width == image.width() as f32 && height == image.height() as f32;
        if unscaled {
            self.pixmap.draw_pixmap(
                x.round() as i32,
                y.round() as i32,
                image.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
            return;
        }

        let Some(rect) = Rect::from_xywh(x, y, width, height) else {
            return;
        };
        let sx = width / image.width() as f32;
        let sy = height / image.height() as f32;

        let paint = Paint {
            shader: Pattern::new(
                image.as_ref(),
                SpreadMode::Pad,
                FilterQuality::Bilinear,
                1.0,
                Transform::from_row(sx, 0.0, 0.0, sy, x, y),
            ),
            anti_alias: true,
            ..Paint::default()
        };
        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba8) {
        let Some(rect) = Rect::from_xywh(x, y, width, height) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Draw the attribution caption right-aligned in the bottom-right corner:
    /// the last line's baseline 10px above the bottom edge, earlier lines
    /// 15px apart, over a translucent band.
    pub fn draw_attribution(&mut self, caption: &CaptionStyle) {
        if caption.lines.is_empty() {
            return;
        }

        let right = self.width() as f32 - CAPTION_MARGIN;
        let bottom = self.height() as f32 - CAPTION_MARGIN;
        let n = caption.lines.len();

        if caption.background.a > 0 {
            let widest = caption
                .lines
                .iter()
                .map(|line| text_width(&line.text, caption.size))
                .fold(0.0f32, f32::max);
            let pad = caption.size * 0.25;
            let cap_height = caption.size * 0.75;
            let top = bottom - (n - 1) as f32 * CAPTION_LINE_SPACING - cap_height - pad;
            let left = right - widest - pad;
            self.fill_rect(
                left,
                top,
                self.width() as f32 - left,
                self.height() as f32 - top,
                caption.background,
            );
        }

        for (i, line) in caption.lines.iter().enumerate() {
            let baseline = bottom - (n - 1 - i) as f32 * CAPTION_LINE_SPACING;
            draw_text(
                &mut self.pixmap,
                &line.text,
                right,
                baseline,
                caption.size,
                line.color,
                TextAlign::Right,
            );
        }
    }

    /// Draw one line of text centered on the canvas.
    pub fn draw_centered_text(&mut self, text: &str, size: f32, color: Rgba8) {
        let x = self.width() as f32 / 2.0;
        let y = self.height() as f32 / 2.0;
        draw_text(&mut self.pixmap, text, x, y, size, color, TextAlign::Center);
    }

    /// Encode the canvas as PNG.
    pub fn encode_png(&self) -> MapResult<EncodedImage> {
        let mut rgba = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        let png = create_png_auto(&rgba, self.width(), self.height())?;
        debug!(
            width = self.width(),
            height = self.height(),
            bytes = png.len(),
            "Encoded canvas"
        );

        Ok(EncodedImage {
            width: self.width(),
            height: self.height(),
            png,
        })
    }
}
