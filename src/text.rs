use std::path::Path;

use image::{Rgba, RgbaImage};
use rusttype::{Font, Scale, point};

use crate::{
    composite::blend_channel,
    error::{CaptionError, CaptionResult},
};

/// Read and parse a scalable font file (TrueType/OpenType outlines).
pub fn load_font(path: &Path) -> CaptionResult<Font<'static>> {
    let bytes = std::fs::read(path)
        .map_err(|e| CaptionError::font_load(format!("read font '{}': {e}", path.display())))?;
    Font::try_from_vec(bytes)
        .ok_or_else(|| CaptionError::font_load(format!("parse font '{}'", path.display())))
}

/// Pixel extent of `text` rendered at `font_size`.
///
/// Width is the rightmost glyph pixel; height is the font's ascent-to-descent
/// span, independent of which glyphs appear in the text.
pub fn measure(font: &Font<'_>, font_size: u32, text: &str) -> (u32, u32) {
    let scale = Scale::uniform(font_size as f32);
    let v = font.v_metrics(scale);
    let height = (v.ascent - v.descent).max(0.0).ceil() as u32;

    let mut width = 0i32;
    for glyph in font.layout(text, scale, point(0.0, v.ascent)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            width = width.max(bb.max.x);
        }
    }
    (width.max(0) as u32, height)
}

/// Draw `text` onto `img` with its top-left corner at (`x`, `y`), blending every
/// channel (alpha included) toward `color` by glyph coverage.
///
/// Coordinates may be negative; pixels outside the buffer are clipped.
pub fn draw_text(
    img: &mut RgbaImage,
    font: &Font<'_>,
    font_size: u32,
    x: i32,
    y: i32,
    color: Rgba<u8>,
    text: &str,
) {
    let scale = Scale::uniform(font_size as f32);
    let v = font.v_metrics(scale);
    let baseline = y as f32 + v.ascent;

    for glyph in font.layout(text, scale, point(x as f32, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 {
                return;
            }
            let (px, py) = (px as u32, py as u32);
            if px >= img.width() || py >= img.height() {
                return;
            }

            let a = (coverage * 255.0).round() as u8;
            if a == 0 {
                return;
            }
            let dst = img.get_pixel_mut(px, py);
            for i in 0..4 {
                dst.0[i] = blend_channel(dst.0[i], color.0[i], a);
            }
        });
    }
}
