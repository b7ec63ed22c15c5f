use image::{Rgba, RgbaImage};
use rusttype::Font;

use crate::{
    geometry::{BarGeometry, centered_offset},
    text,
};

/// Backing panel fill: black at alpha 100 of 255.
pub const PANEL_FILL: Rgba<u8> = Rgba([0, 0, 0, 100]);

/// Caption text fill: solid white.
pub const TEXT_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Brightness factor applied to the layer copy that serves as the compositing
/// mask. The effective panel alpha is the product of [`PANEL_FILL`]'s alpha and
/// this factor; the doubled application is deliberate and preserved.
pub const MASK_BRIGHTNESS: f32 = 0.5;

/// Render the caption layer: a full-width semi-transparent panel of bar height
/// with `text` drawn white and centered both ways.
pub fn render_caption_layer(
    width: u32,
    geometry: BarGeometry,
    font: &Font<'_>,
    text_value: &str,
) -> RgbaImage {
    let mut layer = RgbaImage::from_pixel(width, geometry.bar_height, PANEL_FILL);

    let (text_w, text_h) = text::measure(font, geometry.font_size, text_value);
    let x = centered_offset(width, text_w);
    let y = centered_offset(geometry.bar_height, text_h);
    text::draw_text(&mut layer, font, geometry.font_size, x, y, TEXT_FILL, text_value);

    layer
}

/// Copy of `layer` with every channel (alpha included) scaled by `factor`,
/// rounded to nearest.
pub fn scale_brightness(layer: &RgbaImage, factor: f32) -> RgbaImage {
    let mut out = layer.clone();
    for px in out.pixels_mut() {
        for c in &mut px.0 {
            *c = (f32::from(*c) * factor).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_brightness_halves_every_channel() {
        let layer = RgbaImage::from_pixel(2, 1, Rgba([0, 100, 255, 100]));
        let scaled = scale_brightness(&layer, 0.5);
        assert_eq!(scaled.get_pixel(0, 0).0, [0, 50, 128, 50]);
    }

    #[test]
    fn scale_brightness_identity_at_factor_one() {
        let layer = RgbaImage::from_pixel(1, 1, Rgba([7, 77, 177, 253]));
        let scaled = scale_brightness(&layer, 1.0);
        assert_eq!(scaled.get_pixel(0, 0).0, [7, 77, 177, 253]);
    }

    #[test]
    fn scale_brightness_clamps_above_255() {
        let layer = RgbaImage::from_pixel(1, 1, Rgba([200, 200, 200, 200]));
        let scaled = scale_brightness(&layer, 2.0);
        assert_eq!(scaled.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }
}
