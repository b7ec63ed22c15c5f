use image::RgbaImage;

use crate::error::{CaptionError, CaptionResult};

/// Paste `src` over `dst` at (`left`, `top`), weighting every channel (alpha
/// included) by the alpha channel of `mask`.
///
/// `src` and `mask` must share dimensions; they are usually the same layer at
/// different brightness. Pixels falling outside `dst` are clipped.
pub fn paste_masked(
    dst: &mut RgbaImage,
    src: &RgbaImage,
    mask: &RgbaImage,
    left: u32,
    top: u32,
) -> CaptionResult<()> {
    if src.dimensions() != mask.dimensions() {
        return Err(CaptionError::validation(
            "paste_masked expects source and mask of equal dimensions",
        ));
    }

    for y in 0..src.height() {
        let dy = top + y;
        if dy >= dst.height() {
            break;
        }
        for x in 0..src.width() {
            let dx = left + x;
            if dx >= dst.width() {
                break;
            }

            let weight = mask.get_pixel(x, y).0[3];
            if weight == 0 {
                continue;
            }

            let s = src.get_pixel(x, y).0;
            let d = dst.get_pixel_mut(dx, dy);
            for i in 0..4 {
                d.0[i] = blend_channel(d.0[i], s[i], weight);
            }
        }
    }
    Ok(())
}

/// Linear blend of one channel: `src` at weight `alpha`, `dst` at the remainder.
pub(crate) fn blend_channel(dst: u8, src: u8, alpha: u8) -> u8 {
    let inv = 255u16 - u16::from(alpha);
    mul_div255(u16::from(src), u16::from(alpha)).saturating_add(mul_div255(u16::from(dst), inv))
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}
