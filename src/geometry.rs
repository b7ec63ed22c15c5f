/// Pixel geometry of the caption bar, derived from the source image height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarGeometry {
    /// Bar height in pixels, 5% of the image height (floored).
    pub bar_height: u32,
    /// Font size in pixels, half the bar height (floored).
    pub font_size: u32,
}

impl BarGeometry {
    pub fn from_image_height(image_height: u32) -> Self {
        let bar_height = image_height / 20;
        let font_size = bar_height / 2;
        Self {
            bar_height,
            font_size,
        }
    }
}

/// Left/top offset that centers an extent of `inner` pixels inside `outer` pixels.
///
/// Negative when the inner extent is wider than the outer one; drawing clips at
/// the buffer edges in that case.
pub fn centered_offset(outer: u32, inner: u32) -> i32 {
    ((i64::from(outer) - i64::from(inner)) / 2) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_one_twentieth_of_image_height() {
        let g = BarGeometry::from_image_height(800);
        assert_eq!(g.bar_height, 40);
        assert_eq!(g.font_size, 20);
    }

    #[test]
    fn geometry_floors_on_odd_heights() {
        let g = BarGeometry::from_image_height(819);
        assert_eq!(g.bar_height, 40);
        assert_eq!(g.font_size, 20);

        let g = BarGeometry::from_image_height(59);
        assert_eq!(g.bar_height, 2);
        assert_eq!(g.font_size, 1);
    }

    #[test]
    fn tiny_image_degrades_to_zero_height_bar() {
        let g = BarGeometry::from_image_height(19);
        assert_eq!(g.bar_height, 0);
        assert_eq!(g.font_size, 0);
    }

    #[test]
    fn centered_offset_splits_slack_evenly() {
        assert_eq!(centered_offset(100, 40), 30);
        assert_eq!(centered_offset(100, 41), 29);
        assert_eq!(centered_offset(40, 40), 0);
    }

    #[test]
    fn centered_offset_goes_negative_when_inner_is_wider() {
        assert_eq!(centered_offset(40, 100), -30);
    }
}
