use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::{
    composite,
    error::{CaptionError, CaptionResult},
    geometry::BarGeometry,
    layer, text,
};

/// Output path: input stem plus `.jpg`, in the input's directory.
pub fn output_path(index_path: &Path) -> PathBuf {
    index_path.with_extension("jpg")
}

/// Caption text to render: the given text, or the index file's stem when the
/// text is absent or empty.
pub fn effective_caption_text(index_path: &Path, caption_text: Option<&str>) -> String {
    match caption_text {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => index_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Overlay a semi-transparent caption bar on the bottom edge of the image at
/// `index_path` and save the flattened result as a JPEG beside it.
///
/// The bar is 5% of the image height; the text is rendered white and centered
/// from the font at `font_path`. An existing output file is overwritten.
/// Returns the written path.
#[tracing::instrument(skip(caption_text))]
pub fn caption(
    index_path: &Path,
    font_path: &Path,
    caption_text: Option<&str>,
) -> CaptionResult<PathBuf> {
    let target = output_path(index_path);
    let text_value = effective_caption_text(index_path, caption_text);
    debug!(caption = %text_value, target = %target.display(), "resolved caption");

    let decoded = image::open(index_path).map_err(|e| {
        CaptionError::image_decode(format!("open index image '{}': {e}", index_path.display()))
    })?;
    let mut base = decoded.to_rgba8();
    let (width, height) = base.dimensions();

    let geometry = BarGeometry::from_image_height(height);
    debug!(
        width,
        height,
        bar_height = geometry.bar_height,
        font_size = geometry.font_size,
        "derived bar geometry"
    );

    let font = text::load_font(font_path)?;
    let caption_layer = layer::render_caption_layer(width, geometry, &font, &text_value);
    let mask = layer::scale_brightness(&caption_layer, layer::MASK_BRIGHTNESS);

    // The unscaled layer supplies the pasted colors; the scaled copy supplies
    // the blend weights, so white text stays white at reduced opacity.
    composite::paste_masked(
        &mut base,
        &caption_layer,
        &mask,
        0,
        height - geometry.bar_height,
    )?;

    // Straight-alpha channel drop, dimensions unchanged.
    let flat = DynamicImage::ImageRgba8(base).to_rgb8();
    flat.save_with_format(&target, ImageFormat::Jpeg)
        .map_err(|e| CaptionError::io(format!("write jpeg '{}': {e}", target.display())))?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_replaces_extension_with_jpg() {
        assert_eq!(output_path(Path::new("photo.png")), PathBuf::from("photo.jpg"));
        assert_eq!(
            output_path(Path::new("photo.jpeg")),
            PathBuf::from("photo.jpg")
        );
        assert_eq!(output_path(Path::new("photo.jpg")), PathBuf::from("photo.jpg"));
    }

    #[test]
    fn output_path_keeps_parent_directory() {
        assert_eq!(
            output_path(Path::new("gallery/2024/photo.png")),
            PathBuf::from("gallery/2024/photo.jpg")
        );
    }

    #[test]
    fn output_path_appends_jpg_when_no_extension() {
        assert_eq!(output_path(Path::new("photo")), PathBuf::from("photo.jpg"));
    }

    #[test]
    fn caption_text_passes_through_when_present() {
        assert_eq!(
            effective_caption_text(Path::new("a/photo.png"), Some("Sample")),
            "Sample"
        );
    }

    #[test]
    fn caption_text_defaults_to_stem() {
        assert_eq!(
            effective_caption_text(Path::new("a/photo.png"), None),
            "photo"
        );
        assert_eq!(effective_caption_text(Path::new("a/photo.png"), Some("")), "photo");
    }

    #[test]
    fn caption_rejects_non_image_input() {
        let dir = std::env::temp_dir().join("captioner_unit_tests");
        std::fs::create_dir_all(&dir).unwrap();
        let bogus = dir.join("not_an_image.png");
        std::fs::write(&bogus, b"plain text").unwrap();

        let err = caption(&bogus, Path::new("missing.ttf"), None).unwrap_err();
        assert!(err.to_string().contains("image decode error:"));
    }
}
