/// Convenience result type used across the crate.
pub type CaptionResult<T> = Result<T, CaptionError>;

/// Top-level error taxonomy surfaced by the captioning API.
#[derive(thiserror::Error, Debug)]
pub enum CaptionError {
    /// The index path did not decode as an image.
    #[error("image decode error: {0}")]
    ImageDecode(String),

    /// The font path could not be read or did not parse as a scalable font.
    #[error("font load error: {0}")]
    FontLoad(String),

    /// Failures while writing the captioned output.
    #[error("io error: {0}")]
    Io(String),

    /// Invalid caller-provided buffers or dimensions.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CaptionError {
    /// Build a [`CaptionError::ImageDecode`] value.
    pub fn image_decode(msg: impl Into<String>) -> Self {
        Self::ImageDecode(msg.into())
    }

    /// Build a [`CaptionError::FontLoad`] value.
    pub fn font_load(msg: impl Into<String>) -> Self {
        Self::FontLoad(msg.into())
    }

    /// Build a [`CaptionError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`CaptionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
