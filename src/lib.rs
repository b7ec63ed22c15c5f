#![forbid(unsafe_code)]

pub mod captioner;
pub mod composite;
pub mod error;
pub mod geometry;
pub mod layer;
pub mod text;

pub use captioner::{caption, effective_caption_text, output_path};
pub use error::{CaptionError, CaptionResult};
pub use geometry::BarGeometry;
