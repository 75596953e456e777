use image::DynamicImage;
use std::path::Path;

/// An image handed over by the presentation layer.
#[derive(Debug, Clone)]
pub enum Image {
    /// Encoded bytes as produced by a camera or photo picker (PNG, JPEG, ...).
    Encoded(Vec<u8>),
    /// An already decoded bitmap.
    Bitmap(DynamicImage),
}

impl Image {
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        Ok(Image::Encoded(std::fs::read(path)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageConversionError {
    #[error("cannot decode image: {0}")]
    Decode(String),
    #[error("image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

impl From<image::ImageError> for ImageConversionError {
    fn from(error: image::ImageError) -> Self {
        ImageConversionError::Decode(error.to_string())
    }
}
