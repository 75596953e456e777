use crate::image_input::interface::{Image, ImageConversionError};
use image::RgbImage;

impl Image {
    /// Converts to the 8-bit RGB buffer every classifier consumes.
    pub fn to_pixel_buffer(&self) -> Result<RgbImage, ImageConversionError> {
        let rgb = match self {
            Image::Encoded(bytes) => image::load_from_memory(bytes)?.to_rgb8(),
            Image::Bitmap(bitmap) => bitmap.to_rgb8(),
        };

        if rgb.width() == 0 || rgb.height() == 0 {
            return Err(ImageConversionError::Empty {
                width: rgb.width(),
                height: rgb.height(),
            });
        }

        Ok(rgb)
    }
}
