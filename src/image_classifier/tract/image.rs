use crate::image_classifier::models::model_config::Normalization;
use image::{imageops, Rgb, RgbImage};
use tract_onnx::prelude::*;

/// Scales to fit inside `width`x`height`, centering on a black canvas when
/// the aspect ratios differ.
pub fn letterbox(frame: &RgbImage, width: u32, height: u32) -> RgbImage {
    let (w, h) = (frame.width() as f32, frame.height() as f32);

    if frame.width() as u64 * height as u64 == frame.height() as u64 * width as u64 {
        return imageops::resize(frame, width, height, imageops::FilterType::Triangle);
    }

    let scale = (width as f32 / w).min(height as f32 / h);
    let new_w = ((w * scale) as u32).clamp(1, width);
    let new_h = ((h * scale) as u32).clamp(1, height);

    let scaled = imageops::resize(frame, new_w, new_h, imageops::FilterType::Triangle);

    let mut padded = RgbImage::from_pixel(width, height, Rgb([0, 0, 0]));
    let x_offset = (width - new_w) / 2;
    let y_offset = (height - new_h) / 2;
    imageops::overlay(&mut padded, &scaled, x_offset as i64, y_offset as i64);

    padded
}

/// NCHW float tensor, one batch.
pub fn frame_to_tensor(
    frame: &RgbImage,
    width: u32,
    height: u32,
    normalization: &Normalization,
) -> Tensor {
    let resized = letterbox(frame, width, height);

    tract_ndarray::Array4::from_shape_fn(
        (1, 3, height as usize, width as usize),
        |(_, c, y, x)| {
            let pixel = resized.get_pixel(x as u32, y as u32);
            (pixel[c] as f32 / 255.0 - normalization.mean[c]) / normalization.std[c]
        },
    )
    .into_tensor()
}
