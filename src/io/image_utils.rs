// Copyright @yucwang 2026

use crate::core::error::{BlockError, Result};
use crate::io::exr_utils;
use crate::math::bitmap::Bitmap;

use image::{ImageBuffer, Rgba};
use std::path::Path;

// Write an 8-bit RGBA PNG, alpha preserved.
pub fn write_png_to_file<P: AsRef<Path>>(image: &Bitmap, file_path: P) -> Result<()> {
    let file_path = file_path.as_ref();
    log::info!("Starting writing png image: {}.", file_path.display());

    let width = image.width() as u32;
    let height = image.height() as u32;
    let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(width, height, image.to_rgba8())
        .ok_or_else(|| BlockError::write(file_path, "pixel buffer does not match image size"))?;

    buffer
        .save_with_format(file_path, image::ImageFormat::Png)
        .map_err(|e| BlockError::write(file_path, e))
}

/// Writes `image` as OpenEXR when the path ends in `.exr`, PNG otherwise.
pub fn write_image_to_file<P: AsRef<Path>>(image: &Bitmap, file_path: P) -> Result<()> {
    let file_path = file_path.as_ref();
    let is_exr = file_path
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("exr"))
        .unwrap_or(false);

    if is_exr {
        exr_utils::write_exr_to_file(image, file_path)
    } else {
        write_png_to_file(image, file_path)
    }
}
