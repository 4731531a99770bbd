/* Copyright 2020 @TwoCookingMice */

use crate::core::error::{BlockError, Result};
use crate::math::bitmap::Bitmap;
use crate::math::constants::MatrixXF;

use exr::prelude::*;
use std::path::Path;

// Read an RGBA EXR image into (width, height, rows of r, g, b, a columns).
// Images without an alpha channel come back opaque.
pub fn read_exr_from_file<P: AsRef<Path>>(file_path: P) -> Result<(usize, usize, MatrixXF)> {
    let file_path = file_path.as_ref();
    log::info!("Starting reading OpenEXR image from: {}.", file_path.display());

    let image = read()
        .no_deep_data()
        .largest_resolution_level()
        .rgba_channels(
            |resolution, _| {
                let width = resolution.width();
                let height = resolution.height();
                (width, height, MatrixXF::zeros(height, width * 4))
            },
            |pixels: &mut (usize, usize, MatrixXF), position, (r, g, b, a): (f32, f32, f32, f32)| {
                let base = position.x() * 4;
                let y = position.y();
                pixels.2[(y, base)] = r;
                pixels.2[(y, base + 1)] = g;
                pixels.2[(y, base + 2)] = b;
                pixels.2[(y, base + 3)] = a;
            },
        )
        .first_valid_layer()
        .all_attributes()
        .from_file(file_path)
        .map_err(|e| BlockError::decode(file_path, e))?;

    Ok(image.layer_data.channel_data.pixels)
}

// Write EXR Image to file
pub fn write_exr_to_file<P: AsRef<Path>>(image: &Bitmap, file_path: P) -> Result<()> {
    let file_path = file_path.as_ref();
    log::info!("Starting writing openexr images: {}.", file_path.display());

    let pixels = image.pixels();
    let width = image.width();
    write_rgba_file(file_path, image.width(), image.height(), |x, y| {
        let p = &pixels[y * width + x];
        (p.r(), p.g(), p.b(), p.alpha())
    })
    .map_err(|e| BlockError::write(file_path, e))
}
