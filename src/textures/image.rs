// Copyright @yucwang 2026

use crate::core::error::{BlockError, Result};
use crate::core::texture::Texture;
use crate::io::exr_utils;
use crate::math::constants::{Float, MatrixXF, Vector2f};
use crate::math::spectrum::RGBASpectrum;
use image::io::Reader as ImageReader;
use std::path::Path;

/// Nearest-texel RGBA texture with clamp-to-edge addressing.
///
/// Texels are stored row-major with four columns per texel. Row 0 is the
/// top row of the image as it is normally displayed.
#[derive(Debug, Clone)]
pub struct ImageTexture {
    width: usize,
    height: usize,
    data: MatrixXF,
}

impl ImageTexture {
    pub fn from_exr<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (width, height, data) = exr_utils::read_exr_from_file(path)?;
        Self::from_data(width, height, data)
    }

    pub fn from_image<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = ImageReader::open(path)
            .map_err(|e| BlockError::decode(path, e))?
            .with_guessed_format()
            .map_err(|e| BlockError::decode(path, e))?
            .decode()
            .map_err(|e| BlockError::decode(path, e))?;

        let rgba = img.to_rgba32f();
        let (width, height) = (rgba.width() as usize, rgba.height() as usize);
        let mut data = MatrixXF::zeros(height, width * 4);
        for (x, y, p) in rgba.enumerate_pixels() {
            let base = x as usize * 4;
            for c in 0..4 {
                data[(y as usize, base + c)] = p[c];
            }
        }

        Self::from_data(width, height, data)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Starting reading texture from: {}.", path.display());

        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let texture = match ext.as_str() {
            "exr" => Self::from_exr(path)?,
            _ => Self::from_image(path)?,
        };

        log::info!("Texture loaded, width = {}, height = {}.", texture.width, texture.height);
        Ok(texture)
    }

    /// Builds a texture from tightly packed 8-bit RGBA rows, top row first.
    pub fn from_rgba8(width: usize, height: usize, bytes: &[u8]) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| BlockError::config(format!("{}x{} texture is too large", width, height)))?;
        if bytes.len() != expected {
            return Err(BlockError::config(format!(
                "expected {} bytes for a {}x{} RGBA texture, got {}",
                expected, width, height, bytes.len()
            )));
        }
        let mut data = MatrixXF::zeros(height, width * 4);
        for y in 0..height {
            for x in 0..width * 4 {
                data[(y, x)] = bytes[y * width * 4 + x] as Float / 255.0;
            }
        }
        Self::from_data(width, height, data)
    }

    pub fn from_texels(width: usize, height: usize, texels: &[RGBASpectrum]) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| BlockError::config(format!("{}x{} texture is too large", width, height)))?;
        if texels.len() != expected {
            return Err(BlockError::config(format!(
                "expected {} texels for a {}x{} texture, got {}",
                expected, width, height, texels.len()
            )));
        }
        let mut data = MatrixXF::zeros(height, width * 4);
        for y in 0..height {
            for x in 0..width {
                let texel = &texels[y * width + x];
                for c in 0..4 {
                    data[(y, x * 4 + c)] = texel[c];
                }
            }
        }
        Self::from_data(width, height, data)
    }

    fn from_data(width: usize, height: usize, data: MatrixXF) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BlockError::DegenerateTexture { width, height });
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn texel(&self, x: usize, y: usize) -> RGBASpectrum {
        let base = x * 4;
        RGBASpectrum::new(
            self.data[(y, base)],
            self.data[(y, base + 1)],
            self.data[(y, base + 2)],
            self.data[(y, base + 3)],
        )
    }

    /// Nearest texel at normalized (u, v); coordinates are clamped to [0, 1].
    pub fn sample(&self, u: Float, v: Float) -> RGBASpectrum {
        let x = (clamp_unit(u) * (self.width - 1) as Float) as usize;
        let y = (clamp_unit(v) * (self.height - 1) as Float) as usize;
        self.texel(x.min(self.width - 1), y.min(self.height - 1))
    }

    pub fn sample_many(&self, us: &[Float], vs: &[Float]) -> Result<Vec<RGBASpectrum>> {
        if us.len() != vs.len() {
            return Err(BlockError::config(format!(
                "coordinate arrays differ in length: {} vs {}",
                us.len(), vs.len()
            )));
        }
        Ok(us.iter().zip(vs).map(|(&u, &v)| self.sample(u, v)).collect())
    }
}

impl Texture for ImageTexture {
    fn describe(&self) -> String {
        format!("ImageTexture {}x{}", self.width, self.height)
    }

    fn eval(&self, uv: Vector2f) -> RGBASpectrum {
        self.sample(uv.x, uv.y)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

fn clamp_unit(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
