// Copyright @yucwang 2026

use crate::core::error::{BlockError, Result};
use crate::math::constants::{Float, Vector3f};

use std::path::PathBuf;

/// Largest accepted samples-per-edge for one face.
pub const MAX_FACE_RESOLUTION: usize = 4096;
/// Largest accepted output side in pixels. Encoders take `u32` sides.
pub const MAX_PIXEL_SIDE: usize = 32768;
/// Largest accepted output pixel count.
pub const MAX_PIXEL_COUNT: usize = 1 << 28;

/// Everything one block render needs. `Default` reproduces the stock
/// block: a 6x6 inch figure at 300 dpi seen from 30 degrees up and -35
/// degrees around, orthographic.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockConfig {
    pub texture_path: PathBuf,
    pub output_path: PathBuf,
    /// Figure width and height in inches.
    pub figure_size: (Float, Float),
    /// Output pixels per figure inch.
    pub dpi: Float,
    /// Samples per face edge, at least 2.
    pub face_resolution: usize,
    pub elevation_deg: Float,
    pub azimuth_deg: Float,
    pub orthographic: bool,
    pub edge_length: Float,
    /// Eye distance from the cube center in edge lengths, perspective only.
    pub camera_distance: Float,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            texture_path: PathBuf::from("default_ice.png"),
            output_path: PathBuf::from("block_textured.png"),
            figure_size: (6.0, 6.0),
            dpi: 300.0,
            face_resolution: 200,
            elevation_deg: 30.0,
            azimuth_deg: -35.0,
            orthographic: true,
            edge_length: 1.0,
            camera_distance: 4.0,
        }
    }
}

impl BlockConfig {
    pub fn validate(&self) -> Result<()> {
        validate_resolution(self.face_resolution)?;
        validate_edge_length(self.edge_length)?;

        let (w, h) = self.figure_size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(BlockError::config(format!("figure size must be positive, got {}x{}", w, h)));
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(BlockError::config(format!("dpi must be positive, got {}", self.dpi)));
        }
        let (px_w, px_h) = self.pixel_size();
        if px_w == 0 || px_h == 0 {
            return Err(BlockError::config(format!(
                "figure {}x{} at {} dpi rounds to an empty {}x{} image",
                w, h, self.dpi, px_w, px_h
            )));
        }
        validate_pixel_size(px_w, px_h)?;
        if !(self.elevation_deg.is_finite() && self.azimuth_deg.is_finite()) {
            return Err(BlockError::config("camera angles must be finite"));
        }
        if !self.orthographic && !(self.camera_distance.is_finite() && self.camera_distance > 1.0) {
            return Err(BlockError::config(format!(
                "camera distance must exceed one edge length, got {}",
                self.camera_distance
            )));
        }
        Ok(())
    }

    /// Output size in pixels: figure size times dpi, rounded.
    pub fn pixel_size(&self) -> (usize, usize) {
        let to_pixels = |inches: Float| (inches * self.dpi).round().max(0.0) as usize;
        (to_pixels(self.figure_size.0), to_pixels(self.figure_size.1))
    }

    /// Unit vector from the cube center toward the eye.
    pub fn view_direction(&self) -> Vector3f {
        view_direction(self.elevation_deg, self.azimuth_deg)
    }
}

pub fn view_direction(elevation_deg: Float, azimuth_deg: Float) -> Vector3f {
    let elev = elevation_deg.to_radians();
    let azim = azimuth_deg.to_radians();
    Vector3f::new(elev.cos() * azim.cos(), elev.cos() * azim.sin(), elev.sin())
}

pub fn validate_resolution(resolution: usize) -> Result<()> {
    if resolution < 2 {
        return Err(BlockError::config(format!("face resolution must be at least 2, got {}", resolution)));
    }
    if resolution > MAX_FACE_RESOLUTION {
        return Err(BlockError::config(format!(
            "face resolution must be at most {}, got {}",
            MAX_FACE_RESOLUTION, resolution
        )));
    }
    Ok(())
}

/// Number of samples in an N x N face grid.
pub fn sample_count(resolution: usize) -> Result<usize> {
    resolution
        .checked_mul(resolution)
        .ok_or_else(|| BlockError::config(format!("face resolution {} overflows the sample count", resolution)))
}

pub fn validate_pixel_size(width: usize, height: usize) -> Result<()> {
    if width > MAX_PIXEL_SIDE || height > MAX_PIXEL_SIDE {
        return Err(BlockError::config(format!(
            "image {}x{} exceeds the {} pixel side limit",
            width, height, MAX_PIXEL_SIDE
        )));
    }
    let pixels = width
        .checked_mul(height)
        .filter(|count| count.checked_mul(4).is_some())
        .ok_or_else(|| BlockError::config(format!("image {}x{} overflows the pixel buffer size", width, height)))?;
    if pixels > MAX_PIXEL_COUNT {
        return Err(BlockError::config(format!(
            "image {}x{} has {} pixels, more than the {} limit",
            width, height, pixels, MAX_PIXEL_COUNT
        )));
    }
    Ok(())
}

pub fn validate_edge_length(edge_length: Float) -> Result<()> {
    if !(edge_length.is_finite() && edge_length > 0.0) {
        return Err(BlockError::config(format!("edge length must be positive, got {}", edge_length)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BlockConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pixel_size(), (1800, 1800));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let mut config = BlockConfig::default();
        config.face_resolution = 1;
        assert!(matches!(config.validate(), Err(BlockError::Config(_))));

        let mut config = BlockConfig::default();
        config.edge_length = 0.0;
        assert!(matches!(config.validate(), Err(BlockError::Config(_))));

        let mut config = BlockConfig::default();
        config.edge_length = Float::NAN;
        assert!(matches!(config.validate(), Err(BlockError::Config(_))));
    }

    #[test]
    fn test_rejects_bad_figure() {
        let mut config = BlockConfig::default();
        config.figure_size = (6.0, -1.0);
        assert!(config.validate().is_err());

        let mut config = BlockConfig::default();
        config.dpi = 0.0;
        assert!(config.validate().is_err());

        let mut config = BlockConfig::default();
        config.figure_size = (0.001, 0.001);
        config.dpi = 100.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_resolution() {
        let mut config = BlockConfig::default();
        config.face_resolution = MAX_FACE_RESOLUTION;
        assert!(config.validate().is_ok());

        config.face_resolution = MAX_FACE_RESOLUTION + 1;
        assert!(matches!(config.validate(), Err(BlockError::Config(_))));

        config.face_resolution = usize::MAX;
        assert!(matches!(config.validate(), Err(BlockError::Config(_))));
        assert!(matches!(sample_count(usize::MAX), Err(BlockError::Config(_))));
        assert_eq!(sample_count(200).unwrap(), 40000);
    }

    #[test]
    fn test_rejects_oversized_figure() {
        let mut config = BlockConfig::default();
        config.figure_size = (1e5, 1e5);
        assert_eq!(config.pixel_size(), (30_000_000, 30_000_000));
        assert!(matches!(config.validate(), Err(BlockError::Config(_))));

        // Each side fits, the pixel count does not.
        let mut config = BlockConfig::default();
        config.figure_size = (100.0, 100.0);
        config.dpi = 300.0;
        assert!(matches!(config.validate(), Err(BlockError::Config(_))));

        // A long thin strip stays within both limits.
        let mut config = BlockConfig::default();
        config.figure_size = (100.0, 1.0);
        config.dpi = 300.0;
        assert!(config.validate().is_ok());

        assert!(validate_pixel_size(MAX_PIXEL_SIDE + 1, 1).is_err());
        assert!(validate_pixel_size(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_camera_distance_only_matters_for_perspective() {
        let mut config = BlockConfig::default();
        config.camera_distance = 0.5;
        assert!(config.validate().is_ok());
        config.orthographic = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_view_sees_right_front_and_top() {
        let dir = BlockConfig::default().view_direction();
        assert!(dir.x > 0.0);
        assert!(dir.y < 0.0);
        assert!(dir.z > 0.0);
        assert!((dir.norm() - 1.0).abs() < 1e-6);
    }
}
