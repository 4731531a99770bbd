// Copyright @yucwang 2026

use crate::core::config::{sample_count, validate_edge_length, validate_resolution};
use crate::core::error::Result;
use crate::core::face::Face;
use crate::core::texture::Texture;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBASpectrum;

/// N x N samples of one face. Row i holds V = i / (N - 1), column j holds
/// U = j / (N - 1).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    face: Face,
    resolution: usize,
    positions: Vec<Vector3f>,
    colors: Vec<RGBASpectrum>,
}

impl SampleGrid {
    pub fn generate(face: Face,
                    texture: &dyn Texture,
                    resolution: usize,
                    edge_length: Float) -> Result<Self> {
        validate_resolution(resolution)?;
        validate_edge_length(edge_length)?;

        let count = sample_count(resolution)?;
        let params = linspace(resolution);
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for &v in &params {
            for &u in &params {
                positions.push(face.position(u, v, edge_length));
                colors.push(texture.eval(face.texture_coord(u, v)));
            }
        }

        log::debug!("Sampled {} face: {}x{} from {}.", face, resolution, resolution, texture.describe());
        Ok(Self { face, resolution, positions, colors })
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn position(&self, row: usize, col: usize) -> Vector3f {
        self.positions[row * self.resolution + col]
    }

    pub fn color(&self, row: usize, col: usize) -> RGBASpectrum {
        self.colors[row * self.resolution + col]
    }

    pub fn positions(&self) -> &[Vector3f] {
        &self.positions
    }

    pub fn colors(&self) -> &[RGBASpectrum] {
        &self.colors
    }
}

// N evenly spaced values covering [0, 1], both ends included.
fn linspace(n: usize) -> Vec<Float> {
    let last = (n - 1) as Float;
    (0..n).map(|k| k as Float / last).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::BlockError;
    use crate::textures::image::ImageTexture;

    fn quadrant_texture() -> ImageTexture {
        ImageTexture::from_texels(2, 2, &[
            RGBASpectrum::opaque(1.0, 0.0, 0.0),
            RGBASpectrum::opaque(0.0, 1.0, 0.0),
            RGBASpectrum::opaque(0.0, 0.0, 1.0),
            RGBASpectrum::opaque(1.0, 1.0, 0.0),
        ]).unwrap()
    }

    #[test]
    fn test_linspace_hits_both_ends() {
        let values = linspace(5);
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_grid_layout_and_flip() {
        let tex = quadrant_texture();
        let grid = SampleGrid::generate(Face::Front, &tex, 2, 1.0).unwrap();

        assert_eq!(grid.resolution(), 2);
        assert_eq!(grid.positions().len(), 4);
        // Row 0 is V = 0: the bottom of the face, which shows the bottom of the image.
        assert_eq!(grid.position(0, 0), Vector3f::new(0.0, 0.0, 0.0));
        assert_eq!(grid.position(0, 1), Vector3f::new(1.0, 0.0, 0.0));
        assert_eq!(grid.position(1, 0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(grid.color(0, 0), tex.texel(0, 1));
        assert_eq!(grid.color(0, 1), tex.texel(1, 1));
        assert_eq!(grid.color(1, 0), tex.texel(0, 0));
        assert_eq!(grid.color(1, 1), tex.texel(1, 0));
    }

    #[test]
    fn test_invalid_parameters_are_config_errors() {
        let tex = quadrant_texture();
        assert!(matches!(SampleGrid::generate(Face::Top, &tex, 1, 1.0), Err(BlockError::Config(_))));
        assert!(matches!(SampleGrid::generate(Face::Top, &tex, 4, -1.0), Err(BlockError::Config(_))));
        assert!(matches!(SampleGrid::generate(Face::Top, &tex, usize::MAX, 1.0), Err(BlockError::Config(_))));
    }
}
