// Copyright @yucwang 2026

use crate::core::error::Result;
use crate::core::face::Face;
use crate::core::sample_grid::SampleGrid;
use crate::core::texture::Texture;
use crate::math::constants::{Float, Vector3f};

/// The three visible faces, stored in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    grids: Vec<SampleGrid>,
}

impl Cube {
    pub fn grids(&self) -> &[SampleGrid] {
        &self.grids
    }

    pub fn grid(&self, face: Face) -> Option<&SampleGrid> {
        self.grids.iter().find(|g| g.face() == face)
    }
}

pub fn generate_cube(texture: &dyn Texture, resolution: usize, edge_length: Float) -> Result<Cube> {
    let mut grids = Vec::with_capacity(Face::DRAW_ORDER.len());
    for face in Face::DRAW_ORDER.iter() {
        grids.push(SampleGrid::generate(*face, texture, resolution, edge_length)?);
    }
    Ok(Cube { grids })
}

pub fn cube_corners(edge_length: Float) -> [Vector3f; 8] {
    let l = edge_length;
    [
        Vector3f::new(0.0, 0.0, 0.0),
        Vector3f::new(l, 0.0, 0.0),
        Vector3f::new(0.0, l, 0.0),
        Vector3f::new(l, l, 0.0),
        Vector3f::new(0.0, 0.0, l),
        Vector3f::new(l, 0.0, l),
        Vector3f::new(0.0, l, l),
        Vector3f::new(l, l, l),
    ]
}
