// Copyright @yucwang 2021

use crate::math::bitmap::Bitmap;
use crate::shapes::quad_mesh::QuadMesh;

pub trait Renderer {
    /// Draws `meshes` in slice order onto a fresh transparent bitmap.
    fn render(&self, meshes: &[QuadMesh]) -> Bitmap;
}
