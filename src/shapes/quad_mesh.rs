// Copyright @yucwang 2023

use crate::core::error::{BlockError, Result};
use crate::core::face::Face;
use crate::core::sample_grid::SampleGrid;
use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBASpectrum;

use std::vec::Vec;

/// Flat-colored grid of quads. Cell (i, j) spans vertices (i, j), (i, j + 1),
/// (i + 1, j + 1), (i + 1, j) and takes the color sampled at vertex (i, j).
#[derive(Debug, Clone)]
pub struct QuadMesh {
    face: Option<Face>,
    rows: usize,
    cols: usize,
    vertices: Vec<Vector3f>,
    cell_colors: Vec<RGBASpectrum>,
}

impl QuadMesh {
    /// `vertices` is rows x cols, row-major; `cell_colors` is (rows - 1) x (cols - 1).
    pub fn new(rows: usize,
               cols: usize,
               vertices: Vec<Vector3f>,
               cell_colors: Vec<RGBASpectrum>) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(BlockError::config(format!("quad mesh needs at least 2x2 vertices, got {}x{}", rows, cols)));
        }
        let vertex_count = rows.checked_mul(cols);
        if vertex_count != Some(vertices.len()) {
            return Err(BlockError::config(format!(
                "expected {}x{} vertices, got {}", rows, cols, vertices.len()
            )));
        }
        if cell_colors.len() != (rows - 1) * (cols - 1) {
            return Err(BlockError::config(format!(
                "expected {} cell colors, got {}", (rows - 1) * (cols - 1), cell_colors.len()
            )));
        }
        Ok(Self { face: None, rows, cols, vertices, cell_colors })
    }

    pub fn from_grid(grid: &SampleGrid) -> Self {
        let n = grid.resolution();
        let mut cell_colors = Vec::with_capacity((n - 1) * (n - 1));
        for i in 0..n - 1 {
            for j in 0..n - 1 {
                cell_colors.push(grid.color(i, j));
            }
        }
        Self {
            face: Some(grid.face()),
            rows: n,
            cols: n,
            vertices: grid.positions().to_vec(),
            cell_colors,
        }
    }

    pub fn face(&self) -> Option<Face> {
        self.face
    }

    pub fn cell_rows(&self) -> usize {
        self.rows - 1
    }

    pub fn cell_cols(&self) -> usize {
        self.cols - 1
    }

    pub fn cell_count(&self) -> usize {
        self.cell_colors.len()
    }

    fn vertex(&self, row: usize, col: usize) -> Vector3f {
        self.vertices[row * self.cols + col]
    }

    /// Corners of cell (i, j) in winding order, plus its color.
    pub fn cell(&self, i: usize, j: usize) -> ([Vector3f; 4], RGBASpectrum) {
        let corners = [
            self.vertex(i, j),
            self.vertex(i, j + 1),
            self.vertex(i + 1, j + 1),
            self.vertex(i + 1, j),
        ];
        (corners, self.cell_colors[i * self.cell_cols() + j])
    }
}
