// Copyright @yucwang 2021

use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::RGBASpectrum;
use crate::shapes::quad_mesh::QuadMesh;
use indicatif::{ProgressBar, ProgressStyle};

pub use super::renderer::Renderer;

/// Flat-shaded quad rasterizer without a depth buffer: meshes are
/// composited in the order given, so callers pass them back to front.
pub struct PainterRenderer {
    sensor: Box<dyn Sensor>,
    show_progress: bool,
}

impl Renderer for PainterRenderer {
    fn render(&self, meshes: &[QuadMesh]) -> Bitmap {
        let width = self.sensor.width();
        let height = self.sensor.height();
        let mut bitmap = Bitmap::new(width, height);
        if width == 0 || height == 0 {
            return bitmap;
        }

        let total_cells: usize = meshes.iter().map(|m| m.cell_count()).sum();
        let progress = if self.show_progress {
            ProgressBar::new(total_cells as u64)
        } else {
            ProgressBar::hidden()
        };
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} cells")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut skipped = 0usize;
        for mesh in meshes {
            for i in 0..mesh.cell_rows() {
                for j in 0..mesh.cell_cols() {
                    let (corners, color) = mesh.cell(i, j);
                    if color.is_transparent() {
                        continue;
                    }
                    let projected = [
                        self.sensor.project(&corners[0]),
                        self.sensor.project(&corners[1]),
                        self.sensor.project(&corners[2]),
                        self.sensor.project(&corners[3]),
                    ];
                    match projected {
                        [Some(p0), Some(p1), Some(p2), Some(p3)] => {
                            fill_triangle(&mut bitmap, p0, p1, p2, &color);
                            fill_triangle(&mut bitmap, p0, p2, p3, &color);
                        }
                        _ => skipped += 1,
                    }
                }
                progress.inc(mesh.cell_cols() as u64);
            }
            log::debug!("Rasterized {} cells of {:?}.", mesh.cell_count(), mesh.face());
        }
        progress.finish_and_clear();

        if skipped > 0 {
            log::warn!("Skipped {} cells that fall behind the camera.", skipped);
        }
        bitmap
    }
}

impl PainterRenderer {
    pub fn new(sensor: Box<dyn Sensor>) -> Self {
        Self { sensor, show_progress: true }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

fn edge(a: Vector2f, b: Vector2f, p: Vector2f) -> Float {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

// Top-left rule: a pixel center exactly on an edge belongs to only one of
// the two triangles sharing that edge.
fn covers(w: Float, d: Vector2f) -> bool {
    if w == 0.0 {
        (d.y == 0.0 && d.x > 0.0) || d.y > 0.0
    } else {
        w > 0.0
    }
}

fn fill_triangle(bitmap: &mut Bitmap, a: Vector2f, b: Vector2f, c: Vector2f, color: &RGBASpectrum) {
    let area = edge(a, b, c);
    if area.abs() < 1e-9 {
        return;
    }
    let (b, c) = if area < 0.0 { (c, b) } else { (b, c) };

    let max_x = (bitmap.width() - 1) as Float;
    let max_y = (bitmap.height() - 1) as Float;
    let x0 = (a.x.min(b.x).min(c.x) - 0.5).ceil().max(0.0);
    let x1 = (a.x.max(b.x).max(c.x) - 0.5).floor().min(max_x);
    let y0 = (a.y.min(b.y).min(c.y) - 0.5).ceil().max(0.0);
    let y1 = (a.y.max(b.y).max(c.y) - 0.5).floor().min(max_y);
    if !(x0 <= x1 && y0 <= y1) {
        return;
    }

    let (ab, bc, ca) = (b - a, c - b, a - c);
    for y in y0 as usize..=y1 as usize {
        for x in x0 as usize..=x1 as usize {
            let p = Vector2f::new(x as Float + 0.5, y as Float + 0.5);
            if covers(edge(b, c, p), bc) && covers(edge(c, a, p), ca) && covers(edge(a, b, p), ab) {
                bitmap.blend(x, y, color);
            }
        }
    }
}
