// Copyright @yucwang 2026

use crate::math::constants::{EPSILON, Float, Vector2f, Vector3f};

/// Share of each raster dimension left empty around the framed cube.
pub const FRAME_MARGIN: Float = 0.1;

pub trait Sensor: Sync {
    /// Raster position (x right, y down, in pixels) of a world point, or
    /// `None` when the point cannot be seen.
    fn project(&self, p: &Vector3f) -> Option<Vector2f>;
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn describe(&self) -> String {
        String::from("Sensor")
    }
}

/// Orthonormal camera basis looking at `center` along `forward`, with
/// world +z as up.
#[derive(Debug, Clone, Copy)]
pub struct ViewFrame {
    pub center: Vector3f,
    pub forward: Vector3f,
    pub right: Vector3f,
    pub up: Vector3f,
}

impl ViewFrame {
    /// `to_eye` points from the center toward the viewer.
    pub fn new(center: Vector3f, to_eye: Vector3f) -> Self {
        let forward = -to_eye.normalize();
        let mut right = forward.cross(&Vector3f::new(0.0, 0.0, 1.0));
        // Looking straight up or down: fall back to +y as the up hint.
        if right.norm() < EPSILON {
            right = forward.cross(&Vector3f::new(0.0, 1.0, 0.0));
        }
        let right = right.normalize();
        let up = right.cross(&forward).normalize();
        Self { center, forward, right, up }
    }
}

/// Uniform scale and offset that centers a set of image-plane points in
/// the raster, keeping `FRAME_MARGIN` free on every side.
#[derive(Debug, Clone, Copy)]
pub struct RasterFit {
    scale: Float,
    plane_center: Vector2f,
    raster_center: Vector2f,
}

impl RasterFit {
    pub fn new(points: &[Vector2f], width: usize, height: usize) -> Self {
        let mut min = Vector2f::new(Float::MAX, Float::MAX);
        let mut max = Vector2f::new(-Float::MAX, -Float::MAX);
        for p in points {
            min = min.inf(p);
            max = max.sup(p);
        }

        let extent = max - min;
        let usable_w = width as Float * (1.0 - 2.0 * FRAME_MARGIN);
        let usable_h = height as Float * (1.0 - 2.0 * FRAME_MARGIN);
        let scale_x = if extent.x > EPSILON { usable_w / extent.x } else { Float::MAX };
        let scale_y = if extent.y > EPSILON { usable_h / extent.y } else { Float::MAX };
        let mut scale = scale_x.min(scale_y);
        if scale == Float::MAX {
            scale = 1.0;
        }

        Self {
            scale,
            plane_center: (min + max) * 0.5,
            raster_center: Vector2f::new(width as Float * 0.5, height as Float * 0.5),
        }
    }

    pub fn apply(&self, plane: Vector2f) -> Vector2f {
        let d = (plane - self.plane_center) * self.scale;
        Vector2f::new(self.raster_center.x + d.x, self.raster_center.y - d.y)
    }
}
