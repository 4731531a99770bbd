// Copyright @yucwang 2026

use crate::core::sensor::{RasterFit, Sensor, ViewFrame};
use crate::math::constants::{Vector2f, Vector3f};

pub struct OrthographicCamera {
    frame: ViewFrame,
    fit: RasterFit,
    width: usize,
    height: usize,
}

impl OrthographicCamera {
    /// Parallel projection along `-to_eye`, scaled so `framed` fills the raster.
    pub fn new(center: Vector3f,
               to_eye: Vector3f,
               framed: &[Vector3f],
               width: usize,
               height: usize) -> Self {
        let frame = ViewFrame::new(center, to_eye);
        let plane: Vec<Vector2f> = framed.iter().map(|p| Self::to_plane(&frame, p)).collect();
        let fit = RasterFit::new(&plane, width, height);
        Self { frame, fit, width, height }
    }

    fn to_plane(frame: &ViewFrame, p: &Vector3f) -> Vector2f {
        let rel = p - frame.center;
        Vector2f::new(rel.dot(&frame.right), rel.dot(&frame.up))
    }
}

impl Sensor for OrthographicCamera {
    fn project(&self, p: &Vector3f) -> Option<Vector2f> {
        Some(self.fit.apply(Self::to_plane(&self.frame, p)))
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn describe(&self) -> String {
        format!("OrthographicCamera {}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::view_direction;
    use crate::core::cube::cube_corners;

    fn default_camera() -> OrthographicCamera {
        let center = Vector3f::new(0.5, 0.5, 0.5);
        OrthographicCamera::new(center, view_direction(30.0, -35.0), &cube_corners(1.0), 200, 200)
    }

    #[test]
    fn test_cube_stays_inside_raster() {
        let cam = default_camera();
        for corner in cube_corners(1.0).iter() {
            let p = cam.project(corner).unwrap();
            assert!(p.x >= 0.0 && p.x <= 200.0);
            assert!(p.y >= 0.0 && p.y <= 200.0);
        }
    }

    #[test]
    fn test_default_view_layout() {
        let cam = default_camera();
        let project = |x, y, z| cam.project(&Vector3f::new(x, y, z)).unwrap();

        // The vertical edge shared by FRONT and RIGHT sits between them.
        let shared = project(1.0, 0.0, 0.5);
        let front_mid = project(0.5, 0.0, 0.5);
        let right_mid = project(1.0, 0.5, 0.5);
        assert!(front_mid.x < shared.x);
        assert!(right_mid.x > shared.x);

        // TOP is above FRONT on screen (smaller raster y).
        let top_mid = project(0.5, 0.5, 1.0);
        assert!(top_mid.y < front_mid.y);
    }

    #[test]
    fn test_parallel_lines_stay_parallel() {
        let cam = default_camera();
        let project = |x, y, z| cam.project(&Vector3f::new(x, y, z)).unwrap();
        let a = project(1.0, 0.0, 1.0) - project(0.0, 0.0, 1.0);
        let b = project(1.0, 1.0, 1.0) - project(0.0, 1.0, 1.0);
        assert!((a - b).norm() < 1e-3);
    }
}
