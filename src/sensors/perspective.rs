// Copyright @yucwang 2026

use crate::core::error::{BlockError, Result};
use crate::core::sensor::{RasterFit, Sensor, ViewFrame};
use crate::math::constants::{EPSILON, Float, Vector2f, Vector3f};

pub struct PerspectiveCamera {
    frame: ViewFrame,
    origin: Vector3f,
    tan_half_fov_y: Float,
    fit: RasterFit,
    width: usize,
    height: usize,
}

impl PerspectiveCamera {
    pub const FOV_Y_DEGREES: Float = 90.0;

    /// Eye at `center + to_eye * distance`, looking at `center`. Every point
    /// in `framed` must lie in front of the eye.
    pub fn new(center: Vector3f,
               to_eye: Vector3f,
               distance: Float,
               framed: &[Vector3f],
               width: usize,
               height: usize) -> Result<Self> {
        let frame = ViewFrame::new(center, to_eye);
        let origin = center - frame.forward * distance;
        let tan_half_fov_y = (0.5 * Self::FOV_Y_DEGREES.to_radians()).tan();

        let mut plane = Vec::with_capacity(framed.len());
        for p in framed {
            let q = Self::to_plane(&frame, &origin, tan_half_fov_y, p).ok_or_else(|| {
                BlockError::config(format!(
                    "perspective eye at distance {} is inside the framed geometry",
                    distance
                ))
            })?;
            plane.push(q);
        }
        let fit = RasterFit::new(&plane, width, height);

        Ok(Self { frame, origin, tan_half_fov_y, fit, width, height })
    }

    fn to_plane(frame: &ViewFrame,
                origin: &Vector3f,
                tan_half_fov_y: Float,
                p: &Vector3f) -> Option<Vector2f> {
        let rel = p - origin;
        let depth = rel.dot(&frame.forward);
        if depth <= EPSILON {
            return None;
        }
        let inv = 1.0 / (depth * tan_half_fov_y);
        Some(Vector2f::new(rel.dot(&frame.right) * inv, rel.dot(&frame.up) * inv))
    }
}

impl Sensor for PerspectiveCamera {
    fn project(&self, p: &Vector3f) -> Option<Vector2f> {
        Self::to_plane(&self.frame, &self.origin, self.tan_half_fov_y, p).map(|q| self.fit.apply(q))
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn describe(&self) -> String {
        format!("PerspectiveCamera {}x{}\n  origin: {:?}\n  forward: {:?}",
                self.width, self.height, self.origin, self.frame.forward)
    }
}
