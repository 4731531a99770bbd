// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f, Vector3f};

use std::fmt;

/// The three cube faces visible from the default camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Front,
    Right,
}

impl Face {
    /// Back-to-front for the default camera; later faces overpaint earlier ones.
    pub const DRAW_ORDER: [Face; 3] = [Face::Right, Face::Front, Face::Top];

    /// Point on the face for parameters (u, v) in [0, 1]^2.
    pub fn position(&self, u: Float, v: Float, edge_length: Float) -> Vector3f {
        let l = edge_length;
        match self {
            Face::Top => Vector3f::new(u * l, v * l, l),
            Face::Front => Vector3f::new(u * l, 0.0, v * l),
            Face::Right => Vector3f::new(l, u * l, v * l),
        }
    }

    // v is flipped so the image reads top-to-bottom as v goes from 1 to 0.
    pub fn texture_coord(&self, u: Float, v: Float) -> Vector2f {
        Vector2f::new(u, 1.0 - v)
    }

    /// Outward normal of the face.
    pub fn normal(&self) -> Vector3f {
        match self {
            Face::Top => Vector3f::new(0.0, 0.0, 1.0),
            Face::Front => Vector3f::new(0.0, -1.0, 0.0),
            Face::Right => Vector3f::new(1.0, 0.0, 0.0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Face::Top => "top",
            Face::Front => "front",
            Face::Right => "right",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
