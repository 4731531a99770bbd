/* Copyright 2020 @Yuchen Wong */

use nalgebra as na;

pub type Float = f32;

pub type Vector2f = na::Vector2<Float>;
pub type Vector3f = na::Vector3<Float>;
pub type Vector4f = na::Vector4<Float>;
pub type MatrixXF = na::DMatrix<Float>;

pub const EPSILON: Float = 1e-4;
