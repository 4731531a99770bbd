// Copyright @yucwang 2026

use crate::math::constants::Vector2f;
use crate::math::spectrum::RGBASpectrum;

pub trait Texture: Send + Sync {
    fn eval(&self, uv: Vector2f) -> RGBASpectrum;

    fn dimensions(&self) -> (usize, usize);

    fn describe(&self) -> String {
        String::from("Texture")
    }
}
