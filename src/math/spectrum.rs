// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector4f};

use std::ops;

/// Straight (non-premultiplied) RGBA color, every channel in [0, 1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RGBASpectrum {
    rgba: Vector4f
}

impl Default for RGBASpectrum {
    fn default() -> Self {
        Self { rgba: Vector4f::new(0.0f32, 0.0f32, 0.0f32, 0.0f32) }
    }
}

impl ops::Index<usize> for RGBASpectrum {
    type Output = Float;

    fn index(&self, index: usize) -> &Float {
        &self.rgba[index]
    }
}

impl RGBASpectrum {
    pub fn new(r: Float, g: Float, b: Float, a: Float) -> Self {
        Self { rgba: Vector4f::new(r, g, b, a) }
    }

    pub fn opaque(r: Float, g: Float, b: Float) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn transparent() -> Self {
        Self::default()
    }

    pub fn r(&self) -> Float {
        self.rgba[0]
    }

    pub fn g(&self) -> Float {
        self.rgba[1]
    }

    pub fn b(&self) -> Float {
        self.rgba[2]
    }

    pub fn alpha(&self) -> Float {
        self.rgba[3]
    }

    pub fn is_transparent(&self) -> bool {
        self.rgba[3] <= 0.0
    }

    // Source-over with straight alpha: self is drawn on top of `dst`.
    pub fn over(&self, dst: &RGBASpectrum) -> RGBASpectrum {
        let sa = self.alpha();
        if sa >= 1.0 {
            return *self;
        }
        if sa <= 0.0 {
            return *dst;
        }

        let da = dst.alpha() * (1.0 - sa);
        let out_a = sa + da;
        let blend = |s: Float, d: Float| (s * sa + d * da) / out_a;
        RGBASpectrum::new(
            blend(self.r(), dst.r()),
            blend(self.g(), dst.g()),
            blend(self.b(), dst.b()),
            out_a,
        )
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let quantize = |v: Float| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.rgba[0]),
            quantize(self.rgba[1]),
            quantize(self.rgba[2]),
            quantize(self.rgba[3]),
        ]
    }
}
