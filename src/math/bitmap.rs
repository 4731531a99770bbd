// Copyright 2020 @TwoCookingMice

use super::spectrum::RGBASpectrum;

use std::ops;
use std::vec::Vec;

#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    data: Vec<RGBASpectrum>,
    height: usize,
    width: usize
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = RGBASpectrum;

    fn index(&self, index: (usize, usize)) -> &RGBASpectrum {
        assert!(index.0 < self.width && index.1 < self.height);
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut RGBASpectrum {
        assert!(index.0 < self.width && index.1 < self.height);
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    /// Creates a fully transparent bitmap.
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_number = width * height;
        Self { data: vec!(RGBASpectrum::transparent(); pixel_number),
               width: width,
               height: height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[RGBASpectrum] {
        &self.data
    }

    /// Composites `color` over the pixel at (x, y).
    pub fn blend(&mut self, x: usize, y: usize, color: &RGBASpectrum) {
        let dst = self[(x, y)];
        self[(x, y)] = color.over(&dst);
    }

    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for pixel in &self.data {
            out.extend_from_slice(&pixel.to_rgba8());
        }
        out
    }
}

/* Test for Bitmap */
