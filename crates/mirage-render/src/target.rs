// Copyright 2025 the mirage developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The output surface abstraction and an in-memory RGBA implementation.

use mirage_core::math::Rgba;

/// A surface the rasterizer writes pixels into.
///
/// Implementations are free to back this with a window surface, an image
/// buffer, or anything else addressable by pixel.
pub trait RenderTarget {
    /// Target width in pixels.
    fn width(&self) -> usize;

    /// Target height in pixels.
    fn height(&self) -> usize;

    /// Writes one pixel. Out-of-bounds writes are ignored.
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgba);
}

/// A CPU-side RGBA8 pixel buffer, row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a buffer filled with transparent black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rgba: vec![0; width * height * 4],
        }
    }

    /// Fills the whole buffer with one color.
    pub fn clear(&mut self, color: Rgba) {
        let texel = color.to_rgba8();
        for chunk in self.rgba.chunks_exact_mut(4) {
            chunk.copy_from_slice(&texel);
        }
    }

    /// Reads one pixel, or `None` out of bounds.
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * 4;
        Some(Rgba::from_rgba8(
            self.rgba[offset],
            self.rgba[offset + 1],
            self.rgba[offset + 2],
            self.rgba[offset + 3],
        ))
    }

    /// The raw RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.rgba
    }
}

impl RenderTarget for PixelBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = (y * self.width + x) * 4;
        self.rgba[offset..offset + 4].copy_from_slice(&color.to_rgba8());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent_black() {
        let buf = PixelBuffer::new(2, 2);
        assert_eq!(buf.get_pixel(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(buf.get_pixel(2, 0), None);
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.set_pixel(1, 2, Rgba::RED);
        assert_eq!(buf.get_pixel(1, 2), Some(Rgba::RED));
        assert_eq!(buf.get_pixel(2, 1), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_out_of_bounds_write_ignored() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.set_pixel(5, 5, Rgba::WHITE);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clear() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.clear(Rgba::BLUE);
        assert_eq!(buf.get_pixel(1, 1), Some(Rgba::BLUE));
    }
}
