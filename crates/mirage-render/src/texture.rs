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

//! Nearest-neighbor texture sampling over raw RGBA pixel data.

use crate::error::TextureError;
use mirage_core::math::Rgba;

/// An immutable RGBA texture sampled with clamped nearest-neighbor lookup.
///
/// All validation happens at construction; sampling can never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl Texture {
    /// Creates a texture from tightly packed RGBA bytes, row-major from the
    /// top-left corner.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::ZeroDimension`] for empty dimensions and
    /// [`TextureError::SizeMismatch`] when `rgba.len() != width * height * 4`.
    pub fn new(rgba: Vec<u8>, width: usize, height: usize) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroDimension);
        }
        let expected = width * height * 4;
        if rgba.len() != expected {
            return Err(TextureError::SizeMismatch {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Creates a 1x1 texture of a single color.
    pub fn solid(color: Rgba) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: color.to_rgba8().to_vec(),
        }
    }

    /// Texture width in texels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Texture height in texels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples the nearest texel for a UV coordinate.
    ///
    /// UVs are clamped to `[0, 1]` with `v = 0` at the bottom of the image,
    /// so the vertical axis flips into row-major storage.
    pub fn sample(&self, u: f32, v: f32) -> Rgba {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        let x = ((u * (self.width - 1) as f32) as usize).min(self.width - 1);
        let y = (((1.0 - v) * (self.height - 1) as f32) as usize).min(self.height - 1);
        let offset = (y * self.width + x) * 4;
        Rgba::from_rgba8(
            self.rgba[offset],
            self.rgba[offset + 1],
            self.rgba[offset + 2],
            self.rgba[offset + 3],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 texture: top row red, green; bottom row blue, white.
    fn quad_texture() -> Texture {
        #[rustfmt::skip]
        let rgba = vec![
            255, 0, 0, 255,    0, 255, 0, 255,
            0, 0, 255, 255,    255, 255, 255, 255,
        ];
        Texture::new(rgba, 2, 2).unwrap()
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(
            Texture::new(vec![0; 4], 0, 1),
            Err(TextureError::ZeroDimension)
        );
        assert_eq!(
            Texture::new(vec![0; 10], 2, 2),
            Err(TextureError::SizeMismatch {
                expected: 16,
                actual: 10
            })
        );
    }

    #[test]
    fn test_sample_corners() {
        let tex = quad_texture();
        // v = 1 is the top of the image.
        assert_eq!(tex.sample(0.0, 1.0), Rgba::RED);
        assert_eq!(tex.sample(1.0, 1.0), Rgba::GREEN);
        assert_eq!(tex.sample(0.0, 0.0), Rgba::BLUE);
        assert_eq!(tex.sample(1.0, 0.0), Rgba::WHITE);
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        let tex = quad_texture();
        assert_eq!(tex.sample(-3.0, 7.0), tex.sample(0.0, 1.0));
        assert_eq!(tex.sample(2.0, -1.0), tex.sample(1.0, 0.0));
    }

    #[test]
    fn test_solid() {
        let tex = Texture::solid(Rgba::GREEN);
        assert_eq!(tex.sample(0.3, 0.8), Rgba::GREEN);
    }
}
