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

//! Per-pixel depth buffer used for occlusion.

/// A depth buffer holding one `f32` NDC depth per pixel.
///
/// Smaller depths are closer to the camera. A buffer is owned by a single
/// render invocation and cleared before use.
#[derive(Debug, Clone)]
pub struct DepthBuffer {
    width: usize,
    height: usize,
    depths: Vec<f32>,
}

impl DepthBuffer {
    /// Creates a buffer with every pixel at infinite depth.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero; callers validate target
    /// dimensions before building a buffer.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "depth buffer dimensions must be nonzero");
        Self {
            width,
            height,
            depths: vec![f32::INFINITY; width * height],
        }
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resets every pixel to infinite depth.
    pub fn clear(&mut self) {
        self.depths.fill(f32::INFINITY);
    }

    /// Returns the stored depth at a pixel, or `None` out of bounds.
    #[inline]
    pub fn depth_at(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.depths[y * self.width + x])
    }

    /// Depth-tests a pixel and claims it when the candidate is strictly
    /// closer.
    ///
    /// Returns `true` and stores `depth` when it is strictly less than the
    /// current value. Equal or farther candidates, and out-of-bounds
    /// coordinates, leave the buffer unchanged and return `false`.
    #[inline]
    pub fn test_and_set(&mut self, x: usize, y: usize, depth: f32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let slot = &mut self.depths[y * self.width + x];
        if depth < *slot {
            *slot = depth;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_infinity() {
        let buf = DepthBuffer::new(4, 3);
        assert_eq!(buf.depth_at(0, 0), Some(f32::INFINITY));
        assert_eq!(buf.depth_at(3, 2), Some(f32::INFINITY));
        assert_eq!(buf.depth_at(4, 0), None);
    }

    #[test]
    fn test_strictly_less_wins() {
        let mut buf = DepthBuffer::new(2, 2);
        assert!(buf.test_and_set(0, 0, 0.5));
        assert_eq!(buf.depth_at(0, 0), Some(0.5));

        // Equal depth loses.
        assert!(!buf.test_and_set(0, 0, 0.5));
        // Farther loses.
        assert!(!buf.test_and_set(0, 0, 0.9));
        assert_eq!(buf.depth_at(0, 0), Some(0.5));

        // Strictly closer wins.
        assert!(buf.test_and_set(0, 0, 0.25));
        assert_eq!(buf.depth_at(0, 0), Some(0.25));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut buf = DepthBuffer::new(2, 2);
        assert!(!buf.test_and_set(2, 0, 0.1));
        assert!(!buf.test_and_set(0, 2, 0.1));
    }

    #[test]
    fn test_clear_resets() {
        let mut buf = DepthBuffer::new(2, 2);
        buf.test_and_set(1, 1, 0.1);
        buf.clear();
        assert_eq!(buf.depth_at(1, 1), Some(f32::INFINITY));
    }

    #[test]
    #[should_panic]
    fn test_zero_dimension_panics() {
        let _ = DepthBuffer::new(0, 10);
    }
}
