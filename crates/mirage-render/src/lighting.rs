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

//! Headlight shading: a single light co-located with the camera.

use mirage_core::math::{Rgba, Vec3};

/// Ambient plus diffuse headlight shading parameters.
///
/// The light sits at the camera position, so surfaces facing the viewer
/// receive full diffuse intensity and silhouetted surfaces fall back to the
/// ambient term alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    ambient: f32,
    diffuse: f32,
}

impl Lighting {
    /// Creates shading parameters, clamping both factors to `[0, 1]`.
    pub fn new(ambient: f32, diffuse: f32) -> Self {
        Self {
            ambient: ambient.clamp(0.0, 1.0),
            diffuse: diffuse.clamp(0.0, 1.0),
        }
    }

    /// The ambient factor.
    #[inline]
    pub fn ambient(&self) -> f32 {
        self.ambient
    }

    /// The diffuse factor.
    #[inline]
    pub fn diffuse(&self) -> f32 {
        self.diffuse
    }

    /// Computes the diffuse intensity at a surface point.
    ///
    /// The light direction runs from the camera to the point, so the
    /// intensity is `max(0, -n . normalize(world_pos - camera_pos))`.
    /// Degenerate inputs (zero normal, point at the camera) yield zero.
    pub fn intensity(&self, normal: Vec3, world_pos: Vec3, camera_pos: Vec3) -> f32 {
        let to_surface = (world_pos - camera_pos).normalize_or_zero();
        let n = normal.normalize_or_zero();
        (-n.dot(to_surface)).max(0.0)
    }

    /// Applies ambient and diffuse terms to a base color.
    ///
    /// Color channels are clamped to `[0, 1]`; alpha passes through.
    pub fn shade(&self, base: Rgba, intensity: f32) -> Rgba {
        let lit = base * self.ambient + base * (self.diffuse * intensity);
        lit.saturate().with_alpha(base.a)
    }
}

impl Default for Lighting {
    /// Moderate ambient with full diffuse.
    fn default() -> Self {
        Self::new(0.2, 0.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mirage_core::math::approx_eq_eps;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_new_clamps_factors() {
        let l = Lighting::new(-0.5, 1.5);
        assert_relative_eq!(l.ambient(), 0.0, epsilon = EPS);
        assert_relative_eq!(l.diffuse(), 1.0, epsilon = EPS);
    }

    #[test]
    fn test_intensity_facing_camera() {
        let l = Lighting::default();
        // Camera on +Z looking at a surface facing +Z.
        let i = l.intensity(Vec3::Z, Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
        assert_relative_eq!(i, 1.0, epsilon = EPS);
    }

    #[test]
    fn test_intensity_facing_away_is_zero() {
        let l = Lighting::default();
        let i = l.intensity(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 5.0),
        );
        assert!(approx_eq_eps(i, 0.0, EPS));
    }

    #[test]
    fn test_intensity_grazing_angle() {
        let l = Lighting::default();
        // Normal perpendicular to the view direction.
        let i = l.intensity(Vec3::X, Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
        assert!(approx_eq_eps(i, 0.0, EPS));
    }

    #[test]
    fn test_intensity_degenerate_normal() {
        let l = Lighting::default();
        let i = l.intensity(Vec3::ZERO, Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
        assert!(approx_eq_eps(i, 0.0, EPS));
    }

    #[test]
    fn test_shade_combines_and_clamps() {
        let l = Lighting::new(0.5, 1.0);
        let base = Rgba::rgb(0.8, 0.4, 0.2);

        let dark = l.shade(base, 0.0);
        assert!(approx_eq_eps(dark.r, 0.4, EPS));
        assert!(approx_eq_eps(dark.g, 0.2, EPS));

        // Full intensity saturates the red channel (0.4 + 0.8 > 1).
        let bright = l.shade(base, 1.0);
        assert!(approx_eq_eps(bright.r, 1.0, EPS));
        assert!(approx_eq_eps(bright.g, 0.6, EPS));
        assert!(approx_eq_eps(bright.a, 1.0, EPS));
    }

    #[test]
    fn test_shade_preserves_alpha() {
        let l = Lighting::new(1.0, 1.0);
        let base = Rgba::new(1.0, 1.0, 1.0, 0.25);
        assert!(approx_eq_eps(l.shade(base, 1.0).a, 0.25, EPS));
    }
}
