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

//! Vertex projection: model space through clip space to the screen.

use crate::error::PipelineError;
use mirage_core::math::{Mat4, Vec2, Vec3, Vec4};

/// Visibility slack around the NDC unit box on the x and y axes.
///
/// A face is kept as long as every vertex lands within this margin, so
/// polygons partially off-screen still rasterize (the viewport clamp in the
/// rasterizer discards the off-screen pixels).
pub const VISIBILITY_MARGIN: f32 = 1.5;

/// Clip-space `w` magnitudes below this are rejected before the divide.
pub const MIN_CLIP_W: f32 = 1e-12;

/// A vertex after the perspective divide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcVertex {
    /// Normalized device coordinates, x/y in `[-1, 1]` and z in `[0, 1]`
    /// when visible.
    pub ndc: Vec3,
    /// Reciprocal of the clip-space w component.
    pub inv_w: f32,
}

/// A vertex mapped to the screen with the attributes rasterization needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedVertex {
    /// Screen-space position in pixels.
    pub screen: Vec2,
    /// NDC depth in `[0, 1]`, used directly by the depth buffer.
    pub depth: f32,
    /// Reciprocal of the clip-space w component, carried from projection.
    pub inv_w: f32,
    /// Texture coordinates, when the face is textured.
    pub uv: Option<Vec2>,
    /// Unit world-space normal, when lighting is enabled.
    pub normal: Option<Vec3>,
    /// World-space position, when lighting is enabled.
    pub world_pos: Option<Vec3>,
}

/// Projects a point through a model-view-projection matrix into NDC.
///
/// # Errors
///
/// Returns [`PipelineError::PerspectiveDivideByZero`] when the clip-space
/// `|w|` falls below [`MIN_CLIP_W`].
pub fn project(mvp: &Mat4, position: Vec3) -> Result<NdcVertex, PipelineError> {
    let clip = *mvp * Vec4::from_point(position);
    if clip.w.abs() < MIN_CLIP_W {
        return Err(PipelineError::PerspectiveDivideByZero);
    }
    let inv_w = 1.0 / clip.w;
    Ok(NdcVertex {
        ndc: clip.truncate() * inv_w,
        inv_w,
    })
}

/// Whether an NDC position lies within the slack-extended view volume.
#[inline]
pub fn is_visible(ndc: Vec3) -> bool {
    ndc.x.abs() <= VISIBILITY_MARGIN
        && ndc.y.abs() <= VISIBILITY_MARGIN
        && (0.0..=1.0).contains(&ndc.z)
}

/// Maps an NDC position to pixel coordinates.
///
/// The mapping is center-based: NDC (0, 0) lands on the viewport center,
/// and the y axis flips so +y in NDC points up the screen.
#[inline]
pub fn to_screen(ndc: Vec3, width: usize, height: usize) -> Vec2 {
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    Vec2::new(cx + ndc.x * cx, cy - ndc.y * cy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirage_core::math::approx_eq_eps;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_project_identity_keeps_position() {
        let v = project(&Mat4::IDENTITY, Vec3::new(0.25, -0.5, 0.75)).unwrap();
        assert!(approx_eq_eps(v.ndc.x, 0.25, EPS));
        assert!(approx_eq_eps(v.ndc.y, -0.5, EPS));
        assert!(approx_eq_eps(v.ndc.z, 0.75, EPS));
        assert!(approx_eq_eps(v.inv_w, 1.0, EPS));
    }

    #[test]
    fn test_project_zero_w_fails() {
        // A matrix with a zero bottom row sends every point to w = 0.
        let mut m = Mat4::IDENTITY;
        m.cols[3].w = 0.0;
        assert_eq!(
            project(&m, Vec3::ZERO),
            Err(PipelineError::PerspectiveDivideByZero)
        );
    }

    #[test]
    fn test_projected_vertex_keeps_inv_w() {
        use mirage_core::math::degrees_to_radians;

        // Under a perspective projection clip w equals the view-space
        // distance, so a point 5 units ahead carries 1/w = 0.2.
        let proj = Mat4::perspective(degrees_to_radians(60.0), 1.0, 0.1, 100.0);
        let v = project(&proj, Vec3::new(0.0, 0.0, -5.0)).unwrap();
        assert!(approx_eq_eps(v.inv_w, 0.2, EPS));

        let mapped = ProjectedVertex {
            screen: to_screen(v.ndc, 800, 600),
            depth: v.ndc.z,
            inv_w: v.inv_w,
            uv: None,
            normal: None,
            world_pos: None,
        };
        assert!(approx_eq_eps(mapped.inv_w, v.inv_w, EPS));
        assert!(approx_eq_eps(mapped.depth, v.ndc.z, EPS));
    }

    #[test]
    fn test_visibility_margin() {
        assert!(is_visible(Vec3::new(0.0, 0.0, 0.5)));
        assert!(is_visible(Vec3::new(1.5, -1.5, 0.0)));
        assert!(is_visible(Vec3::new(-1.2, 1.4, 1.0)));
        assert!(!is_visible(Vec3::new(1.6, 0.0, 0.5)));
        assert!(!is_visible(Vec3::new(0.0, -1.51, 0.5)));
        assert!(!is_visible(Vec3::new(0.0, 0.0, -0.01)));
        assert!(!is_visible(Vec3::new(0.0, 0.0, 1.01)));
    }

    #[test]
    fn test_to_screen_center_mapping() {
        let center = to_screen(Vec3::ZERO, 800, 600);
        assert!(approx_eq_eps(center.x, 400.0, EPS));
        assert!(approx_eq_eps(center.y, 300.0, EPS));

        // NDC (1, 1) is the top-right corner.
        let corner = to_screen(Vec3::new(1.0, 1.0, 0.0), 800, 600);
        assert!(approx_eq_eps(corner.x, 800.0, EPS));
        assert!(approx_eq_eps(corner.y, 0.0, EPS));

        // NDC (-1, -1) is the bottom-left corner.
        let corner = to_screen(Vec3::new(-1.0, -1.0, 0.0), 800, 600);
        assert!(approx_eq_eps(corner.x, 0.0, EPS));
        assert!(approx_eq_eps(corner.y, 600.0, EPS));
    }
}
