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

//! A right-handed perspective camera producing view and projection matrices.

use crate::math::{degrees_to_radians, Mat4, MathError, Vec3, Vec4};
use std::fmt;

/// Errors that can occur while deriving camera matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraError {
    /// The eye position coincides with the target, or the view direction is
    /// parallel to the up vector, so no orthonormal basis exists.
    DegenerateOrientation,
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::DegenerateOrientation => {
                write!(f, "camera orientation is degenerate (eye, target and up do not span a basis)")
            }
        }
    }
}

impl std::error::Error for CameraError {}

impl From<MathError> for CameraError {
    fn from(_: MathError) -> Self {
        CameraError::DegenerateOrientation
    }
}

/// A perspective camera defined by an eye position, a look-at target and an
/// up hint.
///
/// The view matrix is built by Gram-Schmidt orthonormalization of the view
/// basis, and the projection maps depth into the `[0, 1]` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World-space eye position.
    pub position: Vec3,
    /// World-space point the camera looks at.
    pub target: Vec3,
    /// Approximate up direction, re-orthogonalized when building the view.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport width divided by height.
    pub aspect_ratio: f32,
    /// Distance to the near clipping plane.
    pub z_near: f32,
    /// Distance to the far clipping plane.
    pub z_far: f32,
}

impl Camera {
    /// Creates a camera at `position` looking at `target`.
    pub fn new(
        position: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y_degrees: f32,
        aspect_ratio: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        Self {
            position,
            target,
            up,
            fov_y_degrees,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Moves the eye position, keeping the current target.
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Changes the look-at target.
    #[inline]
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Updates the aspect ratio, typically after a viewport resize.
    #[inline]
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Builds the world-to-camera view matrix.
    ///
    /// The basis is derived by Gram-Schmidt: the backward axis from
    /// `position - target`, the right axis from `up x backward`, and the true
    /// up axis from their cross product.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::DegenerateOrientation`] when the eye coincides
    /// with the target or the view direction is parallel to `up`.
    pub fn view_matrix(&self) -> Result<Mat4, CameraError> {
        let backward = (self.position - self.target).normalize()?;
        let right = self.up.cross(backward).normalize()?;
        let up = backward.cross(right);

        Ok(Mat4::from_cols(
            Vec4::new(right.x, up.x, backward.x, 0.0),
            Vec4::new(right.y, up.y, backward.y, 0.0),
            Vec4::new(right.z, up.z, backward.z, 0.0),
            Vec4::new(
                -right.dot(self.position),
                -up.dot(self.position),
                -backward.dot(self.position),
                1.0,
            ),
        ))
    }

    /// Builds the perspective projection matrix with NDC depth in `[0, 1]`.
    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(
            degrees_to_radians(self.fov_y_degrees),
            self.aspect_ratio,
            self.z_near,
            self.z_far,
        )
    }

    /// Builds the combined view-projection matrix.
    ///
    /// # Errors
    ///
    /// Propagates [`CameraError::DegenerateOrientation`] from
    /// [`Camera::view_matrix`].
    pub fn view_projection_matrix(&self) -> Result<Mat4, CameraError> {
        Ok(self.projection_matrix() * self.view_matrix()?)
    }
}

impl Default for Camera {
    /// A camera on the positive Z axis looking at the origin.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_degrees: 60.0,
            aspect_ratio: 16.0 / 9.0,
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}
