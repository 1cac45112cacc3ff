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

//! Defines the `Mesh` container and its affine transformation operations.

use super::Face;
use crate::math::{degrees_to_radians, Mat3, Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// An indexed polygonal mesh.
///
/// Vertices, texture coordinates and normals are flat attribute arrays;
/// faces index into them. Normals are kept unit length by construction, and
/// transforms rotate them without translating or rescaling.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mesh {
    /// World-space vertex positions.
    pub vertices: Vec<Vec3>,
    /// Texture coordinates in `[0, 1]` UV space.
    pub tex_coords: Vec<Vec2>,
    /// Unit normal vectors.
    pub normals: Vec<Vec3>,
    /// Polygonal faces indexing the attribute arrays.
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in the mesh.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces in the mesh.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether every face is a triangle.
    pub fn is_triangulated(&self) -> bool {
        self.faces.iter().all(Face::is_triangle)
    }

    /// Computes the centroid of the vertex positions.
    ///
    /// Returns the origin for an empty mesh.
    pub fn center(&self) -> Vec3 {
        if self.vertices.is_empty() {
            return Vec3::ZERO;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vec3::ZERO, |acc, &v| acc + v);
        sum / self.vertices.len() as f32
    }

    /// Translates every vertex by `offset`. Normals are unaffected.
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Scales every vertex component-wise about the origin.
    ///
    /// Normals pass through the same linear part and are re-normalized, so
    /// they stay unit length even under non-uniform factors. Normals that
    /// degenerate (a zero scale factor along their axis) are left unchanged.
    pub fn scale(&mut self, factors: Vec3) {
        self.apply_transform(&Mat4::from_scale(factors));
    }

    /// Rotates the mesh by Euler angles given in degrees.
    ///
    /// The combined rotation is `Rz * Ry * Rx`: the X rotation is applied
    /// first, then Y, then Z. Normals are rotated alongside vertices.
    pub fn rotate_euler(&mut self, degrees: Vec3) {
        let rotation = Mat4::from_rotation_z(degrees_to_radians(degrees.z))
            * Mat4::from_rotation_y(degrees_to_radians(degrees.y))
            * Mat4::from_rotation_x(degrees_to_radians(degrees.x));
        self.apply_transform(&rotation);
    }

    /// Applies an affine transform to every vertex, and its rotational part
    /// to every normal.
    ///
    /// The matrix is assumed affine (last row `0 0 0 1`), so no perspective
    /// divide takes place. Normals that degenerate under the linear part are
    /// left unchanged.
    pub fn apply_transform(&mut self, transform: &Mat4) {
        for v in &mut self.vertices {
            *v = transform.transform_direction(*v) + transform.cols[3].truncate();
        }
        let linear = Mat3::from_mat4(transform);
        for n in &mut self.normals {
            let rotated = linear * *n;
            if let Ok(unit) = rotated.normalize() {
                *n = unit;
            }
        }
    }
}
