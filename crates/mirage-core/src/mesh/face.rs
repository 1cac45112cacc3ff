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

//! Defines the `Face` type, a polygon referencing mesh attribute arrays.

use super::MeshError;
use serde::{Deserialize, Serialize};

/// A polygonal face described by indices into the owning mesh's attribute
/// arrays.
///
/// Corners are ordered counter-clockwise when viewed from the front. Texture
/// and normal indices are optional, but when present they run parallel to the
/// vertex indices, one entry per corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    /// Indices into the mesh vertex array, one per corner.
    pub vertex_indices: Vec<usize>,
    /// Indices into the mesh texture-coordinate array, parallel to
    /// `vertex_indices`, or empty when the face is untextured.
    pub texture_indices: Vec<usize>,
    /// Indices into the mesh normal array, parallel to `vertex_indices`, or
    /// empty when the face carries no normals.
    pub normal_indices: Vec<usize>,
}

impl Face {
    /// Creates a validated face.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::TooFewCorners`] when fewer than three vertex
    /// indices are given, and [`MeshError::AttributeCountMismatch`] when a
    /// non-empty attribute list does not have one entry per corner.
    pub fn new(
        vertex_indices: Vec<usize>,
        texture_indices: Vec<usize>,
        normal_indices: Vec<usize>,
    ) -> Result<Self, MeshError> {
        let corners = vertex_indices.len();
        if corners < 3 {
            return Err(MeshError::TooFewCorners { count: corners });
        }
        for attributes in [&texture_indices, &normal_indices] {
            if !attributes.is_empty() && attributes.len() != corners {
                return Err(MeshError::AttributeCountMismatch {
                    corners,
                    attributes: attributes.len(),
                });
            }
        }
        Ok(Self {
            vertex_indices,
            texture_indices,
            normal_indices,
        })
    }

    /// Creates a face from vertex indices alone.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::TooFewCorners`] when fewer than three indices are
    /// given.
    pub fn from_vertices(vertex_indices: Vec<usize>) -> Result<Self, MeshError> {
        Self::new(vertex_indices, Vec::new(), Vec::new())
    }

    /// Number of corners in the face.
    #[inline]
    pub fn corner_count(&self) -> usize {
        self.vertex_indices.len()
    }

    /// Whether the face is already a triangle.
    #[inline]
    pub fn is_triangle(&self) -> bool {
        self.vertex_indices.len() == 3
    }

    /// Whether the face carries per-corner texture coordinates.
    #[inline]
    pub fn has_texture(&self) -> bool {
        !self.texture_indices.is_empty()
    }

    /// Whether the face carries per-corner normals.
    #[inline]
    pub fn has_normals(&self) -> bool {
        !self.normal_indices.is_empty()
    }
}
