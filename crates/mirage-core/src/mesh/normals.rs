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

//! Smooth vertex normal generation from face geometry.

use super::Mesh;
use crate::math::{Vec3, EPSILON};

/// Computes the unit normal of a face from its first three corners.
///
/// Returns `None` when the corners are collinear or coincident (cross
/// product length at or below [`EPSILON`]).
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Option<Vec3> {
    (v1 - v0).cross(v2 - v0).normalize().ok()
}

impl Mesh {
    /// Rebuilds smooth per-vertex normals from the face geometry.
    ///
    /// Each face contributes its unit normal to every corner vertex;
    /// degenerate faces contribute nothing. The accumulated sums are
    /// normalized, falling back to `+Z` for vertices whose sum cancels out
    /// or which no face references. Afterwards the normal array runs
    /// parallel to the vertex array and every face's normal indices are
    /// rebound to its vertex indices.
    ///
    /// Faces with fewer than three corners or out-of-range vertex indices
    /// are skipped.
    pub fn recalculate_normals(&mut self) {
        let mut sums = vec![Vec3::ZERO; self.vertices.len()];

        for face in &self.faces {
            let indices = &face.vertex_indices;
            if indices.len() < 3 {
                log::warn!("skipping face with fewer than 3 corners during normal generation");
                continue;
            }
            if indices.iter().any(|&i| i >= self.vertices.len()) {
                log::warn!(
                    "skipping face with out-of-range vertex index during normal generation"
                );
                continue;
            }
            let Some(normal) = face_normal(
                self.vertices[indices[0]],
                self.vertices[indices[1]],
                self.vertices[indices[2]],
            ) else {
                continue;
            };
            for &i in indices {
                sums[i] += normal;
            }
        }

        self.normals = sums
            .into_iter()
            .map(|sum| {
                if sum.length_squared() <= EPSILON * EPSILON {
                    Vec3::Z
                } else {
                    sum.normalize().unwrap_or(Vec3::Z)
                }
            })
            .collect();

        for face in &mut self.faces {
            face.normal_indices = face.vertex_indices.clone();
        }
    }
}
