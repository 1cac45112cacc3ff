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

//! Fan triangulation of polygonal faces.

use super::{Face, Mesh};

/// Splits a polygon into a triangle fan anchored at its first corner.
///
/// An n-gon yields `n - 2` triangles `(c0, ci, ci+1)`, all sharing the first
/// corner and preserving the winding order. Texture and normal indices
/// follow the same fan pattern. A triangle is returned as a single-element
/// clone; a face with fewer than three corners yields no triangles.
pub fn fan_triangulate(face: &Face) -> Vec<Face> {
    let n = face.vertex_indices.len();
    if n < 3 {
        return Vec::new();
    }
    let mut triangles = Vec::with_capacity(n - 2);
    for i in 1..n - 1 {
        let pick = |indices: &[usize]| -> Vec<usize> {
            if indices.is_empty() {
                Vec::new()
            } else {
                vec![indices[0], indices[i], indices[i + 1]]
            }
        };
        triangles.push(Face {
            vertex_indices: pick(&face.vertex_indices),
            texture_indices: pick(&face.texture_indices),
            normal_indices: pick(&face.normal_indices),
        });
    }
    triangles
}

impl Mesh {
    /// Triangulates every face in place, replacing each n-gon with its fan.
    ///
    /// Attribute arrays are untouched; only the face list changes. Triangle
    /// faces pass through unchanged, so the operation is idempotent.
    pub fn triangulate(&mut self) {
        if self.is_triangulated() {
            return;
        }
        let mut triangles = Vec::with_capacity(self.faces.len());
        for face in &self.faces {
            triangles.extend(fan_triangulate(face));
        }
        self.faces = triangles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_triangle_passthrough() {
        let face = Face::from_vertices(vec![0, 1, 2]).unwrap();
        let tris = fan_triangulate(&face);
        assert_eq!(tris, vec![face]);
    }

    #[test]
    fn test_fan_undersized_face_yields_nothing() {
        // Hand-built faces may carry fewer than three corners.
        for count in 0..3 {
            let stub = Face {
                vertex_indices: (0..count).collect(),
                texture_indices: Vec::new(),
                normal_indices: Vec::new(),
            };
            assert!(fan_triangulate(&stub).is_empty());
        }
    }

    #[test]
    fn test_fan_square() {
        let face = Face::from_vertices(vec![0, 1, 2, 3]).unwrap();
        let tris = fan_triangulate(&face);
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[0].vertex_indices, vec![0, 1, 2]);
        assert_eq!(tris[1].vertex_indices, vec![0, 2, 3]);
    }

    #[test]
    fn test_fan_ngon_shares_anchor() {
        let face = Face::from_vertices(vec![4, 5, 6, 7, 8, 9]).unwrap();
        let tris = fan_triangulate(&face);
        assert_eq!(tris.len(), 4);
        for tri in &tris {
            assert_eq!(tri.vertex_indices[0], 4);
            assert_eq!(tri.vertex_indices.len(), 3);
        }
        assert_eq!(tris[3].vertex_indices, vec![4, 8, 9]);
    }

    #[test]
    fn test_fan_carries_attributes() {
        let face = Face::new(
            vec![0, 1, 2, 3],
            vec![10, 11, 12, 13],
            vec![20, 21, 22, 23],
        )
        .unwrap();
        let tris = fan_triangulate(&face);
        assert_eq!(tris[1].texture_indices, vec![10, 12, 13]);
        assert_eq!(tris[1].normal_indices, vec![20, 22, 23]);
    }

    #[test]
    fn test_mesh_triangulate_idempotent() {
        let mut mesh = Mesh {
            faces: vec![Face::from_vertices(vec![0, 1, 2, 3, 4]).unwrap()],
            ..Mesh::default()
        };
        mesh.triangulate();
        assert_eq!(mesh.face_count(), 3);
        assert!(mesh.is_triangulated());
        let before = mesh.clone();
        mesh.triangulate();
        assert_eq!(mesh, before);
    }
}
