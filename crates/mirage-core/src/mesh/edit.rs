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

//! Destructive mesh edits: vertex and face deletion with index remapping.

use super::Mesh;
use std::collections::BTreeSet;

impl Mesh {
    /// Deletes the given vertices and every face that references one.
    ///
    /// Surviving faces have their vertex indices remapped to the compacted
    /// vertex array. Indices in `doomed` that are out of range are ignored,
    /// and an empty set is a no-op. Texture and normal arrays are untouched;
    /// callers that maintain per-vertex normals should recalculate them
    /// afterwards.
    pub fn delete_vertices(&mut self, doomed: &BTreeSet<usize>) {
        if doomed.is_empty() {
            return;
        }

        // old index -> new index, None for deleted vertices.
        let mut remap = vec![None; self.vertices.len()];
        let mut next = 0usize;
        for (old, slot) in remap.iter_mut().enumerate() {
            if !doomed.contains(&old) {
                *slot = Some(next);
                next += 1;
            }
        }

        let mut kept = Vec::with_capacity(next);
        for (old, v) in self.vertices.iter().enumerate() {
            if remap[old].is_some() {
                kept.push(*v);
            }
        }
        self.vertices = kept;

        self.faces.retain_mut(|face| {
            let survives = face
                .vertex_indices
                .iter()
                .all(|&i| remap.get(i).copied().flatten().is_some());
            if survives {
                for i in &mut face.vertex_indices {
                    // Checked non-None for every corner above.
                    *i = remap[*i].unwrap_or(*i);
                }
            }
            survives
        });
    }

    /// Deletes faces by index. Out-of-range indices are ignored.
    pub fn delete_faces(&mut self, doomed: &BTreeSet<usize>) {
        if doomed.is_empty() {
            return;
        }
        let mut index = 0usize;
        self.faces.retain(|_| {
            let keep = !doomed.contains(&index);
            index += 1;
            keep
        });
    }

    /// Removes vertices not referenced by any face, remapping the survivors.
    ///
    /// Returns the number of vertices removed.
    pub fn remove_unused_vertices(&mut self) -> usize {
        let mut used = vec![false; self.vertices.len()];
        for face in &self.faces {
            for &i in &face.vertex_indices {
                if let Some(flag) = used.get_mut(i) {
                    *flag = true;
                }
            }
        }
        let unused: BTreeSet<usize> = used
            .iter()
            .enumerate()
            .filter_map(|(i, &u)| (!u).then_some(i))
            .collect();
        let removed = unused.len();
        self.delete_vertices(&unused);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;
    use crate::mesh::Face;

    fn single_triangle() -> Mesh {
        Mesh {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            faces: vec![Face::from_vertices(vec![0, 1, 2]).unwrap()],
            ..Mesh::default()
        }
    }

    #[test]
    fn test_delete_vertex_drops_referencing_face() {
        let mut mesh = single_triangle();
        mesh.delete_vertices(&BTreeSet::from([1]));
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.vertices, vec![Vec3::ZERO, Vec3::Y]);
    }

    #[test]
    fn test_delete_vertices_remaps_survivors() {
        let mut mesh = Mesh {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z, Vec3::ONE],
            faces: vec![
                Face::from_vertices(vec![0, 1, 2]).unwrap(),
                Face::from_vertices(vec![2, 3, 4]).unwrap(),
            ],
            ..Mesh::default()
        };
        // Deleting vertex 1 kills the first face and shifts the rest down.
        mesh.delete_vertices(&BTreeSet::from([1]));
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.faces[0].vertex_indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_delete_vertices_empty_set_noop() {
        let mut mesh = single_triangle();
        let before = mesh.clone();
        mesh.delete_vertices(&BTreeSet::new());
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_delete_vertices_ignores_out_of_range() {
        let mut mesh = single_triangle();
        mesh.delete_vertices(&BTreeSet::from([99]));
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.faces[0].vertex_indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_delete_faces() {
        let mut mesh = Mesh {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z],
            faces: vec![
                Face::from_vertices(vec![0, 1, 2]).unwrap(),
                Face::from_vertices(vec![0, 2, 3]).unwrap(),
                Face::from_vertices(vec![0, 3, 1]).unwrap(),
            ],
            ..Mesh::default()
        };
        mesh.delete_faces(&BTreeSet::from([0, 2, 10]));
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.faces[0].vertex_indices, vec![0, 2, 3]);
    }

    #[test]
    fn test_remove_unused_vertices() {
        let mut mesh = Mesh {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(9.0, 9.0, 9.0)],
            faces: vec![Face::from_vertices(vec![0, 1, 2]).unwrap()],
            ..Mesh::default()
        };
        let removed = mesh.remove_unused_vertices();
        assert_eq!(removed, 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.faces[0].vertex_indices, vec![0, 1, 2]);
    }
}
