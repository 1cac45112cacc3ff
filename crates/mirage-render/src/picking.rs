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

//! Screen-space picking of vertices and faces, and the selection set the
//! editing modes operate on.

use crate::pipeline;
use mirage_core::math::{Mat4, Vec2};
use mirage_core::mesh::Mesh;
use std::collections::BTreeSet;

/// Maximum screen distance in pixels for a vertex pick to hit.
pub const PICK_RADIUS_PX: f32 = 15.0;

/// An ordered set of selected element indices (vertices or faces,
/// depending on the active editing mode).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    indices: BTreeSet<usize>,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of selected elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether an index is selected.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Replaces the selection with a single index.
    pub fn select(&mut self, index: usize) {
        self.indices.clear();
        self.indices.insert(index);
    }

    /// Adds an index to the selection if absent, removes it otherwise
    /// (shift-click behavior).
    pub fn toggle(&mut self, index: usize) {
        if !self.indices.remove(&index) {
            self.indices.insert(index);
        }
    }

    /// Selects every index below `count`.
    pub fn select_all(&mut self, count: usize) {
        self.indices = (0..count).collect();
    }

    /// Clears the selection, used on mode changes and after deletions.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Iterates the selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// The selection as an ordered index set, ready for mesh deletion ops.
    pub fn as_set(&self) -> &BTreeSet<usize> {
        &self.indices
    }
}

/// Finds the mesh vertex nearest to a screen point.
///
/// Every vertex goes through the same projection and visibility rule as
/// rendering; among visible vertices within [`PICK_RADIUS_PX`] the one with
/// the smallest Euclidean screen distance wins. Returns `None` when no
/// vertex qualifies.
pub fn find_nearest_vertex(
    mesh: &Mesh,
    point: Vec2,
    view_projection: &Mat4,
    width: usize,
    height: usize,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, &vertex) in mesh.vertices.iter().enumerate() {
        let Ok(projected) = pipeline::project(view_projection, vertex) else {
            continue;
        };
        if !pipeline::is_visible(projected.ndc) {
            continue;
        }
        let screen = pipeline::to_screen(projected.ndc, width, height);
        let distance = screen.distance(point);
        if distance > PICK_RADIUS_PX {
            continue;
        }
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

/// Finds the face under a screen point.
///
/// Candidate faces must have every vertex visible (same whole-face rule as
/// rendering) and contain the point under an even-odd ray cast in screen
/// space. Among hits the face with the smallest average NDC depth wins,
/// resolving overlaps in favor of the nearest face. Returns `None` when no
/// face contains the point.
pub fn find_face_at_point(
    mesh: &Mesh,
    point: Vec2,
    view_projection: &Mat4,
    width: usize,
    height: usize,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    'faces: for (index, face) in mesh.faces.iter().enumerate() {
        let mut screen = Vec::with_capacity(face.vertex_indices.len());
        let mut depth_sum = 0.0f32;
        for &vi in &face.vertex_indices {
            let Some(&vertex) = mesh.vertices.get(vi) else {
                continue 'faces;
            };
            let Ok(projected) = pipeline::project(view_projection, vertex) else {
                continue 'faces;
            };
            if !pipeline::is_visible(projected.ndc) {
                continue 'faces;
            }
            screen.push(pipeline::to_screen(projected.ndc, width, height));
            depth_sum += projected.ndc.z;
        }

        if !point_in_polygon(point, &screen) {
            continue;
        }
        let depth = depth_sum / screen.len() as f32;
        if best.map_or(true, |(_, d)| depth < d) {
            best = Some((index, depth));
        }
    }

    best.map(|(index, _)| index)
}

/// Even-odd point-in-polygon test: casts a ray toward +x and counts edge
/// crossings.
fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = pi.x + (point.y - pi.y) / (pj.y - pi.y) * (pj.x - pi.x);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirage_core::camera::Camera;
    use mirage_core::math::Vec3;
    use mirage_core::mesh::Face;

    const W: usize = 200;
    const H: usize = 200;

    fn view_projection() -> Mat4 {
        Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            60.0,
            1.0,
            0.1,
            100.0,
        )
        .view_projection_matrix()
        .unwrap()
    }

    fn screen_of(vertex: Vec3, vp: &Mat4) -> Vec2 {
        let projected = pipeline::project(vp, vertex).unwrap();
        pipeline::to_screen(projected.ndc, W, H)
    }

    // --- SelectionSet ---

    #[test]
    fn test_selection_toggle_and_select() {
        let mut sel = SelectionSet::new();
        assert!(sel.is_empty());

        sel.toggle(3);
        sel.toggle(1);
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec![1, 3]);

        sel.toggle(3);
        assert!(!sel.contains(3));

        sel.select(7);
        assert_eq!(sel.len(), 1);
        assert!(sel.contains(7));
    }

    #[test]
    fn test_selection_select_all_and_clear() {
        let mut sel = SelectionSet::new();
        sel.select_all(4);
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        sel.clear();
        assert!(sel.is_empty());
    }

    // --- Vertex picking ---

    #[test]
    fn test_pick_vertex_at_projection() {
        let mesh = Mesh {
            vertices: vec![Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0)],
            ..Mesh::default()
        };
        let vp = view_projection();
        let at = screen_of(mesh.vertices[1], &vp);
        assert_eq!(find_nearest_vertex(&mesh, at, &vp, W, H), Some(1));
    }

    #[test]
    fn test_pick_vertex_nearest_wins() {
        let mesh = Mesh {
            vertices: vec![Vec3::ZERO, Vec3::new(0.05, 0.0, 0.0)],
            ..Mesh::default()
        };
        let vp = view_projection();
        // Just beside vertex 0, still within the radius of both.
        let near_zero = screen_of(Vec3::ZERO, &vp) + Vec2::new(-1.0, 0.0);
        assert_eq!(find_nearest_vertex(&mesh, near_zero, &vp, W, H), Some(0));
    }

    #[test]
    fn test_pick_vertex_outside_radius_misses() {
        let mesh = Mesh {
            vertices: vec![Vec3::ZERO],
            ..Mesh::default()
        };
        let vp = view_projection();
        let far = screen_of(Vec3::ZERO, &vp) + Vec2::new(PICK_RADIUS_PX + 1.0, 0.0);
        assert_eq!(find_nearest_vertex(&mesh, far, &vp, W, H), None);
    }

    #[test]
    fn test_pick_vertex_behind_camera_ignored() {
        let mesh = Mesh {
            vertices: vec![Vec3::new(0.0, 0.0, 50.0)],
            ..Mesh::default()
        };
        let vp = view_projection();
        assert_eq!(
            find_nearest_vertex(&mesh, Vec2::new(100.0, 100.0), &vp, W, H),
            None
        );
    }

    // --- Face picking ---

    fn two_overlapping_faces() -> Mesh {
        // Both triangles cover the view center; the second sits closer to
        // the camera at z = 1.
        Mesh {
            vertices: vec![
                Vec3::new(-2.0, -2.0, 0.0),
                Vec3::new(2.0, -2.0, 0.0),
                Vec3::new(0.0, 2.0, 0.0),
                Vec3::new(-2.0, -2.0, 1.0),
                Vec3::new(2.0, -2.0, 1.0),
                Vec3::new(0.0, 2.0, 1.0),
            ],
            faces: vec![
                Face::from_vertices(vec![0, 1, 2]).unwrap(),
                Face::from_vertices(vec![3, 4, 5]).unwrap(),
            ],
            ..Mesh::default()
        }
    }

    #[test]
    fn test_pick_face_at_center() {
        let mesh = Mesh {
            vertices: vec![
                Vec3::new(-2.0, -2.0, 0.0),
                Vec3::new(2.0, -2.0, 0.0),
                Vec3::new(0.0, 2.0, 0.0),
            ],
            faces: vec![Face::from_vertices(vec![0, 1, 2]).unwrap()],
            ..Mesh::default()
        };
        let vp = view_projection();
        let center = Vec2::new(W as f32 / 2.0, H as f32 / 2.0);
        assert_eq!(find_face_at_point(&mesh, center, &vp, W, H), Some(0));
    }

    #[test]
    fn test_pick_face_nearest_depth_wins() {
        let mesh = two_overlapping_faces();
        let vp = view_projection();
        let center = Vec2::new(W as f32 / 2.0, H as f32 / 2.0);
        assert_eq!(find_face_at_point(&mesh, center, &vp, W, H), Some(1));
    }

    #[test]
    fn test_pick_face_miss() {
        let mesh = two_overlapping_faces();
        let vp = view_projection();
        assert_eq!(
            find_face_at_point(&mesh, Vec2::new(1.0, 1.0), &vp, W, H),
            None
        );
    }

    #[test]
    fn test_point_in_polygon_square() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(Vec2::new(5.0, 5.0), &square));
        assert!(!point_in_polygon(Vec2::new(15.0, 5.0), &square));
        assert!(!point_in_polygon(Vec2::new(-1.0, 5.0), &square));
    }

    #[test]
    fn test_point_in_polygon_concave() {
        // A concave "notch" polygon; the notch interior is outside.
        let notched = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(5.0, 3.0),
            Vec2::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(Vec2::new(1.0, 2.0), &notched));
        assert!(!point_in_polygon(Vec2::new(5.0, 8.0), &notched));
    }
}
