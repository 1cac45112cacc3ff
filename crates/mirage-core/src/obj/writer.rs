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

//! Wavefront OBJ serialization.

use super::ObjError;
use crate::mesh::Mesh;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Saves a mesh to an OBJ file, creating or truncating it.
///
/// # Errors
///
/// Returns [`ObjError::Io`] when the file cannot be created or written.
pub fn save_obj<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<(), ObjError> {
    let file = File::create(path)?;
    write_obj(mesh, &mut BufWriter::new(file))
}

/// Writes a mesh as OBJ statements: `v`, `vt`, `vn` and `f` lines with
/// 1-based indices. Corners are emitted in the densest form their
/// attributes allow (`v`, `v/t`, `v//n` or `v/t/n`).
///
/// # Errors
///
/// Returns [`ObjError::Io`] when the underlying writer fails.
pub fn write_obj<W: Write>(mesh: &Mesh, out: &mut W) -> Result<(), ObjError> {
    for v in &mesh.vertices {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for t in &mesh.tex_coords {
        writeln!(out, "vt {} {}", t.x, t.y)?;
    }
    for n in &mesh.normals {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for face in &mesh.faces {
        write!(out, "f")?;
        for (corner, &v) in face.vertex_indices.iter().enumerate() {
            let t = face.texture_indices.get(corner);
            let n = face.normal_indices.get(corner);
            match (t, n) {
                (Some(t), Some(n)) => write!(out, " {}/{}/{}", v + 1, t + 1, n + 1)?,
                (Some(t), None) => write!(out, " {}/{}", v + 1, t + 1)?,
                (None, Some(n)) => write!(out, " {}//{}", v + 1, n + 1)?,
                (None, None) => write!(out, " {}", v + 1)?,
            }
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec2, Vec3};
    use crate::mesh::Face;
    use crate::obj::read_obj;
    use std::io::Cursor;

    #[test]
    fn test_write_positions_only() {
        let mesh = Mesh {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            faces: vec![Face::from_vertices(vec![0, 1, 2]).unwrap()],
            ..Mesh::default()
        };
        let mut out = Vec::new();
        write_obj(&mesh, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("v 0 0 0"));
        assert!(text.contains("f 1 2 3"));
    }

    #[test]
    fn test_write_full_attributes() {
        let mesh = Mesh {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            tex_coords: vec![Vec2::ZERO, Vec2::X, Vec2::Y],
            normals: vec![Vec3::Z],
            faces: vec![Face::new(vec![0, 1, 2], vec![0, 1, 2], vec![0, 0, 0]).unwrap()],
            ..Mesh::default()
        };
        let mut out = Vec::new();
        write_obj(&mesh, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("f 1/1/1 2/2/1 3/3/1"));
    }

    #[test]
    fn test_round_trip() {
        let mesh = Mesh {
            vertices: vec![
                Vec3::new(0.5, -1.25, 3.0),
                Vec3::X,
                Vec3::Y,
                Vec3::new(1.0, 1.0, 0.0),
            ],
            normals: vec![Vec3::Z],
            faces: vec![Face::new(vec![0, 1, 2, 3], vec![], vec![0, 0, 0, 0]).unwrap()],
            ..Mesh::default()
        };
        let mut out = Vec::new();
        write_obj(&mesh, &mut out).unwrap();
        let reparsed = read_obj(Cursor::new(out)).unwrap();
        assert_eq!(reparsed, mesh);
    }
}
