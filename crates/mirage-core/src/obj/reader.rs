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

//! Line-oriented Wavefront OBJ parser.

use super::ObjError;
use crate::math::{Vec2, Vec3};
use crate::mesh::{Face, Mesh};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads an OBJ file from disk.
///
/// # Errors
///
/// Returns [`ObjError::Io`] when the file cannot be opened or read, and the
/// parse errors of [`read_obj`] otherwise.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, ObjError> {
    let file = File::open(path)?;
    read_obj(BufReader::new(file))
}

/// Parses OBJ data from a buffered reader.
///
/// Recognizes `v`, `vt`, `vn` and `f` statements; comments, blank lines and
/// unsupported keywords (`o`, `g`, `s`, `mtllib`, `usemtl`, ...) are skipped.
/// Face indices are 1-based and must reference elements already declared.
///
/// # Errors
///
/// Returns a parse error carrying the 1-based line number of the offending
/// statement, or [`ObjError::Io`] when reading fails.
pub fn read_obj<R: BufRead>(reader: R) -> Result<Mesh, ObjError> {
    let mut mesh = Mesh::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let statement = line.split('#').next().unwrap_or("").trim();
        if statement.is_empty() {
            continue;
        }

        let mut parts = statement.split_whitespace();
        // Non-empty statement always has a keyword.
        let keyword = parts.next().unwrap_or("");
        let rest: Vec<&str> = parts.collect();

        match keyword {
            "v" => mesh.vertices.push(parse_vec3(&rest, line_no, "v")?),
            "vn" => mesh.normals.push(parse_vec3(&rest, line_no, "vn")?),
            "vt" => mesh.tex_coords.push(parse_vec2(&rest, line_no, "vt")?),
            "f" => {
                let face = parse_face(&rest, line_no, &mesh)?;
                mesh.faces.push(face);
            }
            _ => log::debug!("line {line_no}: skipping unsupported keyword '{keyword}'"),
        }
    }

    log::info!(
        "parsed obj: {} vertices, {} tex coords, {} normals, {} faces",
        mesh.vertices.len(),
        mesh.tex_coords.len(),
        mesh.normals.len(),
        mesh.faces.len()
    );
    Ok(mesh)
}

fn parse_f32(token: &str, line: usize) -> Result<f32, ObjError> {
    token
        .parse::<f32>()
        .map_err(|_| ObjError::MalformedNumber { line })
}

fn parse_vec3(rest: &[&str], line: usize, keyword: &'static str) -> Result<Vec3, ObjError> {
    if rest.len() < 3 {
        return Err(ObjError::TooFewComponents { line, keyword });
    }
    Ok(Vec3::new(
        parse_f32(rest[0], line)?,
        parse_f32(rest[1], line)?,
        parse_f32(rest[2], line)?,
    ))
}

fn parse_vec2(rest: &[&str], line: usize, keyword: &'static str) -> Result<Vec2, ObjError> {
    if rest.len() < 2 {
        return Err(ObjError::TooFewComponents { line, keyword });
    }
    Ok(Vec2::new(
        parse_f32(rest[0], line)?,
        parse_f32(rest[1], line)?,
    ))
}

/// Converts a 1-based OBJ index into a 0-based array index, checking it
/// against the number of elements declared so far.
fn parse_index(token: &str, declared: usize, line: usize) -> Result<usize, ObjError> {
    let raw: isize = token
        .parse()
        .map_err(|_| ObjError::MalformedNumber { line })?;
    if raw < 1 || raw as usize > declared {
        return Err(ObjError::InvalidIndex { line });
    }
    Ok(raw as usize - 1)
}

fn parse_face(rest: &[&str], line: usize, mesh: &Mesh) -> Result<Face, ObjError> {
    let mut vertex_indices = Vec::with_capacity(rest.len());
    let mut texture_indices = Vec::new();
    let mut normal_indices = Vec::new();

    for corner in rest {
        let mut slots = corner.split('/');
        let v = slots
            .next()
            .ok_or(ObjError::InvalidIndex { line })?;
        vertex_indices.push(parse_index(v, mesh.vertices.len(), line)?);

        if let Some(t) = slots.next() {
            if !t.is_empty() {
                texture_indices.push(parse_index(t, mesh.tex_coords.len(), line)?);
            }
        }
        if let Some(n) = slots.next() {
            if !n.is_empty() {
                normal_indices.push(parse_index(n, mesh.normals.len(), line)?);
            }
        }
    }

    Face::new(vertex_indices, texture_indices, normal_indices)
        .map_err(|source| ObjError::InvalidFace { line, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;
    use std::io::Cursor;

    fn parse(src: &str) -> Result<Mesh, ObjError> {
        read_obj(Cursor::new(src))
    }

    #[test]
    fn test_read_square() {
        let mesh = parse(
            "# a unit square\n\
             v 0 0 0\n\
             v 1 0 0\n\
             v 1 1 0\n\
             v 0 1 0\n\
             f 1 2 3 4\n",
        )
        .unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.faces[0].vertex_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_read_full_attributes() {
        let mesh = parse(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vt 0 0\nvt 1 0\nvt 0 1\n\
             vn 0 0 1\n\
             f 1/1/1 2/2/1 3/3/1\n",
        )
        .unwrap();
        let face = &mesh.faces[0];
        assert_eq!(face.texture_indices, vec![0, 1, 2]);
        assert_eq!(face.normal_indices, vec![0, 0, 0]);
        assert!(approx_eq(mesh.tex_coords[1].x, 1.0));
    }

    #[test]
    fn test_read_vertex_normal_no_texture() {
        let mesh = parse(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vn 0 0 1\n\
             f 1//1 2//1 3//1\n",
        )
        .unwrap();
        let face = &mesh.faces[0];
        assert!(!face.has_texture());
        assert_eq!(face.normal_indices, vec![0, 0, 0]);
    }

    #[test]
    fn test_comments_and_unknown_keywords_skipped() {
        let mesh = parse(
            "mtllib scene.mtl\n\
             o cube # trailing comment\n\
             v 0 0 0 # inline comment\n\
             s off\n",
        )
        .unwrap();
        assert_eq!(mesh.vertex_count(), 1);
    }

    #[test]
    fn test_malformed_number_reports_line() {
        let err = parse("v 0 0 0\nv 1 abc 0\n").unwrap_err();
        assert!(matches!(err, ObjError::MalformedNumber { line: 2 }));
    }

    #[test]
    fn test_too_few_components() {
        let err = parse("v 1 2\n").unwrap_err();
        assert!(matches!(
            err,
            ObjError::TooFewComponents { line: 1, keyword: "v" }
        ));
    }

    #[test]
    fn test_face_index_out_of_range() {
        let err = parse("v 0 0 0\nv 1 0 0\nf 1 2 3\n").unwrap_err();
        assert!(matches!(err, ObjError::InvalidIndex { line: 3 }));
    }

    #[test]
    fn test_face_index_zero_rejected() {
        let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n").unwrap_err();
        assert!(matches!(err, ObjError::InvalidIndex { line: 4 }));
    }

    #[test]
    fn test_face_too_few_corners() {
        let err = parse("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
        assert!(matches!(err, ObjError::InvalidFace { line: 3, .. }));
    }
}
