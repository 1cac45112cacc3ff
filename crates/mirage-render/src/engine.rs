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

//! The render entry point: projects mesh faces and rasterizes them into a
//! target with depth-buffered occlusion.

use crate::error::RenderError;
use crate::lighting::Lighting;
use crate::modes::RenderModes;
use crate::pipeline::{self, ProjectedVertex};
use crate::raster;
use crate::target::RenderTarget;
use crate::texture::Texture;
use crate::zbuffer::DepthBuffer;
use mirage_core::camera::Camera;
use mirage_core::math::{Mat3, Mat4, Rgba, Vec2, Vec3};
use mirage_core::mesh::{Face, Mesh};

/// Depth bias subtracted from wireframe pixels so edges win the strict
/// depth test against the fill of their own polygon.
pub const WIREFRAME_DEPTH_BIAS: f32 = 1e-4;

/// Renders a mesh into the target.
///
/// Builds `MVP = projection * view * model`, clears a fresh depth buffer
/// sized to the target, and processes faces in mesh order. A face renders
/// only when every vertex projects inside the slack-extended view volume;
/// partially visible faces are skipped whole, with no sub-polygon clipping.
/// Faces whose indices fall outside the mesh attribute arrays are skipped
/// with a warning rather than failing the frame.
///
/// Texturing applies when enabled in `modes`, a texture is supplied, and
/// the face carries UV indices; lighting when enabled and parameters are
/// supplied. Wireframe edges draw in the unshaded base color.
///
/// # Errors
///
/// Returns [`RenderError::EmptyTarget`] for a zero-sized target and
/// propagates camera failures as [`RenderError::Camera`].
#[allow(clippy::too_many_arguments)]
pub fn render(
    camera: &Camera,
    mesh: &Mesh,
    model: &Mat4,
    modes: RenderModes,
    base_color: Rgba,
    texture: Option<&Texture>,
    lighting: Option<&Lighting>,
    target: &mut dyn RenderTarget,
) -> Result<(), RenderError> {
    let (width, height) = (target.width(), target.height());
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyTarget { width, height });
    }

    let view_projection = camera.view_projection_matrix()?;
    let mut zbuffer = DepthBuffer::new(width, height);

    let texture = if modes.use_texture { texture } else { None };
    let lighting = if modes.use_lighting { lighting } else { None };

    for (face_index, face) in mesh.faces.iter().enumerate() {
        let Some(corners) = project_face(
            mesh,
            face,
            face_index,
            model,
            &view_projection,
            width,
            height,
            texture.is_some(),
            lighting.is_some(),
        ) else {
            continue;
        };

        if modes.draw_filled {
            for i in 1..corners.len() - 1 {
                fill_triangle(
                    [&corners[0], &corners[i], &corners[i + 1]],
                    base_color,
                    texture,
                    lighting,
                    camera.position,
                    &mut zbuffer,
                    target,
                );
            }
        }

        if modes.draw_wireframe {
            for i in 0..corners.len() {
                let a = &corners[i];
                let b = &corners[(i + 1) % corners.len()];
                raster::draw_line(a.screen, b.screen, width, height, |x, y, t| {
                    let depth = a.depth + (b.depth - a.depth) * t - WIREFRAME_DEPTH_BIAS;
                    if zbuffer.test_and_set(x, y, depth) {
                        target.set_pixel(x, y, base_color);
                    }
                });
            }
        }
    }

    Ok(())
}

/// Projects every corner of a face, returning `None` when the face should
/// not be drawn: an out-of-range index (warned), a vertex behind the
/// camera plane, or any vertex outside the visibility margin.
#[allow(clippy::too_many_arguments)]
fn project_face(
    mesh: &Mesh,
    face: &Face,
    face_index: usize,
    model: &Mat4,
    view_projection: &Mat4,
    width: usize,
    height: usize,
    textured: bool,
    lit: bool,
) -> Option<Vec<ProjectedVertex>> {
    let textured = textured && face.has_texture();
    let lit_normals = lit && face.has_normals();

    if face.vertex_indices.len() < 3 {
        log::warn!("skipping face {face_index}: fewer than 3 corners");
        return None;
    }
    if !face_indices_in_range(mesh, face, face_index, textured, lit_normals) {
        return None;
    }

    let normal_transform = Mat3::from_mat4(model);
    let mut corners = Vec::with_capacity(face.vertex_indices.len());

    for (corner, &vi) in face.vertex_indices.iter().enumerate() {
        let position = mesh.vertices[vi];
        let world_pos = model.transform_direction(position) + model.cols[3].truncate();

        let projected = pipeline::project(view_projection, world_pos).ok()?;
        if !pipeline::is_visible(projected.ndc) {
            return None;
        }

        let uv = textured.then(|| mesh.tex_coords[face.texture_indices[corner]]);
        let normal = lit_normals.then(|| {
            (normal_transform * mesh.normals[face.normal_indices[corner]]).normalize_or_zero()
        });

        corners.push(ProjectedVertex {
            screen: pipeline::to_screen(projected.ndc, width, height),
            depth: projected.ndc.z,
            inv_w: projected.inv_w,
            uv,
            normal,
            world_pos: lit.then_some(world_pos),
        });
    }

    Some(corners)
}

/// Validates every index a face will dereference for this invocation.
fn face_indices_in_range(
    mesh: &Mesh,
    face: &Face,
    face_index: usize,
    textured: bool,
    lit_normals: bool,
) -> bool {
    if face.vertex_indices.iter().any(|&i| i >= mesh.vertices.len()) {
        log::warn!("skipping face {face_index}: vertex index out of range");
        return false;
    }
    if textured
        && face
            .texture_indices
            .iter()
            .any(|&i| i >= mesh.tex_coords.len())
    {
        log::warn!("skipping face {face_index}: texture index out of range");
        return false;
    }
    if lit_normals
        && face
            .normal_indices
            .iter()
            .any(|&i| i >= mesh.normals.len())
    {
        log::warn!("skipping face {face_index}: normal index out of range");
        return false;
    }
    true
}

/// Rasterizes one depth-tested, shaded triangle.
fn fill_triangle(
    corners: [&ProjectedVertex; 3],
    base_color: Rgba,
    texture: Option<&Texture>,
    lighting: Option<&Lighting>,
    camera_pos: Vec3,
    zbuffer: &mut DepthBuffer,
    target: &mut dyn RenderTarget,
) {
    let [a, b, c] = corners;
    raster::fill_triangle(
        a.screen,
        b.screen,
        c.screen,
        zbuffer.width(),
        zbuffer.height(),
        |x, y, lambda| {
            let depth = lambda[0] * a.depth + lambda[1] * b.depth + lambda[2] * c.depth;
            if !zbuffer.test_and_set(x, y, depth) {
                return;
            }

            let base = match (texture, interp_uv(&lambda, a, b, c)) {
                (Some(tex), Some(uv)) => tex.sample(uv.x, uv.y),
                _ => base_color,
            };
            let color = match lighting {
                Some(light) => {
                    let normal = interp_normal(&lambda, a, b, c);
                    let world = interp_world_pos(&lambda, a, b, c);
                    light.shade(base, light.intensity(normal, world, camera_pos))
                }
                None => base,
            };
            target.set_pixel(x, y, color);
        },
    );
}

fn interp_uv(
    lambda: &[f32; 3],
    a: &ProjectedVertex,
    b: &ProjectedVertex,
    c: &ProjectedVertex,
) -> Option<Vec2> {
    match (a.uv, b.uv, c.uv) {
        (Some(ua), Some(ub), Some(uc)) => {
            Some(ua * lambda[0] + ub * lambda[1] + uc * lambda[2])
        }
        _ => None,
    }
}

fn interp_normal(
    lambda: &[f32; 3],
    a: &ProjectedVertex,
    b: &ProjectedVertex,
    c: &ProjectedVertex,
) -> Vec3 {
    let na = a.normal.unwrap_or(Vec3::ZERO);
    let nb = b.normal.unwrap_or(Vec3::ZERO);
    let nc = c.normal.unwrap_or(Vec3::ZERO);
    na * lambda[0] + nb * lambda[1] + nc * lambda[2]
}

fn interp_world_pos(
    lambda: &[f32; 3],
    a: &ProjectedVertex,
    b: &ProjectedVertex,
    c: &ProjectedVertex,
) -> Vec3 {
    let pa = a.world_pos.unwrap_or(Vec3::ZERO);
    let pb = b.world_pos.unwrap_or(Vec3::ZERO);
    let pc = c.world_pos.unwrap_or(Vec3::ZERO);
    pa * lambda[0] + pb * lambda[1] + pc * lambda[2]
}
