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

//! Renders an OBJ file to a PPM image.
//!
//! Usage: `render_obj <input.obj> [output.ppm]`

use anyhow::{bail, Context, Result};
use mirage_core::camera::Camera;
use mirage_core::math::{Mat4, Rgba, Vec3};
use mirage_core::obj;
use mirage_render::{render, Lighting, PixelBuffer, RenderModes};
use std::fs::File;
use std::io::{BufWriter, Write};

const WIDTH: usize = 800;
const HEIGHT: usize = 600;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        bail!("usage: render_obj <input.obj> [output.ppm]");
    };
    let output = args.next().unwrap_or_else(|| "render.ppm".to_string());

    let mut mesh = obj::load_obj(&input).with_context(|| format!("loading {input}"))?;
    log::info!(
        "loaded {input}: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    // Center the model on the origin and rebuild normals for lighting.
    let center = mesh.center();
    mesh.translate(-center);
    mesh.triangulate();
    mesh.recalculate_normals();

    let camera = Camera::new(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::ZERO,
        Vec3::Y,
        60.0,
        WIDTH as f32 / HEIGHT as f32,
        0.1,
        100.0,
    );

    let mut buffer = PixelBuffer::new(WIDTH, HEIGHT);
    buffer.clear(Rgba::rgb(0.1, 0.1, 0.12));

    render(
        &camera,
        &mesh,
        &Mat4::IDENTITY,
        RenderModes {
            draw_wireframe: true,
            use_lighting: true,
            ..RenderModes::filled()
        },
        Rgba::rgb(0.8, 0.6, 0.3),
        None,
        Some(&Lighting::new(0.25, 0.75)),
        &mut buffer,
    )?;

    write_ppm(&buffer, &output).with_context(|| format!("writing {output}"))?;
    log::info!("wrote {output}");
    Ok(())
}

fn write_ppm(buffer: &PixelBuffer, path: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "P6")?;
    writeln!(out, "{WIDTH} {HEIGHT}")?;
    writeln!(out, "255")?;
    for rgba in buffer.as_bytes().chunks_exact(4) {
        out.write_all(&rgba[..3])?;
    }
    out.flush()?;
    Ok(())
}
