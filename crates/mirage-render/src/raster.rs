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

//! Screen-space primitive coverage: barycentric triangle fill and DDA lines.
//!
//! This module only decides *which* pixels a primitive covers and with what
//! interpolation weights; depth testing and shading stay with the caller.

use mirage_core::math::Vec2;

/// Tolerance for the barycentric inside test.
///
/// Slightly negative so pixels on shared triangle edges are claimed by both
/// triangles instead of neither, avoiding seams between fan triangles.
pub const BARYCENTRIC_EPSILON: f32 = -1e-4;

/// Denominators below this mark the triangle as degenerate in screen space.
const DEGENERATE_DENOM: f32 = 1e-12;

/// Computes barycentric coordinates of `p` with respect to triangle `abc`.
///
/// Returns `None` when the triangle has (near) zero signed area in screen
/// space.
pub fn barycentric(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> Option<[f32; 3]> {
    let denom = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
    if denom.abs() < DEGENERATE_DENOM {
        return None;
    }
    let l0 = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / denom;
    let l1 = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / denom;
    let l2 = 1.0 - l0 - l1;
    Some([l0, l1, l2])
}

/// Whether barycentric coordinates describe a point inside the triangle,
/// within [`BARYCENTRIC_EPSILON`] tolerance.
#[inline]
pub fn is_inside(lambda: &[f32; 3]) -> bool {
    lambda.iter().all(|&l| l >= BARYCENTRIC_EPSILON)
}

/// Walks every viewport pixel covered by the triangle `abc`.
///
/// The bounding box is clamped to the `width` x `height` viewport, and
/// `plot` is called once per covered pixel with its barycentric weights.
/// Degenerate triangles produce no pixels.
pub fn fill_triangle<F>(a: Vec2, b: Vec2, c: Vec2, width: usize, height: usize, mut plot: F)
where
    F: FnMut(usize, usize, [f32; 3]),
{
    if width == 0 || height == 0 {
        return;
    }
    let min_x = a.x.min(b.x).min(c.x).floor().max(0.0) as usize;
    let max_x = (a.x.max(b.x).max(c.x).ceil() as isize).min(width as isize - 1);
    let min_y = a.y.min(b.y).min(c.y).floor().max(0.0) as usize;
    let max_y = (a.y.max(b.y).max(c.y).ceil() as isize).min(height as isize - 1);
    if max_x < min_x as isize || max_y < min_y as isize {
        return;
    }

    for y in min_y..=max_y as usize {
        for x in min_x..=max_x as usize {
            let p = Vec2::new(x as f32, y as f32);
            let Some(lambda) = barycentric(p, a, b, c) else {
                return;
            };
            if is_inside(&lambda) {
                plot(x, y, lambda);
            }
        }
    }
}

/// Walks the pixels of the line segment from `from` to `to` with a DDA.
///
/// `plot` receives each pixel with the parametric position `t` in `[0, 1]`
/// along the segment, for interpolating depth or attributes. Pixels outside
/// the viewport are skipped.
pub fn draw_line<F>(from: Vec2, to: Vec2, width: usize, height: usize, mut plot: F)
where
    F: FnMut(usize, usize, f32),
{
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let steps = dx.abs().max(dy.abs()).ceil() as i32;

    for i in 0..=steps.max(0) {
        let t = if steps > 0 { i as f32 / steps as f32 } else { 0.0 };
        let x = (from.x + dx * t).round();
        let y = (from.y + dy * t).round();
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let (xi, yi) = (x as usize, y as usize);
        if xi < width && yi < height {
            plot(xi, yi, t);
        }
    }
}
