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

//! # Mirage Core
//!
//! Foundation crate of the mirage software renderer: the math kernel
//! (vectors, matrices, colors), polygonal mesh data with triangulation,
//! normal generation and editing passes, a perspective camera, and
//! Wavefront OBJ import/export.
//!
//! This crate is renderer-agnostic; the rasterization pipeline lives in
//! `mirage-render`.

pub mod camera;
pub mod math;
pub mod mesh;
pub mod obj;

pub use camera::{Camera, CameraError};
pub use math::{Mat3, Mat4, MathError, Rgba, Vec2, Vec3, Vec4};
pub use mesh::{Face, Mesh, MeshError};
pub use obj::ObjError;
