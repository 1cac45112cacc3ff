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

//! # Mirage Render
//!
//! CPU rasterization pipeline for `mirage-core` meshes: perspective
//! projection with whole-face culling, depth-buffered barycentric fill and
//! DDA wireframe, headlight lighting, nearest-neighbor texturing, and
//! screen-space picking for editing workflows.
//!
//! The entry point is [`engine::render`], which draws a mesh through a
//! [`Camera`](mirage_core::camera::Camera) into any
//! [`RenderTarget`](target::RenderTarget).

pub mod engine;
pub mod error;
pub mod lighting;
pub mod modes;
pub mod picking;
pub mod pipeline;
pub mod raster;
pub mod target;
pub mod texture;
pub mod zbuffer;

pub use engine::render;
pub use error::{PipelineError, RenderError, TextureError};
pub use lighting::Lighting;
pub use modes::RenderModes;
pub use picking::{find_face_at_point, find_nearest_vertex, SelectionSet};
pub use target::{PixelBuffer, RenderTarget};
pub use texture::Texture;
pub use zbuffer::DepthBuffer;
