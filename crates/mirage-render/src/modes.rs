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

//! Render mode toggles.

/// Independent feature toggles for a render invocation.
///
/// Texturing and lighting only take effect when the corresponding resource
/// (texture, lighting parameters) is supplied and, for texturing, the face
/// carries UV indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderModes {
    /// Draw polygon edges with depth-tested lines.
    pub draw_wireframe: bool,
    /// Fill polygon interiors.
    pub draw_filled: bool,
    /// Sample the texture instead of the base color.
    pub use_texture: bool,
    /// Apply headlight shading.
    pub use_lighting: bool,
}

impl RenderModes {
    /// Filled rendering only.
    pub fn filled() -> Self {
        Self::default()
    }

    /// Wireframe rendering only.
    pub fn wireframe() -> Self {
        Self {
            draw_wireframe: true,
            draw_filled: false,
            use_texture: false,
            use_lighting: false,
        }
    }
}

impl Default for RenderModes {
    /// Filled, untextured, unlit.
    fn default() -> Self {
        Self {
            draw_wireframe: false,
            draw_filled: true,
            use_texture: false,
            use_lighting: false,
        }
    }
}
