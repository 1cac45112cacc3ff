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

//! Error types for the rasterization pipeline.

use mirage_core::camera::CameraError;
use std::fmt;

/// Errors raised while projecting geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError {
    /// The clip-space `w` of a vertex is too close to zero for a stable
    /// perspective divide.
    PerspectiveDivideByZero,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::PerspectiveDivideByZero => {
                write!(f, "clip-space w is too close to zero for perspective divide")
            }
        }
    }
}

impl std::error::Error for PipelineError {}

/// Errors raised while constructing a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureError {
    /// Width or height is zero.
    ZeroDimension,
    /// The pixel byte length does not match `width * height * 4`.
    SizeMismatch {
        /// Expected byte length.
        expected: usize,
        /// Actual byte length supplied.
        actual: usize,
    },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::ZeroDimension => write!(f, "texture dimensions must be nonzero"),
            TextureError::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "texture data length mismatch: expected {expected} bytes, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for TextureError {}

/// Top-level error for a render invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The camera could not produce a view matrix.
    Camera(CameraError),
    /// The render target has a zero dimension.
    EmptyTarget {
        /// Target width in pixels.
        width: usize,
        /// Target height in pixels.
        height: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Camera(e) => write!(f, "camera error: {e}"),
            RenderError::EmptyTarget { width, height } => {
                write!(f, "render target has empty dimensions {width}x{height}")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Camera(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CameraError> for RenderError {
    fn from(e: CameraError) -> Self {
        RenderError::Camera(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_from_camera() {
        let e: RenderError = CameraError::DegenerateOrientation.into();
        assert_eq!(e, RenderError::Camera(CameraError::DegenerateOrientation));
        assert!(e.to_string().contains("camera error"));
    }

    #[test]
    fn test_texture_error_display() {
        let e = TextureError::SizeMismatch {
            expected: 16,
            actual: 12,
        };
        assert!(e.to_string().contains("expected 16"));
        assert!(e.to_string().contains("got 12"));
    }
}
