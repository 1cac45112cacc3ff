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

//! Polygonal mesh data: faces, the mesh container, and the editing,
//! triangulation and normal-generation passes that operate on it.

pub mod edit;
pub mod face;
pub mod model;
pub mod normals;
pub mod triangulate;

pub use face::Face;
pub use model::Mesh;

use std::fmt;

/// Errors produced while constructing or validating mesh data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// A face was declared with fewer than three corners.
    TooFewCorners {
        /// Number of corners the face declared.
        count: usize,
    },
    /// An optional per-corner attribute list does not match the corner count.
    AttributeCountMismatch {
        /// Number of corners in the face.
        corners: usize,
        /// Number of attribute indices supplied.
        attributes: usize,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::TooFewCorners { count } => {
                write!(f, "face needs at least 3 corners, got {count}")
            }
            MeshError::AttributeCountMismatch {
                corners,
                attributes,
            } => {
                write!(
                    f,
                    "face has {corners} corners but {attributes} attribute indices"
                )
            }
        }
    }
}

impl std::error::Error for MeshError {}
