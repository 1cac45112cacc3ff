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

//! Wavefront OBJ import and export for [`Mesh`](crate::mesh::Mesh) data.

pub mod reader;
pub mod writer;

pub use reader::{load_obj, read_obj};
pub use writer::{save_obj, write_obj};

use crate::mesh::MeshError;
use std::fmt;
use std::io;

/// Errors produced while reading or writing OBJ data.
#[derive(Debug)]
pub enum ObjError {
    /// The underlying reader or writer failed.
    Io(io::Error),
    /// A numeric component could not be parsed.
    MalformedNumber {
        /// 1-based line number in the source.
        line: usize,
    },
    /// A statement has fewer components than its keyword requires.
    TooFewComponents {
        /// 1-based line number in the source.
        line: usize,
        /// The OBJ keyword of the offending statement.
        keyword: &'static str,
    },
    /// A face index is zero, negative, or references an undeclared element.
    InvalidIndex {
        /// 1-based line number in the source.
        line: usize,
    },
    /// A face statement produced structurally invalid face data.
    InvalidFace {
        /// 1-based line number in the source.
        line: usize,
        /// The underlying mesh validation failure.
        source: MeshError,
    },
}

impl fmt::Display for ObjError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjError::Io(e) => write!(f, "obj i/o error: {e}"),
            ObjError::MalformedNumber { line } => {
                write!(f, "line {line}: malformed number")
            }
            ObjError::TooFewComponents { line, keyword } => {
                write!(f, "line {line}: too few components for '{keyword}'")
            }
            ObjError::InvalidIndex { line } => {
                write!(f, "line {line}: face index out of range")
            }
            ObjError::InvalidFace { line, source } => {
                write!(f, "line {line}: invalid face: {source}")
            }
        }
    }
}

impl std::error::Error for ObjError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ObjError::Io(e) => Some(e),
            ObjError::InvalidFace { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for ObjError {
    fn from(e: io::Error) -> Self {
        ObjError::Io(e)
    }
}
