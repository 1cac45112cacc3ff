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

//! Provides the foundational linear-algebra primitives of the renderer.
//!
//! This module contains the vector, matrix, and color types every other part
//! of the workspace is built on, together with the numeric tolerances used
//! for equality, singularity, and perspective-divide checks.
//!
//! All angular functions in this module operate in **radians** unless
//! explicitly specified otherwise (e.g. `degrees_to_radians`).

use std::fmt;

// --- Fundamental Constants ---

/// Tolerance for floating-point equality and degenerate-vector checks.
pub const EPSILON: f32 = 1e-6;

/// Determinant magnitude below which a matrix is treated as singular.
pub const DET_EPSILON: f32 = 1e-12;

/// Clip-space `w` magnitude below which a perspective divide is rejected.
pub const W_EPSILON: f32 = 1e-12;

// Re-export standard mathematical constants for convenience.
pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

// --- Declare Sub-Modules ---

pub mod color;
pub mod matrix;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::color::Rgba;
pub use self::matrix::{Mat3, Mat4};
pub use self::vector::{Vec2, Vec3, Vec4};

// --- Errors ---

/// A numeric failure in a math-kernel operation.
///
/// These are fatal to the single operation that raised them, never to the
/// process: callers either propagate them or substitute a documented
/// fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// `normalize` was called on a vector whose length is below [`EPSILON`].
    DegenerateVector,
    /// `inverse` or `solve` was called on a matrix whose determinant
    /// magnitude is below [`DET_EPSILON`].
    SingularMatrix,
    /// A perspective divide was attempted with `|w|` below [`W_EPSILON`].
    PerspectiveDivideByZero,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DegenerateVector => {
                write!(f, "Cannot normalize a near-zero vector.")
            }
            MathError::SingularMatrix => {
                write!(f, "Matrix is singular; inverse/solve is undefined.")
            }
            MathError::PerspectiveDivideByZero => {
                write!(f, "Perspective divide with near-zero clip-space w.")
            }
        }
    }
}

impl std::error::Error for MathError {}

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Clamps a value to a specified minimum and maximum range.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min_val: T, max_val: T) -> T {
    if value < min_val {
        min_val
    } else if value > max_val {
        max_val
    } else {
        value
    }
}

/// Clamps a floating-point value to the `[0.0, 1.0]` range.
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Approximate equality comparison with a custom tolerance.
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Approximate equality comparison using the module's default [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
