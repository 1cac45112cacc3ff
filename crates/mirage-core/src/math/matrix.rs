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

//! Defines the `Mat3` and `Mat4` types and associated operations.

use super::{MathError, Vec3, Vec4, DET_EPSILON, W_EPSILON};
use std::ops::{Index, IndexMut, Mul};

// --- Mat3 ---

/// A 3x3 column-major matrix.
///
/// Its primary role is as the rotation/scale part of a [`Mat4`], but it is a
/// full general matrix with determinant, inverse, and linear-system solving.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec3; 3],
}

impl Mat3 {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec3::X, Vec3::Y, Vec3::Z],
    };

    /// A 3x3 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        cols: [Vec3::ZERO; 3],
    };

    /// Creates a new matrix from three column vectors.
    #[inline]
    pub fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Returns a row of the matrix as a `Vec3`.
    #[inline]
    pub fn get_row(&self, index: usize) -> Vec3 {
        Vec3 {
            x: self.cols[0].get(index),
            y: self.cols[1].get(index),
            z: self.cols[2].get(index),
        }
    }

    /// Creates a 3D scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self {
            cols: [
                Vec3::new(scale.x, 0.0, 0.0),
                Vec3::new(0.0, scale.y, 0.0),
                Vec3::new(0.0, 0.0, scale.z),
            ],
        }
    }

    /// Creates a `Mat3` from the upper-left 3x3 corner of a [`Mat4`],
    /// discarding translation.
    #[inline]
    pub fn from_mat4(m4: &Mat4) -> Self {
        Self::from_cols(
            m4.cols[0].truncate(),
            m4.cols[1].truncate(),
            m4.cols[2].truncate(),
        )
    }

    /// Computes the determinant of the matrix.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let c0 = self.cols[0];
        let c1 = self.cols[1];
        let c2 = self.cols[2];
        c0.x * (c1.y * c2.z - c2.y * c1.z) - c1.x * (c0.y * c2.z - c2.y * c0.z)
            + c2.x * (c0.y * c1.z - c1.y * c0.z)
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vec3::new(self.cols[0].x, self.cols[1].x, self.cols[2].x),
            Vec3::new(self.cols[0].y, self.cols[1].y, self.cols[2].y),
            Vec3::new(self.cols[0].z, self.cols[1].z, self.cols[2].z),
        )
    }

    /// Computes the inverse of the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the determinant magnitude is
    /// below [`DET_EPSILON`].
    pub fn inverse(&self) -> Result<Self, MathError> {
        let c0 = self.cols[0];
        let c1 = self.cols[1];
        let c2 = self.cols[2];
        let m00 = c1.y * c2.z - c2.y * c1.z;
        let m10 = c2.y * c0.z - c0.y * c2.z;
        let m20 = c0.y * c1.z - c1.y * c0.z;
        let det = c0.x * m00 + c1.x * m10 + c2.x * m20;

        if det.abs() < DET_EPSILON {
            return Err(MathError::SingularMatrix);
        }

        let inv_det = 1.0 / det;
        let m01 = c2.x * c1.z - c1.x * c2.z;
        let m11 = c0.x * c2.z - c2.x * c0.z;
        let m21 = c1.x * c0.z - c0.x * c1.z;
        let m02 = c1.x * c2.y - c2.x * c1.y;
        let m12 = c2.x * c0.y - c0.x * c2.y;
        let m22 = c0.x * c1.y - c1.x * c0.y;

        Ok(Self::from_cols(
            Vec3::new(m00, m10, m20) * inv_det,
            Vec3::new(m01, m11, m21) * inv_det,
            Vec3::new(m02, m12, m22) * inv_det,
        ))
    }

    /// Solves the linear system `self · x = rhs` by Gaussian elimination
    /// with partial pivoting.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] when a pivot magnitude falls
    /// below [`DET_EPSILON`].
    pub fn solve(&self, rhs: Vec3) -> Result<Vec3, MathError> {
        let mut aug = [[0.0f32; 4]; 3];
        for (r, row) in aug.iter_mut().enumerate() {
            for c in 0..3 {
                row[c] = self.cols[c].get(r);
            }
            row[3] = rhs.get(r);
        }
        let x = gauss_solve(&mut aug)?;
        Ok(Vec3::new(x[0], x[1], x[2]))
    }
}

// --- Operator Overloads ---

impl Default for Mat3 {
    /// Returns the 3x3 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat3`.
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    /// Transforms a `Vec3` by this matrix.
    #[inline]
    fn mul(self, v: Vec3) -> Self::Output {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z
    }
}

impl Index<usize> for Mat3 {
    type Output = Vec3;
    /// Allows accessing a matrix column by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

impl IndexMut<usize> for Mat3 {
    /// Allows mutably accessing a matrix column by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cols[index]
    }
}

// --- Mat4 ---

/// A 4x4 column-major matrix, used for 3D affine and projective transforms.
///
/// This is the primary type for representing transformations (translation,
/// rotation, scale) as well as the camera view and projection matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        cols: [Vec4::ZERO; 4],
    };

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Returns a row of the matrix as a `Vec4`.
    #[inline]
    pub fn get_row(&self, index: usize) -> Vec4 {
        Vec4 {
            x: self.cols[0].get(index),
            y: self.cols[1].get(index),
            z: self.cols[2].get(index),
            w: self.cols[3].get(index),
        }
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self {
            cols: [
                Vec4::new(1.0, 0.0, 0.0, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0, 0.0),
                Vec4::new(v.x, v.y, v.z, 1.0),
            ],
        }
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self {
            cols: [
                Vec4::new(scale.x, 0.0, 0.0, 0.0),
                Vec4::new(0.0, scale.y, 0.0, 0.0),
                Vec4::new(0.0, 0.0, scale.z, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a matrix for a rotation around the X-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                Vec4::new(1.0, 0.0, 0.0, 0.0),
                Vec4::new(0.0, c, s, 0.0),
                Vec4::new(0.0, -s, c, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a matrix for a right-handed rotation around the Y-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                Vec4::new(c, 0.0, -s, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
                Vec4::new(s, 0.0, c, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a matrix for a rotation around the Z-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                Vec4::new(c, s, 0.0, 0.0),
                Vec4::new(-s, c, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a right-handed perspective projection matrix mapping depth to
    /// the `[0, 1]` range.
    ///
    /// # Arguments
    ///
    /// * `fov_y_radians`: Vertical field of view in radians.
    /// * `aspect_ratio`: Width divided by height of the viewport.
    /// * `z_near`: Distance to the near clipping plane (must be positive).
    /// * `z_far`: Distance to the far clipping plane (must be > `z_near`).
    #[inline]
    pub fn perspective(fov_y_radians: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        assert!(z_near > 0.0 && z_far > z_near);
        let f = 1.0 / (fov_y_radians / 2.0).tan();
        let aa = f / aspect_ratio;
        let cc = z_far / (z_near - z_far);
        let dd = (z_near * z_far) / (z_near - z_far);

        Self::from_cols(
            Vec4::new(aa, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, cc, -1.0),
            Vec4::new(0.0, 0.0, dd, 0.0),
        )
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.get_row(0), self.get_row(1), self.get_row(2), self.get_row(3))
    }

    /// Computes the determinant of the matrix.
    pub fn determinant(&self) -> f32 {
        let c0 = self.cols[0];
        let c1 = self.cols[1];
        let c2 = self.cols[2];
        let c3 = self.cols[3];

        let m00 = c1.y * (c2.z * c3.w - c3.z * c2.w) - c2.y * (c1.z * c3.w - c3.z * c1.w)
            + c3.y * (c1.z * c2.w - c2.z * c1.w);
        let m01 = c0.y * (c2.z * c3.w - c3.z * c2.w) - c2.y * (c0.z * c3.w - c3.z * c0.w)
            + c3.y * (c0.z * c2.w - c2.z * c0.w);
        let m02 = c0.y * (c1.z * c3.w - c3.z * c1.w) - c1.y * (c0.z * c3.w - c3.z * c0.w)
            + c3.y * (c0.z * c1.w - c1.z * c0.w);
        let m03 = c0.y * (c1.z * c2.w - c2.z * c1.w) - c1.y * (c0.z * c2.w - c2.z * c0.w)
            + c2.y * (c0.z * c1.w - c1.z * c0.w);

        c0.x * m00 - c1.x * m01 + c2.x * m02 - c3.x * m03
    }

    /// Computes the inverse of the matrix via cofactor expansion.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the determinant magnitude is
    /// below [`DET_EPSILON`].
    pub fn inverse(&self) -> Result<Self, MathError> {
        let c0 = self.cols[0];
        let c1 = self.cols[1];
        let c2 = self.cols[2];
        let c3 = self.cols[3];

        let a00 = c1.y * (c2.z * c3.w - c3.z * c2.w) - c2.y * (c1.z * c3.w - c3.z * c1.w)
            + c3.y * (c1.z * c2.w - c2.z * c1.w);
        let a01 = -(c1.x * (c2.z * c3.w - c3.z * c2.w) - c2.x * (c1.z * c3.w - c3.z * c1.w)
            + c3.x * (c1.z * c2.w - c2.z * c1.w));
        let a02 = c1.x * (c2.y * c3.w - c3.y * c2.w) - c2.x * (c1.y * c3.w - c3.y * c1.w)
            + c3.x * (c1.y * c2.w - c2.y * c1.w);
        let a03 = -(c1.x * (c2.y * c3.z - c3.y * c2.z) - c2.x * (c1.y * c3.z - c3.y * c1.z)
            + c3.x * (c1.y * c2.z - c2.y * c1.z));

        let a10 = -(c0.y * (c2.z * c3.w - c3.z * c2.w) - c2.y * (c0.z * c3.w - c3.z * c0.w)
            + c3.y * (c0.z * c2.w - c2.z * c0.w));
        let a11 = c0.x * (c2.z * c3.w - c3.z * c2.w) - c2.x * (c0.z * c3.w - c3.z * c0.w)
            + c3.x * (c0.z * c2.w - c2.z * c0.w);
        let a12 = -(c0.x * (c2.y * c3.w - c3.y * c2.w) - c2.x * (c0.y * c3.w - c3.y * c0.w)
            + c3.x * (c0.y * c2.w - c2.y * c0.w));
        let a13 = c0.x * (c2.y * c3.z - c3.y * c2.z) - c2.x * (c0.y * c3.z - c3.y * c0.z)
            + c3.x * (c0.y * c2.z - c2.y * c0.z);

        let a20 = c0.y * (c1.z * c3.w - c3.z * c1.w) - c1.y * (c0.z * c3.w - c3.z * c0.w)
            + c3.y * (c0.z * c1.w - c1.z * c0.w);
        let a21 = -(c0.x * (c1.z * c3.w - c3.z * c1.w) - c1.x * (c0.z * c3.w - c3.z * c0.w)
            + c3.x * (c0.z * c1.w - c1.z * c0.w));
        let a22 = c0.x * (c1.y * c3.w - c3.y * c1.w) - c1.x * (c0.y * c3.w - c3.y * c0.w)
            + c3.x * (c0.y * c1.w - c1.y * c0.w);
        let a23 = -(c0.x * (c1.y * c3.z - c3.y * c1.z) - c1.x * (c0.y * c3.z - c3.y * c0.z)
            + c3.x * (c0.y * c1.z - c1.y * c0.z));

        let a30 = -(c0.y * (c1.z * c2.w - c2.z * c1.w) - c1.y * (c0.z * c2.w - c2.z * c0.w)
            + c2.y * (c0.z * c1.w - c1.z * c0.w));
        let a31 = c0.x * (c1.z * c2.w - c2.z * c1.w) - c1.x * (c0.z * c2.w - c2.z * c0.w)
            + c2.x * (c0.z * c1.w - c1.z * c0.w);
        let a32 = -(c0.x * (c1.y * c2.w - c2.y * c1.w) - c1.x * (c0.y * c2.w - c2.y * c0.w)
            + c2.x * (c0.y * c1.w - c1.y * c0.w));
        let a33 = c0.x * (c1.y * c2.z - c2.y * c1.z) - c1.x * (c0.y * c2.z - c2.y * c0.z)
            + c2.x * (c0.y * c1.z - c1.y * c0.z);

        let det = c0.x * a00 + c1.x * a10 + c2.x * a20 + c3.x * a30;
        if det.abs() < DET_EPSILON {
            return Err(MathError::SingularMatrix);
        }
        let inv_det = 1.0 / det;

        Ok(Self::from_cols(
            Vec4::new(a00 * inv_det, a10 * inv_det, a20 * inv_det, a30 * inv_det),
            Vec4::new(a01 * inv_det, a11 * inv_det, a21 * inv_det, a31 * inv_det),
            Vec4::new(a02 * inv_det, a12 * inv_det, a22 * inv_det, a32 * inv_det),
            Vec4::new(a03 * inv_det, a13 * inv_det, a23 * inv_det, a33 * inv_det),
        ))
    }

    /// Solves the linear system `self · x = rhs` by Gaussian elimination
    /// with partial pivoting.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] when a pivot magnitude falls
    /// below [`DET_EPSILON`].
    pub fn solve(&self, rhs: Vec4) -> Result<Vec4, MathError> {
        let mut aug = [[0.0f32; 5]; 4];
        for (r, row) in aug.iter_mut().enumerate() {
            for c in 0..4 {
                row[c] = self.cols[c].get(r);
            }
            row[4] = rhs.get(r);
        }
        let x = gauss_solve(&mut aug)?;
        Ok(Vec4::new(x[0], x[1], x[2], x[3]))
    }

    /// Transforms a 3D point through the matrix in homogeneous coordinates
    /// and performs the perspective divide.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::PerspectiveDivideByZero`] if the resulting
    /// clip-space `|w|` is below [`W_EPSILON`].
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Result<Vec3, MathError> {
        let clip = *self * Vec4::from_point(point);
        if clip.w.abs() < W_EPSILON {
            return Err(MathError::PerspectiveDivideByZero);
        }
        Ok(clip.truncate() / clip.w)
    }

    /// Transforms a 3D direction through the matrix with `w` = 0 (no
    /// translation, no divide).
    #[inline]
    pub fn transform_direction(&self, dir: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(dir, 0.0)).truncate()
    }
}

/// Forward elimination with partial pivoting followed by back substitution
/// over an `N x (N+1)` augmented system.
fn gauss_solve<const N: usize, const M: usize>(
    aug: &mut [[f32; M]; N],
) -> Result<[f32; N], MathError> {
    debug_assert_eq!(M, N + 1);

    for i in 0..N {
        let mut max_row = i;
        for k in (i + 1)..N {
            if aug[k][i].abs() > aug[max_row][i].abs() {
                max_row = k;
            }
        }
        aug.swap(i, max_row);

        if aug[i][i].abs() < DET_EPSILON {
            return Err(MathError::SingularMatrix);
        }

        for k in (i + 1)..N {
            let factor = aug[k][i] / aug[i][i];
            for j in i..M {
                aug[k][j] -= factor * aug[i][j];
            }
        }
    }

    let mut solution = [0.0f32; N];
    for i in (0..N).rev() {
        let mut acc = aug[i][N];
        for j in (i + 1)..N {
            acc -= aug[i][j] * solution[j];
        }
        solution[i] = acc / aug[i][i];
    }
    Ok(solution)
}

// --- Operator Overloads ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4`. Matrix multiplication is not
    /// commutative.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2], self * rhs.cols[3])
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Transforms a `Vec4` by this matrix.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z + self.cols[3] * rhs.w
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;
    /// Allows accessing a matrix column by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

impl IndexMut<usize> for Mat4 {
    /// Allows mutably accessing a matrix column by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cols[index]
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq_eps, degrees_to_radians, PI};

    // M * inv(M) is checked at 1e-5: cofactor inverses of composed f32
    // transforms accumulate a little past the default epsilon.
    const INV_EPS: f32 = 1e-5;

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq_eps(a.x, b.x, INV_EPS)
            && approx_eq_eps(a.y, b.y, INV_EPS)
            && approx_eq_eps(a.z, b.z, INV_EPS)
    }

    fn vec4_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq_eps(a.x, b.x, INV_EPS)
            && approx_eq_eps(a.y, b.y, INV_EPS)
            && approx_eq_eps(a.z, b.z, INV_EPS)
            && approx_eq_eps(a.w, b.w, INV_EPS)
    }

    fn mat3_approx_eq(a: Mat3, b: Mat3) -> bool {
        (0..3).all(|i| vec3_approx_eq(a.cols[i], b.cols[i]))
    }

    fn mat4_approx_eq(a: Mat4, b: Mat4) -> bool {
        (0..4).all(|i| vec4_approx_eq(a.cols[i], b.cols[i]))
    }

    // --- Mat3 ---

    #[test]
    fn test_mat3_identity_default() {
        assert_eq!(Mat3::default(), Mat3::IDENTITY);
        let m = Mat3::from_scale(Vec3::new(1.0, 2.0, 3.0));
        assert!(mat3_approx_eq(m * Mat3::IDENTITY, m));
        assert!(mat3_approx_eq(Mat3::IDENTITY * m, m));
    }

    #[test]
    fn test_mat3_determinant() {
        assert!(approx_eq_eps(Mat3::IDENTITY.determinant(), 1.0, INV_EPS));
        assert!(approx_eq_eps(Mat3::ZERO.determinant(), 0.0, INV_EPS));
        let m = Mat3::from_scale(Vec3::new(2.0, 3.0, 4.0));
        assert!(approx_eq_eps(m.determinant(), 24.0, INV_EPS));
    }

    #[test]
    fn test_mat3_transpose() {
        let m = Mat3::from_cols(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(7.0, 8.0, 9.0),
        );
        let expected = Mat3::from_cols(
            Vec3::new(1.0, 4.0, 7.0),
            Vec3::new(2.0, 5.0, 8.0),
            Vec3::new(3.0, 6.0, 9.0),
        );
        assert!(mat3_approx_eq(m.transpose(), expected));
        assert!(mat3_approx_eq(m.transpose().transpose(), m));
    }

    #[test]
    fn test_mat3_inverse_round_trip() {
        let m = Mat3::from_cols(
            Vec3::new(2.0, 0.0, 1.0),
            Vec3::new(-1.0, 3.0, 0.0),
            Vec3::new(0.5, 1.0, 1.0),
        );
        let inv = m.inverse().expect("matrix should be invertible");
        assert!(mat3_approx_eq(inv * m, Mat3::IDENTITY));
        assert!(mat3_approx_eq(m * inv, Mat3::IDENTITY));

        let singular = Mat3::from_scale(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(singular.inverse(), Err(MathError::SingularMatrix));
    }

    #[test]
    fn test_mat3_solve() {
        let m = Mat3::from_cols(
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 4.0, 0.0),
            Vec3::new(0.0, 0.0, 8.0),
        );
        let x = m.solve(Vec3::new(2.0, 4.0, 8.0)).unwrap();
        assert!(vec3_approx_eq(x, Vec3::ONE));

        assert_eq!(
            Mat3::ZERO.solve(Vec3::ONE),
            Err(MathError::SingularMatrix)
        );
    }

    // --- Mat4 ---

    #[test]
    fn test_mat4_identity_default() {
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert!(mat4_approx_eq(m * Mat4::IDENTITY, m));
        assert!(mat4_approx_eq(Mat4::IDENTITY * m, m));
    }

    #[test]
    fn test_mat4_translation() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let p = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert!(vec4_approx_eq(m * p, Vec4::new(2.0, 3.0, 4.0, 1.0)));
        // Directions (w = 0) are unaffected by translation.
        let d = Vec4::new(1.0, 1.0, 1.0, 0.0);
        assert!(vec4_approx_eq(m * d, d));
    }

    #[test]
    fn test_mat4_rotations() {
        let quarter = PI / 2.0;
        let p = Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert!(vec4_approx_eq(
            Mat4::from_rotation_x(quarter) * p,
            Vec4::new(0.0, 0.0, 1.0, 1.0)
        ));
        let px = Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!(vec4_approx_eq(
            Mat4::from_rotation_y(quarter) * px,
            Vec4::new(0.0, 0.0, -1.0, 1.0)
        ));
        assert!(vec4_approx_eq(
            Mat4::from_rotation_z(quarter) * px,
            Vec4::new(0.0, 1.0, 0.0, 1.0)
        ));
    }

    #[test]
    fn test_mat4_mul_order() {
        let t = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let r = Mat4::from_rotation_z(PI / 2.0);
        let p = Vec4::new(1.0, 0.0, 0.0, 1.0);

        // Translate then rotate: (2,0,0) -> (0,2,0)
        assert!(vec4_approx_eq(r * t * p, Vec4::new(0.0, 2.0, 0.0, 1.0)));
        // Rotate then translate: (0,1,0) -> (1,1,0)
        assert!(vec4_approx_eq(t * r * p, Vec4::new(1.0, 1.0, 0.0, 1.0)));
    }

    #[test]
    fn test_mat4_inverse_round_trip() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
            * Mat4::from_rotation_y(PI / 4.0)
            * Mat4::from_scale(Vec3::new(1.0, 2.0, 1.0));

        let inv = m.inverse().expect("matrix should be invertible");
        assert!(mat4_approx_eq(m * inv, Mat4::IDENTITY));

        let singular = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(singular.inverse(), Err(MathError::SingularMatrix));
    }

    #[test]
    fn test_mat4_solve_matches_inverse() {
        let m = Mat4::from_translation(Vec3::new(-2.0, 1.0, 0.5))
            * Mat4::from_rotation_x(0.3);
        let rhs = Vec4::new(1.0, -1.0, 2.0, 1.0);

        let by_solve = m.solve(rhs).unwrap();
        let by_inverse = m.inverse().unwrap() * rhs;
        assert!(vec4_approx_eq(by_solve, by_inverse));

        assert_eq!(Mat4::ZERO.solve(rhs), Err(MathError::SingularMatrix));
    }

    #[test]
    fn test_perspective_depth_range() {
        let m = Mat4::perspective(degrees_to_radians(60.0), 16.0 / 9.0, 0.1, 100.0);

        // A point on the near plane maps to NDC z = 0.
        let near = m.transform_point(Vec3::new(0.0, 0.0, -0.1)).unwrap();
        assert!(approx_eq_eps(near.z, 0.0, INV_EPS));

        // A point on the far plane maps to NDC z = 1.
        let far = m.transform_point(Vec3::new(0.0, 0.0, -100.0)).unwrap();
        assert!(approx_eq_eps(far.z, 1.0, 1e-4));
    }

    #[test]
    fn test_transform_point_divide_by_zero() {
        // The perspective matrix sends z = 0 points to w = 0.
        let m = Mat4::perspective(degrees_to_radians(60.0), 1.0, 0.1, 100.0);
        assert_eq!(
            m.transform_point(Vec3::ZERO),
            Err(MathError::PerspectiveDivideByZero)
        );
    }

    #[test]
    fn test_transform_direction_ignores_translation() {
        let m = Mat4::from_translation(Vec3::new(5.0, 5.0, 5.0));
        assert!(vec3_approx_eq(m.transform_direction(Vec3::X), Vec3::X));
    }
}
