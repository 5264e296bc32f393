/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::math::mlaf;
use std::ops::{Add, Index, Mul, Sub};

/// Vector math helper
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3d {
    pub v: [f64; 3],
}

impl Vector3d {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3d { v: [x, y, z] }
    }

    #[inline]
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Self {
        Vector3d {
            v: [f(self.v[0]), f(self.v[1]), f(self.v[2])],
        }
    }
}

impl Index<usize> for Vector3d {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.v[index]
    }
}

impl Mul<f64> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|x| x * rhs)
    }
}

impl Mul<Vector3d> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn mul(self, rhs: Vector3d) -> Self::Output {
        Vector3d::new(
            self.v[0] * rhs.v[0],
            self.v[1] * rhs.v[1],
            self.v[2] * rhs.v[2],
        )
    }
}

impl Add<Vector3d> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn add(self, rhs: Vector3d) -> Self::Output {
        Vector3d::new(
            self.v[0] + rhs.v[0],
            self.v[1] + rhs.v[1],
            self.v[2] + rhs.v[2],
        )
    }
}

impl Sub<Vector3d> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn sub(self, rhs: Vector3d) -> Self::Output {
        Vector3d::new(
            self.v[0] - rhs.v[0],
            self.v[1] - rhs.v[1],
            self.v[2] - rhs.v[2],
        )
    }
}

/// Row-major 3x3 matrix
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix3d {
    pub v: [[f64; 3]; 3],
}

impl Matrix3d {
    pub const IDENTITY: Matrix3d = Matrix3d {
        v: [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]],
    };

    #[inline]
    pub const fn new(v: [[f64; 3]; 3]) -> Self {
        Matrix3d { v }
    }

    #[inline]
    pub const fn diagonal(d: Vector3d) -> Self {
        Matrix3d {
            v: [[d.v[0], 0., 0.], [0., d.v[1], 0.], [0., 0., d.v[2]]],
        }
    }

    #[inline]
    pub fn mul_vector(&self, other: Vector3d) -> Vector3d {
        let x = mlaf(
            mlaf(self.v[0][0] * other.v[0], self.v[0][1], other.v[1]),
            self.v[0][2],
            other.v[2],
        );
        let y = mlaf(
            mlaf(self.v[1][0] * other.v[0], self.v[1][1], other.v[1]),
            self.v[1][2],
            other.v[2],
        );
        let z = mlaf(
            mlaf(self.v[2][0] * other.v[0], self.v[2][1], other.v[1]),
            self.v[2][2],
            other.v[2],
        );
        Vector3d::new(x, y, z)
    }

    #[inline]
    pub fn mat_mul(&self, other: Matrix3d) -> Matrix3d {
        let mut result = Matrix3d::default();
        for i in 0..3 {
            for j in 0..3 {
                result.v[i][j] = mlaf(
                    mlaf(self.v[i][0] * other.v[0][j], self.v[i][1], other.v[1][j]),
                    self.v[i][2],
                    other.v[2][j],
                );
            }
        }
        result
    }

    #[inline]
    pub fn determinant(&self) -> Option<f64> {
        let v = self.v;
        let a0 = v[0][0] * v[1][1] * v[2][2];
        let a1 = v[0][1] * v[1][2] * v[2][0];
        let a2 = v[0][2] * v[1][0] * v[2][1];

        let s0 = v[0][2] * v[1][1] * v[2][0];
        let s1 = v[0][1] * v[1][0] * v[2][2];
        let s2 = v[0][0] * v[1][2] * v[2][1];

        let j = a0 + a1 + a2 - s0 - s1 - s2;
        if j == 0. {
            return None;
        }
        Some(j)
    }

    /// Inverse by cofactors, `None` when singular.
    pub fn inverse(&self) -> Option<Matrix3d> {
        let det = 1. / self.determinant()?;
        let a = self.v;
        Some(Matrix3d {
            v: [
                [
                    (a[1][1] * a[2][2] - a[1][2] * a[2][1]) * det,
                    (a[0][2] * a[2][1] - a[0][1] * a[2][2]) * det,
                    (a[0][1] * a[1][2] - a[0][2] * a[1][1]) * det,
                ],
                [
                    (a[1][2] * a[2][0] - a[1][0] * a[2][2]) * det,
                    (a[0][0] * a[2][2] - a[0][2] * a[2][0]) * det,
                    (a[0][2] * a[1][0] - a[0][0] * a[1][2]) * det,
                ],
                [
                    (a[1][0] * a[2][1] - a[1][1] * a[2][0]) * det,
                    (a[0][1] * a[2][0] - a[0][0] * a[2][1]) * det,
                    (a[0][0] * a[1][1] - a[0][1] * a[1][0]) * det,
                ],
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn inverse_round_trip() {
        let m = Matrix3d::new([
            [0.8951, 0.2664, -0.1614],
            [-0.7502, 1.7135, 0.0367],
            [0.0389, -0.0685, 1.0296],
        ]);
        let inv = m.inverse().unwrap();
        let id = m.mat_mul(inv);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1. } else { 0. };
                assert_abs_diff_eq!(id.v[i][j], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn singular_has_no_inverse() {
        let m = Matrix3d::new([[1., 2., 3.], [2., 4., 6.], [0., 0., 1.]]);
        assert!(m.inverse().is_none());
    }
}
