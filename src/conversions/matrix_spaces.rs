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
//! Luma/chroma television encodings expressed as a single affine transform.
use crate::color::Color;
use crate::matrix::{Matrix3d, Vector3d};

struct AffineSpace {
    forward: Matrix3d,
    inverse: Matrix3d,
    offset: Vector3d,
}

impl AffineSpace {
    #[inline]
    fn to(&self, c: Color) -> Color {
        let v = self.forward.mul_vector(Vector3d::new(c.c0, c.c1, c.c2)) + self.offset;
        c.with_channels(v.v[0], v.v[1], v.v[2])
    }

    #[inline]
    fn from(&self, c: Color) -> Color {
        let v = self
            .inverse
            .mul_vector(Vector3d::new(c.c0, c.c1, c.c2) - self.offset);
        c.with_channels(v.v[0], v.v[1], v.v[2])
    }
}

const ZERO: Vector3d = Vector3d::new(0., 0., 0.);

const YDBDR: AffineSpace = AffineSpace {
    forward: Matrix3d::new([
        [0.299, 0.587, 0.114],
        [-0.450, -0.883, 1.333],
        [-1.333, 1.116, 0.217],
    ]),
    inverse: Matrix3d::new([
        [1.0, 9.23037161476121e-05, -0.5259126306618653],
        [1.0, -0.12913289889050933, 0.2678993282075988],
        [1.0, 0.6646790599789547, -7.920254353311232e-05],
    ]),
    offset: ZERO,
};

const YCBCR: AffineSpace = AffineSpace {
    forward: Matrix3d::new([
        [0.299, 0.587, 0.114],
        [-0.168736, -0.331264, 0.5],
        [0.5, -0.418688, -0.081312],
    ]),
    inverse: Matrix3d::new([
        [1.0, -1.218894188681752e-06, 1.4019995886573404],
        [1.0, -0.3441356781653367, -0.7141361555818125],
        [1.0, 1.7720000660738162, 4.062980628939173e-07],
    ]),
    offset: Vector3d::new(0., 128., 128.),
};

const YUV: AffineSpace = AffineSpace {
    forward: Matrix3d::new([
        [0.299, 0.587, 0.114],
        [-0.14713, -0.28886, 0.436],
        [0.615, -0.51499, -0.10001],
    ]),
    inverse: Matrix3d::new([
        [1.0000000001179838, -1.179838438240572e-05, 1.1398345757210222],
        [1.0000039464605326, -0.39464605326210683, -0.5805942338343951],
        [0.9999796788806157, 2.0321119384367283, -1.511298066375047e-05],
    ]),
    offset: ZERO,
};

const YIQ: AffineSpace = AffineSpace {
    forward: Matrix3d::new([
        [0.299, 0.587, 0.114],
        [0.595716, -0.274453, -0.321263],
        [0.211456, -0.522591, 0.311135],
    ]),
    inverse: Matrix3d::new([
        [1.0, 0.9562957197589484, 0.6210244164652612],
        [1.0, -0.2721220993185105, -0.6473805968256952],
        [1.0, -1.1069890167364904, 1.7046149983646484],
    ]),
    offset: ZERO,
};

pub fn to_ydbdr(c: Color) -> Color {
    YDBDR.to(c)
}

pub fn from_ydbdr(c: Color) -> Color {
    YDBDR.from(c)
}

/// Full range BT.601 YCbCr with chroma centered at 128.
pub fn to_ycbcr(c: Color) -> Color {
    YCBCR.to(c)
}

pub fn from_ycbcr(c: Color) -> Color {
    YCBCR.from(c)
}

pub fn to_yuv(c: Color) -> Color {
    YUV.to(c)
}

pub fn from_yuv(c: Color) -> Color {
    YUV.from(c)
}

pub fn to_yiq(c: Color) -> Color {
    YIQ.to(c)
}

pub fn from_yiq(c: Color) -> Color {
    YIQ.from(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hard_coded_inverses_match() {
        for space in [&YDBDR, &YCBCR, &YUV, &YIQ] {
            let id = space.forward.mat_mul(space.inverse);
            for i in 0..3 {
                for j in 0..3 {
                    let expected = if i == j { 1. } else { 0. };
                    assert_abs_diff_eq!(id.v[i][j], expected, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn ycbcr_gray_is_centered() {
        let c = to_ycbcr(Color::gray(100.));
        assert_abs_diff_eq!(c.c0, 100., epsilon = 1e-9);
        assert_abs_diff_eq!(c.c1, 128., epsilon = 1e-9);
        assert_abs_diff_eq!(c.c2, 128., epsilon = 1e-9);
    }
}
