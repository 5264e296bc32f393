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
use crate::color::{Color, MAX_CHANNEL};
use crate::conversions::rgb::{srgb_from_linear, srgb_to_linear};
use crate::math::cbrt;
use crate::matrix::{Matrix3d, Vector3d};
use crate::white_point::WhitePoint;

/// Linear sRGB to XYZ, built from the sRGB primaries and the D65 white so
/// that `(1, 1, 1)` lands exactly on [`WhitePoint::D65`].
pub(crate) const SRGB_TO_XYZ: Matrix3d = Matrix3d::new([
    [0.4124564390896921, 0.357576077643909, 0.18043748326639894],
    [0.21267285140562248, 0.715152155287818, 0.07217499330655958],
    [0.019333895582329317, 0.119192025881303, 0.9503040785363677],
]);

pub(crate) const XYZ_TO_SRGB: Matrix3d = Matrix3d::new([
    [3.2404541621141054, -1.5371385127977166, -0.4985314095560162],
    [-0.9692660305051868, 1.8760108454466942, 0.04155601753034984],
    [0.05564343095911469, -0.20402591351675387, 1.0572251882231791],
]);

const LMS: Matrix3d = Matrix3d::new([
    [0.4002, 0.7076, -0.0808],
    [-0.2263, 1.1653, 0.0457],
    [0.0, 0.0, 0.9182],
]);

const LMS_INVERSE: Matrix3d = Matrix3d::new([
    [1.8600666125082352, -1.12948007810077, 0.21989830304930363],
    [0.3612229249211479, 0.638804306466829, -7.127501530529656e-06],
    [0.0, 0.0, 1.0890873448050533],
]);

/// sRGB `[0, 255]` to XYZ with the white at `Y = 100`.
#[inline]
pub(crate) fn xyz_from_rgb(c: Color) -> Vector3d {
    let linear = Vector3d::new(c.c0, c.c1, c.c2).map(|v| srgb_to_linear(v / MAX_CHANNEL));
    SRGB_TO_XYZ.mul_vector(linear) * 100.
}

#[inline]
pub(crate) fn rgb_from_xyz(xyz: Vector3d, alpha: f64) -> Color {
    let linear = XYZ_TO_SRGB.mul_vector(xyz * 0.01);
    let v = linear.map(|v| srgb_from_linear(v) * MAX_CHANNEL);
    Color::new(v.v[0], v.v[1], v.v[2], alpha)
}

#[inline]
pub(crate) fn vector_to_color(v: Vector3d, alpha: f64) -> Color {
    Color::new(v.v[0], v.v[1], v.v[2], alpha)
}

#[inline]
pub(crate) fn color_to_vector(c: Color) -> Vector3d {
    Vector3d::new(c.c0, c.c1, c.c2)
}

/// CIE XYZ, `Y` of the reference white is 100.
pub fn to_xyz(c: Color) -> Color {
    vector_to_color(xyz_from_rgb(c), c.alpha)
}

pub fn from_xyz(c: Color) -> Color {
    rgb_from_xyz(color_to_vector(c), c.alpha)
}

/// Chromaticity `x, y` followed by luminance `Y`.
pub fn to_xyy(c: Color) -> Color {
    let xyz = xyz_from_rgb(c);
    let s = xyz.v[0] + xyz.v[1] + xyz.v[2];
    if s == 0. {
        return c.with_channels(0., 0., 0.);
    }
    c.with_channels(xyz.v[0] / s, xyz.v[1] / s, xyz.v[1])
}

pub fn from_xyy(c: Color) -> Color {
    let (x, y, luminance) = (c.c0, c.c1, c.c2);
    if luminance == 0. || y == 0. {
        return rgb_from_xyz(Vector3d::default(), c.alpha);
    }
    let scale = luminance / y;
    rgb_from_xyz(
        Vector3d::new(x * scale, luminance, (1. - x - y) * scale),
        c.alpha,
    )
}

/// CIE 1960 UCS.
pub fn to_ucs(c: Color) -> Color {
    let xyz = xyz_from_rgb(c);
    let (x, y, z) = (xyz.v[0], xyz.v[1], xyz.v[2]);
    c.with_channels(2. / 3. * x, y, 0.5 * (-x + 3. * y + z))
}

pub fn from_ucs(c: Color) -> Color {
    let (u, v, w) = (c.c0, c.c1, c.c2);
    rgb_from_xyz(Vector3d::new(1.5 * u, v, 1.5 * u - 3. * v + 2. * w), c.alpha)
}

#[inline]
fn uv_1960(xyz: Vector3d) -> (f64, f64) {
    let d = xyz.v[0] + 15. * xyz.v[1] + 3. * xyz.v[2];
    (4. * xyz.v[0] / d, 6. * xyz.v[1] / d)
}

/// CIE 1964 U\*V\*W\* under the D65 white.
pub fn to_uvw(c: Color) -> Color {
    to_uvw_with_white_point(c, WhitePoint::D65)
}

pub fn from_uvw(c: Color) -> Color {
    from_uvw_with_white_point(c, WhitePoint::D65)
}

pub fn to_uvw_with_white_point(c: Color, white_point: WhitePoint) -> Color {
    let xyz = xyz_from_rgb(c);
    let (u0, v0) = uv_1960(white_point.to_vector());
    let w = 25. * cbrt(xyz.v[1]) - 17.;
    let d = xyz.v[0] + 15. * xyz.v[1] + 3. * xyz.v[2];
    if d == 0. {
        return c.with_channels(0., 0., w);
    }
    let (u, v) = uv_1960(xyz);
    c.with_channels(13. * w * (u - u0), 13. * w * (v - v0), w)
}

pub fn from_uvw_with_white_point(c: Color, white_point: WhitePoint) -> Color {
    let (uu, vv, w) = (c.c0, c.c1, c.c2);
    let (u0, v0) = uv_1960(white_point.to_vector());
    let j = (w + 17.) / 25.;
    let y = j * j * j;
    if y == 0. || w == 0. {
        return rgb_from_xyz(Vector3d::new(0., y, 0.), c.alpha);
    }
    let u = uu / (13. * w) + u0;
    let v = vv / (13. * w) + v0;
    let den = 2. * u - 8. * v + 4.;
    let x = 3. * u / den;
    let yc = 2. * v / den;
    rgb_from_xyz(
        Vector3d::new(x * y / yc, y, (1. - x - yc) * y / yc),
        c.alpha,
    )
}

/// von Kries LMS cone space.
pub fn to_lms(c: Color) -> Color {
    vector_to_color(LMS.mul_vector(xyz_from_rgb(c)), c.alpha)
}

pub fn from_lms(c: Color) -> Color {
    rgb_from_xyz(LMS_INVERSE.mul_vector(color_to_vector(c)), c.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn white_maps_to_d65() {
        let w = to_xyz(Color::WHITE);
        assert_abs_diff_eq!(w.c0, WhitePoint::D65.x, epsilon = 1e-9);
        assert_abs_diff_eq!(w.c1, WhitePoint::D65.y, epsilon = 1e-9);
        assert_abs_diff_eq!(w.c2, WhitePoint::D65.z, epsilon = 1e-9);
    }

    #[test]
    fn srgb_matrices_are_inverse() {
        let id = SRGB_TO_XYZ.mat_mul(XYZ_TO_SRGB);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1. } else { 0. };
                assert_abs_diff_eq!(id.v[i][j], expected, epsilon = 1e-13);
            }
        }
    }

    #[test]
    fn black_is_degenerate_safe() {
        let k = to_xyy(Color::BLACK);
        assert_eq!(k, Color::BLACK);
        let back = from_xyy(k);
        assert_abs_diff_eq!(back.c0, 0., epsilon = 1e-12);
        let u = to_uvw(Color::BLACK);
        assert_abs_diff_eq!(u.c2, -17., epsilon = 1e-12);
        let back = from_uvw(u);
        assert_abs_diff_eq!(back.c1, 0., epsilon = 1e-9);
    }

    #[test]
    fn lms_inverse_matches() {
        let id = LMS.mat_mul(LMS_INVERSE);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1. } else { 0. };
                assert_abs_diff_eq!(id.v[i][j], expected, epsilon = 1e-9);
            }
        }
    }
}
