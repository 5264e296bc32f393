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
//! CIE L\*a\*b\*, CIE L\*u\*v\* and Hunter Lab.
use crate::color::Color;
use crate::conversions::xyz::{rgb_from_xyz, xyz_from_rgb};
use crate::math::cbrt;
use crate::matrix::Vector3d;
use crate::white_point::WhitePoint;

pub(crate) const LAB_EPSILON: f64 = 216. / 24389.;
pub(crate) const LAB_KAPPA: f64 = 24389. / 27.;

#[inline]
fn lab_f(v: f64) -> f64 {
    if v > LAB_EPSILON {
        cbrt(v)
    } else {
        (16. + v * LAB_KAPPA) / 116.
    }
}

#[inline]
fn lab_f_inv(v: f64) -> f64 {
    let v3 = v * v * v;
    if v3 > LAB_EPSILON {
        v3
    } else {
        (116. * v - 16.) / LAB_KAPPA
    }
}

#[inline]
pub(crate) fn lab_from_xyz(xyz: Vector3d, white_point: WhitePoint) -> Vector3d {
    let fx = lab_f(xyz.v[0] / white_point.x);
    let fy = lab_f(xyz.v[1] / white_point.y);
    let fz = lab_f(xyz.v[2] / white_point.z);
    Vector3d::new(116. * fy - 16., 500. * (fx - fy), 200. * (fy - fz))
}

#[inline]
pub(crate) fn xyz_from_lab(lab: Vector3d, white_point: WhitePoint) -> Vector3d {
    let fy = (lab.v[0] + 16.) / 116.;
    let fx = lab.v[1] / 500. + fy;
    let fz = fy - lab.v[2] / 200.;
    Vector3d::new(
        lab_f_inv(fx) * white_point.x,
        lab_f_inv(fy) * white_point.y,
        lab_f_inv(fz) * white_point.z,
    )
}

/// CIE L\*a\*b\* under the D65 white.
pub fn to_lab(c: Color) -> Color {
    to_lab_with_white_point(c, WhitePoint::D65)
}

pub fn from_lab(c: Color) -> Color {
    from_lab_with_white_point(c, WhitePoint::D65)
}

pub fn to_lab_with_white_point(c: Color, white_point: WhitePoint) -> Color {
    let lab = lab_from_xyz(xyz_from_rgb(c), white_point);
    c.with_channels(lab.v[0], lab.v[1], lab.v[2])
}

pub fn from_lab_with_white_point(c: Color, white_point: WhitePoint) -> Color {
    let xyz = xyz_from_lab(Vector3d::new(c.c0, c.c1, c.c2), white_point);
    rgb_from_xyz(xyz, c.alpha)
}

#[inline]
fn luv_white_uv(white_point: WhitePoint) -> (f64, f64) {
    let den = white_point.x + 15. * white_point.y + 3. * white_point.z;
    (4. * white_point.x / den, 9. * white_point.y / den)
}

/// CIE L\*u\*v\* under the D65 white.
pub fn to_luv(c: Color) -> Color {
    to_luv_with_white_point(c, WhitePoint::D65)
}

pub fn from_luv(c: Color) -> Color {
    from_luv_with_white_point(c, WhitePoint::D65)
}

pub fn to_luv_with_white_point(c: Color, white_point: WhitePoint) -> Color {
    let xyz = xyz_from_rgb(c);
    let [x, y, z] = xyz.v;
    let yr = y / white_point.y;
    let l = if yr > LAB_EPSILON {
        116. * cbrt(yr) - 16.
    } else {
        LAB_KAPPA * yr
    };
    let den = x + 15. * y + 3. * z;
    if den == 0. {
        return c.with_channels(l, 0., 0.);
    }
    let (ur, vr) = luv_white_uv(white_point);
    let u = 13. * l * (4. * x / den - ur);
    let v = 13. * l * (9. * y / den - vr);
    c.with_channels(l, u, v)
}

pub fn from_luv_with_white_point(c: Color, white_point: WhitePoint) -> Color {
    let (l, u, v) = (c.c0, c.c1, c.c2);
    if l == 0. {
        return rgb_from_xyz(Vector3d::default(), c.alpha);
    }
    let (ur, vr) = luv_white_uv(white_point);
    let yr = if l > LAB_KAPPA * LAB_EPSILON {
        let j = (l + 16.) / 116.;
        j * j * j
    } else {
        l / LAB_KAPPA
    };
    let y = yr * white_point.y;
    let up = u / (13. * l) + ur;
    let vp = v / (13. * l) + vr;
    let x = y * 9. * up / (4. * vp);
    let z = y * (12. - 3. * up - 20. * vp) / (4. * vp);
    rgb_from_xyz(Vector3d::new(x, y, z), c.alpha)
}

#[inline]
fn hunter_coefficients(white_point: WhitePoint) -> (f64, f64) {
    (
        175. / 198.04 * (white_point.x + white_point.y),
        70. / 218.11 * (white_point.y + white_point.z),
    )
}

/// Hunter Lab under the D65 white.
pub fn to_hunter_lab(c: Color) -> Color {
    to_hunter_lab_with_white_point(c, WhitePoint::D65)
}

pub fn from_hunter_lab(c: Color) -> Color {
    from_hunter_lab_with_white_point(c, WhitePoint::D65)
}

pub fn to_hunter_lab_with_white_point(c: Color, white_point: WhitePoint) -> Color {
    let [x, y, z] = xyz_from_rgb(c).v;
    let (ka, kb) = hunter_coefficients(white_point);
    let yy = y / white_point.y;
    if yy == 0. {
        return c.with_channels(0., 0., 0.);
    }
    let s = yy.sqrt();
    c.with_channels(
        100. * s,
        ka * (x / white_point.x - yy) / s,
        kb * (yy - z / white_point.z) / s,
    )
}

pub fn from_hunter_lab_with_white_point(c: Color, white_point: WhitePoint) -> Color {
    let (l, a, b) = (c.c0, c.c1, c.c2);
    let (ka, kb) = hunter_coefficients(white_point);
    let s = l / 100.;
    let yy = s * s;
    let x = (a / ka * s + yy) * white_point.x;
    let z = -(b / kb * s - yy) * white_point.z;
    rgb_from_xyz(Vector3d::new(x, yy * white_point.y, z), c.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::white_point::{Illuminant, Observer};
    use approx::assert_abs_diff_eq;

    #[test]
    fn white_is_neutral() {
        let lab = to_lab(Color::WHITE);
        assert_abs_diff_eq!(lab.c0, 100., epsilon = 1e-3);
        assert_abs_diff_eq!(lab.c1, 0., epsilon = 1e-2);
        assert_abs_diff_eq!(lab.c2, 0., epsilon = 1e-2);
    }

    #[test]
    fn known_red() {
        let lab = to_lab(Color::rgb(255., 0., 0.));
        assert_abs_diff_eq!(lab.c0, 53.2408, epsilon = 1e-2);
        assert_abs_diff_eq!(lab.c1, 80.0925, epsilon = 1e-2);
        assert_abs_diff_eq!(lab.c2, 67.2032, epsilon = 1e-2);
    }

    #[test]
    fn custom_white_point_round_trips() {
        let wp = Illuminant::D50.white_point(Observer::Cie1931).unwrap();
        let c = Color::rgb(12., 200., 77.);
        for (to, from) in [
            (
                to_lab_with_white_point as fn(Color, WhitePoint) -> Color,
                from_lab_with_white_point as fn(Color, WhitePoint) -> Color,
            ),
            (to_luv_with_white_point, from_luv_with_white_point),
            (to_hunter_lab_with_white_point, from_hunter_lab_with_white_point),
        ] {
            let back = from(to(c, wp), wp);
            assert_abs_diff_eq!(back.c0, c.c0, epsilon = 1e-7);
            assert_abs_diff_eq!(back.c1, c.c1, epsilon = 1e-7);
            assert_abs_diff_eq!(back.c2, c.c2, epsilon = 1e-7);
        }
    }

    #[test]
    fn black_round_trips() {
        for (to, from) in [
            (to_lab as fn(Color) -> Color, from_lab as fn(Color) -> Color),
            (to_luv, from_luv),
            (to_hunter_lab, from_hunter_lab),
        ] {
            let back = from(to(Color::BLACK));
            assert_abs_diff_eq!(back.c0, 0., epsilon = 1e-9);
            assert_abs_diff_eq!(back.c2, 0., epsilon = 1e-9);
        }
    }
}
