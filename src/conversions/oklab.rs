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
//! Oklab and the Okhsv, Okhsl, Okhwb hue models derived from it.
use crate::color::{Color, MAX_CHANNEL};
use crate::conversions::gamut::{find_cusp, get_cs, to_st, toe, toe_inv};
use crate::conversions::rgb::{srgb_from_linear, srgb_to_linear};
use crate::conversions::xyz::{color_to_vector, vector_to_color};
use crate::math::{NEUTRAL_CHROMA, cbrt, wrap};
use crate::matrix::{Matrix3d, Vector3d};
use std::f64::consts::PI;

// Rows sum to one so neutral inputs land on equal LMS responses.
const LINEAR_TO_LMS: Matrix3d = Matrix3d::new([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.21190349822119034, 0.68069954516807, 0.1073969566107397],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

// a and b rows sum to zero, L row to one.
const LMS_TO_OKLAB: Matrix3d = Matrix3d::new([
    [0.210454268309314, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.42859224204858, 0.450593709617411],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
]);

// Inverses of the two matrices above, solved in exact arithmetic.
pub(crate) const OKLAB_TO_LMS: Matrix3d = Matrix3d::new([
    [1., 0.396337777376175, 0.2158037573099136],
    [1., -0.10556134581565856, -0.06385417282581334],
    [1., -0.08948417752981182, -1.2914855480194094],
]);

pub(crate) const LMS_TO_LINEAR: Matrix3d = Matrix3d::new([
    [4.076741661347994, -3.3077115900774223, 0.2309699287294279],
    [-1.268438004092176, 2.609757400402396, -0.3413193963102196],
    [-0.004196086541837109, -0.7034186143891078, 1.7076147009309448],
]);

/// Linear sRGB in `[0, 1]` to Oklab.
#[inline]
pub(crate) fn linear_to_oklab(rgb: Vector3d) -> Vector3d {
    let lms = LINEAR_TO_LMS.mul_vector(rgb).map(cbrt);
    LMS_TO_OKLAB.mul_vector(lms)
}

/// Oklab to linear sRGB in `[0, 1]`, may leave the gamut.
#[inline]
pub(crate) fn oklab_to_linear(lab: Vector3d) -> Vector3d {
    let lms = OKLAB_TO_LMS.mul_vector(lab).map(|v| v * v * v);
    LMS_TO_LINEAR.mul_vector(lms)
}

#[inline]
fn oklab_from_rgb(c: Color) -> Vector3d {
    linear_to_oklab(color_to_vector(c).map(|v| srgb_to_linear(v / MAX_CHANNEL)))
}

#[inline]
fn rgb_from_oklab(lab: Vector3d, alpha: f64) -> Color {
    let rgb = oklab_to_linear(lab).map(|v| srgb_from_linear(v) * MAX_CHANNEL);
    vector_to_color(rgb, alpha)
}

pub fn to_oklab(c: Color) -> Color {
    vector_to_color(oklab_from_rgb(c), c.alpha)
}

pub fn from_oklab(c: Color) -> Color {
    rgb_from_oklab(color_to_vector(c), c.alpha)
}

const ACHROMATIC: f64 = 1e-12;

#[inline]
fn oklab_hue(a: f64, b: f64) -> f64 {
    (0.5 + 0.5 * (-b).atan2(-a) / PI) * 360.
}

#[inline]
fn hue_direction(h: f64) -> (f64, f64) {
    let (sin, cos) = (2. * PI * wrap(h, 360.) / 360.).sin_cos();
    (cos, sin)
}

/// Okhsv, `(H, S, V)` with hue in degrees.
pub fn to_okhsv(c: Color) -> Color {
    let lab = oklab_from_rgb(c);
    let [mut l, a, b] = lab.v;
    let chroma = a.hypot(b);
    if l <= ACHROMATIC {
        return c.with_channels(0., 0., 0.);
    }
    if chroma < NEUTRAL_CHROMA {
        return c.with_channels(0., 0., toe(l));
    }
    let (a_, b_) = (a / chroma, b / chroma);
    let h = oklab_hue(a, b);

    let cusp = find_cusp(a_, b_);
    let st_max = to_st(cusp);
    let s_0 = 0.5;
    let k = 1. - s_0 / st_max.s;

    let t = st_max.t / (chroma + l * st_max.t);
    let l_v = t * l;
    let c_v = t * chroma;

    let l_vt = toe_inv(l_v);
    let c_vt = c_v * l_vt / l_v;

    let rgb_scale = oklab_to_linear(Vector3d::new(l_vt, a_ * c_vt, b_ * c_vt));
    let scale_l = cbrt(1. / rgb_scale.v[0].max(rgb_scale.v[1]).max(rgb_scale.v[2]).max(0.));

    l /= scale_l;
    l = toe(l);

    let v = l / l_v;
    let s = (s_0 + st_max.t) * c_v / ((st_max.t * s_0) + st_max.t * k * c_v);
    c.with_channels(h, s, v)
}

pub fn from_okhsv(c: Color) -> Color {
    let (h, s, v) = (c.c0, c.c1, c.c2);
    if v == 0. {
        return c.with_channels(0., 0., 0.);
    }
    let (a_, b_) = hue_direction(h);

    let cusp = find_cusp(a_, b_);
    let st_max = to_st(cusp);
    let s_0 = 0.5;
    let k = 1. - s_0 / st_max.s;

    // L, C when v == 1
    let l_v = 1. - s * s_0 / (s_0 + st_max.t - st_max.t * k * s);
    let c_v = s * st_max.t * s_0 / (s_0 + st_max.t - st_max.t * k * s);

    let mut l = v * l_v;
    let mut chroma = v * c_v;

    let l_vt = toe_inv(l_v);
    let c_vt = c_v * l_vt / l_v;

    let l_new = toe_inv(l);
    chroma *= l_new / l;
    l = l_new;

    let rgb_scale = oklab_to_linear(Vector3d::new(l_vt, a_ * c_vt, b_ * c_vt));
    let scale_l = cbrt(1. / rgb_scale.v[0].max(rgb_scale.v[1]).max(rgb_scale.v[2]).max(0.));

    l *= scale_l;
    chroma *= scale_l;

    rgb_from_oklab(Vector3d::new(l, chroma * a_, chroma * b_), c.alpha)
}

const MID: f64 = 0.8;
const MID_INV: f64 = 1.25;

/// Okhsl, `(H, S, L)` with hue in degrees.
pub fn to_okhsl(c: Color) -> Color {
    let [l, a, b] = oklab_from_rgb(c).v;
    let chroma = a.hypot(b);
    if l <= ACHROMATIC {
        return c.with_channels(0., 0., 0.);
    }
    if l >= 1. - ACHROMATIC || chroma < NEUTRAL_CHROMA {
        return c.with_channels(0., 0., toe(l));
    }
    let (a_, b_) = (a / chroma, b / chroma);
    let h = oklab_hue(a, b);

    let cs = get_cs(l, a_, b_);
    let s = if chroma < cs.c_mid {
        let k_1 = MID * cs.c0;
        let k_2 = 1. - k_1 / cs.c_mid;
        let t = chroma / (k_1 + k_2 * chroma);
        t * MID
    } else {
        let k_0 = cs.c_mid;
        let k_1 = (1. - MID) * cs.c_mid * cs.c_mid * MID_INV * MID_INV / cs.c0;
        let k_2 = 1. - k_1 / (cs.c_max - cs.c_mid);
        let t = (chroma - k_0) / (k_1 + k_2 * (chroma - k_0));
        MID + (1. - MID) * t
    };
    c.with_channels(h, s, toe(l))
}

pub fn from_okhsl(c: Color) -> Color {
    let (h, s, l) = (c.c0, c.c1, c.c2);
    if l >= 1. {
        return c.with_channels(MAX_CHANNEL, MAX_CHANNEL, MAX_CHANNEL);
    }
    if l <= 0. {
        return c.with_channels(0., 0., 0.);
    }
    let (a_, b_) = hue_direction(h);
    let l = toe_inv(l);

    let cs = get_cs(l, a_, b_);
    let chroma = if s < MID {
        let t = MID_INV * s;
        let k_1 = MID * cs.c0;
        let k_2 = 1. - k_1 / cs.c_mid;
        t * k_1 / (1. - k_2 * t)
    } else {
        let t = (s - MID) / (1. - MID);
        let k_0 = cs.c_mid;
        let k_1 = (1. - MID) * cs.c_mid * cs.c_mid * MID_INV * MID_INV / cs.c0;
        let k_2 = 1. - k_1 / (cs.c_max - cs.c_mid);
        k_0 + t * k_1 / (1. - k_2 * t)
    };

    rgb_from_oklab(Vector3d::new(l, chroma * a_, chroma * b_), c.alpha)
}

/// Okhwb, the whiteness/blackness view of Okhsv.
pub fn to_okhwb(c: Color) -> Color {
    let hsv = to_okhsv(c);
    c.with_channels(hsv.c0, (1. - hsv.c1) * hsv.c2, 1. - hsv.c2)
}

pub fn from_okhwb(c: Color) -> Color {
    let (h, w, b) = (c.c0, c.c1, c.c2);
    let v = 1. - b;
    let s = if v == 0. { 0. } else { 1. - w / v };
    from_okhsv(c.with_channels(h, s, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn white_has_unit_lightness() {
        let lab = to_oklab(Color::WHITE);
        assert_abs_diff_eq!(lab.c0, 1., epsilon = 1e-4);
        assert_abs_diff_eq!(lab.c1, 0., epsilon = 1e-4);
        assert_abs_diff_eq!(lab.c2, 0., epsilon = 1e-4);
    }

    #[test]
    fn ok_hue_models_round_trip() {
        let samples = [
            Color::rgb(12., 200., 77.),
            Color::rgb(250., 3., 190.),
            Color::rgb(30., 60., 250.),
            Color::rgb(128., 128., 128.),
            Color::rgb(0., 0., 0.),
        ];
        let pairs: [(fn(Color) -> Color, fn(Color) -> Color); 4] = [
            (to_oklab, from_oklab),
            (to_okhsv, from_okhsv),
            (to_okhsl, from_okhsl),
            (to_okhwb, from_okhwb),
        ];
        for (to, from) in pairs {
            for c in samples {
                let back = from(to(c));
                assert_abs_diff_eq!(back.c0, c.c0, epsilon = 1e-6);
                assert_abs_diff_eq!(back.c1, c.c1, epsilon = 1e-6);
                assert_abs_diff_eq!(back.c2, c.c2, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn okhsv_of_gray_is_unsaturated() {
        let hsv = to_okhsv(Color::gray(200.));
        assert_eq!(hsv.c1, 0.);
        assert!(hsv.c2 > 0.7);
        for v in [1., 64., 128., 254.] {
            let hsv = to_okhsv(Color::gray(v));
            assert_eq!((hsv.c0, hsv.c1), (0., 0.));
            let hsl = to_okhsl(Color::gray(v));
            assert_eq!((hsl.c0, hsl.c1), (0., 0.));
        }
    }

    #[test]
    fn matrix_pairs_are_inverse() {
        for id in [
            LINEAR_TO_LMS.mat_mul(LMS_TO_LINEAR),
            LMS_TO_OKLAB.mat_mul(OKLAB_TO_LMS),
        ] {
            for i in 0..3 {
                for j in 0..3 {
                    let expected = if i == j { 1. } else { 0. };
                    assert_abs_diff_eq!(id.v[i][j], expected, epsilon = 1e-13);
                }
            }
        }
    }

    #[test]
    fn oklab_round_trip_is_tight() {
        for c in [
            Color::rgb(255., 255., 0.),
            Color::rgb(255., 0., 0.),
            Color::rgb(3., 250., 140.),
            Color::WHITE,
        ] {
            let back = from_oklab(to_oklab(c));
            for i in 0..3 {
                assert_abs_diff_eq!(back[i], c[i], epsilon = 1e-9);
            }
        }
        let lab = to_oklab(Color::gray(90.));
        assert_abs_diff_eq!(lab.c1.hypot(lab.c2), 0., epsilon = 1e-12);
    }
}
