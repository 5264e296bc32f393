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
//! Opponent spaces built on a cone response with a power law: IPT, IgPgTg and JzAzBz.
use crate::color::Color;
use crate::conversions::xyz::{color_to_vector, rgb_from_xyz, vector_to_color, xyz_from_rgb};
use crate::math::{pow, spow};
use crate::matrix::{Matrix3d, Vector3d};

const IPT_LMS: Matrix3d = Matrix3d::new([
    [0.4002, 0.7075, -0.0807],
    [-0.2280, 1.1500, 0.0612],
    [0.0, 0.0, 0.9184],
]);

const IPT_LMS_INVERSE: Matrix3d = Matrix3d::new([
    [1.8502429449432056, -1.138301637867233, 0.2384349585087014],
    [0.3668307751713486, 0.6438845448402355, -0.010673443584379992],
    [0.0, 0.0, 1.088850174216028],
]);

const IPT: Matrix3d = Matrix3d::new([
    [0.4, 0.4, 0.2],
    [4.4550, -4.8510, 0.3960],
    [0.8056, 0.3572, -1.1628],
]);

const IPT_INVERSE: Matrix3d = Matrix3d::new([
    [1.0, 0.09756893051461392, 0.2052264331645916],
    [1.0, -0.11387648547314712, 0.13321715836999806],
    [1.0, 0.03261510991706641, -0.6768871830691793],
]);

const IPT_EXPONENT: f64 = 0.43;

/// IPT from XYZ scaled to `[0, 1]`.
pub fn to_ipt(c: Color) -> Color {
    let xyz = xyz_from_rgb(c) * 0.01;
    let lms = IPT_LMS.mul_vector(xyz).map(|v| spow(v, IPT_EXPONENT));
    vector_to_color(IPT.mul_vector(lms), c.alpha)
}

pub fn from_ipt(c: Color) -> Color {
    let lms = IPT_INVERSE
        .mul_vector(color_to_vector(c))
        .map(|v| spow(v, 1. / IPT_EXPONENT));
    rgb_from_xyz(IPT_LMS_INVERSE.mul_vector(lms) * 100., c.alpha)
}

const IGPGTG_LMS: Matrix3d = Matrix3d::new([
    [2.968, 2.741, -0.649],
    [1.237, 5.969, -0.173],
    [-0.318, 0.387, 2.311],
]);

const IGPGTG_LMS_INVERSE: Matrix3d = Matrix3d::new([
    [0.4343486855574634, -0.2063623701142842, 0.10653033617352772],
    [-0.08785463778363381, 0.20846346647992345, -0.009066845616854863],
    [0.07447971736457795, -0.06330532030466152, 0.44889031421761344],
]);

const IGPGTG: Matrix3d = Matrix3d::new([
    [0.117, 1.464, 0.130],
    [8.285, -8.361, 21.400],
    [-1.208, 2.412, -36.530],
]);

const IGPGTG_INVERSE: Matrix3d = Matrix3d::new([
    [0.581846461899246, 0.12331854793907822, 0.07431308420320766],
    [0.634548193791416, -0.009437923746683554, -0.0032707446752297835],
    [0.022656986516578326, -0.004701151874826368, -0.030048158824914566],
]);

/// Cone responses of the reference white.
const IGPGTG_NORMALIZATION: Vector3d = Vector3d::new(18.36, 21.46, 19435.);
const IGPGTG_EXPONENT: f64 = 0.427;

pub fn to_igpgtg(c: Color) -> Color {
    let xyz = xyz_from_rgb(c) * 0.01;
    let lms = IGPGTG_LMS.mul_vector(xyz);
    let n = IGPGTG_NORMALIZATION;
    let lms = Vector3d::new(
        spow(lms.v[0] / n.v[0], IGPGTG_EXPONENT),
        spow(lms.v[1] / n.v[1], IGPGTG_EXPONENT),
        spow(lms.v[2] / n.v[2], IGPGTG_EXPONENT),
    );
    vector_to_color(IGPGTG.mul_vector(lms), c.alpha)
}

pub fn from_igpgtg(c: Color) -> Color {
    let lms = IGPGTG_INVERSE
        .mul_vector(color_to_vector(c))
        .map(|v| spow(v, 1. / IGPGTG_EXPONENT))
        * IGPGTG_NORMALIZATION;
    rgb_from_xyz(IGPGTG_LMS_INVERSE.mul_vector(lms) * 100., c.alpha)
}

const JAB_B: f64 = 1.15;
const JAB_G: f64 = 0.66;
const JAB_C1: f64 = 3424. / 4096.;
const JAB_C2: f64 = 2413. / 128.;
const JAB_C3: f64 = 2392. / 128.;
const JAB_N: f64 = 2610. / 16384.;
const JAB_P: f64 = 1.7 * 2523. / 32.;
const JAB_D: f64 = -0.56;
const JAB_D0: f64 = 1.6295499532821566e-11;
/// Absolute luminance of the reference white in cd/m².
const JAB_PEAK: f64 = 10000.;

const JAB_LMS: Matrix3d = Matrix3d::new([
    [0.41478972, 0.579999, 0.0146480],
    [-0.2015100, 1.120649, 0.0531008],
    [-0.0166008, 0.264800, 0.6684799],
]);

const JAB_LMS_INVERSE: Matrix3d = Matrix3d::new([
    [1.9242264357876067, -1.0047923125953655, 0.03765140403061801],
    [0.35031676209499907, 0.7264811939316552, -0.06538442294808502],
    [-0.09098281098284758, -0.312728290523074, 1.5227665613052606],
]);

const JAB_IAB: Matrix3d = Matrix3d::new([
    [0.5, 0.5, 0.0],
    [3.524000, -4.066708, 0.542708],
    [0.199076, 1.096799, -1.295875],
]);

const JAB_IAB_INVERSE: Matrix3d = Matrix3d::new([
    [1.0, 0.1386050432715393, 0.058047316156118876],
    [1.0, -0.1386050432715393, -0.058047316156118876],
    [1.0, -0.09601924202631895, -0.811891896056039],
]);

/// SMPTE ST 2084 encoding.
#[inline]
fn perceptual_quantizer(v: f64) -> f64 {
    let v = pow(v / JAB_PEAK, JAB_N);
    pow((JAB_C1 + JAB_C2 * v) / (1. + JAB_C3 * v), JAB_P)
}

#[inline]
fn perceptual_quantizer_inverse(v: f64) -> f64 {
    let v = pow(v, 1. / JAB_P);
    JAB_PEAK * pow((JAB_C1 - v) / (JAB_C3 * v - JAB_C2), 1. / JAB_N)
}

/// JzAzBz, XYZ is taken as absolute with `Y = 100` for the white.
pub fn to_jab(c: Color) -> Color {
    let [x, y, z] = xyz_from_rgb(c).v;
    let xp = JAB_B * x - (JAB_B - 1.) * z;
    let yp = JAB_G * y - (JAB_G - 1.) * x;
    let lms = JAB_LMS
        .mul_vector(Vector3d::new(xp, yp, z))
        .map(perceptual_quantizer);
    let [iz, az, bz] = JAB_IAB.mul_vector(lms).v;
    let jz = (1. + JAB_D) * iz / (1. + JAB_D * iz) - JAB_D0;
    c.with_channels(jz, az, bz)
}

pub fn from_jab(c: Color) -> Color {
    let jz = c.c0 + JAB_D0;
    let iz = jz / (1. + JAB_D - JAB_D * jz);
    let lms = JAB_IAB_INVERSE
        .mul_vector(Vector3d::new(iz, c.c1, c.c2))
        .map(perceptual_quantizer_inverse);
    let [xp, yp, z] = JAB_LMS_INVERSE.mul_vector(lms).v;
    let x = (xp + (JAB_B - 1.) * z) / JAB_B;
    let y = (yp + (JAB_G - 1.) * x) / JAB_G;
    rgb_from_xyz(Vector3d::new(x, y, z), c.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn white_is_achromatic_in_ipt() {
        let ipt = to_ipt(Color::WHITE);
        assert_abs_diff_eq!(ipt.c1, 0., epsilon = 2e-2);
        assert_abs_diff_eq!(ipt.c2, 0., epsilon = 2e-2);
    }

    #[test]
    fn black_has_zero_jz() {
        let jab = to_jab(Color::BLACK);
        assert_abs_diff_eq!(jab.c0, 0., epsilon = 1e-9);
    }

    #[test]
    fn cone_spaces_round_trip() {
        let samples = [
            Color::rgb(12., 200., 77.),
            Color::rgb(250., 3., 190.),
            Color::rgb(128., 128., 128.),
            Color::WHITE,
        ];
        let pairs: [(fn(Color) -> Color, fn(Color) -> Color, f64); 3] = [
            (to_ipt, from_ipt, 1e-6),
            (to_igpgtg, from_igpgtg, 1e-6),
            (to_jab, from_jab, 1e-3),
        ];
        for (to, from, eps) in pairs {
            for c in samples {
                let back = from(to(c));
                assert_abs_diff_eq!(back.c0, c.c0, epsilon = eps);
                assert_abs_diff_eq!(back.c1, c.c1, epsilon = eps);
                assert_abs_diff_eq!(back.c2, c.c2, epsilon = eps);
            }
        }
    }
}
