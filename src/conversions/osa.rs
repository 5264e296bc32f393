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
//! OSA-UCS `(L, j, g)`. The inverse has no closed form and is solved numerically.
use crate::color::Color;
use crate::conversions::xyz::{rgb_from_xyz, xyz_from_rgb};
use crate::math::{cbrt, newton_raphson};
use crate::matrix::{Matrix3d, Vector3d};
use std::f64::consts::SQRT_2;
use tracing::trace;

const OSA_RGB: Matrix3d = Matrix3d::new([
    [0.7990, 0.4194, -0.1648],
    [-0.4493, 1.3265, 0.0927],
    [-0.1149, 0.3394, 0.7170],
]);

const OSA_RGB_INVERSE: Matrix3d = Matrix3d::new([
    [1.0626182651259473, -0.4120917485671995, 0.29751798491622805],
    [0.35992664548481607, 0.6400721081119282, -2.6183048923367774e-05],
    [-8.96301458510873e-05, -0.3690234524456899, 1.4423901018042946],
]);

const LIGHTNESS_OFFSET: f64 = 14.3993;
const LAMBDA_SCALE: f64 = 5.9;

/// Luminance factor `K` from the chromaticity of `xyz`.
#[inline]
fn luminance_factor(xyz: Vector3d) -> f64 {
    let [x, y, z] = xyz.v;
    let s = x + y + z;
    if s == 0. {
        return 1.8103;
    }
    let (cx, cy) = (x / s, y / s);
    4.4934 * cx * cx + 4.3034 * cy * cy - 4.276 * cx * cy - 1.3744 * cx - 2.5643 * cy + 1.8103
}

pub fn to_osa(c: Color) -> Color {
    let xyz = xyz_from_rgb(c);
    let y0 = xyz.v[1] * luminance_factor(xyz);
    let t = cbrt(y0) - 2. / 3.;
    let lambda = LAMBDA_SCALE * (t + 0.042 * cbrt(y0 - 30.));
    let scale = lambda / (LAMBDA_SCALE * t);
    let [r, g, b] = OSA_RGB.mul_vector(xyz).map(cbrt).v;
    c.with_channels(
        (lambda - LIGHTNESS_OFFSET) / SQRT_2,
        scale * (1.7 * r + 8. * g - 9.7 * b),
        scale * (-13.7 * r + 17.7 * g - 4. * b),
    )
}

pub fn from_osa(c: Color) -> Color {
    let (l, j, g) = (c.c0, c.c1, c.c2);
    let lambda = SQRT_2 * l + LIGHTNESS_OFFSET;

    // Y0 from lightness, through u = cbrt(Y0 - 30).
    let target = lambda / LAMBDA_SCALE;
    let lightness = |u: f64| cbrt(u * u * u + 30.) - 2. / 3. + 0.042 * u - target;
    let u0 = cbrt((target + 2. / 3.).powi(3).max(0.) - 30.);
    let u = newton_raphson(lightness, u0, Some(cbrt(-30.)));
    let y0 = u.x * u.x * u.x + 30.;
    let t = cbrt(y0) - 2. / 3.;
    let scale = lambda / (LAMBDA_SCALE * t);
    let (jc, gc) = (j / scale, g / scale);

    // Particular solution of the (j, g) system with b = 0, the cone triple is then (pr + s, pg + s, s).
    let det = 1.7 * 17.7 + 8. * 13.7;
    let pr = (jc * 17.7 - 8. * gc) / det;
    let pg = (1.7 * gc + 13.7 * jc) / det;
    let xyz_of = |s: f64| {
        let rgb = Vector3d::new(pr + s, pg + s, s).map(|v| v * v * v);
        OSA_RGB_INVERSE.mul_vector(rgb)
    };
    let luminance = |s: f64| {
        let xyz = xyz_of(s);
        xyz.v[1] * luminance_factor(xyz) - y0
    };
    let s0 = cbrt(y0.max(0.)) - (pr + pg) / 3.;
    let s = newton_raphson(luminance, s0, None);
    trace!(
        lightness_iterations = u.iterations,
        shift_iterations = s.iterations,
        "OSA-UCS inverse"
    );
    rgb_from_xyz(xyz_of(s.x), c.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn osa_round_trips() {
        for c in [
            Color::rgb(12., 200., 77.),
            Color::rgb(250., 3., 190.),
            Color::rgb(128., 128., 128.),
            Color::WHITE,
        ] {
            let back = from_osa(to_osa(c));
            assert_abs_diff_eq!(back.c0, c.c0, epsilon = 1e-2);
            assert_abs_diff_eq!(back.c1, c.c1, epsilon = 1e-2);
            assert_abs_diff_eq!(back.c2, c.c2, epsilon = 1e-2);
        }
    }

    #[test]
    fn black_stays_finite() {
        let osa = to_osa(Color::BLACK);
        assert!(osa.is_finite());
        assert!(from_osa(osa).is_finite());
    }
}
