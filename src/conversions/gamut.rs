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
//! sRGB gamut boundary in Oklab, used by Okhsv and Okhsl.
use crate::conversions::oklab::{LMS_TO_LINEAR, OKLAB_TO_LMS, oklab_to_linear};
use crate::math::cbrt;
use crate::matrix::Vector3d;

/// Lightness and chroma of the cusp for a hue direction.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Cusp {
    pub(crate) l: f64,
    pub(crate) c: f64,
}

/// `S = C_cusp / L_cusp`, `T = C_cusp / (1 - L_cusp)`.
#[derive(Debug, Copy, Clone)]
pub(crate) struct St {
    pub(crate) s: f64,
    pub(crate) t: f64,
}

/// Chroma anchors for a hue and lightness.
#[derive(Debug, Copy, Clone)]
pub(crate) struct ChromaBounds {
    pub(crate) c0: f64,
    pub(crate) c_mid: f64,
    pub(crate) c_max: f64,
}

#[inline]
fn lms_direction(a: f64, b: f64) -> (f64, f64, f64) {
    let m = &OKLAB_TO_LMS.v;
    (
        m[0][1] * a + m[0][2] * b,
        m[1][1] * a + m[1][2] * b,
        m[2][1] * a + m[2][2] * b,
    )
}

/// Maximum saturation `C / L` inside sRGB for the unit hue `(a, b)`.
pub(crate) fn compute_max_saturation(a: f64, b: f64) -> f64 {
    // Max saturation will be when one of r, g or b goes below zero.
    let (k0, k1, k2, k3, k4, [wl, wm, ws]) = if -1.88170328 * a - 0.80936493 * b > 1.0 {
        // Red component
        (
            1.19086277,
            1.76576728,
            0.59662641,
            0.75515197,
            0.56771245,
            LMS_TO_LINEAR.v[0],
        )
    } else if 1.81444104 * a - 1.19445276 * b > 1.0 {
        // Green component
        (
            0.73956515,
            -0.45954404,
            0.08285427,
            0.12541070,
            0.14503204,
            LMS_TO_LINEAR.v[1],
        )
    } else {
        // Blue component
        (
            1.35733652,
            -0.00915799,
            -1.15130210,
            -0.50559606,
            0.00692167,
            LMS_TO_LINEAR.v[2],
        )
    };

    let mut saturation = k0 + k1 * a + k2 * b + k3 * a * a + k4 * a * b;

    // One Halley step
    let (k_l, k_m, k_s) = lms_direction(a, b);

    let l_ = 1.0 + saturation * k_l;
    let m_ = 1.0 + saturation * k_m;
    let s_ = 1.0 + saturation * k_s;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let l_d_s = 3.0 * k_l * l_ * l_;
    let m_d_s = 3.0 * k_m * m_ * m_;
    let s_d_s = 3.0 * k_s * s_ * s_;

    let l_d_s2 = 6.0 * k_l * k_l * l_;
    let m_d_s2 = 6.0 * k_m * k_m * m_;
    let s_d_s2 = 6.0 * k_s * k_s * s_;

    let f = wl * l + wm * m + ws * s;
    let f1 = wl * l_d_s + wm * m_d_s + ws * s_d_s;
    let f2 = wl * l_d_s2 + wm * m_d_s2 + ws * s_d_s2;

    saturation -= f * f1 / (f1 * f1 - 0.5 * f * f2);
    saturation
}

pub(crate) fn find_cusp(a: f64, b: f64) -> Cusp {
    let s_cusp = compute_max_saturation(a, b);
    let rgb_at_max = oklab_to_linear(Vector3d::new(1., s_cusp * a, s_cusp * b));
    let l_cusp = cbrt(1. / rgb_at_max.v[0].max(rgb_at_max.v[1]).max(rgb_at_max.v[2]));
    Cusp {
        l: l_cusp,
        c: l_cusp * s_cusp,
    }
}

/// Parameter `t` where the line `L = L0 (1 - t) + t L1`, `C = t C1` leaves the gamut.
pub(crate) fn find_gamut_intersection(a: f64, b: f64, l1: f64, c1: f64, l0: f64, cusp: Cusp) -> f64 {
    if ((l1 - l0) * cusp.c - (cusp.l - l0) * c1) <= 0.0 {
        // Lower half
        return cusp.c * l0 / (c1 * cusp.l + cusp.c * (l0 - l1));
    }

    // Upper half, intersect with the triangle first
    let mut t = cusp.c * (l0 - 1.0) / (c1 * (cusp.l - 1.0) + cusp.c * (l0 - l1));

    let dl = l1 - l0;
    let dc = c1;
    let (k_l, k_m, k_s) = lms_direction(a, b);

    let l_dt = dl + dc * k_l;
    let m_dt = dl + dc * k_m;
    let s_dt = dl + dc * k_s;

    // One Halley step
    let ll = l0 * (1.0 - t) + t * l1;
    let cc = t * c1;

    let l_ = ll + cc * k_l;
    let m_ = ll + cc * k_m;
    let s_ = ll + cc * k_s;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let ldt = 3.0 * l_dt * l_ * l_;
    let mdt = 3.0 * m_dt * m_ * m_;
    let sdt = 3.0 * s_dt * s_ * s_;

    let ldt2 = 6.0 * l_dt * l_dt * l_;
    let mdt2 = 6.0 * m_dt * m_dt * m_;
    let sdt2 = 6.0 * s_dt * s_dt * s_;

    let step = |w0: f64, w1: f64, w2: f64| {
        let r = w0 * l + w1 * m + w2 * s - 1.0;
        let r1 = w0 * ldt + w1 * mdt + w2 * sdt;
        let r2 = w0 * ldt2 + w1 * mdt2 + w2 * sdt2;
        let u = r1 / (r1 * r1 - 0.5 * r * r2);
        if u >= 0.0 { -r * u } else { f64::MAX }
    };

    let [t_r, t_g, t_b] = LMS_TO_LINEAR.v.map(|[w0, w1, w2]| step(w0, w1, w2));

    t += t_r.min(t_g.min(t_b));
    t
}

const K1: f64 = 0.206;
const K2: f64 = 0.03;
const K3: f64 = (1.0 + K1) / (1.0 + K2);

/// Lightness warp that makes Oklab `L` closer to CIE `L*` near black.
#[inline]
pub(crate) fn toe(x: f64) -> f64 {
    let v = K3 * x - K1;
    0.5 * (v + (v * v + 4.0 * K2 * K3 * x).sqrt())
}

#[inline]
pub(crate) fn toe_inv(x: f64) -> f64 {
    (x * x + K1 * x) / (K3 * (x + K2))
}

#[inline]
pub(crate) fn to_st(cusp: Cusp) -> St {
    St {
        s: cusp.c / cusp.l,
        t: cusp.c / (1.0 - cusp.l),
    }
}

/// Smooth approximation of the cusp `ST` used for mid chroma.
pub(crate) fn get_st_mid(a: f64, b: f64) -> St {
    let s = 0.11516993
        + 1.0
            / (7.44778970
                + 4.15901240 * b
                + a * (-2.19557347
                    + 1.75198401 * b
                    + a * (-2.13704948 - 10.02301043 * b
                        + a * (-4.24894561 + 5.38770819 * b + 4.69891013 * a))));

    let t = 0.11239642
        + 1.0
            / (1.61320320 - 0.68124379 * b
                + a * (0.40370612
                    + 0.90148123 * b
                    + a * (-0.27087943
                        + 0.61223990 * b
                        + a * (0.00299215 - 0.45399568 * b - 0.14661872 * a))));

    St { s, t }
}

pub(crate) fn get_cs(l: f64, a: f64, b: f64) -> ChromaBounds {
    let cusp = find_cusp(a, b);

    let c_max = find_gamut_intersection(a, b, l, 1.0, l, cusp);
    let st_max = to_st(cusp);

    // Compensates for the curved part of the gamut
    let k = c_max / (l * st_max.s).min((1.0 - l) * st_max.t);

    let c_mid = {
        let st_mid = get_st_mid(a, b);
        let c_a = l * st_mid.s;
        let c_b = (1.0 - l) * st_mid.t;
        0.9 * k
            * (1.0 / (1.0 / (c_a * c_a * c_a * c_a) + 1.0 / (c_b * c_b * c_b * c_b)))
                .sqrt()
                .sqrt()
    };

    let c0 = {
        // hue independent
        let c_a = l * 0.4;
        let c_b = (1.0 - l) * 0.8;
        (1.0 / (1.0 / (c_a * c_a) + 1.0 / (c_b * c_b))).sqrt()
    };

    ChromaBounds { c0, c_mid, c_max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn toe_is_invertible() {
        for x in [0., 0.1, 0.5, 0.9, 1.] {
            assert_abs_diff_eq!(toe_inv(toe(x)), x, epsilon = 1e-12);
        }
    }

    #[test]
    fn cusp_lies_on_gamut_edge() {
        let h = 1.2f64;
        let (a, b) = (h.cos(), h.sin());
        let cusp = find_cusp(a, b);
        let rgb = oklab_to_linear(Vector3d::new(cusp.l, cusp.c * a, cusp.c * b));
        let max = rgb.v[0].max(rgb.v[1]).max(rgb.v[2]);
        assert_abs_diff_eq!(max, 1., epsilon = 1e-6);
    }
}
