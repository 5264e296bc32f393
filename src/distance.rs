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
//! Color difference metrics. Unless noted, inputs are sRGB and the metric works on CIE L\*a\*b\*.
use crate::color::Color;
use crate::colorspace::ColorSpace;
use crate::conversions::{to_jch, to_lab, xyz_from_rgb};
use crate::math::wrap;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Euclidean distance between `c1` and `c2` after converting both to `space`.
pub fn delta_e_euclidean(c1: Color, c2: Color, space: ColorSpace) -> f64 {
    space.forward(c1).euclidean_distance(space.forward(c2))
}

/// CIE76, Euclidean distance in L\*a\*b\*.
pub fn delta_e_cie(c1: Color, c2: Color) -> f64 {
    delta_e_euclidean(c1, c2, ColorSpace::Lab)
}

/// `ΔL, ΔC, ΔH²` of two Lab values, reference first.
#[inline]
fn lab_deltas(lab1: Color, lab2: Color) -> (f64, f64, f64, f64) {
    let c1 = lab1.c1.hypot(lab1.c2);
    let c2 = lab2.c1.hypot(lab2.c2);
    let dl = lab1.c0 - lab2.c0;
    let dc = c1 - c2;
    let da = lab1.c1 - lab2.c1;
    let db = lab1.c2 - lab2.c2;
    let dh2 = (da * da + db * db - dc * dc).max(0.);
    (c1, dl, dc, dh2)
}

/// Weights of CIE94.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaE94 {
    pub kl: f64,
    pub kc: f64,
    pub kh: f64,
    pub k1: f64,
    pub k2: f64,
}

impl DeltaE94 {
    pub const GRAPHIC_ARTS: DeltaE94 = DeltaE94 {
        kl: 1.,
        kc: 1.,
        kh: 1.,
        k1: 0.045,
        k2: 0.015,
    };

    pub const TEXTILES: DeltaE94 = DeltaE94 {
        kl: 2.,
        kc: 1.,
        kh: 1.,
        k1: 0.048,
        k2: 0.014,
    };
}

impl Default for DeltaE94 {
    fn default() -> Self {
        DeltaE94::GRAPHIC_ARTS
    }
}

/// CIE94. Not symmetric, `c1` is the reference.
pub fn delta_e_94(c1: Color, c2: Color, weights: DeltaE94) -> f64 {
    let (chroma1, dl, dc, dh2) = lab_deltas(to_lab(c1), to_lab(c2));
    let sc = 1. + weights.k1 * chroma1;
    let sh = 1. + weights.k2 * chroma1;
    let l = dl / weights.kl;
    let c = dc / (weights.kc * sc);
    let h2 = dh2 / (weights.kh * sh * weights.kh * sh);
    (l * l + c * c + h2).sqrt()
}

/// Lightness and chroma weights of CMC l:c.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaECmc {
    pub l: f64,
    pub c: f64,
}

impl DeltaECmc {
    /// 1:1, perceptibility.
    pub const PERCEPTIBILITY: DeltaECmc = DeltaECmc { l: 1., c: 1. };
    /// 2:1, acceptability.
    pub const ACCEPTABILITY: DeltaECmc = DeltaECmc { l: 2., c: 1. };
}

impl Default for DeltaECmc {
    fn default() -> Self {
        DeltaECmc::PERCEPTIBILITY
    }
}

/// CMC l:c. Not symmetric, `c1` is the reference.
pub fn delta_e_cmc(c1: Color, c2: Color, weights: DeltaECmc) -> f64 {
    let lab1 = to_lab(c1);
    let (chroma1, dl, dc, dh2) = lab_deltas(lab1, to_lab(c2));
    let l1 = lab1.c0;
    let sl = if l1 < 16. {
        0.511
    } else {
        0.040975 * l1 / (1. + 0.01765 * l1)
    };
    let sc = 0.0638 * chroma1 / (1. + 0.0131 * chroma1) + 0.638;
    let h1 = wrap(lab1.c2.atan2(lab1.c1).to_degrees(), 360.);
    let t = if (164. ..=345.).contains(&h1) {
        0.56 + (0.2 * (h1 + 168.).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (h1 + 35.).to_radians().cos()).abs()
    };
    let c4 = chroma1 * chroma1 * chroma1 * chroma1;
    let f = (c4 / (c4 + 1900.)).sqrt();
    let sh = sc * (f * t + 1. - f);
    let l = dl / (weights.l * sl);
    let c = dc / (weights.c * sc);
    (l * l + c * c + dh2 / (sh * sh)).sqrt()
}

/// Parametric factors of CIEDE2000.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaE2000 {
    pub kl: f64,
    pub kc: f64,
    pub kh: f64,
}

impl Default for DeltaE2000 {
    fn default() -> Self {
        DeltaE2000 {
            kl: 1.,
            kc: 1.,
            kh: 1.,
        }
    }
}

#[inline]
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0. && b == 0. {
        0.
    } else {
        wrap(b.atan2(a).to_degrees(), 360.)
    }
}

/// 25⁷
const POW25_7: f64 = 6103515625.;

/// CIEDE2000 on two L\*a\*b\* values.
pub fn ciede2000(lab1: Color, lab2: Color, weights: DeltaE2000) -> f64 {
    let (l1, a1, b1) = (lab1.c0, lab1.c1, lab1.c2);
    let (l2, a2, b2) = (lab2.c0, lab2.c1, lab2.c2);

    let c_ab_mean = (a1.hypot(b1) + a2.hypot(b2)) / 2.;
    let c_ab_mean7 = c_ab_mean.powi(7);
    let g = 0.5 * (1. - (c_ab_mean7 / (c_ab_mean7 + POW25_7)).sqrt());

    let a1p = a1 * (1. + g);
    let a2p = a2 * (1. + g);
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let h1p = hue_angle(a1p, b1);
    let h2p = hue_angle(a2p, b2);

    let dlp = l2 - l1;
    let dcp = c2p - c1p;
    let chroma_product = c1p * c2p;

    let dhp = if chroma_product == 0. {
        0.
    } else {
        let d = h2p - h1p;
        if d.abs() <= 180. {
            d
        } else if d > 180. {
            d - 360.
        } else {
            d + 360.
        }
    };
    let dhp_big = 2. * chroma_product.sqrt() * (dhp.to_radians() / 2.).sin();

    let lp_mean = (l1 + l2) / 2.;
    let cp_mean = (c1p + c2p) / 2.;
    let hp_mean = if chroma_product == 0. {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180. {
        (h1p + h2p) / 2.
    } else if h1p + h2p < 360. {
        (h1p + h2p + 360.) / 2.
    } else {
        (h1p + h2p - 360.) / 2.
    };

    let hr = hp_mean.to_radians();
    let t = 1. - 0.17 * (hr - PI / 6.).cos() + 0.24 * (2. * hr).cos()
        + 0.32 * (3. * hr + PI / 30.).cos()
        - 0.20 * (4. * hr - 63f64.to_radians()).cos();

    let lm50 = (lp_mean - 50.) * (lp_mean - 50.);
    let sl = 1. + 0.015 * lm50 / (20. + lm50).sqrt();
    let sc = 1. + 0.045 * cp_mean;
    let sh = 1. + 0.015 * cp_mean * t;

    let delta_theta = 30. * (-((hp_mean - 275.) / 25.).powi(2)).exp();
    let cp_mean7 = cp_mean.powi(7);
    let rc = 2. * (cp_mean7 / (cp_mean7 + POW25_7)).sqrt();
    let rt = -(2. * delta_theta).to_radians().sin() * rc;

    let tl = dlp / (weights.kl * sl);
    let tc = dcp / (weights.kc * sc);
    let th = dhp_big / (weights.kh * sh);
    (tl * tl + tc * tc + th * th + rt * tc * th).sqrt()
}

/// CIEDE2000 between two sRGB colors.
pub fn delta_e_2000(c1: Color, c2: Color, weights: DeltaE2000) -> f64 {
    ciede2000(to_lab(c1), to_lab(c2), weights)
}

/// HyAB, city block lightness plus Euclidean chromatic distance.
pub fn delta_e_hyab(c1: Color, c2: Color) -> f64 {
    let lab1 = to_lab(c1);
    let lab2 = to_lab(c2);
    (lab1.c0 - lab2.c0).abs() + (lab1.c1 - lab2.c1).hypot(lab1.c2 - lab2.c2)
}

/// ΔEz on JzCzhz.
pub fn delta_e_z(c1: Color, c2: Color) -> f64 {
    let jch1 = to_jch(c1);
    let jch2 = to_jch(c2);
    let dj = jch1.c0 - jch2.c0;
    let dc = jch1.c1 - jch2.c1;
    let dh = (jch1.c2 - jch2.c2).to_radians();
    let dh_big = 2. * (jch1.c1 * jch2.c1).sqrt() * (dh / 2.).sin();
    (dj * dj + dc * dc + dh_big * dh_big).sqrt()
}

/// Signed L\*a\*b\* chroma difference `C2 - C1`.
pub fn delta_c(c1: Color, c2: Color) -> f64 {
    let lab1 = to_lab(c1);
    let lab2 = to_lab(c2);
    lab2.c1.hypot(lab2.c2) - lab1.c1.hypot(lab1.c2)
}

/// L\*a\*b\* hue difference, what remains of ΔE76 after lightness and chroma.
pub fn delta_h(c1: Color, c2: Color) -> f64 {
    let (_, _, _, dh2) = lab_deltas(to_lab(c1), to_lab(c2));
    dh2.sqrt()
}

/// Stone, Szafir and Setlur noticeable difference model, `ND(p, s) = p (A + B / s)`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeableDifference {
    /// Proportion of observers that must notice.
    pub p: f64,
    /// Mark size in degrees of visual angle.
    pub s: f64,
}

impl Default for NoticeableDifference {
    fn default() -> Self {
        NoticeableDifference { p: 0.5, s: 0.1 }
    }
}

impl NoticeableDifference {
    const A: [f64; 3] = [10.16, 10.68, 10.70];
    const B: [f64; 3] = [1.50, 3.08, 5.74];

    /// Per channel L\*, a\*, b\* thresholds.
    pub fn thresholds(&self) -> [f64; 3] {
        let nd = |i: usize| self.p * (Self::A[i] + Self::B[i] / self.s);
        [nd(0), nd(1), nd(2)]
    }
}

/// True when any L\*a\*b\* channel differs by at least its threshold.
pub fn noticeably_different(c1: Color, c2: Color, params: NoticeableDifference) -> bool {
    let lab1 = to_lab(c1);
    let lab2 = to_lab(c2);
    let nd = params.thresholds();
    (0..3).any(|i| (lab1[i] - lab2[i]).abs() >= nd[i])
}

/// WCAG contrast ratio, always `>= 1`.
pub fn contrast_ratio(c1: Color, c2: Color) -> f64 {
    let y1 = xyz_from_rgb(c1).v[1] / 100.;
    let y2 = xyz_from_rgb(c2).v[1] / 100.;
    let (hi, lo) = if y1 >= y2 { (y1, y2) } else { (y2, y1) };
    (hi + 0.05) / (lo + 0.05)
}
