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
//! Painter and designer oriented models: RYB, Paletton's warped HSV, Cubehelix and HCL.
use crate::color::{Color, MAX_CHANNEL};
use crate::conversions::hexagonal::{from_hsv, to_hsv};
use crate::math::{NEUTRAL_CHROMA, exp, newton_raphson, wrap};
use std::f64::consts::PI;
use tracing::trace;

/// Subtractive red/yellow/blue wheel, channels in `[0, 255]`.
pub fn to_ryb(c: Color) -> Color {
    let (mut r, mut g, mut b) = (c.c0, c.c1, c.c2);
    let white = r.min(g).min(b);
    r -= white;
    g -= white;
    b -= white;
    let max_green = r.max(g).max(b);

    let mut y = r.min(g);
    r -= y;
    g -= y;
    if b > 0. && g > 0. {
        b /= 2.;
        g /= 2.;
    }
    y += g;
    b += g;

    let max_yellow = r.max(y).max(b);
    if max_yellow > 0. {
        let n = max_green / max_yellow;
        r *= n;
        y *= n;
        b *= n;
    }
    c.with_channels(r + white, y + white, b + white)
}

pub fn from_ryb(c: Color) -> Color {
    let (mut r, mut y, mut b) = (c.c0, c.c1, c.c2);
    let white = r.min(y).min(b);
    r -= white;
    y -= white;
    b -= white;
    let max_yellow = r.max(y).max(b);

    let mut g = y.min(b);
    y -= g;
    b -= g;
    if b > 0. && g > 0. {
        b *= 2.;
        g *= 2.;
    }
    r += y;
    g += y;

    let max_green = r.max(g).max(b);
    if max_green > 0. {
        let n = max_yellow / max_green;
        r *= n;
        g *= n;
        b *= n;
    }
    c.with_channels(r + white, g + white, b + white)
}

#[derive(Debug, Copy, Clone)]
enum BandShape {
    Sine,
    Cosine,
}

/// One 60° sector of the hue warp.
#[derive(Debug, Copy, Clone)]
struct HueBand {
    hue: f64,
    warped: f64,
    width: f64,
    shape: BandShape,
}

const PALETTON_BANDS: [HueBand; 6] = [
    HueBand { hue: 0., warped: 0., width: 120., shape: BandShape::Sine },
    HueBand { hue: 60., warped: 120., width: 60., shape: BandShape::Cosine },
    HueBand { hue: 120., warped: 180., width: 30., shape: BandShape::Sine },
    HueBand { hue: 180., warped: 210., width: 45., shape: BandShape::Cosine },
    HueBand { hue: 240., warped: 255., width: 60., shape: BandShape::Sine },
    HueBand { hue: 300., warped: 315., width: 45., shape: BandShape::Cosine },
];

/// HSV hue to the artistic wheel, where red, yellow and blue sit 120° apart.
fn paletton_warp(h: f64) -> f64 {
    let h = wrap(h, 360.);
    let band = PALETTON_BANDS[((h / 60.) as usize).min(5)];
    let x = (h - band.hue) * PI / 120.;
    let shape = match band.shape {
        BandShape::Sine => x.sin(),
        BandShape::Cosine => 1. - x.cos(),
    };
    band.warped + band.width * shape
}

fn paletton_unwarp(p: f64) -> f64 {
    let p = wrap(p, 360.);
    let band = PALETTON_BANDS
        .iter()
        .rev()
        .find(|band| p >= band.warped)
        .copied()
        .unwrap_or(PALETTON_BANDS[0]);
    let u = ((p - band.warped) / band.width).clamp(0., 1.);
    let x = match band.shape {
        BandShape::Sine => u.asin(),
        BandShape::Cosine => (1. - u).acos(),
    };
    band.hue + x * 120. / PI
}

/// HSV with the hue on the artistic (RYB) wheel.
pub fn to_paletton_hsv(c: Color) -> Color {
    let hsv = to_hsv(c);
    hsv.with_channels(paletton_warp(hsv.c0), hsv.c1, hsv.c2)
}

pub fn from_paletton_hsv(c: Color) -> Color {
    from_hsv(c.with_channels(paletton_unwarp(c.c0), c.c1, c.c2))
}

const CUBEHELIX_A: f64 = -0.14861;
const CUBEHELIX_B: f64 = 1.78277;
const CUBEHELIX_C: f64 = -0.29227;
const CUBEHELIX_D: f64 = -0.90649;
const CUBEHELIX_E: f64 = 1.97294;
const CUBEHELIX_ED: f64 = CUBEHELIX_E * CUBEHELIX_D;
const CUBEHELIX_EB: f64 = CUBEHELIX_E * CUBEHELIX_B;
const CUBEHELIX_BC_DA: f64 = CUBEHELIX_B * CUBEHELIX_C - CUBEHELIX_D * CUBEHELIX_A;

/// Green's cubehelix, `(H, S, L)` with `L` in `[0, 1]`.
pub fn to_cubehelix(c: Color) -> Color {
    let (r, g, b) = (c.c0 / MAX_CHANNEL, c.c1 / MAX_CHANNEL, c.c2 / MAX_CHANNEL);
    let l = (CUBEHELIX_BC_DA * b + CUBEHELIX_ED * r - CUBEHELIX_EB * g)
        / (CUBEHELIX_BC_DA + CUBEHELIX_ED - CUBEHELIX_EB);
    let bl = b - l;
    let k = (CUBEHELIX_E * (g - l) - CUBEHELIX_C * bl) / CUBEHELIX_D;
    let den = CUBEHELIX_E * l * (1. - l);
    let s = if den == 0. { 0. } else { k.hypot(bl) / den };
    if s < NEUTRAL_CHROMA {
        return c.with_channels(0., 0., l);
    }
    let h = wrap(k.atan2(bl).to_degrees() - 120., 360.);
    c.with_channels(h, s, l)
}

pub fn from_cubehelix(c: Color) -> Color {
    let (h, s, l) = (c.c0, c.c1, c.c2);
    let a = s * l * (1. - l);
    let (sin, cos) = (h + 120.).to_radians().sin_cos();
    c.with_channels(
        MAX_CHANNEL * (l + a * (CUBEHELIX_A * cos + CUBEHELIX_B * sin)),
        MAX_CHANNEL * (l + a * (CUBEHELIX_C * cos + CUBEHELIX_D * sin)),
        MAX_CHANNEL * (l + a * CUBEHELIX_E * cos),
    )
}

const HCL_GAMMA: f64 = 3.;
const HCL_Y0: f64 = 100.;

/// Sarifuddin and Missaoui HCL, `(H, C, L)`.
pub fn to_hcl(c: Color) -> Color {
    let (r, g, b) = (c.c0, c.c1, c.c2);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let alpha = if max == 0. { 0. } else { min / max / HCL_Y0 };
    let q = exp(alpha * HCL_GAMMA);
    let l = (q * max + (q - 1.) * min) / 2.;
    let (rg, gb, br) = (r - g, g - b, b - r);
    let chroma = q * (rg.abs() + gb.abs() + br.abs()) / 3.;
    let h = if rg == 0. && gb == 0. {
        0.
    } else {
        let h0 = if rg != 0. {
            (gb / rg).atan().to_degrees()
        } else {
            90f64.copysign(gb)
        };
        match (rg >= 0., gb >= 0.) {
            (true, true) => 2. / 3. * h0,
            (true, false) => 4. / 3. * h0,
            (false, true) => 180. + 4. / 3. * h0,
            (false, false) => 2. / 3. * h0 - 180.,
        }
    };
    c.with_channels(wrap(h, 360.), chroma, l)
}

pub fn from_hcl(c: Color) -> Color {
    let (h, chroma, l) = (c.c0, c.c1, c.c2);
    if l <= 0. {
        return c.with_channels(0., 0., 0.);
    }
    // Solve for rho = min / max.
    let q = chroma / l;
    let ratio = |rho: f64| {
        let qq = exp(rho * HCL_GAMMA / HCL_Y0);
        4. * (1. - rho) * qq - 3. * q * (qq + (qq - 1.) * rho)
    };
    let rho = newton_raphson(ratio, 1. - 0.75 * q, None);
    trace!(iterations = rho.iterations, "HCL inverse");
    let rho = rho.x;
    let qq = exp(rho * HCL_GAMMA / HCL_Y0);
    let max = 2. * l / (qq + (qq - 1.) * rho);
    let min = rho * max;
    let range = max - min;

    let mut h = wrap(h, 360.);
    if h > 180. {
        h -= 360.;
    }
    let (sign, psi) = if (0. ..=60.).contains(&h) {
        (1., 1.5 * h)
    } else if (-120. ..0.).contains(&h) {
        (1., 0.75 * h)
    } else if h > 60. && h <= 180. {
        (-1., 0.75 * (h - 180.))
    } else {
        (-1., 1.5 * (h + 180.))
    };
    let (sin, cos) = psi.to_radians().sin_cos();
    let (mut d1, mut d2) = (sign * cos, sign * sin);
    let spread = d1.abs() + d2.abs() + (d1 + d2).abs();
    let k = if spread > 0. { 2. * range / spread } else { 0. };
    d1 *= k;
    d2 *= k;
    let b = min - 0f64.min(d2).min(d1 + d2);
    let g = b + d2;
    let r = g + d1;
    c.with_channels(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn green_sits_opposite_red_on_the_artistic_wheel() {
        let p = to_paletton_hsv(Color::rgb(0., 255., 0.));
        assert_abs_diff_eq!(p.c0, 180., epsilon = 1e-9);
        let ryb = to_ryb(Color::rgb(0., 255., 0.));
        assert_eq!(ryb, Color::rgb(0., 255., 255.));
    }

    #[test]
    fn hcl_of_red() {
        let hcl = to_hcl(Color::rgb(255., 0., 0.));
        assert_abs_diff_eq!(hcl.c0, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(hcl.c1, 170., epsilon = 1e-9);
        assert_abs_diff_eq!(hcl.c2, 127.5, epsilon = 1e-9);
    }

    #[test]
    fn cubehelix_extremes() {
        assert_eq!(to_cubehelix(Color::BLACK), Color::BLACK);
        let white = to_cubehelix(Color::WHITE);
        assert_eq!(white.c1, 0.);
        assert_abs_diff_eq!(white.c2, 1., epsilon = 1e-12);
    }

    #[test]
    fn artistic_round_trips() {
        let pairs: [(fn(Color) -> Color, fn(Color) -> Color); 4] = [
            (to_ryb, from_ryb),
            (to_paletton_hsv, from_paletton_hsv),
            (to_cubehelix, from_cubehelix),
            (to_hcl, from_hcl),
        ];
        for (to, from) in pairs {
            for c in [
                Color::rgb(12., 200., 77.),
                Color::rgb(250., 3., 190.),
                Color::rgb(128., 128., 128.),
                Color::rgb(255., 0., 0.),
                Color::BLACK,
            ] {
                let back = from(to(c));
                assert_abs_diff_eq!(back.c0, c.c0, epsilon = 1e-6);
                assert_abs_diff_eq!(back.c1, c.c1, epsilon = 1e-6);
                assert_abs_diff_eq!(back.c2, c.c2, epsilon = 1e-6);
            }
        }
    }
}
