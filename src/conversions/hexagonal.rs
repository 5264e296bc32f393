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
//! Hexagonal hue models built on a shared hue/chroma decomposition.
use crate::color::{Color, MAX_CHANNEL};
use crate::math::wrap;

/// Hue, chroma, max and min of an RGB triple.
#[derive(Debug, Copy, Clone)]
struct HueChroma {
    hue: f64,
    chroma: f64,
    max: f64,
    min: f64,
}

#[inline]
fn hue_chroma(c: Color) -> HueChroma {
    let (r, g, b) = (c.c0, c.c1, c.c2);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let hue = if chroma == 0. {
        0.
    } else if max == r {
        let h = 60. * (g - b) / chroma;
        if g < b { h + 360. } else { h }
    } else if max == g {
        60. * (2. + (b - r) / chroma)
    } else {
        60. * (4. + (r - g) / chroma)
    };
    HueChroma {
        hue,
        chroma,
        max,
        min,
    }
}

/// Sector decoding of hue + chroma, offset by `m`.
#[inline]
fn hcx(c: Color, hue: f64, chroma: f64, m: f64) -> Color {
    let hh = wrap(hue / 60., 6.);
    let x = chroma * (1. - (hh % 2. - 1.).abs());
    let (r, g, b) = match hh.floor() as i32 {
        0 => (chroma, x, 0.),
        1 => (x, chroma, 0.),
        2 => (0., chroma, x),
        3 => (0., x, chroma),
        4 => (x, 0., chroma),
        _ => (chroma, 0., x),
    };
    c.with_channels(r + m, g + m, b + m)
}

/// Hexagonal hue in degrees.
pub fn hue(c: Color) -> f64 {
    hue_chroma(c).hue
}

/// Hue of the polar projection `atan2(√3(g - b), 2r - g - b)` in degrees `[0, 360)`.
pub fn hue_polar(c: Color) -> f64 {
    let a = 2. * c.c0 - c.c1 - c.c2;
    let b = 3f64.sqrt() * (c.c1 - c.c2);
    wrap(b.atan2(a).to_degrees(), 360.)
}

pub fn to_hsv(c: Color) -> Color {
    let hc = hue_chroma(c);
    let s = if hc.max == 0. { 0. } else { hc.chroma / hc.max };
    c.with_channels(hc.hue, s, hc.max / MAX_CHANNEL)
}

pub fn from_hsv(c: Color) -> Color {
    let v = c.c2 * MAX_CHANNEL;
    let chroma = v * c.c1;
    hcx(c, c.c0, chroma, v - chroma)
}

pub fn to_hsl(c: Color) -> Color {
    let hc = hue_chroma(c);
    let l = (hc.max + hc.min) / (2. * MAX_CHANNEL);
    let d = 1. - (2. * l - 1.).abs();
    let s = if d == 0. {
        0.
    } else {
        hc.chroma / MAX_CHANNEL / d
    };
    c.with_channels(hc.hue, s, l)
}

pub fn from_hsl(c: Color) -> Color {
    let (h, s, l) = (c.c0, c.c1, c.c2);
    let chroma = (1. - (2. * l - 1.).abs()) * s * MAX_CHANNEL;
    hcx(c, h, chroma, l * MAX_CHANNEL - chroma / 2.)
}

pub fn to_hsi(c: Color) -> Color {
    let hc = hue_chroma(c);
    let i = (c.c0 + c.c1 + c.c2) / 3.;
    let s = if i == 0. { 0. } else { 1. - hc.min / i };
    c.with_channels(hc.hue, s, i / MAX_CHANNEL)
}

pub fn from_hsi(c: Color) -> Color {
    let (h, s) = (c.c0, c.c1);
    let i = c.c2 * MAX_CHANNEL;
    let hh = wrap(h / 60., 6.);
    let z = 1. - (hh % 2. - 1.).abs();
    let chroma = 3. * i * s / (1. + z);
    hcx(c, h, chroma, i * (1. - s))
}

pub fn to_hwb(c: Color) -> Color {
    let hc = hue_chroma(c);
    c.with_channels(hc.hue, hc.min / MAX_CHANNEL, 1. - hc.max / MAX_CHANNEL)
}

pub fn from_hwb(c: Color) -> Color {
    let (h, w, b) = (c.c0, c.c1, c.c2);
    if w + b >= 1. {
        let g = MAX_CHANNEL * w / (w + b);
        return c.with_channels(g, g, g);
    }
    let v = 1. - b;
    let s = 1. - w / v;
    from_hsv(c.with_channels(h, s, v))
}

const GLHS_W_MIN: f64 = 0.1;
const GLHS_W_MID: f64 = 0.2;
const GLHS_W_MAX: f64 = 0.7;

/// Generalized LHS. Output order is `(L, H, S)`.
pub fn to_glhs(c: Color) -> Color {
    let (r, g, b) = (c.c0 / MAX_CHANNEL, c.c1 / MAX_CHANNEL, c.c2 / MAX_CHANNEL);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let mid = r + g + b - max - min;
    let l = GLHS_W_MAX * max + GLHS_W_MID * mid + GLHS_W_MIN * min;
    let chroma = max - min;
    if chroma == 0. {
        return c.with_channels(l, 0., 0.);
    }
    let k = if r > g && g >= b {
        0.
    } else if g >= r && r > b {
        1.
    } else if g > b && b >= r {
        2.
    } else if b >= g && g > r {
        3.
    } else if b > r && r >= g {
        4.
    } else {
        5.
    };
    let f = if k % 2. == 0. {
        (mid - min) / chroma
    } else {
        (max - mid) / chroma
    };
    let h = 60. * (k + f);
    let lq = GLHS_W_MID * (mid - min) / chroma + GLHS_W_MAX;
    let s = if l <= lq {
        (l - min) / l
    } else {
        (max - l) / (1. - l)
    };
    c.with_channels(l, h, s)
}

pub fn from_glhs(c: Color) -> Color {
    let (l, h, s) = (c.c0, c.c1, c.c2);
    if s == 0. {
        let v = MAX_CHANNEL * l;
        return c.with_channels(v, v, v);
    }
    let hh = wrap(h, 360.) / 60.;
    let k = (hh.floor() as i32).rem_euclid(6);
    let f = hh - hh.floor();
    let fq = if k % 2 == 0 { f } else { 1. - f };
    let lq = GLHS_W_MID * fq + GLHS_W_MAX;
    let (min, max) = if l <= lq {
        let min = l * (1. - s);
        let max = (l - min * (GLHS_W_MIN + GLHS_W_MID * (1. - fq))) / (GLHS_W_MID * fq + GLHS_W_MAX);
        (min, max)
    } else {
        let max = l + s * (1. - l);
        let min = (l - max * (GLHS_W_MAX + GLHS_W_MID * fq)) / (GLHS_W_MIN + GLHS_W_MID * (1. - fq));
        (min, max)
    };
    let mid = min + fq * (max - min);
    let (r, g, b) = match k {
        0 => (max, mid, min),
        1 => (mid, max, min),
        2 => (min, max, mid),
        3 => (min, mid, max),
        4 => (mid, min, max),
        _ => (max, min, mid),
    };
    c.with_channels(r * MAX_CHANNEL, g * MAX_CHANNEL, b * MAX_CHANNEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn red_in_hsv() {
        let hsv = to_hsv(Color::rgb(255., 0., 0.));
        assert_eq!(hsv, Color::new(0., 1., 1., 255.));
        let rgb = from_hsv(Color::new(0., 1., 1., 255.));
        assert_eq!(rgb, Color::rgb(255., 0., 0.));
    }

    #[test]
    fn primaries_agree_on_hue() {
        let wheel = [
            (Color::rgb(255., 0., 0.), 0.),
            (Color::rgb(255., 255., 0.), 60.),
            (Color::rgb(0., 255., 0.), 120.),
            (Color::rgb(0., 255., 255.), 180.),
            (Color::rgb(0., 0., 255.), 240.),
            (Color::rgb(255., 0., 255.), 300.),
        ];
        for (c, expected) in wheel {
            assert_abs_diff_eq!(hue(c), expected, epsilon = 1e-9);
            assert_abs_diff_eq!(hue_polar(c), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn hue_models_diverge_off_primaries() {
        let c = Color::rgb(255., 60., 0.);
        assert!((hue(c) - hue_polar(c)).abs() > 1.);
    }

    #[test]
    fn hwb_gray_branch() {
        let c = from_hwb(Color::new(123., 0.6, 0.6, 255.));
        assert_abs_diff_eq!(c.c0, 127.5, epsilon = 1e-9);
        assert_eq!(c.c0, c.c2);
    }

    #[test]
    fn glhs_orders_channels() {
        let c = to_glhs(Color::rgb(255., 0., 0.));
        assert_abs_diff_eq!(c.c0, 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(c.c1, 0., epsilon = 1e-12);
        assert_abs_diff_eq!(c.c2, 1., epsilon = 1e-12);
    }

    #[test]
    fn hexagonal_round_trips() {
        let samples = [
            Color::rgb(12., 200., 77.),
            Color::rgb(255., 255., 255.),
            Color::rgb(0., 0., 0.),
            Color::rgb(250., 3., 190.),
            Color::rgb(40., 40., 41.),
        ];
        let pairs: [(fn(Color) -> Color, fn(Color) -> Color); 5] = [
            (to_hsv, from_hsv),
            (to_hsl, from_hsl),
            (to_hsi, from_hsi),
            (to_hwb, from_hwb),
            (to_glhs, from_glhs),
        ];
        for (to, from) in pairs {
            for c in samples {
                let back = from(to(c));
                assert_abs_diff_eq!(back.c0, c.c0, epsilon = 1e-9);
                assert_abs_diff_eq!(back.c1, c.c1, epsilon = 1e-9);
                assert_abs_diff_eq!(back.c2, c.c2, epsilon = 1e-9);
            }
        }
    }
}
