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
use crate::math::pow;

#[inline]
pub(crate) fn srgb_to_linear(v: f64) -> f64 {
    if v > 0.04045 {
        pow((v + 0.055) / 1.055, 2.4)
    } else {
        v / 12.92
    }
}

#[inline]
pub(crate) fn srgb_from_linear(v: f64) -> f64 {
    if v > 0.0031308 {
        1.055 * pow(v, 1. / 2.4) - 0.055
    } else {
        v * 12.92
    }
}

/// Identity, present so `RGB` can take part in generic colorspace operations.
#[inline]
pub fn to_rgb(c: Color) -> Color {
    c
}

#[inline]
pub fn from_rgb(c: Color) -> Color {
    c
}

/// Removes sRGB gamma, channels stay in `[0, 255]`.
pub fn to_linear_rgb(c: Color) -> Color {
    c.map(|v| srgb_to_linear(v / MAX_CHANNEL) * MAX_CHANNEL)
}

pub fn from_linear_rgb(c: Color) -> Color {
    c.map(|v| srgb_from_linear(v / MAX_CHANNEL) * MAX_CHANNEL)
}

/// Applies sRGB gamma to a linear input.
#[inline]
pub fn to_srgb(c: Color) -> Color {
    from_linear_rgb(c)
}

#[inline]
pub fn from_srgb(c: Color) -> Color {
    to_linear_rgb(c)
}

/// Luma projection. One way: `from_gray` is the same function.
pub fn to_gray(c: Color) -> Color {
    let l = 0.212671 * c.c0 + 0.715160 * c.c1 + 0.072169 * c.c2;
    c.with_channels(l, l, l)
}

#[inline]
pub fn from_gray(c: Color) -> Color {
    to_gray(c)
}

pub fn to_cmy(c: Color) -> Color {
    c.map(|v| MAX_CHANNEL - v)
}

#[inline]
pub fn from_cmy(c: Color) -> Color {
    to_cmy(c)
}

pub fn to_ohta(c: Color) -> Color {
    let i1 = (c.c0 + c.c1 + c.c2) / 3.;
    let i2 = (c.c0 - c.c2) / 2.;
    let i3 = (2. * c.c1 - c.c0 - c.c2) / 4.;
    c.with_channels(i1, i2, i3)
}

pub fn from_ohta(c: Color) -> Color {
    let (i1, i2, i3) = (c.c0, c.c1, c.c2);
    let r = i1 + i2 - 2. / 3. * i3;
    let g = i1 + 4. / 3. * i3;
    let b = i1 - i2 - 2. / 3. * i3;
    c.with_channels(r, g, b)
}

pub fn to_ypbpr(c: Color) -> Color {
    let y = 0.2126 * c.c0 + 0.7152 * c.c1 + 0.0722 * c.c2;
    c.with_channels(y, c.c2 - y, c.c0 - y)
}

pub fn from_ypbpr(c: Color) -> Color {
    let y = c.c0;
    let b = c.c1 + y;
    let r = c.c2 + y;
    let g = (y - 0.2126 * r - 0.0722 * b) / 0.7152;
    c.with_channels(r, g, b)
}

pub fn to_ycgco(c: Color) -> Color {
    let (r, g, b) = (c.c0, c.c1, c.c2);
    c.with_channels(
        0.25 * r + 0.5 * g + 0.25 * b,
        -0.25 * r + 0.5 * g - 0.25 * b,
        0.5 * r - 0.5 * b,
    )
}

pub fn from_ycgco(c: Color) -> Color {
    let (y, cg, co) = (c.c0, c.c1, c.c2);
    let t = y - cg;
    c.with_channels(t + co, y + cg, t - co)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linear_round_trip() {
        let c = Color::new(10., 128., 250., 17.);
        let back = from_linear_rgb(to_linear_rgb(c));
        assert_abs_diff_eq!(back.c0, c.c0, epsilon = 1e-9);
        assert_abs_diff_eq!(back.c1, c.c1, epsilon = 1e-9);
        assert_abs_diff_eq!(back.c2, c.c2, epsilon = 1e-9);
        assert_eq!(back.alpha, 17.);
    }

    #[test]
    fn linear_midpoint() {
        // sRGB 50% gray is about 21.4% linear light
        let c = to_linear_rgb(Color::gray(127.5));
        assert_abs_diff_eq!(c.c0 / 255., 0.21404, epsilon = 1e-4);
    }

    #[test]
    fn gray_is_projection() {
        let g = to_gray(Color::rgb(255., 255., 255.));
        assert_abs_diff_eq!(g.c0, 255., epsilon = 1e-9);
        assert_eq!(g.c0, g.c1);
        assert_eq!(g.c1, g.c2);
    }

    #[test]
    fn ohta_ypbpr_ycgco_invert() {
        let c = Color::rgb(200., 31., 99.);
        for (to, from) in [
            (to_ohta as fn(Color) -> Color, from_ohta as fn(Color) -> Color),
            (to_ypbpr, from_ypbpr),
            (to_ycgco, from_ycgco),
            (to_cmy, from_cmy),
        ] {
            let back = from(to(c));
            assert_abs_diff_eq!(back.c0, c.c0, epsilon = 1e-9);
            assert_abs_diff_eq!(back.c1, c.c1, epsilon = 1e-9);
            assert_abs_diff_eq!(back.c2, c.c2, epsilon = 1e-9);
        }
    }
}
