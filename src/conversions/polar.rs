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
//! Cylindrical `(luma, chroma, hue)` views of the `(luma, a, b)` spaces.
use crate::color::Color;
use crate::conversions::ipt::{from_jab, to_jab};
use crate::conversions::lab::{
    from_lab, from_lab_with_white_point, from_luv, from_luv_with_white_point, to_lab,
    to_lab_with_white_point, to_luv, to_luv_with_white_point,
};
use crate::conversions::oklab::{from_oklab, to_oklab};
use crate::math::{NEUTRAL_CHROMA, wrap};
use crate::white_point::WhitePoint;

/// `(L, a, b)` to `(L, hypot(a, b), atan2(b, a))` with the hue in degrees `[0, 360)`.
/// Neutral colors get zero chroma and hue.
#[inline]
pub fn to_luma_color_hue(c: Color) -> Color {
    let chroma = c.c1.hypot(c.c2);
    if chroma < NEUTRAL_CHROMA {
        return c.with_channels(c.c0, 0., 0.);
    }
    let hue = wrap(c.c2.atan2(c.c1).to_degrees(), 360.);
    c.with_channels(c.c0, chroma, hue)
}

#[inline]
pub fn from_luma_color_hue(c: Color) -> Color {
    let (sin, cos) = c.c2.to_radians().sin_cos();
    c.with_channels(c.c0, c.c1 * cos, c.c1 * sin)
}

pub fn to_lch(c: Color) -> Color {
    to_luma_color_hue(to_lab(c))
}

pub fn from_lch(c: Color) -> Color {
    from_lab(from_luma_color_hue(c))
}

pub fn to_lch_with_white_point(c: Color, white_point: WhitePoint) -> Color {
    to_luma_color_hue(to_lab_with_white_point(c, white_point))
}

pub fn from_lch_with_white_point(c: Color, white_point: WhitePoint) -> Color {
    from_lab_with_white_point(from_luma_color_hue(c), white_point)
}

pub fn to_lchuv(c: Color) -> Color {
    to_luma_color_hue(to_luv(c))
}

pub fn from_lchuv(c: Color) -> Color {
    from_luv(from_luma_color_hue(c))
}

pub fn to_lchuv_with_white_point(c: Color, white_point: WhitePoint) -> Color {
    to_luma_color_hue(to_luv_with_white_point(c, white_point))
}

pub fn from_lchuv_with_white_point(c: Color, white_point: WhitePoint) -> Color {
    from_luv_with_white_point(from_luma_color_hue(c), white_point)
}

/// Polar JzAzBz.
pub fn to_jch(c: Color) -> Color {
    to_luma_color_hue(to_jab(c))
}

pub fn from_jch(c: Color) -> Color {
    from_jab(from_luma_color_hue(c))
}

pub fn to_oklch(c: Color) -> Color {
    to_luma_color_hue(to_oklab(c))
}

pub fn from_oklch(c: Color) -> Color {
    from_oklab(from_luma_color_hue(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn polar_is_invertible() {
        let c = Color::new(50., -20., 35., 3.);
        let p = to_luma_color_hue(c);
        assert!(p.c2 >= 0. && p.c2 < 360.);
        let back = from_luma_color_hue(p);
        assert_abs_diff_eq!(back.c1, c.c1, epsilon = 1e-12);
        assert_abs_diff_eq!(back.c2, c.c2, epsilon = 1e-12);
        assert_eq!(back.alpha, 3.);
    }

    #[test]
    fn negative_b_wraps_hue() {
        let p = to_luma_color_hue(Color::new(0., 0., -1., 255.));
        assert_abs_diff_eq!(p.c2, 270., epsilon = 1e-12);
    }

    #[test]
    fn lch_of_gray_has_no_chroma() {
        for v in [1., 128., 200., 255.] {
            let p = to_lch(Color::gray(v));
            assert_eq!((p.c1, p.c2), (0., 0.));
            let back = from_lch(p);
            assert_abs_diff_eq!(back.c0, v, epsilon = 1e-9);
            assert_abs_diff_eq!(back.c2, v, epsilon = 1e-9);
        }
    }

    #[test]
    fn near_zero_chroma_is_neutral() {
        let p = to_luma_color_hue(Color::new(40., 1e-14, -3e-13, 255.));
        assert_eq!(p, Color::new(40., 0., 0., 255.));
    }
}
