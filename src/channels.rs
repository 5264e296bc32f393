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
//! Channel access in an arbitrary colorspace, plus the usual lightness and chroma tweaks.
use crate::color::{Color, MAX_CHANNEL};
use crate::colorspace::ColorSpace;
use crate::conversions::{from_lab, from_lch, to_lab, to_lch, xyz_from_rgb};
use crate::err::{ColorError, ColorResult};
use crate::math::wrap;

/// Alpha is stored on the canonical value and never goes through a kernel.
const ALPHA: usize = 3;

/// Step of one `brighten`/`saturate` unit in L\* or C\*.
const LAB_STEP: f64 = 18.;

/// Channel `index` of `c` as seen in `space`. Index 3 is alpha.
///
/// # Panics
///
/// When `index > 3`.
pub fn get_channel(c: Color, space: ColorSpace, index: usize) -> f64 {
    if index == ALPHA {
        return c.alpha;
    }
    space.forward(c)[index]
}

/// Replaces channel `index` in `space`, converting back to RGB.
///
/// # Panics
///
/// When `index > 3`.
pub fn set_channel(c: Color, space: ColorSpace, index: usize, value: f64) -> Color {
    update_channel(c, space, index, |_| value)
}

/// Adds `delta` to channel `index` in `space`.
pub fn adjust(c: Color, space: ColorSpace, index: usize, delta: f64) -> Color {
    update_channel(c, space, index, |v| v + delta)
}

/// Multiplies channel `index` in `space` by `factor`.
pub fn modulate(c: Color, space: ColorSpace, index: usize, factor: f64) -> Color {
    update_channel(c, space, index, |v| v * factor)
}

fn update_channel<F: Fn(f64) -> f64>(c: Color, space: ColorSpace, index: usize, f: F) -> Color {
    if index == ALPHA {
        return c.with_alpha(f(c.alpha));
    }
    let mut converted = space.forward(c);
    converted[index] = f(converted[index]);
    space.inverse(converted)
}

/// Rotates the hue by 180° in `space`.
///
/// Fails with [ColorError::InvalidInput] when `space` has no hue channel.
pub fn complementary(c: Color, space: ColorSpace) -> ColorResult<Color> {
    let index = space.hue_channel().ok_or_else(|| {
        ColorError::InvalidInput(format!("{space} has no hue channel"))
    })?;
    Ok(update_channel(c, space, index, |h| wrap(h + 180., 360.)))
}

/// `255 - v` on the color channels.
#[inline]
pub fn negate(c: Color) -> Color {
    c.map(|v| MAX_CHANNEL - v)
}

#[inline]
pub fn set_alpha(c: Color, alpha: f64) -> Color {
    c.with_alpha(alpha)
}

/// Relative luminance scaled to `[0, 255]`.
pub fn luma(c: Color) -> f64 {
    xyz_from_rgb(c).v[1] / 100. * MAX_CHANNEL
}

/// CIE L\*.
pub fn lab_luma(c: Color) -> f64 {
    to_lab(c).c0
}

pub fn brighten(c: Color, amount: f64) -> Color {
    let mut lab = to_lab(c);
    lab.c0 += LAB_STEP * amount;
    from_lab(lab)
}

#[inline]
pub fn darken(c: Color, amount: f64) -> Color {
    brighten(c, -amount)
}

/// Raises LCH chroma, never below zero.
pub fn saturate(c: Color, amount: f64) -> Color {
    let mut lch = to_lch(c);
    lch.c1 = (lch.c1 + LAB_STEP * amount).max(0.);
    from_lch(lch)
}

#[inline]
pub fn desaturate(c: Color, amount: f64) -> Color {
    saturate(c, -amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn alpha_bypasses_conversion() {
        let c = Color::new(10., 20., 30., 40.);
        assert_eq!(get_channel(c, ColorSpace::Lab, 3), 40.);
        assert_eq!(set_channel(c, ColorSpace::Osa, 3, 7.).alpha, 7.);
        assert_eq!(modulate(c, ColorSpace::Hsv, 3, 0.5).alpha, 20.);
    }

    #[test]
    fn set_hsv_value() {
        let c = set_channel(Color::rgb(255., 0., 0.), ColorSpace::Hsv, 2, 0.5);
        assert_abs_diff_eq!(c.c0, 127.5, epsilon = 1e-9);
        assert_abs_diff_eq!(c.c1, 0., epsilon = 1e-9);
    }

    #[test]
    fn adjust_and_modulate_in_rgb() {
        let c = Color::rgb(100., 100., 100.);
        assert_eq!(adjust(c, ColorSpace::Rgb, 0, 5.).c0, 105.);
        assert_eq!(modulate(c, ColorSpace::Rgb, 1, 2.).c1, 200.);
    }

    #[test]
    #[should_panic]
    fn index_past_alpha_panics() {
        get_channel(Color::BLACK, ColorSpace::Rgb, 4);
    }

    #[test]
    fn complementary_of_red_is_cyan() {
        let c = complementary(Color::rgb(255., 0., 0.), ColorSpace::Hsv).unwrap();
        assert_abs_diff_eq!(c.c0, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(c.c1, 255., epsilon = 1e-9);
        assert_abs_diff_eq!(c.c2, 255., epsilon = 1e-9);
    }

    #[test]
    fn complementary_in_glhs_rotates_middle_channel() {
        let c = complementary(Color::rgb(255., 0., 0.), ColorSpace::Glhs).unwrap();
        let glhs = ColorSpace::Glhs.forward(c);
        assert_abs_diff_eq!(glhs.c1, 180., epsilon = 1e-6);
    }

    #[test]
    fn complementary_requires_hue() {
        assert!(matches!(
            complementary(Color::BLACK, ColorSpace::Lab),
            Err(ColorError::InvalidInput(_))
        ));
    }

    #[test]
    fn brighten_moves_lightness() {
        let c = Color::rgb(100., 50., 20.);
        assert_abs_diff_eq!(lab_luma(brighten(c, 1.)), lab_luma(c) + 18., epsilon = 1e-6);
        assert!(lab_luma(darken(c, 1.)) < lab_luma(c));
    }

    #[test]
    fn desaturate_gray_stays_gray() {
        let c = desaturate(Color::gray(128.), 2.);
        assert_abs_diff_eq!(c.c0, c.c2, epsilon = 1e-6);
        assert_abs_diff_eq!(c.c1, 128., epsilon = 1e-6);
        let c = complementary(Color::gray(128.), ColorSpace::Lch).unwrap();
        assert_abs_diff_eq!(c.c0, 128., epsilon = 1e-6);
        assert_abs_diff_eq!(c.c2, 128., epsilon = 1e-6);
    }

    #[test]
    fn luma_of_white() {
        assert_abs_diff_eq!(luma(Color::WHITE), 255., epsilon = 1e-3);
        assert_eq!(negate(Color::WHITE), Color::BLACK);
    }
}
