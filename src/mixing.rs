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
//! Blending two or more colors.
use crate::channels::lab_luma;
use crate::color::{Color, MAX_CHANNEL};
use crate::colorspace::ColorSpace;
use crate::conversions::{from_lab, to_lab};
use crate::err::{ColorError, ColorResult};

/// Linear interpolation in `space`, `t = 0` gives `c1`.
pub fn lerp(c1: Color, c2: Color, space: ColorSpace, t: f64) -> Color {
    let a = space.forward(c1);
    let b = space.forward(c2);
    space.inverse(a.lerp(b, t))
}

fn lerp_with_lightness(c1: Color, c2: Color, space: ColorSpace, t: f64, lightness: f64) -> Color {
    let mut lab = to_lab(lerp(c1, c2, space, t));
    lab.c0 = lightness;
    from_lab(lab)
}

/// [lerp], then the result takes the L\* of the brighter input.
pub fn lerp_plus(c1: Color, c2: Color, space: ColorSpace, t: f64) -> Color {
    lerp_with_lightness(c1, c2, space, t, lab_luma(c1).max(lab_luma(c2)))
}

/// [lerp], then the result takes the L\* of the darker input.
pub fn lerp_minus(c1: Color, c2: Color, space: ColorSpace, t: f64) -> Color {
    lerp_with_lightness(c1, c2, space, t, lab_luma(c1).min(lab_luma(c2)))
}

/// Interpolates squared channels and takes the root, alpha is linear.
pub fn mix(c1: Color, c2: Color, t: f64) -> Color {
    let m = |a: f64, b: f64| ((1. - t) * a * a + t * b * b).sqrt();
    Color::new(
        m(c1.c0, c2.c0),
        m(c1.c1, c2.c1),
        m(c1.c2, c2.c2),
        c1.alpha + (c2.alpha - c1.alpha) * t,
    )
}

/// Ink-like mixing: blends in `255 - v` space and pulls further towards it the
/// more the inputs differ.
pub fn mixsub(c1: Color, c2: Color, t: f64) -> Color {
    let w1 = (2. * (1. - t)).min(1.);
    let w2 = (2. * t).min(1.);
    let sub = |a: f64, b: f64| MAX_CHANNEL - (w1 * (MAX_CHANNEL - a) + w2 * (MAX_CHANNEL - b));
    let subtractive = c1.with_channels(
        sub(c1.c0, c2.c0),
        sub(c1.c1, c2.c1),
        sub(c1.c2, c2.c2),
    );
    let d = c1.euclidean_distance(c2) / (MAX_CHANNEL * 3f64.sqrt());
    let additive = c1.lerp(c2, t);
    additive.lerp(subtractive, d).with_alpha(additive.alpha)
}

/// Pigment mixing on packed `0xRRGGBB` values.
pub trait PigmentMixer {
    fn mix_packed(&self, c1: u32, c2: u32, t: f64) -> u32;
}

/// [PigmentMixer] backed by [mixsub].
#[derive(Debug, Copy, Clone, Default)]
pub struct SubtractiveMixer;

impl PigmentMixer for SubtractiveMixer {
    fn mix_packed(&self, c1: u32, c2: u32, t: f64) -> u32 {
        pack_rgb(mixsub(unpack_rgb(c1), unpack_rgb(c2), t))
    }
}

#[inline]
fn pack_rgb(c: Color) -> u32 {
    let ch = |v: f64| v.round().clamp(0., MAX_CHANNEL) as u32;
    (ch(c.c0) << 16) | (ch(c.c1) << 8) | ch(c.c2)
}

#[inline]
fn unpack_rgb(v: u32) -> Color {
    Color::rgb(
        ((v >> 16) & 0xff) as f64,
        ((v >> 8) & 0xff) as f64,
        (v & 0xff) as f64,
    )
}

/// Mixes through `mixer`, quantizing to 8 bits. Alpha is interpolated linearly.
pub fn mix_pigments<M: PigmentMixer + ?Sized>(mixer: &M, c1: Color, c2: Color, t: f64) -> Color {
    let mixed = unpack_rgb(mixer.mix_packed(pack_rgb(c1), pack_rgb(c2), t));
    mixed.with_alpha(c1.alpha + (c2.alpha - c1.alpha) * t)
}

/// Mean of `colors` taken in `space`.
pub fn average(colors: &[Color], space: ColorSpace) -> ColorResult<Color> {
    let weights = vec![1.; colors.len()];
    weighted_average(colors, &weights, space)
}

/// Weighted mean of `colors` taken in `space`.
pub fn weighted_average(colors: &[Color], weights: &[f64], space: ColorSpace) -> ColorResult<Color> {
    if colors.is_empty() {
        return Err(ColorError::InvalidInput(
            "cannot average an empty palette".to_string(),
        ));
    }
    if colors.len() != weights.len() {
        return Err(ColorError::InvalidInput(format!(
            "{} colors but {} weights",
            colors.len(),
            weights.len()
        )));
    }
    let total: f64 = weights.iter().sum();
    if total == 0. || !total.is_finite() {
        return Err(ColorError::InvalidInput(format!(
            "weights must have a finite non zero sum, got {total}"
        )));
    }
    let mut acc = [0f64; 4];
    for (&c, &w) in colors.iter().zip(weights.iter()) {
        let converted = space.forward(c).to_array();
        for (a, v) in acc.iter_mut().zip(converted) {
            *a += v * w;
        }
    }
    let mean = Color::from(acc.map(|v| v / total));
    Ok(space.inverse(mean))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const RED: Color = Color::rgb(255., 0., 0.);
    const BLUE: Color = Color::rgb(0., 0., 255.);

    #[test]
    fn lerp_endpoints() {
        for space in [ColorSpace::Rgb, ColorSpace::Lab, ColorSpace::Oklch] {
            let start = lerp(RED, BLUE, space, 0.);
            let end = lerp(RED, BLUE, space, 1.);
            assert_abs_diff_eq!(start.c0, RED.c0, epsilon = 1e-6);
            assert_abs_diff_eq!(end.c2, BLUE.c2, epsilon = 1e-6);
        }
    }

    #[test]
    fn lerp_plus_takes_brighter_lightness() {
        let c = lerp_plus(RED, BLUE, ColorSpace::Rgb, 0.5);
        assert_abs_diff_eq!(lab_luma(c), lab_luma(RED), epsilon = 1e-6);
        let c = lerp_minus(RED, BLUE, ColorSpace::Rgb, 0.5);
        assert_abs_diff_eq!(lab_luma(c), lab_luma(BLUE), epsilon = 1e-6);
    }

    #[test]
    fn mix_is_brighter_than_lerp() {
        let m = mix(RED, BLUE, 0.5);
        assert_abs_diff_eq!(m.c0, 255. / 2f64.sqrt(), epsilon = 1e-9);
        assert!(m.c0 > RED.lerp(BLUE, 0.5).c0);
    }

    #[test]
    fn mixsub_of_equal_colors_is_identity() {
        let c = Color::rgb(30., 140., 90.);
        let m = mixsub(c, c, 0.5);
        assert_abs_diff_eq!(m.c0, c.c0, epsilon = 1e-9);
        assert_abs_diff_eq!(m.c1, c.c1, epsilon = 1e-9);
        assert_abs_diff_eq!(m.c2, c.c2, epsilon = 1e-9);
    }

    #[test]
    fn mixsub_darkens_complementary_inks() {
        let yellow = Color::rgb(255., 255., 0.);
        let m = mixsub(yellow, BLUE, 0.5);
        assert!(m.c0 + m.c1 + m.c2 < yellow.lerp(BLUE, 0.5).c0 * 3.);
    }

    struct Fixed;

    impl PigmentMixer for Fixed {
        fn mix_packed(&self, c1: u32, _: u32, _: f64) -> u32 {
            assert_eq!(c1, 0xff0000);
            0x00ff00
        }
    }

    #[test]
    fn pigments_round_trip_packed_values() {
        let c = mix_pigments(&Fixed, RED.with_alpha(0.), BLUE, 0.5);
        assert_eq!(c, Color::new(0., 255., 0., 127.5));
        let sub = mix_pigments(&SubtractiveMixer, RED, RED, 0.3);
        assert_eq!(sub, RED);
    }

    #[test]
    fn averages() {
        let avg = average(&[RED, BLUE], ColorSpace::Rgb).unwrap();
        assert_eq!(avg, Color::rgb(127.5, 0., 127.5));
        let w = weighted_average(&[RED, BLUE], &[3., 1.], ColorSpace::Rgb).unwrap();
        assert_abs_diff_eq!(w.c0, 191.25, epsilon = 1e-9);
        assert!(average(&[], ColorSpace::Lab).is_err());
        assert!(weighted_average(&[RED], &[1., 2.], ColorSpace::Lab).is_err());
    }
}
