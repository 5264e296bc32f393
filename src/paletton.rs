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
//! Harmonic palettes on the artistic hue wheel.
use crate::color::{Color, MAX_CHANNEL};
use crate::conversions::{from_paletton_hsv, to_paletton_hsv};
use crate::math::wrap;
use serde::{Deserialize, Serialize};

/// Hue layout of a palette. Angles are in degrees on the artistic wheel.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PalettonScheme {
    #[default]
    Monochromatic,
    Analogous { angle: f64 },
    /// Base hue plus two hues split around its complement.
    Triad { angle: f64 },
    /// Two complementary pairs `angle` apart.
    Tetrad { angle: f64 },
}

/// Saturation and value of the five shades generated per hue.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PalettonPreset {
    #[default]
    Full,
    Shiny,
    Pastel,
    Pale,
    Dark,
}

impl PalettonPreset {
    /// `(saturation, value)` per shade, base shade first.
    pub const fn shades(self) -> [(f64, f64); 5] {
        match self {
            PalettonPreset::Full => [(1.0, 1.0), (0.6, 1.0), (0.8, 0.85), (1.0, 0.6), (1.0, 0.4)],
            PalettonPreset::Shiny => [(0.8, 1.0), (0.4, 1.0), (0.6, 1.0), (0.9, 0.8), (1.0, 0.65)],
            PalettonPreset::Pastel => [(0.4, 0.95), (0.2, 1.0), (0.3, 0.85), (0.5, 0.75), (0.6, 0.6)],
            PalettonPreset::Pale => [(0.25, 0.9), (0.1, 1.0), (0.15, 0.8), (0.3, 0.65), (0.35, 0.5)],
            PalettonPreset::Dark => [(0.9, 0.55), (0.6, 0.7), (0.8, 0.45), (1.0, 0.35), (1.0, 0.2)],
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PalettonOptions {
    pub scheme: PalettonScheme,
    pub preset: PalettonPreset,
    /// Adds the complementary hue to monochromatic and analogous schemes.
    pub complement: bool,
}

impl PalettonOptions {
    /// Hues of the palette, base hue first.
    pub fn hues(&self, hue: f64) -> Vec<f64> {
        let mut hues = match self.scheme {
            PalettonScheme::Monochromatic => vec![hue],
            PalettonScheme::Analogous { angle } => vec![hue, hue - angle, hue + angle],
            PalettonScheme::Triad { angle } => {
                vec![hue, hue + 180. - angle, hue + 180. + angle]
            }
            PalettonScheme::Tetrad { angle } => {
                vec![hue, hue + angle, hue + 180., hue + 180. + angle]
            }
        };
        if self.complement
            && matches!(
                self.scheme,
                PalettonScheme::Monochromatic | PalettonScheme::Analogous { .. }
            )
        {
            hues.push(hue + 180.);
        }
        hues.into_iter().map(|h| wrap(h, 360.)).collect()
    }
}

/// Five shades for every hue of the scheme built around `hue`.
pub fn paletton(hue: f64, options: &PalettonOptions) -> Vec<Color> {
    let shades = options.preset.shades();
    options
        .hues(hue)
        .into_iter()
        .flat_map(|h| {
            shades
                .iter()
                .map(move |&(s, v)| from_paletton_hsv(Color::new(h, s, v, MAX_CHANNEL)))
        })
        .collect()
}

/// Palette around the artistic hue of `c`.
pub fn paletton_from_color(c: Color, options: &PalettonOptions) -> Vec<Color> {
    paletton(to_paletton_hsv(c).c0, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn palette_sizes() {
        let mut options = PalettonOptions::default();
        assert_eq!(paletton(0., &options).len(), 5);
        options.complement = true;
        assert_eq!(paletton(0., &options).len(), 10);
        options.scheme = PalettonScheme::Triad { angle: 30. };
        assert_eq!(paletton(0., &options).len(), 15);
        options.scheme = PalettonScheme::Tetrad { angle: 30. };
        assert_eq!(paletton(0., &options).len(), 20);
        options.scheme = PalettonScheme::Analogous { angle: 30. };
        assert_eq!(paletton(0., &options).len(), 20);
    }

    #[test]
    fn hues_wrap() {
        let options = PalettonOptions {
            scheme: PalettonScheme::Analogous { angle: 30. },
            ..Default::default()
        };
        assert_eq!(options.hues(10.), vec![10., 340., 40.]);
    }

    #[test]
    fn base_shade_of_red_is_red() {
        let p = paletton_from_color(Color::rgb(255., 0., 0.), &PalettonOptions::default());
        assert_abs_diff_eq!(p[0].c0, 255., epsilon = 1e-6);
        assert_abs_diff_eq!(p[0].c1, 0., epsilon = 1e-6);
        assert_abs_diff_eq!(p[0].c2, 0., epsilon = 1e-6);
    }

    #[test]
    fn complement_of_red_is_green_on_artistic_wheel() {
        let options = PalettonOptions {
            complement: true,
            ..Default::default()
        };
        let p = paletton(0., &options);
        let green = p[5];
        assert!(green.c1 > green.c0 && green.c1 > green.c2);
    }

    #[test]
    fn options_from_json() {
        let options: PalettonOptions =
            serde_json::from_str(r#"{"scheme": {"triad": {"angle": 20.0}}, "preset": "pastel"}"#)
                .unwrap();
        assert_eq!(options.scheme, PalettonScheme::Triad { angle: 20. });
        assert_eq!(options.preset, PalettonPreset::Pastel);
    }
}
