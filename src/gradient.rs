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
use crate::channels::lab_luma;
use crate::color::Color;
use crate::colorspace::ColorSpace;
use crate::err::{ColorError, ColorResult};
use crate::interpolation::{Easing, InterpolationMethod, Interpolator};
use crate::mixing::average;
use crate::presets::gradient_preset;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Samples taken along a gradient when equalizing its lightness.
const LUMA_SAMPLES: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientOptions {
    /// Space the stops are interpolated in.
    pub colorspace: ColorSpace,
    pub interpolation: InterpolationMethod,
    /// Blends only the first two stops through this curve when set.
    pub easing: Option<Easing>,
    /// Stop positions. Evenly spaced over `[0, 1]` when absent.
    pub domain: Option<Vec<f64>>,
    /// Reparametrizes `t` so that L\* changes at a constant rate.
    pub correct_luma: bool,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            colorspace: ColorSpace::Rgb,
            interpolation: InterpolationMethod::default(),
            easing: None,
            domain: None,
            correct_luma: false,
        }
    }
}

#[derive(Debug, Clone)]
enum Shape {
    Eased {
        from: Color,
        to: Color,
        easing: Easing,
    },
    /// One interpolator per channel, alpha included.
    Channels([Interpolator; 4]),
}

/// Continuous map from a domain onto colors.
///
/// Evaluation is pure: the same `t` always gives the same color.
#[derive(Debug, Clone)]
pub struct Gradient {
    space: ColorSpace,
    stops: Vec<Color>,
    domain: (f64, f64),
    shape: Shape,
    luma: Option<Interpolator>,
}

impl Gradient {
    /// Builds a gradient through `colors`.
    ///
    /// Fails with [ColorError::InvalidInput] on an empty palette or a domain
    /// that does not match the palette.
    pub fn new(colors: &[Color], options: &GradientOptions) -> ColorResult<Gradient> {
        if colors.is_empty() {
            return Err(ColorError::InvalidInput(
                "gradient needs at least one color".to_string(),
            ));
        }
        let space = options.colorspace;
        let positions = match &options.domain {
            Some(d) if d.len() == colors.len() => d.clone(),
            Some(d) => {
                return Err(ColorError::InvalidInput(format!(
                    "gradient domain has {} positions for {} colors",
                    d.len(),
                    colors.len()
                )));
            }
            None => even_positions(colors.len()),
        };
        let converted: Vec<Color> = colors.iter().map(|&c| space.forward(c)).collect();
        let shape = match options.easing {
            Some(easing) => Shape::Eased {
                from: converted[0],
                to: converted.get(1).copied().unwrap_or(converted[0]),
                easing,
            },
            None => {
                let channel = |i: usize| {
                    let ys: Vec<f64> = converted.iter().map(|c| c[i]).collect();
                    Interpolator::new(options.interpolation, &positions, &ys)
                };
                Shape::Channels([channel(0)?, channel(1)?, channel(2)?, channel(3)?])
            }
        };
        let domain = match options.easing {
            Some(_) => (0., 1.),
            None => (positions[0], positions[positions.len() - 1]),
        };
        let mut gradient = Gradient {
            space,
            stops: colors.to_vec(),
            domain,
            shape,
            luma: None,
        };
        if options.correct_luma {
            gradient.luma = gradient.luma_correction()?;
        }
        debug!(
            colorspace = %space,
            stops = colors.len(),
            interpolation = ?options.interpolation,
            easing = ?options.easing,
            correct_luma = gradient.luma.is_some(),
            "gradient built"
        );
        Ok(gradient)
    }

    /// Gradient through a stored preset. An explicit `options.domain` wins over
    /// the preset positions.
    pub fn from_preset(name: &str, options: &GradientOptions) -> ColorResult<Gradient> {
        let preset = gradient_preset(name)?;
        let mut options = options.clone();
        if options.domain.is_none() {
            options.domain = preset.positions;
        }
        Gradient::new(&preset.colors, &options)
    }

    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Color at `t`, clamped into the domain.
    pub fn at(&self, t: f64) -> Color {
        let (lo, hi) = self.domain;
        let t = t.max(lo).min(hi);
        let t = match &self.luma {
            Some(luma) => luma.eval(t),
            None => t,
        };
        self.raw(t)
    }

    fn raw(&self, t: f64) -> Color {
        let value = match &self.shape {
            Shape::Eased { from, to, easing } => from.lerp(*to, easing.apply(t)),
            Shape::Channels(ch) => Color::new(ch[0].eval(t), ch[1].eval(t), ch[2].eval(t), ch[3].eval(t)),
        };
        self.space.inverse(value)
    }

    /// Maps `t` onto the parameter at which accumulated |ΔL\*| reaches the same
    /// fraction of its total. `None` when lightness never changes.
    fn luma_correction(&self) -> ColorResult<Option<Interpolator>> {
        let (lo, hi) = self.domain;
        if hi <= lo {
            return Ok(None);
        }
        let ts: Vec<f64> = (0..LUMA_SAMPLES)
            .map(|i| lo + (hi - lo) * i as f64 / (LUMA_SAMPLES - 1) as f64)
            .collect();
        let mut cumulative = Vec::with_capacity(LUMA_SAMPLES);
        let mut acc = 0.;
        let mut previous = lab_luma(self.raw(lo));
        for &t in ts.iter() {
            let l = lab_luma(self.raw(t));
            acc += (l - previous).abs();
            previous = l;
            cumulative.push(acc);
        }
        if acc == 0. || !acc.is_finite() {
            return Ok(None);
        }
        // Flat stretches collapse onto their first sample.
        let mut xs = Vec::with_capacity(LUMA_SAMPLES);
        let mut ys = Vec::with_capacity(LUMA_SAMPLES);
        for (&c, &t) in cumulative.iter().zip(ts.iter()) {
            let x = lo + (hi - lo) * c / acc;
            if xs.last().is_none_or(|&last| x > last) {
                xs.push(x);
                ys.push(t);
            }
        }
        Interpolator::new(InterpolationMethod::Linear, &xs, &ys).map(Some)
    }

    /// `n` colors evenly spaced over the domain. A single color is the average
    /// of the stops in the gradient's colorspace.
    pub fn palette(&self, n: usize) -> Vec<Color> {
        match n {
            0 => Vec::new(),
            1 => vec![average(&self.stops, self.space).unwrap_or_else(|_| self.at(0.5 * (self.domain.0 + self.domain.1)))],
            n => {
                let (lo, hi) = self.domain;
                (0..n)
                    .map(|i| self.at(lo + (hi - lo) * i as f64 / (n - 1) as f64))
                    .collect()
            }
        }
    }
}

fn even_positions(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.];
    }
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}

/// Resamples `colors` into `n` colors along a gradient built with `options`.
pub fn resample(colors: &[Color], n: usize, options: &GradientOptions) -> ColorResult<Vec<Color>> {
    Ok(Gradient::new(colors, options)?.palette(n))
}
