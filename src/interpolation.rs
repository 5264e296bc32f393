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
//! One dimensional interpolation over sorted knots and easing curves.
use crate::err::{ColorError, ColorResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMethod {
    #[default]
    Linear,
    /// Natural cubic spline, zero second derivative at both ends.
    Cubic,
    /// Holds the value of the closest knot on the left.
    Step,
}

/// Behaviour outside of the knot domain.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolation {
    /// Input is clamped into the domain.
    #[default]
    Trim,
    /// A fixed value is returned.
    Constant(f64),
    /// The boundary segment is extended.
    PassThrough,
}

/// Interpolant built from knots `xs` and values `ys`.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolator {
    method: InterpolationMethod,
    extrapolation: Extrapolation,
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Spline second derivatives, empty unless `method` is cubic.
    curvature: Vec<f64>,
}

impl Interpolator {
    /// Fails with [ColorError::InvalidInput] when the slices are empty, of
    /// different lengths, or `xs` is not strictly increasing.
    pub fn new(method: InterpolationMethod, xs: &[f64], ys: &[f64]) -> ColorResult<Interpolator> {
        if xs.is_empty() || xs.len() != ys.len() {
            return Err(ColorError::InvalidInput(format!(
                "interpolation needs matching non empty knots, got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.windows(2).any(|w| !(w[1] > w[0])) {
            return Err(ColorError::InvalidInput(
                "interpolation knots must be strictly increasing".to_string(),
            ));
        }
        let curvature = match method {
            InterpolationMethod::Cubic => natural_spline(xs, ys),
            _ => Vec::new(),
        };
        Ok(Interpolator {
            method,
            extrapolation: Extrapolation::default(),
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            curvature,
        })
    }

    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Interpolator {
        self.extrapolation = extrapolation;
        self
    }

    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    pub fn eval(&self, x: f64) -> f64 {
        let (lo, hi) = self.domain();
        let x = if x < lo || x > hi {
            match self.extrapolation {
                Extrapolation::Trim => x.max(lo).min(hi),
                Extrapolation::Constant(v) => return v,
                Extrapolation::PassThrough => x,
            }
        } else {
            x
        };
        if self.xs.len() == 1 {
            return self.ys[0];
        }
        // Segment index, kept in 0..len - 1 so both ends extend their boundary piece.
        let i = self
            .xs
            .partition_point(|&k| k <= x)
            .saturating_sub(1)
            .min(self.xs.len() - 2);
        match self.method {
            InterpolationMethod::Step => {
                if x >= hi {
                    self.ys[self.ys.len() - 1]
                } else {
                    self.ys[i]
                }
            }
            InterpolationMethod::Linear => {
                let t = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
                self.ys[i] + (self.ys[i + 1] - self.ys[i]) * t
            }
            InterpolationMethod::Cubic => {
                let h = self.xs[i + 1] - self.xs[i];
                let a = self.xs[i + 1] - x;
                let b = x - self.xs[i];
                let (m0, m1) = (self.curvature[i], self.curvature[i + 1]);
                (m0 * a * a * a + m1 * b * b * b) / (6. * h)
                    + (self.ys[i] / h - m0 * h / 6.) * a
                    + (self.ys[i + 1] / h - m1 * h / 6.) * b
            }
        }
    }
}

/// Second derivatives of the natural cubic spline through the knots.
fn natural_spline(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut m = vec![0.; n];
    if n < 3 {
        return m;
    }
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    // Thomas algorithm over the interior knots.
    let mut diag = vec![0.; n];
    let mut rhs = vec![0.; n];
    for i in 1..n - 1 {
        diag[i] = 2. * (h[i - 1] + h[i]);
        rhs[i] = 6. * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
    }
    for i in 2..n - 1 {
        let w = h[i - 1] / diag[i - 1];
        diag[i] -= w * h[i - 1];
        rhs[i] -= w * rhs[i - 1];
    }
    for i in (1..n - 1).rev() {
        m[i] = (rhs[i] - h[i] * m[i + 1]) / diag[i];
    }
    m
}

/// Easing curves on `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => t * (2. - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2. * t * t
                } else {
                    -1. + (4. - 2. * t) * t
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => {
                let u = t - 1.;
                u * u * u + 1.
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4. * t * t * t
                } else {
                    let u = 2. * t - 2.;
                    0.5 * u * u * u + 1.
                }
            }
            Easing::SineIn => 1. - (t * FRAC_PI_2).cos(),
            Easing::SineOut => (t * FRAC_PI_2).sin(),
            Easing::SineInOut => 0.5 * (1. - (std::f64::consts::PI * t).cos()),
            Easing::ExpoIn => {
                if t <= 0. {
                    0.
                } else {
                    2f64.powf(10. * (t - 1.))
                }
            }
            Easing::ExpoOut => {
                if t >= 1. {
                    1.
                } else {
                    1. - 2f64.powf(-10. * t)
                }
            }
            Easing::ExpoInOut => {
                if t <= 0. {
                    0.
                } else if t >= 1. {
                    1.
                } else if t < 0.5 {
                    0.5 * 2f64.powf(20. * t - 10.)
                } else {
                    1. - 0.5 * 2f64.powf(-20. * t + 10.)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const XS: [f64; 4] = [0., 1., 2., 4.];
    const YS: [f64; 4] = [0., 2., 1., 5.];

    #[test]
    fn every_method_hits_knots() {
        for method in [
            InterpolationMethod::Linear,
            InterpolationMethod::Cubic,
            InterpolationMethod::Step,
        ] {
            let f = Interpolator::new(method, &XS, &YS).unwrap();
            for (&x, &y) in XS.iter().zip(YS.iter()) {
                assert_abs_diff_eq!(f.eval(x), y, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn linear_between_knots() {
        let f = Interpolator::new(InterpolationMethod::Linear, &XS, &YS).unwrap();
        assert_abs_diff_eq!(f.eval(0.5), 1., epsilon = 1e-12);
        assert_abs_diff_eq!(f.eval(3.), 3., epsilon = 1e-12);
    }

    #[test]
    fn step_holds_left_value() {
        let f = Interpolator::new(InterpolationMethod::Step, &XS, &YS).unwrap();
        assert_eq!(f.eval(1.99), 2.);
        assert_eq!(f.eval(3.5), 1.);
    }

    #[test]
    fn cubic_reproduces_lines() {
        let ys = XS.map(|x| 3. * x - 1.);
        let f = Interpolator::new(InterpolationMethod::Cubic, &XS, &ys).unwrap();
        assert_abs_diff_eq!(f.eval(2.7), 7.1, epsilon = 1e-9);
    }

    #[test]
    fn extrapolation_modes() {
        let f = Interpolator::new(InterpolationMethod::Linear, &XS, &YS).unwrap();
        assert_eq!(f.eval(-1.), 0.);
        let f = f.with_extrapolation(Extrapolation::Constant(-7.));
        assert_eq!(f.eval(5.), -7.);
        let f = f.with_extrapolation(Extrapolation::PassThrough);
        assert_abs_diff_eq!(f.eval(-1.), -2., epsilon = 1e-12);
        assert_abs_diff_eq!(f.eval(6.), 9., epsilon = 1e-12);
    }

    #[test]
    fn rejects_bad_knots() {
        assert!(Interpolator::new(InterpolationMethod::Linear, &[], &[]).is_err());
        assert!(Interpolator::new(InterpolationMethod::Linear, &[0., 0.], &[1., 2.]).is_err());
        assert!(Interpolator::new(InterpolationMethod::Cubic, &[0., 1.], &[1.]).is_err());
    }

    #[test]
    fn single_knot_is_constant() {
        let f = Interpolator::new(InterpolationMethod::Cubic, &[0.5], &[3.]).unwrap();
        assert_eq!(f.eval(0.), 3.);
        assert_eq!(f.eval(0.9), 3.);
    }

    #[test]
    fn easings_fix_endpoints() {
        let all = [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::QuadInOut,
            Easing::CubicIn,
            Easing::CubicOut,
            Easing::CubicInOut,
            Easing::SineIn,
            Easing::SineOut,
            Easing::SineInOut,
            Easing::ExpoIn,
            Easing::ExpoOut,
            Easing::ExpoInOut,
        ];
        for e in all {
            assert_abs_diff_eq!(e.apply(0.), 0., epsilon = 1e-12);
            assert_abs_diff_eq!(e.apply(1.), 1., epsilon = 1e-12);
        }
        assert_abs_diff_eq!(Easing::QuadInOut.apply(0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(Easing::SineInOut.apply(0.5), 0.5, epsilon = 1e-12);
    }
}
