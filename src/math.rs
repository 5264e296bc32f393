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
use num_traits::MulAdd;
use pxfm::{f_cbrt, f_exp, f_log, f_pow};
use tracing::trace;

#[inline(always)]
pub(crate) fn mlaf<T: Copy + MulAdd<T, Output = T>>(acc: T, a: T, b: T) -> T {
    MulAdd::mul_add(a, b, acc)
}

#[inline]
pub(crate) fn cbrt(x: f64) -> f64 {
    f_cbrt(x)
}

#[inline]
pub(crate) fn pow(x: f64, y: f64) -> f64 {
    f_pow(x, y)
}

#[inline]
pub(crate) fn exp(x: f64) -> f64 {
    f_exp(x)
}

#[inline]
pub(crate) fn log(x: f64) -> f64 {
    f_log(x)
}

/// Sign preserving power, `sign(x) * |x|^y`.
#[inline]
pub(crate) fn spow(x: f64, y: f64) -> f64 {
    if x < 0. {
        -pow(-x, y)
    } else {
        pow(x, y)
    }
}

/// Euclidean modulo, result always lies in `[0, m)`.
#[inline]
pub(crate) fn wrap(x: f64, m: f64) -> f64 {
    let r = x % m;
    if r < 0. { r + m } else { r }
}

/// Chroma or saturation below this is neutral: zero with hue `0`.
pub(crate) const NEUTRAL_CHROMA: f64 = 1e-9;

pub(crate) const NEWTON_MAX_ITERATIONS: usize = 20;
pub(crate) const NEWTON_TOLERANCE: f64 = 1e-10;

/// Outcome of [newton_raphson]: the root estimate and number of steps taken.
#[derive(Debug, Copy, Clone)]
pub(crate) struct NewtonRoot {
    pub(crate) x: f64,
    pub(crate) iterations: usize,
}

/// Newton-Raphson with a central difference derivative.
///
/// Stops after [NEWTON_MAX_ITERATIONS] steps, once `|f(x)| < NEWTON_TOLERANCE`,
/// or when the derivative vanishes. `lower` clamps every iterate from below.
pub(crate) fn newton_raphson<F>(f: F, x0: f64, lower: Option<f64>) -> NewtonRoot
where
    F: Fn(f64) -> f64,
{
    let mut x = x0;
    for i in 0..NEWTON_MAX_ITERATIONS {
        let fx = f(x);
        if fx.abs() < NEWTON_TOLERANCE {
            return NewtonRoot { x, iterations: i };
        }
        let h = 1e-7 * x.abs().max(1.);
        let d = (f(x + h) - f(x - h)) / (2. * h);
        if d == 0. || !d.is_finite() {
            trace!(x, iteration = i, "newton: flat derivative");
            return NewtonRoot { x, iterations: i };
        }
        x -= fx / d;
        if let Some(lo) = lower {
            if x < lo {
                x = lo;
            }
        }
    }
    NewtonRoot {
        x,
        iterations: NEWTON_MAX_ITERATIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn newton_finds_square_root() {
        let root = newton_raphson(|x| x * x - 2., 1., None);
        assert_abs_diff_eq!(root.x, 2f64.sqrt(), epsilon = 1e-9);
        assert!(root.iterations < NEWTON_MAX_ITERATIONS);
    }

    #[test]
    fn newton_respects_iteration_cap() {
        // no real root, iteration must still terminate
        let root = newton_raphson(|x| x * x + 1., 0.5, None);
        assert!(root.iterations <= NEWTON_MAX_ITERATIONS);
    }

    #[test]
    fn spow_keeps_sign() {
        assert_abs_diff_eq!(spow(-8., 1. / 3.), -2., epsilon = 1e-12);
        assert_abs_diff_eq!(spow(8., 1. / 3.), 2., epsilon = 1e-12);
    }

    #[test]
    fn wrap_is_positive() {
        assert_abs_diff_eq!(wrap(-30., 360.), 330.);
        assert_abs_diff_eq!(wrap(725., 360.), 5.);
    }
}
