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
use serde::{Deserialize, Serialize};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Canonical four channel color value.
///
/// The channels carry no colorspace tag: `c0..c2` are interpreted by whichever
/// function produced or consumes the value. Unless stated otherwise they hold
/// sRGB in `[0, 255]`, and `alpha` is always in `[0, 255]`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Color {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
    pub alpha: f64,
}

pub(crate) const MAX_CHANNEL: f64 = 255.;

impl Color {
    #[inline]
    pub const fn new(c0: f64, c1: f64, c2: f64, alpha: f64) -> Color {
        Color { c0, c1, c2, alpha }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(c0: f64, c1: f64, c2: f64) -> Color {
        Color::new(c0, c1, c2, MAX_CHANNEL)
    }

    /// Opaque gray.
    #[inline]
    pub const fn gray(v: f64) -> Color {
        Color::new(v, v, v, MAX_CHANNEL)
    }

    pub const BLACK: Color = Color::rgb(0., 0., 0.);
    pub const WHITE: Color = Color::rgb(255., 255., 255.);

    /// Same alpha, new color channels.
    #[inline]
    pub const fn with_channels(self, c0: f64, c1: f64, c2: f64) -> Color {
        Color::new(c0, c1, c2, self.alpha)
    }

    #[inline]
    pub const fn with_alpha(self, alpha: f64) -> Color {
        Color::new(self.c0, self.c1, self.c2, alpha)
    }

    #[inline]
    pub const fn channels(&self) -> [f64; 3] {
        [self.c0, self.c1, self.c2]
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.c0, self.c1, self.c2, self.alpha]
    }

    /// Applies `f` to the three color channels, alpha untouched.
    #[inline]
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Color {
        Color::new(f(self.c0), f(self.c1), f(self.c2), self.alpha)
    }

    /// Clamps every channel including alpha to `[0, 255]`.
    #[inline]
    #[allow(clippy::manual_clamp)]
    pub fn clamp(self) -> Color {
        let c = |v: f64| v.max(0.).min(MAX_CHANNEL);
        Color::new(c(self.c0), c(self.c1), c(self.c2), c(self.alpha))
    }

    /// Linear interpolation of all four channels.
    #[inline]
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let l = |a: f64, b: f64| a + (b - a) * t;
        Color::new(
            l(self.c0, other.c0),
            l(self.c1, other.c1),
            l(self.c2, other.c2),
            l(self.alpha, other.alpha),
        )
    }

    #[inline]
    pub fn euclidean_distance(&self, other: Color) -> f64 {
        let dx = self.c0 - other.c0;
        let dy = self.c1 - other.c1;
        let dz = self.c2 - other.c2;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.c0.is_finite() && self.c1.is_finite() && self.c2.is_finite() && self.alpha.is_finite()
    }
}

impl Index<usize> for Color {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.c0,
            1 => &self.c1,
            2 => &self.c2,
            3 => &self.alpha,
            _ => panic!("Index out of bounds for Color"),
        }
    }
}

impl IndexMut<usize> for Color {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.c0,
            1 => &mut self.c1,
            2 => &mut self.c2,
            3 => &mut self.alpha,
            _ => panic!("Index out of bounds for Color"),
        }
    }
}

impl From<[f64; 4]> for Color {
    #[inline]
    fn from(v: [f64; 4]) -> Self {
        Color::new(v[0], v[1], v[2], v[3])
    }
}

impl From<[f64; 3]> for Color {
    #[inline]
    fn from(v: [f64; 3]) -> Self {
        Color::rgb(v[0], v[1], v[2])
    }
}

// Arithmetic acts on the color channels, alpha is carried from the left operand.

impl Add<Color> for Color {
    type Output = Color;

    #[inline]
    fn add(self, rhs: Color) -> Self::Output {
        self.with_channels(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl Add<f64> for Color {
    type Output = Color;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        self.map(|v| v + rhs)
    }
}

impl Sub<Color> for Color {
    type Output = Color;

    #[inline]
    fn sub(self, rhs: Color) -> Self::Output {
        self.with_channels(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}

impl Sub<f64> for Color {
    type Output = Color;

    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        self.map(|v| v - rhs)
    }
}

impl Mul<Color> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: Color) -> Self::Output {
        self.with_channels(self.c0 * rhs.c0, self.c1 * rhs.c1, self.c2 * rhs.c2)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|v| v * rhs)
    }
}

impl Div<Color> for Color {
    type Output = Color;

    #[inline]
    fn div(self, rhs: Color) -> Self::Output {
        self.with_channels(self.c0 / rhs.c0, self.c1 / rhs.c1, self.c2 / rhs.c2)
    }
}

impl Div<f64> for Color {
    type Output = Color;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.map(|v| v / rhs)
    }
}

impl Neg for Color {
    type Output = Color;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl AddAssign<Color> for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl SubAssign<Color> for Color {
    #[inline]
    fn sub_assign(&mut self, rhs: Color) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Color {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Color {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

/// Device pixel with 8 bit channels.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Pixel {
        Pixel { r, g, b, a }
    }

    /// Rounds and saturates each channel into a byte.
    #[inline]
    #[allow(clippy::manual_clamp)]
    pub fn from_color(color: Color) -> Pixel {
        let q = |v: f64| {
            if v.is_nan() {
                0
            } else {
                v.round().max(0.).min(MAX_CHANNEL) as u8
            }
        };
        Pixel::new(q(color.c0), q(color.c1), q(color.c2), q(color.alpha))
    }

    #[inline]
    pub fn to_color(self) -> Color {
        Color::new(self.r as f64, self.g as f64, self.b as f64, self.a as f64)
    }
}

impl From<Color> for Pixel {
    #[inline]
    fn from(value: Color) -> Self {
        Pixel::from_color(value)
    }
}

impl From<Pixel> for Color {
    #[inline]
    fn from(value: Pixel) -> Self {
        value.to_color()
    }
}
