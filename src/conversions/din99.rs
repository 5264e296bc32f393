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
//! DIN99 and its o, b, c, d refinements, logarithmic compressions of CIE L\*a\*b\*.
use crate::color::Color;
use crate::conversions::lab::{lab_from_xyz, xyz_from_lab};
use crate::conversions::xyz::{rgb_from_xyz, xyz_from_rgb};
use crate::math::{exp, log};
use crate::matrix::Vector3d;
use crate::white_point::WhitePoint;

/// Coefficients of one DIN99 variant.
#[derive(Debug, Copy, Clone)]
struct Din99Variant {
    c1: f64,
    c2: f64,
    /// Rotation of the `(a, b)` plane before compression, degrees.
    c3: f64,
    c4: f64,
    c5: f64,
    c6: f64,
    /// Hue rotation after compression, degrees.
    c7: f64,
    /// `X' = k * X - m * Z` applied before Lab, when present.
    x_modification: Option<(f64, f64)>,
}

const DIN99: Din99Variant = Din99Variant {
    c1: 105.509,
    c2: 0.0158,
    c3: 16.0,
    c4: 0.7,
    c5: 200. / 9.,
    c6: 9. / 200.,
    c7: 0.0,
    x_modification: None,
};

const DIN99O: Din99Variant = Din99Variant {
    c1: 303.67,
    c2: 0.0039,
    c3: 26.0,
    c4: 0.83,
    c5: 1. / 0.0435,
    c6: 0.075,
    c7: 26.0,
    x_modification: None,
};

const DIN99B: Din99Variant = Din99Variant {
    c1: 303.67,
    c2: 0.0039,
    c3: 26.0,
    c4: 0.83,
    c5: 23.0,
    c6: 0.075,
    c7: 26.0,
    x_modification: None,
};

const DIN99C: Din99Variant = Din99Variant {
    c1: 317.65,
    c2: 0.0037,
    c3: 0.0,
    c4: 0.94,
    c5: 23.0,
    c6: 0.066,
    c7: 0.0,
    x_modification: Some((1.1, 0.1)),
};

const DIN99D: Din99Variant = Din99Variant {
    c1: 325.22,
    c2: 0.0036,
    c3: 50.0,
    c4: 1.14,
    c5: 22.5,
    c6: 0.06,
    c7: 50.0,
    x_modification: Some((1.12, 0.12)),
};

impl Din99Variant {
    fn forward(&self, c: Color) -> Color {
        let mut xyz = xyz_from_rgb(c);
        if let Some((k, m)) = self.x_modification {
            xyz.v[0] = k * xyz.v[0] - m * xyz.v[2];
        }
        let [l, a, b] = lab_from_xyz(xyz, WhitePoint::D65).v;
        let (sin3, cos3) = self.c3.to_radians().sin_cos();
        let l99 = self.c1 * log(1. + self.c2 * l);
        let e = a * cos3 + b * sin3;
        let f = self.c4 * (-a * sin3 + b * cos3);
        let g = e.hypot(f);
        let chroma = self.c5 * log(1. + self.c6 * g);
        let hue = f.atan2(e) + self.c7.to_radians();
        let (sin, cos) = hue.sin_cos();
        c.with_channels(l99, chroma * cos, chroma * sin)
    }

    fn inverse(&self, c: Color) -> Color {
        let (l99, a99, b99) = (c.c0, c.c1, c.c2);
        let (sin3, cos3) = self.c3.to_radians().sin_cos();
        let chroma = a99.hypot(b99);
        let hue = b99.atan2(a99) - self.c7.to_radians();
        let g = (exp(chroma / self.c5) - 1.) / self.c6;
        let (sin, cos) = hue.sin_cos();
        let e = g * cos;
        let f = g * sin / self.c4;
        let a = e * cos3 - f * sin3;
        let b = e * sin3 + f * cos3;
        let l = (exp(l99 / self.c1) - 1.) / self.c2;
        let mut xyz = xyz_from_lab(Vector3d::new(l, a, b), WhitePoint::D65);
        if let Some((k, m)) = self.x_modification {
            xyz.v[0] = (xyz.v[0] + m * xyz.v[2]) / k;
        }
        rgb_from_xyz(xyz, c.alpha)
    }
}

pub fn to_din99(c: Color) -> Color {
    DIN99.forward(c)
}

pub fn from_din99(c: Color) -> Color {
    DIN99.inverse(c)
}

pub fn to_din99o(c: Color) -> Color {
    DIN99O.forward(c)
}

pub fn from_din99o(c: Color) -> Color {
    DIN99O.inverse(c)
}

pub fn to_din99b(c: Color) -> Color {
    DIN99B.forward(c)
}

pub fn from_din99b(c: Color) -> Color {
    DIN99B.inverse(c)
}

pub fn to_din99c(c: Color) -> Color {
    DIN99C.forward(c)
}

pub fn from_din99c(c: Color) -> Color {
    DIN99C.inverse(c)
}

pub fn to_din99d(c: Color) -> Color {
    DIN99D.forward(c)
}

pub fn from_din99d(c: Color) -> Color {
    DIN99D.inverse(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn din99_variants_round_trip() {
        let pairs: [(fn(Color) -> Color, fn(Color) -> Color); 5] = [
            (to_din99, from_din99),
            (to_din99o, from_din99o),
            (to_din99b, from_din99b),
            (to_din99c, from_din99c),
            (to_din99d, from_din99d),
        ];
        for (to, from) in pairs {
            for c in [
                Color::rgb(12., 200., 77.),
                Color::rgb(250., 3., 190.),
                Color::BLACK,
                Color::WHITE,
            ] {
                let back = from(to(c));
                assert_abs_diff_eq!(back.c0, c.c0, epsilon = 1e-7);
                assert_abs_diff_eq!(back.c1, c.c1, epsilon = 1e-7);
                assert_abs_diff_eq!(back.c2, c.c2, epsilon = 1e-7);
            }
        }
    }

    #[test]
    fn white_keeps_din99_lightness_near_100() {
        let d = to_din99(Color::WHITE);
        assert_abs_diff_eq!(d.c0, 100., epsilon = 1e-2);
    }
}
