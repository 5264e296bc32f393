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
//! Reference whites and chromatic adaptation.
use crate::matrix::{Matrix3d, Vector3d};
use serde::{Deserialize, Serialize};

/// Tristimulus values of a reference white, scaled so `y = 100`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhitePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WhitePoint {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> WhitePoint {
        WhitePoint { x, y, z }
    }

    #[inline]
    pub const fn to_vector(self) -> Vector3d {
        Vector3d::new(self.x, self.y, self.z)
    }

    /// CIE 1931 2° D65, the default for every perceptual space.
    pub const D65: WhitePoint = WhitePoint::new(95.047, 100.0, 108.883);
    /// CIE 1931 2° D50.
    pub const D50: WhitePoint = WhitePoint::new(96.422, 100.0, 82.521);
}

impl Default for WhitePoint {
    fn default() -> Self {
        WhitePoint::D65
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Observer {
    /// CIE 1931 2°
    Cie1931,
    /// CIE 1964 10°
    Cie1964,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Illuminant {
    A,
    B,
    C,
    D50,
    D55,
    D65,
    D75,
    E,
    F2,
    F7,
    F11,
}

impl Illuminant {
    pub const ALL: [Illuminant; 11] = [
        Illuminant::A,
        Illuminant::B,
        Illuminant::C,
        Illuminant::D50,
        Illuminant::D55,
        Illuminant::D65,
        Illuminant::D75,
        Illuminant::E,
        Illuminant::F2,
        Illuminant::F7,
        Illuminant::F11,
    ];

    /// Tabulated white for the illuminant seen by `observer`.
    ///
    /// Illuminant B has no 10° entry, `None` is returned in that case.
    pub const fn white_point(self, observer: Observer) -> Option<WhitePoint> {
        let (x, z) = match observer {
            Observer::Cie1931 => match self {
                Illuminant::A => (109.850, 35.585),
                Illuminant::B => (99.0927, 85.313),
                Illuminant::C => (98.074, 118.232),
                Illuminant::D50 => (96.422, 82.521),
                Illuminant::D55 => (95.682, 92.149),
                Illuminant::D65 => (95.047, 108.883),
                Illuminant::D75 => (94.972, 122.638),
                Illuminant::E => (100.0, 100.0),
                Illuminant::F2 => (99.187, 67.395),
                Illuminant::F7 => (95.044, 108.755),
                Illuminant::F11 => (100.966, 64.370),
            },
            Observer::Cie1964 => match self {
                Illuminant::A => (111.144, 35.200),
                Illuminant::B => return None,
                Illuminant::C => (97.285, 116.145),
                Illuminant::D50 => (96.720, 81.427),
                Illuminant::D55 => (95.799, 90.926),
                Illuminant::D65 => (94.811, 107.304),
                Illuminant::D75 => (94.416, 120.641),
                Illuminant::E => (100.0, 100.0),
                Illuminant::F2 => (103.280, 69.026),
                Illuminant::F7 => (95.792, 107.687),
                Illuminant::F11 => (103.866, 65.627),
            },
        };
        Some(WhitePoint::new(x, 100.0, z))
    }
}

/// Cone response model used to adapt between whites.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AdaptationMethod {
    #[default]
    Bradford,
    VonKries,
    XyzScaling,
}

impl AdaptationMethod {
    const fn cone_matrix(self) -> Matrix3d {
        match self {
            AdaptationMethod::Bradford => Matrix3d::new([
                [0.8951, 0.2664, -0.1614],
                [-0.7502, 1.7135, 0.0367],
                [0.0389, -0.0685, 1.0296],
            ]),
            AdaptationMethod::VonKries => Matrix3d::new([
                [0.40024, 0.7076, -0.08081],
                [-0.2263, 1.16532, 0.0457],
                [0.0, 0.0, 0.91822],
            ]),
            AdaptationMethod::XyzScaling => Matrix3d::IDENTITY,
        }
    }
}

/// `M⁻¹ · diag(cone(dst) / cone(src)) · M`, `None` for degenerate whites.
pub fn adaptation_matrix(
    source: WhitePoint,
    destination: WhitePoint,
    method: AdaptationMethod,
) -> Option<Matrix3d> {
    let chad = method.cone_matrix();
    let cone_source = chad.mul_vector(source.to_vector());
    let cone_dest = chad.mul_vector(destination.to_vector());
    if cone_source.v.contains(&0.) {
        return None;
    }

    let cone = Matrix3d::diagonal(Vector3d::new(
        cone_dest.v[0] / cone_source.v[0],
        cone_dest.v[1] / cone_source.v[1],
        cone_dest.v[2] / cone_source.v[2],
    ));

    let chad_inv = chad.inverse()?;
    let p0 = cone.mat_mul(chad);
    Some(chad_inv.mat_mul(p0))
}

/// Adapts XYZ (white `y = 100`) from `source` white to `destination` white.
///
/// Degenerate whites leave the value untouched.
pub fn adapt_xyz(
    xyz: Vector3d,
    source: WhitePoint,
    destination: WhitePoint,
    method: AdaptationMethod,
) -> Vector3d {
    match adaptation_matrix(source, destination, method) {
        Some(m) => m.mul_vector(xyz),
        None => xyz,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn adapts_white_onto_white() {
        let d50 = Illuminant::D50.white_point(Observer::Cie1931).unwrap();
        for method in [
            AdaptationMethod::Bradford,
            AdaptationMethod::VonKries,
            AdaptationMethod::XyzScaling,
        ] {
            let adapted = adapt_xyz(WhitePoint::D65.to_vector(), WhitePoint::D65, d50, method);
            assert_abs_diff_eq!(adapted.v[0], d50.x, epsilon = 1e-9);
            assert_abs_diff_eq!(adapted.v[1], d50.y, epsilon = 1e-9);
            assert_abs_diff_eq!(adapted.v[2], d50.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn same_white_is_identity() {
        let m = adaptation_matrix(WhitePoint::D65, WhitePoint::D65, AdaptationMethod::Bradford)
            .unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1. } else { 0. };
                assert_abs_diff_eq!(m.v[i][j], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn table_is_normalized() {
        for illuminant in Illuminant::ALL {
            let wp = illuminant.white_point(Observer::Cie1931).unwrap();
            assert_eq!(wp.y, 100.);
        }
        assert!(Illuminant::B.white_point(Observer::Cie1964).is_none());
    }
}
