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
use approx::assert_abs_diff_eq;
use chromaforge::{
    Color, ColorSpace, Gradient, GradientOptions, InterpolationMethod, KMeans, delta_e_cie,
    gradient_names, lab_luma, palette, reduce_palette, resample,
};

fn assert_close(a: Color, b: Color, eps: f64) {
    for i in 0..4 {
        assert_abs_diff_eq!(a[i], b[i], epsilon = eps);
    }
}

#[test]
fn endpoints_in_every_space() {
    let stops = palette("set1").unwrap();
    let last = stops[stops.len() - 1];
    for colorspace in ColorSpace::ALL {
        if colorspace.is_lossy() {
            continue;
        }
        let options = GradientOptions {
            colorspace,
            interpolation: InterpolationMethod::Cubic,
            ..Default::default()
        };
        let g = Gradient::new(&stops, &options).unwrap();
        assert_close(g.at(0.), stops[0], 1e-2);
        assert_close(g.at(1.), last, 1e-2);
    }
}

#[test]
fn every_preset_gradient_builds() {
    for name in gradient_names() {
        let g = Gradient::from_preset(&name, &GradientOptions::default()).unwrap();
        let p = g.palette(16);
        assert_eq!(p.len(), 16);
        assert!(p.iter().all(Color::is_finite));
    }
}

#[test]
fn evaluation_is_deterministic() {
    let options = GradientOptions {
        colorspace: ColorSpace::Oklab,
        correct_luma: true,
        ..Default::default()
    };
    let g = Gradient::from_preset("magma", &options).unwrap();
    for i in 0..=20 {
        let t = i as f64 / 20.;
        assert_eq!(g.at(t), g.at(t));
    }
}

#[test]
fn luma_corrected_palette_has_even_steps() {
    let options = GradientOptions {
        correct_luma: true,
        ..Default::default()
    };
    let g = Gradient::from_preset("viridis", &options).unwrap();
    let lightness: Vec<f64> = g.palette(6).into_iter().map(lab_luma).collect();
    let step = (lightness[5] - lightness[0]) / 5.;
    for w in lightness.windows(2) {
        assert_abs_diff_eq!(w[1] - w[0], step, epsilon = 1.);
    }
}

#[test]
fn resample_then_reduce() {
    let stops = palette("dark2").unwrap();
    let big = resample(&stops, 64, &GradientOptions::default()).unwrap();
    assert_eq!(big.len(), 64);
    let reduced = reduce_palette(&big, 4, ColorSpace::Lab, &KMeans::default()).unwrap();
    assert_eq!(reduced.len(), 4);
    for i in 0..reduced.len() {
        for j in i + 1..reduced.len() {
            assert!(delta_e_cie(reduced[i], reduced[j]) > 1.);
        }
    }
}
