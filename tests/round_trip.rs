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
use chromaforge::{Color, ColorSpace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPSILON: f64 = 1e-6;

fn samples() -> Vec<Color> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut colors: Vec<Color> = (0..500)
        .map(|_| {
            Color::new(
                rng.random_range(0.0..=255.0),
                rng.random_range(0.0..=255.0),
                rng.random_range(0.0..=255.0),
                rng.random_range(0.0..=255.0),
            )
        })
        .collect();
    for r in [0., 255.] {
        for g in [0., 255.] {
            for b in [0., 255.] {
                colors.push(Color::rgb(r, g, b));
            }
        }
    }
    colors
}

#[test]
fn every_space_round_trips() {
    let colors = samples();
    for space in ColorSpace::ALL {
        if space.is_lossy() {
            continue;
        }
        for &c in colors.iter() {
            let back = space.inverse(space.forward(c));
            for i in 0..3 {
                assert_abs_diff_eq!(back[i], c[i], epsilon = EPSILON);
            }
            assert_eq!(back.alpha, c.alpha, "{space} must pass alpha through");
        }
    }
}

#[test]
fn every_normalized_space_round_trips() {
    let colors = samples();
    for space in ColorSpace::ALL {
        if space.is_lossy() {
            continue;
        }
        let normalized = space.normalized();
        for &c in colors.iter() {
            let back = (normalized.from)((normalized.to)(c));
            for i in 0..3 {
                assert_abs_diff_eq!(back[i], c[i], epsilon = EPSILON);
            }
        }
    }
}

#[test]
fn normalized_outputs_stay_near_device_band() {
    // Calibration comes from a lattice, so allow a little slack for points between it.
    let colors = samples();
    for space in ColorSpace::ALL {
        if matches!(space, ColorSpace::Osa) {
            continue;
        }
        let normalized = space.normalized();
        for &c in colors.iter() {
            let n = (normalized.to)(c);
            for i in 0..3 {
                assert!(
                    n[i] > -8. && n[i] < 263.,
                    "{space} channel {i} of {c:?} normalized to {}",
                    n[i]
                );
            }
        }
    }
}

#[test]
fn grays_are_neutral_in_every_hue_space() {
    for space in ColorSpace::ALL {
        let Some(hue) = space.hue_channel() else {
            continue;
        };
        for v in [0., 1., 50., 128., 200., 254., 255.] {
            let c = space.forward(Color::gray(v));
            match space {
                // JzAzBz puts D65 slightly off its neutral axis.
                ColorSpace::Jch => {
                    assert!(c.c1 < 5e-4, "{space} chroma of gray {v} is {}", c.c1);
                }
                ColorSpace::Hwb | ColorSpace::Okhwb => {
                    assert_eq!(c[hue], 0., "{space} hue of gray {v}");
                    assert_abs_diff_eq!(c.c1 + c.c2, 1., epsilon = 1e-9);
                }
                ColorSpace::Glhs => {
                    assert_eq!(c[hue], 0., "{space} hue of gray {v}");
                    assert_eq!(c.c2, 0., "{space} saturation of gray {v}");
                }
                _ => {
                    assert_eq!(c[hue], 0., "{space} hue of gray {v}");
                    assert_eq!(c.c1, 0., "{space} saturation of gray {v}");
                }
            }
        }
    }
}

#[test]
fn complementary_keeps_grays_gray() {
    for space in [ColorSpace::Lch, ColorSpace::Oklch, ColorSpace::Okhsv, ColorSpace::Okhsl] {
        let c = chromaforge::complementary(Color::gray(128.), space).unwrap();
        assert_abs_diff_eq!(c.c0, 128., epsilon = EPSILON);
        assert_abs_diff_eq!(c.c1, 128., epsilon = EPSILON);
        assert_abs_diff_eq!(c.c2, 128., epsilon = EPSILON);
    }
}

#[test]
fn gray_is_a_projection() {
    let c = Color::rgb(200., 30., 90.);
    let g = ColorSpace::Gray.forward(c);
    assert_eq!(g.c0, g.c1);
    assert_eq!(g.c1, g.c2);
    assert_eq!(ColorSpace::Gray.inverse(g), g);
}

#[test]
fn registry_names_resolve_both_tables() {
    for space in ColorSpace::ALL {
        let raw = chromaforge::lookup(space.name()).unwrap();
        let normalized = chromaforge::lookup_normalized(space.name()).unwrap();
        let c = Color::rgb(12., 130., 240.);
        assert_eq!((raw.to)(c), space.forward(c));
        assert_eq!((normalized.to)(c), (space.normalized().to)(c));
    }
    assert!(chromaforge::lookup("CIELAB2").is_err());
}
