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
    Color, ColorError, ColorSpace, Pixel, denormalize, from_hsv, hue, hue_polar, normalize,
    to_hex, to_hsv, to_packed,
};

#[test]
fn normalize_is_idempotent_on_device_values() {
    for r in (0..=255).step_by(51) {
        for g in (0..=255).step_by(85) {
            for a in [0u8, 128, 255] {
                let p = Pixel::new(r, g, 255 - r, a);
                let c = normalize(p).unwrap();
                assert_eq!(denormalize(c), p);
                assert_eq!(normalize(denormalize(c)).unwrap(), c);
            }
        }
    }
}

#[test]
fn packed_and_hex_agree() {
    let c = normalize("#aa0101").unwrap();
    assert_eq!(to_packed(c), 0xffaa0101_u32 as i32);
    assert_eq!(normalize(to_packed(c)).unwrap(), c);
    assert_eq!(normalize(0x00aa0101_u32).unwrap(), c);
    assert_eq!(to_hex(normalize(to_hex(c)).unwrap()), "#aa0101");
}

#[test]
fn hex_shorthand_expansion() {
    let a = normalize("#1").unwrap();
    assert_eq!(a, normalize("#111111").unwrap());
    assert_eq!(a, normalize("#111111ff").unwrap());
    let transparent = normalize("#aabbcc00").unwrap();
    assert_eq!(transparent, Color::new(170., 187., 204., 0.));
    assert_ne!(transparent, Color::BLACK);
    assert!(matches!(normalize("#1234"), Err(ColorError::InvalidInput(_))));
}

#[test]
fn sequence_arity() {
    assert_eq!(normalize([5.]).unwrap(), normalize([5., 5., 5., 255.]).unwrap());
    assert_eq!(normalize([5., 9.]).unwrap(), Color::new(5., 5., 5., 9.));
    assert_eq!(normalize(Vec::<f64>::new()).unwrap(), Color::new(0., 0., 0., 255.));
}

#[test]
fn hsv_of_red() {
    let red = Color::rgb(255., 0., 0.);
    assert_eq!(to_hsv(red), Color::new(0., 1., 1., 255.));
    assert_eq!(from_hsv(Color::new(0., 1., 1., 255.)), red);
}

#[test]
fn hexagonal_and_polar_hue_agree_on_primaries() {
    for (c, h) in [
        (Color::rgb(255., 0., 0.), 0.),
        (Color::rgb(255., 255., 0.), 60.),
        (Color::rgb(0., 255., 0.), 120.),
        (Color::rgb(0., 255., 255.), 180.),
        (Color::rgb(0., 0., 255.), 240.),
        (Color::rgb(255., 0., 255.), 300.),
    ] {
        assert_abs_diff_eq!(hue(c), h, epsilon = 1e-9);
        assert_abs_diff_eq!(hue_polar(c), h, epsilon = 1e-9);
    }
    let orange = Color::rgb(255., 60., 0.);
    assert!((hue(orange) - hue_polar(orange)).abs() > 0.1);
}

#[test]
fn osa_stays_finite_on_the_cube() {
    for r in (0..=255).step_by(51) {
        for g in (0..=255).step_by(51) {
            for b in (0..=255).step_by(51) {
                let c = Color::rgb(r as f64, g as f64, b as f64);
                let back = ColorSpace::Osa.inverse(ColorSpace::Osa.forward(c));
                assert!(back.is_finite(), "{c:?}");
            }
        }
    }
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!("oklab".parse::<ColorSpace>().unwrap(), ColorSpace::Oklab);
    assert_eq!("HSB".parse::<ColorSpace>().unwrap(), ColorSpace::Hsv);
    assert!(matches!(
        "nope".parse::<ColorSpace>(),
        Err(ColorError::ColorspaceNotFound(_))
    ));
}
