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
//! Classification of loosely typed inputs into a [Color].
use crate::color::{Color, MAX_CHANNEL, Pixel};
use crate::err::{ColorError, ColorResult};
use crate::presets::named_color;
use serde_json::Value;

/// Tuples whose first element is at or above this are packed integers, not channels.
const PACKED_THRESHOLD: f64 = 16_777_216.; // 0x01000000

/// Every input shape accepted by [normalize].
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSource {
    /// Channel tuple, see [ColorSource::to_color] for arity rules.
    Tuple(Vec<f64>),
    /// `0xAARRGGBB`, only the low 32 bits are used.
    Packed(i64),
    /// Hex digits with or without a leading `#`.
    Hex(String),
    /// CSS color keyword, falls back to hex when unknown.
    Named(String),
    Pixel(Pixel),
    Color(Color),
}

impl ColorSource {
    /// Resolves the source into a canonical value.
    ///
    /// Tuples: no elements is opaque black, one is gray, two is gray with
    /// alpha, three is RGB and anything longer takes the first four as RGBA.
    /// Packed integers with a zero alpha byte are treated as opaque.
    pub fn to_color(&self) -> ColorResult<Color> {
        match self {
            ColorSource::Tuple(v) => Ok(match v.as_slice() {
                [] => Color::BLACK,
                [g] => Color::gray(*g),
                [g, a] => Color::gray(*g).with_alpha(*a),
                [r, g, b] => Color::rgb(*r, *g, *b),
                [r, g, b, a, ..] => Color::new(*r, *g, *b, *a),
            }),
            ColorSource::Packed(v) => Ok(from_packed(*v)),
            ColorSource::Hex(s) => parse_hex(s),
            ColorSource::Named(s) => match named_color(s) {
                Ok(c) => Ok(c),
                Err(ColorError::PresetNotFound(_)) => parse_hex(s).map_err(|e| match e {
                    ColorError::InvalidInput(_) if !is_hex_digits(s) => {
                        ColorError::InvalidColor(format!("unknown color name `{s}`"))
                    }
                    e => e,
                }),
                Err(e) => Err(e),
            },
            ColorSource::Pixel(p) => Ok(p.to_color()),
            ColorSource::Color(c) => Ok(*c),
        }
    }

    /// Classifies a dynamically typed value by its shape.
    ///
    /// Numbers are packed integers, strings are hex or named colors, arrays
    /// are channel tuples and objects are read through `r`, `g`, `b`, `a` keys.
    pub fn from_json(value: &Value) -> ColorResult<ColorSource> {
        match value {
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(ColorSource::Packed(v))
                } else if let Some(v) = n.as_u64() {
                    Ok(ColorSource::Packed((v & 0xffff_ffff) as i64))
                } else {
                    Err(ColorError::InvalidColor(format!(
                        "{n} is not an integer packed color"
                    )))
                }
            }
            Value::String(s) => Ok(ColorSource::from(s.as_str())),
            Value::Array(items) => items
                .iter()
                .map(|v| {
                    v.as_f64().ok_or_else(|| {
                        ColorError::InvalidColor(format!("tuple element {v} is not a number"))
                    })
                })
                .collect::<ColorResult<Vec<f64>>>()
                .map(ColorSource::Tuple),
            Value::Object(map) => {
                let channel = |key: &str, default: Option<f64>| match map.get(key) {
                    Some(v) => v.as_f64().ok_or_else(|| {
                        ColorError::InvalidColor(format!("channel `{key}` is not a number"))
                    }),
                    None => default.ok_or_else(|| {
                        ColorError::InvalidColor(format!("missing channel `{key}`"))
                    }),
                };
                Ok(ColorSource::Color(Color::new(
                    channel("r", None)?,
                    channel("g", None)?,
                    channel("b", None)?,
                    channel("a", Some(MAX_CHANNEL))?,
                )))
            }
            Value::Null | Value::Bool(_) => Err(ColorError::InvalidColor(format!(
                "{value} cannot be interpreted as a color"
            ))),
        }
    }
}

impl From<&str> for ColorSource {
    fn from(value: &str) -> Self {
        match value.strip_prefix('#') {
            Some(_) => ColorSource::Hex(value.to_string()),
            None => ColorSource::Named(value.to_string()),
        }
    }
}

impl From<String> for ColorSource {
    fn from(value: String) -> Self {
        ColorSource::from(value.as_str())
    }
}

impl From<&[f64]> for ColorSource {
    fn from(value: &[f64]) -> Self {
        ColorSource::Tuple(value.to_vec())
    }
}

impl From<Vec<f64>> for ColorSource {
    fn from(value: Vec<f64>) -> Self {
        ColorSource::Tuple(value)
    }
}

impl<const N: usize> From<[f64; N]> for ColorSource {
    fn from(value: [f64; N]) -> Self {
        ColorSource::Tuple(value.to_vec())
    }
}

macro_rules! packed_source {
    ($($t:ty),*) => {
        $(impl From<$t> for ColorSource {
            fn from(value: $t) -> Self {
                ColorSource::Packed(value as i64)
            }
        })*
    };
}

packed_source!(u32, i32, i64);

impl From<Pixel> for ColorSource {
    fn from(value: Pixel) -> Self {
        ColorSource::Pixel(value)
    }
}

impl From<Color> for ColorSource {
    fn from(value: Color) -> Self {
        ColorSource::Color(value)
    }
}

/// Canonical value of any supported source.
pub fn normalize<S: Into<ColorSource>>(source: S) -> ColorResult<Color> {
    source.into().to_color()
}

/// Device pixel nearest to `c`.
#[inline]
pub fn denormalize(c: Color) -> Pixel {
    Pixel::from_color(c)
}

fn from_packed(v: i64) -> Color {
    let v = v as u32;
    let a = v >> 24;
    let a = if a == 0 { 255 } else { a };
    Color::new(
        ((v >> 16) & 0xff) as f64,
        ((v >> 8) & 0xff) as f64,
        (v & 0xff) as f64,
        a as f64,
    )
}

#[inline]
fn is_hex_digits(s: &str) -> bool {
    let s = s.strip_prefix('#').unwrap_or(s);
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parses `#rgb`-style strings. Lengths 1, 2 and 3 are shorthands, 6 is RGB and
/// 8 is RGBA.
pub(crate) fn parse_hex(s: &str) -> ColorResult<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !is_hex_digits(digits) {
        return Err(ColorError::InvalidInput(format!("`{s}` is not a hex color")));
    }
    let expanded: String = match digits.len() {
        1 => digits.repeat(6),
        2 => digits.repeat(3),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        n => {
            return Err(ColorError::InvalidInput(format!(
                "hex color `{s}` has {n} digits, expected 1, 2, 3, 6 or 8"
            )));
        }
    };
    let byte = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map(f64::from)
            .map_err(|e| ColorError::InvalidInput(format!("`{s}`: {e}")))
    };
    let alpha = if expanded.len() == 8 { byte(6)? } else { MAX_CHANNEL };
    Ok(Color::new(byte(0)?, byte(2)?, byte(4)?, alpha))
}

/// Signed `0xAARRGGBB` of the rounded device pixel.
pub fn to_packed(c: Color) -> i32 {
    let p = Pixel::from_color(c);
    ((p.a as u32) << 24 | (p.r as u32) << 16 | (p.g as u32) << 8 | p.b as u32) as i32
}

/// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
pub fn to_hex(c: Color) -> String {
    let p = Pixel::from_color(c);
    if p.a == 255 {
        format!("#{:02x}{:02x}{:02x}", p.r, p.g, p.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", p.r, p.g, p.b, p.a)
    }
}

/// Whether `value` looks like a single color.
///
/// Strings, numbers and channel objects qualify. Arrays qualify when their
/// first element is a number below `0x01000000`, which tells a channel tuple
/// apart from a list of packed colors.
pub fn possible_color(value: &Value) -> bool {
    match value {
        Value::String(_) | Value::Number(_) => true,
        Value::Object(map) => map.contains_key("r"),
        Value::Array(items) => items
            .first()
            .and_then(Value::as_f64)
            .is_some_and(|v| v < PACKED_THRESHOLD),
        _ => false,
    }
}

/// Whether `value` looks like a list of colors.
pub fn possible_palette(value: &Value) -> bool {
    match value {
        Value::Array(items) => !possible_color(value) && items.first().is_some_and(possible_color),
        _ => false,
    }
}

/// Like [normalize] on a dynamic value, `None` instead of an error.
pub fn try_color(value: &Value) -> Option<Color> {
    ColorSource::from_json(value)
        .and_then(|s| s.to_color())
        .ok()
}

#[inline]
pub fn is_valid_color(value: &Value) -> bool {
    try_color(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tuple_arity() {
        assert_eq!(normalize(Vec::<f64>::new()).unwrap(), Color::BLACK);
        assert_eq!(normalize([5.]).unwrap(), normalize([5., 5., 5., 255.]).unwrap());
        assert_eq!(normalize([5., 9.]).unwrap(), Color::new(5., 5., 5., 9.));
        assert_eq!(normalize([1., 2., 3.]).unwrap(), Color::rgb(1., 2., 3.));
        assert_eq!(
            normalize([1., 2., 3., 4., 5.]).unwrap(),
            Color::new(1., 2., 3., 4.)
        );
    }

    #[test]
    fn packed_alpha_rule() {
        assert_eq!(normalize(0x00aabbcc_u32).unwrap(), Color::rgb(170., 187., 204.));
        assert_eq!(normalize(0xffaabbcc_u32).unwrap(), Color::rgb(170., 187., 204.));
        assert_eq!(normalize(0x80aabbcc_u32).unwrap().alpha, 128.);
        assert_eq!(normalize(0x1_00aa_bbcc_i64).unwrap(), Color::rgb(170., 187., 204.));
    }

    #[test]
    fn hex_shorthands() {
        let full = normalize("#111111").unwrap();
        assert_eq!(normalize("#1").unwrap(), full);
        assert_eq!(normalize("#111111ff").unwrap(), full);
        assert_eq!(normalize("#abc").unwrap(), Color::rgb(170., 187., 204.));
        assert_eq!(normalize("#ab").unwrap(), Color::rgb(171., 171., 171.));
        assert_eq!(
            normalize("#aabbcc00").unwrap(),
            Color::new(170., 187., 204., 0.)
        );
    }

    #[test]
    fn bad_hex_length() {
        assert!(matches!(normalize("#12345"), Err(ColorError::InvalidInput(_))));
        assert!(matches!(normalize("#zz"), Err(ColorError::InvalidInput(_))));
    }

    #[test]
    fn names_then_hex() {
        assert_eq!(normalize("rebeccapurple").unwrap(), Color::rgb(102., 51., 153.));
        assert_eq!(normalize("Red").unwrap(), Color::rgb(255., 0., 0.));
        assert_eq!(normalize("ff8000").unwrap(), Color::rgb(255., 128., 0.));
        assert!(matches!(
            normalize("notacolor"),
            Err(ColorError::InvalidColor(_))
        ));
    }

    #[test]
    fn packing() {
        assert_eq!(to_packed(Color::rgb(170., 1., 1.)), 0xffaa0101_u32 as i32);
        assert_eq!(to_hex(Color::rgb(170., 1., 1.)), "#aa0101");
        assert_eq!(to_hex(Color::new(170., 1., 1., 16.)), "#aa010110");
    }

    #[test]
    fn denormalize_round_trip() {
        let c = Color::new(12., 250., 0., 77.);
        assert_eq!(normalize(denormalize(c)).unwrap(), c);
    }

    #[test]
    fn json_shapes() {
        assert_eq!(try_color(&json!([1, 2, 3])), Some(Color::rgb(1., 2., 3.)));
        assert_eq!(try_color(&json!("#fff")), Some(Color::WHITE));
        assert_eq!(
            try_color(&json!({"r": 1, "g": 2, "b": 3, "a": 4})),
            Some(Color::new(1., 2., 3., 4.))
        );
        assert_eq!(try_color(&json!(0xff0000)), Some(Color::rgb(255., 0., 0.)));
        assert!(try_color(&json!(null)).is_none());
        assert!(!is_valid_color(&json!(["a", 1])));
        assert!(!is_valid_color(&json!(1.5)));
    }

    #[test]
    fn color_and_palette_predicates() {
        assert!(possible_color(&json!([10, 20, 30])));
        assert!(!possible_color(&json!([0xff0000ff_u32, 1])));
        assert!(possible_palette(&json!([0xff0000ff_u32, 1])));
        assert!(possible_palette(&json!(["red", "blue"])));
        assert!(possible_palette(&json!([[1, 2, 3], [4, 5, 6]])));
        assert!(!possible_palette(&json!([1, 2, 3])));
        assert!(!possible_palette(&json!("red")));
    }
}
