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
//! Embedded named colors, palettes and gradients.
//!
//! Each table is parsed on first access and kept for the lifetime of the process.
use crate::color::Color;
use crate::err::{ColorError, ColorResult};
use crate::source::parse_hex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

const NAMED_JSON: &str = include_str!("../assets/named.json");
const PALETTES_JSON: &str = include_str!("../assets/palettes.json");
const GRADIENTS_JSON: &str = include_str!("../assets/gradients.json");

type Table<T> = Result<BTreeMap<String, T>, String>;

static NAMED: LazyLock<Table<Color>> =
    LazyLock::new(|| load::<String, Color>("named colors", NAMED_JSON, |hex| parse_hex(&hex)));

static PALETTES: LazyLock<Table<Vec<Color>>> =
    LazyLock::new(|| load::<Vec<String>, Vec<Color>>("palettes", PALETTES_JSON, |p| parse_all(&p)));

static GRADIENTS: LazyLock<Table<GradientPreset>> =
    LazyLock::new(|| load::<GradientDef, GradientPreset>("gradients", GRADIENTS_JSON, |g| g.resolve()));

#[derive(Debug, Deserialize)]
struct GradientDef {
    colors: Vec<String>,
    #[serde(default)]
    positions: Option<Vec<f64>>,
}

impl GradientDef {
    fn resolve(self) -> ColorResult<GradientPreset> {
        let colors = parse_all(&self.colors)?;
        if let Some(p) = &self.positions {
            if p.len() != colors.len() {
                return Err(ColorError::Preset(format!(
                    "{} positions for {} colors",
                    p.len(),
                    colors.len()
                )));
            }
        }
        Ok(GradientPreset {
            colors,
            positions: self.positions,
        })
    }
}

/// Stops of a stored gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientPreset {
    pub colors: Vec<Color>,
    /// Stop positions, evenly spaced over `[0, 1]` when absent.
    pub positions: Option<Vec<f64>>,
}

fn parse_all(hex: &[String]) -> ColorResult<Vec<Color>> {
    hex.iter().map(|h| parse_hex(h)).collect()
}

fn load<R, T>(what: &str, json: &str, resolve: impl Fn(R) -> ColorResult<T>) -> Table<T>
where
    R: for<'de> Deserialize<'de>,
{
    let parsed: BTreeMap<String, R> = serde_json::from_str(json).map_err(|e| {
        warn!(resource = what, error = %e, "failed to parse preset resource");
        e.to_string()
    })?;
    let table = parsed
        .into_iter()
        .map(|(k, v)| resolve(v).map(|t| (k, t)))
        .collect::<ColorResult<BTreeMap<_, _>>>()
        .map_err(|e| {
            warn!(resource = what, error = %e, "invalid entry in preset resource");
            e.to_string()
        })?;
    debug!(resource = what, entries = table.len(), "preset resource loaded");
    Ok(table)
}

fn lookup<'a, T>(table: &'a Table<T>, name: &str) -> ColorResult<&'a T> {
    let table = table.as_ref().map_err(|e| ColorError::Preset(e.clone()))?;
    table
        .get(&name.trim().to_ascii_lowercase())
        .ok_or_else(|| ColorError::PresetNotFound(name.to_string()))
}

/// CSS color keyword, case-insensitive.
pub fn named_color(name: &str) -> ColorResult<Color> {
    lookup(&NAMED, name).copied()
}

pub fn palette(name: &str) -> ColorResult<Vec<Color>> {
    lookup(&PALETTES, name).cloned()
}

pub fn gradient_preset(name: &str) -> ColorResult<GradientPreset> {
    lookup(&GRADIENTS, name).cloned()
}

pub fn color_names() -> Vec<String> {
    keys(&NAMED)
}

pub fn palette_names() -> Vec<String> {
    keys(&PALETTES)
}

pub fn gradient_names() -> Vec<String> {
    keys(&GRADIENTS)
}

fn keys<T>(table: &Table<T>) -> Vec<String> {
    table
        .as_ref()
        .map(|t| t.keys().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_keywords() {
        assert_eq!(color_names().len(), 148);
        assert_eq!(named_color("orange").unwrap(), Color::rgb(255., 165., 0.));
        assert_eq!(named_color(" LightSlateGrey ").unwrap(), Color::rgb(119., 136., 153.));
        assert!(matches!(
            named_color("blurple"),
            Err(ColorError::PresetNotFound(_))
        ));
    }

    #[test]
    fn palettes_resolve() {
        let names = palette_names();
        assert!(names.contains(&"set1".to_string()));
        for name in names {
            assert!(!palette(&name).unwrap().is_empty());
        }
        assert_eq!(palette("dark2").unwrap()[0], Color::rgb(27., 158., 119.));
        assert!(palette("nope").is_err());
    }

    #[test]
    fn gradients_resolve() {
        for name in gradient_names() {
            let g = gradient_preset(&name).unwrap();
            assert!(g.colors.len() >= 2);
        }
        let sunset = gradient_preset("sunset").unwrap();
        assert_eq!(sunset.positions.unwrap().len(), sunset.colors.len());
    }
}
