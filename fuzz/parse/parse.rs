#![no_main]

use chromaforge::{normalize, possible_color, possible_palette, to_hex, try_color};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(c) = normalize(s) {
            _ = normalize(to_hex(c).as_str());
        }
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(s) {
            _ = try_color(&value);
            _ = possible_color(&value);
            _ = possible_palette(&value);
        }
    }
});
