#![no_main]

use chromaforge::{Color, ColorSpace, delta_e_2000, to_packed};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u64; 4]| {
    let c = Color::new(
        f64::from_bits(data[0]),
        f64::from_bits(data[1]),
        f64::from_bits(data[2]),
        f64::from_bits(data[3]),
    );
    let bounded = Color::new(
        (data[0] % 256) as f64,
        (data[1] % 256) as f64,
        (data[2] % 256) as f64,
        (data[3] % 256) as f64,
    );

    for space in ColorSpace::ALL {
        _ = space.inverse(space.forward(c));
        let normalized = space.normalized();
        _ = (normalized.from)((normalized.to)(bounded));
    }
    _ = delta_e_2000(c, bounded, Default::default());
    _ = to_packed(c);
});
