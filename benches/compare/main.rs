//! Benches this noise engine compared to other noise libraries.
#![expect(
    missing_docs,
    reason = "Its a benchmark and cirterion macros don't add docs."
)]

mod engine;
mod fastnoise_lite;
mod libnoise;
mod noise;

use criterion::*;

criterion_main!(benches);
criterion_group!(
    benches,
    engine::benches,
    libnoise::benches,
    noise::benches,
    fastnoise_lite::benches
);

const SIZE: u32 = 2048;
const FREQUENCY: f64 = 1.0 / 32.0;
