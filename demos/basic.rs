//! Prints a few noise fields as ASCII shading.
//!
//! Usage: `cargo run --example basic -- [seed] [key=value ...]`, where each key is a configuration key such as `prng_type=1`.
//! Set `RUST_LOG=debug` to see the engine's logs.

use simplex_engine::prelude::*;
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 72;
const HEIGHT: usize = 24;
const SHADES: &[u8] = b" .:-=+*#%@";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let mut config = NoiseConfig {
        enable_profiling: true,
        ..NoiseConfig::with_seed(args.next().map(|s| s.parse()).transpose()?.unwrap_or(12345))
    };
    for pair in args {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got `{pair}`"))?;
        config.set(key, value)?;
    }
    let engine = NoiseEngine::with_config(&config)?;
    println!("{engine:?}\n");

    let octaves = config.octave_settings();
    let step = config.scale / 12.0;
    let fields: [(&str, Box<dyn Fn(f64, f64) -> f64 + '_>); 4] = [
        ("simplex", Box::new(|x, y| engine.noise_2d(x, y))),
        (
            "fbm",
            Box::new(|x, y| {
                engine.fbm_2d(x, y, octaves.count, octaves.persistence, octaves.lacunarity)
            }),
        ),
        ("ridged", Box::new(|x, y| engine.ridged_2d(x, y) * 2.0 - 1.0)),
        ("domain warp", Box::new(|x, y| engine.domain_warp_2d(x, y, 1.5))),
    ];

    for (name, field) in &fields {
        println!("{name}:");
        for row in 0..HEIGHT {
            let line: String = (0..WIDTH)
                .map(|column| {
                    let value = field(column as f64 * step, row as f64 * step * 2.0);
                    shade(value * config.amplitude + config.offset)
                })
                .collect();
            println!("{line}");
        }
        println!();
    }

    let mut grid = vec![0.0; WIDTH * HEIGHT];
    engine.fill_2d(0.0, 0.0, WIDTH, HEIGHT, step, &mut grid)?;
    let mean = grid.iter().sum::<f64>() / grid.len() as f64;
    println!("grid mean {mean:.4}, {:?}", engine.stats());
    Ok(())
}

/// Maps `[-1, 1]` onto [`SHADES`].
fn shade(value: f64) -> char {
    let t = ((value + 1.0) * 0.5).clamp(0.0, 1.0);
    SHADES[(t * (SHADES.len() - 1) as f64).round() as usize] as char
}
