//! Properties every engine must hold, whichever generator and seed it was built with.

use simplex_engine::{prelude::*, rng::Pcg32};

const SEEDS: [u32; 4] = [1, 42, 12345, 0xDEAD_BEEF];

fn engines() -> impl Iterator<Item = NoiseEngine> {
    PrngAlgorithm::ALL.into_iter().flat_map(|prng| {
        SEEDS.into_iter().map(move |seed| {
            NoiseEngine::with_config(&NoiseConfig {
                prng,
                ..NoiseConfig::with_seed(seed)
            })
            .unwrap()
        })
    })
}

/// A fixed, evenly spread set of sample points.
fn points(count: usize, span: f64) -> impl Iterator<Item = [f64; 4]> {
    let mut rng = Pcg32::new(0x5EED);
    let mut next = move || (rng.next_u32() as f64 / u32::MAX as f64 * 2.0 - 1.0) * span;
    (0..count).map(move |_| [next(), next(), next(), next()])
}

#[test]
fn rebuilding_reproduces_every_sample() {
    for engine in engines() {
        let mut again = NoiseEngine::new(1);
        again.init_advanced(engine.config()).unwrap();
        for [x, y, z, w] in points(200, 100.0) {
            assert_eq!(engine.noise_1d(x), again.noise_1d(x));
            assert_eq!(engine.noise_2d(x, y), again.noise_2d(x, y));
            assert_eq!(engine.noise_3d(x, y, z), again.noise_3d(x, y, z));
            assert_eq!(engine.noise_4d(x, y, z, w), again.noise_4d(x, y, z, w));
            assert_eq!(
                engine.fbm_3d(x, y, z, 5, 0.5, 2.0),
                again.fbm_3d(x, y, z, 5, 0.5, 2.0)
            );
        }
    }
}

#[test]
fn permutation_tables_are_valid() {
    for engine in engines() {
        assert!(engine.permutation_table().is_valid(), "{engine:?}");
    }
}

#[test]
fn kernels_stay_in_range() {
    const EPSILON: f64 = 0.01;
    for engine in engines() {
        for [x, y, z, w] in points(1000, 500.0) {
            for value in [
                engine.noise_2d(x, y),
                engine.noise_3d(x, y, z),
                engine.noise_4d(x, y, z, w),
            ] {
                assert!(value.abs() <= 1.0 + EPSILON, "{engine:?}: {value}");
            }
        }
    }
}

#[test]
fn variants_are_exact() {
    let engine = NoiseEngine::new(12345);
    for [x, y, z, _] in points(500, 50.0) {
        assert_eq!(engine.billowy_1d(x), engine.noise_1d(x).abs());
        assert_eq!(engine.billowy_2d(x, y), engine.noise_2d(x, y).abs());
        assert_eq!(engine.billowy_3d(x, y, z), engine.noise_3d(x, y, z).abs());
        assert_eq!(engine.ridged_1d(x), 1.0 - engine.noise_1d(x).abs());
        assert_eq!(engine.ridged_2d(x, y), 1.0 - engine.noise_2d(x, y).abs());
        assert_eq!(
            engine.ridged_3d(x, y, z),
            1.0 - engine.noise_3d(x, y, z).abs()
        );
    }
}

#[test]
fn fractal_is_fbm() {
    let engine = NoiseEngine::new(99);
    for [x, y, z, _] in points(200, 20.0) {
        for octaves in [1, 3, 8] {
            assert_eq!(
                engine.fractal_2d(x, y, octaves, 0.6, 1.9),
                engine.fbm_2d(x, y, octaves, 0.6, 1.9)
            );
            assert_eq!(
                engine.fractal_3d(x, y, z, octaves, 0.6, 1.9),
                engine.fbm_3d(x, y, z, octaves, 0.6, 1.9)
            );
        }
    }
}

#[test]
fn zero_strength_warp_collapses() {
    let engine = NoiseEngine::new(5);
    for [x, y, _, _] in points(300, 80.0) {
        assert_eq!(engine.domain_warp_2d(x, y, 0.0), engine.noise_2d(x, y));
    }
}

#[test]
fn fill_matches_scalar_samples() {
    let engine = NoiseEngine::new(2024);
    let (x0, y0, width, height, step) = (-3.25, 10.5, 17, 9, 0.37);
    let grid = engine.grid_2d(x0, y0, width, height, step).unwrap();
    assert_eq!(grid.len(), width * height);
    for j in 0..height {
        for i in 0..width {
            assert_eq!(
                grid[j * width + i],
                engine.noise_2d(x0 + i as f64 * step, y0 + j as f64 * step)
            );
        }
    }
}

#[test]
fn golden_value_is_pinned() {
    let engine = NoiseEngine::new(12345);
    assert_eq!(engine.config().interpolation, Interpolation::Smoothstep);
    assert!(engine.noise_2d(1.0, 2.0).abs() < 1e-12);
}

#[test]
fn caching_toggle_never_changes_outputs() {
    let cached = NoiseEngine::new(777);
    let uncached = NoiseEngine::with_config(&NoiseConfig {
        enable_caching: false,
        ..NoiseConfig::with_seed(777)
    })
    .unwrap();
    for [x, y, z, w] in points(200, 30.0) {
        assert_eq!(cached.noise_2d(x, y), uncached.noise_2d(x, y));
        assert_eq!(cached.noise_4d(x, y, z, w), uncached.noise_4d(x, y, z, w));
        assert_eq!(
            cached.hybrid_multifractal_2d(x, y, 4, 0.5, 2.0, 0.8),
            uncached.hybrid_multifractal_2d(x, y, 4, 0.5, 2.0, 0.8)
        );
    }
    assert_eq!((cached.cache_hits(), cached.cache_misses()), (0, 0));
}

#[test]
fn engines_are_independent() {
    let a = NoiseEngine::new(1);
    let b = NoiseEngine::new(2);
    let differing = points(100, 10.0)
        .filter(|[x, y, _, _]| a.noise_2d(*x, *y) != b.noise_2d(*x, *y))
        .count();
    assert!(differing > 90);

    let mut rebuilt = NoiseEngine::new(1);
    rebuilt.init(2);
    assert_eq!(rebuilt.noise_2d(0.25, 0.5), b.noise_2d(0.25, 0.5));
    assert_eq!(a.noise_2d(0.25, 0.5), NoiseEngine::new(1).noise_2d(0.25, 0.5));
}

#[test]
fn shared_across_threads() {
    let engine = NoiseEngine::new(31337);
    let expected: Vec<f64> = (0..64)
        .map(|i| engine.noise_3d(i as f64 * 0.1, 0.5, 2.0))
        .collect();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let sampled: Vec<f64> = (0..64)
                    .map(|i| engine.noise_3d(i as f64 * 0.1, 0.5, 2.0))
                    .collect();
                assert_eq!(sampled, expected);
            });
        }
    });
}

#[cfg(feature = "serialize")]
#[test]
fn partial_config_documents_fill_from_defaults() {
    let config: NoiseConfig =
        serde_json::from_str(r#"{ "seed": 12345, "prng": "MersenneTwister", "octaves": 6 }"#)
            .unwrap();
    assert_eq!(
        config,
        NoiseConfig {
            seed: 12345,
            prng: PrngAlgorithm::MersenneTwister,
            octaves: 6,
            ..Default::default()
        }
    );

    let text = serde_json::to_string(&config).unwrap();
    let back: NoiseConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
}
