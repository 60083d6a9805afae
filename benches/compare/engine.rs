use super::{FREQUENCY, SIZE};
use criterion::{measurement::WallTime, *};
use simplex_engine::prelude::*;

pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplex-engine");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    group.bench_function("simplex", |bencher| {
        bencher.iter(|| {
            let engine = NoiseEngine::new(black_box(1));
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += engine.noise_2d(x as f64 * FREQUENCY, y as f64 * FREQUENCY);
                }
            }
            res
        });
    });
    group.bench_function("simplex fill", |bencher| {
        let mut out = vec![0.0; (SIZE * SIZE) as usize];
        bencher.iter(|| {
            let engine = NoiseEngine::new(black_box(1));
            engine
                .fill_2d(0.0, 0.0, SIZE as usize, SIZE as usize, FREQUENCY, &mut out)
                .map(|()| out.iter().sum::<f64>())
        });
    });
    fbm_simplex(&mut group, 1);
    fbm_simplex(&mut group, 2);
    fbm_simplex(&mut group, 8);

    group.bench_function("simplex 3d", |bencher| {
        bencher.iter(|| {
            let engine = NoiseEngine::new(black_box(1));
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += engine.noise_3d(x as f64 * FREQUENCY, y as f64 * FREQUENCY, 0.5);
                }
            }
            res
        });
    });
}

fn fbm_simplex(group: &mut BenchmarkGroup<WallTime>, octaves: u32) {
    let octaves = black_box(octaves);
    group.bench_function(format!("fbm {octaves} octave simplex"), |bencher| {
        bencher.iter(|| {
            let engine = NoiseEngine::new(1);
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += engine.fbm_2d(
                        x as f64 * FREQUENCY,
                        y as f64 * FREQUENCY,
                        octaves,
                        0.5,
                        2.0,
                    );
                }
            }
            res
        });
    });
}
