use super::{FREQUENCY, SIZE};
use criterion::{measurement::WallTime, *};
use noise::{Fbm, NoiseFn, OpenSimplex, Simplex};

pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    group.bench_function("simplex", |bencher| {
        bencher.iter(|| {
            let noise = Simplex::new(black_box(1));
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.get([x as f64 * FREQUENCY, y as f64 * FREQUENCY]);
                }
            }
            res
        });
    });
    fbm_simplex(&mut group, 1);
    fbm_simplex(&mut group, 2);
    fbm_simplex(&mut group, 8);

    group.bench_function("open simplex 3d", |bencher| {
        bencher.iter(|| {
            let noise = OpenSimplex::new(black_box(1));
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.get([x as f64 * FREQUENCY, y as f64 * FREQUENCY, 0.5]);
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
            let mut noise = Fbm::<Simplex>::new(1);
            noise.frequency = FREQUENCY;
            noise.octaves = octaves as usize;
            noise.lacunarity = 2.0;
            noise.persistence = 0.5;
            let noise = noise.set_sources((0..octaves).map(|_| Simplex::new(1)).collect());
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.get([x as f64, y as f64]);
                }
            }
            res
        });
    });
}
