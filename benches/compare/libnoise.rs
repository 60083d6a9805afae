use super::{FREQUENCY, SIZE};
use criterion::{measurement::WallTime, *};
use libnoise::{Fbm, Generator as _, Simplex};

pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("libnoise");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    group.bench_function("simplex", |bencher| {
        bencher.iter(|| {
            let noise = Simplex::<2>::new(black_box(1));
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.sample([x as f64 * FREQUENCY, y as f64 * FREQUENCY]);
                }
            }
            res
        });
    });
    fbm_simplex(&mut group, 1);
    fbm_simplex(&mut group, 2);
    fbm_simplex(&mut group, 8);

    group.bench_function("simplex 3d", |bencher| {
        bencher.iter(|| {
            let noise = Simplex::<3>::new(black_box(1));
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.sample([x as f64 * FREQUENCY, y as f64 * FREQUENCY, 0.5]);
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
            let noise =
                Fbm::<2, Simplex<2>>::new(Simplex::<2>::new(1), octaves, FREQUENCY, 2.0, 0.5);
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.sample([x as f64, y as f64]);
                }
            }
            res
        });
    });
}
