use super::{FREQUENCY, SIZE};
use criterion::{measurement::WallTime, *};
use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};

pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("fastnoise-lite");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    group.bench_function("simplex", |bencher| {
        bencher.iter(|| {
            let mut noise = FastNoiseLite::new();
            noise.set_noise_type(Some(NoiseType::OpenSimplex2));
            noise.set_fractal_type(None);
            noise.frequency = FREQUENCY as f32;
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.get_noise_2d(x as f32, y as f32);
                }
            }
            res
        });
    });
    fbm_simplex(&mut group, 2);
    fbm_simplex(&mut group, 8);

    group.bench_function("simplex 3d", |bencher| {
        bencher.iter(|| {
            let mut noise = FastNoiseLite::new();
            noise.set_noise_type(Some(NoiseType::OpenSimplex2));
            noise.set_fractal_type(None);
            noise.frequency = FREQUENCY as f32;
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.get_noise_3d(x as f32, y as f32, 16.0);
                }
            }
            res
        });
    });
}

fn fbm_simplex(group: &mut BenchmarkGroup<WallTime>, octaves: i32) {
    group.bench_function(format!("fbm {octaves} octave simplex"), |bencher| {
        bencher.iter(|| {
            let mut noise = FastNoiseLite::new();
            noise.set_noise_type(Some(NoiseType::OpenSimplex2));
            noise.set_fractal_type(Some(FractalType::FBm));
            noise.octaves = octaves;
            noise.lacunarity = 2.0;
            noise.gain = 0.5;
            noise.frequency = FREQUENCY as f32;
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.get_noise_2d(x as f32, y as f32);
                }
            }
            res
        });
    });
}
