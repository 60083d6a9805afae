//! The [`NoiseEngine`]: an explicit handle owning everything sampling needs.
//!
//! An engine is always initialized when constructed; there is no implicit setup on first use.
//! Sampling only needs `&self`, so one engine can be shared read-only across threads.
//! Rebuilding needs `&mut self`, which rules out reconfiguring while anything samples.

use core::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use bevy_math::{DVec2, DVec3, DVec4};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
    NoiseFunction,
    cache::NoiseCache,
    config::{ConfigIssue, NoiseConfig},
    layering::{DomainWarp, Fbm, HybridMultifractal, Octaves},
    math_noise::{Billowy, Ridged},
    permutation::PermutationTable,
    rng::{AnyPrng, PrngAlgorithm},
    simplex::Simplex,
};

/// Where an engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// [`NoiseEngine::cleanup`] ran. The last permutation table is still used for sampling.
    Uninitialized,
    /// Built once.
    Initialized,
    /// Rebuilt at least once after being built.
    Reconfigured,
}

/// Errors from setting up or bulk sampling a [`NoiseEngine`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The configuration failed [`NoiseConfig::validate`].
    #[error("invalid configuration: {}", describe(.0))]
    InvalidConfig(Vec<ConfigIssue>),
    /// A grid dimension was zero, or the grid has more cells than can be addressed.
    #[error("grid dimensions must be positive, got {width}x{height}x{depth}")]
    InvalidDimensions {
        /// Cells along x.
        width: usize,
        /// Cells along y.
        height: usize,
        /// Cells along z. 1 for 2D grids.
        depth: usize,
    },
    /// The output buffer cannot hold the grid.
    #[error("output buffer holds {len} values but the grid needs {needed}")]
    BufferTooSmall {
        /// The number of cells in the grid.
        needed: usize,
        /// The length of the buffer provided.
        len: usize,
    },
}

fn describe(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A snapshot of an engine's counters. See [`NoiseEngine::stats`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerfStats {
    /// Sampled values, counting each cell of a bulk fill.
    pub calls: u64,
    /// Memoized lookups that found a value.
    pub cache_hits: u64,
    /// Memoized lookups that found nothing.
    pub cache_misses: u64,
    /// Completed bulk fills.
    pub bulk_fills: u64,
    /// Wall time spent in bulk fills.
    pub bulk_time: Duration,
}

impl PerfStats {
    /// The mean wall time of one bulk fill, if any completed.
    pub fn average_fill_time(&self) -> Option<Duration> {
        let fills = u32::try_from(self.bulk_fills).ok().filter(|&n| n > 0)?;
        Some(self.bulk_time / fills)
    }
}

/// Profiling counters. Atomic so sampling can stay `&self`.
#[derive(Debug, Default)]
struct Counters {
    calls: AtomicU64,
    bulk_fills: AtomicU64,
    bulk_nanos: AtomicU64,
}

impl Counters {
    fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
        self.bulk_fills.store(0, Ordering::Relaxed);
        self.bulk_nanos.store(0, Ordering::Relaxed);
    }
}

/// Owns a permutation table and the generator that shuffled it, a [`NoiseCache`], and profiling counters.
///
/// ```
/// # use simplex_engine::prelude::*;
/// let engine = NoiseEngine::new(12345);
/// let value = engine.noise_2d(0.3, 0.7);
/// assert!(value.abs() <= 1.0);
/// assert_eq!(value, NoiseEngine::new(12345).noise_2d(0.3, 0.7));
/// ```
pub struct NoiseEngine {
    config: NoiseConfig,
    seed: u32,
    prng: AnyPrng,
    table: PermutationTable,
    cache: NoiseCache,
    counters: Counters,
    lifecycle: Lifecycle,
}

impl core::fmt::Debug for NoiseEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NoiseEngine")
            .field("seed", &self.seed)
            .field("prng", &self.prng.algorithm())
            .field("lifecycle", &self.lifecycle)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

impl NoiseEngine {
    /// Builds an engine with the default configuration and `seed`.
    ///
    /// A seed of 0 is replaced by one derived from the wall clock; pass a nonzero seed for reproducible output.
    pub fn new(seed: u32) -> Self {
        Self::build(NoiseConfig::with_seed(seed))
    }

    /// Builds an engine with the default configuration and a seed derived from the wall clock.
    /// Output is not reproducible between runs.
    pub fn time_seeded() -> Self {
        Self::new(0)
    }

    /// Builds an engine from `config`, rejecting configurations with validation errors.
    pub fn with_config(config: &NoiseConfig) -> Result<Self, EngineError> {
        check(config)?;
        Ok(Self::build(*config))
    }

    fn build(mut config: NoiseConfig) -> Self {
        let seed = resolve_seed(config.seed);
        config.seed = seed;
        let mut prng = AnyPrng::new(config.prng, seed);
        let table = PermutationTable::build(&mut prng);
        debug!(seed, prng = ?config.prng, "built permutation table");
        Self {
            config,
            seed,
            prng,
            table,
            cache: NoiseCache::new(),
            counters: Counters::default(),
            lifecycle: Lifecycle::Initialized,
        }
    }

    /// Rebuilds the engine from the default configuration with `seed`.
    pub fn init(&mut self, seed: u32) {
        self.rebuild(NoiseConfig::with_seed(seed));
    }

    /// Rebuilds the engine from `config`.
    ///
    /// On error the engine is left unchanged.
    pub fn init_advanced(&mut self, config: &NoiseConfig) -> Result<(), EngineError> {
        check(config)?;
        self.rebuild(*config);
        Ok(())
    }

    fn rebuild(&mut self, config: NoiseConfig) {
        let next = match self.lifecycle {
            Lifecycle::Uninitialized => Lifecycle::Initialized,
            Lifecycle::Initialized | Lifecycle::Reconfigured => Lifecycle::Reconfigured,
        };
        *self = Self {
            lifecycle: next,
            ..Self::build(config)
        };
    }

    /// Clears the cache and counters, turns caching and profiling off, and marks the engine [`Lifecycle::Uninitialized`].
    ///
    /// The permutation table is kept, so sampling afterwards gives the same values as before.
    pub fn cleanup(&mut self) {
        self.cache.clear();
        self.counters.reset();
        self.config.enable_caching = false;
        self.config.enable_profiling = false;
        self.lifecycle = Lifecycle::Uninitialized;
        trace!(seed = self.seed, "engine cleaned up");
    }

    /// The lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// The active configuration. A requested seed of 0 is replaced by the wall clock seed actually in use,
    /// so rebuilding from this configuration reproduces the engine.
    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// The seed in use, after replacing 0 with a wall clock seed. Always equal to `config().seed`.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// The algorithm that shuffled the permutation table.
    pub fn prng_algorithm(&self) -> PrngAlgorithm {
        self.prng.algorithm()
    }

    /// The permutation table every sample hashes through.
    pub fn permutation_table(&self) -> &PermutationTable {
        &self.table
    }

    /// Evaluates any [`NoiseFunction`] against this engine's permutation table.
    #[inline]
    pub fn sample<I, N: NoiseFunction<I>>(&self, noise: &N, input: I) -> N::Output {
        self.count_calls(1);
        noise.evaluate(input, &self.table)
    }

    /// 1D simplex noise. Unlike the other dimensions this can reach well past `[-1, 1]`.
    pub fn noise_1d(&self, x: f64) -> f64 {
        self.sample(&Simplex, x)
    }

    /// 2D simplex noise, nominally within `[-1, 1]`.
    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        self.sample(&Simplex, DVec2::new(x, y))
    }

    /// 3D simplex noise, nominally within `[-1, 1]`.
    pub fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sample(&Simplex, DVec3::new(x, y, z))
    }

    /// 4D simplex noise, nominally within `[-1, 1]`.
    pub fn noise_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.sample(&Simplex, DVec4::new(x, y, z, w))
    }

    /// `1 - |noise_1d(x)|`.
    pub fn ridged_1d(&self, x: f64) -> f64 {
        self.sample(&Ridged::default(), x)
    }

    /// `1 - |noise_2d(x, y)|`.
    pub fn ridged_2d(&self, x: f64, y: f64) -> f64 {
        self.sample(&Ridged::default(), DVec2::new(x, y))
    }

    /// `1 - |noise_3d(x, y, z)|`.
    pub fn ridged_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sample(&Ridged::default(), DVec3::new(x, y, z))
    }

    /// `|noise_1d(x)|`.
    pub fn billowy_1d(&self, x: f64) -> f64 {
        self.sample(&Billowy::default(), x)
    }

    /// `|noise_2d(x, y)|`.
    pub fn billowy_2d(&self, x: f64, y: f64) -> f64 {
        self.sample(&Billowy::default(), DVec2::new(x, y))
    }

    /// `|noise_3d(x, y, z)|`.
    pub fn billowy_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sample(&Billowy::default(), DVec3::new(x, y, z))
    }

    /// Normalized fractal brownian motion over 2D simplex noise. See [`Fbm`].
    pub fn fbm_2d(&self, x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
        let fbm = Fbm::new(Simplex, Octaves::new(octaves, persistence, lacunarity));
        self.sample(&fbm, DVec2::new(x, y))
    }

    /// Normalized fractal brownian motion over 3D simplex noise. See [`Fbm`].
    pub fn fbm_3d(
        &self,
        x: f64,
        y: f64,
        z: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    ) -> f64 {
        let fbm = Fbm::new(Simplex, Octaves::new(octaves, persistence, lacunarity));
        self.sample(&fbm, DVec3::new(x, y, z))
    }

    /// Another name for [`fbm_2d`](Self::fbm_2d). The two always agree.
    pub fn fractal_2d(
        &self,
        x: f64,
        y: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    ) -> f64 {
        self.fbm_2d(x, y, octaves, persistence, lacunarity)
    }

    /// Another name for [`fbm_3d`](Self::fbm_3d). The two always agree.
    pub fn fractal_3d(
        &self,
        x: f64,
        y: f64,
        z: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    ) -> f64 {
        self.fbm_3d(x, y, z, octaves, persistence, lacunarity)
    }

    /// Unnormalized hybrid multifractal over 2D simplex noise. See [`HybridMultifractal`].
    pub fn hybrid_multifractal_2d(
        &self,
        x: f64,
        y: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
        offset: f64,
    ) -> f64 {
        let hybrid = HybridMultifractal::new(
            Simplex,
            Octaves::new(octaves, persistence, lacunarity),
            offset,
        );
        self.sample(&hybrid, DVec2::new(x, y))
    }

    /// 2D simplex noise warped by itself. See [`DomainWarp`].
    pub fn domain_warp_2d(&self, x: f64, y: f64, strength: f64) -> f64 {
        self.sample(&DomainWarp::new(Simplex, strength), DVec2::new(x, y))
    }

    /// 4D simplex noise through the cache.
    ///
    /// When [`NoiseConfig::enable_caching`] is off this is exactly [`noise_4d`](Self::noise_4d) and the hit and miss counters stay put.
    /// No other sampling method reads or writes the cache.
    pub fn memoized_4d(&mut self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let coords = DVec4::new(x, y, z, w);
        if !self.config.enable_caching {
            return self.sample(&Simplex, coords);
        }
        if let Some(result) = self.cache.lookup(coords) {
            return result;
        }
        let result = self.sample(&Simplex, coords);
        self.cache.store(coords, result);
        result
    }

    /// Fills `out` with 2D simplex noise over a `width` by `height` grid, row major:
    /// `out[y * width + x] = noise_2d(x0 + x * step, y0 + y * step)`.
    ///
    /// Values past the end of the grid are left untouched.
    pub fn fill_2d(
        &self,
        x0: f64,
        y0: f64,
        width: usize,
        height: usize,
        step: f64,
        out: &mut [f64],
    ) -> Result<(), EngineError> {
        let needed = grid_len(width, height, 1)?;
        let out = fit(out, needed)?;
        self.timed_fill(needed, || {
            for (y, row) in out.chunks_exact_mut(width).enumerate() {
                let sample_y = y0 + y as f64 * step;
                for (x, value) in row.iter_mut().enumerate() {
                    let p = DVec2::new(x0 + x as f64 * step, sample_y);
                    *value = Simplex.evaluate(p, &self.table);
                }
            }
        });
        Ok(())
    }

    /// Fills `out` with 3D simplex noise over a `width` by `height` by `depth` grid, row major:
    /// `out[(z * height + y) * width + x] = noise_3d(x0 + x * step, y0 + y * step, z0 + z * step)`.
    ///
    /// Values past the end of the grid are left untouched.
    pub fn fill_3d(
        &self,
        x0: f64,
        y0: f64,
        z0: f64,
        width: usize,
        height: usize,
        depth: usize,
        step: f64,
        out: &mut [f64],
    ) -> Result<(), EngineError> {
        let needed = grid_len(width, height, depth)?;
        let out = fit(out, needed)?;
        self.timed_fill(needed, || {
            for (z, layer) in out.chunks_exact_mut(width * height).enumerate() {
                let sample_z = z0 + z as f64 * step;
                for (y, row) in layer.chunks_exact_mut(width).enumerate() {
                    let sample_y = y0 + y as f64 * step;
                    for (x, value) in row.iter_mut().enumerate() {
                        let p = DVec3::new(x0 + x as f64 * step, sample_y, sample_z);
                        *value = Simplex.evaluate(p, &self.table);
                    }
                }
            }
        });
        Ok(())
    }

    /// Like [`fill_2d`](Self::fill_2d), but allocates the buffer.
    pub fn grid_2d(
        &self,
        x0: f64,
        y0: f64,
        width: usize,
        height: usize,
        step: f64,
    ) -> Result<Vec<f64>, EngineError> {
        let mut out = vec![0.0; grid_len(width, height, 1)?];
        self.fill_2d(x0, y0, width, height, step, &mut out)?;
        Ok(out)
    }

    fn timed_fill(&self, cells: usize, fill: impl FnOnce()) {
        if !self.config.enable_profiling {
            fill();
            return;
        }
        let start = Instant::now();
        fill();
        let elapsed = start.elapsed();
        self.count_calls(cells as u64);
        self.counters.bulk_fills.fetch_add(1, Ordering::Relaxed);
        self.counters.bulk_nanos.fetch_add(
            u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
            Ordering::Relaxed,
        );
        trace!(cells, ?elapsed, "bulk fill");
    }

    #[inline]
    fn count_calls(&self, calls: u64) {
        if self.config.enable_profiling {
            self.counters.calls.fetch_add(calls, Ordering::Relaxed);
        }
    }

    /// The number of sampled values since the last reset. Only counted while profiling.
    pub fn call_count(&self) -> u64 {
        self.counters.calls.load(Ordering::Relaxed)
    }

    /// Memoized lookups that found a value. See [`memoized_4d`](Self::memoized_4d).
    pub fn cache_hits(&self) -> u64 {
        self.cache.hits()
    }

    /// Memoized lookups that found nothing. See [`memoized_4d`](Self::memoized_4d).
    pub fn cache_misses(&self) -> u64 {
        self.cache.misses()
    }

    /// A snapshot of every counter.
    pub fn stats(&self) -> PerfStats {
        PerfStats {
            calls: self.call_count(),
            cache_hits: self.cache_hits(),
            cache_misses: self.cache_misses(),
            bulk_fills: self.counters.bulk_fills.load(Ordering::Relaxed),
            bulk_time: Duration::from_nanos(self.counters.bulk_nanos.load(Ordering::Relaxed)),
        }
    }

    /// Zeroes every counter. Cached values are kept.
    pub fn reset_stats(&mut self) {
        self.counters.reset();
        self.cache.reset_counters();
    }
}

fn check(config: &NoiseConfig) -> Result<(), EngineError> {
    let report = config.validate();
    for warning in &report.warnings {
        warn!(%warning, "questionable noise configuration");
    }
    if report.is_valid() {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig(report.errors))
    }
}

/// Replaces a seed of 0 with one taken from the wall clock.
fn resolve_seed(seed: u32) -> u32 {
    if seed != 0 {
        return seed;
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    // Fold the seconds and sub-second parts so engines built within the same second still differ.
    let resolved = (now.as_secs() as u32 ^ now.subsec_nanos()).max(1);
    warn!(
        seed = resolved,
        "seed 0 replaced by a wall clock seed, output will not be reproducible"
    );
    resolved
}

fn grid_len(width: usize, height: usize, depth: usize) -> Result<usize, EngineError> {
    let invalid = EngineError::InvalidDimensions {
        width,
        height,
        depth,
    };
    if width == 0 || height == 0 || depth == 0 {
        return Err(invalid);
    }
    width
        .checked_mul(height)
        .and_then(|area| area.checked_mul(depth))
        .ok_or(invalid)
}

fn fit(out: &mut [f64], needed: usize) -> Result<&mut [f64], EngineError> {
    let len = out.len();
    out.get_mut(..needed)
        .ok_or(EngineError::BufferTooSmall { needed, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    fn profiled(seed: u32) -> NoiseEngine {
        let config = NoiseConfig {
            enable_profiling: true,
            ..NoiseConfig::with_seed(seed)
        };
        NoiseEngine::with_config(&config).unwrap()
    }

    #[test]
    fn golden_scenario() {
        let engine = NoiseEngine::new(12345);
        assert_eq!(engine.prng_algorithm(), PrngAlgorithm::Pcg);
        assert_close(engine.noise_2d(1.0, 2.0), 0.0);
        assert_close(engine.noise_2d(0.3, 0.7), 0.11939038688506239);
        assert_close(engine.noise_3d(1.1, 2.2, 3.3), -0.0007090240000000025);
        assert_close(engine.noise_4d(1.1, 2.2, 3.3, 4.4), -0.10353760977974524);
        assert_close(engine.noise_1d(2.3), -14.400741810000001);
        assert_close(
            engine.fbm_2d(0.3, 0.7, 4, 0.5, 2.0),
            8.319760544293805e-05,
        );
        assert_close(
            engine.hybrid_multifractal_2d(0.3, 0.7, 4, 0.5, 2.0, 1.0),
            0.033994170283822456,
        );
    }

    #[test]
    fn lifecycle_transitions() {
        let mut engine = NoiseEngine::new(1);
        assert_eq!(engine.lifecycle(), Lifecycle::Initialized);
        engine.init(2);
        assert_eq!(engine.lifecycle(), Lifecycle::Reconfigured);
        engine.init_advanced(&NoiseConfig::with_seed(3)).unwrap();
        assert_eq!(engine.lifecycle(), Lifecycle::Reconfigured);
        engine.cleanup();
        assert_eq!(engine.lifecycle(), Lifecycle::Uninitialized);
        engine.init(4);
        assert_eq!(engine.lifecycle(), Lifecycle::Initialized);
    }

    #[test]
    fn init_matches_a_fresh_engine() {
        let mut engine = NoiseEngine::new(77);
        engine
            .init_advanced(&NoiseConfig {
                prng: PrngAlgorithm::Xorshift,
                ..NoiseConfig::with_seed(5)
            })
            .unwrap();
        engine.init(12345);
        assert_eq!(engine.config(), &NoiseConfig::with_seed(12345));
        assert_eq!(
            engine.permutation_table(),
            NoiseEngine::new(12345).permutation_table()
        );
    }

    #[test]
    fn rejected_config_leaves_engine_unchanged() {
        let mut engine = NoiseEngine::new(9);
        let before = engine.noise_2d(0.5, 0.5);
        let bad = NoiseConfig {
            octaves: 0,
            ..NoiseConfig::with_seed(10)
        };
        let error = engine.init_advanced(&bad).unwrap_err();
        assert_eq!(
            error,
            EngineError::InvalidConfig(vec![ConfigIssue::OctavesOutOfRange(0)])
        );
        assert_eq!(
            error.to_string(),
            "invalid configuration: octaves must be between 1 and 16, got 0"
        );
        assert_eq!(engine.seed(), 9);
        assert_eq!(engine.noise_2d(0.5, 0.5), before);
        assert!(NoiseEngine::with_config(&bad).is_err());
    }

    #[test]
    fn zero_seed_resolves_to_nonzero() {
        let engine = NoiseEngine::time_seeded();
        assert_ne!(engine.seed(), 0);
        assert_eq!(engine.config().seed, engine.seed());
        assert!(engine.permutation_table().is_valid());
    }

    #[test]
    fn time_seeded_rebuilds_from_its_config() {
        let engine = NoiseEngine::time_seeded();
        let rebuilt = NoiseEngine::with_config(engine.config()).unwrap();
        assert_eq!(rebuilt.seed(), engine.seed());
        assert_eq!(rebuilt.permutation_table(), engine.permutation_table());
        assert_eq!(rebuilt.noise_2d(0.3, 0.7), engine.noise_2d(0.3, 0.7));
    }

    #[test]
    fn cleanup_keeps_sampling_deterministic() {
        let mut engine = profiled(31);
        let before = engine.noise_3d(0.1, 0.2, 0.3);
        engine.cleanup();
        assert_eq!(engine.noise_3d(0.1, 0.2, 0.3), before);
        assert_eq!(engine.stats(), PerfStats::default());
        assert!(!engine.config().enable_profiling);
    }

    #[test]
    fn calls_are_counted_only_while_profiling() {
        let engine = NoiseEngine::new(3);
        engine.noise_2d(1.0, 1.0);
        assert_eq!(engine.call_count(), 0);

        let mut engine = profiled(3);
        engine.noise_2d(1.0, 1.0);
        engine.fbm_3d(1.0, 1.0, 1.0, 4, 0.5, 2.0);
        engine.grid_2d(0.0, 0.0, 4, 3, 0.5).unwrap();
        let stats = engine.stats();
        assert_eq!(stats.calls, 14);
        assert_eq!(stats.bulk_fills, 1);
        assert!(stats.average_fill_time().is_some());

        engine.reset_stats();
        assert_eq!(engine.stats(), PerfStats::default());
        assert_eq!(engine.stats().average_fill_time(), None);
    }

    #[test]
    fn memoized_sampling() {
        let mut engine = NoiseEngine::new(12345);
        let direct = engine.noise_4d(1.1, 2.2, 3.3, 4.4);
        assert_eq!(engine.memoized_4d(1.1, 2.2, 3.3, 4.4), direct);
        assert_eq!(engine.memoized_4d(1.1, 2.2, 3.3, 4.4), direct);
        assert_eq!((engine.cache_hits(), engine.cache_misses()), (1, 1));

        let mut uncached = NoiseEngine::with_config(&NoiseConfig {
            enable_caching: false,
            ..NoiseConfig::with_seed(12345)
        })
        .unwrap();
        assert_eq!(uncached.memoized_4d(1.1, 2.2, 3.3, 4.4), direct);
        assert_eq!((uncached.cache_hits(), uncached.cache_misses()), (0, 0));
    }

    #[test]
    fn fill_errors() {
        let engine = NoiseEngine::new(1);
        let mut out = [0.0; 8];
        assert_eq!(
            engine.fill_2d(0.0, 0.0, 0, 2, 1.0, &mut out),
            Err(EngineError::InvalidDimensions {
                width: 0,
                height: 2,
                depth: 1
            })
        );
        assert_eq!(
            engine.fill_3d(0.0, 0.0, 0.0, 2, 2, 0, 1.0, &mut out),
            Err(EngineError::InvalidDimensions {
                width: 2,
                height: 2,
                depth: 0
            })
        );
        assert_eq!(
            engine.fill_2d(0.0, 0.0, 3, 3, 1.0, &mut out),
            Err(EngineError::BufferTooSmall { needed: 9, len: 8 })
        );
        assert!(engine.fill_2d(0.0, 0.0, usize::MAX, 2, 1.0, &mut out).is_err());
        assert_eq!(out, [0.0; 8]);
    }

    #[test]
    fn fill_3d_is_row_major() {
        let engine = NoiseEngine::new(8);
        let (w, h, d) = (3, 2, 2);
        let mut out = vec![f64::NAN; w * h * d + 1];
        engine
            .fill_3d(-1.0, 0.5, 2.0, w, h, d, 0.25, &mut out)
            .unwrap();
        for z in 0..d {
            for y in 0..h {
                for x in 0..w {
                    let expected = engine.noise_3d(
                        -1.0 + x as f64 * 0.25,
                        0.5 + y as f64 * 0.25,
                        2.0 + z as f64 * 0.25,
                    );
                    assert_eq!(out[(z * h + y) * w + x], expected);
                }
            }
        }
        assert!(out[w * h * d].is_nan());
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<NoiseEngine>();
    }
}
