//! Contains common imports

pub use crate::{
    NoiseFunction, Scaled,
    cache::NoiseCache,
    config::{ConfigError, ConfigKey, NoiseConfig, NoiseVariant, Precision},
    curves::Interpolation,
    engine::{EngineError, Lifecycle, NoiseEngine, PerfStats},
    layering::{DomainWarp, Fbm, HybridMultifractal, Octaves},
    math_noise::{Abs, Billowy, OneMinus, Ridged},
    permutation::PermutationTable,
    rng::{AnyPrng, Prng, PrngAlgorithm},
    simplex::Simplex,
};
