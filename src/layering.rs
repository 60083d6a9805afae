//! Contains fractal layering: several passes ("octaves") of a [`NoiseFunction`] at rising frequency and falling amplitude, combined into one value.

use core::ops::Mul;

use bevy_math::DVec2;

use crate::{NoiseFunction, permutation::PermutationTable};

/// Settings for how octaves are spaced and weighted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Octaves {
    /// How many passes of the inner noise to take.
    pub count: u32,
    /// The amplitude multiplier between one octave and the next.
    pub persistence: f64,
    /// The frequency multiplier between one octave and the next.
    /// Ex: if this is 3, each octave will operate on 1/3 the scale.
    pub lacunarity: f64,
}

impl Default for Octaves {
    fn default() -> Self {
        Self {
            count: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl Octaves {
    /// Creates settings for `count` octaves.
    pub fn new(count: u32, persistence: f64, lacunarity: f64) -> Self {
        Self {
            count,
            persistence,
            lacunarity,
        }
    }

    /// Iterates the octaves, starting at frequency 1 and amplitude 1.
    #[inline]
    pub fn layers(&self) -> OctaveLayers {
        OctaveLayers {
            remaining: self.count,
            persistence: self.persistence,
            lacunarity: self.lacunarity,
            next: Layer {
                frequency: 1.0,
                amplitude: 1.0,
            },
        }
    }
}

/// The frequency and amplitude of one octave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// The multiplier applied to the input.
    pub frequency: f64,
    /// The weight of the output.
    pub amplitude: f64,
}

/// The iterator from [`Octaves::layers`].
#[derive(Debug, Clone)]
pub struct OctaveLayers {
    remaining: u32,
    persistence: f64,
    lacunarity: f64,
    next: Layer,
}

impl Iterator for OctaveLayers {
    type Item = Layer;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let result = self.next;
        self.next.amplitude *= self.persistence;
        self.next.frequency *= self.lacunarity;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

/// Fractal brownian motion: the amplitude weighted sum of every octave, divided by the total amplitude.
///
/// With persistence in `[0, 1]` and an inner function in `[-1, 1]`, the result stays in `[-1, 1]`.
/// Zero octaves produce 0.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Fbm<N> {
    /// The [`NoiseFunction`] sampled each octave.
    pub noise: N,
    /// The octave settings.
    pub octaves: Octaves,
}

impl<N> Fbm<N> {
    /// Creates fbm over `noise`.
    pub fn new(noise: N, octaves: Octaves) -> Self {
        Self { noise, octaves }
    }
}

impl<I, N> NoiseFunction<I> for Fbm<N>
where
    I: Copy + Mul<f64, Output = I>,
    N: NoiseFunction<I, Output = f64>,
{
    type Output = f64;

    #[inline]
    fn evaluate(&self, input: I, table: &PermutationTable) -> Self::Output {
        if self.octaves.count == 0 {
            return 0.0;
        }
        let mut value = 0.0;
        let mut total_amplitude = 0.0;
        for layer in self.octaves.layers() {
            value += self.noise.evaluate(input * layer.frequency, table) * layer.amplitude;
            total_amplitude += layer.amplitude;
        }
        value / total_amplitude
    }
}

/// Hybrid multifractal: the product over every octave of `(offset + |n|) * amplitude`.
///
/// This is not normalized. Its range depends on the offset and grows or shrinks with the octave count,
/// so it should not be assumed to be within `[-1, 1]`.
/// Zero octaves produce the empty product, 1.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct HybridMultifractal<N> {
    /// The [`NoiseFunction`] sampled each octave.
    pub noise: N,
    /// The octave settings.
    pub octaves: Octaves,
    /// Added to the magnitude of each octave before it is multiplied in.
    pub offset: f64,
}

impl<N> HybridMultifractal<N> {
    /// Creates a hybrid multifractal over `noise`.
    pub fn new(noise: N, octaves: Octaves, offset: f64) -> Self {
        Self {
            noise,
            octaves,
            offset,
        }
    }
}

impl<I, N> NoiseFunction<I> for HybridMultifractal<N>
where
    I: Copy + Mul<f64, Output = I>,
    N: NoiseFunction<I, Output = f64>,
{
    type Output = f64;

    #[inline]
    fn evaluate(&self, input: I, table: &PermutationTable) -> Self::Output {
        self.octaves.layers().fold(1.0, |value, layer| {
            let noise = self.noise.evaluate(input * layer.frequency, table);
            value * ((self.offset + noise.abs()) * layer.amplitude)
        })
    }
}

/// Domain warping: displaces the input by two decorrelated samples of the noise, then samples it again at the displaced point.
///
/// The y displacement is sampled at the input shifted by [`DomainWarp::DECORRELATION`].
/// A strength of 0 leaves the input untouched, so the result equals sampling the inner noise directly.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainWarp<N> {
    /// The [`NoiseFunction`] doing both the warping and the final sample.
    pub noise: N,
    /// How far, in input units, a full scale sample displaces the input.
    pub strength: f64,
}

impl<N> DomainWarp<N> {
    /// The shift between the x and y displacement fields.
    pub const DECORRELATION: f64 = 100.0;

    /// Creates a warp of `noise` by itself.
    pub fn new(noise: N, strength: f64) -> Self {
        Self { noise, strength }
    }
}

impl<N: NoiseFunction<DVec2, Output = f64>> NoiseFunction<DVec2> for DomainWarp<N> {
    type Output = f64;

    #[inline]
    fn evaluate(&self, input: DVec2, table: &PermutationTable) -> Self::Output {
        let displacement = DVec2::new(
            self.noise.evaluate(input, table),
            self.noise
                .evaluate(input + DVec2::splat(Self::DECORRELATION), table),
        );
        self.noise
            .evaluate(input + displacement * self.strength, table)
    }
}
