//! Contains small math-based [`NoiseFunction`]s that post-process another function's output.
//! Chained after [`Simplex`] in a tuple, they produce the billowy and ridged variants.

use bevy_math::{DVec2, DVec3, DVec4};

use crate::{NoiseFunction, permutation::PermutationTable, simplex::Simplex};

/// A [`NoiseFunction`] that takes the absolute value of its input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Abs;

/// A [`NoiseFunction`] that subtracts its input from 1.0, ex: `1.0 - input`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct OneMinus;

/// Simplex noise folded at zero, `|n|`. Valleys become sharp creases and outputs land in `[0, 1]`.
pub type Billowy = (Simplex, Abs);

/// Inverted [`Billowy`] noise, `1 - |n|`. The creases become sharp ridges.
pub type Ridged = (Simplex, Abs, OneMinus);

macro_rules! impl_vector_spaces {
    ($n:ty) => {
        impl NoiseFunction<$n> for Abs {
            type Output = $n;

            #[inline]
            fn evaluate(&self, input: $n, _table: &PermutationTable) -> Self::Output {
                input.abs()
            }
        }

        impl NoiseFunction<$n> for OneMinus {
            type Output = $n;

            #[inline]
            fn evaluate(&self, input: $n, _table: &PermutationTable) -> Self::Output {
                1.0 - input
            }
        }
    };
}

impl_vector_spaces!(f64);
impl_vector_spaces!(DVec2);
impl_vector_spaces!(DVec3);
impl_vector_spaces!(DVec4);
