//! Contains the interpolation curves a configuration can name.
//!
//! The simplex kernels use their own radial falloff and never read these,
//! but each curve is also a [`NoiseFunction`] so it can reshape a noise output in a tuple chain.

use crate::{NoiseFunction, permutation::PermutationTable};

/// An easing curve over the unit interval.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Interpolation {
    /// `t`.
    Linear,
    /// The classic smoothstep, `t²(3 - 2t)`. This has a smooth derivative.
    Cubic,
    /// `t²(2t - 3) + 1`, the cubic Hermite basis that falls from 1 to 0.
    Hermite,
    /// The quintic smootherstep, `t³(t(6t - 15) + 10)`. This has a smooth second derivative.
    #[default]
    Smoothstep,
}

impl Interpolation {
    /// Every curve, ordered by [`index`](Self::index).
    pub const ALL: [Self; 4] = [Self::Linear, Self::Cubic, Self::Hermite, Self::Smoothstep];

    /// Looks up a curve by its numeric selector.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The numeric selector of this curve.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Samples the curve at `t`. Inputs outside `[0, 1]` are extrapolated, not clamped.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Cubic => t * t * (3.0 - 2.0 * t),
            Self::Hermite => t * t * (2.0 * t - 3.0) + 1.0,
            Self::Smoothstep => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
        }
    }
}

impl NoiseFunction<f64> for Interpolation {
    type Output = f64;

    #[inline]
    fn evaluate(&self, input: f64, _table: &PermutationTable) -> Self::Output {
        self.apply(input)
    }
}
