//! The simplex kernels for one to four dimensions.
//!
//! Each kernel skews its input onto a grid of hypercubes, finds the simplex containing it,
//! and sums a radially attenuated gradient contribution from every corner of that simplex.

use bevy_math::{DVec2, DVec3, DVec4, IVec2, IVec3, IVec4};

use crate::{
    NoiseFunction,
    gradients::{GRAD2, GRAD3, GRAD4},
    permutation::PermutationTable,
};

/// Skews 2D space onto the square grid.
pub const F2: f64 = 0.366_025_403_784_438_6;
/// Unskews the square grid back into 2D space.
pub const G2: f64 = 0.211_324_865_405_187_13;
/// Skews 3D space onto the cube grid.
pub const F3: f64 = 1.0 / 3.0;
/// Unskews the cube grid back into 3D space.
pub const G3: f64 = 1.0 / 6.0;
/// Skews 4D space onto the tesseract grid.
pub const F4: f64 = 0.309_016_994_374_947_45;
/// Unskews the tesseract grid back into 4D space.
pub const G4: f64 = 0.138_196_601_125_010_5;

/// Orders the corners of a 4D simplex.
///
/// The index packs six pairwise comparisons of the cell offset
/// (`x>y`, `x>z`, `y>z`, `x>w`, `y>w`, `z>w`, most significant first).
/// Each row gives every axis a rank from 0 to 3; an axis steps once its rank reaches the corner's threshold.
/// Rows that no ordering can produce are zeroed.
#[rustfmt::skip]
const SIMPLEX_4D: [[u8; 4]; 64] = [
    [0, 1, 2, 3], [0, 1, 3, 2], [0, 0, 0, 0], [0, 2, 3, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 2, 3, 0],
    [0, 2, 1, 3], [0, 0, 0, 0], [0, 3, 1, 2], [0, 3, 2, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 3, 2, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [1, 2, 0, 3], [0, 0, 0, 0], [1, 3, 0, 2], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [2, 3, 0, 1], [2, 3, 1, 0],
    [1, 0, 2, 3], [1, 0, 3, 2], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [2, 0, 3, 1], [0, 0, 0, 0], [2, 1, 3, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [2, 0, 1, 3], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [3, 0, 1, 2], [3, 0, 2, 1], [0, 0, 0, 0], [3, 1, 2, 0],
    [2, 1, 0, 3], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [3, 1, 0, 2], [0, 0, 0, 0], [3, 2, 0, 1], [3, 2, 1, 0],
];

/// Classic simplex noise.
///
/// Outputs of 2D, 3D and 4D inputs stay within about `[-1, 1]`; the per-dimension scale factors are empirical, not a proven bound.
/// 1D inputs are not bounded that way: a single lattice segment can reach past `±10`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Simplex;

/// `radius_sq - |offset|²`, subtracting one axis at a time.
#[inline(always)]
fn falloff<const N: usize>(radius_sq: f64, offset: [f64; N]) -> f64 {
    offset.iter().fold(radius_sq, |t, c| t - c * c)
}

/// The contribution of one corner. Corners past the falloff radius contribute nothing.
#[inline(always)]
fn contribution(falloff: f64, gradient_dot: impl FnOnce() -> f64) -> f64 {
    if falloff < 0.0 {
        return 0.0;
    }
    let t2 = falloff * falloff;
    t2 * t2 * gradient_dot()
}

impl NoiseFunction<f64> for Simplex {
    type Output = f64;

    #[inline]
    fn evaluate(&self, input: f64, table: &PermutationTable) -> Self::Output {
        let cell = input.floor();
        let i = cell as i32;
        let d0 = input - cell;
        let d1 = d0 - 1.0;

        let near = contribution(falloff(1.0, [d0]), || {
            GRAD2[table.hash1(i) & 7].dot(DVec2::new(d0, 0.0))
        });
        let far = contribution(falloff(1.0, [d1]), || {
            GRAD2[table.hash1(i.wrapping_add(1)) & 7].dot(DVec2::new(d1, 0.0))
        });
        70.0 * (near + far)
    }
}

impl NoiseFunction<DVec2> for Simplex {
    type Output = f64;

    #[inline]
    fn evaluate(&self, input: DVec2, table: &PermutationTable) -> Self::Output {
        let skew = input.element_sum() * F2;
        let cell = (input + skew).floor().as_ivec2();
        let unskew = cell.as_dvec2().element_sum() * G2;
        let d0 = input - (cell.as_dvec2() - unskew);

        let middle = if d0.x > d0.y { IVec2::X } else { IVec2::Y };

        let sum = [IVec2::ZERO, middle, IVec2::ONE]
            .into_iter()
            .enumerate()
            .map(|(n, corner)| {
                let offset = d0 - corner.as_dvec2() + n as f64 * G2;
                contribution(falloff(0.5, offset.to_array()), || {
                    GRAD2[table.hash2(cell.wrapping_add(corner)) % GRAD2.len()].dot(offset)
                })
            })
            .sum::<f64>();
        70.0 * sum
    }
}

impl NoiseFunction<DVec3> for Simplex {
    type Output = f64;

    #[inline]
    fn evaluate(&self, input: DVec3, table: &PermutationTable) -> Self::Output {
        let skew = input.element_sum() * F3;
        let cell = (input + skew).floor().as_ivec3();
        let unskew = cell.as_dvec3().element_sum() * G3;
        let d0 = input - (cell.as_dvec3() - unskew);

        let (first, second) = if d0.x >= d0.y {
            if d0.y >= d0.z {
                (IVec3::X, IVec3::new(1, 1, 0))
            } else if d0.x >= d0.z {
                (IVec3::X, IVec3::new(1, 0, 1))
            } else {
                (IVec3::Z, IVec3::new(1, 0, 1))
            }
        } else if d0.y < d0.z {
            (IVec3::Z, IVec3::new(0, 1, 1))
        } else if d0.x < d0.z {
            (IVec3::Y, IVec3::new(0, 1, 1))
        } else {
            (IVec3::Y, IVec3::new(1, 1, 0))
        };

        let sum = [IVec3::ZERO, first, second, IVec3::ONE]
            .into_iter()
            .enumerate()
            .map(|(n, corner)| {
                let offset = d0 - corner.as_dvec3() + n as f64 * G3;
                contribution(falloff(0.6, offset.to_array()), || {
                    GRAD3[table.hash3(cell.wrapping_add(corner)) % GRAD3.len()].dot(offset)
                })
            })
            .sum::<f64>();
        32.0 * sum
    }
}

impl NoiseFunction<DVec4> for Simplex {
    type Output = f64;

    #[inline]
    fn evaluate(&self, input: DVec4, table: &PermutationTable) -> Self::Output {
        let skew = input.element_sum() * F4;
        let cell = (input + skew).floor().as_ivec4();
        let unskew = cell.as_dvec4().element_sum() * G4;
        let d0 = input - (cell.as_dvec4() - unskew);

        let order = (((d0.x > d0.y) as usize) << 5)
            | (((d0.x > d0.z) as usize) << 4)
            | (((d0.y > d0.z) as usize) << 3)
            | (((d0.x > d0.w) as usize) << 2)
            | (((d0.y > d0.w) as usize) << 1)
            | ((d0.z > d0.w) as usize);
        let ranks = SIMPLEX_4D[order];
        let step = |threshold: u8| IVec4::from_array(ranks.map(|rank| (rank >= threshold) as i32));

        let sum = [IVec4::ZERO, step(3), step(2), step(1), IVec4::ONE]
            .into_iter()
            .enumerate()
            .map(|(n, corner)| {
                let offset = d0 - corner.as_dvec4() + n as f64 * G4;
                contribution(falloff(0.6, offset.to_array()), || {
                    GRAD4[table.hash4(cell.wrapping_add(corner)) % GRAD4.len()].dot(offset)
                })
            })
            .sum::<f64>();
        27.0 * sum
    }
}
