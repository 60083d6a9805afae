//! The lattice permutation table that every kernel hashes corners through.

use bevy_math::{IVec2, IVec3, IVec4, Vec3Swizzles, Vec4Swizzles};

use crate::rng::Prng;

/// A 512 entry lookup table.
///
/// The first 256 entries are a permutation of `0..=255`, and the last 256 repeat them,
/// so two chained lookups never need a modulo.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable([u8; TABLE_LEN]);

const TABLE_LEN: usize = 512;

impl PermutationTable {
    /// The number of entries, including the duplicated half.
    pub const LEN: usize = TABLE_LEN;

    /// The table that maps every index to itself.
    pub fn identity() -> Self {
        Self(core::array::from_fn(|i| i as u8))
    }

    /// Builds a table by shuffling the identity with `rng`.
    ///
    /// This is a Fisher–Yates shuffle from index 255 down to 1, drawing `j = next % (i + 1)`.
    pub fn build(rng: &mut impl Prng) -> Self {
        let mut table = [0u8; TABLE_LEN];
        let (low, high) = table.split_at_mut(256);
        for (i, slot) in low.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for i in (1..256usize).rev() {
            let j = (rng.next_u32() % (i as u32 + 1)) as usize;
            low.swap(i, j);
        }
        high.copy_from_slice(low);
        Self(table)
    }

    /// The raw entries.
    #[inline]
    pub fn entries(&self) -> &[u8; TABLE_LEN] {
        &self.0
    }

    /// Gets the entry at `index`, which must be less than [`LEN`](Self::LEN).
    #[inline(always)]
    pub fn get(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Returns true if the first half is a bijection on `0..=255` and the second half duplicates it.
    pub fn is_valid(&self) -> bool {
        let mut seen = [false; 256];
        for &value in &self.0[..256] {
            if core::mem::replace(&mut seen[value as usize], true) {
                return false;
            }
        }
        self.0[..256] == self.0[256..]
    }

    /// Hashes a 1D lattice coordinate.
    #[inline(always)]
    pub fn hash1(&self, i: i32) -> usize {
        self.get(wrap(i)) as usize
    }

    /// Hashes a 2D lattice coordinate, chaining from the last axis outward.
    #[inline(always)]
    pub fn hash2(&self, cell: IVec2) -> usize {
        self.get(wrap(cell.x) + self.hash1(cell.y)) as usize
    }

    /// Hashes a 3D lattice coordinate, chaining from the last axis outward.
    #[inline(always)]
    pub fn hash3(&self, cell: IVec3) -> usize {
        self.get(wrap(cell.x) + self.hash2(cell.yz())) as usize
    }

    /// Hashes a 4D lattice coordinate, chaining from the last axis outward.
    #[inline(always)]
    pub fn hash4(&self, cell: IVec4) -> usize {
        self.get(wrap(cell.x) + self.hash3(cell.yzw())) as usize
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::identity()
    }
}

impl core::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("PermutationTable")
            .field(&&self.0[..8])
            .finish_non_exhaustive()
    }
}

/// Lattice coordinates alias with a period of 256.
#[inline(always)]
fn wrap(i: i32) -> usize {
    (i & 255) as usize
}
