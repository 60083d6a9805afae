//! Defines the seedable pseudo random generators that shuffle the permutation table.
//! Every generator is fully determined by its seed, so the same seed always reproduces the same noise field.

use tracing::warn;

/// A deterministic 32-bit generator.
pub trait Prng {
    /// Resets the generator to the state derived from `seed`.
    fn reseed(&mut self, seed: u32);

    /// Advances the generator, producing the next `u32`.
    fn next_u32(&mut self) -> u32;
}

/// Selects which [`Prng`] an engine shuffles its permutation table with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum PrngAlgorithm {
    /// See [`Lcg`].
    Lcg,
    /// See [`MersenneTwister`].
    MersenneTwister,
    /// See [`Xorshift128Plus`].
    Xorshift,
    /// See [`Pcg32`].
    #[default]
    Pcg,
}

impl PrngAlgorithm {
    /// Every algorithm, ordered by [`index`](Self::index).
    pub const ALL: [Self; 4] = [Self::Lcg, Self::MersenneTwister, Self::Xorshift, Self::Pcg];

    /// Looks up an algorithm by its numeric selector.
    /// Unknown selectors fall back to [`PrngAlgorithm::Lcg`]. This is not an error.
    pub fn from_index(index: u32) -> Self {
        match Self::ALL.get(index as usize) {
            Some(algorithm) => *algorithm,
            None => {
                warn!(index, "unrecognized prng selector, falling back to lcg");
                Self::Lcg
            }
        }
    }

    /// The numeric selector of this algorithm.
    pub fn index(self) -> u32 {
        self as u32
    }
}

/// A linear congruential generator, `state = state * 1103515245 + 12345`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg(pub u32);

impl Lcg {
    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        Self(seed)
    }
}

impl Prng for Lcg {
    #[inline]
    fn reseed(&mut self, seed: u32) {
        self.0 = seed;
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        self.0
    }
}

/// The classic 32-bit Mersenne Twister (MT19937).
///
/// The 624-word block is regenerated lazily: on the first draw after seeding,
/// and each time the block has been used up.
#[derive(Clone, PartialEq, Eq)]
pub struct MersenneTwister {
    state: [u32; Self::WORDS],
    index: usize,
}

impl MersenneTwister {
    const WORDS: usize = 624;
    const SHIFT: usize = 397;
    const MATRIX: u32 = 0x9908_B0DF;

    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        let mut result = Self {
            state: [0; Self::WORDS],
            index: 0,
        };
        result.reseed(seed);
        result
    }

    fn regenerate(&mut self) {
        for i in 0..Self::WORDS {
            let y = (self.state[i] & 0x8000_0000)
                .wrapping_add(self.state[(i + 1) % Self::WORDS] & 0x7FFF_FFFF);
            let mut next = self.state[(i + Self::SHIFT) % Self::WORDS] ^ (y >> 1);
            if y % 2 != 0 {
                next ^= Self::MATRIX;
            }
            self.state[i] = next;
        }
    }
}

impl core::fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl Prng for MersenneTwister {
    fn reseed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..Self::WORDS {
            let prev = self.state[i - 1];
            self.state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = 0;
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        if self.index == 0 {
            self.regenerate();
        }
        let mut y = self.state[self.index];
        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^= y >> 18;
        self.index = (self.index + 1) % Self::WORDS;
        y
    }
}

/// A four word xorshift generator in the xorshift128 family.
/// Each word is 64 bits wide and draws return the low 32 bits of the newest word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xorshift128Plus {
    state: [u64; 4],
}

impl Xorshift128Plus {
    /// Masks that spread a single seed over the four state words.
    const SEED_MASKS: [u64; 4] = [
        0,
        0x1234_5678_9ABC_DEF0,
        0xFEDC_BA98_7654_3210,
        0x1357_9BDF_2468_ACE0,
    ];

    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        let mut result = Self { state: [0; 4] };
        result.reseed(seed);
        result
    }
}

impl Prng for Xorshift128Plus {
    #[inline]
    fn reseed(&mut self, seed: u32) {
        let seed = seed as u64;
        self.state = Self::SEED_MASKS.map(|mask| seed ^ mask);
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        let [mut t, a, b, s] = self.state;
        t ^= t << 11;
        t ^= t >> 8;
        let newest = t ^ s ^ (s >> 19);
        self.state = [a, b, s, newest];
        newest as u32
    }
}

/// A PCG32 generator: a 64-bit LCG whose high bits are permuted by an xorshift and a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
    increment: u64,
}

impl Pcg32 {
    const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        let mut result = Self {
            state: 0,
            increment: 1,
        };
        result.reseed(seed);
        result
    }
}

impl Prng for Pcg32 {
    fn reseed(&mut self, seed: u32) {
        let seed = seed as u64;
        self.state = 0;
        self.increment = (seed << 1) | 1;
        self.next_u32();
        self.state = self.state.wrapping_add(seed);
        self.next_u32();
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = old
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(self.increment);
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rotation = (old >> 59) as u32;
        xorshifted.rotate_right(rotation)
    }
}

/// Holds exactly one live generator, chosen by [`PrngAlgorithm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyPrng {
    /// See [`Lcg`].
    Lcg(Lcg),
    /// See [`MersenneTwister`]. Boxed since its state is much larger than the others.
    MersenneTwister(Box<MersenneTwister>),
    /// See [`Xorshift128Plus`].
    Xorshift(Xorshift128Plus),
    /// See [`Pcg32`].
    Pcg(Pcg32),
}

impl AnyPrng {
    /// Creates the generator for `algorithm`, seeded with `seed`.
    pub fn new(algorithm: PrngAlgorithm, seed: u32) -> Self {
        match algorithm {
            PrngAlgorithm::Lcg => Self::Lcg(Lcg::new(seed)),
            PrngAlgorithm::MersenneTwister => {
                Self::MersenneTwister(Box::new(MersenneTwister::new(seed)))
            }
            PrngAlgorithm::Xorshift => Self::Xorshift(Xorshift128Plus::new(seed)),
            PrngAlgorithm::Pcg => Self::Pcg(Pcg32::new(seed)),
        }
    }

    /// The algorithm of the live generator.
    pub fn algorithm(&self) -> PrngAlgorithm {
        match self {
            Self::Lcg(_) => PrngAlgorithm::Lcg,
            Self::MersenneTwister(_) => PrngAlgorithm::MersenneTwister,
            Self::Xorshift(_) => PrngAlgorithm::Xorshift,
            Self::Pcg(_) => PrngAlgorithm::Pcg,
        }
    }
}

impl Prng for AnyPrng {
    fn reseed(&mut self, seed: u32) {
        match self {
            Self::Lcg(rng) => rng.reseed(seed),
            Self::MersenneTwister(rng) => rng.reseed(seed),
            Self::Xorshift(rng) => rng.reseed(seed),
            Self::Pcg(rng) => rng.reseed(seed),
        }
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            Self::Lcg(rng) => rng.next_u32(),
            Self::MersenneTwister(rng) => rng.next_u32(),
            Self::Xorshift(rng) => rng.next_u32(),
            Self::Pcg(rng) => rng.next_u32(),
        }
    }
}
